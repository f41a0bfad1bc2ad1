//! Wire shape of a detail response and the normalized record built from it.
//!
//! The API wraps every detail in `{ "result": { "properties": { .. } } }`.
//! Only `properties` is trusted; everything else in the body is ignored.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::utils::format::{normalize_description, present, value_text};

/// Field guaranteed on every normalized record.
pub const DESCRIPTION_FIELD: &str = "description";

/// Field that must be present and non-empty for a response to be accepted.
pub const NAME_FIELD: &str = "name";

// API Response wrappers
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawApiResponse {
    #[serde(default)]
    pub result: Option<RawResult>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawResult {
    #[serde(default)]
    pub properties: Option<Map<String, Value>>,
}

/// Outcome of the parse step: either a trusted properties object or the
/// reason the body was rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedResponse {
    Valid(Map<String, Value>),
    Malformed(String),
}

impl ParsedResponse {
    /// Parse a response body and validate the nested properties object.
    pub fn from_body(body: &str) -> Self {
        match serde_json::from_str::<RawApiResponse>(body) {
            Ok(raw) => Self::from_raw(raw),
            Err(e) => ParsedResponse::Malformed(format!("body is not a detail response: {}", e)),
        }
    }

    pub fn from_raw(raw: RawApiResponse) -> Self {
        let Some(properties) = raw.result.and_then(|r| r.properties) else {
            return ParsedResponse::Malformed("missing result.properties".to_string());
        };

        // Untrimmed: a whitespace-only name is still a name
        let has_name = properties
            .get(NAME_FIELD)
            .and_then(value_text)
            .map(|name| !name.is_empty())
            .unwrap_or(false);
        if !has_name {
            return ParsedResponse::Malformed("properties has no name".to_string());
        }

        ParsedResponse::Valid(properties)
    }
}

/// A flattened, cache-ready entity record.
///
/// Holds a copy of the validated properties plus a `description` string that
/// is always present (empty when the source omitted it).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NormalizedRecord {
    fields: Map<String, Value>,
}

impl NormalizedRecord {
    pub fn from_properties(properties: Map<String, Value>) -> Self {
        let description = normalize_description(&properties);
        let mut fields = properties;
        fields.insert(DESCRIPTION_FIELD.to_string(), Value::String(description));
        Self { fields }
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Trimmed text of a field, or `None` when it is missing.
    pub fn text(&self, field: &str) -> Option<String> {
        present(self.get(field))
    }

    pub fn name(&self) -> String {
        self.text(NAME_FIELD).unwrap_or_default()
    }

    pub fn description(&self) -> &str {
        self.fields
            .get(DESCRIPTION_FIELD)
            .and_then(Value::as_str)
            .unwrap_or("")
    }
}
