use serde_json::{Map, Value};

/// Display text for any field whose value is missing.
pub const NOT_AVAILABLE: &str = "Not available";

/// Display text for a record whose description is missing.
/// Deliberately different from [`NOT_AVAILABLE`].
pub const DESCRIPTION_FALLBACK: &str = "No description available.";

/// Plain string form of a JSON value, untrimmed. `None` for null.
pub fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Array(items) => Some(
            items
                .iter()
                .map(|v| value_text(v).unwrap_or_default())
                .collect::<Vec<_>>()
                .join(","),
        ),
        other => Some(other.to_string()),
    }
}

/// Trimmed text of a field value, or `None` when the value is absent, null,
/// or blank after trimming.
pub fn present(value: Option<&Value>) -> Option<String> {
    let text = value_text(value?)?;
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Display form of a field value: trimmed text, or [`NOT_AVAILABLE`].
pub fn pretty(value: Option<&Value>) -> String {
    present(value).unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// True when [`pretty`] would fall back to [`NOT_AVAILABLE`].
///
/// Computed from presence rather than by comparing display text, so a source
/// value that happens to read "Not available" still counts as present.
pub fn is_missing(value: Option<&Value>) -> bool {
    present(value).is_none()
}

/// Source description from a properties object, or `""` when absent.
/// An explicitly empty or null description is treated the same as an absent one.
pub fn normalize_description(properties: &Map<String, Value>) -> String {
    properties
        .get("description")
        .and_then(value_text)
        .unwrap_or_default()
}

/// Description to show for a record: the stored text, or [`DESCRIPTION_FALLBACK`].
pub fn description_text(description: &str) -> String {
    if description.trim().is_empty() {
        DESCRIPTION_FALLBACK.to_string()
    } else {
        description.to_string()
    }
}

/// Truncate a string to a maximum length, adding ellipsis if needed
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let truncated: String = s.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    }
}
