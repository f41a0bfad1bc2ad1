//! Completeness scoring for normalized records.
//!
//! A record is incomplete when at least [`INCOMPLETE_THRESHOLD`] of its type's
//! required fields are missing. The verdict is never stored; callers recompute
//! it from the cached record whenever they display one.

use crate::models::{EntityType, NormalizedRecord};
use crate::utils::format::is_missing;

/// Missing required fields at or above which a record is flagged incomplete.
pub const INCOMPLETE_THRESHOLD: usize = 2;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletenessVerdict {
    /// Required fields that were missing, in the type's field order.
    pub missing: Vec<&'static str>,
}

impl CompletenessVerdict {
    pub fn is_incomplete(&self) -> bool {
        self.missing.len() >= INCOMPLETE_THRESHOLD
    }
}

/// Required fields for a type name; empty for unrecognized types.
pub fn required_fields(type_name: &str) -> &'static [&'static str] {
    EntityType::parse(type_name)
        .map(|kind| kind.required_fields())
        .unwrap_or(&[])
}

/// Classify a record by its type name. Unrecognized types are always complete.
pub fn classify(type_name: &str, record: &NormalizedRecord) -> CompletenessVerdict {
    let missing = required_fields(type_name)
        .iter()
        .copied()
        .filter(|field| is_missing(record.get(field)))
        .collect();
    CompletenessVerdict { missing }
}
