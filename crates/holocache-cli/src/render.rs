//! Plain-text rendering of a fetched record or a failed fetch.

use holocache_core::completeness::classify;
use holocache_core::utils::format::{description_text, pretty};
use holocache_core::{EntityType, FetchError, NormalizedRecord};

/// Banner shown above records flagged incomplete.
const INCOMPLETE_BANNER: &str = "! This entry has incomplete information in the API.";

/// Width of the field label column.
const LABEL_WIDTH: usize = 16;

pub fn render_record(type_name: &str, record: &NormalizedRecord, cached_age: Option<&str>) -> String {
    let mut out = String::new();

    if classify(type_name, record).is_incomplete() {
        out.push_str(INCOMPLETE_BANNER);
        out.push_str("\n\n");
    }

    let name = record.name();
    out.push_str(&format!("{}\n{}\n", name, "=".repeat(name.chars().count().max(1))));
    if let Some(age) = cached_age {
        out.push_str(&format!("(cached {})\n", age));
    }
    out.push('\n');

    out.push_str(&format!(
        "Description\n  {}\n\n",
        description_text(record.description())
    ));

    if let Some(kind) = EntityType::parse(type_name) {
        out.push_str("Specifications\n");
        for (field, label) in kind.display_fields() {
            out.push_str(&format!(
                "  {:<width$}{}\n",
                format!("{}:", label),
                pretty(record.get(field)),
                width = LABEL_WIDTH
            ));
        }
    }

    out
}

pub fn render_error(type_name: &str, id: &str, err: &FetchError) -> String {
    format!(
        "Could not load this entry\n  Type: {} - ID: {}\n  Error: {}\n",
        type_name, id, err
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: serde_json::Value) -> NormalizedRecord {
        NormalizedRecord::from_properties(value.as_object().cloned().unwrap())
    }

    #[test]
    fn test_incomplete_character() {
        let luke = record(json!({
            "name": "Luke Skywalker",
            "eye_color": "blue",
            "birth_year": "19BBY"
        }));
        let text = render_record("character", &luke, None);
        assert!(text.starts_with(INCOMPLETE_BANNER));
        assert!(text.contains("Luke Skywalker"));
        assert!(text.contains("No description available."));
        assert!(text.contains("Gender:         Not available"));
        assert!(text.contains("Eye color:      blue"));
        assert!(!text.contains("(cached"));
    }

    #[test]
    fn test_complete_planet_has_no_banner() {
        let tatooine = record(json!({
            "name": "Tatooine",
            "description": "A desert world",
            "climate": "arid",
            "terrain": "desert",
            "population": "200000"
        }));
        let text = render_record("planet", &tatooine, Some("5m ago"));
        assert!(!text.contains(INCOMPLETE_BANNER));
        assert!(text.contains("A desert world"));
        assert!(text.contains("Population:     200000"));
        assert!(text.contains("(cached 5m ago)"));
    }

    #[test]
    fn test_error_mentions_type_and_id() {
        let text = render_error("starship", "9", &FetchError::RemoteError { status: 404 });
        assert!(text.contains("Type: starship - ID: 9"));
        assert!(text.contains("status 404"));
    }
}
