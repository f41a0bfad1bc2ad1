use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Character,
    Planet,
    Starship,
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EntityType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| s.to_string())
    }
}

impl EntityType {
    pub const ALL: [EntityType; 3] = [
        EntityType::Character,
        EntityType::Planet,
        EntityType::Starship,
    ];

    /// Parse a type name as used in routes and cache keys. Exact, lowercase match.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "character" => Some(EntityType::Character),
            "planet" => Some(EntityType::Planet),
            "starship" => Some(EntityType::Starship),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityType::Character => "character",
            EntityType::Planet => "planet",
            EntityType::Starship => "starship",
        }
    }

    /// Remote sub-resource path segment for this type.
    pub fn subresource(&self) -> &'static str {
        match self {
            EntityType::Character => "people",
            EntityType::Planet => "planets",
            EntityType::Starship => "starships",
        }
    }

    /// Fields scored by the completeness classifier, in display order.
    pub fn required_fields(&self) -> &'static [&'static str] {
        match self {
            EntityType::Character => &["gender", "hair_color", "eye_color", "birth_year"],
            EntityType::Planet => &["climate", "terrain", "population"],
            EntityType::Starship => &["model", "manufacturer", "cost_in_credits"],
        }
    }

    /// (field, label) pairs for the detail view's spec grid.
    pub fn display_fields(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            EntityType::Character => &[
                ("gender", "Gender"),
                ("hair_color", "Hair color"),
                ("eye_color", "Eye color"),
                ("birth_year", "Birth year"),
            ],
            EntityType::Planet => &[
                ("climate", "Climate"),
                ("terrain", "Terrain"),
                ("population", "Population"),
            ],
            EntityType::Starship => &[
                ("model", "Model"),
                ("manufacturer", "Manufacturer"),
                ("cost_in_credits", "Cost (credits)"),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_names() {
        for kind in EntityType::ALL {
            assert_eq!(EntityType::parse(kind.as_str()), Some(kind));
            assert_eq!(kind.to_string(), kind.as_str());
        }
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!(EntityType::parse("vehicle"), None);
        assert_eq!(EntityType::parse("Character"), None); // case-sensitive
        assert_eq!(EntityType::parse(""), None);
        assert_eq!("species".parse::<EntityType>(), Err("species".to_string()));
    }

    #[test]
    fn test_subresources() {
        assert_eq!(EntityType::Character.subresource(), "people");
        assert_eq!(EntityType::Planet.subresource(), "planets");
        assert_eq!(EntityType::Starship.subresource(), "starships");
    }

    #[test]
    fn test_display_fields_cover_required_fields() {
        for kind in EntityType::ALL {
            let shown: Vec<&str> = kind.display_fields().iter().map(|(f, _)| *f).collect();
            assert_eq!(shown, kind.required_fields());
        }
    }
}
