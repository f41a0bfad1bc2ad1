use std::fmt::Write;

/// Prefix shared by every record key.
pub const NAMESPACE: &str = "starwars";

/// Deterministic cache key for one (type, id) pair: `starwars_<type>_<id>`.
///
/// Each component has every byte outside `[A-Za-z0-9-]` written as `%XX`, so
/// `_` only ever appears as the separator. Distinct pairs therefore never
/// share a key, and every key is a valid file name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CacheKey(String);

impl CacheKey {
    pub fn new(type_name: &str, id: &str) -> Self {
        Self(format!(
            "{}_{}_{}",
            NAMESPACE,
            escape_component(type_name),
            escape_component(id)
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CacheKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

fn escape_component(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for b in s.bytes() {
        if b.is_ascii_alphanumeric() || b == b'-' {
            out.push(b as char);
        } else {
            let _ = write!(out, "%{:02X}", b);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_keys_keep_readable_format() {
        assert_eq!(CacheKey::new("character", "1").as_str(), "starwars_character_1");
        assert_eq!(CacheKey::new("starship", "9").to_string(), "starwars_starship_9");
    }

    #[test]
    fn test_same_pair_same_key() {
        assert_eq!(CacheKey::new("planet", "7"), CacheKey::new("planet", "7"));
    }

    #[test]
    fn test_underscores_cannot_collide() {
        let a = CacheKey::new("character_x", "1");
        let b = CacheKey::new("character", "x_1");
        assert_ne!(a, b);
        assert_eq!(a.as_str(), "starwars_character%5Fx_1");
        assert_eq!(b.as_str(), "starwars_character_x%5F1");
    }

    #[test]
    fn test_path_characters_are_escaped() {
        let key = CacheKey::new("planet", "../etc/passwd");
        assert!(!key.as_str().contains('/'));
        assert!(!key.as_str().contains('.'));
    }

    #[test]
    fn test_escape_is_not_ambiguous() {
        // A literal "%5F" in an id must not read back as an escaped "_".
        assert_ne!(CacheKey::new("planet", "a%5Fb"), CacheKey::new("planet", "a_b"));
    }
}
