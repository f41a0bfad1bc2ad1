//! Utility functions for field display and string manipulation.

pub mod format;

// Re-export commonly used functions at module level
pub use format::{description_text, is_missing, normalize_description, present, pretty, truncate_string};
