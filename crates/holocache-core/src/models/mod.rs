//! Data models for Star Wars API entities.
//!
//! - `EntityType`: the recognized entity kinds and their per-kind metadata
//! - `RawApiResponse`, `ParsedResponse`: the wire shape and its validation
//! - `NormalizedRecord`: the flattened record the cache stores

pub mod entity;
pub mod record;

pub use entity::EntityType;
pub use record::{NormalizedRecord, ParsedResponse, RawApiResponse};
