//! Remote access to the Star Wars API.
//!
//! This module provides the [`Transport`] seam the fetcher depends on, the
//! `reqwest`-backed [`ApiClient`] that implements it, and the [`FetchError`]
//! taxonomy every fetch resolves to on failure.

pub mod client;
pub mod error;

pub use client::{ApiClient, Transport, TransportResponse, DEFAULT_BASE_URL};
pub use error::FetchError;
