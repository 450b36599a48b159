//! Trait abstractions for dependency injection and testability.
//!
//! - [`HttpClient`] - HTTP client operations (GET, POST, PUT, DELETE)

pub mod http;

pub use http::{Headers, HttpClient, HttpError, Response};
