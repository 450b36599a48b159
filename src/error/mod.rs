//! Error types for bugboard.
//!
//! | Type | Raised by | Meaning |
//! |------|-----------|---------|
//! | [`TransportError`] | repository | A remote round-trip failed |
//! | [`StoreError`] | view-state store | An operation was rejected or its round-trip failed |
//! | [`ConfigError`] | configuration | Invalid environment value or command-line flag |
//!
//! Binaries report these through `color_eyre`.

mod config;
mod store;
mod transport;

pub use config::ConfigError;
pub use store::{PendingTarget, StoreError};
pub use transport::TransportError;

/// Result alias for view-state store operations.
pub type StoreResult<T> = Result<T, StoreError>;
