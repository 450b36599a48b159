//! Bugboard - a terminal dashboard for a remote bug tracker
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod app;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod repository;
pub mod state;
pub mod terminal;
pub mod traits;
pub mod ui;
pub mod views;
