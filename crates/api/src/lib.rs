//! HTTP API: server configuration, routing, and request/response mapping.
//!
//! The handlers are thin adapters: each one parses its input, advances the
//! shop to the requested day and serves the result.

pub mod app;
pub mod config;
pub mod middleware;

pub use config::{ApiConfig, ConfigError};
