//! Configuration model for editlease.
//!
//! This module defines the Config struct that represents the operator's
//! `editlease.yaml`. It supports forward-compatible YAML parsing (unknown
//! fields are ignored), sensible defaults for optional fields, and validation
//! of config values. Every value is fixed at process start.

mod model;
mod operations;
pub mod types;


// Re-export public API
pub use model::Config;
