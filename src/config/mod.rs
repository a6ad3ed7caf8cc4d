//! Configuration module for Mushaf
//!
//! This module handles loading, parsing, and validating TOML configuration
//! files. Every key has a built-in default, so a config file is optional.
//!
//! # Example
//!
//! ```no_run
//! use mushaf::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("mushaf.toml")).unwrap();
//! println!("Reading from: {}", config.api.base_url);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{ApiConfig, AudioConfig, ClientConfig, Config, PrefsConfig};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash};

// Re-export validation for callers constructing configs programmatically
pub use validation::validate;
