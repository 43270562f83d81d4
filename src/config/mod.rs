//! Configuration module for lidump
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//!
//! # Example
//!
//! ```no_run
//! use lidump::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("lidump.toml")).unwrap();
//! println!("Searching {} results per page", config.voyager.page_size);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, HunterConfig, NamesConfig, VoyagerConfig};

// Re-export parser functions
pub use parser::{load_config, parse_config};
pub use validation::validate_email_domain;
