//! lidump: LinkedIn employee roster extraction with inferred corporate emails
//!
//! This crate pages through the people-search results of a company page,
//! turns each result into a normalized employee record, collapses duplicate
//! sightings, and derives an email address for every employee from a
//! company-wide address pattern.

pub mod client;
pub mod config;
pub mod email;
pub mod extract;
pub mod names;
pub mod output;

use thiserror::Error;

/// Main error type for lidump operations
#[derive(Debug, Error)]
pub enum LidumpError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Pagination error: {0}")]
    Pagination(#[from] PaginationError),

    #[error("Invalid LinkedIn company URL: {0}")]
    InvalidCompanyUrl(String),

    #[error("Could not determine email pattern for {domain}")]
    PatternNotFound { domain: String },

    #[error("Company not found: {company}")]
    CompanyNotFound { company: String },

    #[error("HTTP {status} from {url}")]
    Http { url: String, status: u16 },

    #[error("Invalid request header value: {0}")]
    InvalidHeader(String),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Errors raised while walking the paginated employee search
#[derive(Debug, Error)]
pub enum PaginationError {
    #[error("Could not determine total number of employees")]
    MissingTotal,

    #[error("Total employee count is not a non-negative integer: {0}")]
    InvalidTotal(String),

    #[error("Page fetch at offset {offset} failed: {source}")]
    Fetch {
        offset: u64,
        source: Box<LidumpError>,
    },
}

/// Result type alias for lidump operations
pub type Result<T> = std::result::Result<T, LidumpError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use email::{generate_email, EmailPattern};
pub use extract::{
    collect_all, dedupe, parse_item, run_extraction, EmployeeContact, EmployeeRecord, SkipReason,
};
pub use names::{normalize, HonorificPolicy};
