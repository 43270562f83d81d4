//! HTTP collaborators
//!
//! This module talks to the two remote services a run depends on:
//! - LinkedIn's Voyager API for the company id and people-search pages
//! - Hunter.io for the company's email address pattern

mod hunter;
mod voyager;

pub use hunter::HunterClient;
pub use voyager::{company_slug, VoyagerClient};

use reqwest::{Client, Response};
use std::time::Duration;

/// Builds an HTTP client with the given user agent and request timeout
///
/// # Example
///
/// ```no_run
/// use lidump::client::build_http_client;
///
/// let client = build_http_client("lidump/1.0", 30).unwrap();
/// ```
pub fn build_http_client(user_agent: &str, timeout_secs: u64) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .build()
}

/// Joins a configured base URL and an absolute API path
fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

/// Turns non-2xx responses into `LidumpError::Http`
fn check_status(response: Response) -> crate::Result<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(crate::LidumpError::Http {
            url: response.url().to_string(),
            status: status.as_u16(),
        })
    }
}
