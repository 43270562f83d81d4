use crate::config::types::{Config, HunterConfig, NamesConfig, VoyagerConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    // Validate API key
    if config.hunter_api.trim().is_empty() {
        return Err(ConfigError::Validation(
            "hunter_api cannot be empty".to_string(),
        ));
    }

    validate_voyager_config(&config.voyager)?;
    validate_hunter_config(&config.hunter)?;
    validate_names_config(&config.names)?;
    Ok(())
}

/// Validates LinkedIn Voyager configuration
fn validate_voyager_config(config: &VoyagerConfig) -> Result<(), ConfigError> {
    validate_base_url("voyager.base-url", &config.base_url)?;

    // Check CSRF token, sent both as header and cookie
    if config.jsessionid.is_empty() {
        return Err(ConfigError::Validation(
            "jsessionid cannot be empty".to_string(),
        ));
    }

    // Validate timeout range
    if config.timeout_secs < 1 || config.timeout_secs > 600 {
        return Err(ConfigError::Validation(format!(
            "timeout-secs must be between 1 and 600, got {}",
            config.timeout_secs
        )));
    }

    // Validate page size range
    if config.page_size < 1 || config.page_size > 100 {
        return Err(ConfigError::Validation(format!(
            "page-size must be between 1 and 100, got {}",
            config.page_size
        )));
    }

    Ok(())
}

fn validate_hunter_config(config: &HunterConfig) -> Result<(), ConfigError> {
    validate_base_url("hunter.base-url", &config.base_url)
}

fn validate_names_config(config: &NamesConfig) -> Result<(), ConfigError> {
    // Check for empty entries, which would match nothing
    if config.honorifics.iter().any(|h| h.is_empty()) {
        return Err(ConfigError::Validation(
            "honorifics cannot contain empty entries".to_string(),
        ));
    }
    Ok(())
}

/// Validates that a base URL parses and uses an HTTP scheme
fn validate_base_url(key: &str, value: &str) -> Result<(), ConfigError> {
    let url = Url::parse(value)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid {} '{}': {}", key, value, e)))?;

    // Check scheme
    if url.scheme() != "https" && url.scheme() != "http" {
        return Err(ConfigError::InvalidUrl(format!(
            "{} must use http or https, got '{}'",
            key,
            url.scheme()
        )));
    }

    Ok(())
}

/// Validates an email domain supplied on the command line
///
/// The domain is appended verbatim to generated addresses, so it must look
/// like a bare host name: no scheme, no `@`, at least one dot.
pub fn validate_email_domain(domain: &str) -> Result<(), ConfigError> {
    // Check for empty domain
    if domain.is_empty() {
        return Err(ConfigError::Validation(
            "Email domain cannot be empty".to_string(),
        ));
    }

    // Check for invalid characters
    if !domain
        .chars()
        .all(|c| c.is_alphanumeric() || c == '.' || c == '-')
    {
        return Err(ConfigError::Validation(format!(
            "Email domain '{}' contains invalid characters",
            domain
        )));
    }

    // Check that it doesn't start or end with a dot or hyphen
    if domain.starts_with('.')
        || domain.ends_with('.')
        || domain.starts_with('-')
        || domain.ends_with('-')
    {
        return Err(ConfigError::Validation(format!(
            "Email domain '{}' cannot start or end with '.' or '-'",
            domain
        )));
    }

    // Check for consecutive dots
    if domain.contains("..") {
        return Err(ConfigError::Validation(format!(
            "Email domain '{}' cannot contain consecutive dots",
            domain
        )));
    }

    // Check for at least one dot
    if !domain.contains('.') {
        return Err(ConfigError::Validation(format!(
            "Email domain '{}' must contain at least one dot (e.g., 'example.com')",
            domain
        )));
    }

    Ok(())
}
