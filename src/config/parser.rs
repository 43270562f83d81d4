use crate::config::types::Config;
use crate::config::validation::validate;
use crate::ConfigError;
use std::path::Path;

/// Loads and parses a configuration file from the given path
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(Config)` - Successfully loaded and validated configuration
/// * `Err(ConfigError)` - Failed to load, parse, or validate the configuration
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use lidump::config::load_config;
///
/// let config = load_config(Path::new("lidump.toml")).unwrap();
/// println!("Page size: {}", config.voyager.page_size);
/// ```
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parses and validates configuration from TOML text
pub fn parse_config(content: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(content)?;
    validate(&config)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_full_config() {
        let config_content = r#"
hunter_api = "abc123"

[voyager]
base-url = "https://www.linkedin.com"
jsessionid = "ajax:1"
user-agent = "TestAgent/1.0"
timeout-secs = 30
page-size = 10

[hunter]
base-url = "https://api.hunter.io"

[names]
honorifics = ["Dr.", "PhD"]
"#;

        let file = create_temp_config(config_content);
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.hunter_api, "abc123");
        assert_eq!(config.voyager.jsessionid, "ajax:1");
        assert_eq!(config.voyager.timeout_secs, 30);
        assert_eq!(config.names.honorifics, vec!["Dr.", "PhD"]);
    }

    #[test]
    fn test_legacy_hunter_conf_is_a_valid_config() {
        let file = create_temp_config("hunter_api = 'abc123'\n");
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.hunter_api, "abc123");
        assert_eq!(config.voyager.page_size, 10);
        assert_eq!(config.voyager.base_url, "https://www.linkedin.com");
        assert_eq!(config.hunter.base_url, "https://api.hunter.io");
        assert!(config.names.honorifics.contains(&"LL.M.".to_string()));
    }

    #[test]
    fn test_load_config_with_invalid_path() {
        let result = load_config(Path::new("/nonexistent/lidump.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_load_config_with_invalid_toml() {
        let file = create_temp_config("this is not valid TOML {{{");
        let result = load_config(file.path());
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_hunter_key_is_a_parse_error() {
        let result = parse_config("[voyager]\npage-size = 10\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_config_with_validation_error() {
        let config_content = r#"
hunter_api = "abc123"

[voyager]
page-size = 0
"#;

        let result = parse_config(config_content);
        assert!(matches!(result.unwrap_err(), ConfigError::Validation(_)));
    }
}
