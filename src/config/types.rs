use serde::Deserialize;

/// Main configuration structure for lidump
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Hunter.io API key, kept as a top-level key so a legacy `hunter.conf`
    /// line (`hunter_api = "..."`) is a valid config on its own
    pub hunter_api: String,

    #[serde(default)]
    pub voyager: VoyagerConfig,

    #[serde(default)]
    pub hunter: HunterConfig,

    #[serde(default)]
    pub names: NamesConfig,
}

/// LinkedIn Voyager API configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct VoyagerConfig {
    /// Base URL of the LinkedIn site
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Value sent as both the `JSESSIONID` cookie and the `Csrf-Token` header
    pub jsessionid: String,

    /// Browser user agent presented to LinkedIn
    #[serde(rename = "user-agent")]
    pub user_agent: String,

    /// Per-request timeout in seconds
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,

    /// Number of search results requested per page
    #[serde(rename = "page-size")]
    pub page_size: u32,
}

impl Default for VoyagerConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.linkedin.com".to_string(),
            jsessionid: "ajax:5739908118104050450".to_string(),
            user_agent:
                "Mozilla/5.0 (X11; Linux x86_64; rv:102.0) Gecko/20100101 Firefox/102.0"
                    .to_string(),
            timeout_secs: 200,
            page_size: crate::extract::PAGE_SIZE,
        }
    }
}

/// Hunter.io API configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HunterConfig {
    #[serde(rename = "base-url")]
    pub base_url: String,
}

impl Default for HunterConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.hunter.io".to_string(),
        }
    }
}

/// Name parsing configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NamesConfig {
    /// Tokens dropped from display names before splitting
    pub honorifics: Vec<String>,
}

impl Default for NamesConfig {
    fn default() -> Self {
        Self {
            honorifics: crate::names::DEFAULT_HONORIFICS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}
