use crate::client::{build_http_client, check_status, endpoint};
use crate::config::HunterConfig;
use crate::email::EmailPattern;
use reqwest::Client;
use serde_json::Value;

const USER_AGENT: &str = concat!("lidump/", env!("CARGO_PKG_VERSION"));
const TIMEOUT_SECS: u64 = 30;

/// Hunter.io domain-search client used to learn a company's email pattern
pub struct HunterClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl HunterClient {
    pub fn new(config: &HunterConfig, api_key: &str) -> crate::Result<Self> {
        Ok(Self {
            client: build_http_client(USER_AGENT, TIMEOUT_SECS)?,
            base_url: config.base_url.clone(),
            api_key: api_key.to_string(),
        })
    }

    /// Looks up the email pattern Hunter has observed for a domain
    ///
    /// # Returns
    ///
    /// * `Ok(Some(EmailPattern))` - Hunter knows the pattern, e.g. `{first}.{last}`
    /// * `Ok(None)` - Hunter has no pattern for the domain
    /// * `Err(LidumpError)` - Transport failure, non-2xx status, or non-JSON body
    pub async fn lookup_pattern(&self, domain: &str) -> crate::Result<Option<EmailPattern>> {
        let url = endpoint(&self.base_url, "/v2/domain-search");
        tracing::debug!("Looking up email pattern for {}", domain);

        let response = self
            .client
            .get(&url)
            .query(&[("domain", domain), ("api_key", self.api_key.as_str())])
            .send()
            .await?;
        let body: Value = check_status(response)?.json().await?;

        Ok(pattern_from_response(&body))
    }
}

/// Extracts `data.pattern` from a domain-search response
fn pattern_from_response(body: &Value) -> Option<EmailPattern> {
    body.get("data")?
        .get("pattern")?
        .as_str()
        .and_then(EmailPattern::new)
}
