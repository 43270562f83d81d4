use crate::client::{build_http_client, check_status, endpoint};
use crate::config::VoyagerConfig;
use crate::LidumpError;
use percent_encoding::percent_decode_str;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE, COOKIE};
use reqwest::{Client, RequestBuilder};
use serde_json::Value;
use url::Url;

const COMPANY_LOOKUP_PATH: &str = "/voyager/api/voyagerOrganizationDashCompanies";
const COMPANY_DECORATION: &str = "com.linkedin.voyager.dash.deco.organization.MiniCompany-10";
const SEARCH_PATH: &str = "/voyager/api/search/dash/clusters";
const SEARCH_DECORATION: &str = "com.linkedin.voyager.dash.deco.search.SearchClusterCollection-165";

/// Extracts the company slug from a LinkedIn company page URL
///
/// Only `https://www.linkedin.com/company/<slug>` URLs are accepted; any
/// trailing path, query, or fragment is ignored. The slug is returned
/// percent-decoded, ready to be encoded once more as a query value.
///
/// # Example
///
/// ```
/// use lidump::client::company_slug;
///
/// let slug = company_slug("https://www.linkedin.com/company/acme-corp/people/").unwrap();
/// assert_eq!(slug, "acme-corp");
/// ```
pub fn company_slug(company_url: &str) -> crate::Result<String> {
    let invalid = || LidumpError::InvalidCompanyUrl(company_url.to_string());

    let url = Url::parse(company_url).map_err(|_| invalid())?;
    if url.scheme() != "https" || url.host_str() != Some("www.linkedin.com") {
        return Err(invalid());
    }

    let mut segments = url.path_segments().ok_or_else(invalid)?;
    match (segments.next(), segments.next()) {
        (Some("company"), Some(slug)) if !slug.is_empty() => percent_decode_str(slug)
            .decode_utf8()
            .map(|slug| slug.into_owned())
            .map_err(|_| invalid()),
        _ => Err(invalid()),
    }
}

/// Client for LinkedIn's internal Voyager API, authenticated by session cookie
pub struct VoyagerClient {
    client: Client,
    base_url: String,
    headers: HeaderMap,
}

impl VoyagerClient {
    /// Creates a client carrying the `li_at` session cookie
    pub fn new(config: &VoyagerConfig, session_cookie: &str) -> crate::Result<Self> {
        let client = build_http_client(&config.user_agent, config.timeout_secs)?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert("csrf-token", header_value(&config.jsessionid)?);
        headers.insert(
            COOKIE,
            header_value(&format!(
                "li_at={}; JSESSIONID=\"{}\"",
                session_cookie, config.jsessionid
            ))?,
        );

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            headers,
        })
    }

    /// Resolves a company slug to its numeric company id
    pub async fn company_id(&self, slug: &str) -> crate::Result<String> {
        let url = endpoint(&self.base_url, COMPANY_LOOKUP_PATH);
        let request = self.client.get(&url).query(&[
            ("decorationId", COMPANY_DECORATION),
            ("q", "universalName"),
            ("universalName", slug),
        ]);
        let body = self.send_json(request).await?;

        company_id_from_response(&body).ok_or_else(|| LidumpError::CompanyNotFound {
            company: slug.to_string(),
        })
    }

    /// Fetches one page of the company's people search
    ///
    /// # Arguments
    ///
    /// * `company_id` - Id returned by [`VoyagerClient::company_id`]
    /// * `offset` - Index of the first result on the page
    /// * `count` - Number of results requested
    pub async fn employee_page(
        &self,
        company_id: &str,
        offset: u64,
        count: u32,
    ) -> crate::Result<Value> {
        let url = format!(
            "{}?decorationId={}&origin=COMPANY_PAGE_CANNED_SEARCH&q=all&query={}&count={}&start={}",
            endpoint(&self.base_url, SEARCH_PATH),
            SEARCH_DECORATION,
            search_query(company_id),
            count,
            offset
        );
        tracing::debug!("Fetching people search page at offset {}", offset);

        self.send_json(self.client.get(&url)).await
    }

    async fn send_json(&self, request: RequestBuilder) -> crate::Result<Value> {
        let response = request.headers(self.headers.clone()).send().await?;
        Ok(check_status(response)?.json().await?)
    }
}

/// Voyager's restli-style search query for current employees of a company
fn search_query(company_id: &str) -> String {
    format!(
        "(flagshipSearchIntent:SEARCH_SRP,queryParameters:(currentCompany:List({}),resultType:List(PEOPLE)),includeFiltersInResponse:false)",
        company_id
    )
}

/// Reads the id from `elements[0].entityUrn`, e.g. `urn:li:fsd_company:1234`
fn company_id_from_response(body: &Value) -> Option<String> {
    let urn = body.get("elements")?.get(0)?.get("entityUrn")?.as_str()?;
    urn.rsplit(':')
        .next()
        .filter(|id| !id.is_empty())
        .map(str::to_string)
}

fn header_value(value: &str) -> crate::Result<HeaderValue> {
    HeaderValue::from_str(value).map_err(|e| LidumpError::InvalidHeader(e.to_string()))
}
