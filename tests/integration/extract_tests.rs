//! Integration tests for the extraction pipeline
//!
//! These tests use wiremock to stand in for both Hunter.io and the LinkedIn
//! Voyager API and drive a full run end-to-end.

use lidump::config::{Config, HunterConfig, NamesConfig, VoyagerConfig};
use lidump::extract::{run_extraction, ExtractionRequest};
use lidump::output::format_delimited;
use lidump::{LidumpError, PaginationError};
use serde_json::{json, Value};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SEARCH_PATH: &str = "/voyager/api/search/dash/clusters";
const COMPANY_PATH: &str = "/voyager/api/voyagerOrganizationDashCompanies";
const HUNTER_PATH: &str = "/v2/domain-search";

/// Creates a test configuration pointing both APIs at the mock server
fn create_test_config(base_url: &str) -> Config {
    Config {
        hunter_api: "test-key".to_string(),
        voyager: VoyagerConfig {
            base_url: base_url.to_string(),
            jsessionid: "ajax:42".to_string(),
            user_agent: "TestAgent/1.0".to_string(),
            timeout_secs: 5,
            page_size: 10,
        },
        hunter: HunterConfig {
            base_url: base_url.to_string(),
        },
        names: NamesConfig::default(),
    }
}

fn create_request() -> ExtractionRequest {
    ExtractionRequest {
        company_url: "https://www.linkedin.com/company/acme".to_string(),
        session_cookie: "session-token".to_string(),
        email_domain: "acme.com".to_string(),
    }
}

fn person(name: &str, position: Option<&str>) -> Value {
    let mut entity = json!({ "title": { "text": name } });
    if let Some(p) = position {
        entity["primarySubtitle"] = json!({ "text": p });
    }
    json!({ "itemUnion": { "entityResult": entity } })
}

fn search_page(total: u64, clusters: Vec<Vec<Value>>) -> Value {
    json!({
        "paging": { "total": total, "start": 0, "count": 10 },
        "elements": clusters
            .into_iter()
            .map(|items| json!({ "items": items }))
            .collect::<Vec<_>>(),
    })
}

async fn mount_hunter(server: &MockServer, pattern: Value) {
    Mock::given(method("GET"))
        .and(path(HUNTER_PATH))
        .and(query_param("domain", "acme.com"))
        .and(query_param("api_key", "test-key"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "data": { "domain": "acme.com", "pattern": pattern } })),
        )
        .mount(server)
        .await;
}

async fn mount_company(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path(COMPANY_PATH))
        .and(query_param("universalName", "acme"))
        .and(header("csrf-token", "ajax:42"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "elements": [{ "entityUrn": "urn:li:fsd_company:1234" }] })),
        )
        .mount(server)
        .await;
}

async fn mount_page(server: &MockServer, start: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .and(query_param("start", start))
        .and(query_param("count", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_full_extraction_across_pages() {
    let mock_server = MockServer::start().await;
    let config = create_test_config(&mock_server.uri());

    mount_hunter(&mock_server, json!("{first}.{last}")).await;
    mount_company(&mock_server).await;

    mount_page(
        &mock_server,
        "0",
        search_page(
            25,
            vec![
                vec![
                    person("Prof. Dr. Jörg Müller", Some("CTO")),
                    json!({ "itemUnion": {} }),
                ],
                vec![person("Anna-Maria Schmidt", None)],
            ],
        ),
    )
    .await;
    mount_page(
        &mock_server,
        "10",
        search_page(
            25,
            vec![
                vec![person("Jörg Müller", Some("Board Member"))],
                vec![],
                vec![person("Madonna", Some("Singer"))],
            ],
        ),
    )
    .await;
    mount_page(
        &mock_server,
        "20",
        search_page(25, vec![vec![person("John Ronald Tolkien 📚", Some("Writer; Editor"))]]),
    )
    .await;

    let contacts = run_extraction(&config, &create_request())
        .await
        .expect("Extraction failed");

    assert_eq!(
        format_delimited(&contacts),
        "Firstname;Lastname;Email;Position\n\
         Joerg;Mueller;joerg.mueller@acme.com;CTO\n\
         Anna-Maria;Schmidt;anna.schmidt@acme.com;N/A\n\
         John Ronald;Tolkien;john.tolkien@acme.com;Writer, Editor\n"
    );
}

#[tokio::test]
async fn test_pattern_with_domain_placeholder() {
    let mock_server = MockServer::start().await;
    let config = create_test_config(&mock_server.uri());

    mount_hunter(&mock_server, json!("{f}{last}@{domain}")).await;
    mount_company(&mock_server).await;
    mount_page(
        &mock_server,
        "0",
        search_page(1, vec![vec![person("Anna-Maria Schmidt", Some("Engineer"))]]),
    )
    .await;

    let contacts = run_extraction(&config, &create_request()).await.unwrap();
    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0].email, "aschmidt@acme.com");
}

#[tokio::test]
async fn test_missing_pattern_aborts_before_linkedin() {
    let mock_server = MockServer::start().await;
    let config = create_test_config(&mock_server.uri());

    mount_hunter(&mock_server, Value::Null).await;
    Mock::given(method("GET"))
        .and(path(COMPANY_PATH))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let result = run_extraction(&config, &create_request()).await;
    assert!(matches!(
        result,
        Err(LidumpError::PatternNotFound { ref domain }) if domain == "acme.com"
    ));
}

#[tokio::test]
async fn test_missing_total_is_fatal() {
    let mock_server = MockServer::start().await;
    let config = create_test_config(&mock_server.uri());

    mount_hunter(&mock_server, json!("{first}.{last}")).await;
    mount_company(&mock_server).await;
    mount_page(
        &mock_server,
        "0",
        json!({ "elements": [{ "items": [person("John Doe", None)] }] }),
    )
    .await;

    let result = run_extraction(&config, &create_request()).await;
    assert!(matches!(
        result,
        Err(LidumpError::Pagination(PaginationError::MissingTotal))
    ));
}

#[tokio::test]
async fn test_page_fetch_failure_is_fatal() {
    let mock_server = MockServer::start().await;
    let config = create_test_config(&mock_server.uri());

    mount_hunter(&mock_server, json!("{first}.{last}")).await;
    mount_company(&mock_server).await;
    mount_page(
        &mock_server,
        "0",
        search_page(15, vec![vec![person("John Doe", None)]]),
    )
    .await;
    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .and(query_param("start", "10"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let result = run_extraction(&config, &create_request()).await;
    match result {
        Err(LidumpError::Pagination(PaginationError::Fetch { offset, source })) => {
            assert_eq!(offset, 10);
            assert!(matches!(*source, LidumpError::Http { status: 500, .. }));
        }
        other => panic!("expected fetch failure, got {:?}", other),
    }
}

#[tokio::test]
async fn test_unknown_company() {
    let mock_server = MockServer::start().await;
    let config = create_test_config(&mock_server.uri());

    mount_hunter(&mock_server, json!("{first}.{last}")).await;
    Mock::given(method("GET"))
        .and(path(COMPANY_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "elements": [] })))
        .mount(&mock_server)
        .await;

    let result = run_extraction(&config, &create_request()).await;
    assert!(matches!(
        result,
        Err(LidumpError::CompanyNotFound { ref company }) if company == "acme"
    ));
}

#[tokio::test]
async fn test_invalid_company_url_makes_no_requests() {
    let mock_server = MockServer::start().await;
    let config = create_test_config(&mock_server.uri());

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let mut request = create_request();
    request.company_url = "https://www.linkedin.com/in/someone".to_string();

    let result = run_extraction(&config, &request).await;
    assert!(matches!(result, Err(LidumpError::InvalidCompanyUrl(_))));
}

#[tokio::test]
async fn test_non_ascii_company_slug_is_sent_once_encoded() {
    let mock_server = MockServer::start().await;
    let config = create_test_config(&mock_server.uri());

    mount_hunter(&mock_server, json!("{first}.{last}")).await;
    Mock::given(method("GET"))
        .and(path(COMPANY_PATH))
        .and(query_param("universalName", "café-müller"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "elements": [{ "entityUrn": "urn:li:fsd_company:77" }] })),
        )
        .expect(1)
        .mount(&mock_server)
        .await;
    mount_page(
        &mock_server,
        "0",
        search_page(1, vec![vec![person("John Doe", Some("Baker"))]]),
    )
    .await;

    let mut request = create_request();
    request.company_url = "https://www.linkedin.com/company/café-müller".to_string();

    let contacts = run_extraction(&config, &request).await.unwrap();
    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0].email, "john.doe@acme.com");
}
