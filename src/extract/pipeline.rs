//! Extraction pipeline
//!
//! Wires the collaborators together for one run:
//! 1. Resolve the company slug and validate the email domain
//! 2. Look up the company's email pattern (absence aborts the run)
//! 3. Resolve the company id
//! 4. Collect every search result item across all pages
//! 5. Parse, deduplicate, and attach an email to every employee

use crate::client::{company_slug, HunterClient, VoyagerClient};
use crate::config::{validate_email_domain, Config};
use crate::email::EmailPattern;
use crate::extract::dedupe::dedupe;
use crate::extract::paginator::collect_all;
use crate::extract::parser::parse_item;
use crate::extract::record::{EmployeeContact, EmployeeRecord};
use crate::names::HonorificPolicy;
use crate::{LidumpError, Result};
use serde_json::Value;

/// Inputs that vary per run
#[derive(Debug, Clone)]
pub struct ExtractionRequest {
    /// `https://www.linkedin.com/company/<slug>` page of the company
    pub company_url: String,

    /// LinkedIn `li_at` session cookie
    pub session_cookie: String,

    /// Domain appended to generated addresses
    pub email_domain: String,
}

/// Runs a complete extraction
///
/// # Returns
///
/// * `Ok(Vec<EmployeeContact>)` - Unique employees with inferred emails,
///   in the order they were first seen
/// * `Err(LidumpError)` - A fatal error; no partial output is produced
pub async fn run_extraction(
    config: &Config,
    request: &ExtractionRequest,
) -> Result<Vec<EmployeeContact>> {
    let slug = company_slug(&request.company_url)?;
    validate_email_domain(&request.email_domain)?;

    let hunter = HunterClient::new(&config.hunter, &config.hunter_api)?;
    let pattern = hunter
        .lookup_pattern(&request.email_domain)
        .await?
        .ok_or_else(|| LidumpError::PatternNotFound {
            domain: request.email_domain.clone(),
        })?;
    tracing::info!("Email pattern for {}: {}", request.email_domain, pattern);

    let voyager = VoyagerClient::new(&config.voyager, &request.session_cookie)?;
    let company_id = voyager.company_id(&slug).await?;
    tracing::info!("Company '{}' has id {}", slug, company_id);

    let page_size = config.voyager.page_size;
    let client = &voyager;
    let id = company_id.as_str();
    let items = collect_all(page_size, move |offset| {
        client.employee_page(id, offset, page_size)
    })
    .await?;
    tracing::info!("Collected {} search result items", items.len());

    let policy = HonorificPolicy::from_config(&config.names);
    let contacts = build_contacts(&items, &policy, &pattern, &request.email_domain);
    tracing::info!("Extracted {} unique employees", contacts.len());

    Ok(contacts)
}

/// Parses raw result items into unique employees with emails
///
/// Items without a usable name are skipped.
pub fn build_contacts(
    items: &[Value],
    policy: &HonorificPolicy,
    pattern: &EmailPattern,
    domain: &str,
) -> Vec<EmployeeContact> {
    let records: Vec<EmployeeRecord> = items
        .iter()
        .filter_map(|item| match parse_item(item, policy) {
            Ok(record) => Some(record),
            Err(reason) => {
                tracing::debug!("Skipping search result: {}", reason);
                None
            }
        })
        .collect();

    dedupe(records)
        .into_iter()
        .map(|record| {
            let email = pattern.render(&record.firstname, &record.lastname, domain);
            EmployeeContact::from_record(record, email)
        })
        .collect()
}
