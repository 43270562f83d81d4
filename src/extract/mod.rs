//! Employee extraction
//!
//! This module contains the roster pipeline, including:
//! - Paging through the people search and flattening result clusters
//! - Parsing raw results into employee records
//! - Deduplicating repeated sightings
//! - Orchestrating a full run from company URL to emails

mod dedupe;
mod paginator;
mod parser;
mod pipeline;
mod record;

pub use dedupe::dedupe;
pub use paginator::{collect_all, flatten_clusters, read_total, CLUSTER_COUNT, PAGE_SIZE};
pub use parser::{parse_item, split_name, SkipReason};
pub use pipeline::{build_contacts, run_extraction, ExtractionRequest};
pub use record::{EmployeeContact, EmployeeRecord, POSITION_UNAVAILABLE};
