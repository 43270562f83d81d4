//! Paginated result collection
//!
//! The people search reports its total result count in `paging.total` and
//! returns each page as up to three parallel result clusters under
//! `elements[i].items`. [`collect_all`] walks every page in order and
//! flattens the clusters into a single item sequence.

use crate::PaginationError;
use serde_json::Value;
use std::future::Future;

/// Number of results requested per page
pub const PAGE_SIZE: u32 = 10;

/// Number of result clusters inspected on each page
pub const CLUSTER_COUNT: usize = 3;

/// Fetches every page of a paginated search and flattens its result items
///
/// The page at offset 0 is fetched first; its `paging.total` decides how
/// many further pages are requested, at offsets `page_size`,
/// `2 * page_size`, ... while the offset stays below the total. The first
/// page is reused rather than fetched a second time.
///
/// Items are returned in page order, then cluster order, then item order.
/// Clusters that are missing or whose `items` is not an array are skipped.
///
/// # Arguments
///
/// * `page_size` - Offset step between consecutive pages
/// * `fetch_page` - Fetches the page starting at the given offset
///
/// # Returns
///
/// * `Ok(Vec<Value>)` - All result items across all pages
/// * `Err(PaginationError)` - The total is missing or malformed, or a fetch failed
pub async fn collect_all<F, Fut>(
    page_size: u32,
    mut fetch_page: F,
) -> Result<Vec<Value>, PaginationError>
where
    F: FnMut(u64) -> Fut,
    Fut: Future<Output = crate::Result<Value>>,
{
    let step = u64::from(page_size.max(1));

    let first_page = fetch_at(&mut fetch_page, 0).await?;
    let total = read_total(&first_page)?;
    tracing::info!("Search reports {} results", total);

    let mut items = Vec::new();
    if total == 0 {
        return Ok(items);
    }
    items.extend(flatten_clusters(&first_page));

    let mut offset = step;
    while offset < total {
        let page = fetch_at(&mut fetch_page, offset).await?;
        let page_items = flatten_clusters(&page);
        tracing::debug!("Offset {}: {} result items", offset, page_items.len());
        items.extend(page_items);
        offset += step;
    }

    Ok(items)
}

async fn fetch_at<F, Fut>(fetch_page: &mut F, offset: u64) -> Result<Value, PaginationError>
where
    F: FnMut(u64) -> Fut,
    Fut: Future<Output = crate::Result<Value>>,
{
    fetch_page(offset)
        .await
        .map_err(|e| PaginationError::Fetch {
            offset,
            source: Box::new(e),
        })
}

/// Reads the total result count from a page's `paging.total`
pub fn read_total(page: &Value) -> Result<u64, PaginationError> {
    let total = page
        .get("paging")
        .and_then(|paging| paging.get("total"))
        .ok_or(PaginationError::MissingTotal)?;

    if total.is_null() {
        return Err(PaginationError::MissingTotal);
    }

    total
        .as_u64()
        .ok_or_else(|| PaginationError::InvalidTotal(total.to_string()))
}

/// Collects the items of the first [`CLUSTER_COUNT`] clusters of a page
pub fn flatten_clusters(page: &Value) -> Vec<Value> {
    let mut items = Vec::new();

    for index in 0..CLUSTER_COUNT {
        match cluster_items(page, index) {
            Some(cluster) => items.extend(cluster.iter().cloned()),
            None => tracing::trace!("Cluster {} absent or malformed, skipping", index),
        }
    }

    items
}

fn cluster_items(page: &Value, index: usize) -> Option<&Vec<Value>> {
    page.get("elements")?.get(index)?.get("items")?.as_array()
}
