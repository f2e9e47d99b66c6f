use super::{Progress, SearchQuery, SearchResult, SearchSource};
use crate::Result;
use ohno::app_err;

const LOG_TARGET: &str = "   fetcher";

/// Retrieve every result for `query`, one page at a time.
///
/// Pages are requested strictly in order, each one awaited before the next is issued. A page
/// holding fewer than `page_size` results is the last one. At most `max_pages` pages are
/// requested; when the cap is reached the results accumulated so far are returned.
pub async fn fetch_all<S: SearchSource>(
    source: &S,
    query: &SearchQuery,
    page_size: usize,
    max_pages: usize,
    progress: &dyn Progress,
) -> Result<Vec<SearchResult>> {
    if page_size == 0 {
        return Err(app_err!("page size must be at least 1"));
    }

    progress.set_phase("Fetching");
    progress.set_message("packages...");

    let mut results = Vec::new();
    for page in 0..max_pages {
        let page_results = source.search(query, page * page_size, page_size).await?;
        let received = page_results.len();
        results.extend(page_results);

        log::debug!(target: LOG_TARGET, "Page {page} of '{query}' returned {received} result(s)");
        progress.set_message(&format!("packages... {} so far", results.len()));

        if received < page_size {
            log::info!(target: LOG_TARGET, "Found {} package(s) for '{query}'", results.len());
            return Ok(results);
        }
    }

    log::warn!(
        target: LOG_TARGET,
        "Stopped after {max_pages} page(s) of results for '{query}'; the listing may be incomplete ({} results)",
        results.len()
    );

    Ok(results)
}
