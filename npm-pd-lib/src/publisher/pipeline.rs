use super::SortKey;
use crate::facts::SearchResult;
use core::cmp::Ordering;

/// How a package listing is narrowed and ordered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublisherOptions {
    pub sort: SortKey,

    /// Keep the natural comparator order instead of inverting it.
    pub reverse: bool,

    /// Only keep packages in this organization scope; a leading `@` is ignored.
    pub org: Option<String>,

    /// Keep at most this many packages; zero means no limit.
    pub limit: Option<usize>,
}

/// Filter, then sort, then limit a listing.
#[must_use]
pub fn process(results: Vec<SearchResult>, options: &PublisherOptions) -> Vec<SearchResult> {
    let mut results = filter(results, options.org.as_deref());
    sort(&mut results, options.sort, options.reverse);
    limit(&mut results, options.limit);
    results
}

#[must_use]
pub fn filter(results: Vec<SearchResult>, org: Option<&str>) -> Vec<SearchResult> {
    let Some(org) = org.filter(|org| !org.is_empty()) else {
        return results;
    };

    let scope = org.strip_prefix('@').unwrap_or(org);
    results
        .into_iter()
        .filter(|result| result.package.scope.as_deref() == Some(scope))
        .collect()
}

/// Stable sort by `key`, inverted unless `reverse` is set.
pub fn sort(results: &mut [SearchResult], key: SortKey, reverse: bool) {
    results.sort_by(|a, b| compare(key, a, b));
    if !reverse {
        results.reverse();
    }
}

pub fn limit(results: &mut Vec<SearchResult>, limit: Option<usize>) {
    if let Some(limit) = limit.filter(|&limit| limit > 0) {
        results.truncate(limit);
    }
}

// name and version compare in reverse so that the default inverted listing reads A to Z
fn compare(key: SortKey, a: &SearchResult, b: &SearchResult) -> Ordering {
    match key {
        SortKey::Name => b.package.name.cmp(&a.package.name),
        SortKey::Version => b.package.version.cmp(&a.package.version),
        SortKey::Date => a.package.date.cmp(&b.package.date),
        SortKey::Quality => a.score.detail.quality.total_cmp(&b.score.detail.quality),
        SortKey::Popularity => a.score.detail.popularity.total_cmp(&b.score.detail.popularity),
        SortKey::Maintenance => a.score.detail.maintenance.total_cmp(&b.score.detail.maintenance),
        SortKey::Score => a.score.final_score.total_cmp(&b.score.final_score),
    }
}
