use super::Score;
use crate::Result;
use chrono::{DateTime, Utc};
use core::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};
use strum::{Display as StrumDisplay, EnumString};

/// The relationship between a person and the packages being searched for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Claim {
    Author,
    Maintainer,
}

/// A search for every package claimed by a given npm user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub claim: Claim,
    pub name: String,
}

impl SearchQuery {
    #[must_use]
    pub fn new(claim: Claim, name: impl Into<String>) -> Self {
        Self { claim, name: name.into() }
    }
}

impl Display for SearchQuery {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}:{}", self.claim, self.name)
    }
}

/// One row of an npms.io search response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub package: SearchPackage,
    pub score: Score,
    #[serde(default)]
    pub search_score: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchPackage {
    pub name: String,
    pub version: String,
    pub date: DateTime<Utc>,

    /// Organization scope without the leading `@`; npms.io reports `unscoped` when there is none.
    #[serde(default)]
    pub scope: Option<String>,

    #[serde(default)]
    pub description: Option<String>,
}

/// Body of an npms.io search response.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub total: u64,
    pub results: Vec<SearchResult>,
}

/// Anything that can answer a paged search.
pub trait SearchSource: Sync {
    /// Return up to `size` results starting at result offset `from`.
    fn search(&self, query: &SearchQuery, from: usize, size: usize) -> impl Future<Output = Result<Vec<SearchResult>>> + Send;
}
