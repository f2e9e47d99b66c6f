//! Data retrieval from the npms.io analytics service
//!
//! This module owns everything that comes from outside the process: the shapes of the
//! npms.io responses, the HTTP client that fetches them, and the paginated fetch loop used
//! to list every package claimed by an author or maintainer.
//!
//! # Implementation Model
//!
//! - [`CollectedPackage`] and [`PackageReport`] mirror the package-details endpoint. They are
//!   immutable snapshots; the metrics layer only ever reads them.
//! - [`SearchResult`] mirrors one row of the search endpoint.
//! - [`SearchSource`] abstracts the search endpoint so the fetch loop can be driven by
//!   something other than the network.
//! - [`fetch_all`] requests pages one after another until a short page (or the page cap)
//!   ends the listing.

mod client;
mod collected;
mod fetcher;
mod package_report;
mod progress;
mod search;
mod time_range;

pub use client::Client;
pub use collected::{CollectedPackage, Contributor, GitHub, Issues, Links, Metadata, Npm, Repository, Source, SourceFiles, Status};
pub use fetcher::fetch_all;
pub use package_report::{Evaluation, MaintenanceEvaluation, PackageReport, PopularityEvaluation, QualityEvaluation, Score, ScoreDetail};
pub use progress::Progress;
pub use search::{Claim, SearchPackage, SearchQuery, SearchResponse, SearchResult, SearchSource};
pub use time_range::TimeRange;
