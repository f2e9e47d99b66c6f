//! Narrowing and ordering of author and maintainer listings
//!
//! A listing goes through [`process`] in a fixed order: the organization filter runs first,
//! then a stable sort on the selected [`SortKey`], then truncation to the requested count.
//! Without `reverse`, the sorted listing is inverted, so numeric and date keys present
//! highest-first while name and version read alphabetically.

mod pipeline;
mod sort_key;

pub use pipeline::{PublisherOptions, filter, limit, process, sort};
pub use sort_key::SortKey;
