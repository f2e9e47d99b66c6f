use core::str::FromStr;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

const LOG_TARGET: &str = " publisher";

/// The column a package listing is ordered by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, EnumIter, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Name,
    Version,
    #[default]
    Date,
    Quality,
    Popularity,
    Maintenance,
    Score,
}

impl SortKey {
    /// Parse a user-supplied sort key, falling back to [`SortKey::Date`] for anything unrecognized.
    #[must_use]
    pub fn parse_lenient(value: &str) -> Self {
        Self::from_str(value.trim()).unwrap_or_else(|_| {
            let known = Self::iter().map(|key| key.to_string()).collect::<Vec<_>>().join(", ");
            log::warn!(target: LOG_TARGET, "Unknown sort key '{value}' (expected one of {known}); sorting by date");
            Self::Date
        })
    }
}
