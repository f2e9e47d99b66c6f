//! Builders for collected package data used by the metric tests.

use crate::facts::{CollectedPackage, Metadata, TimeRange};
use chrono::{Duration, TimeZone, Utc};

pub fn package(version: &str) -> CollectedPackage {
    CollectedPackage {
        metadata: Metadata {
            name: "fixture".into(),
            version: version.into(),
            ..Metadata::default()
        },
        source: None,
        github: None,
        npm: None,
    }
}

/// A series of windows ending on the same day, given as `(days, count)` pairs.
pub fn series(windows: &[(i64, u64)]) -> Vec<TimeRange> {
    let to = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
    windows
        .iter()
        .map(|&(days, count)| TimeRange {
            from: to - Duration::days(days),
            to,
            count,
        })
        .collect()
}
