//! Sub-score extraction from collected package data
//!
//! Each extractor is a pure function of a [`CollectedPackage`]. Extractors that read a time
//! series or calibrate a measurement through [`normalize`] can fail with a [`ScoreError`];
//! the rest are infallible.
//!
//! Series that are absent from the collected data produce zeroed sub-scores. A series that is
//! present but lacks one of the required windows is an error, since the collector is expected
//! to always emit the full set.

mod maintenance;
mod normalize;
mod popularity;
mod quality;
mod score_error;
mod windows;

#[cfg(test)]
mod fixtures;

pub use maintenance::{CommitsFrequency, IsFinished, OpenIssues, ReleasesFrequency, commits_frequency, is_finished, open_issues, releases_frequency};
pub use normalize::{ScoreStep, normalize};
pub use popularity::{CommunityInterest, DownloadsAcceleration, community_interest, downloads_acceleration};
pub use quality::{Branding, Carefulness, Health, Tests, branding, carefulness, health, tests};
pub use score_error::ScoreError;

use crate::facts::CollectedPackage;
use semver::Version;
use serde::Serialize;

/// Every sub-score of a package, grouped the way npms.io groups them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageEvaluation {
    pub quality: QualityScores,
    pub popularity: PopularityScores,
    pub maintenance: MaintenanceScores,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityScores {
    pub carefulness: Carefulness,
    pub tests: Tests,
    pub health: Health,
    pub branding: Branding,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PopularityScores {
    pub community_interest: CommunityInterest,
    pub downloads_acceleration: DownloadsAcceleration,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceScores {
    pub releases_frequency: ReleasesFrequency,
    pub commits_frequency: CommitsFrequency,
    pub open_issues: OpenIssues,
    pub is_finished: IsFinished,
}

/// Run every extractor against `collected`.
pub fn evaluate(collected: &CollectedPackage) -> Result<PackageEvaluation, ScoreError> {
    Ok(PackageEvaluation {
        quality: QualityScores {
            carefulness: carefulness(collected)?,
            tests: tests(collected)?,
            health: health(collected)?,
            branding: branding(collected)?,
        },
        popularity: PopularityScores {
            community_interest: community_interest(collected),
            downloads_acceleration: downloads_acceleration(collected)?,
        },
        maintenance: MaintenanceScores {
            releases_frequency: releases_frequency(collected)?,
            commits_frequency: commits_frequency(collected)?,
            open_issues: open_issues(collected),
            is_finished: is_finished(collected),
        },
    })
}

pub(crate) const fn flag(value: bool) -> f64 {
    if value { 1.0 } else { 0.0 }
}

#[expect(clippy::cast_precision_loss, reason = "counts stay far below 2^52")]
pub(crate) const fn count_to_f64(count: u64) -> f64 {
    count as f64
}

#[expect(clippy::cast_precision_loss, reason = "lengths stay far below 2^52")]
pub(crate) const fn len_to_f64(len: usize) -> f64 {
    len as f64
}

/// Whether `version` is a valid semantic version at or above 1.0.0.
///
/// Unparseable versions are treated as unstable.
pub(crate) fn is_stable(version: &str) -> bool {
    let trimmed = version.trim();
    let trimmed = trimmed.strip_prefix('=').unwrap_or(trimmed).trim_start();
    let trimmed = trimmed.strip_prefix('v').unwrap_or(trimmed);

    Version::parse(trimmed).is_ok_and(|version| version >= Version::new(1, 0, 0))
}
