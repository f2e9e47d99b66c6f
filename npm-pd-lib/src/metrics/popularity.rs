//! Popularity sub-scores: community interest and downloads acceleration.

use super::ScoreError;
use super::windows::{find_window, rate_per};
use crate::facts::CollectedPackage;
use serde::Serialize;

const SERIES: &str = "downloads";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunityInterest {
    pub stars: u64,
    pub forks: u64,
    pub subscribers: u64,
    pub contributors: u64,
}

/// Differences between mean daily downloads over successively longer windows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadsAcceleration {
    pub short_term: f64,
    pub mid_term: f64,
    pub long_term: f64,
}

#[must_use]
pub fn community_interest(collected: &CollectedPackage) -> CommunityInterest {
    let github = collected.github.as_ref();
    let npm_stars = collected.npm.as_ref().map_or(0, |npm| npm.stars_count);

    CommunityInterest {
        stars: github.map_or(0, |github| github.stars_count) + npm_stars,
        forks: github.map_or(0, |github| github.forks_count),
        subscribers: github.map_or(0, |github| github.subscribers_count),
        contributors: github
            .and_then(|github| github.contributors.as_ref())
            .map_or(0, |contributors| contributors.len() as u64),
    }
}

pub fn downloads_acceleration(collected: &CollectedPackage) -> Result<DownloadsAcceleration, ScoreError> {
    let Some(downloads) = collected.npm.as_ref().and_then(|npm| npm.downloads.as_deref()) else {
        return Ok(DownloadsAcceleration::default());
    };

    let mean = |days| find_window(downloads, SERIES, days).map(|range| rate_per(range, days, 1));
    let mean_30 = mean(30)?;
    let mean_90 = mean(90)?;
    let mean_180 = mean(180)?;
    let mean_365 = mean(365)?;

    Ok(DownloadsAcceleration {
        short_term: mean_30 - mean_90,
        mid_term: mean_90 - mean_180,
        long_term: mean_180 - mean_365,
    })
}
