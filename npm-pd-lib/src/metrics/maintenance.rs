//! Maintenance sub-scores: release and commit cadence, open issues, and finished-ness.

use super::windows::{find_window, rate_per};
use super::{ScoreError, flag, is_stable};
use crate::facts::CollectedPackage;
use serde::Serialize;

/// Releases are reported per quarter (90 days).
const RELEASES_BASE_DAYS: i64 = 90;

/// Commits are reported per month (30 days).
const COMMITS_BASE_DAYS: i64 = 30;

/// A package with fewer open issues than this can be considered finished.
const FEW_OPEN_ISSUES: u64 = 15;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleasesFrequency {
    pub last_month: f64,
    pub last_quarter: f64,
    pub last_year: f64,
    pub last_two_years: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitsFrequency {
    pub last_month: f64,
    pub last_quarter: f64,
    pub last_year: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenIssues {
    pub total_issues: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IsFinished {
    pub is_stable: f64,
    pub is_not_deprecated: f64,
    pub has_few_issues: f64,
    pub has_readme: f64,
    pub has_tests: f64,
    pub finished: f64,
}

pub fn releases_frequency(collected: &CollectedPackage) -> Result<ReleasesFrequency, ScoreError> {
    let Some(releases) = collected.metadata.releases.as_deref() else {
        return Ok(ReleasesFrequency::default());
    };

    let rate = |days| find_window(releases, "releases", days).map(|range| rate_per(range, days, RELEASES_BASE_DAYS));

    Ok(ReleasesFrequency {
        last_month: rate(30)?,
        last_quarter: rate(180)?,
        last_year: rate(365)?,
        last_two_years: rate(730)?,
    })
}

pub fn commits_frequency(collected: &CollectedPackage) -> Result<CommitsFrequency, ScoreError> {
    let Some(commits) = collected.github.as_ref().and_then(|github| github.commits.as_deref()) else {
        return Ok(CommitsFrequency::default());
    };

    let rate = |days| find_window(commits, "commits", days).map(|range| rate_per(range, days, COMMITS_BASE_DAYS));

    Ok(CommitsFrequency {
        last_month: rate(30)?,
        last_quarter: rate(180)?,
        last_year: rate(365)?,
    })
}

#[must_use]
pub fn open_issues(collected: &CollectedPackage) -> OpenIssues {
    let total_issues = collected
        .github
        .as_ref()
        .and_then(|github| github.issues.as_ref())
        .filter(|issues| !issues.is_disabled)
        .map_or(0, |issues| issues.count);

    OpenIssues { total_issues }
}

#[must_use]
pub fn is_finished(collected: &CollectedPackage) -> IsFinished {
    let metadata = &collected.metadata;

    let stable = is_stable(&metadata.version);
    let not_deprecated = !metadata.is_deprecated();

    // without issue data there is no evidence of few issues
    let few_issues = collected
        .github
        .as_ref()
        .and_then(|github| github.issues.as_ref())
        .and_then(|issues| issues.open_count)
        .is_some_and(|open| open < FEW_OPEN_ISSUES);

    let readme = metadata.has_readme();
    let tests = metadata.has_test_script;

    IsFinished {
        is_stable: flag(stable),
        is_not_deprecated: flag(not_deprecated),
        has_few_issues: flag(few_issues),
        has_readme: flag(readme),
        has_tests: flag(tests),
        finished: flag(stable && not_deprecated && few_issues && readme && tests),
    }
}
