//! The `collected` section of an npms.io package analysis.
//!
//! Everything except the package name and version is optional. Absent sections deserialize to
//! `None` and absent lists or maps to empty collections, so extractors never need to check for
//! the presence of a field at runtime.

use super::TimeRange;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Snapshot of everything npms.io knows about one package.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectedPackage {
    pub metadata: Metadata,
    #[serde(default)]
    pub source: Option<Source>,
    #[serde(default)]
    pub github: Option<GitHub>,
    #[serde(default)]
    pub npm: Option<Npm>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub scope: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub license: Option<String>,

    /// Deprecation message, if the package is deprecated.
    #[serde(default)]
    pub deprecated: Option<String>,

    #[serde(default)]
    pub has_selective_files: bool,
    #[serde(default)]
    pub has_test_script: bool,

    /// Dependency name to declared semver range.
    #[serde(default)]
    pub dependencies: BTreeMap<String, String>,

    #[serde(default)]
    pub readme: Option<String>,
    #[serde(default)]
    pub releases: Option<Vec<TimeRange>>,
    #[serde(default)]
    pub repository: Option<Repository>,
    #[serde(default)]
    pub links: Option<Links>,
}

impl Metadata {
    #[must_use]
    pub fn is_deprecated(&self) -> bool {
        self.deprecated.as_deref().is_some_and(|message| !message.is_empty())
    }

    #[must_use]
    pub fn has_readme(&self) -> bool {
        self.readme.as_deref().is_some_and(|readme| !readme.is_empty())
    }

    #[must_use]
    pub fn has_license(&self) -> bool {
        self.license.as_deref().is_some_and(|license| !license.is_empty())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Repository {
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Links {
    #[serde(default)]
    pub npm: Option<String>,
    #[serde(default)]
    pub homepage: Option<String>,
    #[serde(default)]
    pub repository: Option<String>,
    #[serde(default)]
    pub bugs: Option<String>,
}

/// Results of npms.io's analysis of the package source tarball and repository.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Source {
    #[serde(default)]
    pub files: SourceFiles,

    /// Linters detected in the repository; presence alone counts, even when empty.
    #[serde(default)]
    pub linters: Option<Vec<String>>,

    #[serde(default)]
    pub coverage: Option<f64>,

    #[serde(default)]
    pub outdated_dependencies: Option<BTreeMap<String, serde_json::Value>>,

    #[serde(default)]
    pub vulnerabilities: Option<Vec<serde_json::Value>>,

    #[serde(default)]
    pub badges: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceFiles {
    #[serde(default)]
    pub readme_size: u64,
    #[serde(default)]
    pub tests_size: u64,
    #[serde(default)]
    pub has_npm_ignore: bool,
    #[serde(default)]
    pub has_changelog: bool,
    #[serde(default)]
    pub has_shrinkwrap: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GitHub {
    #[serde(default)]
    pub homepage: Option<String>,
    #[serde(default)]
    pub stars_count: u64,
    #[serde(default)]
    pub forks_count: u64,
    #[serde(default)]
    pub subscribers_count: u64,
    #[serde(default)]
    pub issues: Option<Issues>,
    #[serde(default)]
    pub contributors: Option<Vec<Contributor>>,
    #[serde(default)]
    pub commits: Option<Vec<TimeRange>>,
    #[serde(default)]
    pub statuses: Vec<Status>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issues {
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub open_count: Option<u64>,
    #[serde(default)]
    pub is_disabled: bool,
    #[serde(default)]
    pub distribution: BTreeMap<String, u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contributor {
    pub username: String,
    #[serde(default)]
    pub commits_count: u64,
}

/// A CI status reported for the repository's default branch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Status {
    #[serde(default)]
    pub context: String,
    pub state: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Npm {
    #[serde(default)]
    pub stars_count: u64,
    #[serde(default)]
    pub dependents_count: u64,
    #[serde(default)]
    pub downloads: Option<Vec<TimeRange>>,
}
