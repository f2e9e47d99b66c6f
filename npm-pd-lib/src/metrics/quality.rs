//! Quality sub-scores: carefulness, tests, health, and branding.

use super::{ScoreError, ScoreStep, count_to_f64, flag, is_stable, len_to_f64, normalize};
use crate::facts::{CollectedPackage, Status};
use semver::{Comparator, Op, Version, VersionReq};
use serde::Serialize;
use url::Url;

const README_STEPS: [ScoreStep; 2] = [ScoreStep::new(0.0, 0.0), ScoreStep::new(400.0, 1.0)];
const BADGES_STEPS: [ScoreStep; 2] = [ScoreStep::new(0.0, 0.0), ScoreStep::new(4.0, 1.0)];
const TESTS_SIZE_FULL: f64 = 400.0;

/// A range admitting this version or anything newer is considered loosely pinned.
const FAR_FUTURE: Version = Version::new(1_000_000, 0, 0);

const SUCCESS_WEIGHT: f64 = 1.0;
const PENDING_WEIGHT: f64 = 0.3;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Carefulness {
    pub license: f64,
    pub readme: f64,
    pub linters: f64,
    pub ignore: f64,
    pub changelog: f64,
    pub not_deprecated: f64,
    pub stable: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tests {
    pub tests: f64,
    pub status: f64,
    pub coverage: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Health {
    pub outdated: f64,
    pub vulnerabilities: f64,
    pub unlocked: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Branding {
    pub homepage: f64,
    pub badges: f64,
}

pub fn carefulness(collected: &CollectedPackage) -> Result<Carefulness, ScoreError> {
    let metadata = &collected.metadata;
    let source = collected.source.as_ref();
    let files = source.map(|source| &source.files);

    Ok(Carefulness {
        license: flag(metadata.has_license()),
        readme: normalize(count_to_f64(files.map_or(0, |files| files.readme_size)), &README_STEPS)?,
        linters: flag(source.is_some_and(|source| source.linters.is_some())),
        ignore: flag(files.is_some_and(|files| files.has_npm_ignore) || metadata.has_selective_files),
        changelog: flag(files.is_some_and(|files| files.has_changelog)),
        not_deprecated: flag(!metadata.is_deprecated()),
        stable: flag(is_stable(&metadata.version)),
    })
}

pub fn tests(collected: &CollectedPackage) -> Result<Tests, ScoreError> {
    let Some(source) = &collected.source else {
        return Ok(Tests::default());
    };

    // packages without a test script get at most half credit for their tests
    let ceiling = if collected.metadata.has_test_script { 1.0 } else { 0.5 };
    let tests_steps = [ScoreStep::new(0.0, 0.0), ScoreStep::new(TESTS_SIZE_FULL, ceiling)];

    let statuses = collected.github.as_ref().map(|github| github.statuses.as_slice()).unwrap_or_default();

    Ok(Tests {
        tests: normalize(count_to_f64(source.files.tests_size), &tests_steps)?,
        status: status_evaluation(statuses),
        coverage: source.coverage.unwrap_or(0.0),
    })
}

fn status_evaluation(statuses: &[Status]) -> f64 {
    let total = len_to_f64(statuses.len());
    statuses
        .iter()
        .map(|status| match status.state.as_str() {
            "success" => SUCCESS_WEIGHT / total,
            "pending" => PENDING_WEIGHT / total,
            _ => 0.0,
        })
        .sum()
}

pub fn health(collected: &CollectedPackage) -> Result<Health, ScoreError> {
    let dependencies = &collected.metadata.dependencies;
    if dependencies.is_empty() {
        return Ok(Health {
            outdated: 1.0,
            vulnerabilities: 1.0,
            unlocked: 1.0,
        });
    }

    let Some(source) = &collected.source else {
        return Ok(Health::default());
    };

    let dependency_count = len_to_f64(dependencies.len());
    let outdated_count = source.outdated_dependencies.as_ref().map_or(0, |outdated| outdated.len());
    let vulnerability_count = source.vulnerabilities.as_ref().map_or(0, Vec::len);

    // a shrinkwrap pins every dependency regardless of the declared ranges
    let unlocked_count = if source.files.has_shrinkwrap {
        0
    } else {
        dependencies.values().filter(|range| is_unlocked_range(range)).count()
    };

    let penalty_steps = [ScoreStep::new(0.0, 1.0), ScoreStep::new((dependency_count / 4.0).max(2.0), 0.0)];

    Ok(Health {
        outdated: normalize(len_to_f64(outdated_count), &penalty_steps)?,
        vulnerabilities: normalize(len_to_f64(vulnerability_count), &penalty_steps)?,
        unlocked: 1.0 / (len_to_f64(unlocked_count) + 1.0),
    })
}

/// Whether an npm range is valid and admits arbitrarily new versions (e.g. `*` or `>=1.6.0`).
fn is_unlocked_range(range: &str) -> bool {
    parse_npm_range(range).is_some_and(|alternatives| alternatives.iter().any(admits_far_future))
}

/// A comparator set describes one interval, so anything it admits at or above `FAR_FUTURE`
/// starts either at `FAR_FUTURE` itself or at one of its lower bounds.
fn admits_far_future(req: &VersionReq) -> bool {
    req.matches(&FAR_FUTURE)
        || req
            .comparators
            .iter()
            .filter_map(lower_bound)
            .any(|floor| floor >= FAR_FUTURE && req.matches(&floor))
}

/// Smallest version a comparator admits, or `None` when it only bounds from above.
fn lower_bound(comparator: &Comparator) -> Option<Version> {
    let major = comparator.major;
    let minor = comparator.minor.unwrap_or(0);
    let patch = comparator.patch.unwrap_or(0);

    match comparator.op {
        Op::Less | Op::LessEq => None,
        Op::Greater if !comparator.pre.is_empty() => Some(Version::new(major, minor, patch)),
        Op::Greater => Some(match (comparator.minor, comparator.patch) {
            (Some(_), Some(_)) => Version::new(major, minor, patch.saturating_add(1)),
            (Some(_), None) => Version::new(major, minor.saturating_add(1), 0),
            (None, _) => Version::new(major.saturating_add(1), 0, 0),
        }),
        _ => {
            let mut floor = Version::new(major, minor, patch);
            floor.pre = comparator.pre.clone();
            Some(floor)
        }
    }
}

/// Parse an npm range (`||`-separated sets of whitespace-separated comparators).
fn parse_npm_range(range: &str) -> Option<Vec<VersionReq>> {
    range.split("||").map(parse_comparator_set).collect()
}

fn parse_comparator_set(set: &str) -> Option<VersionReq> {
    let tokens: Vec<&str> = set.split_whitespace().collect();
    let comparators = match tokens.as_slice() {
        [] => vec!["*".to_string()],
        [low, "-", high] => vec![format!(">={}", strip_v(low)), format!("<={}", strip_v(high))],
        _ => join_operators(&tokens)?,
    };
    VersionReq::parse(&comparators.join(", ")).ok()
}

fn is_operator(c: char) -> bool {
    matches!(c, '<' | '>' | '=' | '~' | '^')
}

/// Glue operators written apart from their version (`>= 1.2.3`) back onto it.
fn join_operators(tokens: &[&str]) -> Option<Vec<String>> {
    let mut comparators = Vec::with_capacity(tokens.len());
    let mut pending = String::new();

    for token in tokens {
        if token.chars().all(is_operator) {
            pending.push_str(token);
        } else {
            comparators.push(format!("{pending}{}", strip_v(token)));
            pending.clear();
        }
    }

    pending.is_empty().then_some(comparators)
}

/// Drop a `v` prefix from the version part of a comparator (`>=v1.0.0` becomes `>=1.0.0`).
fn strip_v(comparator: &str) -> String {
    let split = comparator.find(|c| !is_operator(c)).unwrap_or(comparator.len());
    let (operator, version) = comparator.split_at(split);
    format!("{operator}{}", version.strip_prefix('v').unwrap_or(version))
}

pub fn branding(collected: &CollectedPackage) -> Result<Branding, ScoreError> {
    let metadata = &collected.metadata;

    let repository_url = metadata.repository.as_ref().and_then(|repository| repository.url.as_deref());
    let homepage_url = metadata
        .links
        .as_ref()
        .and_then(|links| links.homepage.as_deref())
        .or_else(|| collected.github.as_ref().and_then(|github| github.homepage.as_deref()));

    let has_custom_homepage = match (repository_url.and_then(url_host), homepage_url.and_then(url_host)) {
        (Some(repository), Some(homepage)) => !repository.eq_ignore_ascii_case(&homepage),
        _ => false,
    };

    let badge_count = collected.source.as_ref().map_or(0, |source| source.badges.len());

    Ok(Branding {
        homepage: flag(has_custom_homepage),
        badges: normalize(len_to_f64(badge_count), &BADGES_STEPS)?,
    })
}

fn url_host(raw: &str) -> Option<String> {
    Url::parse(raw).ok()?.host_str().map(str::to_owned)
}
