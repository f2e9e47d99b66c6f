//! End-to-end tests for the `author`, `maintainer`, and `evaluate` commands, driven through
//! `run` against a mock npms.io server.

use npm_pd_lib::Host;
use serde_json::{Value, json};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Test host that captures output to in-memory buffers.
struct TestHost {
    output_buf: Vec<u8>,
    error_buf: Vec<u8>,
}

impl TestHost {
    const fn new() -> Self {
        Self {
            output_buf: Vec::new(),
            error_buf: Vec::new(),
        }
    }

    fn output_str(&self) -> String {
        String::from_utf8_lossy(&self.output_buf).into_owned()
    }

    fn error_str(&self) -> String {
        String::from_utf8_lossy(&self.error_buf).into_owned()
    }
}

impl Host for TestHost {
    fn output(&mut self) -> impl std::io::Write {
        &mut self.output_buf
    }

    fn error(&mut self) -> impl std::io::Write {
        &mut self.error_buf
    }
}

/// A configuration file with a small page size so listings span several pages.
fn small_page_config() -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("npm-pd.toml");
    fs::write(&path, "page_size = 2\nmax_pages = 10\nrequest_timeout = \"5s\"\n").unwrap();
    (dir, path)
}

fn search_result(name: &str, scope: &str, day: u32, final_score: f64) -> Value {
    json!({
        "package": {
            "name": name,
            "scope": scope,
            "version": "1.0.0",
            "date": format!("2024-01-{day:02}T12:00:00.000Z")
        },
        "score": {"final": final_score, "detail": {"quality": 0.5, "popularity": 0.25, "maintenance": 0.75}}
    })
}

async fn mount_search_page(server: &MockServer, claim: &str, from: usize, results: Vec<Value>) {
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", claim))
        .and(query_param("from", from.to_string()))
        .and(query_param("size", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"total": 3, "results": results})))
        .expect(1)
        .mount(server)
        .await;
}

async fn mount_alice_listing(server: &MockServer, claim: &str) {
    mount_search_page(
        server,
        claim,
        0,
        vec![search_result("old-low", "unscoped", 1, 0.1), search_result("@acme/new-high", "acme", 20, 0.9)],
    )
    .await;
    mount_search_page(server, claim, 2, vec![search_result("@acme/mid", "acme", 10, 0.5)]).await;
}

fn package_report() -> Value {
    json!({
        "analyzedAt": "2024-03-01T10:00:00.000Z",
        "collected": {
            "metadata": {
                "name": "left-pad",
                "version": "1.3.0",
                "date": "2018-04-09T01:33:52.000Z",
                "license": "WTFPL",
                "readme": "# left-pad",
                "hasTestScript": true,
                "dependencies": {"lodash": "^4.17.0", "chalk": "2.4.1"}
            },
            "source": {
                "files": {"readmeSize": 400, "testsSize": 200, "hasNpmIgnore": true},
                "outdatedDependencies": {"chalk": {"latest": "5.0.0"}}
            },
            "npm": {
                "starsCount": 2,
                "downloads": [
                    {"from": "2024-01-31T00:00:00.000Z", "to": "2024-03-01T00:00:00.000Z", "count": 300},
                    {"from": "2023-12-02T00:00:00.000Z", "to": "2024-03-01T00:00:00.000Z", "count": 900},
                    {"from": "2023-09-03T00:00:00.000Z", "to": "2024-03-01T00:00:00.000Z", "count": 1800},
                    {"from": "2023-03-02T00:00:00.000Z", "to": "2024-03-01T00:00:00.000Z", "count": 3650}
                ]
            }
        },
        "evaluation": {
            "quality": {"carefulness": 0.9, "tests": 0.6, "health": 0.5, "branding": 0},
            "popularity": {"communityInterest": 2, "downloadsCount": 100, "downloadsAcceleration": 0, "dependentsCount": 4000},
            "maintenance": {"releasesFrequency": 0.2, "commitsFrequency": 0, "openIssues": 1, "issuesDistribution": 1}
        },
        "score": {"final": 0.6543, "detail": {"quality": 0.8, "popularity": 0.25, "maintenance": 0.33}}
    })
}

#[tokio::test]
async fn test_author_command_renders_sorted_table() {
    let server = MockServer::start().await;
    mount_alice_listing(&server, "author:alice").await;
    let (_dir, config) = small_page_config();

    let uri = server.uri();
    let mut host = TestHost::new();
    let result = npm_pd_lib::run(
        &mut host,
        [
            "npm-pd",
            "author",
            "alice",
            "--sort",
            "score",
            "--config",
            config.to_str().unwrap(),
            "--api-url",
            uri.as_str(),
            "--color",
            "never",
        ],
    )
    .await;

    assert!(result.is_ok(), "author command failed: {result:?}");

    let output = host.output_str();
    assert!(output.contains("Last Update"));
    let high = output.find("@acme/new-high").unwrap();
    let mid = output.find("@acme/mid").unwrap();
    let low = output.find("old-low").unwrap();
    assert!(high < mid && mid < low, "unexpected order:\n{output}");
    assert!(output.contains("0.9000"));
    assert!(!output.contains('\u{1b}'));
}

#[tokio::test]
async fn test_maintainer_command_filters_and_limits_json() {
    let server = MockServer::start().await;
    mount_alice_listing(&server, "maintainer:alice").await;
    let (_dir, config) = small_page_config();

    let uri = server.uri();
    let mut host = TestHost::new();
    let result = npm_pd_lib::run(
        &mut host,
        [
            "npm-pd",
            "maintainer",
            "alice",
            "-o",
            "@acme",
            "-l",
            "1",
            "--json",
            "--config",
            config.to_str().unwrap(),
            "--api-url",
            uri.as_str(),
        ],
    )
    .await;

    assert!(result.is_ok(), "maintainer command failed: {result:?}");

    let parsed: Value = serde_json::from_str(&host.output_str()).unwrap();
    let results = parsed["results"].as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["package"]["name"], "@acme/new-high");
}

#[tokio::test]
async fn test_author_command_with_no_packages() {
    let server = MockServer::start().await;
    mount_search_page(&server, "author:nobody", 0, Vec::new()).await;
    let (_dir, config) = small_page_config();

    let uri = server.uri();
    let mut host = TestHost::new();
    let result = npm_pd_lib::run(
        &mut host,
        [
            "npm-pd",
            "author",
            "nobody",
            "--config",
            config.to_str().unwrap(),
            "--api-url",
            uri.as_str(),
            "--color",
            "never",
        ],
    )
    .await;

    assert!(result.is_ok(), "author command failed: {result:?}");
    assert!(host.error_str().contains("No packages found for 'author:nobody'"));
    assert!(host.output_str().contains("Last Update"));
}

#[tokio::test]
async fn test_evaluate_command_renders_report() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/package/left-pad"))
        .respond_with(ResponseTemplate::new(200).set_body_json(package_report()))
        .expect(1)
        .mount(&server)
        .await;
    let (_dir, config) = small_page_config();

    let uri = server.uri();
    let mut host = TestHost::new();
    let result = npm_pd_lib::run(
        &mut host,
        [
            "npm-pd",
            "evaluate",
            "left-pad",
            "--config",
            config.to_str().unwrap(),
            "--api-url",
            uri.as_str(),
            "--color",
            "never",
        ],
    )
    .await;

    assert!(result.is_ok(), "evaluate command failed: {result:?}");

    let output = host.output_str();
    for line in output.lines() {
        assert_eq!(line.chars().count(), 47, "line '{line}'");
    }
    assert!(output.contains("left-pad"));
    assert!(output.contains("\nScore:"));
    assert!(output.contains("\nQuality:"));
    assert!(output.contains("\nPopularity:"));
    assert!(output.contains("\nMaintenance:"));
    assert!(output.contains("  - Outdated Dependencies:"));
    assert!(output.contains("  Dependents Count:"));
}

#[tokio::test]
async fn test_evaluate_command_json() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/package/left-pad"))
        .respond_with(ResponseTemplate::new(200).set_body_json(package_report()))
        .mount(&server)
        .await;
    let (_dir, config) = small_page_config();

    let uri = server.uri();
    let mut host = TestHost::new();
    let result = npm_pd_lib::run(
        &mut host,
        [
            "npm-pd",
            "evaluate",
            "left-pad",
            "--json",
            "--config",
            config.to_str().unwrap(),
            "--api-url",
            uri.as_str(),
        ],
    )
    .await;

    assert!(result.is_ok(), "evaluate command failed: {result:?}");

    let parsed: Value = serde_json::from_str(&host.output_str()).unwrap();
    assert_eq!(parsed["name"], "left-pad");
    assert_eq!(parsed["derived"]["quality"]["carefulness"]["readme"], 1.0);
    assert_eq!(parsed["derived"]["quality"]["tests"]["tests"], 0.5);
    assert_eq!(parsed["derived"]["popularity"]["communityInterest"]["stars"], 2);

    let short_term = parsed["derived"]["popularity"]["downloadsAcceleration"]["shortTerm"].as_f64().unwrap();
    assert!((short_term - 0.0).abs() < 1e-9, "short term acceleration was {short_term}");
}

#[tokio::test]
async fn test_evaluate_command_unknown_package() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/package/nope"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    let (_dir, config) = small_page_config();

    let uri = server.uri();
    let mut host = TestHost::new();
    let result = npm_pd_lib::run(
        &mut host,
        [
            "npm-pd",
            "evaluate",
            "nope",
            "--config",
            config.to_str().unwrap(),
            "--api-url",
            uri.as_str(),
        ],
    )
    .await;

    let err = result.unwrap_err();
    assert!(format!("{err:#}").contains("package 'nope' not found"), "got: {err:#}");
    assert!(host.output_str().is_empty());
}

#[tokio::test]
async fn test_init_command_writes_config() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("npm-pd.toml");

    let mut host = TestHost::new();
    let result = npm_pd_lib::run(&mut host, ["npm-pd", "init", "--output", output.to_str().unwrap()]).await;

    assert!(result.is_ok(), "init command failed: {result:?}");
    let written = fs::read_to_string(&output).unwrap();
    assert!(written.contains("page_size = 250"));
    assert!(host.output_str().contains("Generated default configuration file"));
}
