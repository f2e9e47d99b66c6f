//! Sample data shared by the report tests.

use crate::facts::{PackageReport, Score, ScoreDetail, SearchPackage, SearchResult};
use chrono::{TimeZone, Utc};

pub fn sample_report() -> PackageReport {
    serde_json::from_str(
        r##"{
            "analyzedAt": "2024-03-01T10:00:00.000Z",
            "collected": {
                "metadata": {
                    "name": "left-pad",
                    "version": "1.3.0",
                    "date": "2018-04-09T01:33:52.000Z",
                    "license": "WTFPL",
                    "readme": "# left-pad",
                    "hasTestScript": true,
                    "dependencies": {"chalk": "^2.4.1", "lodash": "*"},
                    "repository": {"type": "git", "url": "git+https://github.com/left-pad/left-pad.git"},
                    "links": {"homepage": "https://left-pad.io"},
                    "releases": [
                        {"from": "2024-01-31T00:00:00.000Z", "to": "2024-03-01T00:00:00.000Z", "count": 1},
                        {"from": "2023-09-03T00:00:00.000Z", "to": "2024-03-01T00:00:00.000Z", "count": 3},
                        {"from": "2023-03-02T00:00:00.000Z", "to": "2024-03-01T00:00:00.000Z", "count": 6},
                        {"from": "2022-03-02T00:00:00.000Z", "to": "2024-03-01T00:00:00.000Z", "count": 9}
                    ]
                },
                "source": {
                    "files": {"readmeSize": 200, "testsSize": 100, "hasChangelog": true},
                    "linters": ["eslint"],
                    "coverage": 0.8,
                    "outdatedDependencies": {"chalk": {"latest": "5.3.0"}},
                    "vulnerabilities": [],
                    "badges": [{"urls": {}}, {"urls": {}}]
                },
                "github": {
                    "starsCount": 1200,
                    "forksCount": 90,
                    "subscribersCount": 15,
                    "issues": {"count": 40, "openCount": 3, "isDisabled": false},
                    "contributors": [{"username": "stevemao"}, {"username": "azer"}],
                    "statuses": [{"context": "ci", "state": "success"}, {"context": "lint", "state": "pending"}],
                    "commits": [
                        {"from": "2024-01-31T00:00:00.000Z", "to": "2024-03-01T00:00:00.000Z", "count": 6},
                        {"from": "2023-09-03T00:00:00.000Z", "to": "2024-03-01T00:00:00.000Z", "count": 30},
                        {"from": "2023-03-02T00:00:00.000Z", "to": "2024-03-01T00:00:00.000Z", "count": 73}
                    ]
                },
                "npm": {
                    "starsCount": 5,
                    "dependentsCount": 12,
                    "downloads": [
                        {"from": "2024-01-31T00:00:00.000Z", "to": "2024-03-01T00:00:00.000Z", "count": 3600},
                        {"from": "2023-12-02T00:00:00.000Z", "to": "2024-03-01T00:00:00.000Z", "count": 9000},
                        {"from": "2023-09-03T00:00:00.000Z", "to": "2024-03-01T00:00:00.000Z", "count": 16110},
                        {"from": "2023-03-02T00:00:00.000Z", "to": "2024-03-01T00:00:00.000Z", "count": 29200}
                    ]
                }
            },
            "evaluation": {
                "quality": {"carefulness": 0.5, "tests": 0.6, "health": 1, "branding": 0},
                "popularity": {"communityInterest": 1306, "downloadsCount": 1234567.5, "downloadsAcceleration": -12.25, "dependentsCount": 0},
                "maintenance": {"releasesFrequency": 0.1, "commitsFrequency": 0, "openIssues": 1, "issuesDistribution": 0.75}
            },
            "score": {"final": 0.6543, "detail": {"quality": 0.8, "popularity": 0.25, "maintenance": 0.33333}}
        }"##,
    )
    .unwrap()
}

pub fn sample_listing() -> Vec<SearchResult> {
    vec![
        SearchResult {
            package: SearchPackage {
                name: "left-pad".into(),
                version: "1.3.0".into(),
                date: Utc.with_ymd_and_hms(2018, 4, 9, 1, 33, 52).unwrap(),
                scope: Some("unscoped".into()),
                description: Some("String left pad".into()),
            },
            score: Score {
                final_score: 0.65,
                detail: ScoreDetail {
                    quality: 0.81234,
                    popularity: 0.1,
                    maintenance: 1.0,
                },
            },
            search_score: Some(12.5),
        },
        SearchResult {
            package: SearchPackage {
                name: "@acme/widget".into(),
                version: "0.2.0".into(),
                date: Utc.with_ymd_and_hms(2023, 7, 15, 12, 0, 0).unwrap(),
                scope: Some("acme".into()),
                description: None,
            },
            score: Score {
                final_score: 0.4,
                detail: ScoreDetail {
                    quality: 0.5,
                    popularity: 0.2,
                    maintenance: 0.33333,
                },
            },
            search_score: None,
        },
    ]
}
