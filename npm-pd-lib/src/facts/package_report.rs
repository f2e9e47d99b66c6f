use super::CollectedPackage;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Full npms.io analysis of a single package.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageReport {
    pub analyzed_at: DateTime<Utc>,
    pub collected: CollectedPackage,
    #[serde(default)]
    pub evaluation: Evaluation,
    pub score: Score,
}

/// Overall score, shared by package reports and search results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Score {
    #[serde(rename = "final")]
    pub final_score: f64,
    pub detail: ScoreDetail,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreDetail {
    pub quality: f64,
    pub popularity: f64,
    pub maintenance: f64,
}

/// Sub-scores as computed by npms.io itself.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Evaluation {
    #[serde(default)]
    pub quality: QualityEvaluation,
    #[serde(default)]
    pub popularity: PopularityEvaluation,
    #[serde(default)]
    pub maintenance: MaintenanceEvaluation,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QualityEvaluation {
    pub carefulness: f64,
    pub tests: f64,
    pub health: f64,
    pub branding: f64,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PopularityEvaluation {
    pub community_interest: f64,
    pub downloads_count: f64,
    pub downloads_acceleration: f64,
    pub dependents_count: f64,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MaintenanceEvaluation {
    pub releases_frequency: f64,
    pub commits_frequency: f64,
    pub open_issues: f64,
    pub issues_distribution: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_package_report() {
        let json = r#"{
            "analyzedAt": "2024-03-01T10:00:00.000Z",
            "collected": {"metadata": {"name": "ms", "version": "2.1.3"}},
            "evaluation": {
                "quality": {"carefulness": 0.9, "tests": 0.6, "health": 1, "branding": 0},
                "popularity": {"communityInterest": 5000, "downloadsCount": 1e8, "downloadsAcceleration": 1.5, "dependentsCount": 300},
                "maintenance": {"releasesFrequency": 0.2, "commitsFrequency": 0.1, "openIssues": 0.8, "issuesDistribution": 0.7}
            },
            "score": {"final": 0.71, "detail": {"quality": 0.9, "popularity": 0.5, "maintenance": 0.8}}
        }"#;

        let report: PackageReport = serde_json::from_str(json).unwrap();
        assert_eq!(report.collected.metadata.name, "ms");
        assert!((report.score.final_score - 0.71).abs() < f64::EPSILON);
        assert!((report.evaluation.popularity.community_interest - 5000.0).abs() < f64::EPSILON);
        assert!((report.evaluation.maintenance.issues_distribution - 0.7).abs() < f64::EPSILON);
    }

    #[test]
    fn test_missing_evaluation_defaults() {
        let json = r#"{
            "analyzedAt": "2024-03-01T10:00:00.000Z",
            "collected": {"metadata": {"name": "ms", "version": "2.1.3"}},
            "score": {"final": 0.5, "detail": {"quality": 0.5, "popularity": 0.5, "maintenance": 0.5}}
        }"#;

        let report: PackageReport = serde_json::from_str(json).unwrap();
        assert!(report.evaluation.quality.carefulness.abs() < f64::EPSILON);
    }
}
