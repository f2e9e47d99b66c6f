use crate::Result;
use crate::facts::{Evaluation, PackageReport, Score, SearchResult};
use crate::metrics::PackageEvaluation;
use chrono::{DateTime, Utc};
use core::fmt::Write;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct ListingDocument<'a> {
    total: usize,
    results: &'a [SearchResult],
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EvaluationDocument<'a> {
    name: &'a str,
    version: &'a str,
    analyzed_at: DateTime<Utc>,
    score: &'a Score,
    evaluation: &'a Evaluation,
    derived: &'a PackageEvaluation,
}

/// Write a processed listing as a JSON document.
pub fn generate_listing<W: Write>(results: &[SearchResult], writer: &mut W) -> Result<()> {
    let document = ListingDocument {
        total: results.len(),
        results,
    };

    writeln!(writer, "{}", serde_json::to_string_pretty(&document)?)?;
    Ok(())
}

/// Write a package report together with the locally derived sub-scores.
pub fn generate_evaluation<W: Write>(report: &PackageReport, evaluation: &PackageEvaluation, writer: &mut W) -> Result<()> {
    let metadata = &report.collected.metadata;
    let document = EvaluationDocument {
        name: &metadata.name,
        version: &metadata.version,
        analyzed_at: report.analyzed_at,
        score: &report.score,
        evaluation: &report.evaluation,
        derived: evaluation,
    };

    writeln!(writer, "{}", serde_json::to_string_pretty(&document)?)?;
    Ok(())
}
