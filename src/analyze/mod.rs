pub mod code_quality;
pub mod consistency;
pub mod coverage;
pub mod documentation;
pub mod relevance;
pub mod roadmap;
pub mod rubric;
pub mod structure;
pub mod summary;
pub mod tree;

use crate::types::report::{AnalysisReport, EvaluationResult, RepositoryRef};
use crate::types::snapshot::RepositorySnapshot;
use chrono::{DateTime, Utc};

/// Runs the six dimension evaluators in their fixed presentation order and
/// aggregates the weighted total. Each dimension contributes its achieved
/// percentage times its weight; weights sum to 1.0, so the unclamped
/// ceiling is exactly 100.
pub fn evaluate(snapshot: &RepositorySnapshot, now: DateTime<Utc>) -> EvaluationResult {
    let dimensions = vec![
        code_quality::evaluate(snapshot),
        structure::evaluate(snapshot),
        documentation::evaluate(snapshot),
        coverage::evaluate(snapshot),
        relevance::evaluate(snapshot, now),
        consistency::evaluate(snapshot, now),
    ];

    let total: f64 = dimensions
        .iter()
        .map(|dimension| dimension.percentage() * dimension.weight)
        .sum();

    EvaluationResult {
        total_score: total.clamp(0.0, 100.0),
        dimensions,
    }
}

/// Categorical label for a rounded total score, highest tier first.
pub fn score_label(score: u32) -> &'static str {
    if score >= 85 {
        "Gold / Advanced"
    } else if score >= 70 {
        "Silver / Intermediate"
    } else if score >= 50 {
        "Bronze / Beginner"
    } else {
        "Needs Improvement"
    }
}

/// Full pipeline over one snapshot: evaluation, narrative, roadmap, label.
pub fn analyze(snapshot: &RepositorySnapshot, source_url: &str) -> AnalysisReport {
    analyze_at(snapshot, source_url, Utc::now())
}

/// Same as [`analyze`], with the reference instant injected so time-based
/// rules are reproducible in tests.
pub fn analyze_at(
    snapshot: &RepositorySnapshot,
    source_url: &str,
    now: DateTime<Utc>,
) -> AnalysisReport {
    let evaluation = evaluate(snapshot, now);
    let summary = summary::generate_summary(snapshot, &evaluation);
    let roadmap = roadmap::generate_roadmap(snapshot, &evaluation);
    let score = evaluation.total_score.round() as u32;

    AnalysisReport {
        score,
        label: score_label(score).to_string(),
        summary,
        roadmap,
        dimensions: evaluation.dimensions,
        repository: RepositoryRef {
            name: snapshot.full_name.clone(),
            url: source_url.to_string(),
            language: snapshot.language.clone(),
        },
    }
}
