use serde::{Deserialize, Serialize};

/// Score for one of the six quality dimensions, with the rationale lines
/// backing it. `details` is fixed-length per dimension: every rubric rule
/// contributes exactly one line whether it passed or failed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionScore {
    pub name: String,
    pub score: f64,
    pub max_score: f64,
    pub weight: f64,
    pub details: Vec<String>,
}

impl DimensionScore {
    /// Fraction of the dimension's budget achieved, on a 0-100 scale.
    pub fn percentage(&self) -> f64 {
        if self.max_score > 0.0 {
            self.score / self.max_score * 100.0
        } else {
            0.0
        }
    }
}

/// Output of the dimension evaluator: the six scores in fixed order plus
/// the weighted total, clamped to [0, 100].
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationResult {
    pub total_score: f64,
    pub dimensions: Vec<DimensionScore>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RepositoryRef {
    pub name: String,
    pub url: String,
    pub language: Option<String>,
}

/// The report handed verbatim to the presentation boundary.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub score: u32,
    pub label: String,
    pub summary: String,
    pub roadmap: Vec<String>,
    pub dimensions: Vec<DimensionScore>,
    pub repository: RepositoryRef,
}
