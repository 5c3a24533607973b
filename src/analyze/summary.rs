use super::{code_quality, consistency, coverage, documentation, relevance, structure};
use crate::types::report::EvaluationResult;
use crate::types::snapshot::RepositorySnapshot;

const STRENGTH_THRESHOLD: f64 = 70.0;
const WEAKNESS_THRESHOLD: f64 = 50.0;

/// Fixed strength/weakness phrasing per dimension. Dimensions scoring in
/// the 50-70 band contribute to neither sentence.
fn phrases_for(name: &str) -> Option<(&'static str, &'static str)> {
    match name {
        documentation::NAME => Some(("strong documentation", "lacks comprehensive documentation")),
        structure::NAME => Some((
            "well-organized project structure",
            "needs better project organization",
        )),
        coverage::NAME => Some(("good test coverage", "missing test coverage")),
        code_quality::NAME => Some((
            "clean code organization",
            "code organization could be improved",
        )),
        consistency::NAME => Some((
            "consistent development practices",
            "inconsistent development activity",
        )),
        relevance::NAME => Some((
            "real-world applicability",
            "limited real-world application",
        )),
        _ => None,
    }
}

pub fn generate_summary(snapshot: &RepositorySnapshot, evaluation: &EvaluationResult) -> String {
    let mut strengths = Vec::new();
    let mut weaknesses = Vec::new();

    for dimension in &evaluation.dimensions {
        let Some((strength, weakness)) = phrases_for(&dimension.name) else {
            continue;
        };
        let percentage = dimension.percentage();
        if percentage >= STRENGTH_THRESHOLD {
            strengths.push(strength);
        } else if percentage < WEAKNESS_THRESHOLD {
            weaknesses.push(weakness);
        }
    }

    let mut summary = String::new();

    if strengths.is_empty() {
        summary.push_str("The repository shows potential but needs improvement across several areas. ");
    } else {
        summary.push_str(&format!(
            "The repository demonstrates {}. ",
            strengths.join(", ")
        ));
    }

    if !weaknesses.is_empty() {
        summary.push_str(&format!("However, it {}. ", weaknesses.join(", ")));
    }

    if !snapshot.has_readme {
        summary.push_str("A README file would significantly improve the project's accessibility. ");
    }
    if !snapshot.has_tests && snapshot.commit_count > 10 {
        summary.push_str(
            "Given the project's activity, adding test coverage would enhance reliability. ",
        );
    }
    if snapshot.is_fork {
        summary.push_str("As a forked repository, consider contributing original features to stand out. ");
    }

    summary.push_str(if evaluation.total_score >= 80.0 {
        "Overall, this is a well-maintained project with strong fundamentals."
    } else if evaluation.total_score >= 60.0 {
        "With some improvements, this project could reach professional standards."
    } else if evaluation.total_score >= 40.0 {
        "This project has a solid foundation but requires focused improvements."
    } else {
        "This project would benefit from significant enhancements to reach its potential."
    });

    summary.trim().to_string()
}
