use super::rubric::Rubric;
use crate::types::report::DimensionScore;
use crate::types::snapshot::RepositorySnapshot;
use chrono::{DateTime, Utc};

pub const NAME: &str = "Commit & Development Consistency";

pub fn evaluate(snapshot: &RepositorySnapshot, now: DateTime<Utc>) -> DimensionScore {
    let mut rubric = Rubric::new(NAME, 15.0, 0.15);

    let commits = snapshot.commit_count;
    rubric.tiered(
        vec![
            (
                commits > 50,
                5.0,
                format!("Active development ({commits} commits analyzed)"),
            ),
            (
                commits > 20,
                3.0,
                format!("Moderate activity ({commits} commits)"),
            ),
            (commits > 5, 1.0, format!("Some commits ({commits} commits)")),
        ],
        "Very few commits - project may be new or inactive",
    );

    let frequency = snapshot.commit_frequency;
    rubric.tiered(
        vec![
            (frequency > 10.0, 5.0, "High commit frequency".to_string()),
            (frequency > 3.0, 3.0, "Regular commit frequency".to_string()),
            (frequency > 0.0, 1.0, "Some commit activity".to_string()),
        ],
        "No recent commit activity",
    );

    let branches = snapshot.branch_count;
    rubric.tiered(
        vec![
            (
                branches > 3,
                3.0,
                "Uses multiple branches effectively".to_string(),
            ),
            (branches > 1, 1.0, "Uses branches".to_string()),
        ],
        "Only using default branch",
    );

    let age_months = (now - snapshot.created_at).num_seconds() as f64 / (86_400.0 * 30.0);
    rubric.rule(
        age_months > 6.0 && snapshot.commit_count > 20,
        2.0,
        "Established project with ongoing development",
        "Not yet an established long-running project",
    );

    rubric.finish()
}
