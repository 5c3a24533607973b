use super::rubric::Rubric;
use super::tree;
use crate::types::report::DimensionScore;
use crate::types::snapshot::RepositorySnapshot;
use chrono::{DateTime, Utc};

pub const NAME: &str = "Real-world Relevance";

/// `now` is captured once at the analyze boundary so the recency tier is
/// deterministic for a given snapshot.
pub fn evaluate(snapshot: &RepositorySnapshot, now: DateTime<Utc>) -> DimensionScore {
    let mut rubric = Rubric::new(NAME, 15.0, 0.15);

    let stars = snapshot.stars;
    rubric.tiered(
        vec![
            (
                stars > 100,
                5.0,
                format!("High community interest ({stars} stars)"),
            ),
            (
                stars > 10,
                3.0,
                format!("Some community interest ({stars} stars)"),
            ),
            (stars > 0, 1.0, format!("Has {stars} star(s)")),
        ],
        "No stars yet",
    );

    let forks = snapshot.forks;
    rubric.tiered(
        vec![
            (forks > 50, 4.0, format!("High reusability ({forks} forks)")),
            (forks > 5, 2.0, format!("Some reusability ({forks} forks)")),
        ],
        "Few or no forks",
    );

    let file_count = tree::count_files(&snapshot.file_structure);
    rubric.tiered(
        vec![
            (
                file_count > 20,
                3.0,
                format!("Substantial project ({file_count} files)"),
            ),
            (
                file_count > 5,
                1.0,
                format!("Moderate project size ({file_count} files)"),
            ),
        ],
        "Small project - consider expanding functionality",
    );

    let days_since_update = (now - snapshot.updated_at).num_seconds() as f64 / 86_400.0;
    rubric.tiered(
        vec![
            (days_since_update < 30.0, 3.0, "Recently updated".to_string()),
            (
                days_since_update < 180.0,
                1.0,
                "Moderately maintained".to_string(),
            ),
        ],
        "Project appears inactive",
    );

    rubric.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::snapshot::test_support::{dir, empty_snapshot, file};
    use chrono::{Duration, TimeZone};

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn abandoned_empty_repository_scores_zero() {
        let dimension = evaluate(&empty_snapshot(), fixed_now());
        assert!((dimension.score - 0.0).abs() < f64::EPSILON);
        assert!(dimension
            .details
            .iter()
            .any(|line| line.contains("inactive")));
        assert!(dimension.details.iter().any(|line| line.contains("Small")));
    }

    #[test]
    fn star_tiers_are_mutually_exclusive() {
        let mut snapshot = empty_snapshot();
        snapshot.stars = 150;
        let high = evaluate(&snapshot, fixed_now());
        snapshot.stars = 50;
        let mid = evaluate(&snapshot, fixed_now());
        snapshot.stars = 1;
        let low = evaluate(&snapshot, fixed_now());
        assert!((high.score - mid.score - 2.0).abs() < f64::EPSILON);
        assert!((mid.score - low.score - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn recent_update_earns_the_top_recency_tier() {
        let mut snapshot = empty_snapshot();
        snapshot.updated_at = fixed_now() - Duration::days(5);
        let dimension = evaluate(&snapshot, fixed_now());
        assert!(dimension
            .details
            .iter()
            .any(|line| line.contains("Recently updated")));
    }

    #[test]
    fn popular_active_project_fills_the_budget() {
        let mut snapshot = empty_snapshot();
        snapshot.stars = 150;
        snapshot.forks = 60;
        snapshot.updated_at = fixed_now() - Duration::days(5);
        let files: Vec<_> = (0..25)
            .map(|i| file(&format!("f{i}.rs"), &format!("src/f{i}.rs")))
            .collect();
        snapshot.file_structure = vec![dir("src", "src", files)];
        let dimension = evaluate(&snapshot, fixed_now());
        assert!((dimension.score - 15.0).abs() < f64::EPSILON);
    }
}
