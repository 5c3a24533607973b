use super::rubric::Rubric;
use crate::types::report::DimensionScore;
use crate::types::snapshot::RepositorySnapshot;

pub const NAME: &str = "Test Coverage & Maintainability";

pub fn evaluate(snapshot: &RepositorySnapshot) -> DimensionScore {
    let mut rubric = Rubric::new(NAME, 15.0, 0.15);

    rubric.rule(
        snapshot.has_tests,
        8.0,
        format!("Has {} test file(s)", snapshot.test_files.len()),
        "No test files found",
    );

    let organized = snapshot.test_files.iter().any(|path| {
        path.contains("test") || path.contains("spec") || path.contains("__tests__")
    });
    rubric.rule(
        organized,
        3.0,
        "Tests are well-organized",
        "Tests lack a conventional layout",
    );

    rubric.rule(
        snapshot.has_ci,
        2.0,
        "CI/CD likely runs tests",
        "No CI to exercise the test suite",
    );

    rubric.rule(
        snapshot.commit_count > 10 && snapshot.has_tests,
        2.0,
        "Active development with test coverage",
        "No sustained development with test coverage",
    );

    rubric.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::snapshot::test_support::empty_snapshot;

    #[test]
    fn untested_repository_scores_zero() {
        let dimension = evaluate(&empty_snapshot());
        assert!((dimension.score - 0.0).abs() < f64::EPSILON);
        assert_eq!(dimension.details.len(), 4);
    }

    #[test]
    fn enabling_tests_never_decreases_the_score() {
        let without = evaluate(&empty_snapshot());
        let mut snapshot = empty_snapshot();
        snapshot.has_tests = true;
        snapshot.test_files = vec!["tests/api.rs".to_string()];
        let with = evaluate(&snapshot);
        assert!(with.score > without.score);
    }

    #[test]
    fn conventional_layout_and_activity_fill_the_budget() {
        let mut snapshot = empty_snapshot();
        snapshot.has_tests = true;
        snapshot.test_files = vec![
            "src/__tests__/parser.ts".to_string(),
            "src/__tests__/lexer.ts".to_string(),
        ];
        snapshot.has_ci = true;
        snapshot.commit_count = 42;
        let dimension = evaluate(&snapshot);
        assert!((dimension.score - 15.0).abs() < f64::EPSILON);
        assert!(dimension
            .details
            .iter()
            .any(|line| line.contains("2 test file(s)")));
    }
}
