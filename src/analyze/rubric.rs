use crate::types::report::DimensionScore;

/// Ordered partial-credit rubric for one dimension. Every rule appends
/// exactly one rationale line whether it passed or failed, so the detail
/// list has a fixed length per dimension. The final score is clamped to
/// `[0, max_score]`; cumulative rule budgets may exceed the cap.
pub struct Rubric {
    name: &'static str,
    max_score: f64,
    weight: f64,
    score: f64,
    details: Vec<String>,
}

impl Rubric {
    pub fn new(name: &'static str, max_score: f64, weight: f64) -> Self {
        Self {
            name,
            max_score,
            weight,
            score: 0.0,
            details: Vec::new(),
        }
    }

    /// Awards `points` when `passed` holds, recording the matching line.
    pub fn rule(
        &mut self,
        passed: bool,
        points: f64,
        on_pass: impl Into<String>,
        on_fail: impl Into<String>,
    ) {
        if passed {
            self.score += points;
            self.details.push(on_pass.into());
        } else {
            self.details.push(on_fail.into());
        }
    }

    /// Awards the first matching tier only; `fallback` records when none
    /// match. Tiers must be ordered highest first.
    pub fn tiered(&mut self, tiers: Vec<(bool, f64, String)>, fallback: impl Into<String>) {
        for (matched, points, line) in tiers {
            if matched {
                self.score += points;
                self.details.push(line);
                return;
            }
        }
        self.details.push(fallback.into());
    }

    pub fn finish(self) -> DimensionScore {
        DimensionScore {
            name: self.name.to_string(),
            score: self.score.clamp(0.0, self.max_score),
            max_score: self.max_score,
            weight: self.weight,
            details: self.details,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_rule_contributes_one_line() {
        let mut rubric = Rubric::new("Sample", 10.0, 0.5);
        rubric.rule(true, 4.0, "pass", "fail");
        rubric.rule(false, 4.0, "pass", "fail");
        rubric.tiered(vec![(false, 3.0, "high".to_string())], "none");
        let dimension = rubric.finish();
        assert_eq!(dimension.details, vec!["pass", "fail", "none"]);
        assert!((dimension.score - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn tiered_awards_only_the_first_match() {
        let mut rubric = Rubric::new("Sample", 10.0, 0.5);
        rubric.tiered(
            vec![
                (true, 5.0, "top".to_string()),
                (true, 3.0, "mid".to_string()),
            ],
            "none",
        );
        let dimension = rubric.finish();
        assert!((dimension.score - 5.0).abs() < f64::EPSILON);
        assert_eq!(dimension.details, vec!["top"]);
    }

    #[test]
    fn score_is_clamped_to_the_cap() {
        let mut rubric = Rubric::new("Sample", 5.0, 0.5);
        rubric.rule(true, 4.0, "a", "x");
        rubric.rule(true, 4.0, "b", "x");
        let dimension = rubric.finish();
        assert!((dimension.score - 5.0).abs() < f64::EPSILON);
        assert_eq!(dimension.details.len(), 2);
    }
}
