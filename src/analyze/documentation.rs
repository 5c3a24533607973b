use super::rubric::Rubric;
use crate::types::report::DimensionScore;
use crate::types::snapshot::RepositorySnapshot;
use once_cell::sync::Lazy;
use regex::Regex;

pub const NAME: &str = "Documentation & Clarity";

static SETUP_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)setup|install|getting started").expect("valid pattern"));
static USAGE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)usage|example|how to").expect("valid pattern"));
static CONTRIBUTING_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)contribut|license").expect("valid pattern"));

pub fn evaluate(snapshot: &RepositorySnapshot) -> DimensionScore {
    let mut rubric = Rubric::new(NAME, 20.0, 0.20);
    let readme = snapshot.readme_content.as_deref().unwrap_or("");
    let readme_length = readme.chars().count();

    rubric.rule(
        snapshot.has_readme,
        8.0,
        "Has README.md file",
        "Missing README.md file",
    );

    rubric.tiered(
        vec![
            (
                readme_length > 500,
                5.0,
                "README has substantial content".to_string(),
            ),
            (
                readme_length > 200,
                3.0,
                "README has basic content".to_string(),
            ),
        ],
        "README could be more detailed",
    );

    rubric.rule(
        SETUP_PATTERN.is_match(readme),
        2.0,
        "README includes setup instructions",
        "README lacks setup instructions",
    );

    rubric.rule(
        USAGE_PATTERN.is_match(readme),
        2.0,
        "README includes usage examples",
        "README lacks usage examples",
    );

    rubric.rule(
        CONTRIBUTING_PATTERN.is_match(readme),
        1.0,
        "README includes contribution guidelines",
        "README lacks contribution or license notes",
    );

    rubric.rule(
        snapshot.has_license,
        2.0,
        "Has license file",
        "Consider adding a license",
    );

    let described = snapshot
        .description
        .as_deref()
        .map(|text| text.chars().count() > 20)
        .unwrap_or(false);
    rubric.rule(
        described,
        1.0,
        "Repository has description",
        "Repository description is missing or too short",
    );

    rubric.finish()
}
