use super::rubric::Rubric;
use super::tree;
use crate::types::report::DimensionScore;
use crate::types::snapshot::RepositorySnapshot;

pub const NAME: &str = "Code Quality & Readability";

pub fn evaluate(snapshot: &RepositorySnapshot) -> DimensionScore {
    let mut rubric = Rubric::new(NAME, 20.0, 0.20);

    let language_count = snapshot.languages.len();
    rubric.rule(
        language_count > 0,
        (language_count as f64 * 1.5).min(5.0),
        format!("Uses {language_count} programming language(s)"),
        "No language statistics reported",
    );

    let root_files = snapshot
        .file_structure
        .iter()
        .filter(|node| node.is_file())
        .count();
    let has_subdirectories = snapshot.file_structure.iter().any(|node| node.is_dir());
    rubric.rule(
        has_subdirectories && root_files < 10,
        5.0,
        "Well-organized file structure",
        "Too many files in the repository root",
    );

    rubric.rule(
        snapshot.size > 0 && snapshot.size < 1000,
        3.0,
        "Reasonable repository size",
        if snapshot.size > 10_000 {
            "Very large repository - consider splitting"
        } else {
            "Repository size outside the typical range"
        },
    );

    rubric.rule(
        tree::has_clean_file_names(&snapshot.file_structure),
        4.0,
        "Good file naming conventions",
        "Could improve file naming conventions",
    );

    rubric.rule(
        tree::average_file_depth(&snapshot.file_structure) > 1.0,
        3.0,
        "Proper directory hierarchy",
        "Flat directory hierarchy",
    );

    rubric.finish()
}
