use super::rubric::Rubric;
use crate::types::report::DimensionScore;
use crate::types::snapshot::RepositorySnapshot;

pub const NAME: &str = "Project Structure & Organization";

const MANIFEST_MARKERS: [&str; 5] = [
    "config",
    "package.json",
    "requirements.txt",
    "pom.xml",
    "Cargo.toml",
];

/// Top-level `src/` or `lib/` directory, matched case-insensitively.
pub(crate) fn has_source_directory(snapshot: &RepositorySnapshot) -> bool {
    snapshot
        .file_structure
        .iter()
        .any(|node| node.is_dir() && matches!(node.name.to_lowercase().as_str(), "src" | "lib"))
}

pub fn evaluate(snapshot: &RepositorySnapshot) -> DimensionScore {
    let mut rubric = Rubric::new(NAME, 15.0, 0.15);

    rubric.rule(
        has_source_directory(snapshot),
        4.0,
        "Has src/lib directory structure",
        "Consider organizing code in src/ or lib/ directory",
    );

    let has_manifest = snapshot.file_structure.iter().any(|node| {
        node.is_file()
            && MANIFEST_MARKERS
                .iter()
                .any(|marker| node.name.contains(marker))
    });
    rubric.rule(
        has_manifest,
        3.0,
        "Has dependency/configuration files",
        "No dependency or configuration manifest found",
    );

    rubric.rule(
        !snapshot.is_fork,
        2.0,
        "Original repository (not a fork)",
        "This is a forked repository",
    );

    rubric.rule(
        snapshot.branch_count > 1,
        3.0,
        format!("Uses {} branches", snapshot.branch_count),
        "Consider using feature branches",
    );

    rubric.rule(
        snapshot.has_ci,
        3.0,
        "Has CI/CD configuration",
        "Consider adding a CI/CD pipeline",
    );

    rubric.finish()
}
