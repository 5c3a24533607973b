use super::structure;
use crate::types::report::EvaluationResult;
use crate::types::snapshot::RepositorySnapshot;

const MIN_ITEMS: usize = 3;
const MAX_ITEMS: usize = 7;

const FILLER_COMMENTS: &str = "Add code comments and docstrings to improve code readability";
const FILLER_CONTRIBUTING: &str =
    "Consider adding a CONTRIBUTING.md file to guide potential contributors";
const FILLER_DEPENDENCIES: &str =
    "Keep dependencies up to date and document the release process for contributors";

/// Ordered condition -> recommendation rules, evaluated in a fixed
/// sequence. Generic fillers pad the list to the floor of three; the
/// result is capped at seven items.
pub fn generate_roadmap(
    snapshot: &RepositorySnapshot,
    _evaluation: &EvaluationResult,
) -> Vec<String> {
    let mut roadmap: Vec<String> = Vec::new();
    let readme_length = snapshot
        .readme_content
        .as_deref()
        .map(|text| text.chars().count())
        .unwrap_or(0);

    if !snapshot.has_readme {
        roadmap.push(
            "Create a comprehensive README.md with project description, setup instructions, and usage examples"
                .to_string(),
        );
    } else if readme_length < 500 {
        roadmap.push(
            "Expand README.md with detailed setup instructions, API documentation, and contribution guidelines"
                .to_string(),
        );
    }

    if !snapshot.has_license {
        roadmap.push(
            "Add a LICENSE file to clarify usage rights and encourage contributions".to_string(),
        );
    }

    if !snapshot.has_tests {
        roadmap.push(
            "Add unit tests using a testing framework appropriate for your language (Jest, pytest, JUnit, etc.)"
                .to_string(),
        );
    } else if snapshot.test_files.len() < 3 {
        roadmap.push("Expand test coverage to include edge cases and integration tests".to_string());
    }

    if !snapshot.has_ci {
        roadmap.push(
            "Set up CI/CD pipeline using GitHub Actions to automate testing and deployment"
                .to_string(),
        );
    }

    if !structure::has_source_directory(snapshot) {
        roadmap.push(
            "Organize code into src/ or lib/ directory to separate source code from configuration files"
                .to_string(),
        );
    }

    if snapshot.branch_count <= 1 {
        roadmap.push(
            "Implement a branching strategy (e.g., feature branches, develop branch) for better collaboration"
                .to_string(),
        );
    }

    if snapshot.commit_count < 10 {
        roadmap.push(
            "Make more frequent, meaningful commits with descriptive commit messages".to_string(),
        );
    } else if snapshot.commit_frequency < 2.0 {
        roadmap.push(
            "Maintain more consistent commit frequency to show active development".to_string(),
        );
    }

    let root_files = snapshot
        .file_structure
        .iter()
        .filter(|node| node.is_file())
        .count();
    if root_files > 15 {
        roadmap.push(
            "Reorganize files: move source code into subdirectories and keep only essential files in root"
                .to_string(),
        );
    }

    if snapshot.stars == 0 && snapshot.forks == 0 {
        roadmap.push(
            "Add project description, tags, and showcase key features to attract users and contributors"
                .to_string(),
        );
    }

    match snapshot.language.as_deref() {
        Some("JavaScript") | Some("TypeScript") => {
            let has_package_json = snapshot
                .file_structure
                .iter()
                .any(|node| node.name == "package.json");
            if !has_package_json {
                roadmap.push("Add package.json with proper dependencies and scripts".to_string());
            }
        }
        Some("Python") => {
            let has_python_manifest = snapshot
                .file_structure
                .iter()
                .any(|node| node.name == "requirements.txt" || node.name == "setup.py");
            if !has_python_manifest {
                roadmap
                    .push("Add requirements.txt or setup.py for dependency management".to_string());
            }
        }
        _ => {}
    }

    if roadmap.len() < MIN_ITEMS {
        roadmap.push(FILLER_COMMENTS.to_string());
        roadmap.push(FILLER_CONTRIBUTING.to_string());
    }
    if roadmap.len() < MIN_ITEMS {
        roadmap.push(FILLER_DEPENDENCIES.to_string());
    }

    roadmap.truncate(MAX_ITEMS);
    roadmap
}
