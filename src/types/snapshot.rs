use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    File,
    Dir,
}

/// One node of the depth-limited file tree returned by the contents API.
/// A file never has children; a directory's children cover whatever depth
/// the fetcher traversed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileNode {
    pub name: String,
    pub path: String,
    #[serde(rename = "type")]
    pub kind: FileKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<FileNode>>,
}

impl FileNode {
    pub fn is_file(&self) -> bool {
        self.kind == FileKind::File
    }

    pub fn is_dir(&self) -> bool {
        self.kind == FileKind::Dir
    }
}

/// Frozen view of a repository's metadata, fully assembled by the fetch
/// layer before any scoring runs. Evaluators never mutate it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositorySnapshot {
    pub name: String,
    pub full_name: String,
    pub description: Option<String>,
    pub language: Option<String>,
    pub languages: HashMap<String, u64>,
    pub stars: u64,
    pub forks: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub default_branch: String,
    pub has_readme: bool,
    pub readme_content: Option<String>,
    pub file_structure: Vec<FileNode>,
    pub commit_count: u32,
    pub commit_frequency: f64,
    pub has_tests: bool,
    pub test_files: Vec<String>,
    pub has_ci: bool,
    pub branch_count: u32,
    pub has_license: bool,
    pub is_fork: bool,
    /// Repository size in kilobytes, as reported by the API.
    pub size: u64,
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use chrono::TimeZone;

    pub(crate) fn file(name: &str, path: &str) -> FileNode {
        FileNode {
            name: name.to_string(),
            path: path.to_string(),
            kind: FileKind::File,
            size: Some(128),
            children: None,
        }
    }

    pub(crate) fn dir(name: &str, path: &str, children: Vec<FileNode>) -> FileNode {
        FileNode {
            name: name.to_string(),
            path: path.to_string(),
            kind: FileKind::Dir,
            size: None,
            children: Some(children),
        }
    }

    /// Baseline empty repository: no files, no commits, no community signals.
    pub(crate) fn empty_snapshot() -> RepositorySnapshot {
        RepositorySnapshot {
            name: "sample".to_string(),
            full_name: "octocat/sample".to_string(),
            description: None,
            language: None,
            languages: HashMap::new(),
            stars: 0,
            forks: 0,
            created_at: Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap(),
            default_branch: "main".to_string(),
            has_readme: false,
            readme_content: None,
            file_structure: Vec::new(),
            commit_count: 0,
            commit_frequency: 0.0,
            has_tests: false,
            test_files: Vec::new(),
            has_ci: false,
            branch_count: 1,
            has_license: false,
            is_fork: false,
            size: 0,
        }
    }
}
