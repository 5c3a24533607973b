pub mod github;
pub mod url;

pub use url::parse_repo_url;

use crate::analyze::tree;
use crate::error::Result;
use crate::types::config::FetchConfig;
use crate::types::snapshot::{FileKind, FileNode, RepositorySnapshot};
use futures::future::{BoxFuture, FutureExt};
use github::{CommitEntry, GithubClient};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::info;

static TEST_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [r"(?i)test", r"(?i)spec", r"__tests__", r"\.test\.", r"\.spec\."]
        .iter()
        .map(|pattern| Regex::new(pattern).expect("valid pattern"))
        .collect()
});

const CI_MARKERS: [&str; 7] = [
    ".github/workflows",
    ".github/actions",
    ".travis.yml",
    ".circleci",
    "jenkinsfile",
    ".gitlab-ci.yml",
    ".azure-pipelines.yml",
];

/// Assembles the immutable snapshot the scoring core consumes. Pagination,
/// depth limits, and optional-field fallbacks are all resolved here; the
/// evaluators never see a partially fetched repository.
pub async fn collect_snapshot(
    client: &GithubClient,
    owner: &str,
    repo: &str,
    limits: &FetchConfig,
) -> Result<RepositorySnapshot> {
    info!(%owner, %repo, "collecting repository snapshot");

    let repo_info = client.repo(owner, repo).await?;
    let languages = client.languages(owner, repo).await?;
    let readme_content = client.readme(owner, repo).await?;
    let file_structure =
        fetch_tree(client, owner, repo, String::new(), 0, limits.tree_depth).await?;
    let commits = client.commits(owner, repo, limits.commit_sample).await?;
    let branches = client.branches(owner, repo, limits.branch_page).await?;

    let commit_frequency = commit_frequency(&commits);
    let test_files = find_test_files(&file_structure);
    let has_ci = detect_ci(&file_structure);

    info!(
        files = tree::count_files(&file_structure),
        commits = commits.len(),
        branches = branches.len(),
        "snapshot assembled"
    );

    Ok(RepositorySnapshot {
        name: repo_info.name,
        full_name: repo_info.full_name,
        description: repo_info.description,
        language: repo_info.language,
        languages,
        stars: repo_info.stargazers_count,
        forks: repo_info.forks_count,
        created_at: repo_info.created_at,
        updated_at: repo_info.updated_at,
        default_branch: repo_info.default_branch,
        has_readme: readme_content.is_some(),
        readme_content,
        file_structure,
        commit_count: commits.len() as u32,
        commit_frequency,
        has_tests: !test_files.is_empty(),
        test_files,
        has_ci,
        branch_count: branches.len() as u32,
        has_license: repo_info.license.is_some(),
        is_fork: repo_info.fork,
        size: repo_info.size,
    })
}

/// Recursive contents listing, bounded by `max_depth` directory levels.
/// Entries that are neither files nor directories (submodules, symlinks)
/// are skipped.
fn fetch_tree<'a>(
    client: &'a GithubClient,
    owner: &'a str,
    repo: &'a str,
    path: String,
    depth: usize,
    max_depth: usize,
) -> BoxFuture<'a, Result<Vec<FileNode>>> {
    async move {
        if depth >= max_depth {
            return Ok(Vec::new());
        }
        let entries = client.contents(owner, repo, &path).await?;
        let mut nodes = Vec::new();
        for entry in entries {
            match entry.kind.as_str() {
                "file" => nodes.push(FileNode {
                    name: entry.name,
                    path: entry.path,
                    kind: FileKind::File,
                    size: entry.size,
                    children: None,
                }),
                "dir" => {
                    let children =
                        fetch_tree(client, owner, repo, entry.path.clone(), depth + 1, max_depth)
                            .await?;
                    nodes.push(FileNode {
                        name: entry.name,
                        path: entry.path,
                        kind: FileKind::Dir,
                        size: None,
                        children: Some(children),
                    });
                }
                _ => {}
            }
        }
        Ok(nodes)
    }
    .boxed()
}

/// Commits per 30-day month across the sampled window. The listing is
/// newest first; a zero-length window degrades to the sample size.
fn commit_frequency(commits: &[CommitEntry]) -> f64 {
    let dates: Vec<_> = commits
        .iter()
        .filter_map(|entry| entry.commit.author.as_ref().map(|author| author.date))
        .collect();
    let (Some(newest), Some(oldest)) = (dates.first(), dates.last()) else {
        return 0.0;
    };
    let months = (*newest - *oldest).num_seconds() as f64 / (86_400.0 * 30.0);
    if months > 0.0 {
        commits.len() as f64 / months
    } else {
        commits.len() as f64
    }
}

fn find_test_files(nodes: &[FileNode]) -> Vec<String> {
    let mut test_files = Vec::new();
    tree::visit_nodes(nodes, &mut |node, _| {
        if node.is_file() {
            let matched = TEST_PATTERNS
                .iter()
                .any(|pattern| pattern.is_match(&node.name) || pattern.is_match(&node.path));
            if matched {
                test_files.push(node.path.clone());
            }
        }
        true
    });
    test_files
}

fn detect_ci(nodes: &[FileNode]) -> bool {
    let completed = tree::visit_nodes(nodes, &mut |node, _| {
        let path = node.path.to_lowercase();
        !CI_MARKERS.iter().any(|marker| path.contains(marker))
    });
    !completed
}
