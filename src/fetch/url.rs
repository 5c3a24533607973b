use crate::error::{RepogradeError, Result};
use once_cell::sync::Lazy;
use regex::Regex;

static REPO_URL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"github\.com/([\w.-]+)/([\w.-]+)").expect("valid pattern"));

/// Extracts `(owner, repo)` from a GitHub repository URL. A trailing
/// `.git` on the repository segment is stripped.
pub fn parse_repo_url(url: &str) -> Result<(String, String)> {
    let captures = REPO_URL_PATTERN
        .captures(url)
        .ok_or_else(|| RepogradeError::InvalidRepoUrl(url.to_string()))?;
    let owner = captures[1].to_string();
    let repo = captures[2].trim_end_matches(".git").to_string();
    if repo.is_empty() {
        return Err(RepogradeError::InvalidRepoUrl(url.to_string()));
    }
    Ok((owner, repo))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_https_urls() {
        let (owner, repo) = parse_repo_url("https://github.com/rust-lang/cargo").expect("parse");
        assert_eq!(owner, "rust-lang");
        assert_eq!(repo, "cargo");
    }

    #[test]
    fn strips_git_suffix_and_trailing_paths() {
        let (_, repo) = parse_repo_url("https://github.com/octocat/demo.git").expect("parse");
        assert_eq!(repo, "demo");

        let (_, repo) =
            parse_repo_url("https://github.com/octocat/demo/tree/main/src").expect("parse");
        assert_eq!(repo, "demo");
    }

    #[test]
    fn accepts_urls_without_a_scheme() {
        let (owner, repo) = parse_repo_url("github.com/a.b/c-d_e").expect("parse");
        assert_eq!(owner, "a.b");
        assert_eq!(repo, "c-d_e");
    }

    #[test]
    fn rejects_other_hosts_and_bare_strings() {
        assert!(parse_repo_url("https://gitlab.com/owner/repo").is_err());
        assert!(parse_repo_url("not a url at all").is_err());
        assert!(parse_repo_url("https://github.com/owner-only").is_err());
    }
}
