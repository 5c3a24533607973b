use crate::error::{RepogradeError, Result};
use crate::types::config::GithubConfig;
use base64::{engine::general_purpose, Engine as _};
use chrono::{DateTime, Utc};
use reqwest::header::ACCEPT;
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::HashMap;
use tracing::debug;

const GITHUB_MEDIA_TYPE: &str = "application/vnd.github.v3+json";

/// Thin typed client over the GitHub REST v3 endpoints the snapshot needs.
/// Cloning is cheap; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct GithubClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RepoInfo {
    pub name: String,
    pub full_name: String,
    pub description: Option<String>,
    pub language: Option<String>,
    pub stargazers_count: u64,
    pub forks_count: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub default_branch: String,
    pub fork: bool,
    /// Kilobytes, as reported by the API.
    pub size: u64,
    pub license: Option<LicenseInfo>,
}

#[derive(Debug, Deserialize)]
pub struct LicenseInfo {
    pub key: String,
}

#[derive(Debug, Deserialize)]
struct ReadmePayload {
    content: String,
}

#[derive(Debug, Deserialize)]
pub struct ContentEntry {
    pub name: String,
    pub path: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub size: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub struct CommitEntry {
    pub commit: CommitDetail,
}

#[derive(Debug, Deserialize)]
pub struct CommitDetail {
    pub author: Option<CommitSignature>,
}

#[derive(Debug, Deserialize)]
pub struct CommitSignature {
    pub date: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct BranchEntry {
    pub name: String,
}

impl GithubClient {
    pub fn new(config: &GithubConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("repograde/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            base_url: config.api_base.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        })
    }

    pub async fn repo(&self, owner: &str, repo: &str) -> Result<RepoInfo> {
        self.get_json(&format!("repos/{owner}/{repo}"), &[]).await
    }

    pub async fn languages(&self, owner: &str, repo: &str) -> Result<HashMap<String, u64>> {
        self.get_json(&format!("repos/{owner}/{repo}/languages"), &[])
            .await
    }

    /// Decoded README body, or `None` when the repository has none.
    pub async fn readme(&self, owner: &str, repo: &str) -> Result<Option<String>> {
        match self
            .get_json::<ReadmePayload>(&format!("repos/{owner}/{repo}/readme"), &[])
            .await
        {
            Ok(payload) => Ok(Some(decode_content(&payload.content)?)),
            Err(RepogradeError::NotFound(_)) => Ok(None),
            Err(other) => Err(other),
        }
    }

    /// Directory listing for `path` ("" for the root). Missing or
    /// inaccessible paths yield an empty listing, matching how empty
    /// repositories respond.
    pub async fn contents(&self, owner: &str, repo: &str, path: &str) -> Result<Vec<ContentEntry>> {
        let request_path = if path.is_empty() {
            format!("repos/{owner}/{repo}/contents")
        } else {
            format!("repos/{owner}/{repo}/contents/{path}")
        };
        match self.get_json::<Vec<ContentEntry>>(&request_path, &[]).await {
            Ok(entries) => Ok(entries),
            Err(RepogradeError::NotFound(_)) => Ok(Vec::new()),
            Err(other) => Err(other),
        }
    }

    pub async fn commits(&self, owner: &str, repo: &str, per_page: u32) -> Result<Vec<CommitEntry>> {
        self.get_json(
            &format!("repos/{owner}/{repo}/commits"),
            &[("per_page", per_page.to_string())],
        )
        .await
    }

    pub async fn branches(&self, owner: &str, repo: &str, per_page: u32) -> Result<Vec<BranchEntry>> {
        self.get_json(
            &format!("repos/{owner}/{repo}/branches"),
            &[("per_page", per_page.to_string())],
        )
        .await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let url = format!("{}/{}", self.base_url, path);
        let mut request = self.http.get(&url).header(ACCEPT, GITHUB_MEDIA_TYPE);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        if !query.is_empty() {
            request = request.query(query);
        }
        debug!(%url, "github request");
        let response = request.send().await?;
        let response = check_status(path, response)?;
        Ok(response.json().await?)
    }
}

fn check_status(path: &str, response: Response) -> Result<Response> {
    match response.status() {
        StatusCode::NOT_FOUND => Err(RepogradeError::NotFound(path.to_string())),
        StatusCode::TOO_MANY_REQUESTS => Err(RepogradeError::RateLimited),
        StatusCode::FORBIDDEN if rate_limit_exhausted(&response) => Err(RepogradeError::RateLimited),
        _ => Ok(response.error_for_status()?),
    }
}

fn rate_limit_exhausted(response: &Response) -> bool {
    response
        .headers()
        .get("x-ratelimit-remaining")
        .and_then(|value| value.to_str().ok())
        .map(|remaining| remaining == "0")
        .unwrap_or(false)
}

/// GitHub wraps base64 payloads across lines; strip whitespace first.
fn decode_content(content: &str) -> Result<String> {
    let compact: String = content
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    let bytes = general_purpose::STANDARD.decode(compact)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
