use crate::analyze;
use crate::error::{RepogradeError, Result};
use crate::fetch::{self, github::GithubClient};
use crate::types::config::{FetchConfig, RepogradeConfig};
use crate::types::report::AnalysisReport;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    client: GithubClient,
    fetch: FetchConfig,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub repo_url: Option<String>,
}

impl IntoResponse for RepogradeError {
    fn into_response(self) -> Response {
        let status = match &self {
            RepogradeError::MissingRepoUrl | RepogradeError::InvalidRepoUrl(_) => {
                StatusCode::BAD_REQUEST
            }
            RepogradeError::NotFound(_) => StatusCode::NOT_FOUND,
            RepogradeError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/api/analyze", post(analyze_endpoint))
        .with_state(state)
}

async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn analyze_endpoint(
    State(state): State<AppState>,
    Json(payload): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisReport>> {
    let repo_url = payload
        .repo_url
        .filter(|url| !url.trim().is_empty())
        .ok_or(RepogradeError::MissingRepoUrl)?;
    let (owner, repo) = fetch::parse_repo_url(&repo_url)?;
    let snapshot = fetch::collect_snapshot(&state.client, &owner, &repo, &state.fetch).await?;
    Ok(Json(analyze::analyze(&snapshot, &repo_url)))
}

pub async fn serve(config: &RepogradeConfig) -> Result<()> {
    let state = AppState {
        client: GithubClient::new(&config.github)?,
        fetch: config.fetch.clone(),
    };
    let app = router(state);
    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "repograde server ready");
    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request};
    use tower::util::ServiceExt;

    fn test_router() -> Router {
        let config = RepogradeConfig::default();
        let state = AppState {
            client: GithubClient::new(&config.github).expect("client should build"),
            fetch: config.fetch.clone(),
        };
        router(state)
    }

    async fn error_body(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body should read");
        let payload: serde_json::Value = serde_json::from_slice(&bytes).expect("body is json");
        payload["error"].as_str().unwrap_or_default().to_string()
    }

    #[tokio::test]
    async fn health_endpoint_reports_ok() {
        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .expect("request should build");
        let response = test_router().oneshot(request).await.expect("response");
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn analyze_without_repo_url_is_a_bad_request() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/analyze")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{}"))
            .expect("request should build");
        let response = test_router().oneshot(request).await.expect("response");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(error_body(response).await.contains("required"));
    }

    #[tokio::test]
    async fn analyze_with_foreign_host_is_a_bad_request() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/analyze")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"repoUrl":"https://example.com/owner/repo"}"#))
            .expect("request should build");
        let response = test_router().oneshot(request).await.expect("response");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(error_body(response).await.contains("invalid"));
    }
}
