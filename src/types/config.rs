use crate::error::RepogradeError;
use serde::Deserialize;
use std::net::SocketAddr;

/// Runtime configuration. Every table and field is optional on disk; the
/// derived defaults make a missing config file equivalent to an empty one.
/// Scoring weights are deliberately not configurable.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RepogradeConfig {
    #[serde(default)]
    pub github: GithubConfig,
    #[serde(default)]
    pub fetch: FetchConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GithubConfig {
    #[serde(default = "default_api_base")]
    pub api_base: String,
    pub token: Option<String>,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            token: None,
        }
    }
}

fn default_api_base() -> String {
    "https://api.github.com".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct FetchConfig {
    /// How many directory levels of the file tree to request.
    #[serde(default = "default_tree_depth")]
    pub tree_depth: usize,
    /// Size of the recent-commit sample used for count and frequency.
    #[serde(default = "default_commit_sample")]
    pub commit_sample: u32,
    /// Page size for the branch listing.
    #[serde(default = "default_branch_page")]
    pub branch_page: u32,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            tree_depth: default_tree_depth(),
            commit_sample: default_commit_sample(),
            branch_page: default_branch_page(),
        }
    }
}

fn default_tree_depth() -> usize {
    2
}

fn default_commit_sample() -> u32 {
    30
}

fn default_branch_page() -> u32 {
    100
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, RepogradeError> {
        format!("{}:{}", self.host, self.port).parse().map_err(|_| {
            RepogradeError::ConfigParse(format!(
                "server.host/server.port do not form a valid address: {}:{}",
                self.host, self.port
            ))
        })
    }
}

impl RepogradeConfig {
    pub fn validate(&self) -> Result<(), RepogradeError> {
        if self.github.api_base.trim().is_empty() {
            return Err(RepogradeError::ConfigParse(
                "github.api_base must not be empty".to_string(),
            ));
        }
        if !(1..=4).contains(&self.fetch.tree_depth) {
            return Err(RepogradeError::ConfigParse(format!(
                "fetch.tree_depth must be between 1 and 4 (found {})",
                self.fetch.tree_depth
            )));
        }
        if !(1..=100).contains(&self.fetch.commit_sample) {
            return Err(RepogradeError::ConfigParse(format!(
                "fetch.commit_sample must be between 1 and 100 (found {})",
                self.fetch.commit_sample
            )));
        }
        if !(1..=100).contains(&self.fetch.branch_page) {
            return Err(RepogradeError::ConfigParse(format!(
                "fetch.branch_page must be between 1 and 100 (found {})",
                self.fetch.branch_page
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults_and_validates() {
        let cfg: RepogradeConfig = toml::from_str("").expect("empty config should parse");
        assert_eq!(cfg.github.api_base, "https://api.github.com");
        assert!(cfg.github.token.is_none());
        assert_eq!(cfg.fetch.tree_depth, 2);
        assert_eq!(cfg.fetch.commit_sample, 30);
        assert_eq!(cfg.fetch.branch_page, 100);
        assert_eq!(cfg.server.port, 8080);
        cfg.validate().expect("defaults should validate");
    }

    #[test]
    fn out_of_range_tree_depth_is_rejected() {
        let cfg: RepogradeConfig = toml::from_str(
            r#"
[fetch]
tree_depth = 9
"#,
        )
        .expect("config should parse");
        let err = cfg.validate().expect_err("depth 9 should be rejected");
        assert!(err.to_string().contains("tree_depth"));
    }

    #[test]
    fn commit_sample_above_page_limit_is_rejected() {
        let cfg: RepogradeConfig = toml::from_str(
            r#"
[fetch]
commit_sample = 500
"#,
        )
        .expect("config should parse");
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn socket_addr_combines_host_and_port() {
        let server = ServerConfig::default();
        let addr = server.socket_addr().expect("default address should parse");
        assert_eq!(addr.port(), 8080);
    }
}
