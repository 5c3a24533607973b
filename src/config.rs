use crate::error::Result;
use crate::types::config::RepogradeConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "repograde.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/repograde/config.toml";
pub const TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";

/// Loads configuration from the global file and the working directory,
/// global first so the local file wins. Both files are optional; a token
/// from the environment fills in when no file provides one.
pub fn load() -> Result<RepogradeConfig> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    let mut cfg = load_with(Path::new("."), global.as_deref())?;
    if cfg.github.token.is_none() {
        cfg.github.token = std::env::var(TOKEN_ENV_VAR).ok().filter(|t| !t.is_empty());
    }
    cfg.validate()?;
    Ok(cfg)
}

pub(crate) fn load_with(root: &Path, global_path: Option<&Path>) -> Result<RepogradeConfig> {
    let mut merged = Value::Table(Map::new());
    if let Some(path) = global_path {
        merge_file_if_exists(&mut merged, path)?;
    }
    merge_file_if_exists(&mut merged, &root.join(DEFAULT_CONFIG_FILE))?;

    let cfg: RepogradeConfig = merged.try_into().map_err(|e: toml::de::Error| {
        crate::error::RepogradeError::ConfigParse(e.to_string())
    })?;
    Ok(cfg)
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    let content = std::fs::read_to_string(path)?;
    let value: Value = toml::from_str(&content).map_err(|e| {
        crate::error::RepogradeError::ConfigParse(format!("{}: {}", path.display(), e))
    })?;
    merge_toml(merged, value);
    Ok(())
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn load_returns_defaults_when_no_files_exist() {
        let dir = TempDir::new().expect("temp dir should be created");
        let cfg = load_with(dir.path(), None).expect("load should not fail");
        assert_eq!(cfg.github.api_base, "https://api.github.com");
        assert_eq!(cfg.fetch.tree_depth, 2);
    }

    #[test]
    fn local_file_overrides_global_per_key() {
        let root = TempDir::new().expect("root temp dir should be created");
        let global_root = TempDir::new().expect("global temp dir should be created");
        let global_path = global_root.path().join("config.toml");

        fs::write(
            &global_path,
            r#"
[github]
api_base = "https://github.example.internal"
token = "global-token"

[fetch]
tree_depth = 3
"#,
        )
        .expect("global config should write");

        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            r#"
[github]
api_base = "https://api.github.com"

[server]
port = 9001
"#,
        )
        .expect("local config should write");

        let cfg = load_with(root.path(), Some(&global_path)).expect("load should succeed");
        assert_eq!(cfg.github.api_base, "https://api.github.com");
        assert_eq!(cfg.github.token.as_deref(), Some("global-token"));
        assert_eq!(cfg.fetch.tree_depth, 3);
        assert_eq!(cfg.server.port, 9001);
    }

    #[test]
    fn malformed_local_file_is_a_parse_error() {
        let root = TempDir::new().expect("temp dir should be created");
        fs::write(root.path().join(DEFAULT_CONFIG_FILE), "github = [broken")
            .expect("config should write");
        assert!(load_with(root.path(), None).is_err());
    }
}
