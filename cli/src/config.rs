use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use schemacrawler::config::get_var_database_url;
use schemacrawler::GeneratorOptions;
use serde::Deserialize;
use tracing::debug;

static CONFIG_REL_PATHS: [&str; 2] = [".schemacrawler/config.toml", ".schemacrawler.toml"];

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub database_url: Option<String>,
    /// Package for generated classes.
    pub package: Option<String>,
    pub max_connections: Option<u32>,
    pub acquire_timeout_secs: Option<u64>,
}

impl Config {
    /// Flag, then DATABASE_URL, then the config file.
    pub fn resolve_url(&self, flag: Option<String>) -> Result<String> {
        flag.or_else(|| get_var_database_url().ok())
            .or_else(|| self.database_url.clone())
            .context("no database url: pass --url, set DATABASE_URL, or add database_url to .schemacrawler.toml")
    }

    pub fn generator_options(&self) -> GeneratorOptions {
        match &self.package {
            Some(package) => GeneratorOptions { package: package.clone() },
            None => GeneratorOptions::default(),
        }
    }
}

fn search_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from("."), PathBuf::from("..")];
    paths.extend(dirs::config_dir());
    paths.extend(dirs::home_dir());
    paths
}

pub fn load_config() -> Result<Config> {
    for dir in search_paths() {
        for rel_path in &CONFIG_REL_PATHS {
            let path = dir.join(rel_path);
            if path.exists() {
                debug!(path = %path.display(), "Loading config");
                return read(&path);
            }
        }
    }
    Ok(Config::default())
}

pub fn read(path: impl AsRef<Path>) -> Result<Config> {
    let path = path.as_ref();
    let buf = fs::read_to_string(path)?;
    let config = toml::from_str(&buf).with_context(|| format!("invalid config file {}", path.display()))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_parse() {
        let config: Config = toml::from_str(
            r#"
database_url = "mysql://localhost/shop"
package = "acme.models"
max_connections = 2
"#,
        )
        .unwrap();
        assert_eq!(config.database_url.as_deref(), Some("mysql://localhost/shop"));
        assert_matches!(config.max_connections, Some(2));
        assert_matches!(config.acquire_timeout_secs, None);
        assert_eq!(config.generator_options().package, "acme.models");
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.generator_options(), GeneratorOptions::default());
    }

    #[test]
    fn test_flag_wins() {
        let config = Config {
            database_url: Some("mysql://file/db".to_string()),
            ..Config::default()
        };
        let url = config.resolve_url(Some("mysql://flag/db".to_string())).unwrap();
        assert_eq!(url, "mysql://flag/db");
    }
}
