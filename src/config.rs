//! TOML configuration.
//!
//! Every section is optional; an empty file yields the same values as
//! [`Config::minimal`].
//!
//! ```toml
//! [server]
//! bind = "127.0.0.1:8000"
//!
//! [chunking]
//! max_chars = 200
//!
//! [retrieval]
//! default_top_k = 3
//!
//! [catalog]
//! path = "./data/courses.json"
//! ```

use anyhow::{Context, Result};
use course_rag_core::chunk::DEFAULT_MAX_CHARS;
use course_rag_core::engine::{EngineSettings, DEFAULT_TOP_K};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub chunking: ChunkingConfig,
    #[serde(default)]
    pub retrieval: RetrievalConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

fn default_bind() -> String {
    "127.0.0.1:8000".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChunkingConfig {
    #[serde(default = "default_max_chars")]
    pub max_chars: usize,
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            max_chars: default_max_chars(),
        }
    }
}

fn default_max_chars() -> usize {
    DEFAULT_MAX_CHARS
}

#[derive(Debug, Deserialize, Clone)]
pub struct RetrievalConfig {
    #[serde(default = "default_top_k")]
    pub default_top_k: i64,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            default_top_k: default_top_k(),
        }
    }
}

fn default_top_k() -> i64 {
    DEFAULT_TOP_K
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct CatalogConfig {
    /// JSON course catalog loaded at startup.
    pub path: Option<PathBuf>,
}

impl Config {
    /// Built-in defaults, used when no config file exists.
    pub fn minimal() -> Self {
        Self::default()
    }

    pub fn engine_settings(&self) -> EngineSettings {
        EngineSettings {
            max_chars: self.chunking.max_chars,
            default_top_k: self.retrieval.default_top_k,
        }
    }
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: Config = toml::from_str(&content).with_context(|| "Failed to parse config file")?;

    if config.server.bind.trim().is_empty() {
        anyhow::bail!("server.bind must not be empty");
    }

    if config.chunking.max_chars == 0 {
        anyhow::bail!("chunking.max_chars must be > 0");
    }

    if config.retrieval.default_top_k < 1 {
        anyhow::bail!("retrieval.default_top_k must be >= 1");
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_defaults() {
        let cfg = Config::minimal();
        assert_eq!(cfg.server.bind, "127.0.0.1:8000");
        assert_eq!(cfg.chunking.max_chars, 200);
        assert_eq!(cfg.retrieval.default_top_k, 3);
        assert!(cfg.catalog.path.is_none());
    }

    #[test]
    fn test_empty_toml_matches_minimal() {
        let cfg: Config = toml::from_str("").unwrap();
        assert_eq!(cfg.engine_settings(), Config::minimal().engine_settings());
        assert_eq!(cfg.server.bind, Config::minimal().server.bind);
    }

    #[test]
    fn test_partial_sections() {
        let cfg: Config = toml::from_str(
            r#"
[chunking]
max_chars = 80

[catalog]
path = "data/courses.json"
"#,
        )
        .unwrap();
        assert_eq!(cfg.chunking.max_chars, 80);
        assert_eq!(cfg.retrieval.default_top_k, 3);
        assert_eq!(cfg.catalog.path, Some(PathBuf::from("data/courses.json")));
    }
}
