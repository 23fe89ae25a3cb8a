//! Layered configuration for shelf.
//!
//! Values are merged, later layers winning:
//!
//! 1. built-in defaults (paths under the platform's config and cache directories),
//! 2. an optional TOML, JSON or YAML file, chosen by extension,
//! 3. `SHELF_`-prefixed environment variables (`SHELF_SEARCH_TIMEOUT_SECS=5`).

pub mod error;

use directories::ProjectDirs;
use exn::ResultExt;
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use serde::{Deserialize, Serialize};
use shelf_genre::models::Platform;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::instrument;

use crate::error::{ErrorKind, Result};

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "SHELF_";
const DEFAULT_SEARCH_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Genre mapping rule resource (JSON).
    pub mapping_path: PathBuf,
    /// Persisted genre cache (JSON).
    pub cache_path: PathBuf,
    /// Keyword ruleset for the fallback classifier (JSON).
    pub keywords_path: PathBuf,
    /// Upper bound on a single external search call.
    pub search_timeout_secs: u64,
    /// Platform arbitration order, most trusted first.
    pub platform_priority: Vec<Platform>,
    /// Normalized-name template; the built-in one when unset.
    pub name_template: Option<String>,
}
impl Default for Config {
    fn default() -> Self {
        let dirs = project_dirs();
        let config_dir = dirs.as_ref().map(|d| d.config_dir().to_path_buf()).unwrap_or_default();
        let cache_dir = dirs.as_ref().map(|d| d.cache_dir().to_path_buf()).unwrap_or_default();
        Self {
            mapping_path: config_dir.join("genre_mapping.json"),
            cache_path: cache_dir.join("genre_cache.json"),
            keywords_path: config_dir.join("keywords.json"),
            search_timeout_secs: DEFAULT_SEARCH_TIMEOUT_SECS,
            platform_priority: Platform::DEFAULT_PRIORITY.to_vec(),
            name_template: None,
        }
    }
}
impl Config {
    /// Where a configuration file is looked for when none is given.
    pub fn default_path() -> Option<PathBuf> {
        project_dirs().map(|d| d.config_dir().join("shelf.toml"))
    }

    /// Builds the layered provider without extracting it.
    pub fn figment(file: Option<&Path>) -> Result<Figment> {
        let mut figment = Figment::from(Serialized::defaults(Config::default()));
        if let Some(path) = file {
            figment = match path.extension().and_then(|ext| ext.to_str()).map(str::to_ascii_lowercase).as_deref() {
                Some("toml") => figment.merge(Toml::file(path)),
                Some("json") => figment.merge(Json::file(path)),
                Some("yaml" | "yml") => figment.merge(Yaml::file(path)),
                _ => exn::bail!(ErrorKind::UnsupportedFormat(path.to_path_buf())),
            };
        }
        Ok(figment.merge(Env::prefixed(ENV_PREFIX)))
    }

    /// Loads and validates configuration from an explicit file (if any),
    /// the environment and the defaults.
    #[instrument(skip_all, fields(file = ?file))]
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let config: Config = Self::figment(file)?.extract().or_raise(|| ErrorKind::Load)?;
        config.validated()
    }

    /// Like [`load`](Self::load), using [`default_path`](Self::default_path)
    /// when that file exists.
    pub fn load_default() -> Result<Self> {
        let file = Self::default_path().filter(|path| path.is_file());
        Self::load(file.as_deref())
    }

    fn validated(mut self) -> Result<Self> {
        if self.search_timeout_secs == 0 {
            exn::bail!(ErrorKind::Invalid("search_timeout_secs"));
        }
        let mut seen = Vec::with_capacity(self.platform_priority.len());
        self.platform_priority.retain(|platform| {
            let first = !seen.contains(platform);
            seen.push(*platform);
            first
        });
        if self.name_template.as_deref().is_some_and(|t| t.trim().is_empty()) {
            self.name_template = None;
        }
        tracing::debug!(config = ?self, "configuration loaded");
        Ok(self)
    }

    pub fn search_timeout(&self) -> Duration {
        Duration::from_secs(self.search_timeout_secs)
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "shelf")
}
