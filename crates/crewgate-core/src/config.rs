//! Configuration management for crewgate.
//!
//! Loads configuration from ${CREWGATE_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Env var that overrides `api.base_url`.
pub const API_URL_ENV: &str = "CREWGATE_API_URL";

/// Auth server connection settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL the `/api/...` endpoints are joined onto.
    pub base_url: String,
    /// Request timeout in seconds (0 disables).
    pub request_timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: Config::DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: 0,
        }
    }
}

/// Decorative image locations.
///
/// The deployed prefix of these files differs between installs, so they are
/// plain paths resolved against `root` rather than fixed URLs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    /// Directory that relative paths are resolved against (default: crewgate home).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<String>,
    /// Background loop image.
    pub background: String,
    /// Landing logo.
    pub logo: String,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            root: None,
            background: "media/bg.gif".to_string(),
            logo: "media/logo.png".to_string(),
        }
    }
}

impl AssetsConfig {
    fn base_dir(&self) -> PathBuf {
        match self.root.as_deref().map(str::trim) {
            Some(root) if !root.is_empty() => PathBuf::from(root),
            _ => paths::crewgate_home(),
        }
    }

    fn resolve(&self, value: &str) -> PathBuf {
        let path = Path::new(value);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir().join(path)
        }
    }

    /// Absolute path of the background image.
    pub fn background_path(&self) -> PathBuf {
        self.resolve(&self.background)
    }

    /// Absolute path of the logo image.
    pub fn logo_path(&self) -> PathBuf {
        self.resolve(&self.logo)
    }
}

/// Returns the default config template with comments.
fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

/// Merges user config values into the default template.
///
/// New comments/sections from the template are always present, while the
/// user's customized values are preserved.
fn merge_with_template(user_config: &str) -> Result<String> {
    use toml_edit::DocumentMut;

    let mut doc: DocumentMut = default_config_template()
        .parse()
        .context("Failed to parse default config template")?;
    let user_doc: DocumentMut = user_config.parse().context("Failed to parse user config")?;

    merge_items(doc.as_table_mut(), user_doc.as_table());

    Ok(doc.to_string())
}

/// Recursively merges items from source table into target table.
fn merge_items(target: &mut toml_edit::Table, source: &toml_edit::Table) {
    use toml_edit::Item;

    for (key, value) in source.iter() {
        match value {
            Item::Value(v) => {
                target[key] = Item::Value(v.clone());
            }
            Item::Table(src_table) => {
                if let Some(Item::Table(target_table)) = target.get_mut(key) {
                    merge_items(target_table, src_table);
                } else {
                    target[key] = Item::Table(src_table.clone());
                }
            }
            Item::ArrayOfTables(src_arr) => {
                target[key] = Item::ArrayOfTables(src_arr.clone());
            }
            Item::None => {}
        }
    }
}

pub mod paths {
    //! Path resolution for crewgate configuration and data directories.
    //!
    //! CREWGATE_HOME resolution order:
    //! 1. CREWGATE_HOME environment variable (if set)
    //! 2. ~/.config/crewgate (default)
    //! 3. ./.crewgate when no home directory can be determined

    use std::path::PathBuf;

    /// Returns the crewgate home directory.
    pub fn crewgate_home() -> PathBuf {
        if let Ok(home) = std::env::var("CREWGATE_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir().map_or_else(
            || PathBuf::from(".crewgate"),
            |h| h.join(".config").join("crewgate"),
        )
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        crewgate_home().join("config.toml")
    }

    /// Returns the directory log files are written to.
    pub fn logs_dir() -> PathBuf {
        crewgate_home().join("logs")
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Auth server settings.
    pub api: ApiConfig,
    /// Decorative image locations.
    pub assets: AssetsConfig,
}

impl Config {
    const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

    /// Loads configuration from the default config path.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Resolves the effective base URL with precedence: override > env > config.
    ///
    /// # Errors
    /// Returns an error if the chosen value is not a valid URL.
    pub fn resolve_base_url(&self, override_url: Option<&str>) -> Result<String> {
        let env_url = std::env::var(API_URL_ENV).ok();
        let candidates = [override_url, env_url.as_deref(), Some(self.api.base_url.as_str())];

        let chosen = candidates
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|value| !value.is_empty())
            .unwrap_or(Self::DEFAULT_BASE_URL);

        url::Url::parse(chosen).with_context(|| format!("Invalid API base URL: {chosen}"))?;
        Ok(chosen.trim_end_matches('/').to_string())
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        if self.api.request_timeout_secs == 0 {
            None
        } else {
            Some(Duration::from_secs(self.api.request_timeout_secs))
        }
    }

    /// Saves only `api.base_url` to the config file.
    ///
    /// # Errors
    /// Returns an error if the URL is invalid or the file cannot be written.
    pub fn save_api_url(base_url: &str) -> Result<()> {
        Self::save_api_url_to(&paths::config_path(), base_url)
    }

    /// Saves only `api.base_url` to a specific config file path.
    ///
    /// Creates the file with the default template if it doesn't exist.
    /// If the file exists, merges user values into the latest template.
    ///
    /// # Errors
    /// Returns an error if the URL is invalid or the file cannot be written.
    pub fn save_api_url_to(path: &Path, base_url: &str) -> Result<()> {
        use toml_edit::{DocumentMut, value};

        url::Url::parse(base_url).with_context(|| format!("Invalid API base URL: {base_url}"))?;

        let contents = if path.exists() {
            let user_config = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            merge_with_template(&user_config)?
        } else {
            default_config_template().to_string()
        };

        let mut doc: DocumentMut = contents
            .parse()
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        doc["api"]["base_url"] = value(base_url);

        Self::write_config(path, &doc.to_string())
    }

    /// Creates a default config file at the given path.
    ///
    /// # Errors
    /// Returns an error if the file already exists or cannot be written.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        Self::write_config(path, default_config_template())
    }

    fn write_config(path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let tmp_path = path.with_extension("toml.tmp");
        fs::write(&tmp_path, content)
            .with_context(|| format!("Failed to write config to {}", tmp_path.display()))?;
        fs::rename(&tmp_path, path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                tmp_path.display(),
                path.display()
            )
        })?;

        Ok(())
    }
}
