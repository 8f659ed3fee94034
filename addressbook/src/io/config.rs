//! Address book configuration stored in `addressbook.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::messages::Language;
use crate::io::book_store::DEFAULT_BOOK_PATH;

/// Default configuration file name, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "addressbook.toml";

/// Session configuration (TOML). Missing fields take their defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    /// Where the address book is loaded from and saved to.
    pub book_path: PathBuf,

    /// Language of menus, prompts and messages.
    pub language: Language,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            book_path: PathBuf::from(DEFAULT_BOOK_PATH),
            language: Language::default(),
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> Result<()> {
        if self.book_path.as_os_str().is_empty() {
            return Err(anyhow!("book_path must not be empty"));
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `AppConfig::default()`.
pub fn load_config(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "no config file, using defaults");
        return Ok(AppConfig::default());
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: AppConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate().with_context(|| format!("validate {}", path.display()))?;
    debug!(path = %path.display(), language = %cfg.language, "config loaded");
    Ok(cfg)
}
