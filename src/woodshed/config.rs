//! Library-root discovery and well-known paths.
//!
//! The library root is resolved from, in order: an explicit path (the
//! `--library` flag), then `config.json` in the user config directory.
//! Either candidate may be redirected by a `config.json` inside the
//! library's resources folder, which points practice data at a shared
//! library location.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::{Result, WoodshedError};

/// `#`-prefixed so discovery never treats it as a section.
pub const RESOURCES_DIR: &str = "#Practice Resources";
pub const DATA_SUBDIR: &str = "data";
const CONFIG_FILENAME: &str = "config.json";

/// User-level configuration pointing at the score library.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackerConfig {
    pub library_root: Option<PathBuf>,
}

impl TrackerConfig {
    /// Load config from the given directory, or return defaults if not
    /// found.
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);
        if !config_path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&config_path)?;
        let config: TrackerConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory, creating it if needed.
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }
}

/// The per-user config directory (`~/.config/woodshed` or the platform
/// equivalent).
pub fn user_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("com", "woodshed", "woodshed").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Resolve the library root, following any in-library redirect.
pub fn resolve_library_root(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        if path.is_dir() {
            return Ok(follow_redirect(path));
        }
        return Err(WoodshedError::LibraryNotFound(path.display().to_string()));
    }

    if let Some(config_dir) = user_config_dir() {
        let config = TrackerConfig::load(&config_dir).unwrap_or_default();
        if let Some(root) = config.library_root {
            if root.is_dir() {
                return Ok(follow_redirect(&root));
            }
            return Err(WoodshedError::LibraryNotFound(root.display().to_string()));
        }
    }

    Err(WoodshedError::LibraryNotFound(
        "no library_root configured; run `woodshed config library <path>`".to_string(),
    ))
}

/// A `config.json` inside the library's resources folder may redirect to
/// a shared library location; follow it when it points at a directory.
fn follow_redirect(root: &Path) -> PathBuf {
    let path = root.join(RESOURCES_DIR).join(CONFIG_FILENAME);
    if let Ok(content) = fs::read_to_string(&path) {
        if let Ok(config) = serde_json::from_str::<TrackerConfig>(&content) {
            if let Some(redirect) = config.library_root {
                if redirect.is_dir() {
                    return redirect;
                }
            }
        }
    }
    root.to_path_buf()
}

/// Where practice status, backups, and the structure map live.
pub fn data_dir(library_root: &Path) -> PathBuf {
    library_root.join(RESOURCES_DIR).join(DATA_SUBDIR)
}
