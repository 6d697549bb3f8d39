use crate::statics;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Optional user settings, read from `~/ndf-profile-editor.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Initial directory for the open/save pickers.
    pub profiles_dir: Option<PathBuf>,
    /// Author name stamped into new templates; falls back to the login name.
    pub author: Option<String>,
    pub window_size: [f32; 2],
    pub window_title: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            profiles_dir: None,
            author: None,
            window_size: [900.0, 700.0],
            window_title: statics::EN_APP_TITLE.to_string(),
        }
    }
}

impl EditorConfig {
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path).with_context(|| format!("reading {path:?}"))?;
        serde_json::from_str(&text).with_context(|| format!("parsing {path:?}"))
    }

    /// Load the default config file. Missing means defaults; broken means defaults plus a warning.
    pub fn load() -> Self {
        let Some(path) = default_config_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(config) => {
                tracing::info!(path = %path.display(), "config loaded");
                config
            }
            Err(e) => {
                tracing::warn!("ignoring config file: {e:#}");
                Self::default()
            }
        }
    }

    /// Name used as `author`/`createdBy` in new templates.
    pub fn current_user(&self) -> String {
        resolve_user([
            self.author.clone(),
            std::env::var("USERNAME").ok(),
            std::env::var("USER").ok(),
        ])
    }
}

// First non-blank candidate wins.
fn resolve_user<const N: usize>(candidates: [Option<String>; N]) -> String {
    candidates
        .into_iter()
        .flatten()
        .find(|name| !name.trim().is_empty())
        .unwrap_or_else(|| statics::EN_UNKNOWN_USER.to_string())
}

fn home_dir() -> Option<PathBuf> {
    std::env::var_os("USERPROFILE")
        .or_else(|| std::env::var_os("HOME"))
        .map(PathBuf::from)
}

pub fn default_config_path() -> Option<PathBuf> {
    home_dir().map(|home| home.join(statics::CONFIG_FILE_NAME))
}
