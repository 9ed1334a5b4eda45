//! `~/.cubist/config.toml` loading.
//!
//! Every table and key is optional:
//!
//! ```toml
//! [app]
//! ascii_only = false
//! high_contrast = false
//!
//! [storage]
//! path = "${HOME}/.cubist/state.json"
//!
//! [puzzle]
//! answer = [0, 1, 2, ..., 19, 0, 0, ..., 0]
//! ```

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

use cubist_types::{AnswerState, StateError};

const CONFIG_DIR: &str = ".cubist";
const DEFAULT_STATE_FILE: &str = "state.json";

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub struct CubistConfig {
    pub app: Option<AppConfig>,
    pub storage: Option<StorageConfig>,
    pub puzzle: Option<PuzzleConfig>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    /// Use ASCII-only glyphs for highlights and markers.
    #[serde(default)]
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    #[serde(default)]
    pub high_contrast: bool,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub struct StorageConfig {
    /// Save file location. `${VAR}` references are expanded.
    pub path: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub struct PuzzleConfig {
    /// Goal state as `permutation ++ orientation`, 40 integers.
    pub answer: Option<Vec<i32>>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

impl CubistConfig {
    /// Load from the default location. `Ok(None)` when there is no file.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(None),
        }
    }

    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(Some(config)),
            Err(err) => {
                warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    /// Load, falling back to defaults when the file is missing or broken.
    ///
    /// Failures are already logged by [`CubistConfig::load`].
    #[must_use]
    pub fn load_or_default() -> Self {
        Self::load().ok().flatten().unwrap_or_default()
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    #[must_use]
    pub fn ascii_only(&self) -> bool {
        self.app.as_ref().is_some_and(|app| app.ascii_only)
    }

    #[must_use]
    pub fn high_contrast(&self) -> bool {
        self.app.as_ref().is_some_and(|app| app.high_contrast)
    }

    /// Where saves go: the configured path with variables expanded, or
    /// `~/.cubist/state.json`.
    #[must_use]
    pub fn storage_path(&self) -> Option<PathBuf> {
        let configured = self
            .storage
            .as_ref()
            .and_then(|storage| storage.path.as_deref())
            .map(expand_env_vars)
            .filter(|path| !path.trim().is_empty());
        match configured {
            Some(path) => Some(PathBuf::from(path)),
            None => cubist_dir().map(|dir| dir.join(DEFAULT_STATE_FILE)),
        }
    }

    /// The goal state. The solved cube unless `[puzzle] answer` is set.
    pub fn answer(&self) -> Result<AnswerState, StateError> {
        match self.puzzle.as_ref().and_then(|puzzle| puzzle.answer.as_deref()) {
            Some(values) => AnswerState::from_concat(values),
            None => Ok(AnswerState::identity()),
        }
    }
}

/// Replace `${VAR}` with the variable's value (empty when unset).
///
/// Unclosed `${` and empty `${}` are left as written.
#[must_use]
pub fn expand_env_vars(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find('}') {
            Some(0) => {
                out.push_str("${}");
                rest = &after[1..];
            }
            Some(end) => {
                out.push_str(&env::var(&after[..end]).unwrap_or_default());
                rest = &after[end + 1..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

/// `~/.cubist`, home of the config file, logs and the default save file.
#[must_use]
pub fn cubist_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_DIR))
}

#[must_use]
pub fn config_path() -> Option<PathBuf> {
    cubist_dir().map(|dir| dir.join("config.toml"))
}
