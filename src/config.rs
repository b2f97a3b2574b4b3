//! Configuration for Escala
//!
//! Priority order:
//! 1. CLI flags (highest)
//! 2. User config (`~/.config/escala/config.toml`)
//! 3. Built-in defaults (lowest)

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::services::DEFAULT_ROTATION_ANCHOR;
use crate::error::{EscalaError, EscalaResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the JSON collections. Defaults to the platform
    /// data dir plus `escala`.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    /// Date on which rotating team A was on duty (`YYYY-MM-DD`).
    #[serde(default = "default_rotation_anchor")]
    pub rotation_anchor: String,
}

fn default_rotation_anchor() -> String {
    DEFAULT_ROTATION_ANCHOR.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            rotation_anchor: default_rotation_anchor(),
        }
    }
}

impl Config {
    /// Default user config path, when the platform exposes a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("escala").join("config.toml"))
    }

    /// Load from an explicit path, or from the default location, falling
    /// back to defaults when no file exists. A malformed file is an error
    /// rather than a silent fallback.
    pub fn load_or_default(path: Option<&Path>) -> EscalaResult<Self> {
        let path = match path {
            Some(p) => Some(p.to_path_buf()),
            None => Self::default_path(),
        };
        let Some(path) = path else {
            return Ok(Self::default());
        };
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path).map_err(|e| {
            EscalaError::validation(format!("failed to read {}: {e}", path.display()))
        })?;
        toml::from_str(&content).map_err(|e| {
            EscalaError::validation(format!("invalid config {}: {e}", path.display()))
        })
    }

    /// Resolved data directory.
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("escala")
        })
    }

    /// Parsed rotation anchor.
    pub fn rotation_anchor(&self) -> EscalaResult<NaiveDate> {
        crate::domain::value_objects::parse_date(&self.rotation_anchor)
    }
}
