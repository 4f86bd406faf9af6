//! # Configuration
//!
//! Managed by [`confique`], layered in priority order:
//! 1. **Environment variables**: `ALMAREC_DATA_DIR`, `ALMAREC_DEFAULT_ACTION`, ...
//! 2. **Config file**: an optional TOML file (`almarec.toml`).
//! 3. **Compiled defaults**: via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `data_dir` | `.almarec` | Root of the directory-backed transport |
//! | `default_action` | `update` | Merge action when none is given (`create`, `update`, `sync`) |
//! | `pretty` | `true` | Pretty-print wire documents on output |
//! | `log_level` | `warn` | Log filter used by the command-line client |

use crate::error::{RecordError, Result};
use crate::segment::MergeAction;
use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "almarec.toml";

#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RecordsConfig {
    /// Directory holding `<resource>/<id>.json` records.
    #[config(env = "ALMAREC_DATA_DIR", default = ".almarec")]
    pub data_dir: PathBuf,

    /// Kept as text so a bad value is reported by `default_action()`, with
    /// the list of accepted actions.
    #[config(env = "ALMAREC_DEFAULT_ACTION", default = "update")]
    pub default_action: String,

    #[config(env = "ALMAREC_PRETTY", default = true)]
    pub pretty: bool,

    #[config(env = "ALMAREC_LOG_LEVEL", default = "warn")]
    pub log_level: String,
}

impl Default for RecordsConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(".almarec"),
            default_action: MergeAction::Update.to_string(),
            pretty: true,
            log_level: "warn".to_string(),
        }
    }
}

impl RecordsConfig {
    /// Load from the environment, then `file` (when given and present), then defaults.
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let mut builder = Self::builder().env();
        if let Some(path) = file {
            builder = builder.file(path);
        }
        builder
            .load()
            .map_err(|e| RecordError::Config(e.to_string()))
    }

    pub fn default_action(&self) -> Result<MergeAction> {
        self.default_action.parse().map_err(RecordError::Config)
    }
}
