//! Shared configuration types for CLI commands

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::{
    Result,
    adapters::{JsonRepository, MsgPackRepository},
    error::Error,
    ports::PolicyRepository,
};

/// File written by the MessagePack format inside the output directory
pub const MSGPACK_FILE: &str = "policies.msgpack";

/// On-disk format for solved policy tables
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `policy_x.json` and `policy_o.json`
    #[default]
    Json,
    /// Single `policies.msgpack` file
    Msgpack,
}

/// Configuration for a solve run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolveConfig {
    /// Directory receiving the policy files
    pub output_dir: PathBuf,

    /// Serialization format
    pub format: OutputFormat,

    /// Indent JSON output
    pub pretty: bool,

    /// Whether to show a progress spinner
    pub progress: bool,
}

impl Default for SolveConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            format: OutputFormat::Json,
            pretty: false,
            progress: true,
        }
    }
}

impl SolveConfig {
    /// Load a configuration from a JSON file; missing fields take defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| Error::Io {
            operation: format!("read config {path:?}"),
            source,
        })?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Location handed to the repository for this format
    pub fn target(&self) -> PathBuf {
        match self.format {
            OutputFormat::Json => self.output_dir.clone(),
            OutputFormat::Msgpack => self.output_dir.join(MSGPACK_FILE),
        }
    }

    /// Repository adapter matching the configured format
    pub fn repository(&self) -> Box<dyn PolicyRepository> {
        match (self.format, self.pretty) {
            (OutputFormat::Json, true) => Box::new(JsonRepository::pretty()),
            (OutputFormat::Json, false) => Box::new(JsonRepository::new()),
            (OutputFormat::Msgpack, _) => Box::new(MsgPackRepository::new()),
        }
    }
}
