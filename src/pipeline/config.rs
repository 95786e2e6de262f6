// src/pipeline/config.rs
use crate::error::PipelineError;
use leafprint_layout::LayoutConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

/// Options for the serialized PDF.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// FlateDecode page content streams.
    pub compress: bool,
    /// Write a `CreationDate` into the Info dictionary. Disable for
    /// reproducible output.
    pub creation_date: bool,
    /// Document title in the Info dictionary.
    pub title: Option<String>,
    /// Overrides the default `leafprint <version>` producer string.
    pub producer: Option<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            compress: true,
            creation_date: true,
            title: None,
            producer: None,
        }
    }
}

/// Complete pipeline configuration, usually loaded from TOML:
///
/// ```toml
/// [layout]
/// footers = "exact"
///
/// [layout.margins]
/// top = 72.0
/// right = 72.0
/// bottom = 72.0
/// left = 72.0
///
/// [output]
/// title = "Enhanced Worksheet"
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LeafprintConfig {
    pub output: OutputConfig,
    pub layout: LayoutConfig,
}

impl LeafprintConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, PipelineError> {
        Ok(toml::from_str(source)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, PipelineError> {
        let path_ref = path.as_ref();
        let source = fs::read_to_string(path_ref).map_err(|e| {
            PipelineError::Io(io::Error::new(
                e.kind(),
                format!("Failed to read config from '{}': {}", path_ref.display(), e),
            ))
        })?;
        let config = Self::from_toml_str(&source)?;
        log::debug!("Loaded configuration from {}", path_ref.display());
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String, PipelineError> {
        toml::to_string(self).map_err(|e| PipelineError::Config(e.to_string()))
    }
}
