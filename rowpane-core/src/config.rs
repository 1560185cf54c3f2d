//! Viewer configuration: columns, detail fields, split settings.
//!
//! The viewer is configuration-driven: the row schema lives in the
//! config file, not in code. Loaded from JSON with serde.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Configuration loading failure.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Horizontal alignment for column content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

/// One table column: which record field it shows and how.
#[derive(Debug, Clone, Deserialize)]
pub struct ColumnConfig {
    /// Record field backing this column.
    pub key: String,
    /// Header text; defaults to the field key.
    #[serde(default)]
    pub title: Option<String>,
    /// Column width in host units (terminal columns for the TUI).
    #[serde(default = "default_column_width")]
    pub width: u16,
    /// Whether header clicks sort by this column.
    #[serde(default = "default_true")]
    pub sortable: bool,
    #[serde(default)]
    pub align: Align,
}

impl ColumnConfig {
    /// Header text for this column.
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.key)
    }
}

/// One labeled field in the detail pane.
#[derive(Debug, Clone, Deserialize)]
pub struct DetailField {
    pub key: String,
    /// Label text; defaults to the field key.
    #[serde(default)]
    pub label: Option<String>,
}

impl DetailField {
    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.key)
    }
}

/// Split-pane settings.
///
/// Defaults are the engine's canonical ones (ratio 0.5, minimums 400
/// per side, resizing enabled); configs for terminal hosts override the
/// minimums with column counts.
#[derive(Debug, Clone, Deserialize)]
pub struct SplitConfig {
    #[serde(default = "default_ratio")]
    pub initial_ratio: f64,
    #[serde(default = "default_min_width")]
    pub min_left: f64,
    #[serde(default = "default_min_width")]
    pub min_right: f64,
    #[serde(default = "default_true")]
    pub resizable: bool,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            initial_ratio: default_ratio(),
            min_left: default_min_width(),
            min_right: default_min_width(),
            resizable: true,
        }
    }
}

/// Top-level viewer configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ViewerConfig {
    /// Viewer title shown in the status line.
    #[serde(default)]
    pub title: Option<String>,
    /// Record field holding the unique row key.
    #[serde(default = "default_key_field")]
    pub key_field: String,
    pub columns: Vec<ColumnConfig>,
    /// Detail pane fields; empty means "one field per column".
    #[serde(default)]
    pub detail_fields: Vec<DetailField>,
    #[serde(default)]
    pub split: SplitConfig,
}

impl ViewerConfig {
    /// Load and validate a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check structural constraints serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.columns.is_empty() {
            return Err(ConfigError::Invalid(
                "at least one column is required".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.split.initial_ratio) {
            return Err(ConfigError::Invalid(format!(
                "initial_ratio {} outside [0, 1]",
                self.split.initial_ratio
            )));
        }
        Ok(())
    }

    /// The effective detail fields: configured ones, or one per column.
    pub fn effective_detail_fields(&self) -> Vec<DetailField> {
        if !self.detail_fields.is_empty() {
            return self.detail_fields.clone();
        }
        self.columns
            .iter()
            .map(|col| DetailField {
                key: col.key.clone(),
                label: col.title.clone(),
            })
            .collect()
    }
}

fn default_ratio() -> f64 {
    0.5
}

fn default_min_width() -> f64 {
    400.0
}

fn default_column_width() -> u16 {
    20
}

fn default_key_field() -> String {
    "id".into()
}

fn default_true() -> bool {
    true
}
