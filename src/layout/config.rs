//! Layout configuration
//!
//! [`LayoutConfig`] carries every size the layout engine uses. It is built once
//! (defaults, an optional TOML file, then CLI overrides) and handed to
//! [`FrameLayout`](super::FrameLayout) by value; nothing reads sizes from
//! global state.
//!
//! ```toml
//! column_width = 90
//! row_height = 24
//! show_offsets = false
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid TOML syntax in {file}: {error}")]
    TomlParseError {
        file: PathBuf,
        error: toml::de::Error,
    },

    #[error("Invalid value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

/// Sizes and switches for frame layout, in SVG user units
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    /// Height of the title row above the slots
    pub header_height: f64,
    /// Height of one slot row
    pub row_height: f64,
    /// Width of the slot column
    pub column_width: f64,
    /// Right margin reserved for `[ebp+N]` labels
    pub address_width: f64,
    /// Label position inside a row
    pub label_offset_x: f64,
    pub label_offset_y: f64,
    /// Stack-pointer arrow geometry
    pub arrow_length: f64,
    pub pointer_label_width: f64,
    /// Left margin reserved for the stack-pointer arrow
    pub pointer_margin: f64,
    /// Blank border around every frame
    pub canvas_margin: f64,
    /// Annotate rows with their offset from the base pointer
    pub show_offsets: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            header_height: 40.0,
            row_height: 20.0,
            column_width: 70.0,
            address_width: 50.0,
            label_offset_x: 5.0,
            label_offset_y: 15.0,
            arrow_length: 20.0,
            pointer_label_width: 25.0,
            pointer_margin: 60.0,
            canvas_margin: 10.0,
            show_offsets: true,
        }
    }
}

impl LayoutConfig {
    /// Load from a TOML file; missing keys keep their defaults
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::NotFound(path.to_path_buf())
            } else {
                ConfigError::IoError(e)
            }
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::TomlParseError {
            file: path.to_path_buf(),
            error: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    pub fn with_column_width(mut self, column_width: f64) -> Self {
        self.column_width = column_width;
        self
    }

    pub fn with_offsets(mut self, show_offsets: bool) -> Self {
        self.show_offsets = show_offsets;
        self
    }

    /// All sizes must be finite; row sizes must be positive
    pub fn validate(&self) -> Result<(), ConfigError> {
        let sizes = [
            ("header_height", self.header_height, true),
            ("row_height", self.row_height, true),
            ("column_width", self.column_width, true),
            ("address_width", self.address_width, false),
            ("label_offset_x", self.label_offset_x, false),
            ("label_offset_y", self.label_offset_y, false),
            ("arrow_length", self.arrow_length, false),
            ("pointer_label_width", self.pointer_label_width, false),
            ("pointer_margin", self.pointer_margin, false),
            ("canvas_margin", self.canvas_margin, false),
        ];

        for (field, value, positive) in sizes {
            if !value.is_finite() || value < 0.0 || (positive && value == 0.0) {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    reason: if positive {
                        format!("must be a positive number, got {}", value)
                    } else {
                        format!("must be a non-negative number, got {}", value)
                    },
                });
            }
        }
        Ok(())
    }
}
