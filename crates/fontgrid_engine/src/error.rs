//! Error types for fontgrid

use std::fmt;

use thiserror::Error;

use crate::limits::{MAX_COLS, MAX_ROWS};

/// Names one of the six numeric configuration fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigField {
    Rows,
    Cols,
    PadTop,
    PadBottom,
    PadLeft,
    PadRight,
}

impl ConfigField {
    pub const ALL: [ConfigField; 6] = [
        ConfigField::Rows,
        ConfigField::Cols,
        ConfigField::PadTop,
        ConfigField::PadBottom,
        ConfigField::PadLeft,
        ConfigField::PadRight,
    ];

    /// Largest value the field can take in a valid configuration
    pub fn max(self) -> usize {
        match self {
            ConfigField::Rows | ConfigField::PadTop | ConfigField::PadBottom => MAX_ROWS,
            ConfigField::Cols | ConfigField::PadLeft | ConfigField::PadRight => MAX_COLS,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ConfigField::Rows => "rows",
            ConfigField::Cols => "cols",
            ConfigField::PadTop => "pad top",
            ConfigField::PadBottom => "pad bottom",
            ConfigField::PadLeft => "pad left",
            ConfigField::PadRight => "pad right",
        }
    }
}

impl fmt::Display for ConfigField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Reasons a glyph configuration is refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{field} must be a whole number, got '{value}'")]
    NotANumber { field: ConfigField, value: String },

    #[error("{field} must not be negative, got {value}")]
    Negative { field: ConfigField, value: i64 },

    #[error("{field} must be at least 1")]
    Zero { field: ConfigField },

    #[error("{field} of {value} exceeds the maximum of {max}")]
    TooLarge { field: ConfigField, value: String, max: usize },

    #[error("padding {top} (top) + {bottom} (bottom) leaves no drawable rows out of {rows}")]
    NoDrawableRows { rows: usize, top: usize, bottom: usize },

    #[error("padding {left} (left) + {right} (right) leaves no drawable columns out of {cols}")]
    NoDrawableCols { cols: usize, left: usize, right: usize },
}

/// Main error type for fontgrid operations
#[derive(Debug, Error)]
pub enum FontGridError {
    #[error("Invalid glyph configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to parse configuration: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Failed to write configuration: {0}")]
    TomlWrite(#[from] toml::ser::Error),
}
