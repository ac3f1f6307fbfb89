//! Glyph geometry shared by every glyph of a font
//!
//! The configuration decides the grid size and the locked padding band.
//! It can come from three places:
//! - [`GlyphConfig::default`] - the 16x14 SSD1306 style layout
//! - [`parse_config`] - the six raw option fields typed by the user
//! - [`GlyphConfig::from_toml_str`] - a TOML document
//!
//! [`GlyphConfig::to_toml_string`] writes the TOML form back out.

use std::num::IntErrorKind;

use serde::{Deserialize, Serialize};

use crate::limits::{MAX_COLS, MAX_ROWS, MIN_HEX_DIGITS};
use crate::{ConfigError, ConfigField, Result};

/// Size and padding of every glyph grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct GlyphConfig {
    /// Words per glyph (glyph height)
    pub rows: usize,
    /// Bits per word
    pub cols: usize,
    pub pad_top: usize,
    pub pad_bottom: usize,
    pub pad_left: usize,
    pub pad_right: usize,
}

impl Default for GlyphConfig {
    fn default() -> Self {
        Self {
            rows: 14,
            cols: 16,
            pad_top: 1,
            pad_bottom: 3,
            pad_left: 1,
            pad_right: 9,
        }
    }
}

impl GlyphConfig {
    /// Create an unpadded configuration
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            pad_top: 0,
            pad_bottom: 0,
            pad_left: 0,
            pad_right: 0,
        }
    }

    pub fn with_padding(mut self, top: usize, bottom: usize, left: usize, right: usize) -> Self {
        self.pad_top = top;
        self.pad_bottom = bottom;
        self.pad_left = left;
        self.pad_right = right;
        self
    }

    /// Load a configuration from TOML. Missing keys keep their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: GlyphConfig = toml::from_str(text).inspect_err(|err| log::debug!("Unreadable glyph configuration: {err}"))?;
        if let Err(err) = config.validate() {
            log::debug!("Glyph configuration {config:?} failed validation: {err}");
            return Err(err.into());
        }
        Ok(config)
    }

    /// TOML form of this configuration, readable by [`GlyphConfig::from_toml_str`]
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// Check the geometry: non-empty, within limits, and padding leaving
    /// at least one drawable row and column.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.rows == 0 {
            return Err(ConfigError::Zero { field: ConfigField::Rows });
        }
        if self.cols == 0 {
            return Err(ConfigError::Zero { field: ConfigField::Cols });
        }
        if self.rows > MAX_ROWS {
            return Err(ConfigError::TooLarge {
                field: ConfigField::Rows,
                value: self.rows.to_string(),
                max: MAX_ROWS,
            });
        }
        if self.cols > MAX_COLS {
            return Err(ConfigError::TooLarge {
                field: ConfigField::Cols,
                value: self.cols.to_string(),
                max: MAX_COLS,
            });
        }
        if self.pad_top.saturating_add(self.pad_bottom) >= self.rows {
            return Err(ConfigError::NoDrawableRows {
                rows: self.rows,
                top: self.pad_top,
                bottom: self.pad_bottom,
            });
        }
        if self.pad_left.saturating_add(self.pad_right) >= self.cols {
            return Err(ConfigError::NoDrawableCols {
                cols: self.cols,
                left: self.pad_left,
                right: self.pad_right,
            });
        }
        Ok(())
    }

    /// Columns left between the left and right padding.
    /// Only meaningful on a validated configuration.
    pub fn drawable_width(&self) -> usize {
        self.cols - self.pad_left - self.pad_right
    }

    /// Rows left between the top and bottom padding.
    /// Only meaningful on a validated configuration.
    pub fn drawable_height(&self) -> usize {
        self.rows - self.pad_top - self.pad_bottom
    }

    /// Whether (row, col) lies in the locked padding band
    pub fn is_padding(&self, row: usize, col: usize) -> bool {
        row < self.pad_top || row >= self.rows - self.pad_bottom || col < self.pad_left || col >= self.cols - self.pad_right
    }

    /// Number of locked cells in one glyph grid
    pub fn locked_cell_count(&self) -> usize {
        self.rows * self.cols - self.drawable_width() * self.drawable_height()
    }

    /// Hex digits per rendered word: enough for `cols` bits, never fewer than 4
    pub fn hex_digits(&self) -> usize {
        self.cols.div_ceil(4).max(MIN_HEX_DIGITS)
    }

    pub fn field(&self, field: ConfigField) -> usize {
        match field {
            ConfigField::Rows => self.rows,
            ConfigField::Cols => self.cols,
            ConfigField::PadTop => self.pad_top,
            ConfigField::PadBottom => self.pad_bottom,
            ConfigField::PadLeft => self.pad_left,
            ConfigField::PadRight => self.pad_right,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Raw option fields
// ═══════════════════════════════════════════════════════════════════════════

/// The six option fields as typed by the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawConfigFields {
    pub rows: String,
    pub cols: String,
    pub pad_top: String,
    pub pad_bottom: String,
    pub pad_left: String,
    pub pad_right: String,
}

impl RawConfigFields {
    pub fn new(rows: &str, cols: &str, pad_top: &str, pad_bottom: &str, pad_left: &str, pad_right: &str) -> Self {
        Self {
            rows: rows.to_string(),
            cols: cols.to_string(),
            pad_top: pad_top.to_string(),
            pad_bottom: pad_bottom.to_string(),
            pad_left: pad_left.to_string(),
            pad_right: pad_right.to_string(),
        }
    }

    pub fn field(&self, field: ConfigField) -> &str {
        match field {
            ConfigField::Rows => &self.rows,
            ConfigField::Cols => &self.cols,
            ConfigField::PadTop => &self.pad_top,
            ConfigField::PadBottom => &self.pad_bottom,
            ConfigField::PadLeft => &self.pad_left,
            ConfigField::PadRight => &self.pad_right,
        }
    }
}

/// Pre-fills the option fields with the values of an active configuration
impl From<&GlyphConfig> for RawConfigFields {
    fn from(config: &GlyphConfig) -> Self {
        Self {
            rows: config.rows.to_string(),
            cols: config.cols.to_string(),
            pad_top: config.pad_top.to_string(),
            pad_bottom: config.pad_bottom.to_string(),
            pad_left: config.pad_left.to_string(),
            pad_right: config.pad_right.to_string(),
        }
    }
}

/// Parse and validate the raw option fields.
///
/// Surrounding whitespace is ignored. Every field must be a whole,
/// non-negative decimal number; the resulting geometry must pass
/// [`GlyphConfig::validate`].
pub fn parse_config(fields: &RawConfigFields) -> std::result::Result<GlyphConfig, ConfigError> {
    let config = GlyphConfig {
        rows: parse_field(ConfigField::Rows, &fields.rows)?,
        cols: parse_field(ConfigField::Cols, &fields.cols)?,
        pad_top: parse_field(ConfigField::PadTop, &fields.pad_top)?,
        pad_bottom: parse_field(ConfigField::PadBottom, &fields.pad_bottom)?,
        pad_left: parse_field(ConfigField::PadLeft, &fields.pad_left)?,
        pad_right: parse_field(ConfigField::PadRight, &fields.pad_right)?,
    };
    config.validate()?;
    Ok(config)
}

fn parse_field(field: ConfigField, raw: &str) -> std::result::Result<usize, ConfigError> {
    let text = raw.trim();
    match text.parse::<u64>() {
        // values beyond usize are caught by the limit checks in validate()
        Ok(value) => Ok(usize::try_from(value).unwrap_or(usize::MAX)),
        Err(err) if *err.kind() == IntErrorKind::PosOverflow => Err(ConfigError::TooLarge {
            field,
            value: text.to_string(),
            max: field.max(),
        }),
        Err(_) => match text.parse::<i64>() {
            Ok(value) if value < 0 => Err(ConfigError::Negative { field, value }),
            // "-0"
            Ok(value) => Ok(usize::try_from(value).unwrap_or(usize::MAX)),
            Err(err) if *err.kind() == IntErrorKind::NegOverflow => Err(ConfigError::Negative { field, value: i64::MIN }),
            _ => Err(ConfigError::NotANumber {
                field,
                value: raw.to_string(),
            }),
        },
    }
}
