//! Editing session
//!
//! `FontSession` is the single owner of the glyph configuration and of one
//! grid per charset glyph. The lifecycle has two phases repeated forever:
//!
//! 1. **Configure** - a new configuration is validated and, if accepted,
//!    every grid is rebuilt from scratch. Edits are discarded. A rejected
//!    configuration leaves the session exactly as it was.
//! 2. **Edit** - individual cells are switched on or off. Locked padding
//!    cells silently ignore edits.
//!
//! Exporting reads the current cell states and never fails.
//!
//! Glyphs are addressed by charset index (see [`charset`]). Out-of-range
//! glyph, row or column indices are caller errors and panic.

use fontgrid_engine::{charset, encoder, parse_config, Cell, GlyphConfig, Grid, RawConfigFields, Result};

pub struct FontSession {
    config: GlyphConfig,
    glyphs: Vec<Grid>,
}

impl Default for FontSession {
    fn default() -> Self {
        Self::new()
    }
}

impl FontSession {
    // ═══════════════════════════════════════════════════════════════════════
    // Constructors
    // ═══════════════════════════════════════════════════════════════════════

    /// Create a session with the default 16x14 layout
    pub fn new() -> Self {
        let config = GlyphConfig::default();
        Self {
            glyphs: Self::build_glyphs(&config),
            config,
        }
    }

    /// Create a session with a custom layout
    pub fn with_config(config: GlyphConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            glyphs: Self::build_glyphs(&config),
            config,
        })
    }

    fn build_glyphs(config: &GlyphConfig) -> Vec<Grid> {
        vec![Grid::new(config); charset::GLYPH_COUNT]
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Configuration
    // ═══════════════════════════════════════════════════════════════════════

    pub fn config(&self) -> &GlyphConfig {
        &self.config
    }

    /// Replace the configuration and rebuild every glyph grid.
    ///
    /// Validation happens first; on error nothing is changed.
    pub fn reconfigure(&mut self, config: GlyphConfig) -> Result<()> {
        if let Err(err) = config.validate() {
            log::warn!("Rejected glyph configuration {config:?}: {err}");
            return Err(err.into());
        }
        self.apply(config);
        Ok(())
    }

    /// Parse the raw option fields and reconfigure.
    pub fn apply_fields(&mut self, fields: &RawConfigFields) -> Result<()> {
        match parse_config(fields) {
            Ok(config) => {
                self.apply(config);
                Ok(())
            }
            Err(err) => {
                log::warn!("Rejected glyph options: {err}");
                Err(err.into())
            }
        }
    }

    /// Load a TOML configuration and reconfigure.
    pub fn apply_toml(&mut self, text: &str) -> Result<()> {
        let config = GlyphConfig::from_toml_str(text).inspect_err(|err| log::warn!("Rejected glyph configuration: {err}"))?;
        self.apply(config);
        Ok(())
    }

    /// Option fields pre-filled with the active configuration
    pub fn raw_fields(&self) -> RawConfigFields {
        RawConfigFields::from(&self.config)
    }

    fn apply(&mut self, config: GlyphConfig) {
        self.glyphs = Self::build_glyphs(&config);
        self.config = config;
        log::info!(
            "Rebuilt {} glyph grids at {}x{} (drawable {}x{})",
            self.glyphs.len(),
            config.cols,
            config.rows,
            config.drawable_width(),
            config.drawable_height()
        );
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Glyph access
    // ═══════════════════════════════════════════════════════════════════════

    pub fn glyph_count(&self) -> usize {
        self.glyphs.len()
    }

    pub fn glyphs(&self) -> &[Grid] {
        &self.glyphs
    }

    pub fn glyph(&self, glyph: usize) -> Option<&Grid> {
        self.glyphs.get(glyph)
    }

    /// Grid of the glyph drawing `ch`, `None` outside the charset
    pub fn glyph_for_char(&self, ch: char) -> Option<&Grid> {
        charset::glyph_index(ch).and_then(|index| self.glyph(index))
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Cell editing
    // ═══════════════════════════════════════════════════════════════════════

    /// Read one cell.
    ///
    /// # Panics
    ///
    /// Panics if the glyph, row or column is out of range.
    pub fn read_cell(&self, glyph: usize, row: usize, col: usize) -> Cell {
        self.glyphs[glyph].cell(row, col)
    }

    /// Switch one cell on or off. Locked cells are ignored.
    ///
    /// Returns whether the cell changed.
    ///
    /// # Panics
    ///
    /// Panics if the glyph, row or column is out of range.
    pub fn set_cell(&mut self, glyph: usize, row: usize, col: usize, on: bool) -> bool {
        self.glyphs[glyph].set_cell(row, col, on)
    }

    /// Flip one cell. Locked cells are ignored.
    ///
    /// # Panics
    ///
    /// Panics if the glyph, row or column is out of range.
    pub fn toggle_cell(&mut self, glyph: usize, row: usize, col: usize) -> bool {
        self.glyphs[glyph].toggle_cell(row, col)
    }

    /// Turn every editable cell of a glyph off
    ///
    /// # Panics
    ///
    /// Panics if the glyph is out of range.
    pub fn clear_glyph(&mut self, glyph: usize) {
        self.glyphs[glyph].clear();
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Export
    // ═══════════════════════════════════════════════════════════════════════

    /// Row words of one glyph
    ///
    /// # Panics
    ///
    /// Panics if the glyph is out of range.
    pub fn encode_glyph(&self, glyph: usize) -> Vec<u64> {
        encoder::encode_glyph(&self.glyphs[glyph])
    }

    /// The whole font as C initializer text
    pub fn export(&self) -> String {
        let drawn = self.glyphs.iter().filter(|grid| !grid.is_blank()).count();
        log::debug!("Exporting {} as {} glyphs ({drawn} drawn)", encoder::table_name(&self.config), self.glyphs.len());
        encoder::encode_all(&self.config, &self.glyphs)
    }
}
