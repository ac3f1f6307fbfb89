//! Word-table encoder
//!
//! Packs each glyph row into one word and renders the charset as a C array:
//!
//! ```text
//! static const uint16_t Font6x14 [] = {
//!     0x0000, 0x0000, ..., /* sp */
//!     0x0000, 0x2000, ..., /* ! */
//!     ...
//! };
//! ```
//!
//! Column 0 is the most significant bit of a word. Locked cells always
//! encode as 0.

use std::fmt::{self, Write};

use crate::charset::LABELS;
use crate::{Cell, GlyphConfig, Grid};

/// Element type of the emitted array
pub const WORD_TYPE: &str = "uint16_t";

/// Pack one row, column 0 first, into a big-endian word
pub fn encode_row(cells: &[Cell]) -> u64 {
    cells.iter().fold(0, |word, cell| (word << 1) | cell.bit())
}

/// One word per row, top to bottom
pub fn encode_glyph(grid: &Grid) -> Vec<u64> {
    grid.row_cells().map(encode_row).collect()
}

/// Render a word as `0x` + upper-case hex, zero-padded to `digits`
pub fn format_word(word: u64, digits: usize) -> String {
    format!("0x{word:0digits$X}")
}

/// Array name: `Font{drawable width}x{rows}`
pub fn table_name(config: &GlyphConfig) -> String {
    format!("Font{}x{}", config.drawable_width(), config.rows)
}

/// Render every glyph, in charset order, as one C initializer
pub fn encode_all(config: &GlyphConfig, glyphs: &[Grid]) -> String {
    GlyphTable::new(config, glyphs).to_string()
}

/// Displayable font table over a set of glyph grids
///
/// Glyphs are labelled by their charset position; grids beyond the
/// charset are not emitted.
pub struct GlyphTable<'a> {
    config: &'a GlyphConfig,
    glyphs: &'a [Grid],
}

impl<'a> GlyphTable<'a> {
    pub fn new(config: &'a GlyphConfig, glyphs: &'a [Grid]) -> Self {
        Self { config, glyphs }
    }

    /// One glyph line without indentation or line break:
    /// `0x0000, 0x1C00, ..., /* A */`
    pub fn glyph_line(&self, label: &str, grid: &Grid) -> String {
        let digits = self.config.hex_digits();
        let mut line = String::new();
        for word in encode_glyph(grid) {
            // writing to a String cannot fail
            let _ = write!(line, "{}, ", format_word(word, digits));
        }
        let _ = write!(line, "/* {label} */");
        line
    }
}

impl fmt::Display for GlyphTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "static const {WORD_TYPE} {} [] = {{", table_name(self.config))?;
        for (grid, label) in self.glyphs.iter().zip(LABELS) {
            writeln!(f, "    {}", self.glyph_line(label, grid))?;
        }
        f.write_str("};")
    }
}
