//! Glyph size limits
//!
//! A row is packed into a `u64`, which bounds the column count.

/// Maximum bits per word (columns per glyph)
pub const MAX_COLS: usize = 64;

/// Maximum words per glyph (rows per glyph)
pub const MAX_ROWS: usize = 256;

/// Minimum number of hex digits a word is rendered with
pub const MIN_HEX_DIGITS: usize = 4;
