#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::cast_possible_truncation,
    clippy::must_use_candidate,
    clippy::module_name_repetitions,
    clippy::return_self_not_must_use
)]
//! Glyph grid model and word-table encoder
//!
//! A font is a fixed charset of glyphs sharing one [`GlyphConfig`]. Each glyph
//! is a [`Grid`] of [`Cell`]s whose padding band is locked. The [`encoder`]
//! packs every row into one word (column 0 = most significant bit) and renders
//! the whole charset as a C initializer table.

mod cell;
pub use cell::*;

pub mod charset;

mod config;
pub use config::*;

pub mod encoder;
pub use encoder::{encode_all, encode_glyph, GlyphTable};

mod error;
pub use error::*;

mod grid;
pub use grid::*;

pub mod limits;

pub type Result<T> = std::result::Result<T, FontGridError>;
