#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
//! Editing layer for fontgrid
//!
//! Provides the model side of a glyph table editor:
//! - `FontSession` - owns the configuration and one grid per charset glyph
//! - `CellPointer` / `PaintStroke` - press, drag and release painting
//! - Brush algorithms used by strokes
//!
//! Presentation layers only read from the session and call its methods.

pub mod brushes;

mod session;
pub use session::FontSession;

mod stroke;
pub use stroke::{CellPointer, CellPos, PaintButton, PaintStroke};

pub use fontgrid_engine::{charset, encoder, Cell, ConfigError, ConfigField, FontGridError, GlyphConfig, Grid, RawConfigFields, Result};
