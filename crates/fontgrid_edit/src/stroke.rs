//! Pointer-driven painting
//!
//! A presentation layer forwards pointer events over glyph grids through
//! [`CellPointer`]. [`PaintStroke`] turns them into cell edits:
//!
//! | Event                      | Effect                                               |
//! |----------------------------|------------------------------------------------------|
//! | press (primary)            | cell on, stroke starts                               |
//! | press (secondary)          | cell off, stroke starts                              |
//! | enter, same glyph          | cells from the previous cell to this one painted     |
//! | enter, other glyph         | stroke ends, nothing painted                         |
//! | release / leave the grid   | stroke ends                                          |
//!
//! Locked cells are skipped by every edit.

use crate::brushes::line_cells;
use crate::FontSession;

/// Pointer button that started a stroke
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintButton {
    /// Draws: sets cells on
    Primary,
    /// Erases: sets cells off
    Secondary,
}

impl PaintButton {
    pub fn paints_on(self) -> bool {
        self == PaintButton::Primary
    }
}

/// A cell of one glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellPos {
    pub glyph: usize,
    pub row: usize,
    pub col: usize,
}

impl CellPos {
    pub fn new(glyph: usize, row: usize, col: usize) -> Self {
        Self { glyph, row, col }
    }
}

/// Capabilities a presentation layer drives while the pointer moves over glyph grids
pub trait CellPointer {
    /// A button went down over a cell
    fn on_cell_press(&mut self, session: &mut FontSession, pos: CellPos, button: PaintButton);

    /// The pointer moved onto a cell
    fn on_cell_enter(&mut self, session: &mut FontSession, pos: CellPos);

    /// The button went up
    fn on_cell_release(&mut self, session: &mut FontSession);

    /// The pointer left a glyph grid
    fn on_grid_leave(&mut self, session: &mut FontSession) {
        self.on_cell_release(session);
    }
}

#[derive(Debug, Clone, Copy)]
struct ActiveStroke {
    glyph: usize,
    button: PaintButton,
    last: (usize, usize),
}

/// Press-drag-release painter
#[derive(Debug, Default)]
pub struct PaintStroke {
    active: Option<ActiveStroke>,
}

impl PaintStroke {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_painting(&self) -> bool {
        self.active.is_some()
    }

    /// Button of the running stroke
    pub fn button(&self) -> Option<PaintButton> {
        self.active.map(|stroke| stroke.button)
    }
}

impl CellPointer for PaintStroke {
    fn on_cell_press(&mut self, session: &mut FontSession, pos: CellPos, button: PaintButton) {
        session.set_cell(pos.glyph, pos.row, pos.col, button.paints_on());
        self.active = Some(ActiveStroke {
            glyph: pos.glyph,
            button,
            last: (pos.row, pos.col),
        });
    }

    fn on_cell_enter(&mut self, session: &mut FontSession, pos: CellPos) {
        let Some(stroke) = self.active.as_mut() else {
            return;
        };

        if stroke.glyph != pos.glyph {
            log::debug!("Stroke on glyph {} ended by entering glyph {}", stroke.glyph, pos.glyph);
            self.active = None;
            return;
        }

        let on = stroke.button.paints_on();
        for (row, col) in line_cells(stroke.last, (pos.row, pos.col)) {
            session.set_cell(pos.glyph, row, col, on);
        }
        stroke.last = (pos.row, pos.col);
    }

    fn on_cell_release(&mut self, _session: &mut FontSession) {
        self.active = None;
    }
}
