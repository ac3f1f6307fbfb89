use crate::{Cell, GlyphConfig};

/// Cell matrix of one glyph, stored row-major
///
/// The padding band is [`Cell::Locked`] from creation on and no operation
/// ever changes it. Every other cell flips between [`Cell::Off`] and
/// [`Cell::On`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a pristine grid: padding band locked, everything else off.
    ///
    /// # Panics
    ///
    /// Panics if the configuration does not pass [`GlyphConfig::validate`].
    pub fn new(config: &GlyphConfig) -> Self {
        if let Err(err) = config.validate() {
            panic!("grid created from invalid config {config:?}: {err}");
        }

        let mut cells = Vec::with_capacity(config.rows * config.cols);
        for row in 0..config.rows {
            for col in 0..config.cols {
                cells.push(if config.is_padding(row, col) { Cell::Locked } else { Cell::Off });
            }
        }

        Self {
            rows: config.rows,
            cols: config.cols,
            cells,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Read a cell.
    ///
    /// # Panics
    ///
    /// Panics if (row, col) is outside the grid.
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[self.index(row, col)]
    }

    /// Read a cell, `None` if (row, col) is outside the grid
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row < self.rows && col < self.cols {
            Some(self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    /// Set an editable cell on or off. Locked cells are left untouched.
    ///
    /// Returns whether the cell changed.
    ///
    /// # Panics
    ///
    /// Panics if (row, col) is outside the grid.
    pub fn set_cell(&mut self, row: usize, col: usize, on: bool) -> bool {
        let index = self.index(row, col);
        let cell = &mut self.cells[index];
        if cell.is_locked() {
            return false;
        }
        let new_cell = Cell::from_bool(on);
        let changed = *cell != new_cell;
        *cell = new_cell;
        changed
    }

    /// Flip an editable cell. Returns whether the cell changed, which is
    /// false only for locked cells.
    ///
    /// # Panics
    ///
    /// Panics if (row, col) is outside the grid.
    pub fn toggle_cell(&mut self, row: usize, col: usize) -> bool {
        let current = self.cell(row, col);
        self.set_cell(row, col, !current.is_on())
    }

    /// Turn every editable cell off
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            if *cell == Cell::On {
                *cell = Cell::Off;
            }
        }
    }

    /// Iterate rows top to bottom, each as a slice in column order
    pub fn row_cells(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.cols)
    }

    pub fn lit_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_on()).count()
    }

    pub fn locked_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_locked()).count()
    }

    /// True when no editable cell is on
    pub fn is_blank(&self) -> bool {
        self.lit_count() == 0
    }

    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) out of range for {}x{} grid",
            self.rows,
            self.cols
        );
        row * self.cols + col
    }
}
