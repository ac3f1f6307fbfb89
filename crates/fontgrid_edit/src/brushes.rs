//! Brush algorithms for glyph editing
//!
//! Coordinates are (row, col) pairs in grid space.

// ═══════════════════════════════════════════════════════════════════════════
// Bresenham Line Algorithm
// ═══════════════════════════════════════════════════════════════════════════

/// Cells along the line from `start` to `end`, both ends included
///
/// Produces a connected run of cells, so a stroke that skips over cells
/// between two pointer events still paints a continuous line.
pub fn line_cells(start: (usize, usize), end: (usize, usize)) -> Vec<(usize, usize)> {
    let (row0, col0) = (start.0 as isize, start.1 as isize);
    let (row1, col1) = (end.0 as isize, end.1 as isize);

    let d_col = (col1 - col0).abs();
    let d_row = -(row1 - row0).abs();
    let step_col = if col0 < col1 { 1 } else { -1 };
    let step_row = if row0 < row1 { 1 } else { -1 };
    let mut err = d_col + d_row;

    let mut points = Vec::new();
    let (mut row, mut col) = (row0, col0);

    loop {
        points.push((row as usize, col as usize));

        if row == row1 && col == col1 {
            break;
        }

        let e2 = 2 * err;
        if e2 >= d_row {
            err += d_row;
            col += step_col;
        }
        if e2 <= d_col {
            err += d_col;
            row += step_row;
        }
    }

    points
}
