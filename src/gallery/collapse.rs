use crate::grid::Grid;

/// Collapse every row where some cell holds more than `threshold` thumbnails.
/// The thumbnail at `threshold - 1` of such a cell carries an expand overlay
/// counting itself and everything hidden after it.
pub fn collapse_rows(grid: &mut Grid, threshold: usize) {
    let threshold = threshold.max(1);
    for row in &mut grid.rows {
        let mut needs_collapse = false;
        for cell in &mut row.cells {
            let count = cell.thumbnails.len();
            if count > threshold {
                needs_collapse = true;
                let anchor = threshold - 1;
                cell.thumbnails[anchor].expand_overlay = Some(format!("+{}", count - anchor));
            }
        }
        row.collapsed = needs_collapse;
    }
}

/// Expand a collapsed row and drop its overlays.
pub fn expand_row(grid: &mut Grid, row: usize) {
    let Some(row) = grid.rows.get_mut(row) else {
        return;
    };
    row.collapsed = false;
    for thumb in row.cells.iter_mut().flat_map(|c| c.thumbnails.iter_mut()) {
        thumb.expand_overlay = None;
    }
}
