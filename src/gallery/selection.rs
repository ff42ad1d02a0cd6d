use tracing::debug;

use crate::grid::{Grid, ThumbId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedPhoto {
    pub id: ThumbId,
    pub src: String,
    pub label: String,
}

/// At most one selected photo per column, kept in selection order.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    selected: Vec<SelectedPhoto>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SelectedPhoto> {
        self.selected.iter()
    }

    /// Whether the enlarge button should be shown.
    pub fn enlarge_visible(&self) -> bool {
        !self.selected.is_empty()
    }

    /// Toggle the thumbnail at `id`. Selecting replaces any other selection in
    /// the same column. Unknown ids and thumbnails without an image are ignored.
    pub fn toggle(&mut self, grid: &mut Grid, id: ThumbId) {
        let Some(thumb) = grid.thumbnail(id) else {
            return;
        };
        let Some(src) = thumb.reference().map(str::to_string) else {
            return;
        };

        if thumb.selected {
            self.selected.retain(|s| s.id != id);
            set_selected(grid, id, false);
            debug!(row = id.row, column = id.column, count = self.len(), "deselected");
            return;
        }

        let label = photo_label(grid, id);
        let previous: Vec<ThumbId> = self
            .selected
            .iter()
            .filter(|s| s.id.column == id.column)
            .map(|s| s.id)
            .collect();
        for prev in previous {
            set_selected(grid, prev, false);
        }
        self.selected.retain(|s| s.id.column != id.column);
        set_selected(grid, id, true);
        self.selected.push(SelectedPhoto { id, src, label });
        debug!(row = id.row, column = id.column, count = self.len(), "selected");
    }
}

fn set_selected(grid: &mut Grid, id: ThumbId, selected: bool) {
    if let Some(thumb) = grid.thumbnail_mut(id) {
        thumb.selected = selected;
    }
}

/// Caption for a thumbnail: its alt text plus the row's age, if any.
pub fn photo_label(grid: &Grid, id: ThumbId) -> String {
    let title = grid.thumbnail(id).map(|t| t.alt.as_str()).unwrap_or("");
    let age = grid.rows.get(id.row).map(|r| r.age()).unwrap_or("");
    if age.is_empty() {
        title.to_string()
    } else {
        format!("{title} — {age}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{Cell, Row, Thumbnail};

    fn grid() -> Grid {
        let cell = |name: &str, n: usize| Cell {
            thumbnails: (0..n)
                .map(|i| Thumbnail::lazy(format!("/thumbnail/{name}{i}"), name))
                .collect(),
        };
        Grid {
            headers: vec!["Alice".into(), "Bob".into()],
            rows: vec![
                Row {
                    age_label: Some("1 week".into()),
                    cells: vec![cell("Alice", 2), cell("Bob", 1)],
                    collapsed: false,
                },
                Row {
                    age_label: None,
                    cells: vec![cell("Alice", 1), cell("Bob", 1)],
                    collapsed: false,
                },
            ],
        }
    }

    #[test]
    fn one_selection_per_column() {
        let mut grid = grid();
        let mut selection = Selection::new();
        let a = ThumbId::new(0, 0, 0);
        let b = ThumbId::new(0, 0, 1);
        let bob = ThumbId::new(1, 1, 0);

        selection.toggle(&mut grid, a);
        selection.toggle(&mut grid, bob);
        selection.toggle(&mut grid, b);

        assert_eq!(selection.len(), 2);
        assert!(!grid.thumbnail(a).unwrap().selected);
        assert!(grid.thumbnail(b).unwrap().selected);
        let ids: Vec<_> = selection.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![bob, b]);
    }

    #[test]
    fn toggling_again_deselects() {
        let mut grid = grid();
        let mut selection = Selection::new();
        let id = ThumbId::new(1, 1, 0);
        selection.toggle(&mut grid, id);
        assert!(selection.enlarge_visible());
        selection.toggle(&mut grid, id);
        assert!(selection.is_empty());
        assert!(!selection.enlarge_visible());
        assert!(!grid.thumbnail(id).unwrap().selected);
    }

    #[test]
    fn labels_include_age_when_present() {
        let grid = grid();
        assert_eq!(photo_label(&grid, ThumbId::new(0, 1, 0)), "Bob — 1 week");
        assert_eq!(photo_label(&grid, ThumbId::new(1, 0, 0)), "Alice");
    }

    #[test]
    fn unknown_thumbnail_is_ignored() {
        let mut grid = grid();
        let mut selection = Selection::new();
        selection.toggle(&mut grid, ThumbId::new(5, 0, 0));
        assert!(selection.is_empty());
    }
}
