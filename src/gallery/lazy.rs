use std::collections::BTreeSet;

use tracing::trace;

use crate::grid::{Grid, ThumbId};

/// Tracks lazy thumbnails that have not scrolled into view yet.
#[derive(Debug, Clone, Default)]
pub struct LazyLoader {
    observed: BTreeSet<ThumbId>,
}

impl LazyLoader {
    /// Observe every lazy thumbnail of `grid`.
    pub fn observe(grid: &Grid) -> Self {
        let observed = grid
            .thumb_ids()
            .filter(|id| grid.thumbnail(*id).is_some_and(|t| t.lazy))
            .collect();
        Self { observed }
    }

    pub fn is_observed(&self, id: ThumbId) -> bool {
        self.observed.contains(&id)
    }

    pub fn pending(&self) -> usize {
        self.observed.len()
    }

    /// Start loading the observed thumbnails among `visible`; each one is
    /// loaded once and then no longer observed.
    pub fn intersect(&mut self, grid: &mut Grid, visible: &[ThumbId]) {
        for id in visible {
            if !self.observed.remove(id) {
                continue;
            }
            let Some(thumb) = grid.thumbnail_mut(*id) else {
                continue;
            };
            thumb.loading = true;
            thumb.src = thumb.data_src.clone();
            thumb.lazy = false;
            trace!(row = id.row, column = id.column, index = id.index, "lazy load");
        }
    }

    /// The image finished loading.
    pub fn loaded(grid: &mut Grid, id: ThumbId) {
        if let Some(thumb) = grid.thumbnail_mut(id) {
            thumb.loading = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{Cell, Row, Thumbnail};

    fn grid() -> Grid {
        Grid {
            headers: vec!["A".into()],
            rows: vec![Row {
                age_label: None,
                cells: vec![Cell {
                    thumbnails: vec![
                        Thumbnail::lazy("/thumbnail/1", "A"),
                        Thumbnail {
                            src: Some("/thumbnail/2".into()),
                            ..Thumbnail::default()
                        },
                    ],
                }],
                collapsed: false,
            }],
        }
    }

    #[test]
    fn visible_thumbnails_load_once() {
        let mut grid = grid();
        let mut lazy = LazyLoader::observe(&grid);
        let id = ThumbId::new(0, 0, 0);
        assert_eq!(lazy.pending(), 1);
        assert!(!lazy.is_observed(ThumbId::new(0, 0, 1)));

        lazy.intersect(&mut grid, &[id]);
        let thumb = grid.thumbnail(id).unwrap();
        assert_eq!(thumb.src.as_deref(), Some("/thumbnail/1"));
        assert!(thumb.loading);
        assert!(!thumb.lazy);
        assert!(!lazy.is_observed(id));

        LazyLoader::loaded(&mut grid, id);
        assert!(!grid.thumbnail(id).unwrap().loading);

        lazy.intersect(&mut grid, &[id]);
        assert!(!grid.thumbnail(id).unwrap().loading);
    }
}
