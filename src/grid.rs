//! In-memory model of the rendered photo grid.
//!
//! The grid is the page's presentation data: column headers, one row per age
//! group and, per row, one cell per column holding zero or more thumbnails.
//! The slideshow never reads it after [`snapshot_columns`] has copied what it
//! needs.

use rand::Rng;
use rand::seq::SliceRandom;

/// Address of a thumbnail inside the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ThumbId {
    pub row: usize,
    pub column: usize,
    pub index: usize,
}

impl ThumbId {
    pub const fn new(row: usize, column: usize, index: usize) -> Self {
        Self { row, column, index }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Thumbnail {
    /// Deferred image reference, promoted to `src` once the image is visible.
    pub data_src: Option<String>,
    pub src: Option<String>,
    pub alt: String,
    pub lazy: bool,
    pub loading: bool,
    pub selected: bool,
    /// Label of the expand overlay drawn on this thumbnail in collapsed rows.
    pub expand_overlay: Option<String>,
}

impl Thumbnail {
    /// A lazily loaded thumbnail whose image is only known by reference.
    pub fn lazy(data_src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            data_src: Some(data_src.into()),
            alt: alt.into(),
            lazy: true,
            ..Self::default()
        }
    }

    /// The image reference, preferring the deferred one. Empty strings count
    /// as missing.
    pub fn reference(&self) -> Option<&str> {
        self.data_src
            .as_deref()
            .filter(|s| !s.is_empty())
            .or_else(|| self.src.as_deref().filter(|s| !s.is_empty()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cell {
    pub thumbnails: Vec<Thumbnail>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    pub age_label: Option<String>,
    pub cells: Vec<Cell>,
    pub collapsed: bool,
}

impl Row {
    /// Trimmed age label, empty when the row has none.
    pub fn age(&self) -> &str {
        self.age_label.as_deref().map(str::trim).unwrap_or("")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    pub headers: Vec<String>,
    pub rows: Vec<Row>,
}

impl Grid {
    pub fn thumbnail(&self, id: ThumbId) -> Option<&Thumbnail> {
        self.rows
            .get(id.row)?
            .cells
            .get(id.column)?
            .thumbnails
            .get(id.index)
    }

    pub fn thumbnail_mut(&mut self, id: ThumbId) -> Option<&mut Thumbnail> {
        self.rows
            .get_mut(id.row)?
            .cells
            .get_mut(id.column)?
            .thumbnails
            .get_mut(id.index)
    }

    /// Every thumbnail address in document order.
    pub fn thumb_ids(&self) -> impl Iterator<Item = ThumbId> + '_ {
        self.rows.iter().enumerate().flat_map(|(r, row)| {
            row.cells.iter().enumerate().flat_map(move |(c, cell)| {
                (0..cell.thumbnails.len()).map(move |i| ThumbId::new(r, c, i))
            })
        })
    }
}

/// One photo of a slideshow column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Photo {
    pub src: String,
    pub age: String,
}

/// A named slideshow track with its photos in session order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    pub photos: Vec<Photo>,
}

impl Column {
    /// Photo shown for `round`, cycling through the list.
    pub fn photo_for_round(&self, round: usize) -> &Photo {
        &self.photos[round % self.photos.len()]
    }
}

/// Copy the grid into slideshow columns.
///
/// Each row contributes the first thumbnail of its cell under each header.
/// Rows too short for a header are skipped, and columns that end up without
/// photos are dropped. Photo order within a column is a uniform shuffle.
pub fn snapshot_columns<R: Rng + ?Sized>(grid: &Grid, rng: &mut R) -> Vec<Column> {
    let mut columns = Vec::new();
    for (i, header) in grid.headers.iter().enumerate() {
        let mut photos: Vec<Photo> = grid
            .rows
            .iter()
            .filter_map(|row| {
                let thumb = row.cells.get(i)?.thumbnails.first()?;
                let src = thumb.reference()?;
                Some(Photo {
                    src: src.to_string(),
                    age: row.age().to_string(),
                })
            })
            .collect();
        if photos.is_empty() {
            continue;
        }
        photos.shuffle(rng);
        columns.push(Column {
            name: header.trim().to_string(),
            photos,
        });
    }
    columns
}
