use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::time::Instant;
use tracing::debug;

use crate::config::{Configuration, ImageUrls};
use crate::events::{Key, PageCommand};
use crate::gallery::{self, Highlight, LazyLoader, Selection, photo_label};
use crate::grid::{Grid, snapshot_columns};
use crate::host::{FullscreenHost, Overlay};
use crate::slideshow::Slideshow;

/// Everything on the timeline page: the grid, its gallery behaviors, the
/// fullscreen overlay and the slideshow driving it.
#[derive(Debug)]
pub struct TimelinePage {
    grid: Grid,
    selection: Selection,
    lazy: LazyLoader,
    highlight: Highlight,
    overlay: Overlay,
    slideshow: Slideshow,
    urls: ImageUrls,
    rng: StdRng,
}

impl TimelinePage {
    pub fn new(mut grid: Grid, cfg: &Configuration) -> Self {
        gallery::collapse_rows(&mut grid, cfg.gallery.collapse_threshold);
        let lazy = LazyLoader::observe(&grid);
        let rng = match cfg.shuffle_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            grid,
            selection: Selection::new(),
            lazy,
            highlight: Highlight::new(cfg.gallery.highlight_clear_delay),
            overlay: Overlay::new(),
            slideshow: Slideshow::new(cfg.slideshow, cfg.images.clone()),
            urls: cfg.images.clone(),
            rng,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn lazy(&self) -> &LazyLoader {
        &self.lazy
    }

    pub fn highlight(&self) -> &Highlight {
        &self.highlight
    }

    pub fn overlay(&self) -> &Overlay {
        &self.overlay
    }

    pub fn slideshow(&self) -> &Slideshow {
        &self.slideshow
    }

    /// Earliest pending timer of the page.
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.slideshow.next_deadline(), self.highlight.deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    pub fn fire_due(&mut self, now: Instant) {
        self.slideshow.fire_due(now, &mut self.overlay);
        self.highlight.fire_due(now);
    }

    pub fn start_slideshow(&mut self, now: Instant) -> bool {
        let columns = snapshot_columns(&self.grid, &mut self.rng);
        self.slideshow.start(columns, now, &mut self.overlay)
    }

    pub fn stop_slideshow(&mut self) {
        self.slideshow.stop(&mut self.overlay);
    }

    /// Route a key press. Returns `true` when the key's default action should
    /// be suppressed.
    pub fn handle_key(&mut self, key: Key, now: Instant) -> bool {
        if self.slideshow.is_active() {
            if key == Key::Escape {
                self.stop_slideshow();
                return false;
            }
            return self.slideshow.handle_key(key, now, &mut self.overlay);
        }
        if key == Key::Escape && self.overlay.is_open() {
            self.overlay.close();
        }
        false
    }

    pub fn handle(&mut self, command: PageCommand, now: Instant) {
        debug!(?command, "page command");
        match command {
            PageCommand::Key(key) => {
                self.handle_key(key, now);
            }
            PageCommand::StartSlideshow => {
                self.start_slideshow(now);
            }
            PageCommand::StopSlideshow => self.stop_slideshow(),
            PageCommand::ToggleSelect(id) => self.selection.toggle(&mut self.grid, id),
            PageCommand::OpenSelected => {
                if self.slideshow.is_active() || self.selection.is_empty() {
                    return;
                }
                gallery::viewer::open_selected(&mut self.overlay, &self.selection, &self.urls);
            }
            PageCommand::BackdropClick => {
                if self.slideshow.is_active() {
                    self.stop_slideshow();
                } else {
                    gallery::viewer::backdrop_click(&mut self.overlay);
                }
            }
            PageCommand::Intersect(ids) => self.lazy.intersect(&mut self.grid, &ids),
            PageCommand::ImageLoaded(id) => LazyLoader::loaded(&mut self.grid, id),
            PageCommand::ExpandRow(row) => gallery::expand_row(&mut self.grid, row),
            PageCommand::Hover(id) => {
                let Some(src) = self
                    .grid
                    .thumbnail(id)
                    .and_then(|t| t.reference())
                    .map(str::to_string)
                else {
                    return;
                };
                let title = photo_label(&self.grid, id);
                self.highlight.show(&src, &title);
            }
            PageCommand::Unhover => self.highlight.hide(now),
        }
    }
}
