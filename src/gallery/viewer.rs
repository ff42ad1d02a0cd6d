use crate::config::ImageUrls;
use crate::host::{FullscreenHost, Overlay, OverlayItem};

use super::selection::Selection;

/// Show the selected photos full-size, one item per selection.
pub fn open_selected(overlay: &mut Overlay, selection: &Selection, urls: &ImageUrls) {
    let items = selection
        .iter()
        .map(|s| OverlayItem::still(urls.full_resolution(&s.src), &s.label))
        .collect();
    overlay.set_items(items);
    overlay.open();
}

/// Close the viewer when the click landed on the backdrop itself.
pub fn backdrop_click(overlay: &mut Overlay) {
    if overlay.is_open() {
        overlay.close();
    }
}
