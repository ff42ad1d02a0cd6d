//! Fullscreen presentation surface.
//!
//! The engine only toggles presentation state on a host; fades and other
//! animation are the host's business. [`Overlay`] is the in-memory host used
//! by the page and logs every change.

use tracing::{debug, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    Name,
    Age,
}

/// One per-column display slot: an image plus name and age labels.
pub trait DisplaySlot {
    fn show_image(&mut self, src: &str);
    /// Set the age caption text.
    fn set_caption(&mut self, text: &str);
    fn set_hidden(&mut self, hidden: bool);
    fn set_label_visible(&mut self, label: Label, visible: bool);
}

pub trait FullscreenHost {
    type Slot: DisplaySlot;

    fn open(&mut self);
    /// Close the host and drop its paused marker.
    fn close(&mut self);
    fn set_paused(&mut self, paused: bool);
    /// Replace the host content with one hidden slot per name.
    fn populate_slots(&mut self, names: &[&str]);
    fn slot(&mut self, index: usize) -> Option<&mut Self::Slot>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Caption {
    pub text: String,
    pub visible: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverlayItem {
    pub image: Option<String>,
    pub alt: String,
    pub hidden: bool,
    pub name: Caption,
    /// Only slideshow slots carry an age caption.
    pub age: Option<Caption>,
}

impl OverlayItem {
    /// Static item of the selection viewer: image with an always visible caption.
    pub fn still(image: String, label: &str) -> Self {
        Self {
            image: Some(image),
            alt: label.to_string(),
            hidden: false,
            name: Caption {
                text: label.to_string(),
                visible: true,
            },
            age: None,
        }
    }

    fn slot(name: &str) -> Self {
        Self {
            image: None,
            alt: name.to_string(),
            hidden: true,
            name: Caption {
                text: name.to_string(),
                visible: false,
            },
            age: Some(Caption::default()),
        }
    }

    pub fn label_visible(&self, label: Label) -> bool {
        match label {
            Label::Name => self.name.visible,
            Label::Age => self.age.as_ref().is_some_and(|c| c.visible),
        }
    }
}

impl DisplaySlot for OverlayItem {
    fn show_image(&mut self, src: &str) {
        trace!(slot = %self.alt, src, "image");
        self.image = Some(src.to_string());
    }

    fn set_caption(&mut self, text: &str) {
        self.age.get_or_insert_with(Caption::default).text = text.to_string();
    }

    fn set_hidden(&mut self, hidden: bool) {
        if self.hidden != hidden {
            trace!(slot = %self.alt, hidden, "visibility");
        }
        self.hidden = hidden;
    }

    fn set_label_visible(&mut self, label: Label, visible: bool) {
        match label {
            Label::Name => self.name.visible = visible,
            Label::Age => self.age.get_or_insert_with(Caption::default).visible = visible,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overlay {
    open: bool,
    paused: bool,
    items: Vec<OverlayItem>,
}

impl Overlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn items(&self) -> &[OverlayItem] {
        &self.items
    }

    /// Replace the content with static items.
    pub fn set_items(&mut self, items: Vec<OverlayItem>) {
        self.items = items;
    }
}

impl FullscreenHost for Overlay {
    type Slot = OverlayItem;

    fn open(&mut self) {
        debug!(items = self.items.len(), "overlay open");
        self.open = true;
    }

    fn close(&mut self) {
        debug!("overlay closed");
        self.open = false;
        self.paused = false;
    }

    fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    fn populate_slots(&mut self, names: &[&str]) {
        self.items = names.iter().map(|name| OverlayItem::slot(name)).collect();
    }

    fn slot(&mut self, index: usize) -> Option<&mut OverlayItem> {
        self.items.get_mut(index)
    }
}
