use crate::grid::ThumbId;

/// Keys the page reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowRight,
    ArrowLeft,
    Space,
    Escape,
}

/// Input delivered to the page task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageCommand {
    Key(Key),
    StartSlideshow,
    StopSlideshow,
    ToggleSelect(ThumbId),
    OpenSelected,
    /// A click that landed on the overlay backdrop rather than its content.
    BackdropClick,
    /// Thumbnails that scrolled into view.
    Intersect(Vec<ThumbId>),
    ImageLoaded(ThumbId),
    ExpandRow(usize),
    Hover(ThumbId),
    Unhover,
}
