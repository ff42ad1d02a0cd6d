use std::time::Duration;

use tokio::time::Instant;

/// Enlarged hover preview of a single thumbnail. Hiding keeps the image until
/// the clear delay has passed.
#[derive(Debug, Clone)]
pub struct Highlight {
    image: Option<String>,
    title: String,
    visible: bool,
    clear_at: Option<Instant>,
    clear_delay: Duration,
}

impl Highlight {
    pub fn new(clear_delay: Duration) -> Self {
        Self {
            image: None,
            title: String::new(),
            visible: false,
            clear_at: None,
            clear_delay,
        }
    }

    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.clear_at
    }

    pub fn show(&mut self, path: &str, title: &str) {
        self.clear_at = None;
        self.image = Some(path.to_string());
        self.title = title.to_string();
        self.visible = true;
    }

    pub fn hide(&mut self, now: Instant) {
        self.visible = false;
        self.clear_at = Some(now + self.clear_delay);
    }

    pub fn fire_due(&mut self, now: Instant) {
        if self.clear_at.is_some_and(|at| at <= now) {
            self.clear_at = None;
            self.image = None;
        }
    }
}
