pub mod config;
pub mod error;
pub mod events;
pub mod gallery;
pub mod grid;
pub mod host;
pub mod page;
pub mod slideshow;
pub mod timeline;
pub mod tasks {
    pub mod keyboard;
    pub mod page;
}

pub use error::Error;
