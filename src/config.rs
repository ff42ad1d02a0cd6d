use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, ensure};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Configuration {
    /// YAML manifest describing people and their photos.
    pub timeline_path: PathBuf,
    /// Optional deterministic seed for the per-session photo shuffle.
    pub shuffle_seed: Option<u64>,
    /// Timing of the slideshow reveal choreography.
    pub slideshow: SlideshowTimings,
    /// Thumbnail/original URL convention.
    pub images: ImageUrls,
    /// Grid presentation options.
    pub gallery: GalleryOptions,
}

impl Configuration {
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Ok(serde_yaml::from_str(&s)?)
    }

    /// Validate runtime invariants that cannot be expressed via serde defaults alone.
    pub fn validated(self) -> Result<Self> {
        self.slideshow
            .validate()
            .context("invalid slideshow timings")?;
        self.images.validate()?;
        ensure!(
            self.gallery.collapse_threshold >= 1,
            "gallery.collapse-threshold must be at least 1"
        );
        ensure!(
            !self.gallery.highlight_clear_delay.is_zero(),
            "gallery.highlight-clear-delay must be positive"
        );
        Ok(self)
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            timeline_path: PathBuf::from("timeline.yaml"),
            shuffle_seed: None,
            slideshow: SlideshowTimings::default(),
            images: ImageUrls::default(),
            gallery: GalleryOptions::default(),
        }
    }
}

/// Delays of one reveal cycle. Label and advance delays count from the moment
/// the photo becomes visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct SlideshowTimings {
    /// Fade-out time before a replaced photo is swapped in.
    #[serde(with = "humantime_serde")]
    pub swap_delay: Duration,
    #[serde(with = "humantime_serde")]
    pub name_reveal: Duration,
    #[serde(with = "humantime_serde")]
    pub age_reveal: Duration,
    /// Time until the slideshow steps to the next column.
    #[serde(with = "humantime_serde")]
    pub advance: Duration,
}

impl SlideshowTimings {
    const fn default_swap_delay() -> Duration {
        Duration::from_millis(800)
    }

    const fn default_name_reveal() -> Duration {
        Duration::from_millis(5_000)
    }

    const fn default_age_reveal() -> Duration {
        Duration::from_millis(8_000)
    }

    const fn default_advance() -> Duration {
        Duration::from_millis(9_000)
    }

    fn validate(&self) -> Result<()> {
        ensure!(
            !self.swap_delay.is_zero(),
            "slideshow.swap-delay must be positive"
        );
        ensure!(!self.advance.is_zero(), "slideshow.advance must be positive");
        ensure!(
            self.name_reveal <= self.age_reveal,
            "slideshow.name-reveal must not come after slideshow.age-reveal"
        );
        ensure!(
            self.age_reveal <= self.advance,
            "slideshow.age-reveal must not come after slideshow.advance"
        );
        Ok(())
    }
}

impl Default for SlideshowTimings {
    fn default() -> Self {
        Self {
            swap_delay: Self::default_swap_delay(),
            name_reveal: Self::default_name_reveal(),
            age_reveal: Self::default_age_reveal(),
            advance: Self::default_advance(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ImageUrls {
    /// Path segment identifying thumbnail URLs, e.g. `/thumbnail/`.
    pub thumbnail_segment: String,
    /// Replacement segment for full-resolution URLs, e.g. `/original/`.
    pub original_segment: String,
}

impl ImageUrls {
    /// Thumbnail URL for a photo id.
    pub fn thumbnail(&self, id: &str) -> String {
        format!("{}{}", self.thumbnail_segment, id)
    }

    /// Promote a thumbnail reference to its full-resolution variant. Only the
    /// first occurrence of the thumbnail segment is replaced; references that
    /// do not contain it are returned unchanged.
    pub fn full_resolution(&self, src: &str) -> String {
        src.replacen(&self.thumbnail_segment, &self.original_segment, 1)
    }

    fn validate(&self) -> Result<()> {
        ensure!(
            !self.thumbnail_segment.is_empty(),
            "images.thumbnail-segment must not be empty"
        );
        ensure!(
            !self.original_segment.is_empty(),
            "images.original-segment must not be empty"
        );
        Ok(())
    }
}

impl Default for ImageUrls {
    fn default() -> Self {
        Self {
            thumbnail_segment: "/thumbnail/".to_string(),
            original_segment: "/original/".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct GalleryOptions {
    /// Rows collapse when any cell holds more thumbnails than this.
    pub collapse_threshold: usize,
    /// How long the hover highlight keeps its image after being hidden.
    #[serde(with = "humantime_serde")]
    pub highlight_clear_delay: Duration,
}

impl Default for GalleryOptions {
    fn default() -> Self {
        Self {
            collapse_threshold: 8,
            highlight_clear_delay: Duration::from_millis(200),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_resolution_replaces_first_segment_only() {
        let urls = ImageUrls::default();
        assert_eq!(urls.full_resolution("/thumbnail/abc"), "/original/abc");
        assert_eq!(
            urls.full_resolution("/thumbnail/thumbnail/abc"),
            "/original/thumbnail/abc"
        );
        assert_eq!(urls.full_resolution("/static/x.jpg"), "/static/x.jpg");
    }

    #[test]
    fn default_timings_validate() {
        assert!(SlideshowTimings::default().validate().is_ok());
    }

    #[test]
    fn age_after_advance_is_rejected() {
        let timings = SlideshowTimings {
            age_reveal: Duration::from_secs(10),
            ..SlideshowTimings::default()
        };
        let err = timings.validate().unwrap_err();
        assert!(err.to_string().contains("age-reveal"));
    }
}
