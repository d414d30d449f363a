use alloc::string::String;

/// Default thumbnail edge length, in logical pixels.
pub const DEFAULT_THUMB_SIZE: f64 = 80.0;
/// Default space between two thumbnails, in logical pixels.
pub const DEFAULT_THUMB_SPACING: f64 = 10.0;

/// Viewport geometry shared by the primary pager and the thumbnail strip.
///
/// All values are logical pixels. They are treated as constants for a given device/session;
/// call `Synchronizer::set_geometry` on resize or rotation.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportGeometry {
    /// Width of one primary page (`W`), i.e. the full viewport width.
    pub page_width: f64,
    /// Thumbnail width (`T`).
    pub thumb_size: f64,
    /// Space after each thumbnail (`S`).
    pub thumb_spacing: f64,
    /// Leading and trailing content padding of the strip.
    pub strip_padding: f64,
    /// Visible width of the strip.
    pub strip_width: f64,
}

impl ViewportGeometry {
    /// Creates a geometry whose strip spans the full viewport and is padded by `thumb_spacing`
    /// on both ends.
    ///
    /// Negative or non-finite inputs are replaced by `0.0`.
    pub fn new(page_width: f64, thumb_size: f64, thumb_spacing: f64) -> Self {
        let page_width = sanitize(page_width);
        let thumb_spacing = sanitize(thumb_spacing);
        Self {
            page_width,
            thumb_size: sanitize(thumb_size),
            thumb_spacing,
            strip_padding: thumb_spacing,
            strip_width: page_width,
        }
    }

    /// Creates a geometry for a viewport of `page_width` using the default thumbnail metrics.
    pub fn for_page_width(page_width: f64) -> Self {
        Self::new(page_width, DEFAULT_THUMB_SIZE, DEFAULT_THUMB_SPACING)
    }

    pub fn with_strip_padding(mut self, strip_padding: f64) -> Self {
        self.strip_padding = sanitize(strip_padding);
        self
    }

    pub fn with_strip_width(mut self, strip_width: f64) -> Self {
        self.strip_width = sanitize(strip_width);
        self
    }

    /// Distance between the starts of two adjacent thumbnails (`T + S`).
    pub fn thumb_stride(&self) -> f64 {
        self.thumb_size + self.thumb_spacing
    }

    pub(crate) fn sanitized(self) -> Self {
        Self {
            page_width: sanitize(self.page_width),
            thumb_size: sanitize(self.thumb_size),
            thumb_spacing: sanitize(self.thumb_spacing),
            strip_padding: sanitize(self.strip_padding),
            strip_width: sanitize(self.strip_width),
        }
    }
}

impl Default for ViewportGeometry {
    fn default() -> Self {
        Self::for_page_width(0.0)
    }
}

fn sanitize(v: f64) -> f64 {
    if v.is_finite() && v > 0.0 { v } else { 0.0 }
}

/// One entry of the gallery. Identity is positional.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImageRecord {
    /// Portrait-orientation display URL.
    pub url: String,
    /// Smaller rendition for the strip, when the source provides one.
    pub thumbnail_url: Option<String>,
    pub photographer: Option<String>,
    pub alt: Option<String>,
    /// Pixel size of the original asset.
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl ImageRecord {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn with_thumbnail_url(mut self, thumbnail_url: impl Into<String>) -> Self {
        self.thumbnail_url = Some(thumbnail_url.into());
        self
    }

    pub fn with_photographer(mut self, photographer: impl Into<String>) -> Self {
        self.photographer = Some(photographer.into());
        self
    }

    pub fn with_alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = Some(alt.into());
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    /// URL to show in the thumbnail strip; falls back to the display URL.
    pub fn strip_url(&self) -> &str {
        self.thumbnail_url.as_deref().unwrap_or(&self.url)
    }
}

/// The result of applying a selection: where both lists were sent and the new active index.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SyncUpdate {
    pub index: usize,
    /// Primary target offset (`index * W`).
    pub primary_offset: f64,
    /// Strip target offset after the centering policy (and content clamp, if enabled).
    pub secondary_offset: f64,
}

/// A half-open range of thumbnail indexes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ThumbRange {
    pub start_index: usize,
    pub end_index: usize, // exclusive
}

impl ThumbRange {
    pub fn is_empty(&self) -> bool {
        self.start_index >= self.end_index
    }

    pub fn len(&self) -> usize {
        self.end_index.saturating_sub(self.start_index)
    }

    pub fn contains(&self, index: usize) -> bool {
        index >= self.start_index && index < self.end_index
    }
}

/// A thumbnail to render, positioned in strip content coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Thumbnail {
    pub index: usize,
    /// Start offset along the strip (includes `strip_padding`).
    pub start: f64,
    pub size: f64,
    /// Whether this is the active thumbnail (drawn with the highlight border).
    pub active: bool,
}

impl Thumbnail {
    pub fn end(&self) -> f64 {
        self.start + self.size
    }
}
