use alloc::sync::Arc;

use crate::{SyncUpdate, ViewportGeometry};

/// A callback fired after a selection has been applied to both lists.
pub type OnSelectCallback = Arc<dyn Fn(&SyncUpdate) + Send + Sync>;

/// Configuration for [`crate::Synchronizer`].
///
/// Cheap to clone: the callback is stored in an `Arc`.
pub struct SyncOptions {
    pub geometry: ViewportGeometry,

    /// Clamp the strip target into the strip's content bounds.
    ///
    /// When disabled, the centering policy's raw offset is passed to the strip and clamping at
    /// the content end is left to the list control.
    pub clamp_to_content: bool,

    /// Whether selections ask the lists to animate. Geometry changes and restores never animate.
    pub animated: bool,

    /// Number of extra thumbnails to emit on each side of the visible strip range.
    pub overscan: usize,

    /// Optional callback fired after every applied selection.
    pub on_select: Option<OnSelectCallback>,
}

impl Clone for SyncOptions {
    fn clone(&self) -> Self {
        Self {
            geometry: self.geometry,
            clamp_to_content: self.clamp_to_content,
            animated: self.animated,
            overscan: self.overscan,
            on_select: self.on_select.clone(),
        }
    }
}

impl SyncOptions {
    pub fn new(geometry: ViewportGeometry) -> Self {
        Self {
            geometry,
            clamp_to_content: true,
            animated: true,
            overscan: 1,
            on_select: None,
        }
    }

    pub fn with_geometry(mut self, geometry: ViewportGeometry) -> Self {
        self.geometry = geometry;
        self
    }

    pub fn with_clamp_to_content(mut self, clamp_to_content: bool) -> Self {
        self.clamp_to_content = clamp_to_content;
        self
    }

    pub fn with_animated(mut self, animated: bool) -> Self {
        self.animated = animated;
        self
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    pub fn with_on_select(
        mut self,
        on_select: Option<impl Fn(&SyncUpdate) + Send + Sync + 'static>,
    ) -> Self {
        self.on_select = on_select.map(|f| Arc::new(f) as _);
        self
    }
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self::new(ViewportGeometry::default())
    }
}

impl core::fmt::Debug for SyncOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SyncOptions")
            .field("geometry", &self.geometry)
            .field("clamp_to_content", &self.clamp_to_content)
            .field("animated", &self.animated)
            .field("overscan", &self.overscan)
            .finish_non_exhaustive()
    }
}
