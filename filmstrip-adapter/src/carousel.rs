use filmstrip::{GallerySession, SyncOptions, SyncUpdate, ViewportGeometry};

use crate::{AnimationOptions, FrameOffsets, Gallery, TweenLists};

/// A framework-neutral controller for the whole dual-carousel screen.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `tap_thumbnail` / `primary_momentum_end` for the two selection triggers
/// - `on_primary_scroll` / `on_secondary_scroll` while the user drags a list
/// - `tick(now_ms)` each frame, applying the returned offsets to the real lists
#[derive(Debug)]
pub struct Carousel {
    gallery: Gallery<TweenLists>,
}

impl Carousel {
    pub fn new(options: SyncOptions, animation: AnimationOptions) -> Self {
        Self {
            gallery: Gallery::new(options, TweenLists::new(animation)),
        }
    }

    pub fn gallery(&self) -> &Gallery<TweenLists> {
        &self.gallery
    }

    pub fn gallery_mut(&mut self) -> &mut Gallery<TweenLists> {
        &mut self.gallery
    }

    pub fn session(&self) -> &GallerySession<TweenLists> {
        self.gallery.session()
    }

    pub fn active_index(&self) -> Option<usize> {
        self.session().active_index()
    }

    /// The user tapped thumbnail `index`.
    pub fn tap_thumbnail(&mut self, index: usize, now_ms: u64) -> Option<SyncUpdate> {
        let session = self.gallery.session_mut();
        session.sync_mut().lists_mut().set_clock(now_ms);
        session.select_index(index)
    }

    /// The viewer's paging scroll came to rest at `offset`.
    ///
    /// A non-finite `offset` is treated as resting on the page it clamps to.
    pub fn primary_momentum_end(&mut self, offset: f64, now_ms: u64) -> Option<SyncUpdate> {
        let session = self.gallery.session_mut();
        let offset = if offset.is_finite() {
            offset
        } else {
            let pager = session.sync().pager();
            pager
                .page_at_offset(offset)
                .map_or(0.0, |index| pager.page_offset(index))
        };
        let lists = session.sync_mut().lists_mut();
        lists.set_clock(now_ms);
        lists.primary.on_scroll(offset);
        session.on_primary_settled(offset)
    }

    /// The user is dragging the viewer. Cancels its animation.
    pub fn on_primary_scroll(&mut self, offset: f64, now_ms: u64) {
        let lists = self.lists_mut(now_ms);
        lists.primary.on_scroll(offset);
    }

    /// The user is dragging the strip. Cancels its animation; the selection is unchanged.
    pub fn on_secondary_scroll(&mut self, offset: f64, now_ms: u64) {
        let lists = self.lists_mut(now_ms);
        lists.secondary.on_scroll(offset);
    }

    /// The viewport changed size. Both lists jump to the active image's new offsets.
    pub fn resize(&mut self, geometry: ViewportGeometry, now_ms: u64) {
        self.lists_mut(now_ms);
        self.gallery
            .session_mut()
            .sync_mut()
            .set_geometry(geometry);
    }

    /// Advances both lists' animations.
    pub fn tick(&mut self, now_ms: u64) -> FrameOffsets {
        self.gallery
            .session_mut()
            .sync_mut()
            .lists_mut()
            .tick(now_ms)
    }

    pub fn is_animating(&self) -> bool {
        self.session().sync().lists().is_animating()
    }

    /// Tears the screen down; see [`Gallery::close`].
    pub fn close(&mut self) {
        self.gallery.close();
    }

    fn lists_mut(&mut self, now_ms: u64) -> &mut TweenLists {
        let lists = self.gallery.session_mut().sync_mut().lists_mut();
        lists.set_clock(now_ms);
        lists
    }
}
