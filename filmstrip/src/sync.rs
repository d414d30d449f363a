use crate::layout::{Pager, ThumbStrip};
use crate::{SyncOptions, SyncSnapshot, SyncUpdate, ViewportGeometry};

/// The capability the synchronizer needs from the UI layer: "scroll this list to that offset".
///
/// Implementations own the real list controls (or, in tests, just record the requests). A
/// request for the offset a list already sits at must not cause a visible jump.
pub trait ListScroller {
    /// Scrolls the paged viewer to `offset`.
    fn scroll_primary_to(&mut self, offset: f64, animated: bool);
    /// Scrolls the thumbnail strip to `offset`.
    fn scroll_secondary_to(&mut self, offset: f64, animated: bool);
}

impl<T: ListScroller + ?Sized> ListScroller for &mut T {
    fn scroll_primary_to(&mut self, offset: f64, animated: bool) {
        (**self).scroll_primary_to(offset, animated);
    }

    fn scroll_secondary_to(&mut self, offset: f64, animated: bool) {
        (**self).scroll_secondary_to(offset, animated);
    }
}

/// Drops every request. Useful when only the returned [`SyncUpdate`]s matter.
impl ListScroller for () {
    fn scroll_primary_to(&mut self, _offset: f64, _animated: bool) {}

    fn scroll_secondary_to(&mut self, _offset: f64, _animated: bool) {}
}

/// Keeps a paged viewer and a thumbnail strip pointed at the same image.
///
/// This type is UI-agnostic:
/// - It owns the active index and nothing else mutable.
/// - It talks to the lists only through [`ListScroller`].
/// - Both entry points (`select_index` for taps, `on_primary_settled` for swipes) converge on
///   one update routine, so the two lists can never disagree about the active image.
///
/// Out-of-range requests are clamped, never reported as errors.
#[derive(Clone, Debug)]
pub struct Synchronizer<L> {
    options: SyncOptions,
    count: usize,
    cursor: usize,
    lists: L,
}

impl<L: ListScroller> Synchronizer<L> {
    /// Creates a synchronizer for an empty gallery. The cursor starts at 0 and nothing is
    /// scrolled until the first selection.
    pub fn new(options: SyncOptions, lists: L) -> Self {
        fdebug!(
            page_width = options.geometry.page_width,
            thumb_size = options.geometry.thumb_size,
            thumb_spacing = options.geometry.thumb_spacing,
            "Synchronizer::new"
        );
        Self {
            options,
            count: 0,
            cursor: 0,
            lists,
        }
    }

    pub fn options(&self) -> &SyncOptions {
        &self.options
    }

    /// Replaces the options. If the geometry changed, both lists are realigned (no animation).
    pub fn set_options(&mut self, options: SyncOptions) {
        let geometry_changed = self.options.geometry != options.geometry;
        self.options = options;
        if geometry_changed {
            self.realign();
        }
    }

    pub fn geometry(&self) -> ViewportGeometry {
        self.options.geometry
    }

    /// Updates the geometry (resize, rotation) and realigns both lists with the active index.
    pub fn set_geometry(&mut self, geometry: ViewportGeometry) {
        if self.options.geometry == geometry {
            return;
        }
        self.options.geometry = geometry;
        self.realign();
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Updates the number of items. Neither list is moved.
    pub fn set_count(&mut self, count: usize) {
        if self.count == count {
            return;
        }
        ftrace!(prev = self.count, count, "Synchronizer::set_count");
        self.count = count;
        if count > 0 && self.cursor >= count {
            self.cursor = count - 1;
        }
    }

    /// The active index, or `None` while there are no items.
    pub fn active_index(&self) -> Option<usize> {
        (self.count > 0).then(|| self.cursor.min(self.count - 1))
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active_index() == Some(index)
    }

    pub fn pager(&self) -> Pager {
        Pager::new(self.options.geometry.page_width, self.count)
    }

    pub fn strip(&self) -> ThumbStrip {
        ThumbStrip::new(self.options.geometry, self.count)
    }

    /// Primary target for `index`: `index * W`.
    pub fn primary_offset_for(&self, index: usize) -> f64 {
        self.pager().page_offset(index)
    }

    /// Strip target for `index` under the centering policy.
    pub fn secondary_offset_for(&self, index: usize) -> f64 {
        let strip = self.strip();
        let offset = strip.centered_offset(index);
        if self.options.clamp_to_content {
            strip.clamp_scroll_offset(offset)
        } else {
            offset
        }
    }

    /// Makes `index` the active image: scrolls the viewer to its page, scrolls the strip per
    /// the centering policy, and records the new index.
    ///
    /// `index` is clamped into `[0, count)`. Returns `None` (and does nothing) when empty.
    pub fn select_index(&mut self, index: usize) -> Option<SyncUpdate> {
        let index = self.clamp_request(index)?;
        Some(self.apply(index, true, self.options.animated))
    }

    pub fn select_next(&mut self) -> Option<SyncUpdate> {
        let next = self.active_index()?.saturating_add(1);
        self.select_index(next)
    }

    pub fn select_previous(&mut self) -> Option<SyncUpdate> {
        let prev = self.active_index()?.saturating_sub(1);
        self.select_index(prev)
    }

    /// Call this when the viewer's paging scroll comes to rest at `scroll_offset`.
    ///
    /// The page is `floor(scroll_offset / W)`, clamped into range. The strip follows as in
    /// [`Self::select_index`]; the viewer itself is only re-snapped when it did not come to rest
    /// on that page (sub-pixel rounding of the settle offset is tolerated).
    pub fn on_primary_settled(&mut self, scroll_offset: f64) -> Option<SyncUpdate> {
        let pager = self.pager();
        let index = pager.page_at_offset(scroll_offset)?;
        let on_page = pager.is_on_page(scroll_offset, index);
        ftrace!(scroll_offset, index, on_page, "on_primary_settled");
        Some(self.apply(index, !on_page, self.options.animated))
    }

    /// Re-issues the active index's offsets to both lists without animation.
    pub fn realign(&mut self) -> Option<SyncUpdate> {
        let index = self.active_index()?;
        Some(self.apply(index, true, false))
    }

    pub fn snapshot(&self) -> SyncSnapshot {
        SyncSnapshot {
            active_index: self.active_index().unwrap_or(self.cursor),
        }
    }

    /// Restores a snapshot. With items present the lists are realigned (no animation).
    pub fn restore(&mut self, snapshot: SyncSnapshot) {
        self.cursor = snapshot.active_index;
        if self.count > 0 {
            self.cursor = self.cursor.min(self.count - 1);
            self.realign();
        }
    }

    pub fn lists(&self) -> &L {
        &self.lists
    }

    pub fn lists_mut(&mut self) -> &mut L {
        &mut self.lists
    }

    pub fn into_lists(self) -> L {
        self.lists
    }

    fn clamp_request(&self, index: usize) -> Option<usize> {
        if self.count == 0 {
            ftrace!(index, "selection ignored: no items");
            return None;
        }
        if index >= self.count {
            fwarn!(
                index,
                count = self.count,
                "selection out of range; clamping"
            );
            return Some(self.count - 1);
        }
        Some(index)
    }

    fn apply(&mut self, index: usize, scroll_primary: bool, animated: bool) -> SyncUpdate {
        let update = SyncUpdate {
            index,
            primary_offset: self.primary_offset_for(index),
            secondary_offset: self.secondary_offset_for(index),
        };
        if scroll_primary {
            self.lists.scroll_primary_to(update.primary_offset, animated);
        }
        self.lists
            .scroll_secondary_to(update.secondary_offset, animated);
        self.cursor = index;
        fdebug!(
            index,
            primary_offset = update.primary_offset,
            secondary_offset = update.secondary_offset,
            animated,
            "selection applied"
        );
        if let Some(cb) = &self.options.on_select {
            cb(&update);
        }
        update
    }
}
