//! Fixed-stride layout math for the two lists.
//!
//! Both lists hold equally sized items, so positions are closed-form and every query is O(1).

use crate::{Thumbnail, ThumbRange, ViewportGeometry};

/// Settle offsets within this fraction of a page of a boundary count as on the boundary.
///
/// Fractional page widths make `(i * W) / W` land a hair below `i`.
pub(crate) const PAGE_SNAP_EPSILON: f64 = 1e-6;

/// Layout of the primary list: one full-width page per image.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pager {
    page_width: f64,
    count: usize,
}

impl Pager {
    pub fn new(page_width: f64, count: usize) -> Self {
        let page_width = if page_width.is_finite() && page_width > 0.0 {
            page_width
        } else {
            0.0
        };
        Self { page_width, count }
    }

    pub fn page_width(&self) -> f64 {
        self.page_width
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Offset of page `index` (`index * W`). Does not clamp `index`.
    pub fn page_offset(&self, index: usize) -> f64 {
        index as f64 * self.page_width
    }

    /// The page under a settled scroll offset: `floor(offset / W)` clamped into `[0, count)`.
    ///
    /// Returns `None` when there are no pages. NaN, negative, and overflowing offsets clamp to
    /// the nearest valid page; a zero page width maps everything to page 0.
    pub fn page_at_offset(&self, offset: f64) -> Option<usize> {
        if self.count == 0 {
            return None;
        }
        if self.page_width <= 0.0 || offset.is_nan() {
            return Some(0);
        }
        let page = floor_to_i64(offset / self.page_width + PAGE_SNAP_EPSILON);
        Some(clamp_index(page, self.count))
    }

    /// Whether `offset` rests on page `index`, within the same tolerance as
    /// [`Self::page_at_offset`].
    pub fn is_on_page(&self, offset: f64, index: usize) -> bool {
        (offset - self.page_offset(index)).abs() <= PAGE_SNAP_EPSILON * self.page_width
    }

    pub fn total_width(&self) -> f64 {
        self.count as f64 * self.page_width
    }

    pub fn max_scroll_offset(&self) -> f64 {
        (self.total_width() - self.page_width).max(0.0)
    }
}

/// Layout of the thumbnail strip.
///
/// Content is `padding | T S | T S | ... | T S | padding`: every thumbnail is followed by its
/// spacing, and the content is padded on both ends.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThumbStrip {
    geometry: ViewportGeometry,
    count: usize,
}

impl ThumbStrip {
    pub fn new(geometry: ViewportGeometry, count: usize) -> Self {
        Self {
            geometry: geometry.sanitized(),
            count,
        }
    }

    pub fn geometry(&self) -> ViewportGeometry {
        self.geometry
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn stride(&self) -> f64 {
        self.geometry.thumb_stride()
    }

    pub fn item_start(&self, index: usize) -> Option<f64> {
        (index < self.count).then(|| self.geometry.strip_padding + index as f64 * self.stride())
    }

    pub fn item_end(&self, index: usize) -> Option<f64> {
        self.item_start(index)
            .map(|start| start + self.geometry.thumb_size)
    }

    pub fn item_center(&self, index: usize) -> Option<f64> {
        self.item_start(index)
            .map(|start| start + self.geometry.thumb_size / 2.0)
    }

    pub fn content_width(&self) -> f64 {
        2.0 * self.geometry.strip_padding + self.count as f64 * self.stride()
    }

    pub fn max_scroll_offset(&self) -> f64 {
        (self.content_width() - self.geometry.strip_width).max(0.0)
    }

    /// Clamps `offset` into `[0, max_scroll_offset]`. NaN maps to 0.
    pub fn clamp_scroll_offset(&self, offset: f64) -> f64 {
        if offset.is_nan() {
            return 0.0;
        }
        offset.clamp(0.0, self.max_scroll_offset())
    }

    /// Scroll offset that centers thumbnail `index` under the middle of the strip.
    ///
    /// While the centered position would still sit near the start of the strip
    /// (`index * stride - T/2 <= width/2`), the strip stays pinned at `0`. The result is not
    /// clamped to the content end; see [`Self::clamp_scroll_offset`].
    pub fn centered_offset(&self, index: usize) -> f64 {
        let g = &self.geometry;
        let half_thumb = g.thumb_size / 2.0;
        let half_view = g.strip_width / 2.0;
        let left = index as f64 * self.stride();
        if left - half_thumb <= half_view {
            0.0
        } else {
            left - half_view + half_thumb
        }
    }

    /// Thumbnails intersecting `[scroll_offset, scroll_offset + strip_width)`.
    pub fn visible_range(&self, scroll_offset: f64) -> ThumbRange {
        let empty = ThumbRange::default();
        let g = &self.geometry;
        if self.count == 0 || g.strip_width <= 0.0 {
            return empty;
        }
        let stride = self.stride();
        if stride <= 0.0 {
            return ThumbRange {
                start_index: 0,
                end_index: self.count,
            };
        }
        let offset = self.clamp_scroll_offset(scroll_offset);
        let view_end = offset + g.strip_width;

        // Item i is visible when its end is past `offset` and its start is before `view_end`.
        let start = floor_to_i64((offset - g.strip_padding - g.thumb_size) / stride)
            .saturating_add(1)
            .max(0);
        let end = ceil_to_i64((view_end - g.strip_padding) / stride).max(0);

        let count = self.count as i64;
        ThumbRange {
            start_index: start.min(count) as usize,
            end_index: end.min(count) as usize,
        }
    }

    /// Same as [`Self::visible_range`], extended by `overscan` items on both sides.
    pub fn range_with_overscan(&self, scroll_offset: f64, overscan: usize) -> ThumbRange {
        let mut range = self.visible_range(scroll_offset);
        if range.is_empty() {
            return range;
        }
        range.start_index = range.start_index.saturating_sub(overscan);
        range.end_index = range.end_index.saturating_add(overscan).min(self.count);
        range
    }

    /// Emits the thumbnails to render for `scroll_offset`, flagging `active`.
    pub fn for_each_thumbnail(
        &self,
        scroll_offset: f64,
        overscan: usize,
        active: Option<usize>,
        mut f: impl FnMut(Thumbnail),
    ) {
        let range = self.range_with_overscan(scroll_offset, overscan);
        for index in range.start_index..range.end_index {
            let Some(start) = self.item_start(index) else {
                break;
            };
            f(Thumbnail {
                index,
                start,
                size: self.geometry.thumb_size,
                active: active == Some(index),
            });
        }
    }
}

// `f64::floor`/`ceil` live in `std`; these only need to be exact over the clamped index range.
fn floor_to_i64(x: f64) -> i64 {
    let t = x as i64;
    if (t as f64) > x { t.saturating_sub(1) } else { t }
}

fn ceil_to_i64(x: f64) -> i64 {
    let t = x as i64;
    if (t as f64) < x { t.saturating_add(1) } else { t }
}

fn clamp_index(index: i64, count: usize) -> usize {
    debug_assert!(count > 0);
    if index <= 0 {
        return 0;
    }
    let last = count - 1;
    if index as u64 >= last as u64 {
        last
    } else {
        index as usize
    }
}
