use crate::*;

use alloc::string::ToString;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicUsize, Ordering};

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_u64(&mut self, start: u64, end_exclusive: u64) -> u64 {
        debug_assert!(start < end_exclusive);
        let span = end_exclusive - start;
        start + (self.next_u64() % span)
    }

    fn gen_offset(&mut self, page_width: f64) -> f64 {
        match self.gen_range_u64(0, 6) {
            0 => -(self.gen_range_u64(1, 10_000) as f64),
            1 => f64::NAN,
            2 => f64::INFINITY,
            3 => 1e300,
            _ => self.gen_range_u64(0, 40) as f64 * page_width * 0.5,
        }
    }
}

#[derive(Clone, Debug, Default)]
struct Recorder {
    primary: Vec<(f64, bool)>,
    secondary: Vec<(f64, bool)>,
}

impl ListScroller for Recorder {
    fn scroll_primary_to(&mut self, offset: f64, animated: bool) {
        self.primary.push((offset, animated));
    }

    fn scroll_secondary_to(&mut self, offset: f64, animated: bool) {
        self.secondary.push((offset, animated));
    }
}

fn phone() -> ViewportGeometry {
    ViewportGeometry::new(390.0, 80.0, 10.0)
}

fn sync_with(count: usize) -> Synchronizer<Recorder> {
    let mut s = Synchronizer::new(SyncOptions::new(phone()), Recorder::default());
    s.set_count(count);
    s
}

fn images(n: usize) -> Vec<ImageRecord> {
    (0..n)
        .map(|i| ImageRecord::new(alloc::format!("https://images.test/{i}/portrait.jpg")))
        .collect()
}

#[test]
fn strip_stays_pinned_for_the_first_screenful() {
    let s = sync_with(20);
    // stride = 90; i*90 - 40 <= 195 holds for i = 0, 1, 2.
    assert_eq!(s.secondary_offset_for(0), 0.0);
    assert_eq!(s.secondary_offset_for(1), 0.0);
    assert_eq!(s.secondary_offset_for(2), 0.0);
}

#[test]
fn strip_centers_the_active_thumbnail_past_the_pin() {
    let s = sync_with(20);
    assert_eq!(s.secondary_offset_for(3), 270.0 - 195.0 + 40.0);
    assert_eq!(s.secondary_offset_for(5), 295.0);
}

#[test]
fn select_index_scrolls_both_lists_and_records_index() {
    let mut s = sync_with(20);
    let update = s.select_index(5).unwrap();

    assert_eq!(update.index, 5);
    assert_eq!(update.primary_offset, 5.0 * 390.0);
    assert_eq!(update.secondary_offset, 295.0);
    assert_eq!(s.active_index(), Some(5));
    assert!(s.is_active(5));
    assert_eq!(s.lists().primary, [(1950.0, true)]);
    assert_eq!(s.lists().secondary, [(295.0, true)]);
}

#[test]
fn select_index_reissues_primary_even_when_unchanged() {
    let mut s = sync_with(3);
    s.select_index(1);
    s.select_index(1);
    assert_eq!(s.lists().primary.len(), 2);
    assert_eq!(s.lists().secondary.len(), 2);
}

#[test]
fn settle_on_a_page_matches_select_index() {
    for i in 0..20 {
        let mut tapped = sync_with(20);
        let mut swiped = sync_with(20);

        let a = tapped.select_index(i).unwrap();
        let b = swiped.on_primary_settled(i as f64 * 390.0).unwrap();

        assert_eq!(a, b, "index {i}");
        assert_eq!(tapped.active_index(), swiped.active_index());
        assert_eq!(tapped.lists().secondary, swiped.lists().secondary);
        // The viewer already sits on the page; it is not asked to move.
        assert!(swiped.lists().primary.is_empty());
    }
}

#[test]
fn settle_between_pages_floors_and_resnaps_viewer() {
    let mut s = sync_with(20);
    let update = s.on_primary_settled(12.0 * 390.0 + 20.0).unwrap();
    assert_eq!(update.index, 12);
    assert_eq!(s.lists().primary, [(4680.0, true)]);
}

#[test]
fn settle_within_rounding_of_a_page_does_not_resnap() {
    let mut s = sync_with(20);

    let update = s.on_primary_settled(4680.0 + 1e-4).unwrap();
    assert_eq!(update.index, 12);
    let update = s.on_primary_settled(4680.0 - 1e-4).unwrap();
    assert_eq!(update.index, 12);

    assert!(s.lists().primary.is_empty());
    assert_eq!(s.lists().secondary.len(), 2);
}

#[test]
fn settle_survives_fractional_page_widths() {
    let width = 392.727_272_727_272_7;
    let mut s = Synchronizer::new(
        SyncOptions::new(ViewportGeometry::for_page_width(width)),
        (),
    );
    s.set_count(1000);
    for i in 0..1000 {
        let update = s.on_primary_settled(i as f64 * width).unwrap();
        assert_eq!(update.index, i);
    }
}

#[test]
fn settle_clamps_transient_offsets() {
    let mut s = sync_with(20);

    let update = s.on_primary_settled(-120.0).unwrap();
    assert_eq!(update.index, 0);
    assert_eq!(s.lists().primary.last(), Some(&(0.0, true)));

    let update = s.on_primary_settled(20.0 * 390.0 + 5.0).unwrap();
    assert_eq!(update.index, 19);

    let update = s.on_primary_settled(f64::NAN).unwrap();
    assert_eq!(update.index, 0);

    let update = s.on_primary_settled(f64::INFINITY).unwrap();
    assert_eq!(update.index, 19);
}

#[test]
fn select_index_clamps_out_of_range() {
    let mut s = sync_with(4);
    let update = s.select_index(usize::MAX).unwrap();
    assert_eq!(update.index, 3);
    assert_eq!(s.active_index(), Some(3));
}

#[test]
fn active_index_stays_in_range_under_adversarial_input() {
    let mut rng = Lcg::new(0x5eed);
    for count in [1usize, 2, 3, 20, 57] {
        let mut s = sync_with(count);
        for _ in 0..500 {
            match rng.gen_range_u64(0, 5) {
                0 => {
                    s.select_index(rng.gen_range_u64(0, 200) as usize);
                }
                1 => {
                    let off = rng.gen_offset(390.0);
                    s.on_primary_settled(off);
                }
                2 => {
                    s.select_next();
                }
                3 => {
                    s.select_previous();
                }
                _ => {
                    s.select_index(usize::MAX);
                }
            }
            let active = s.active_index().unwrap();
            assert!(active < count, "active={active} count={count}");
            let (last_secondary, _) = *s.lists().secondary.last().unwrap();
            assert!(last_secondary >= 0.0);
            assert!(last_secondary <= s.strip().max_scroll_offset());
        }
    }
}

#[test]
fn empty_gallery_ignores_selection() {
    let mut s = sync_with(0);
    assert_eq!(s.active_index(), None);
    assert_eq!(s.select_index(0), None);
    assert_eq!(s.on_primary_settled(500.0), None);
    assert_eq!(s.select_next(), None);
    assert!(s.lists().primary.is_empty());
    assert!(s.lists().secondary.is_empty());
}

#[test]
fn strip_target_is_clamped_at_the_content_end() {
    let mut s = sync_with(20);
    // content = 10 + 20 * 90 + 10 = 1820, max offset = 1820 - 390 = 1430.
    assert_eq!(s.strip().max_scroll_offset(), 1430.0);
    assert_eq!(s.select_index(19).unwrap().secondary_offset, 1430.0);

    s.set_options(s.options().clone().with_clamp_to_content(false));
    assert_eq!(s.select_index(19).unwrap().secondary_offset, 1710.0 - 195.0 + 40.0);
}

#[test]
fn short_strip_never_scrolls() {
    let mut s = sync_with(3);
    for i in 0..3 {
        assert_eq!(s.select_index(i).unwrap().secondary_offset, 0.0);
    }
}

#[test]
fn select_next_and_previous_stop_at_the_ends() {
    let mut s = sync_with(3);
    assert_eq!(s.select_previous().unwrap().index, 0);
    assert_eq!(s.select_next().unwrap().index, 1);
    assert_eq!(s.select_next().unwrap().index, 2);
    assert_eq!(s.select_next().unwrap().index, 2);
}

#[test]
fn set_count_does_not_scroll_or_move_cursor() {
    let mut s = sync_with(0);
    s.set_count(20);
    assert_eq!(s.active_index(), Some(0));
    assert!(s.lists().primary.is_empty());
    assert!(s.lists().secondary.is_empty());

    s.select_index(15);
    s.set_count(10);
    assert_eq!(s.active_index(), Some(9));
    assert_eq!(s.lists().primary.len(), 1);
}

#[test]
fn geometry_change_realigns_without_animation() {
    let mut s = sync_with(20);
    s.select_index(10);
    s.set_geometry(ViewportGeometry::new(800.0, 80.0, 10.0));

    // stride 90: 900 - 40 > 400, so offset = 900 - 400 + 40.
    assert_eq!(s.lists().primary.last(), Some(&(8000.0, false)));
    assert_eq!(s.lists().secondary.last(), Some(&(540.0, false)));
    assert_eq!(s.active_index(), Some(10));

    // Same geometry is a no-op.
    let n = s.lists().primary.len();
    s.set_geometry(ViewportGeometry::new(800.0, 80.0, 10.0));
    assert_eq!(s.lists().primary.len(), n);
}

#[test]
fn snapshot_restore_clamps_and_realigns() {
    let mut s = sync_with(20);
    s.select_index(7);
    let snap = s.snapshot();
    assert_eq!(snap.active_index, 7);

    let mut other = sync_with(5);
    other.restore(snap);
    assert_eq!(other.active_index(), Some(4));
    assert_eq!(other.lists().primary.last(), Some(&(1560.0, false)));

    let mut empty = sync_with(0);
    empty.restore(snap);
    assert!(empty.lists().primary.is_empty());
    empty.set_count(20);
    assert_eq!(empty.active_index(), Some(7));
}

#[test]
fn on_select_fires_once_per_applied_selection() {
    let calls = Arc::new(AtomicUsize::new(0));
    let last = Arc::new(AtomicUsize::new(usize::MAX));
    let opts = SyncOptions::new(phone()).with_on_select(Some({
        let calls = Arc::clone(&calls);
        let last = Arc::clone(&last);
        move |u: &SyncUpdate| {
            calls.fetch_add(1, Ordering::Relaxed);
            last.store(u.index, Ordering::Relaxed);
        }
    }));
    let mut s = Synchronizer::new(opts, Recorder::default());
    s.select_index(0);
    assert_eq!(calls.load(Ordering::Relaxed), 0);

    s.set_count(20);
    s.select_index(3);
    s.on_primary_settled(6.0 * 390.0);
    assert_eq!(calls.load(Ordering::Relaxed), 2);
    assert_eq!(last.load(Ordering::Relaxed), 6);
}

#[test]
fn non_animated_options_are_forwarded() {
    let mut s = Synchronizer::new(
        SyncOptions::new(phone()).with_animated(false),
        Recorder::default(),
    );
    s.set_count(4);
    s.select_index(2);
    assert_eq!(s.lists().primary, [(780.0, false)]);
}

#[test]
fn scroller_can_be_borrowed() {
    let mut rec = Recorder::default();
    {
        let mut s = Synchronizer::new(SyncOptions::new(phone()), &mut rec);
        s.set_count(2);
        s.select_index(1);
    }
    assert_eq!(rec.primary, [(390.0, true)]);
}

#[test]
fn geometry_sanitizes_bad_inputs() {
    let g = ViewportGeometry::new(f64::NAN, -80.0, f64::INFINITY);
    assert_eq!(g.page_width, 0.0);
    assert_eq!(g.thumb_size, 0.0);
    assert_eq!(g.thumb_spacing, 0.0);

    let mut s = Synchronizer::new(SyncOptions::new(g), Recorder::default());
    s.set_count(5);
    assert_eq!(s.on_primary_settled(1234.0).unwrap().index, 0);
}

#[test]
fn pager_maps_offsets_to_pages() {
    let p = Pager::new(390.0, 20);
    assert_eq!(p.page_offset(3), 1170.0);
    assert_eq!(p.page_at_offset(0.0), Some(0));
    assert_eq!(p.page_at_offset(389.9), Some(0));
    assert_eq!(p.page_at_offset(390.0), Some(1));
    assert!(p.is_on_page(1170.0, 3));
    assert!(p.is_on_page(1170.0 - 1e-4, 3));
    assert!(!p.is_on_page(1170.5, 3));
    assert!(!p.is_on_page(f64::NAN, 0));
    assert_eq!(p.total_width(), 7800.0);
    assert_eq!(p.max_scroll_offset(), 7410.0);
    assert_eq!(Pager::new(390.0, 0).page_at_offset(0.0), None);
}

#[test]
fn strip_positions_include_padding() {
    let strip = ThumbStrip::new(phone(), 20);
    assert_eq!(strip.item_start(0), Some(10.0));
    assert_eq!(strip.item_end(0), Some(90.0));
    assert_eq!(strip.item_center(1), Some(140.0));
    assert_eq!(strip.item_start(2), Some(190.0));
    assert_eq!(strip.item_start(20), None);
    assert_eq!(strip.content_width(), 1820.0);
    assert_eq!(strip.clamp_scroll_offset(-5.0), 0.0);
    assert_eq!(strip.clamp_scroll_offset(9999.0), 1430.0);
    assert_eq!(strip.clamp_scroll_offset(f64::NAN), 0.0);
}

#[test]
fn strip_visible_range() {
    let strip = ThumbStrip::new(phone(), 20);

    let r = strip.visible_range(0.0);
    assert_eq!((r.start_index, r.end_index), (0, 5));

    // Thumbnail 2 ends at 270, thumbnail 7 starts at 640 < 685.
    let r = strip.visible_range(295.0);
    assert_eq!((r.start_index, r.end_index), (3, 8));
    assert!(r.contains(7));
    assert!(!r.contains(8));

    let r = strip.visible_range(1e9);
    assert_eq!(r.end_index, 20);
    assert!(r.len() <= 5);

    let r = strip.range_with_overscan(295.0, 2);
    assert_eq!((r.start_index, r.end_index), (1, 10));

    assert!(ThumbStrip::new(phone(), 0).visible_range(0.0).is_empty());
}

#[test]
fn session_thumbnails_flag_the_active_one() {
    let mut session = GallerySession::new(SyncOptions::new(phone()), Recorder::default());
    session.set_images(images(20));
    session.select_index(3);

    let mut seen = Vec::new();
    session.for_each_thumbnail(0.0, |thumb, image| {
        assert_eq!(image.url, images(20)[thumb.index].url);
        seen.push((thumb.index, thumb.active));
    });
    // overscan = 1 extends the visible 0..5 to 0..6.
    assert_eq!(seen.len(), 6);
    assert_eq!(seen.iter().filter(|(_, active)| *active).count(), 1);
    assert!(seen.contains(&(3, true)));
}

#[test]
fn session_load_keeps_order_and_cursor() {
    let mut session = GallerySession::new(SyncOptions::new(phone()), Recorder::default());
    assert_eq!(session.active_index(), None);
    assert!(session.active_image().is_none());

    let loaded = images(20);
    session.set_images(loaded.clone());

    assert_eq!(session.len(), 20);
    assert_eq!(session.images(), loaded.as_slice());
    assert_eq!(session.active_index(), Some(0));
    assert!(session.sync().lists().primary.is_empty());
    assert!(session.sync().lists().secondary.is_empty());

    session.clear_images();
    assert!(session.is_empty());
    assert_eq!(session.active_index(), None);
}

#[test]
fn tap_then_swipe_scenario() {
    let mut session = GallerySession::new(SyncOptions::new(phone()), Recorder::default());
    session.set_images(images(20));
    assert_eq!(session.active_index(), Some(0));

    let tap = session.select_index(10).unwrap();
    assert_eq!(tap.primary_offset, 3900.0);
    assert_eq!(tap.secondary_offset, 900.0 - 195.0 + 40.0);
    assert_eq!(session.active_index(), Some(10));

    let swipe = session.on_primary_settled(12.0 * 390.0).unwrap();
    assert_eq!(swipe.index, 12);
    assert_eq!(swipe.secondary_offset, 1080.0 - 195.0 + 40.0);
    assert_eq!(session.active_index(), Some(12));
    assert_eq!(
        session.active_image().map(|i| i.url.to_string()),
        Some(images(20)[12].url.clone())
    );

    let lists = session.sync().lists();
    assert_eq!(lists.primary, [(3900.0, true)]);
    assert_eq!(lists.secondary, [(745.0, true), (925.0, true)]);
}

#[test]
fn image_record_strip_url_falls_back() {
    let plain = ImageRecord::new("https://images.test/a.jpg");
    assert_eq!(plain.strip_url(), "https://images.test/a.jpg");

    let with_thumb = plain.clone().with_thumbnail_url("https://images.test/a-small.jpg");
    assert_eq!(with_thumb.strip_url(), "https://images.test/a-small.jpg");
}

#[cfg(feature = "serde")]
#[test]
fn snapshot_serializes() {
    let snap = SyncSnapshot { active_index: 12 };
    let json = serde_json::to_string(&snap).unwrap();
    assert_eq!(json, r#"{"active_index":12}"#);
    let back: SyncSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back, snap);
}
