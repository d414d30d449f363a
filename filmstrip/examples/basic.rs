// Example: tap a thumbnail, then swipe the viewer, and print where both lists are sent.
use filmstrip::{GallerySession, ImageRecord, ListScroller, SyncOptions, ViewportGeometry};

struct PrintLists;

impl ListScroller for PrintLists {
    fn scroll_primary_to(&mut self, offset: f64, animated: bool) {
        println!("  viewer -> {offset} (animated={animated})");
    }

    fn scroll_secondary_to(&mut self, offset: f64, animated: bool) {
        println!("  strip  -> {offset} (animated={animated})");
    }
}

fn main() {
    let geometry = ViewportGeometry::for_page_width(390.0);
    let mut session = GallerySession::new(SyncOptions::new(geometry), PrintLists);
    session.set_images(
        (0..20)
            .map(|i| ImageRecord::new(format!("https://images.example/{i}.jpg")))
            .collect(),
    );
    println!("loaded {} images, active={:?}", session.len(), session.active_index());

    println!("tap thumbnail 10:");
    session.select_index(10);

    println!("viewer settles at 12 * W:");
    session.on_primary_settled(12.0 * 390.0);

    println!("viewer overshoots past the last page:");
    session.on_primary_settled(25.0 * 390.0);
    println!("active={:?}", session.active_index());

    let mut visible = Vec::new();
    session.for_each_thumbnail(session.sync().secondary_offset_for(19), |thumb, _| {
        visible.push((thumb.index, thumb.active))
    });
    println!("strip thumbnails at the end: {visible:?}");
}
