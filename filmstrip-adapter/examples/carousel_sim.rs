// Example: load the gallery from the photo search API, then simulate a tap and a swipe.
//
// Run with `API_KEY=... cargo run --example carousel_sim`. Without a key the gallery ends up in
// the failed state, which is printed as well.
use filmstrip::{SyncOptions, ViewportGeometry};
use filmstrip_adapter::{AnimationOptions, Carousel, LoadState, PexelsSource, PhotoSource};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("filmstrip=debug,info")),
        )
        .init();

    let geometry = ViewportGeometry::for_page_width(390.0);
    let mut carousel = Carousel::new(SyncOptions::new(geometry), AnimationOptions::default());

    let ticket = carousel.gallery_mut().begin_load();
    let result = match PexelsSource::from_env() {
        Ok(source) => source.load().await,
        Err(err) => Err(err),
    };
    carousel.gallery_mut().finish_load(ticket, result);

    match carousel.gallery().load_state() {
        LoadState::Ready => println!("loaded {} images", carousel.session().len()),
        LoadState::Failed(err) => {
            println!("load failed ({:?}): {err}", err.kind());
            return;
        }
        other => println!("unexpected state: {other:?}"),
    }

    let mut now_ms = 0u64;
    carousel.tap_thumbnail(10, now_ms);
    while carousel.is_animating() {
        now_ms += 16;
        let frame = carousel.tick(now_ms);
        if now_ms % 96 == 0 {
            println!("t={now_ms} viewer={:.1} strip={:.1}", frame.primary, frame.secondary);
        }
    }

    let settled = carousel.primary_momentum_end(12.0 * geometry.page_width, now_ms);
    println!("swipe settled: {settled:?}");
    if let Some(image) = carousel.session().active_image() {
        println!("active image: {}", image.url);
    }
}
