//! A headless dual-carousel scroll synchronizer.
//!
//! For the photo data source, load lifecycle and animated list controllers, see the
//! `filmstrip-adapter` crate.
//!
//! A gallery screen shows two horizontal lists over the same images: a full-width paged viewer
//! and a strip of thumbnails. This crate keeps them in step. Tapping a thumbnail pages the
//! viewer to it; swiping the viewer moves the strip so the active thumbnail stays in view,
//! pinned at the start of the strip and centered once it would drift left.
//!
//! It is UI-agnostic. A GUI layer is expected to provide:
//! - viewport geometry (page width, thumbnail size and spacing)
//! - thumbnail taps and the viewer's settled scroll offset
//! - a [`ListScroller`] that moves the real lists
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

pub mod layout;
mod options;
mod session;
mod state;
mod sync;
mod types;

#[cfg(test)]
mod tests;

pub use layout::{Pager, ThumbStrip};
pub use options::{OnSelectCallback, SyncOptions};
pub use session::GallerySession;
pub use state::SyncSnapshot;
pub use sync::{ListScroller, Synchronizer};
pub use types::{
    DEFAULT_THUMB_SIZE, DEFAULT_THUMB_SPACING, ImageRecord, SyncUpdate, ThumbRange, Thumbnail,
    ViewportGeometry,
};
