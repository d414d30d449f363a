//! Adapter utilities for the `filmstrip` crate.
//!
//! The `filmstrip` crate is UI-agnostic and focuses on the synchronization math and state.
//! This crate provides what a gallery screen needs around it:
//!
//! - A photo search data source (`PexelsSource`) configured from the environment
//! - The load lifecycle, with stale results dropped after teardown (`Gallery`)
//! - Tween-based animated lists implementing `filmstrip::ListScroller` (`TweenLists`)
//! - A frame-driven controller for the whole screen (`Carousel`)
//!
//! This crate is framework-agnostic (no egui/iced bindings).
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod carousel;
mod config;
mod error;
mod list;
mod loader;
mod source;
mod tween;


pub use carousel::Carousel;
pub use config::{
    API_KEY_VARS, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT, ENDPOINT_VAR, SearchQuery, SourceConfig,
    TIMEOUT_VAR,
};
pub use error::{ErrorKind, GalleryError, Result};
pub use list::{AnimatedList, AnimationOptions, FrameOffsets, TweenLists};
pub use loader::{Gallery, LoadState, LoadTicket};
pub use source::{PexelsSource, PhotoSource, parse_search_response};
pub use tween::{Easing, Tween};
