use filmstrip::ListScroller;

use crate::{Easing, Tween};

/// Targets closer than this (in logical pixels) count as the same offset.
const OFFSET_EPSILON: f64 = 0.5;

/// How animated scrolls move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnimationOptions {
    pub duration_ms: u64,
    pub easing: Easing,
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            duration_ms: 300,
            easing: Easing::EaseInOutCubic,
        }
    }
}

/// The scroll position of one horizontal list, with an optional in-flight animation.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_scroll` when the user drags the list
/// - `tick(now_ms)` each frame, applying the returned offset to the real list
#[derive(Clone, Debug)]
pub struct AnimatedList {
    offset: f64,
    tween: Option<Tween>,
    animation: AnimationOptions,
}

impl AnimatedList {
    pub fn new(animation: AnimationOptions) -> Self {
        Self {
            offset: 0.0,
            tween: None,
            animation,
        }
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Where the list is heading (the current offset when idle).
    pub fn target(&self) -> f64 {
        self.tween.map_or(self.offset, |t| t.to)
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    pub fn cancel_animation(&mut self) {
        self.tween = None;
    }

    /// Call this when the UI reports a user-driven offset change. Cancels any active tween.
    pub fn on_scroll(&mut self, offset: f64) {
        self.cancel_animation();
        self.offset = offset;
    }

    /// Moves to `offset`.
    ///
    /// Animated requests start a tween, or retarget the running one. A request for the offset
    /// the list is already at (or already heading to) changes nothing.
    pub fn scroll_to(&mut self, offset: f64, animated: bool, now_ms: u64) {
        if !animated {
            self.on_scroll(offset);
            return;
        }
        let duration_ms = self.animation.duration_ms;
        match &mut self.tween {
            Some(tween) if (tween.to - offset).abs() < OFFSET_EPSILON => {}
            Some(tween) => tween.retarget(now_ms, offset, duration_ms),
            None if (self.offset - offset).abs() < OFFSET_EPSILON => {}
            None => {
                self.tween = Some(Tween::new(
                    self.offset,
                    offset,
                    now_ms,
                    duration_ms,
                    self.animation.easing,
                ));
            }
        }
    }

    /// Advances the animation.
    ///
    /// Returns the new offset while a tween is active, `None` when idle.
    pub fn tick(&mut self, now_ms: u64) -> Option<f64> {
        let tween = self.tween?;
        self.offset = tween.sample(now_ms);
        if tween.is_done(now_ms) {
            self.tween = None;
        }
        Some(self.offset)
    }
}

/// Offsets to apply to the real lists this frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameOffsets {
    pub primary: f64,
    pub secondary: f64,
    /// Whether either list is still animating (keep scheduling frames).
    pub animating: bool,
}

/// A [`ListScroller`] backed by two [`AnimatedList`]s.
///
/// Scroll requests are stamped with the clock last passed to `set_clock`/`tick`.
#[derive(Clone, Debug)]
pub struct TweenLists {
    pub primary: AnimatedList,
    pub secondary: AnimatedList,
    now_ms: u64,
}

impl TweenLists {
    pub fn new(animation: AnimationOptions) -> Self {
        Self {
            primary: AnimatedList::new(animation),
            secondary: AnimatedList::new(animation),
            now_ms: 0,
        }
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn set_clock(&mut self, now_ms: u64) {
        self.now_ms = self.now_ms.max(now_ms);
    }

    pub fn is_animating(&self) -> bool {
        self.primary.is_animating() || self.secondary.is_animating()
    }

    pub fn tick(&mut self, now_ms: u64) -> FrameOffsets {
        self.set_clock(now_ms);
        self.primary.tick(self.now_ms);
        self.secondary.tick(self.now_ms);
        self.frame()
    }

    pub fn frame(&self) -> FrameOffsets {
        FrameOffsets {
            primary: self.primary.offset(),
            secondary: self.secondary.offset(),
            animating: self.is_animating(),
        }
    }
}

impl Default for TweenLists {
    fn default() -> Self {
        Self::new(AnimationOptions::default())
    }
}

impl ListScroller for TweenLists {
    fn scroll_primary_to(&mut self, offset: f64, animated: bool) {
        self.primary.scroll_to(offset, animated, self.now_ms);
    }

    fn scroll_secondary_to(&mut self, offset: f64, animated: bool) {
        self.secondary.scroll_to(offset, animated, self.now_ms);
    }
}
