//! Scroll Module - Page scroll position
//!
//! One vertical scroll offset for the whole page, held in a signal so
//! derived state (scrub progress, visibility fractions) can track it. The
//! offset is clamped to `[0, max_scroll]` on every write. A lock flag
//! suspends scrolling while an overlay is open; writes to the lock are
//! plain boolean assignments, so locking and unlocking are safe to repeat
//! in any order and the latest write always defines the state.
//!
//! # API
//!
//! - `PageScroll::scroll_to` / `scroll_by` - Absolute / relative movement
//! - `PageScroll::page_by` - Near-viewport jumps (PageUp/PageDown)
//! - `PageScroll::to_top` / `to_bottom` - Home/End
//! - `PageScroll::set_locked` - Overlay scroll lock

use spark_signals::{Signal, signal};

// =============================================================================
// CONSTANTS
// =============================================================================

/// Rows moved per mouse wheel tick.
pub const WHEEL_SCROLL: f32 = 3.0;

/// Fraction of the viewport moved by PageUp/PageDown.
pub const PAGE_SCROLL_FACTOR: f32 = 0.9;

// =============================================================================
// PAGE SCROLL
// =============================================================================

/// Vertical scroll state for the page.
#[derive(Clone)]
pub struct PageScroll {
    offset: Signal<f32>,
    locked: Signal<bool>,
    max_scroll: f32,
}

impl PageScroll {
    pub fn new(max_scroll: f32) -> Self {
        Self {
            offset: signal(0.0),
            locked: signal(false),
            max_scroll: max_scroll.max(0.0),
        }
    }

    /// Current offset in rows from the top of the page.
    pub fn offset(&self) -> f32 {
        self.offset.get()
    }

    /// The offset signal, for effects and derived values.
    pub fn offset_signal(&self) -> Signal<f32> {
        self.offset.clone()
    }

    pub fn max_scroll(&self) -> f32 {
        self.max_scroll
    }

    /// Update the scroll range (after layout or resize) and re-clamp the
    /// current offset into it.
    pub fn set_max_scroll(&mut self, max_scroll: f32) {
        self.max_scroll = max_scroll.max(0.0);
        let clamped = self.offset.get().clamp(0.0, self.max_scroll);
        self.offset.set(clamped);
    }

    pub fn is_locked(&self) -> bool {
        self.locked.get()
    }

    /// Set the lock flag. Unconditional assignment: repeated or unpaired
    /// calls cannot wedge the lock.
    pub fn set_locked(&self, locked: bool) {
        self.locked.set(locked);
    }

    pub fn locked_signal(&self) -> Signal<bool> {
        self.locked.clone()
    }

    /// Scroll to an absolute offset, clamped to the valid range.
    /// No-op while locked.
    pub fn scroll_to(&self, y: f32) {
        if self.locked.get() {
            return;
        }
        self.offset.set(y.clamp(0.0, self.max_scroll));
    }

    /// Scroll by a delta. Returns true if the offset actually moved.
    pub fn scroll_by(&self, delta: f32) -> bool {
        if self.locked.get() {
            return false;
        }
        let current = self.offset.get();
        let next = (current + delta).clamp(0.0, self.max_scroll);
        if next == current {
            return false;
        }
        self.offset.set(next);
        true
    }

    /// Scroll by most of a viewport. `direction` is -1 for up, 1 for down.
    pub fn page_by(&self, direction: i8, viewport_height: u16) -> bool {
        let delta = viewport_height as f32 * PAGE_SCROLL_FACTOR * direction as f32;
        self.scroll_by(delta)
    }

    pub fn to_top(&self) {
        self.scroll_to(0.0);
    }

    pub fn to_bottom(&self) {
        self.scroll_to(self.max_scroll);
    }
}

// =============================================================================
// TESTS
// =============================================================================
