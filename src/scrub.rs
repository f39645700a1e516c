//! Scroll-linked (scrub) motion for the hero section.
//!
//! Unlike reveals there is no "entered" event and no completion: the
//! progress value is a pure function of the current scroll position,
//! recomputed on every scroll update with no smoothing or inertia. The
//! derived progress is clamped to `[0, 1]` before any offset is applied.

/// Foreground content shift at full progress (rows, upward).
pub const CONTENT_SHIFT: f32 = 6.0;

/// Portrait layer shift at full progress (rows, upward). Half the content
/// shift, which is what produces the depth effect.
pub const PORTRAIT_SHIFT: f32 = 3.0;

/// Portrait scale reduction at full progress.
pub const PORTRAIT_SCALE_DROP: f32 = 0.05;

// =============================================================================
// Scrub Binding
// =============================================================================

/// Maps a scroll position to normalized progress over a section's scroll
/// range (`start` = section top aligned with viewport top, `start + range`
/// = section bottom reaching viewport top).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrubBinding {
    start: f32,
    range: f32,
}

impl ScrubBinding {
    pub fn new(start: f32, range: f32) -> Self {
        Self {
            start,
            range: range.max(f32::EPSILON),
        }
    }

    /// Normalized progress in `[0, 1]` for the given scroll top.
    pub fn progress(&self, scroll_top: f32) -> f32 {
        ((scroll_top - self.start) / self.range).clamp(0.0, 1.0)
    }
}

// =============================================================================
// Parallax Offsets
// =============================================================================

/// Per-layer transform offsets derived from scrub progress.
///
/// The foreground text block moves up faster than the portrait layer, and
/// the portrait shrinks slightly as it recedes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallaxOffsets {
    /// Row offset for the foreground content (negative = up).
    pub content_dy: f32,
    /// Row offset for the portrait layer (negative = up).
    pub portrait_dy: f32,
    /// Scale factor for the portrait layer.
    pub portrait_scale: f32,
}

impl ParallaxOffsets {
    pub fn at(progress: f32) -> Self {
        let p = progress.clamp(0.0, 1.0);
        Self {
            content_dy: -p * CONTENT_SHIFT,
            portrait_dy: -p * PORTRAIT_SHIFT,
            portrait_scale: 1.0 - p * PORTRAIT_SCALE_DROP,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_clamps_below_range() {
        // Raw ratio would be -0.2: applied progress must be exactly 0.
        let scrub = ScrubBinding::new(0.0, 10.0);
        assert_eq!(scrub.progress(-2.0), 0.0);
    }

    #[test]
    fn test_progress_clamps_above_range() {
        // Raw ratio would be 1.4: applied progress must be exactly 1.
        let scrub = ScrubBinding::new(0.0, 10.0);
        assert_eq!(scrub.progress(14.0), 1.0);
    }

    #[test]
    fn test_progress_tracks_scroll_directly() {
        let scrub = ScrubBinding::new(10.0, 20.0);
        assert_eq!(scrub.progress(10.0), 0.0);
        assert!((scrub.progress(15.0) - 0.25).abs() < 1e-6);
        assert!((scrub.progress(20.0) - 0.5).abs() < 1e-6);
        assert_eq!(scrub.progress(30.0), 1.0);
    }

    #[test]
    fn test_zero_range_does_not_divide_by_zero() {
        let scrub = ScrubBinding::new(5.0, 0.0);
        assert_eq!(scrub.progress(4.0), 0.0);
        assert_eq!(scrub.progress(6.0), 1.0);
    }

    #[test]
    fn test_offsets_at_rest() {
        let offsets = ParallaxOffsets::at(0.0);
        assert_eq!(offsets.content_dy, 0.0);
        assert_eq!(offsets.portrait_dy, 0.0);
        assert_eq!(offsets.portrait_scale, 1.0);
    }

    #[test]
    fn test_offsets_at_full_progress() {
        let offsets = ParallaxOffsets::at(1.0);
        assert_eq!(offsets.content_dy, -CONTENT_SHIFT);
        assert_eq!(offsets.portrait_dy, -PORTRAIT_SHIFT);
        assert!((offsets.portrait_scale - 0.95).abs() < 1e-6);
    }

    #[test]
    fn test_content_moves_faster_than_portrait() {
        let offsets = ParallaxOffsets::at(0.6);
        assert!(offsets.content_dy < offsets.portrait_dy);
        assert!(offsets.portrait_dy < 0.0);
    }

    #[test]
    fn test_offsets_clamp_raw_progress() {
        assert_eq!(ParallaxOffsets::at(-0.2), ParallaxOffsets::at(0.0));
        assert_eq!(ParallaxOffsets::at(1.4), ParallaxOffsets::at(1.0));
    }
}
