//! Entrance animation primitives.
//!
//! A reveal plays a one-shot transition from an initial visual state
//! (faded, offset, optionally scaled down) to the resting state. Tweens are
//! fire-and-forget: once started they run to completion on the clock,
//! independent of any further scrolling. Progress is always clamped to
//! `[0, 1]`.

use crate::types::TargetId;

// =============================================================================
// Easing
// =============================================================================

/// Easing curve applied to normalized tween progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Ease {
    Linear,
    /// Decelerating cubic: `1 - (1-t)^3`. Fast start, slow finish.
    #[default]
    OutCubic,
    /// Stronger deceleration: `1 - (1-t)^4`.
    OutQuart,
}

impl Ease {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::OutCubic => 1.0 - (1.0 - t).powi(3),
            Ease::OutQuart => 1.0 - (1.0 - t).powi(4),
        }
    }
}

// =============================================================================
// Visual State
// =============================================================================

/// Renderable state of an animated block: opacity, cell offsets, scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualState {
    pub opacity: f32,
    pub dx: f32,
    pub dy: f32,
    pub scale: f32,
}

impl VisualState {
    /// Fully settled: opaque, zero offset, unit scale.
    pub const RESTING: Self = Self {
        opacity: 1.0,
        dx: 0.0,
        dy: 0.0,
        scale: 1.0,
    };

    /// Faded out, shifted down by `dy` rows.
    pub const fn faded_below(dy: f32) -> Self {
        Self {
            opacity: 0.0,
            dx: 0.0,
            dy,
            scale: 1.0,
        }
    }

    /// Faded out, shifted right by `dx` columns.
    pub const fn faded_beside(dx: f32) -> Self {
        Self {
            opacity: 0.0,
            dx,
            dy: 0.0,
            scale: 1.0,
        }
    }

    pub const fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    /// Linear interpolation toward `RESTING` by eased factor `k`.
    pub fn toward_resting(&self, k: f32) -> Self {
        let lerp = |a: f32, b: f32| a + (b - a) * k;
        Self {
            opacity: lerp(self.opacity, 1.0),
            dx: lerp(self.dx, 0.0),
            dy: lerp(self.dy, 0.0),
            scale: lerp(self.scale, 1.0),
        }
    }
}

// =============================================================================
// Transition
// =============================================================================

/// Describes an entrance: initial state, duration, delay, easing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub from: VisualState,
    pub duration: f32,
    pub delay: f32,
    pub ease: Ease,
}

impl Transition {
    pub fn new(from: VisualState, duration: f32) -> Self {
        Self {
            from,
            duration: duration.max(f32::EPSILON),
            delay: 0.0,
            ease: Ease::OutCubic,
        }
    }

    /// Fade in while sliding up from `dy` rows below.
    pub fn fade_up(dy: f32, duration: f32) -> Self {
        Self::new(VisualState::faded_below(dy), duration)
    }

    /// Fade in while sliding in from `dx` columns to the right.
    pub fn fade_side(dx: f32, duration: f32) -> Self {
        Self::new(VisualState::faded_beside(dx), duration)
    }

    pub fn with_delay(mut self, delay: f32) -> Self {
        self.delay = delay.max(0.0);
        self
    }

    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }
}

// =============================================================================
// Tween
// =============================================================================

/// A transition bound to a target, started at a clock timestamp (seconds).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub target: TargetId,
    pub transition: Transition,
    pub started_at: f64,
}

impl Tween {
    pub fn new(target: TargetId, transition: Transition, started_at: f64) -> Self {
        Self {
            target,
            transition,
            started_at,
        }
    }

    /// Normalized progress at `now`, clamped to `[0, 1]`. Zero until the
    /// delay has elapsed.
    pub fn progress(&self, now: f64) -> f32 {
        let elapsed = (now - self.started_at) as f32 - self.transition.delay;
        (elapsed / self.transition.duration).clamp(0.0, 1.0)
    }

    pub fn is_finished(&self, now: f64) -> bool {
        self.progress(now) >= 1.0
    }

    /// Current visual state under the easing curve.
    pub fn sample(&self, now: f64) -> VisualState {
        let k = self.transition.ease.apply(self.progress(now));
        self.transition.from.toward_resting(k)
    }
}

// =============================================================================
// Stagger
// =============================================================================

/// Build one tween per target with a fixed per-index delay increment,
/// preserving input order: target N starts `base.delay + N * step` after
/// `started_at`.
pub fn stagger(targets: &[TargetId], base: Transition, step: f32, started_at: f64) -> Vec<Tween> {
    targets
        .iter()
        .enumerate()
        .map(|(i, &target)| {
            let transition = base.with_delay(base.delay + i as f32 * step);
            Tween::new(target, transition, started_at)
        })
        .collect()
}

// =============================================================================
// Timeline
// =============================================================================

/// Ordered collection of in-flight tweens.
///
/// At most one tween per target: pushing a tween for a target that already
/// has one replaces it. Sampling an unknown target yields `RESTING`.
#[derive(Debug, Clone, Default)]
pub struct Timeline {
    tweens: Vec<Tween>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, tween: Tween) {
        self.tweens.retain(|t| t.target != tween.target);
        self.tweens.push(tween);
    }

    pub fn extend(&mut self, tweens: impl IntoIterator<Item = Tween>) {
        for tween in tweens {
            self.push(tween);
        }
    }

    /// Visual state for a target; `None` if no tween is (or was) running
    /// for it.
    pub fn sample_for(&self, target: TargetId, now: f64) -> Option<VisualState> {
        self.tweens
            .iter()
            .find(|t| t.target == target)
            .map(|t| t.sample(now))
    }

    /// Drop tweens that have reached their resting state.
    pub fn prune_finished(&mut self, now: f64) {
        self.tweens.retain(|t| !t.is_finished(now));
    }

    /// Cancel the tween for one target, if any. A cancelled tween never
    /// advances again.
    pub fn cancel(&mut self, target: TargetId) {
        self.tweens.retain(|t| t.target != target);
    }

    /// Cancel everything (section teardown).
    pub fn clear(&mut self) {
        self.tweens.clear();
    }

    pub fn len(&self) -> usize {
        self.tweens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tweens.is_empty()
    }
}

// =============================================================================
// Typed Text
// =============================================================================

/// Character-by-character text reveal driven by elapsed time.
///
/// Monotonic: the visible prefix only grows, clamped to the full string.
/// Slicing is by char count, never mid-codepoint.
#[derive(Debug, Clone)]
pub struct TypedText {
    text: String,
    started_at: f64,
    delay: f32,
    chars_per_second: f32,
}

impl TypedText {
    pub fn new(text: impl Into<String>, started_at: f64) -> Self {
        Self {
            text: text.into(),
            started_at,
            // Original effect: first char after 1s, then one every 50ms.
            delay: 1.0,
            chars_per_second: 20.0,
        }
    }

    pub fn chars_visible(&self, now: f64) -> usize {
        let elapsed = (now - self.started_at) as f32 - self.delay;
        if elapsed <= 0.0 {
            return 0;
        }
        let total = self.text.chars().count();
        ((elapsed * self.chars_per_second) as usize).min(total)
    }

    /// The currently visible prefix.
    pub fn visible(&self, now: f64) -> &str {
        let n = self.chars_visible(now);
        match self.text.char_indices().nth(n) {
            Some((byte, _)) => &self.text[..byte],
            None => &self.text,
        }
    }

    pub fn is_done(&self, now: f64) -> bool {
        self.chars_visible(now) >= self.text.chars().count()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_endpoints() {
        for ease in [Ease::Linear, Ease::OutCubic, Ease::OutQuart] {
            assert_eq!(ease.apply(0.0), 0.0);
            assert!((ease.apply(1.0) - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_ease_out_decelerates() {
        // First half covers more ground than the second half.
        let first = Ease::OutCubic.apply(0.5);
        assert!(first > 0.5);
        assert!(first < 1.0);
    }

    #[test]
    fn test_ease_clamps_input() {
        assert_eq!(Ease::OutCubic.apply(-0.5), 0.0);
        assert!((Ease::OutCubic.apply(1.5) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_tween_progress_clamped() {
        let tween = Tween::new(TargetId(1), Transition::fade_up(4.0, 1.0), 10.0);
        assert_eq!(tween.progress(9.0), 0.0); // before start
        assert_eq!(tween.progress(10.0), 0.0);
        assert!((tween.progress(10.5) - 0.5).abs() < 1e-6);
        assert_eq!(tween.progress(100.0), 1.0); // long after end
    }

    #[test]
    fn test_tween_delay_holds_initial_state() {
        let tween = Tween::new(
            TargetId(1),
            Transition::fade_up(4.0, 1.0).with_delay(0.5),
            0.0,
        );
        let state = tween.sample(0.25);
        assert_eq!(state.opacity, 0.0);
        assert_eq!(state.dy, 4.0);
    }

    #[test]
    fn test_tween_sample_reaches_resting() {
        let tween = Tween::new(TargetId(1), Transition::fade_up(4.0, 0.7), 0.0);
        let state = tween.sample(5.0);
        assert_eq!(state, VisualState::RESTING);
        assert!(tween.is_finished(5.0));
    }

    #[test]
    fn test_stagger_fixed_increment_ordering() {
        let targets: Vec<TargetId> = (0..5).map(TargetId).collect();
        let tweens = stagger(&targets, Transition::fade_up(3.0, 0.6), 0.08, 0.0);

        assert_eq!(tweens.len(), 5);
        for (i, tween) in tweens.iter().enumerate() {
            // Delay is exactly index * step, so order matches document order.
            let expected = i as f32 * 0.08;
            assert!((tween.transition.delay - expected).abs() < 1e-6);
            assert_eq!(tween.target, TargetId(i as u64));
        }
        // Strictly increasing.
        for pair in tweens.windows(2) {
            assert!(pair[1].transition.delay > pair[0].transition.delay);
        }
    }

    #[test]
    fn test_stagger_respects_base_delay() {
        let targets: Vec<TargetId> = (0..3).map(TargetId).collect();
        let base = Transition::fade_up(3.0, 0.6).with_delay(0.2);
        let tweens = stagger(&targets, base, 0.1, 0.0);
        assert!((tweens[0].transition.delay - 0.2).abs() < 1e-6);
        assert!((tweens[2].transition.delay - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_timeline_replaces_per_target() {
        let mut tl = Timeline::new();
        tl.push(Tween::new(TargetId(1), Transition::fade_up(4.0, 1.0), 0.0));
        tl.push(Tween::new(TargetId(1), Transition::fade_up(8.0, 1.0), 5.0));
        assert_eq!(tl.len(), 1);

        let state = tl.sample_for(TargetId(1), 5.0).unwrap();
        assert_eq!(state.dy, 8.0); // the replacement, not the original
    }

    #[test]
    fn test_timeline_prune_and_cancel() {
        let mut tl = Timeline::new();
        tl.push(Tween::new(TargetId(1), Transition::fade_up(4.0, 0.5), 0.0));
        tl.push(Tween::new(TargetId(2), Transition::fade_up(4.0, 10.0), 0.0));

        tl.prune_finished(1.0);
        assert_eq!(tl.len(), 1);
        assert!(tl.sample_for(TargetId(1), 1.0).is_none());

        tl.cancel(TargetId(2));
        assert!(tl.is_empty());
        assert!(tl.sample_for(TargetId(2), 1.0).is_none());
    }

    #[test]
    fn test_typed_text_monotonic() {
        let typed = TypedText::new("Operations Coordinator", 0.0);
        assert_eq!(typed.visible(0.5), ""); // still in the start delay
        let mut last = 0;
        for tick in 0..60 {
            let now = 1.0 + tick as f64 * 0.1;
            let n = typed.chars_visible(now);
            assert!(n >= last);
            last = n;
        }
        assert!(typed.is_done(10.0));
        assert_eq!(typed.visible(10.0), "Operations Coordinator");
    }

    #[test]
    fn test_typed_text_multibyte_safe() {
        let typed = TypedText::new("café ☕ done", 0.0);
        for tick in 0..40 {
            let now = 1.0 + tick as f64 * 0.05;
            // Must never slice mid-codepoint (would panic).
            let _ = typed.visible(now);
        }
        assert_eq!(typed.visible(100.0), "café ☕ done");
    }
}
