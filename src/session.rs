//! Session - Page state and event routing
//!
//! A `PageSession` owns everything a running viewer needs: the computed
//! layout, the scroll position, the reveal scheduler, the active tweens,
//! the lightbox, and the key binding table. The main loop feeds it input
//! events and a monotonic clock; the renderer reads it to draw a frame.
//!
//! There is no ambient state: every subsystem lives in the session struct
//! and is dropped with it, so two sessions (as in tests) never interfere.
//!
//! # API
//!
//! - `PageSession::new` - Build the session and start the hero intro
//! - `PageSession::handle_event` - Route one input event
//! - `PageSession::tick` - Per-frame housekeeping
//! - `PageSession::resize` - Recompute layout for a new terminal size
//! - `header_target` / `body_target` / `item_target` - Target id scheme

use crate::anim::{Timeline, Transition, Tween, TypedText, VisualState, stagger};
use crate::content::Profile;
use crate::layout::{PageLayout, SectionKind, compute_page_layout, hero_portrait_index};
use crate::reveal::{HEADER_THRESHOLD, ITEM_THRESHOLD, RevealScheduler, Sample};
use crate::scrub::{ParallaxOffsets, ScrubBinding};
use crate::state::input::InputEvent;
use crate::state::keyboard::{KeyMap, KeyboardEvent, Modifiers};
use crate::state::lightbox::{Lightbox, LightboxItem};
use crate::state::mouse::{HitGrid, HitTarget, MouseAction, MouseButton, MouseEvent, ScrollDirection};
use crate::state::scroll::{PageScroll, WHEEL_SCROLL};
use crate::theme::Theme;
use crate::types::{TargetId, Viewport};

// =============================================================================
// TARGET IDS
// =============================================================================

fn ordinal(kind: SectionKind) -> u64 {
    SectionKind::ALL
        .iter()
        .position(|&k| k == kind)
        .unwrap_or(0) as u64
}

/// Target id of a section header.
pub fn header_target(kind: SectionKind) -> TargetId {
    TargetId(ordinal(kind) * 100)
}

/// Target id of a section body (fires the item stagger).
pub fn body_target(kind: SectionKind) -> TargetId {
    TargetId(ordinal(kind) * 100 + 1)
}

/// Target id of the `index`-th item block in a section.
pub fn item_target(kind: SectionKind, index: usize) -> TargetId {
    TargetId(ordinal(kind) * 100 + 10 + index as u64)
}

// =============================================================================
// ACTIONS
// =============================================================================

/// Everything a key binding can do.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionAction {
    Quit,
    /// Close the lightbox if open; otherwise nothing.
    Dismiss,
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    Top,
    Bottom,
    Jump(SectionKind),
}

/// The default binding table.
pub fn default_keymap() -> KeyMap<SessionAction> {
    let mut keys = KeyMap::new();
    keys.bind("q", SessionAction::Quit);
    keys.bind_with("c", Modifiers::ctrl(), SessionAction::Quit);
    keys.bind("Escape", SessionAction::Dismiss);
    keys.bind("ArrowUp", SessionAction::ScrollUp);
    keys.bind("ArrowDown", SessionAction::ScrollDown);
    keys.bind("k", SessionAction::ScrollUp);
    keys.bind("j", SessionAction::ScrollDown);
    keys.bind("PageUp", SessionAction::PageUp);
    keys.bind("PageDown", SessionAction::PageDown);
    keys.bind("Home", SessionAction::Top);
    keys.bind("End", SessionAction::Bottom);
    keys.bind("g", SessionAction::Top);
    keys.bind("G", SessionAction::Bottom);
    for (i, kind) in SectionKind::ALL.iter().enumerate() {
        keys.bind((i + 1).to_string(), SessionAction::Jump(*kind));
    }
    keys
}

// =============================================================================
// REVEAL WIRING
// =============================================================================

/// What a watched target's visibility is measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WatchedRect {
    Header(SectionKind),
    Body(SectionKind),
}

// Tween timings for section reveals.
const HEADER_RISE: f32 = 2.0;
const HEADER_DURATION: f32 = 0.5;
const ITEM_RISE: f32 = 2.0;
const ITEM_DURATION: f32 = 0.5;
const ITEM_STAGGER: f32 = 0.1;
const CARD_SLIDE: f32 = 4.0;
const CARD_DURATION: f32 = 0.6;
const CARD_STAGGER: f32 = 0.15;
const CERT_SCALE_FROM: f32 = 0.95;
const INTRO_BASE_DELAY: f32 = 0.2;
const INTRO_STAGGER: f32 = 0.1;

// =============================================================================
// PAGE SESSION
// =============================================================================

/// All state of one running viewer.
pub struct PageSession {
    profile: Profile,
    theme: Theme,
    viewport: Viewport,
    layout: PageLayout,
    scroll: PageScroll,
    lightbox: Lightbox,
    scheduler: RevealScheduler,
    timeline: Timeline,
    scrub: ScrubBinding,
    typed: TypedText,
    keys: KeyMap<SessionAction>,
    observed: Vec<(TargetId, WatchedRect)>,
    hit_grid: HitGrid,
    hit_targets: Vec<HitTarget>,
    unlock: Option<Box<dyn FnOnce()>>,
    running: bool,
}

impl PageSession {
    /// Build a session: compute the layout, wire the scroll lock, observe
    /// the content sections, and start the hero intro.
    pub fn new(profile: Profile, viewport: Viewport, theme: Theme, now: f64) -> Self {
        let layout = compute_page_layout(&profile, viewport);
        let scroll = PageScroll::new(layout.max_scroll());
        let lightbox = Lightbox::new();
        let unlock: Box<dyn FnOnce()> = Box::new(lightbox.install_scroll_lock(&scroll));

        let hero_height = layout
            .section(SectionKind::Hero)
            .map(|s| s.rect.height)
            .unwrap_or(viewport.height as f32);
        let scrub = ScrubBinding::new(0.0, hero_height);

        let typed = TypedText::new(profile.title, now);

        let mut session = Self {
            profile,
            theme,
            viewport,
            layout,
            scroll,
            lightbox,
            scheduler: RevealScheduler::new(),
            timeline: Timeline::new(),
            scrub,
            typed,
            keys: default_keymap(),
            observed: Vec::new(),
            hit_grid: HitGrid::new(viewport.width, viewport.height),
            hit_targets: Vec::new(),
            unlock: Some(unlock),
            running: true,
        };

        session.observe_sections();
        session.start_hero_intro(now);
        session.sync_reveals(now);
        session
    }

    fn observe_sections(&mut self) {
        for kind in SectionKind::ALL {
            if kind == SectionKind::Hero {
                continue;
            }
            let header = header_target(kind);
            let body = body_target(kind);
            self.scheduler.observe(header, HEADER_THRESHOLD);
            self.scheduler.observe(body, ITEM_THRESHOLD);
            self.observed.push((header, WatchedRect::Header(kind)));
            self.observed.push((body, WatchedRect::Body(kind)));
        }
    }

    /// The hero animates on mount rather than on scroll: one staggered
    /// pass over its blocks, with the portrait easing in from a slight
    /// shrink.
    fn start_hero_intro(&mut self, now: f64) {
        let portrait = hero_portrait_index(&self.profile);
        let block_count = portrait; // text blocks before the portrait

        let targets: Vec<TargetId> = (0..block_count)
            .map(|i| item_target(SectionKind::Hero, i))
            .collect();
        let base = Transition::fade_up(ITEM_RISE, ITEM_DURATION).with_delay(INTRO_BASE_DELAY);
        self.timeline.extend(stagger(&targets, base, INTRO_STAGGER, now));

        let portrait_from = VisualState::faded_below(0.0).with_scale(0.9);
        self.timeline.push(Tween::new(
            item_target(SectionKind::Hero, portrait),
            Transition::new(portrait_from, 0.8).with_delay(0.3),
            now,
        ));
    }

    // =========================================================================
    // Reveal delivery
    // =========================================================================

    /// Measure every watched target against the current scroll position,
    /// deliver the batch, and start tweens for whatever fired.
    pub fn sync_reveals(&mut self, now: f64) {
        let scroll_top = self.scroll.offset();
        let viewport_height = self.viewport.height as f32;

        let samples: Vec<Sample> = self
            .observed
            .iter()
            .filter(|(id, _)| self.scheduler.is_watched(*id))
            .filter_map(|&(id, watched)| {
                let rect = match watched {
                    WatchedRect::Header(kind) => self.layout.section(kind)?.header,
                    WatchedRect::Body(kind) => self.layout.section(kind)?.rect,
                };
                Some((id, rect.visible_fraction(scroll_top, viewport_height)))
            })
            .collect();

        let fired = self.scheduler.deliver(&samples);
        for id in fired {
            if let Some(&(_, watched)) = self.observed.iter().find(|(oid, _)| *oid == id) {
                self.spawn_reveal(watched, now);
            }
        }
    }

    fn spawn_reveal(&mut self, watched: WatchedRect, now: f64) {
        match watched {
            WatchedRect::Header(kind) => {
                self.timeline.push(Tween::new(
                    header_target(kind),
                    Transition::fade_up(HEADER_RISE, HEADER_DURATION),
                    now,
                ));
            }
            WatchedRect::Body(kind) => self.spawn_items(kind, now),
        }
    }

    fn spawn_items(&mut self, kind: SectionKind, now: f64) {
        let count = match self.layout.section(kind) {
            Some(section) => section.items.len(),
            None => return,
        };
        let targets: Vec<TargetId> = (0..count).map(|i| item_target(kind, i)).collect();

        match kind {
            // Experience cards slide in from alternating sides.
            SectionKind::Experience => {
                for (i, &target) in targets.iter().enumerate() {
                    let dx = if i % 2 == 0 { -CARD_SLIDE } else { CARD_SLIDE };
                    let transition = Transition::fade_side(dx, CARD_DURATION)
                        .with_delay(ITEM_STAGGER + i as f32 * CARD_STAGGER);
                    self.timeline.push(Tween::new(target, transition, now));
                }
            }
            // Certificates grow in slightly as they fade.
            SectionKind::Certifications => {
                let from = VisualState::faded_below(ITEM_RISE).with_scale(CERT_SCALE_FROM);
                let base = Transition::new(from, ITEM_DURATION).with_delay(ITEM_STAGGER);
                self.timeline.extend(stagger(&targets, base, ITEM_STAGGER, now));
            }
            _ => {
                let base = Transition::fade_up(ITEM_RISE, ITEM_DURATION).with_delay(ITEM_STAGGER);
                self.timeline.extend(stagger(&targets, base, ITEM_STAGGER, now));
            }
        }
    }

    // =========================================================================
    // Event handling
    // =========================================================================

    /// Route one input event.
    pub fn handle_event(&mut self, event: InputEvent, now: f64) {
        match event {
            InputEvent::Key(key) => self.handle_key(&key, now),
            InputEvent::Mouse(mouse) => self.handle_mouse(&mouse, now),
            InputEvent::Resize(w, h) => self.resize(w, h, now),
            InputEvent::None => {}
        }
    }

    fn handle_key(&mut self, key: &KeyboardEvent, now: f64) {
        if let Some(action) = self.keys.lookup(key) {
            self.apply(action, now);
        }
    }

    fn handle_mouse(&mut self, mouse: &MouseEvent, now: f64) {
        match mouse.action {
            MouseAction::Scroll => {
                if let Some(scroll) = mouse.scroll {
                    let delta = match scroll.direction {
                        ScrollDirection::Up => -WHEEL_SCROLL,
                        ScrollDirection::Down => WHEEL_SCROLL,
                        ScrollDirection::Left | ScrollDirection::Right => return,
                    };
                    if self.scroll.scroll_by(delta * scroll.delta as f32) {
                        self.sync_reveals(now);
                    }
                }
            }
            MouseAction::Down if mouse.button == MouseButton::Left => {
                if let Some(target) = self.hit_test(mouse.x, mouse.y) {
                    self.handle_hit(target);
                }
            }
            _ => {}
        }
    }

    /// Resolve a click by hit target. Overlay regions are painted over
    /// page regions, so when the lightbox is open a click can only reach
    /// page targets outside the overlay's cells (there are none).
    fn handle_hit(&mut self, target: HitTarget) {
        if self.lightbox.handle_hit(target) {
            return;
        }
        if let HitTarget::CertThumb(index) = target {
            self.open_certificate(index);
        }
    }

    fn apply(&mut self, action: SessionAction, now: f64) {
        let moved = match action {
            SessionAction::Quit => {
                self.running = false;
                false
            }
            SessionAction::Dismiss => {
                self.lightbox.dismiss();
                false
            }
            SessionAction::ScrollUp => self.scroll.scroll_by(-WHEEL_SCROLL),
            SessionAction::ScrollDown => self.scroll.scroll_by(WHEEL_SCROLL),
            SessionAction::PageUp => self.scroll.page_by(-1, self.viewport.height),
            SessionAction::PageDown => self.scroll.page_by(1, self.viewport.height),
            SessionAction::Top => {
                self.scroll.to_top();
                true
            }
            SessionAction::Bottom => {
                self.scroll.to_bottom();
                true
            }
            SessionAction::Jump(kind) => {
                if let Some(section) = self.layout.section(kind) {
                    self.scroll.scroll_to(section.rect.y);
                }
                true
            }
        };
        if moved {
            self.sync_reveals(now);
        }
    }

    /// Show the given certificate in the lightbox.
    pub fn open_certificate(&mut self, index: usize) {
        if let Some(cert) = self.profile.certifications.get(index) {
            self.lightbox.open(LightboxItem::from_certification(cert));
        }
    }

    // =========================================================================
    // Frame housekeeping
    // =========================================================================

    /// Per-frame housekeeping: drop tweens that have reached rest.
    pub fn tick(&mut self, now: f64) {
        self.timeline.prune_finished(now);
    }

    /// Recompute everything size-dependent. Revealed sections stay
    /// revealed.
    pub fn resize(&mut self, width: u16, height: u16, now: f64) {
        self.viewport = Viewport::new(width, height);
        self.layout = compute_page_layout(&self.profile, self.viewport);
        self.scroll.set_max_scroll(self.layout.max_scroll());

        let hero_height = self
            .layout
            .section(SectionKind::Hero)
            .map(|s| s.rect.height)
            .unwrap_or(height as f32);
        self.scrub = ScrubBinding::new(0.0, hero_height);

        self.hit_grid.resize(width, height);
        self.hit_targets.clear();
        self.sync_reveals(now);
    }

    // =========================================================================
    // Hit regions
    // =========================================================================

    /// Replace the hit regions for the frame just drawn. Regions are
    /// painted in order, so later entries win overlapping cells.
    pub fn set_hit_regions(&mut self, regions: &[(u16, u16, u16, u16, HitTarget)]) {
        self.hit_grid.clear();
        self.hit_targets.clear();
        for &(x, y, w, h, target) in regions {
            let index = self.hit_targets.len();
            self.hit_targets.push(target);
            self.hit_grid.fill_rect(x, y, w, h, index);
        }
    }

    pub fn hit_test(&self, x: u16, y: u16) -> Option<HitTarget> {
        self.hit_grid
            .get(x, y)
            .and_then(|index| self.hit_targets.get(index).copied())
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    pub fn scroll(&self) -> &PageScroll {
        &self.scroll
    }

    pub fn lightbox(&self) -> &Lightbox {
        &self.lightbox
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn scheduler(&self) -> &RevealScheduler {
        &self.scheduler
    }

    pub fn typed(&self) -> &TypedText {
        &self.typed
    }

    /// Hero parallax at the current scroll position.
    pub fn parallax(&self) -> ParallaxOffsets {
        ParallaxOffsets::at(self.scrub.progress(self.scroll.offset()))
    }

    /// The section the viewport currently sits in (for the nav line).
    pub fn active_section(&self) -> SectionKind {
        self.layout.section_at(self.scroll.offset())
    }

    /// Tear down: stop the scroll-lock effect and drop every pending
    /// observation and in-flight tween. Nothing fires afterwards. Called
    /// on shutdown; harmless to skip since the session owns all state
    /// anyway.
    pub fn teardown(&mut self) {
        if let Some(unlock) = self.unlock.take() {
            unlock();
        }
        self.scheduler.clear();
        self.timeline.clear();
        self.observed.clear();
    }
}

impl Drop for PageSession {
    fn drop(&mut self) {
        self.teardown();
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::profile;
    use crate::state::keyboard::KeyboardEvent;

    fn session() -> PageSession {
        PageSession::new(profile(), Viewport::new(80, 24), Theme::dark(), 0.0)
    }

    fn key(name: &str) -> InputEvent {
        InputEvent::Key(KeyboardEvent::new(name))
    }

    #[test]
    fn test_hero_intro_starts_on_mount() {
        let s = session();
        assert!(!s.timeline().is_empty());
        assert!(
            s.timeline()
                .sample_for(item_target(SectionKind::Hero, crate::layout::HERO_NAME), 0.0)
                .is_some()
        );
    }

    #[test]
    fn test_sections_watched_on_mount() {
        let s = session();
        // Six non-hero sections, header + body each
        assert!(s.scheduler().is_watched(header_target(SectionKind::Contact)));
        assert!(s.scheduler().is_watched(body_target(SectionKind::Contact)));
        assert!(!s.scheduler().is_watched(header_target(SectionKind::Hero)));
    }

    #[test]
    fn test_scrolling_to_section_reveals_it_once() {
        let mut s = session();

        s.handle_event(key("End"), 1.0);
        assert!(s.scheduler().is_revealed(header_target(SectionKind::Contact)));

        // Leave and come back: nothing re-fires
        s.handle_event(key("Home"), 2.0);
        let tweens_before = s.timeline().len();
        s.handle_event(key("End"), 3.0);
        assert_eq!(s.timeline().len(), tweens_before);
        assert!(s.scheduler().is_revealed(header_target(SectionKind::Contact)));
    }

    #[test]
    fn test_reveal_spawns_item_stagger() {
        let mut s = session();
        let exp_y = s.layout().section(SectionKind::Experience).unwrap().rect.y;
        s.scroll().scroll_to(exp_y);
        s.sync_reveals(1.0);

        let first = item_target(SectionKind::Experience, 0);
        let second = item_target(SectionKind::Experience, 1);
        assert!(s.timeline().sample_for(first, 1.0).is_some());
        assert!(s.timeline().sample_for(second, 1.0).is_some());

        // The second card starts later than the first
        let t = 1.0 + (ITEM_STAGGER + CARD_DURATION * 0.5) as f64;
        let first_state = s.timeline().sample_for(first, t).unwrap();
        let second_state = s.timeline().sample_for(second, t).unwrap();
        assert!(first_state.opacity > second_state.opacity);
    }

    #[test]
    fn test_quit_key() {
        let mut s = session();
        assert!(s.is_running());
        s.handle_event(key("q"), 0.0);
        assert!(!s.is_running());
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut s = session();
        s.handle_event(
            InputEvent::Key(KeyboardEvent::with_modifiers("c", Modifiers::ctrl())),
            0.0,
        );
        assert!(!s.is_running());
    }

    #[test]
    fn test_escape_dismisses_only() {
        let mut s = session();
        s.open_certificate(0);
        assert!(s.lightbox().is_open());

        s.handle_event(key("Escape"), 0.0);
        assert!(!s.lightbox().is_open());
        assert!(s.is_running());

        // Escape with nothing open is a no-op
        s.handle_event(key("Escape"), 0.0);
        assert!(s.is_running());
    }

    #[test]
    fn test_lightbox_locks_scrolling() {
        let mut s = session();
        s.open_certificate(0);

        let before = s.scroll().offset();
        s.handle_event(key("ArrowDown"), 0.0);
        s.handle_event(key("End"), 0.0);
        assert_eq!(s.scroll().offset(), before);

        s.handle_event(key("Escape"), 0.0);
        s.handle_event(key("ArrowDown"), 1.0);
        assert!(s.scroll().offset() > before);
    }

    #[test]
    fn test_jump_keys_land_on_sections() {
        let mut s = session();
        s.handle_event(key("3"), 0.0);
        let exp = s.layout().section(SectionKind::Experience).unwrap();
        assert_eq!(s.scroll().offset(), exp.rect.y.min(s.scroll().max_scroll()));
        assert_eq!(s.active_section(), SectionKind::Experience);
    }

    #[test]
    fn test_click_routing_through_hit_grid() {
        let mut s = session();
        s.set_hit_regions(&[(10, 5, 6, 3, HitTarget::CertThumb(1))]);

        s.handle_event(
            InputEvent::Mouse(MouseEvent::down(MouseButton::Left, 12, 6)),
            0.0,
        );
        assert_eq!(s.lightbox().current().unwrap().title, s.profile().certifications[1].name);

        // A click outside any region does nothing further
        s.handle_event(
            InputEvent::Mouse(MouseEvent::down(MouseButton::Left, 0, 0)),
            0.0,
        );
        assert!(s.lightbox().is_open());
    }

    #[test]
    fn test_overlay_regions_cover_page_regions() {
        let mut s = session();
        // Page thumb painted first, overlay painted over it
        s.set_hit_regions(&[
            (0, 0, 20, 20, HitTarget::CertThumb(0)),
            (0, 0, 20, 20, HitTarget::LightboxBackdrop),
            (5, 5, 10, 10, HitTarget::LightboxContent),
        ]);
        s.open_certificate(2);

        // Click on the panel: consumed, stays open
        s.handle_event(
            InputEvent::Mouse(MouseEvent::down(MouseButton::Left, 8, 8)),
            0.0,
        );
        assert!(s.lightbox().is_open());
        assert_eq!(s.lightbox().current().unwrap().title, s.profile().certifications[2].name);

        // Click on the backdrop: closes
        s.handle_event(
            InputEvent::Mouse(MouseEvent::down(MouseButton::Left, 1, 1)),
            0.0,
        );
        assert!(!s.lightbox().is_open());
    }

    #[test]
    fn test_wheel_scrolls_and_syncs() {
        let mut s = session();
        s.handle_event(
            InputEvent::Mouse(MouseEvent::scroll(0, 0, ScrollDirection::Down, 2)),
            0.0,
        );
        assert_eq!(s.scroll().offset(), 2.0 * WHEEL_SCROLL);
    }

    #[test]
    fn test_resize_keeps_revealed_sections() {
        let mut s = session();
        s.handle_event(key("End"), 1.0);
        assert!(s.scheduler().is_revealed(header_target(SectionKind::Contact)));

        s.resize(120, 40, 2.0);
        assert!(s.scheduler().is_revealed(header_target(SectionKind::Contact)));
        assert_eq!(s.viewport(), Viewport::new(120, 40));
    }

    #[test]
    fn test_parallax_follows_scroll() {
        let mut s = session();
        let rest = s.parallax();
        assert_eq!(rest.content_dy, 0.0);

        s.handle_event(key("PageDown"), 0.0);
        let moved = s.parallax();
        assert!(moved.content_dy < 0.0);
        assert!(moved.portrait_dy > moved.content_dy);
    }

    #[test]
    fn test_teardown_suppresses_pending_reveals() {
        let mut s = session();
        s.teardown();

        s.handle_event(key("End"), 1.0);
        assert!(!s.scheduler().is_revealed(header_target(SectionKind::Contact)));
        assert!(s.timeline().is_empty());
    }

    #[test]
    fn test_tick_prunes_finished_tweens() {
        let mut s = session();
        assert!(!s.timeline().is_empty());
        s.tick(1000.0);
        assert!(s.timeline().is_empty());
    }
}
