//! Lightbox Module - Certificate overlay state
//!
//! A single overlay slot holding the currently enlarged certificate, or
//! nothing. Activation is an unconditional write, so activating while
//! another certificate is already shown simply replaces it. Dismissal
//! writes `None` and is idempotent; Escape, the close button, and the
//! backdrop all funnel into the same dismiss path.
//!
//! The page scroll lock mirrors the overlay: an effect watches the
//! selection signal and assigns `selection.is_some()` to the lock flag.
//! Because the lock is a plain boolean and the effect is the only writer,
//! no sequence of open/dismiss calls can leave the page stuck.
//!
//! # API
//!
//! - `Lightbox::open` - Show a certificate (replaces any current one)
//! - `Lightbox::dismiss` - Close the overlay (idempotent)
//! - `Lightbox::handle_hit` - Route an overlay click by hit target
//! - `Lightbox::install_scroll_lock` - Bind the scroll lock to the overlay

use spark_signals::{Signal, effect, signal};

use super::mouse::HitTarget;
use super::scroll::PageScroll;
use crate::content::Certification;

// =============================================================================
// LIGHTBOX ITEM
// =============================================================================

/// Snapshot of the certificate shown in the overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct LightboxItem {
    pub image: String,
    pub title: String,
    pub issuer: String,
}

impl LightboxItem {
    pub fn from_certification(cert: &Certification) -> Self {
        Self {
            image: cert.image.to_string(),
            title: cert.name.to_string(),
            issuer: cert.organization.to_string(),
        }
    }
}

// =============================================================================
// LIGHTBOX
// =============================================================================

/// Overlay state: at most one certificate enlarged at a time.
#[derive(Clone)]
pub struct Lightbox {
    selection: Signal<Option<LightboxItem>>,
}

impl Lightbox {
    pub fn new() -> Self {
        Self {
            selection: signal(None),
        }
    }

    /// Show a certificate. Replaces whatever is currently shown; the
    /// latest activation always wins.
    pub fn open(&self, item: LightboxItem) {
        self.selection.set(Some(item));
    }

    /// Close the overlay. Safe to call when nothing is shown.
    pub fn dismiss(&self) {
        self.selection.set(None);
    }

    pub fn is_open(&self) -> bool {
        self.selection.get().is_some()
    }

    /// The currently shown certificate, if any.
    pub fn current(&self) -> Option<LightboxItem> {
        self.selection.get()
    }

    pub fn selection_signal(&self) -> Signal<Option<LightboxItem>> {
        self.selection.clone()
    }

    /// Route a click that landed on an overlay region. Returns true if
    /// the click was consumed here.
    ///
    /// Clicks on the panel body are consumed without closing; only the
    /// close button and the backdrop dismiss.
    pub fn handle_hit(&self, target: HitTarget) -> bool {
        match target {
            HitTarget::LightboxContent => true,
            HitTarget::LightboxClose | HitTarget::LightboxBackdrop => {
                self.dismiss();
                true
            }
            HitTarget::CertThumb(_) => false,
        }
    }

    /// Bind the page scroll lock to the overlay. Returns a stop function
    /// that tears the binding down.
    pub fn install_scroll_lock(&self, scroll: &PageScroll) -> impl FnOnce() + use<> {
        let selection = self.selection.clone();
        let scroll = scroll.clone();
        effect(move || {
            scroll.set_locked(selection.get().is_some());
        })
    }
}

impl Default for Lightbox {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn item(title: &str) -> LightboxItem {
        LightboxItem {
            image: format!("assets/images/{}.jpg", title),
            title: title.to_string(),
            issuer: "Cisco".to_string(),
        }
    }

    #[test]
    fn test_starts_closed() {
        let lightbox = Lightbox::new();
        assert!(!lightbox.is_open());
        assert_eq!(lightbox.current(), None);
    }

    #[test]
    fn test_open_then_dismiss() {
        let lightbox = Lightbox::new();

        lightbox.open(item("ccna"));
        assert!(lightbox.is_open());
        assert_eq!(lightbox.current().unwrap().title, "ccna");

        lightbox.dismiss();
        assert!(!lightbox.is_open());
    }

    #[test]
    fn test_latest_activation_wins() {
        let lightbox = Lightbox::new();

        lightbox.open(item("first"));
        lightbox.open(item("second"));

        assert_eq!(lightbox.current().unwrap().title, "second");

        // One dismiss closes it fully, not back to "first"
        lightbox.dismiss();
        assert!(!lightbox.is_open());
    }

    #[test]
    fn test_dismiss_is_idempotent() {
        let lightbox = Lightbox::new();

        lightbox.dismiss();
        assert!(!lightbox.is_open());

        lightbox.open(item("ccna"));
        lightbox.dismiss();
        lightbox.dismiss();
        lightbox.dismiss();
        assert!(!lightbox.is_open());
    }

    #[test]
    fn test_scroll_lock_mirrors_overlay() {
        let lightbox = Lightbox::new();
        let scroll = PageScroll::new(100.0);
        let stop = lightbox.install_scroll_lock(&scroll);

        assert!(!scroll.is_locked());

        lightbox.open(item("ccna"));
        assert!(scroll.is_locked());
        assert!(!scroll.scroll_by(10.0));

        lightbox.dismiss();
        assert!(!scroll.is_locked());
        assert!(scroll.scroll_by(10.0));

        stop();
    }

    #[test]
    fn test_scroll_lock_survives_unbalanced_calls() {
        let lightbox = Lightbox::new();
        let scroll = PageScroll::new(100.0);
        let stop = lightbox.install_scroll_lock(&scroll);

        // Replace without dismissing, then dismiss repeatedly. A counter
        // would wedge here; the boolean does not.
        lightbox.open(item("a"));
        lightbox.open(item("b"));
        lightbox.dismiss();
        lightbox.dismiss();

        assert!(!scroll.is_locked());
        assert!(scroll.scroll_by(5.0));

        stop();
    }

    #[test]
    fn test_hit_routing() {
        let lightbox = Lightbox::new();
        lightbox.open(item("ccna"));

        // Panel body: consumed, stays open
        assert!(lightbox.handle_hit(HitTarget::LightboxContent));
        assert!(lightbox.is_open());

        // Backdrop: consumed, closes
        assert!(lightbox.handle_hit(HitTarget::LightboxBackdrop));
        assert!(!lightbox.is_open());

        lightbox.open(item("ccna"));
        assert!(lightbox.handle_hit(HitTarget::LightboxClose));
        assert!(!lightbox.is_open());

        // Page targets are not ours
        assert!(!lightbox.handle_hit(HitTarget::CertThumb(0)));
    }
}
