//! # folio-tui
//!
//! Terminal portfolio viewer with scroll-driven reveal animations and a
//! certificate lightbox.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals) for the
//! reactive bits (scroll offset, overlay state, scroll lock) and
//! [taffy](https://github.com/DioxusLabs/taffy) for page layout.
//!
//! ## Architecture
//!
//! The page is laid out once per viewport size as a flex column of
//! sections. One scroll offset moves a window over it. Sections below the
//! fold are watched by a reveal scheduler; when enough of a watched block
//! scrolls into view it fires exactly once and its tweens start. The hero
//! scrubs with the scroll position instead of firing.
//!
//! ```text
//! content → layout (taffy) → session (scroll/reveal/lightbox) → frame → terminal
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Core types (Rect, Viewport, TargetId, Attr)
//! - [`content`] - The portfolio data
//! - [`layout`] - Taffy page layout and section geometry
//! - [`anim`] - Eased tweens, stagger, the typewriter title
//! - [`reveal`] - Once-only visibility-triggered reveals
//! - [`scrub`] - Scroll-driven hero parallax
//! - [`state`] - Scroll, keyboard, mouse, lightbox state
//! - [`session`] - Event routing and per-page state ownership
//! - [`render`] - Frame building and diffed terminal output

pub mod anim;
pub mod content;
pub mod layout;
pub mod render;
pub mod reveal;
pub mod scrub;
pub mod session;
pub mod state;
pub mod theme;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use anim::{Ease, Timeline, Transition, Tween, TypedText, VisualState, stagger};

pub use content::{Certification, Profile, profile};

pub use layout::{PageLayout, SectionKind, SectionLayout, compute_page_layout};

pub use reveal::{HEADER_THRESHOLD, ITEM_THRESHOLD, RevealScheduler};

pub use scrub::{ParallaxOffsets, ScrubBinding};

pub use session::{PageSession, SessionAction, default_keymap};

pub use render::{Frame, Row, TermRenderer, build_frame};

pub use state::{
    input::{InputEvent, poll_event, read_event},
    keyboard::{KeyMap, KeyState, KeyboardEvent, Modifiers},
    lightbox::{Lightbox, LightboxItem},
    mouse::{HitGrid, HitTarget, MouseEvent},
    scroll::{PageScroll, WHEEL_SCROLL},
};

pub use theme::Theme;
