//! State Module - Runtime state management systems
//!
//! The interactive state of the viewer:
//!
//! - **Keyboard** - Event types and the key binding table
//! - **Mouse** - Event types, HitGrid, hit targets
//! - **Scroll** - Page scroll offset with lock flag
//! - **Lightbox** - Certificate overlay and its scroll-lock binding
//! - **Input** - crossterm event conversion and polling

pub mod input;
pub mod keyboard;
pub mod lightbox;
pub mod mouse;
pub mod scroll;
