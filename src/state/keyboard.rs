//! Keyboard Module - Key events and binding tables
//!
//! Keyboard input is routed through an explicit binding table: each entry
//! maps a key name (plus required modifiers) to an action value. The table
//! is data, so the full set of bindings can be listed in a help line and
//! inspected in tests.
//!
//! # API
//!
//! - `KeyboardEvent` - A key press/release with modifiers
//! - `Modifiers` - Ctrl/Alt/Shift state
//! - `KeyMap<A>` - Ordered key → action binding table
//!
//! # Example
//!
//! ```ignore
//! use folio_tui::state::keyboard::{KeyMap, KeyboardEvent};
//!
//! #[derive(Clone, Copy, PartialEq, Debug)]
//! enum Action { Quit, Up }
//!
//! let mut keys = KeyMap::new();
//! keys.bind("q", Action::Quit);
//! keys.bind("ArrowUp", Action::Up);
//!
//! assert_eq!(keys.lookup(&KeyboardEvent::new("q")), Some(Action::Quit));
//! ```

// =============================================================================
// MODIFIERS
// =============================================================================

/// Modifier key state for keyboard and mouse events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

impl Modifiers {
    /// No modifiers pressed
    pub fn none() -> Self {
        Self::default()
    }

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Default::default()
        }
    }

    pub fn alt() -> Self {
        Self {
            alt: true,
            ..Default::default()
        }
    }

    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Default::default()
        }
    }
}

/// Key event state (press, repeat, release)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyState {
    #[default]
    Press,
    Repeat,
    Release,
}

// =============================================================================
// KEYBOARD EVENT
// =============================================================================

/// A keyboard event with key name, modifiers, and state.
///
/// Key names follow the DOM convention: single characters for printable
/// keys, names like "Escape", "ArrowUp", "PageDown" for the rest.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyboardEvent {
    pub key: String,
    pub modifiers: Modifiers,
    pub state: KeyState,
}

impl KeyboardEvent {
    /// Create a plain key press
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            modifiers: Modifiers::none(),
            state: KeyState::Press,
        }
    }

    /// Create with modifiers
    pub fn with_modifiers(key: impl Into<String>, modifiers: Modifiers) -> Self {
        Self {
            key: key.into(),
            modifiers,
            state: KeyState::Press,
        }
    }

    /// Is this a press or repeat (not a release)?
    pub fn is_press(&self) -> bool {
        matches!(self.state, KeyState::Press | KeyState::Repeat)
    }
}

// =============================================================================
// KEY MAP
// =============================================================================

/// One entry of a [`KeyMap`].
#[derive(Debug, Clone, PartialEq)]
pub struct Binding<A> {
    pub key: String,
    pub modifiers: Modifiers,
    pub action: A,
}

/// Ordered key → action binding table.
///
/// Lookup matches the key name exactly and requires the event's ctrl/alt
/// state to equal the binding's. Shift is ignored for single-character
/// keys, where the character itself already carries it.
#[derive(Debug, Clone, Default)]
pub struct KeyMap<A> {
    bindings: Vec<Binding<A>>,
}

impl<A: Copy> KeyMap<A> {
    pub fn new() -> Self {
        Self {
            bindings: Vec::new(),
        }
    }

    /// Bind a key (no modifiers) to an action. Rebinding a key replaces
    /// the previous entry.
    pub fn bind(&mut self, key: impl Into<String>, action: A) {
        self.bind_with(key, Modifiers::none(), action);
    }

    /// Bind a key with modifiers to an action.
    pub fn bind_with(&mut self, key: impl Into<String>, modifiers: Modifiers, action: A) {
        let key = key.into();
        self.bindings
            .retain(|b| !(b.key == key && b.modifiers == modifiers));
        self.bindings.push(Binding {
            key,
            modifiers,
            action,
        });
    }

    /// Look up the action for an event. Releases never match.
    pub fn lookup(&self, event: &KeyboardEvent) -> Option<A> {
        if !event.is_press() {
            return None;
        }
        let ignore_shift = event.key.chars().count() == 1;
        self.bindings
            .iter()
            .find(|b| {
                b.key == event.key
                    && b.modifiers.ctrl == event.modifiers.ctrl
                    && b.modifiers.alt == event.modifiers.alt
                    && (ignore_shift || b.modifiers.shift == event.modifiers.shift)
            })
            .map(|b| b.action)
    }

    /// All bindings in declaration order.
    pub fn bindings(&self) -> &[Binding<A>] {
        &self.bindings
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

// =============================================================================
// TESTS
// =============================================================================
