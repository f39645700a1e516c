//! Mouse Module - Mouse events and hit testing
//!
//! Mouse clicks are resolved against a hit grid: a screen-sized buffer in
//! which each cell holds the index of the hit region painted there (or
//! nothing). Regions are painted per frame in draw order, back to front,
//! so a region painted over another wins its cells and a click on it never
//! reaches what lies underneath.
//!
//! # API
//!
//! - `MouseEvent` - A mouse action with position, button, and scroll info
//! - `HitGrid` - Screen-space region index buffer
//! - `HitTarget` - What a hit region resolves to

use super::keyboard::Modifiers;

// =============================================================================
// MOUSE EVENT TYPES
// =============================================================================

/// Type of mouse action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseAction {
    Down,
    Up,
    Move,
    Drag,
    Scroll,
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    #[default]
    None,
}

/// Scroll direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
    Left,
    Right,
}

/// Scroll event details
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollInfo {
    pub direction: ScrollDirection,
    pub delta: u16,
}

/// A mouse event with position and button state.
#[derive(Debug, Clone, PartialEq)]
pub struct MouseEvent {
    pub action: MouseAction,
    pub button: MouseButton,
    pub x: u16,
    pub y: u16,
    pub modifiers: Modifiers,
    pub scroll: Option<ScrollInfo>,
}

impl MouseEvent {
    pub fn new(action: MouseAction, button: MouseButton, x: u16, y: u16) -> Self {
        Self {
            action,
            button,
            x,
            y,
            modifiers: Modifiers::none(),
            scroll: None,
        }
    }

    /// Create a scroll event
    pub fn scroll(x: u16, y: u16, direction: ScrollDirection, delta: u16) -> Self {
        Self {
            action: MouseAction::Scroll,
            button: MouseButton::None,
            x,
            y,
            modifiers: Modifiers::none(),
            scroll: Some(ScrollInfo { direction, delta }),
        }
    }

    pub fn down(button: MouseButton, x: u16, y: u16) -> Self {
        Self::new(MouseAction::Down, button, x, y)
    }

    pub fn up(button: MouseButton, x: u16, y: u16) -> Self {
        Self::new(MouseAction::Up, button, x, y)
    }
}

// =============================================================================
// HIT TARGETS
// =============================================================================

/// What a painted hit region resolves to when clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// A certificate thumbnail on the page (index into the certification
    /// list).
    CertThumb(usize),
    /// The lightbox panel itself. Clicks land here and go no further.
    LightboxContent,
    /// The lightbox close button.
    LightboxClose,
    /// The dimmed area around the lightbox panel.
    LightboxBackdrop,
}

// =============================================================================
// HIT GRID
// =============================================================================

const EMPTY_CELL: usize = usize::MAX;

/// Screen-space buffer mapping each cell to a hit region index.
#[derive(Debug, Clone)]
pub struct HitGrid {
    width: u16,
    height: u16,
    cells: Vec<usize>,
}

impl HitGrid {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![EMPTY_CELL; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize the grid, clearing all cells.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.cells = vec![EMPTY_CELL; width as usize * height as usize];
    }

    /// Clear all cells without resizing.
    pub fn clear(&mut self) {
        self.cells.fill(EMPTY_CELL);
    }

    pub fn set(&mut self, x: u16, y: u16, index: usize) {
        if x < self.width && y < self.height {
            self.cells[y as usize * self.width as usize + x as usize] = index;
        }
    }

    /// Paint a rectangle with a region index. Later paints overwrite
    /// earlier ones.
    pub fn fill_rect(&mut self, x: u16, y: u16, width: u16, height: u16, index: usize) {
        let x_end = (x + width).min(self.width);
        let y_end = (y + height).min(self.height);
        for row in y..y_end {
            for col in x..x_end {
                self.cells[row as usize * self.width as usize + col as usize] = index;
            }
        }
    }

    /// Region index at the given cell, if any.
    pub fn get(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let cell = self.cells[y as usize * self.width as usize + x as usize];
        if cell == EMPTY_CELL { None } else { Some(cell) }
    }
}

// =============================================================================
// TESTS
// =============================================================================
