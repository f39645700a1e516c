//! Core types for folio-tui.
//!
//! Geometry is measured in terminal cells, with the page laid out as one
//! long vertical document. The viewport is the window `[scroll_top,
//! scroll_top + viewport_height)` over that document; visibility fractions
//! are computed against it.

// =============================================================================
// Target Identity
// =============================================================================

/// Opaque handle for a revealable content block.
///
/// Allocated by the page session at mount; stable for the session lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TargetId(pub u64);

// =============================================================================
// Viewport
// =============================================================================

/// Terminal viewport dimensions (columns x rows).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

// =============================================================================
// Rect
// =============================================================================

/// Rectangle in page coordinates (cell units, f32 for layout math).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Bottom edge (exclusive).
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Fraction of this rect's vertical extent inside the viewport window,
    /// in `[0, 1]`.
    ///
    /// A zero-height rect counts as fully visible while its top row is in
    /// the window, so degenerate blocks still reveal.
    pub fn visible_fraction(&self, scroll_top: f32, viewport_height: f32) -> f32 {
        if self.height <= 0.0 {
            let in_window = self.y >= scroll_top && self.y < scroll_top + viewport_height;
            return if in_window { 1.0 } else { 0.0 };
        }

        let top = self.y.max(scroll_top);
        let bottom = self.bottom().min(scroll_top + viewport_height);
        let overlap = (bottom - top).max(0.0);

        (overlap / self.height).clamp(0.0, 1.0)
    }

    /// Whether a cell coordinate falls inside this rect.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.bottom()
    }
}

// =============================================================================
// Text Attributes (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Rendered text attributes as a bitfield.
    ///
    /// Combine with bitwise OR: `Attr::BOLD | Attr::ITALIC`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Attr: u8 {
        const NONE = 0;
        const BOLD = 1 << 0;
        const DIM = 1 << 1;
        const ITALIC = 1 << 2;
        const UNDERLINE = 1 << 3;
    }
}

// =============================================================================
// Tests
// =============================================================================
