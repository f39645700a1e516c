//! Theme - Color roles for the viewer.
//!
//! A small palette of named roles resolved to crossterm colors. Two
//! presets: `dark` mirrors the site's amber-on-slate look, `terminal`
//! sticks to ANSI colors so the user's terminal theme shows through.

use crossterm::style::Color;

/// Color roles used by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Amber brand color: headings, active nav, buttons.
    pub accent: Color,
    pub text: Color,
    pub text_muted: Color,
    pub text_bright: Color,
    pub background: Color,
    /// Card and overlay panel background.
    pub surface: Color,
    /// Backdrop fill behind the lightbox panel.
    pub overlay: Color,
    pub border: Color,
    pub success: Color,
}

impl Theme {
    /// Dark preset matching the site: amber accent on near-black slate.
    pub fn dark() -> Self {
        Self {
            accent: Color::Rgb {
                r: 0xf4,
                g: 0xbd,
                b: 0x03,
            },
            text: Color::Rgb {
                r: 0xd1,
                g: 0xd5,
                b: 0xdb,
            },
            text_muted: Color::Rgb {
                r: 0x6b,
                g: 0x72,
                b: 0x80,
            },
            text_bright: Color::Rgb {
                r: 0xf9,
                g: 0xfa,
                b: 0xfb,
            },
            background: Color::Rgb {
                r: 0x0a,
                g: 0x0a,
                b: 0x0a,
            },
            surface: Color::Rgb {
                r: 0x17,
                g: 0x17,
                b: 0x1c,
            },
            overlay: Color::Rgb {
                r: 0x05,
                g: 0x05,
                b: 0x05,
            },
            border: Color::Rgb {
                r: 0x2d,
                g: 0x2d,
                b: 0x35,
            },
            success: Color::Rgb {
                r: 0x34,
                g: 0xd3,
                b: 0x99,
            },
        }
    }

    /// ANSI preset that respects the user's terminal colors.
    pub fn terminal() -> Self {
        Self {
            accent: Color::Yellow,
            text: Color::Reset,
            text_muted: Color::DarkGrey,
            text_bright: Color::White,
            background: Color::Reset,
            surface: Color::Reset,
            overlay: Color::Black,
            border: Color::Grey,
            success: Color::Green,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_dark() {
        assert_eq!(Theme::default(), Theme::dark());
    }

    #[test]
    fn test_dark_accent_is_amber() {
        let theme = Theme::dark();
        assert_eq!(
            theme.accent,
            Color::Rgb {
                r: 0xf4,
                g: 0xbd,
                b: 0x03
            }
        );
    }

    #[test]
    fn test_terminal_uses_ansi() {
        let theme = Theme::terminal();
        assert_eq!(theme.accent, Color::Yellow);
        assert_eq!(theme.text, Color::Reset);
    }
}
