//! Render Module - Frame building and terminal output
//!
//! Rendering is split in two: `build_frame` turns a session into a
//! `Frame` (a vector of styled rows plus the hit regions for the frame),
//! and `TermRenderer` writes frames to the terminal, diffing against the
//! previous frame so only changed rows are re-emitted.
//!
//! Frame building is pure: it reads the session and a clock, touches no
//! terminal, and is exercised directly by tests.
//!
//! # API
//!
//! - `build_frame` - Session + clock to a row frame
//! - `Frame` / `Row` - The frame model
//! - `TermRenderer` - Row-diffed terminal output

use std::io::{self, Write, stdout};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Attribute, Color, Print, SetAttribute, SetForegroundColor};
use crossterm::terminal::{
    BeginSynchronizedUpdate, Clear, ClearType, EndSynchronizedUpdate, EnterAlternateScreen,
    LeaveAlternateScreen,
};

use crate::anim::VisualState;
use crate::content::Profile;
use crate::layout::{HERO_BUTTONS, HERO_CONTACT, HERO_DESC, HERO_GREETING, HERO_NAME, HERO_STATS,
    HERO_TITLE, SectionKind, hero_portrait_index};
use crate::scrub::ParallaxOffsets;
use crate::session::{PageSession, body_target, header_target, item_target};
use crate::state::mouse::HitTarget;
use crate::theme::Theme;
use crate::types::{Attr, Rect, TargetId};

// Content sits inside a small left margin.
const MARGIN: u16 = 2;

// =============================================================================
// FRAME MODEL
// =============================================================================

/// One terminal row: text plus a single foreground color and attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub text: String,
    pub fg: Color,
    pub attrs: Attr,
}

impl Row {
    pub fn new(text: impl Into<String>, fg: Color) -> Self {
        Self {
            text: text.into(),
            fg,
            attrs: Attr::NONE,
        }
    }

    pub fn styled(text: impl Into<String>, fg: Color, attrs: Attr) -> Self {
        Self {
            text: text.into(),
            fg,
            attrs,
        }
    }

    pub fn blank() -> Self {
        Self::new("", Color::Reset)
    }
}

/// A fully built frame: rows top to bottom, plus the clickable regions
/// painted while building (in paint order, later wins).
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub width: u16,
    pub height: u16,
    pub rows: Vec<Row>,
    pub hit_regions: Vec<(u16, u16, u16, u16, HitTarget)>,
}

impl Frame {
    fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            rows: vec![Row::blank(); height as usize],
            hit_regions: Vec::new(),
        }
    }

    /// Row text at `y`, for assertions.
    pub fn row_text(&self, y: u16) -> &str {
        self.rows
            .get(y as usize)
            .map(|r| r.text.as_str())
            .unwrap_or("")
    }

    /// First row containing `needle`.
    pub fn find_row(&self, needle: &str) -> Option<u16> {
        self.rows
            .iter()
            .position(|r| r.text.contains(needle))
            .map(|i| i as u16)
    }

    fn put(&mut self, y: i32, row: Row) {
        if y >= 0 && (y as usize) < self.rows.len() {
            self.rows[y as usize] = row;
        }
    }
}

// =============================================================================
// TEXT HELPERS
// =============================================================================

/// Greedy word wrap to `width` columns, at most `max_lines` lines.
fn wrap(text: &str, width: usize, max_lines: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.chars().count() + 1 + word.chars().count() > width {
            lines.push(std::mem::take(&mut current));
            if lines.len() == max_lines {
                return lines;
            }
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() && lines.len() < max_lines {
        lines.push(current);
    }
    lines
}

fn indent(n: u16) -> String {
    " ".repeat(n as usize)
}

// =============================================================================
// BLOCK LINES
// =============================================================================

/// One line of a content block, before positioning.
struct Line {
    text: String,
    fg: Color,
    attrs: Attr,
}

impl Line {
    fn new(text: impl Into<String>, fg: Color) -> Self {
        Self {
            text: text.into(),
            fg,
            attrs: Attr::NONE,
        }
    }

    fn styled(text: impl Into<String>, fg: Color, attrs: Attr) -> Self {
        Self {
            text: text.into(),
            fg,
            attrs,
        }
    }
}

fn header_lines(kind: SectionKind, theme: &Theme) -> Vec<Line> {
    let title = match kind {
        SectionKind::About => "About Me",
        SectionKind::Experience => "Work Experience",
        SectionKind::Education => "Education & Languages",
        SectionKind::Certifications => "Certifications",
        SectionKind::Skills => "Skills",
        SectionKind::Contact => "Get In Touch",
        SectionKind::Hero => "",
    };
    vec![
        Line::styled(title, theme.accent, Attr::BOLD),
        Line::new("─".repeat(title.chars().count().max(4)), theme.border),
    ]
}

fn hero_item_lines(
    profile: &Profile,
    index: usize,
    width: usize,
    typed_title: &str,
    theme: &Theme,
) -> Vec<Line> {
    let portrait = hero_portrait_index(profile);
    if index == HERO_GREETING {
        return vec![Line::new(profile.greeting, theme.text_muted)];
    }
    if index == HERO_NAME {
        let name = profile.name.to_uppercase();
        return vec![
            Line::styled(name.clone(), theme.text_bright, Attr::BOLD),
            Line::new("═".repeat(name.chars().count()), theme.accent),
        ];
    }
    if index == HERO_TITLE {
        return vec![Line::styled(
            format!("{}▌", typed_title),
            theme.accent,
            Attr::BOLD,
        )];
    }
    if index == HERO_DESC {
        return wrap(profile.summary, width, 3)
            .into_iter()
            .map(|l| Line::new(l, theme.text))
            .collect();
    }
    if index == HERO_CONTACT {
        return profile
            .contact
            .iter()
            .map(|c| Line::new(format!("{}: {}", c.label, c.value), theme.text_muted))
            .collect();
    }
    if index == HERO_BUTTONS {
        return vec![Line::styled(
            "[ View Experience ]  [ Get In Touch ]",
            theme.accent,
            Attr::BOLD,
        )];
    }
    if index == portrait {
        return vec![
            Line::new("┌────────────┐", theme.border),
            Line::new("│  ▒▒▒▒▒▒▒▒  │", theme.border),
            Line::new("│  ▒ FOTO ▒  │", theme.border),
            Line::new("│  ▒▒▒▒▒▒▒▒  │", theme.border),
            Line::new("└────────────┘", theme.border),
        ];
    }
    // Stat rows
    let stat_index = index - HERO_STATS;
    match profile.stats.get(stat_index) {
        Some(stat) => vec![Line::new(
            format!("{} {}", stat.value, stat.label),
            theme.text,
        )],
        None => Vec::new(),
    }
}

fn section_item_lines(
    profile: &Profile,
    kind: SectionKind,
    index: usize,
    width: usize,
    theme: &Theme,
) -> Vec<Line> {
    match kind {
        SectionKind::About => {
            if let Some((title, desc)) = profile.features.get(index) {
                vec![
                    Line::styled(format!("◆ {}", title), theme.text_bright, Attr::BOLD),
                    Line::new(format!("  {}", desc), theme.text_muted),
                ]
            } else {
                // Trailing block: the skill tag cloud
                tag_cloud_lines(&profile.skills, width, theme)
            }
        }
        SectionKind::Experience => {
            let Some(job) = profile.experience.get(index) else {
                return Vec::new();
            };
            let badge = if job.current { " ● current" } else { "" };
            let mut lines = vec![
                Line::styled(job.title, theme.accent, Attr::BOLD),
                Line::new(format!("{} · {}{}", job.company, job.period, badge), theme.text),
                Line::new(job.location, theme.text_muted),
            ];
            lines.extend(
                wrap(job.description, width, 2)
                    .into_iter()
                    .map(|l| Line::new(l, theme.text_muted)),
            );
            lines.push(Line::new(
                job.highlights
                    .iter()
                    .map(|h| format!("• {}", h))
                    .collect::<Vec<_>>()
                    .join("  "),
                theme.text,
            ));
            lines
        }
        SectionKind::Education => {
            if let Some(edu) = profile.education.get(index) {
                vec![
                    Line::styled(edu.degree, theme.text_bright, Attr::BOLD),
                    Line::new(edu.field, theme.text),
                    Line::new(edu.institution, theme.text_muted),
                ]
            } else {
                profile
                    .languages
                    .iter()
                    .map(|l| Line::new(format!("{} · {}", l.name, l.level), theme.text))
                    .collect()
            }
        }
        SectionKind::Certifications => {
            let Some(cert) = profile.certifications.get(index) else {
                return Vec::new();
            };
            vec![
                Line::styled(cert.name, theme.text_bright, Attr::BOLD),
                Line::new(cert.subtitle, theme.text),
                Line::new(format!("{} · {}", cert.organization, cert.year), theme.text_muted),
                Line::styled("[ View Certificate ]", theme.accent, Attr::UNDERLINE),
            ]
        }
        SectionKind::Skills => {
            if let Some(skill) = profile.core_skills.get(index) {
                let filled = (skill.proficiency as usize) / 10;
                let bar = format!("{}{}", "█".repeat(filled), "░".repeat(10 - filled.min(10)));
                vec![
                    Line::styled(skill.name, theme.text_bright, Attr::BOLD),
                    Line::new(format!("{} {}%", bar, skill.proficiency), theme.accent),
                ]
            } else {
                tag_cloud_lines(&profile.skills, width, theme)
            }
        }
        SectionKind::Contact => {
            let Some(contact) = profile.contact.get(index) else {
                return Vec::new();
            };
            let mut lines = vec![Line::styled(contact.label, theme.accent, Attr::BOLD)];
            let value = match contact.link {
                Some(link) => format!("{}  ({})", contact.value, link),
                None => contact.value.to_string(),
            };
            lines.push(Line::new(value, theme.text));
            lines
        }
        SectionKind::Hero => Vec::new(),
    }
}

fn tag_cloud_lines(skills: &[&str], width: usize, theme: &Theme) -> Vec<Line> {
    let joined = skills
        .iter()
        .map(|s| format!("[{}]", s))
        .collect::<Vec<_>>()
        .join(" ");
    wrap(&joined, width, 4)
        .into_iter()
        .map(|l| Line::new(l, theme.text_muted))
        .collect()
}

// =============================================================================
// FRAME BUILDING
// =============================================================================

/// Sample the visual state for a target: an active tween wins, a revealed
/// or always-visible target rests, anything else is hidden.
fn visual_for(session: &PageSession, target: TargetId, revealed: bool, now: f64) -> Option<VisualState> {
    if let Some(state) = session.timeline().sample_for(target, now) {
        if state.opacity < 0.05 {
            return None;
        }
        return Some(state);
    }
    if revealed { Some(VisualState::RESTING) } else { None }
}

fn place_block(
    frame: &mut Frame,
    rect: Rect,
    scroll_top: f32,
    visual: VisualState,
    lines: Vec<Line>,
) {
    let dim = visual.opacity < 0.55;
    let shift = visual.dy.round() as i32;
    let slide = visual.dx.round() as i32;
    let shrink = ((rect.width * (1.0 - visual.scale)) / 2.0).round().max(0.0) as u16;
    let left = (MARGIN as i32 + slide).max(0) as u16 + shrink;

    for (i, line) in lines.into_iter().enumerate() {
        let y = (rect.y - scroll_top) as i32 + shift + i as i32;
        let mut attrs = line.attrs;
        if dim {
            attrs |= Attr::DIM;
        }
        frame.put(
            y,
            Row::styled(format!("{}{}", indent(left), line.text), line.fg, attrs),
        );
    }
}

fn screen_rect(rect: Rect, scroll_top: f32, frame: &Frame) -> Option<(u16, u16, u16, u16)> {
    let top = (rect.y - scroll_top) as i32;
    let bottom = top + rect.height as i32;
    if bottom <= 0 || top >= frame.height as i32 {
        return None;
    }
    let y = top.max(0) as u16;
    let h = (bottom.min(frame.height as i32) - y as i32).max(0) as u16;
    Some((0, y, frame.width, h))
}

/// Build the frame for the current session state.
pub fn build_frame(session: &PageSession, now: f64) -> Frame {
    let viewport = session.viewport();
    let mut frame = Frame::new(viewport.width, viewport.height);
    let theme = *session.theme();
    let profile = session.profile();
    let scroll_top = session.scroll().offset();
    let text_width = (viewport.width as usize).saturating_sub(MARGIN as usize * 2).max(20);
    let parallax = session.parallax();
    let typed_title = session.typed().visible(now).to_string();

    for section in &session.layout().sections {
        let kind = section.kind;

        if kind == SectionKind::Hero {
            place_hero(
                &mut frame,
                session,
                &typed_title,
                parallax,
                scroll_top,
                text_width,
                now,
            );
            continue;
        }

        // Header
        let revealed = session.scheduler().is_revealed(header_target(kind));
        if let Some(visual) = visual_for(session, header_target(kind), revealed, now) {
            place_block(
                &mut frame,
                section.header,
                scroll_top,
                visual,
                header_lines(kind, &theme),
            );
        }

        // Items
        let body_revealed = session.scheduler().is_revealed(body_target(kind));
        for (i, &item_rect) in section.items.iter().enumerate() {
            let target = item_target(kind, i);
            let Some(visual) = visual_for(session, target, body_revealed, now) else {
                continue;
            };
            place_block(
                &mut frame,
                item_rect,
                scroll_top,
                visual,
                section_item_lines(profile, kind, i, text_width, &theme),
            );

            // Certificates are clickable
            if kind == SectionKind::Certifications && i < profile.certifications.len() {
                if let Some((x, y, w, h)) = screen_rect(item_rect, scroll_top, &frame) {
                    frame.hit_regions.push((x, y, w, h, HitTarget::CertThumb(i)));
                }
            }
        }
    }

    paint_nav(&mut frame, session, &theme);
    paint_status(&mut frame, &theme);

    if let Some(item) = session.lightbox().current() {
        paint_lightbox(&mut frame, &item.title, &item.issuer, &item.image, &theme);
    }

    frame
}

fn place_hero(
    frame: &mut Frame,
    session: &PageSession,
    typed_title: &str,
    parallax: ParallaxOffsets,
    scroll_top: f32,
    text_width: usize,
    now: f64,
) {
    let profile = session.profile();
    let theme = *session.theme();
    let Some(hero) = session.layout().section(SectionKind::Hero) else {
        return;
    };
    let portrait = hero_portrait_index(profile);

    for (i, &item_rect) in hero.items.iter().enumerate() {
        let target = item_target(SectionKind::Hero, i);
        let Some(mut visual) = visual_for(session, target, true, now) else {
            continue;
        };
        if i == portrait {
            visual.dy += parallax.portrait_dy;
            visual.scale *= parallax.portrait_scale;
        } else {
            visual.dy += parallax.content_dy;
        }
        place_block(
            frame,
            item_rect,
            scroll_top,
            visual,
            hero_item_lines(profile, i, text_width, typed_title, &theme),
        );
    }
}

fn paint_nav(frame: &mut Frame, session: &PageSession, theme: &Theme) {
    let active = session.active_section();
    let nav = SectionKind::ALL
        .iter()
        .map(|&kind| {
            if kind == active {
                format!("[{}]", kind.label())
            } else {
                kind.label().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" · ");
    frame.put(0, Row::styled(format!(" {}", nav), theme.accent, Attr::BOLD));
}

fn paint_status(frame: &mut Frame, theme: &Theme) {
    let y = frame.height as i32 - 1;
    frame.put(
        y,
        Row::styled(
            " q quit · ↑/↓ scroll · 1-7 jump · click a certificate to view",
            theme.text_muted,
            Attr::DIM,
        ),
    );
}

// =============================================================================
// LIGHTBOX OVERLAY
// =============================================================================

/// Paint the lightbox over the whole frame: every row is replaced, with
/// the panel centered and the rest filled as backdrop. Hit regions go on
/// after the page's, so the overlay owns every cell.
fn paint_lightbox(frame: &mut Frame, title: &str, issuer: &str, image: &str, theme: &Theme) {
    let w = frame.width as usize;
    let panel_w = w.saturating_sub(8).max(20).min(56).min(w);
    let panel_h = 11u16.min(frame.height.saturating_sub(2)).max(5).min(frame.height);
    let panel_x = ((w - panel_w) / 2) as u16;
    let panel_y = frame.height.saturating_sub(panel_h) / 2;

    // Backdrop
    for y in 0..frame.height {
        frame.put(y as i32, Row::styled("·".repeat(w), theme.overlay, Attr::DIM));
    }

    let inner = panel_w.saturating_sub(2);
    let mut panel: Vec<(String, Color, Attr)> = Vec::new();
    panel.push((format!("┌{}┐", "─".repeat(inner)), theme.accent, Attr::NONE));
    let close = format!("{:>width$}", "[✕]", width = inner);
    panel.push((format!("│{}│", close), theme.accent, Attr::BOLD));
    panel.push((
        (format!("│{:^width$}│", title, width = inner)),
        theme.text_bright,
        Attr::BOLD,
    ));
    panel.push((
        (format!("│{:^width$}│", issuer, width = inner)),
        theme.text,
        Attr::NONE,
    ));
    panel.push((format!("│{}│", " ".repeat(inner)), theme.border, Attr::NONE));
    for _ in 0..panel_h.saturating_sub(7) {
        panel.push((
            format!("│{:^width$}│", "▒".repeat(inner.min(24)), width = inner),
            theme.border,
            Attr::NONE,
        ));
    }
    panel.push((
        (format!("│{:^width$}│", image, width = inner)),
        theme.text_muted,
        Attr::DIM,
    ));
    panel.push((format!("└{}┘", "─".repeat(inner)), theme.accent, Attr::NONE));

    for (i, (text, fg, attrs)) in panel.into_iter().enumerate() {
        let y = panel_y as i32 + i as i32;
        frame.put(y, Row::styled(format!("{}{}", indent(panel_x), text), fg, attrs));
    }

    // Overlay hit regions, painted after the page's: backdrop everywhere,
    // panel on top of it, close button on top of the panel.
    frame
        .hit_regions
        .push((0, 0, frame.width, frame.height, HitTarget::LightboxBackdrop));
    frame.hit_regions.push((
        panel_x,
        panel_y,
        panel_w as u16,
        panel_h,
        HitTarget::LightboxContent,
    ));
    frame.hit_regions.push((
        (panel_x + panel_w as u16).saturating_sub(4),
        panel_y + 1,
        3,
        1,
        HitTarget::LightboxClose,
    ));
}

// =============================================================================
// TERMINAL OUTPUT
// =============================================================================

/// Writes frames to the terminal, re-emitting only rows that changed
/// since the previous frame.
pub struct TermRenderer {
    previous: Option<Frame>,
}

impl TermRenderer {
    pub fn new() -> Self {
        Self { previous: None }
    }

    /// Invalidate the previous frame; the next render redraws everything.
    pub fn invalidate(&mut self) {
        self.previous = None;
    }

    pub fn has_previous(&self) -> bool {
        self.previous.is_some()
    }

    /// Render a frame, writing only changed rows.
    pub fn render(&mut self, frame: &Frame) -> io::Result<()> {
        let mut out = stdout();
        queue!(out, BeginSynchronizedUpdate)?;

        let same_size = self
            .previous
            .as_ref()
            .is_some_and(|p| p.width == frame.width && p.height == frame.height);

        for (y, row) in frame.rows.iter().enumerate() {
            let unchanged = same_size
                && self
                    .previous
                    .as_ref()
                    .and_then(|p| p.rows.get(y))
                    .is_some_and(|prev| prev == row);
            if unchanged {
                continue;
            }
            self.emit_row(&mut out, y as u16, row, frame.width)?;
        }

        queue!(out, EndSynchronizedUpdate)?;
        out.flush()?;
        self.previous = Some(frame.clone());
        Ok(())
    }

    fn emit_row(&self, out: &mut impl Write, y: u16, row: &Row, width: u16) -> io::Result<()> {
        queue!(out, MoveTo(0, y), SetAttribute(Attribute::Reset))?;
        if row.attrs.contains(Attr::BOLD) {
            queue!(out, SetAttribute(Attribute::Bold))?;
        }
        if row.attrs.contains(Attr::DIM) {
            queue!(out, SetAttribute(Attribute::Dim))?;
        }
        if row.attrs.contains(Attr::ITALIC) {
            queue!(out, SetAttribute(Attribute::Italic))?;
        }
        if row.attrs.contains(Attr::UNDERLINE) {
            queue!(out, SetAttribute(Attribute::Underlined))?;
        }
        queue!(out, SetForegroundColor(row.fg))?;

        // Pad to the full width so stale cells are cleared.
        let mut text: String = row.text.chars().take(width as usize).collect();
        let pad = (width as usize).saturating_sub(text.chars().count());
        text.push_str(&" ".repeat(pad));
        queue!(out, Print(text))?;
        Ok(())
    }

    /// Enter the alternate screen and hide the cursor.
    pub fn enter_fullscreen(&mut self) -> io::Result<()> {
        let mut out = stdout();
        queue!(
            out,
            EnterAlternateScreen,
            crossterm::cursor::Hide,
            Clear(ClearType::All)
        )?;
        out.flush()?;
        self.invalidate();
        Ok(())
    }

    /// Leave the alternate screen and restore the cursor.
    pub fn exit_fullscreen(&mut self) -> io::Result<()> {
        let mut out = stdout();
        queue!(
            out,
            SetAttribute(Attribute::Reset),
            crossterm::cursor::Show,
            LeaveAlternateScreen
        )?;
        out.flush()
    }
}

impl Default for TermRenderer {
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
    use crate::content::profile;
    use crate::session::PageSession;
    use crate::state::input::InputEvent;
    use crate::state::keyboard::KeyboardEvent;
    use crate::types::Viewport;

    fn session() -> PageSession {
        PageSession::new(profile(), Viewport::new(80, 24), Theme::dark(), 0.0)
    }

    #[test]
    fn test_frame_has_viewport_shape() {
        let s = session();
        let frame = build_frame(&s, 10.0);
        assert_eq!(frame.width, 80);
        assert_eq!(frame.height, 24);
        assert_eq!(frame.rows.len(), 24);
    }

    #[test]
    fn test_hero_visible_after_intro() {
        let s = session();
        let frame = build_frame(&s, 10.0);
        assert!(frame.find_row("HASSAN ZAHID-UL HASSAN").is_some());
    }

    #[test]
    fn test_hero_hidden_at_time_zero() {
        let s = session();
        // Intro delay has not elapsed yet
        let frame = build_frame(&s, 0.0);
        assert!(frame.find_row("HASSAN ZAHID-UL HASSAN").is_none());
    }

    #[test]
    fn test_typed_title_grows() {
        let s = session();
        let early = build_frame(&s, 1.3);
        let late = build_frame(&s, 10.0);
        let early_row = early.find_row("▌").map(|y| early.row_text(y).to_string());
        assert!(early_row.is_some());
        assert!(late.find_row("Operations Coordinator").is_some());
    }

    #[test]
    fn test_unrevealed_sections_are_hidden() {
        let s = session();
        let frame = build_frame(&s, 10.0);
        assert!(frame.find_row("Work Experience").is_none());
    }

    #[test]
    fn test_revealed_section_appears() {
        let mut s = session();
        let exp_y = s.layout().section(SectionKind::Experience).unwrap().rect.y;
        s.scroll().scroll_to(exp_y);
        s.sync_reveals(10.0);

        let frame = build_frame(&s, 20.0);
        assert!(frame.find_row("Work Experience").is_some());
        assert!(frame.find_row("WIYAK").is_some());
    }

    #[test]
    fn test_certificates_get_hit_regions() {
        let mut s = session();
        let certs_y = s
            .layout()
            .section(SectionKind::Certifications)
            .unwrap()
            .rect
            .y;
        s.scroll().scroll_to(certs_y);
        s.sync_reveals(10.0);

        let frame = build_frame(&s, 20.0);
        let thumbs: Vec<_> = frame
            .hit_regions
            .iter()
            .filter(|(_, _, _, _, t)| matches!(t, HitTarget::CertThumb(_)))
            .collect();
        assert_eq!(thumbs.len(), s.profile().certifications.len());
    }

    #[test]
    fn test_lightbox_covers_frame() {
        let mut s = session();
        s.open_certificate(0);
        let frame = build_frame(&s, 10.0);

        let cert = &s.profile().certifications[0];
        assert!(frame.find_row(cert.name).is_some());
        assert!(frame.find_row(cert.image).is_some());
        assert!(frame.find_row("[✕]").is_some());

        // Overlay regions painted after page regions
        let last = frame.hit_regions.last().unwrap();
        assert_eq!(last.4, HitTarget::LightboxClose);
        let backdrop = frame
            .hit_regions
            .iter()
            .position(|r| r.4 == HitTarget::LightboxBackdrop)
            .unwrap();
        let content = frame
            .hit_regions
            .iter()
            .position(|r| r.4 == HitTarget::LightboxContent)
            .unwrap();
        assert!(content > backdrop);
    }

    #[test]
    fn test_overlay_click_routing_end_to_end() {
        let mut s = session();
        s.open_certificate(1);
        let frame = build_frame(&s, 10.0);
        s.set_hit_regions(&frame.hit_regions);

        // Center of the panel: stays open
        let (px, py, pw, ph, _) = *frame
            .hit_regions
            .iter()
            .find(|r| r.4 == HitTarget::LightboxContent)
            .unwrap();
        s.handle_event(
            InputEvent::Mouse(crate::state::mouse::MouseEvent::down(
                crate::state::mouse::MouseButton::Left,
                px + pw / 2,
                py + ph / 2,
            )),
            10.0,
        );
        assert!(s.lightbox().is_open());

        // Corner of the screen: backdrop closes it
        s.handle_event(
            InputEvent::Mouse(crate::state::mouse::MouseEvent::down(
                crate::state::mouse::MouseButton::Left,
                0,
                0,
            )),
            10.0,
        );
        assert!(!s.lightbox().is_open());
    }

    #[test]
    fn test_nav_marks_active_section() {
        let mut s = session();
        let frame = build_frame(&s, 10.0);
        assert!(frame.row_text(0).contains("[Home]"));

        s.handle_event(InputEvent::Key(KeyboardEvent::new("End")), 10.0);
        let frame = build_frame(&s, 20.0);
        assert!(frame.row_text(0).contains("[Contact]"));
    }

    #[test]
    fn test_status_line_present() {
        let s = session();
        let frame = build_frame(&s, 10.0);
        assert!(frame.row_text(23).contains("q quit"));
    }

    #[test]
    fn test_wrap_respects_width() {
        let lines = wrap("one two three four five six seven", 10, 10);
        assert!(lines.iter().all(|l| l.chars().count() <= 10));
        assert_eq!(lines[0], "one two");
    }

    #[test]
    fn test_wrap_caps_lines() {
        let lines = wrap("a b c d e f g h i j k l", 3, 2);
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_renderer_starts_without_previous() {
        let renderer = TermRenderer::new();
        assert!(!renderer.has_previous());
    }
}
