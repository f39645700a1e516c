//! folio-tui binary - run the portfolio viewer fullscreen.

use std::io;
use std::time::{Duration, Instant};

use crossterm::terminal::{disable_raw_mode, enable_raw_mode, size};

use folio_tui::content::profile;
use folio_tui::render::{TermRenderer, build_frame};
use folio_tui::session::PageSession;
use folio_tui::state::input::{disable_mouse, enable_mouse, poll_event};
use folio_tui::theme::Theme;
use folio_tui::types::Viewport;

const FRAME_INTERVAL: Duration = Duration::from_millis(16);

fn main() -> io::Result<()> {
    let (width, height) = size()?;
    enable_raw_mode()?;
    let mut renderer = TermRenderer::new();
    renderer.enter_fullscreen()?;
    enable_mouse()?;

    let result = run(Viewport::new(width, height), &mut renderer);

    // Restore the terminal even when the loop errored.
    let _ = disable_mouse();
    let _ = renderer.exit_fullscreen();
    let _ = disable_raw_mode();
    result
}

fn run(viewport: Viewport, renderer: &mut TermRenderer) -> io::Result<()> {
    let start = Instant::now();
    let mut session = PageSession::new(profile(), viewport, Theme::dark(), 0.0);

    while session.is_running() {
        if let Some(event) = poll_event(FRAME_INTERVAL)? {
            let now = start.elapsed().as_secs_f64();
            session.handle_event(event, now);
        }

        let now = start.elapsed().as_secs_f64();
        session.tick(now);

        let frame = build_frame(&session, now);
        session.set_hit_regions(&frame.hit_regions);
        renderer.render(&frame)?;
    }

    Ok(())
}
