//! Pure view/render functions for the TUI.
//!
//! Functions here take `&AppState`, draw to a ratatui Frame, and never mutate
//! state or return effects.

use ratatui::Frame;

use crate::overlays::OverlayExt;
use crate::state::{AppState, View};
use crate::{auth, landing};

/// Renders the entire TUI to the frame.
pub fn render(app: &AppState, frame: &mut Frame) {
    let state = &app.tui;
    match &state.view {
        View::Landing => landing::render_landing(frame, &state.backdrop, state.banner.as_deref()),
        View::Auth(form) => auth::render_auth(frame, form, &state.backdrop, state.spinner_frame),
    }

    let area = frame.area();
    app.overlay.render(frame, area);
}

#[cfg(test)]
mod tests {
    use crewgate_core::config::AssetsConfig;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::overlays::Overlay;

    fn screen(app: &AppState, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| render(app, frame)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..height {
            for x in 0..width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn landing_shows_start_button() {
        let app = AppState::new(AssetsConfig::default());
        let text = screen(&app, 60, 20);
        assert!(text.contains("START"));
    }

    #[test]
    fn auth_view_shows_login_card() {
        let mut app = AppState::new(AssetsConfig::default());
        app.tui.go_to_auth();
        let text = screen(&app, 80, 30);
        assert!(text.contains("← Back"));
        assert!(text.contains("Sign in to access your dashboard."));
        assert!(text.contains("Enter your id"));
        assert!(text.contains("SHOW"));
    }

    #[test]
    fn notice_draws_over_the_view() {
        let mut app = AppState::new(AssetsConfig::default());
        app.tui.go_to_auth();
        app.overlay = Some(Overlay::notice("invalid credentials"));
        let text = screen(&app, 80, 30);
        assert!(text.contains("invalid credentials"));
        assert!(text.contains("Enter to dismiss"));
    }
}
