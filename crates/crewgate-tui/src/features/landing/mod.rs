//! Landing view: logo and the START button.
//!
//! Stateless. Key handling only reports what the user asked for; the shell
//! reducer decides what to do with it.

mod render;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
pub use render::render_landing;

/// Signals emitted by the landing view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LandingSignal {
    GetStarted,
    Quit,
}

pub fn handle_key(key: KeyEvent) -> Option<LandingSignal> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') if ctrl => Some(LandingSignal::Quit),
        KeyCode::Enter | KeyCode::Char('s' | 'S') if !ctrl => Some(LandingSignal::GetStarted),
        KeyCode::Char('q') | KeyCode::Esc if !ctrl => Some(LandingSignal::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn start_keys() {
        assert_eq!(handle_key(key(KeyCode::Enter)), Some(LandingSignal::GetStarted));
        assert_eq!(handle_key(key(KeyCode::Char('s'))), Some(LandingSignal::GetStarted));
    }

    #[test]
    fn quit_keys() {
        assert_eq!(handle_key(key(KeyCode::Char('q'))), Some(LandingSignal::Quit));
        assert_eq!(handle_key(key(KeyCode::Esc)), Some(LandingSignal::Quit));
        assert_eq!(
            handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(LandingSignal::Quit)
        );
    }

    #[test]
    fn other_keys_are_ignored() {
        assert_eq!(handle_key(key(KeyCode::Char('x'))), None);
        assert_eq!(handle_key(key(KeyCode::Tab)), None);
    }
}
