//! Overlay modules for the TUI.
//!
//! Overlays are modal UI components that temporarily take over keyboard input.
//! Each overlay is self-contained: it owns its state, key handler, and render function.
//!
//! - `notice.rs`: blocking notification with a single dismiss action
//! - `render_utils.rs`: shared rendering utilities for overlays and cards

pub mod notice;
pub mod render_utils;

use crossterm::event::KeyEvent;
pub use notice::NoticeState;
use ratatui::Frame;
use ratatui::layout::Rect;

/// Transition returned by overlay key handlers.
#[derive(Debug)]
pub enum OverlayTransition {
    Stay,
    Close,
}

/// Update returned by overlay key handlers.
#[derive(Debug)]
pub struct OverlayUpdate {
    pub transition: OverlayTransition,
}

impl OverlayUpdate {
    pub fn stay() -> Self {
        Self {
            transition: OverlayTransition::Stay,
        }
    }

    pub fn close() -> Self {
        Self {
            transition: OverlayTransition::Close,
        }
    }
}

#[derive(Debug)]
pub enum Overlay {
    Notice(NoticeState),
}

impl Overlay {
    pub fn notice(message: impl Into<String>) -> Self {
        Overlay::Notice(NoticeState::new(message))
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        match self {
            Overlay::Notice(n) => n.render(frame, area),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> OverlayUpdate {
        match self {
            Overlay::Notice(n) => n.handle_key(key),
        }
    }
}

/// Extension trait for `Option<Overlay>` providing convenience helpers.
pub trait OverlayExt {
    /// Renders the overlay if one is active.
    fn render(&self, frame: &mut Frame, area: Rect);

    /// Message of the active notice, if any.
    fn notice_message(&self) -> Option<&str>;
}

impl OverlayExt for Option<Overlay> {
    fn render(&self, frame: &mut Frame, area: Rect) {
        if let Some(overlay) = self {
            overlay.render(frame, area);
        }
    }

    fn notice_message(&self) -> Option<&str> {
        match self {
            Some(Overlay::Notice(n)) => Some(n.message.as_str()),
            None => None,
        }
    }
}
