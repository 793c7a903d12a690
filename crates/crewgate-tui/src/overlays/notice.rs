use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

use super::OverlayUpdate;
use super::render_utils::{InputHint, OverlayConfig, render_overlay};

const MIN_WIDTH: u16 = 32;
const MAX_WIDTH: u16 = 64;

/// Blocking notification. Swallows every key until dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeState {
    pub message: String,
}

impl NoticeState {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> OverlayUpdate {
        match key.code {
            KeyCode::Enter | KeyCode::Esc => OverlayUpdate::close(),
            _ => OverlayUpdate::stay(),
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let text_width = self.message.width() as u16;
        let width = (text_width + 6).clamp(MIN_WIDTH, MAX_WIDTH);
        let inner_width = width.saturating_sub(4).max(1);
        let text_rows = text_width.div_ceil(inner_width).max(1);
        let hints = [InputHint::new("Enter", "to dismiss")];

        let layout = render_overlay(
            frame,
            area,
            &OverlayConfig {
                title: "Notice",
                border_color: Color::Yellow,
                width,
                height: text_rows + 4,
                hints: &hints,
            },
        );

        let body = Paragraph::new(vec![
            Line::default(),
            Line::from(Span::styled(
                self.message.clone(),
                Style::default().fg(Color::White),
            )),
        ])
        .wrap(Wrap { trim: false });
        frame.render_widget(body, layout.body);
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;

    use super::*;
    use crate::overlays::OverlayTransition;

    #[test]
    fn only_enter_or_esc_dismiss() {
        let mut notice = NoticeState::new("요청 실패");
        let stay = notice.handle_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE));
        assert!(matches!(stay.transition, OverlayTransition::Stay));

        let close = notice.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        assert!(matches!(close.transition, OverlayTransition::Close));
    }
}
