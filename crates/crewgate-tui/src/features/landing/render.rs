use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::backdrop::{self, BackdropState};

const BUTTON_WIDTH: u16 = 16;
const BUTTON_HEIGHT: u16 = 3;
const GAP: u16 = 2;

/// Renders the landing view: logo stacked above the START button, both centered.
pub fn render_landing(frame: &mut Frame, backdrop: &BackdropState, banner: Option<&str>) {
    let area = frame.area();
    backdrop::render_backdrop(frame, backdrop);

    let logo_rows = backdrop.logo().rows();
    let gap = if logo_rows > 0 { GAP } else { 0 };
    let stack_height = logo_rows + gap + BUTTON_HEIGHT;
    let top = area.height.saturating_sub(stack_height) / 2;

    let used = backdrop::render_logo(frame, backdrop, top);
    let button_y = top + used + if used > 0 { gap } else { 0 };
    if button_y + BUTTON_HEIGHT <= area.height {
        let button = Rect::new(
            area.x + area.width.saturating_sub(BUTTON_WIDTH) / 2,
            area.y + button_y,
            BUTTON_WIDTH.min(area.width),
            BUTTON_HEIGHT,
        );
        render_start_button(frame, button);
    }

    render_footer(frame, area, banner);
}

fn render_start_button(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));
    let label = Paragraph::new(Line::from(Span::styled(
        "START",
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(block);
    frame.render_widget(label, area);
}

fn render_footer(frame: &mut Frame, area: Rect, banner: Option<&str>) {
    if area.height < 2 {
        return;
    }
    let y = area.y + area.height - 1;
    let mut spans = Vec::new();
    if let Some(banner) = banner {
        spans.push(Span::styled(
            format!("✓ {banner}"),
            Style::default().fg(Color::Green),
        ));
        spans.push(Span::styled("  •  ", Style::default().fg(Color::DarkGray)));
    }
    spans.push(Span::styled("Enter", Style::default().fg(Color::Cyan)));
    spans.push(Span::styled(" start", Style::default().fg(Color::DarkGray)));
    spans.push(Span::styled(" • ", Style::default().fg(Color::DarkGray)));
    spans.push(Span::styled("q", Style::default().fg(Color::Cyan)));
    spans.push(Span::styled(" quit", Style::default().fg(Color::DarkGray)));

    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        Rect::new(area.x, y, area.width, 1),
    );
}
