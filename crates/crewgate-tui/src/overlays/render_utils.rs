use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};

/// Calculates the area for an overlay, centered horizontally and vertically
/// within the available height.
pub fn calculate_overlay_area(area: Rect, available_height: u16, width: u16, height: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(4));
    let height = height.min(available_height.saturating_sub(2));

    let overlay_x = area.x + (area.width.saturating_sub(width)) / 2;
    let overlay_y = area.y + (available_height.saturating_sub(height)) / 2;
    Rect::new(overlay_x, overlay_y, width, height)
}

/// Renders the base container for an overlay (clears background, draws border and title).
pub fn render_overlay_container(frame: &mut Frame, area: Rect, title: &str, border_color: Color) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .title(format!(" {title} "))
        .title_style(
            Style::default()
                .fg(border_color)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(block, area);
}

/// Input configuration for an overlay.
pub struct OverlayConfig<'a> {
    pub title: &'a str,
    pub border_color: Color,
    pub width: u16,
    pub height: u16,
    pub hints: &'a [InputHint<'a>],
}

/// Layout rectangles for an overlay.
pub struct OverlayLayout {
    pub popup: Rect,
    pub body: Rect,
}

/// Render a standard overlay container and return its layout.
pub fn render_overlay(frame: &mut Frame, area: Rect, config: &OverlayConfig<'_>) -> OverlayLayout {
    let popup = calculate_overlay_area(area, area.height, config.width, config.height);
    render_overlay_container(frame, popup, config.title, config.border_color);

    let inner = Rect::new(
        popup.x + 2,
        popup.y + 1,
        popup.width.saturating_sub(4),
        popup.height.saturating_sub(2),
    );

    if !config.hints.is_empty() {
        render_hints(frame, inner, config.hints, config.border_color);
    }

    let footer_height = u16::from(!config.hints.is_empty());
    let body = Rect::new(
        inner.x,
        inner.y,
        inner.width,
        inner.height.saturating_sub(footer_height),
    );

    OverlayLayout { popup, body }
}

/// Helper struct for keyboard hints.
pub struct InputHint<'a> {
    pub key: &'a str,
    pub action: &'a str,
}

impl<'a> InputHint<'a> {
    pub fn new(key: &'a str, action: &'a str) -> Self {
        Self { key, action }
    }
}

/// Renders a line of keyboard hints on the last row of `area`.
pub fn render_hints(frame: &mut Frame, area: Rect, hints: &[InputHint], highlight_color: Color) {
    if area.height == 0 {
        return;
    }
    let hints_y = area.y + area.height.saturating_sub(1);
    let hints_area = Rect::new(area.x, hints_y, area.width, 1);

    let mut spans = Vec::new();
    for (i, hint) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" • ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(hint.key, Style::default().fg(highlight_color)));
        spans.push(Span::styled(
            format!(" {}", hint.action),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let line = Line::from(spans);
    let para = Paragraph::new(line).alignment(Alignment::Center);
    frame.render_widget(para, hints_area);
}
