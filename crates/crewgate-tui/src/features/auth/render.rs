//! Auth card view.

use crewgate_core::auth::{AuthMode, FieldKey};
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

use super::state::{AuthFormState, Focus};
use crate::backdrop::{self, BackdropState};
use crate::common::text::{mask, truncate_start_with_ellipsis, truncate_with_ellipsis};
use crate::overlays::render_utils::{InputHint, calculate_overlay_area, render_hints};

const CARD_WIDTH: u16 = 60;
const ACCENT: Color = Color::Cyan;
const SPINNER_FRAMES: &[&str] = &["◐", "◓", "◑", "◒"];

pub fn render_auth(
    frame: &mut Frame,
    state: &AuthFormState,
    backdrop: &BackdropState,
    spinner_frame: usize,
) {
    let area = frame.area();
    backdrop::render_backdrop(frame, backdrop);
    render_back_control(frame, area, state.focus == Focus::Back);

    let (lines, focus_line) = card_lines(state, CARD_WIDTH.saturating_sub(4), spinner_frame);
    let wanted_height = lines.len() as u16 + 2;
    // Row 0 holds the back control, the last row the key hints.
    let available = area.height.saturating_sub(2);
    let mut card = calculate_overlay_area(area, available, CARD_WIDTH, wanted_height);
    card.y += 1;

    frame.render_widget(Clear, card);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Gray));
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let inner_text = Rect::new(
        inner.x + 1,
        inner.y,
        inner.width.saturating_sub(2),
        inner.height,
    );
    // Scroll just enough to keep the focused control visible on short terminals.
    let scroll = focus_line.saturating_sub(usize::from(inner_text.height.saturating_sub(1))) as u16;
    frame.render_widget(Paragraph::new(lines).scroll((scroll, 0)), inner_text);

    render_hints(frame, area, &key_hints(state.mode), ACCENT);
}

fn render_back_control(frame: &mut Frame, area: Rect, focused: bool) {
    if area.height == 0 {
        return;
    }
    let style = if focused {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled("← Back", style))),
        Rect::new(area.x + 2, area.y, area.width.saturating_sub(2), 1),
    );
}

fn key_hints(mode: AuthMode) -> [InputHint<'static>; 5] {
    let switch = if mode.is_login() { "sign up" } else { "log in" };
    [
        InputHint::new("Tab", "next"),
        InputHint::new("Enter", "submit"),
        InputHint::new("Ctrl+T", switch),
        InputHint::new("Ctrl+R", "show password"),
        InputHint::new("Esc", "back"),
    ]
}

/// Builds the card body; returns the lines and the index of the focused line.
fn card_lines(state: &AuthFormState, width: u16, spinner_frame: usize) -> (Vec<Line<'static>>, usize) {
    let mut lines = vec![
        Line::from(Span::styled(
            state.title(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        Line::from(Span::styled(
            state.subtitle(),
            Style::default().fg(Color::Gray),
        ))
        .alignment(Alignment::Center),
        Line::default(),
    ];
    let mut focus_line = 0;

    for &key in FieldKey::visible_in(state.mode) {
        let focused = state.focus == Focus::Field(key);
        let label_style = if focused {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        lines.push(Line::from(Span::styled(key.label(), label_style)));
        if focused {
            focus_line = lines.len();
        }
        lines.push(input_line(state, key, focused, width));
    }

    lines.push(Line::default());
    if state.focus == Focus::Submit {
        focus_line = lines.len();
    }
    lines.push(submit_line(state, spinner_frame));

    lines.push(Line::default());
    if state.focus == Focus::Toggle {
        focus_line = lines.len();
    }
    lines.push(toggle_line(state));

    (lines, focus_line)
}

fn input_line(state: &AuthFormState, key: FieldKey, focused: bool, width: u16) -> Line<'static> {
    let value = state.form.get(key);
    let visible = match key {
        FieldKey::Password if state.show_password => value.to_string(),
        k if k.is_secret() => mask(value),
        _ => value.to_string(),
    };

    let reveal = (key == FieldKey::Password).then(|| {
        if state.show_password { " HIDE" } else { " SHOW" }
    });
    let prompt = if focused { "› " } else { "  " };
    let reserved = prompt.width() + 1 + reveal.map_or(0, |r| r.width());
    let max_text = usize::from(width).saturating_sub(reserved);

    let mut spans = vec![Span::styled(prompt, Style::default().fg(ACCENT))];
    if visible.is_empty() {
        if focused {
            spans.push(Span::styled("█", Style::default().fg(ACCENT)));
        }
        spans.push(Span::styled(
            truncate_with_ellipsis(&key.placeholder(), max_text),
            Style::default().fg(Color::DarkGray),
        ));
    } else {
        spans.push(Span::styled(
            truncate_start_with_ellipsis(&visible, max_text),
            Style::default().fg(Color::White),
        ));
        if focused {
            spans.push(Span::styled("█", Style::default().fg(ACCENT)));
        }
    }

    if let Some(reveal) = reveal {
        let used: usize = spans.iter().map(|s| s.content.width()).sum();
        let pad = usize::from(width).saturating_sub(used + reveal.width());
        spans.push(Span::raw(" ".repeat(pad)));
        spans.push(Span::styled(reveal, Style::default().fg(Color::Gray)));
    }

    Line::from(spans)
}

fn submit_line(state: &AuthFormState, spinner_frame: usize) -> Line<'static> {
    let label = if state.is_busy() {
        let spinner = SPINNER_FRAMES[spinner_frame % SPINNER_FRAMES.len()];
        format!("[ {spinner} {} ]", state.title())
    } else {
        format!("[ {} ]", state.title())
    };
    let style = if state.is_busy() {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::DIM)
    } else if state.focus == Focus::Submit {
        Style::default()
            .fg(Color::Black)
            .bg(Color::White)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    };
    Line::from(Span::styled(label, style)).alignment(Alignment::Center)
}

fn toggle_line(state: &AuthFormState) -> Line<'static> {
    let (prompt, link) = state.toggle_prompt();
    let mut link_style = Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::UNDERLINED);
    if state.focus == Focus::Toggle {
        link_style = link_style.fg(ACCENT).add_modifier(Modifier::BOLD);
    }
    Line::from(vec![
        Span::styled(prompt, Style::default().fg(Color::Gray)),
        Span::styled(link, link_style),
    ])
    .alignment(Alignment::Center)
}
