//! Field rendering utilities for forms

use crate::state::FormField;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows taken by a text field: bordered input plus its error line
pub const FIELD_HEIGHT: u16 = 4;

/// Rows taken by a checkbox: the box line plus its error line
pub const CHECKBOX_HEIGHT: u16 = 2;

/// Border color reflecting focus and validation state
fn border_color(field: &FormField, is_active: bool) -> Color {
    if is_active {
        Color::Cyan
    } else if field.visible_error().is_some() {
        Color::Red
    } else if field.is_touched_valid() {
        Color::Green
    } else {
        Color::DarkGray
    }
}

fn draw_error_line(frame: &mut Frame, area: Rect, field: &FormField) {
    if let Some(error) = field.visible_error() {
        let line = Paragraph::new(Line::from(Span::styled(
            format!(" {error}"),
            Style::default().fg(Color::Red),
        )));
        frame.render_widget(line, area);
    }
}

/// Draw a text input with its error line underneath.
///
/// `reveal` only matters for masked fields; `None` means the field has no
/// visibility toggle.
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    is_active: bool,
    reveal: Option<bool>,
) {
    let [input_area, error_area] =
        Layout::vertical([Constraint::Length(3), Constraint::Length(1)]).areas(area);

    let value = field.as_text();
    let content = if value.is_empty() && !is_active {
        Line::from(Span::styled(
            field.placeholder.as_str(),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ))
    } else {
        let cursor = if is_active { "▌" } else { "" };
        Line::from(vec![
            Span::raw(field.display_value(reveal.unwrap_or(true))),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ])
    };

    let mut block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color(field, is_active)));

    if let Some(revealed) = reveal {
        let eye = if revealed { " hide " } else { " show " };
        block = block.title_top(
            Line::from(Span::styled(eye, Style::default().fg(Color::Gray))).right_aligned(),
        );
    }

    frame.render_widget(Paragraph::new(content).block(block), input_area);
    draw_error_line(frame, error_area, field);
}

/// Draw a checkbox line with its error line underneath
pub fn draw_checkbox(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let [box_area, error_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);

    let style = Style::default().fg(border_color(field, is_active));
    let line = Line::from(vec![
        Span::styled(format!(" {} ", field.display_value(true)), style),
        Span::styled(field.label.as_str(), style),
    ]);

    frame.render_widget(Paragraph::new(line), box_area);
    draw_error_line(frame, error_area, field);
}
