//! Base dialog component

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Configuration for rendering a dialog
pub struct DialogConfig<'a> {
    pub title: &'a str,
    /// Title and border color
    pub accent: Color,
    /// Message content, may contain newlines
    pub message: &'a str,
    /// Hint line shown at the bottom (e.g., "Press Enter to dismiss")
    pub hint: Option<Line<'a>>,
    pub max_width: u16,
}

/// Render a centered dialog overlay
pub fn render_dialog(frame: &mut Frame, config: DialogConfig) {
    let area = frame.area();
    let width = config.max_width.min(area.width);
    // borders + one column of padding on each side
    let text_width = width.saturating_sub(4).max(1);

    let message_rows = wrapped_rows(config.message, text_width);
    let hint_rows = if config.hint.is_some() { 2 } else { 0 };
    let height = (message_rows + hint_rows + 2).min(area.height);

    let dialog_area = Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    };

    frame.render_widget(Clear, dialog_area);

    let mut content: Vec<Line> = config.message.lines().map(Line::from).collect();
    if let Some(hint) = config.hint {
        content.push(Line::from(""));
        content.push(hint);
    }

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", config.title),
            Style::default()
                .fg(config.accent)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(config.accent))
        .style(Style::default().bg(Color::Black));

    let inner = block.inner(dialog_area);
    frame.render_widget(block, dialog_area);
    frame.render_widget(
        Paragraph::new(content).wrap(Wrap { trim: true }),
        Rect {
            x: inner.x + 1,
            width: inner.width.saturating_sub(2),
            ..inner
        },
    );
}

/// Rows a message needs once wrapped to `width` columns
fn wrapped_rows(text: &str, width: u16) -> u16 {
    let width = usize::from(width.max(1));
    let rows: usize = text
        .lines()
        .map(|line| line.chars().count().div_ceil(width).max(1))
        .sum();
    u16::try_from(rows.max(1)).unwrap_or(u16::MAX)
}
