//! Layout components (centered card, status bar)

use crate::app::App;
use crate::platform::{REVEAL_SHORTCUT, SIGN_IN_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::View;
use ratatui::{
    layout::{Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Width of the auth card, matching a narrow centered form
pub const CARD_WIDTH: u16 = 46;

/// Split the screen into content and a one-line status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Center a card of the given size inside `area`, clamped to fit
pub fn centered_card(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [card] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    card
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        format!(" {} ", app.state.current_view.title()),
        Style::default().fg(Color::Black).bg(Color::Cyan),
    )];

    // View-specific hints
    spans.push(Span::raw(" "));
    spans.push(Span::styled(
        get_view_hints(&app.state.current_view),
        Style::default().fg(Color::Gray),
    ));

    if app.is_registering() {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            "registering...",
            Style::default().fg(Color::Yellow),
        ));
    }

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);
}

fn get_view_hints(view: &View) -> String {
    match view {
        View::Signup => format!(
            "Tab:next  Space:terms  {REVEAL_SHORTCUT}:show  {SUBMIT_SHORTCUT}:submit  {SIGN_IN_SHORTCUT}:sign in  Esc:quit"
        ),
        View::Login => "s:sign up  q:quit".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_card_is_centered() {
        let area = Rect::new(0, 0, 100, 40);
        let card = centered_card(area, 40, 20);
        assert_eq!(card, Rect::new(30, 10, 40, 20));
    }

    #[test]
    fn test_centered_card_clamps_to_area() {
        let area = Rect::new(0, 0, 30, 10);
        let card = centered_card(area, 46, 34);
        assert_eq!(card, area);
    }

    #[test]
    fn test_create_layout_reserves_status_line() {
        let (content, status) = create_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(content.height, 23);
        assert_eq!(status, Rect::new(0, 23, 80, 1));
    }

    #[test]
    fn test_hints_mention_submit_shortcut() {
        assert!(get_view_hints(&View::Signup).contains(SUBMIT_SHORTCUT));
        assert!(get_view_hints(&View::Signup).contains("Ctrl+R"));
        assert!(get_view_hints(&View::Login).contains("sign up"));
    }
}
