//! Sign in placeholder view

use crate::app::App;
use crate::ui::layout::{centered_card, CARD_WIDTH};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const LOGIN_CARD_HEIGHT: u16 = 9;

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let card = centered_card(area, CARD_WIDTH, LOGIN_CARD_HEIGHT);

    let mut lines = vec![Line::from("")];
    if let Some(msg) = &app.state.status_message {
        lines.push(Line::from(Span::styled(
            msg.as_str(),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(
        "Sign in is not available yet.",
        Style::default().fg(Color::Gray),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("s", Style::default().fg(Color::Cyan)),
        Span::raw(": create an account  "),
        Span::styled("q", Style::default().fg(Color::Cyan)),
        Span::raw(": quit"),
    ]));

    let block = Block::default()
        .title(" Sign in ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, card);
}
