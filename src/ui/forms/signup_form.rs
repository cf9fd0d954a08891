//! Signup card rendering

use super::field_renderer::{draw_checkbox, draw_field, CHECKBOX_HEIGHT, FIELD_HEIGHT};
use crate::state::{Form, SignupField, SignupForm};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use crate::ui::layout::{centered_card, CARD_WIDTH};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Card height: borders, tabs, alert, five inputs, terms and the button
pub const SIGNUP_CARD_HEIGHT: u16 = 2 + 1 + 1 + 5 * FIELD_HEIGHT + CHECKBOX_HEIGHT + BUTTON_HEIGHT;

const TEXT_FIELDS: [SignupField; 5] = [
    SignupField::FirstName,
    SignupField::LastName,
    SignupField::Email,
    SignupField::Password,
    SignupField::ConfirmPassword,
];

/// Draw the signup card centered in `area`
pub fn draw_signup(frame: &mut Frame, area: Rect, form: &SignupForm) {
    let card = centered_card(area, CARD_WIDTH, SIGNUP_CARD_HEIGHT);
    let block = Block::default()
        .title(" Sign up ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let mut constraints = vec![Constraint::Length(1), Constraint::Length(1)];
    constraints.extend(TEXT_FIELDS.iter().map(|_| Constraint::Length(FIELD_HEIGHT)));
    constraints.push(Constraint::Length(CHECKBOX_HEIGHT));
    constraints.push(Constraint::Length(BUTTON_HEIGHT));
    let chunks = Layout::vertical(constraints).split(inner);

    draw_tabs(frame, chunks[0]);
    draw_alert(frame, chunks[1], form);

    let active = form.active_field();
    for (i, field) in TEXT_FIELDS.into_iter().enumerate() {
        let reveal = matches!(field, SignupField::Password | SignupField::ConfirmPassword)
            .then(|| form.is_revealed(field));
        draw_field(
            frame,
            chunks[2 + i],
            form.field(field),
            active == field.index(),
            reveal,
        );
    }

    draw_checkbox(
        frame,
        chunks[7],
        form.field(SignupField::AcceptTerms),
        active == SignupField::AcceptTerms.index(),
    );

    let accent = form.is_valid().then_some(Color::Green);
    render_button(
        frame,
        chunks[8],
        form.submit_label(),
        form.is_submit_row_active(),
        form.is_submit_enabled(),
        accent,
    );
}

/// Sign In / Sign Up switcher, with the current tab highlighted
fn draw_tabs(frame: &mut Frame, area: Rect) {
    let tabs = Line::from(vec![
        Span::styled(" Sign In ", Style::default().fg(Color::Gray)),
        Span::raw("|"),
        Span::styled(
            " Sign Up ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        ),
    ]);
    frame.render_widget(Paragraph::new(tabs).alignment(Alignment::Center), area);
}

fn draw_alert(frame: &mut Frame, area: Rect, form: &SignupForm) {
    if let Some(status) = &form.status {
        let alert = Paragraph::new(Span::styled(
            status.as_str(),
            Style::default().fg(Color::White).bg(Color::Red),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(alert, area);
    }
}
