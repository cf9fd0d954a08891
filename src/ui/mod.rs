//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod login;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (content_area, status_area) = layout::create_layout(frame.area());

    match app.state.current_view {
        View::Signup => forms::draw_signup(frame, content_area, &app.state.signup),
        View::Login => login::draw(frame, content_area, app),
    }

    layout::draw_status_bar(frame, status_area, app);

    // Errors render last so the dialog sits above everything
    if let Some(error) = app.state.current_error() {
        components::render_error_dialog(frame, error);
    }
}
