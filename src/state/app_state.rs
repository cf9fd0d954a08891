//! Application state definitions

use super::forms::SignupForm;
use std::collections::VecDeque;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Signup,
    Login,
}

impl View {
    pub fn title(&self) -> &'static str {
        match self {
            View::Signup => "Sign up",
            View::Login => "Sign in",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppState {
    // Navigation
    pub current_view: View,
    pub view_history: Vec<View>,

    // Form state, remounted on every visit to the signup view
    pub signup: SignupForm,
    /// Initial password reveal flags for freshly mounted forms
    pub reveal_passwords: bool,

    // UI state
    pub status_message: Option<String>,
    errors: VecDeque<String>,
}

impl AppState {
    pub fn new(reveal_passwords: bool) -> Self {
        Self {
            signup: SignupForm::with_reveal(reveal_passwords),
            reveal_passwords,
            ..Self::default()
        }
    }

    /// Discard the signup form and mount a fresh one
    pub fn reset_signup(&mut self) {
        self.signup = SignupForm::with_reveal(self.reveal_passwords);
    }

    /// Queue an error for the modal error dialog
    pub fn push_error(&mut self, message: String) {
        self.errors.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// The error currently shown, oldest first
    pub fn current_error(&self) -> Option<&str> {
        self.errors.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.errors.pop_front();
    }
}
