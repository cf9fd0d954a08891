//! Application state and core logic

use crate::auth::{AuthError, AuthProvider};
use crate::state::{AppState, Form, Registration, SignupField, View};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Status bar message after a successful signup
pub const SIGNUP_SUCCESS_MESSAGE: &str = "Account created. Please sign in.";

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Registration capability; `None` when no provider could be set up
    auth: Option<Arc<dyn AuthProvider>>,
    /// Registration call in flight
    pending: Option<JoinHandle<Result<(), AuthError>>>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance on the signup view
    pub fn new(auth: Option<Arc<dyn AuthProvider>>, state: AppState) -> Self {
        Self {
            state,
            auth,
            pending: None,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    pub fn is_registering(&self) -> bool {
        self.pending.is_some()
    }

    /// Handle a key press
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        match self.state.current_view {
            View::Signup => self.handle_signup_key(key).await?,
            View::Login => self.handle_login_key(key)?,
        }
        Ok(())
    }

    /// Navigate to a new view.
    ///
    /// Returning to a view already in history pops back to it, so history
    /// never holds a view twice.
    pub fn navigate(&mut self, view: View) {
        self.enter(view);
        let history = &mut self.state.view_history;
        match history.iter().position(|v| *v == view) {
            Some(pos) => history.truncate(pos),
            None => history.push(self.state.current_view),
        }
        self.state.current_view = view;
    }

    /// Navigate without leaving the current view in history
    pub fn replace_view(&mut self, view: View) {
        self.enter(view);
        self.state.current_view = view;
    }

    /// Entering the signup view from elsewhere mounts a fresh form. A call
    /// still running belongs to the old form and is abandoned.
    fn enter(&mut self, view: View) {
        if view != View::Signup || self.state.current_view == View::Signup {
            return;
        }
        if let Some(handle) = self.pending.take() {
            handle.abort();
            tracing::debug!("abandoned registration from a discarded signup form");
        }
        self.state.reset_signup();
    }

    /// Handle keys in the Signup view
    async fn handle_signup_key(&mut self, key: KeyEvent) -> Result<()> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let shortcut = key.modifiers.contains(crate::platform::SHORTCUT_MODIFIER);
        let on_submit_row = self.state.signup.is_submit_row_active();
        let on_terms = self.state.signup.active() == Some(SignupField::AcceptTerms);

        match key.code {
            KeyCode::Tab | KeyCode::Down => self.state.signup.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.signup.prev_field(),
            // Keyboard shortcuts (work from anywhere)
            KeyCode::Char('s') if ctrl => self.submit(),
            KeyCode::Char('r') if ctrl => {
                self.state.signup.toggle_active_visibility();
            }
            KeyCode::Char('l') if shortcut => {
                // "Sign In" tab
                self.navigate(View::Login);
            }
            KeyCode::Enter if on_submit_row => self.submit(),
            // Enter moves on from a field, like tabbing
            KeyCode::Enter => self.state.signup.next_field(),
            KeyCode::Esc => self.quit = true,
            KeyCode::Char(' ') if on_terms => {
                self.state.signup.toggle_active_checkbox();
            }
            KeyCode::Char(c) if !ctrl => self.state.signup.input_char(c),
            KeyCode::Backspace => self.state.signup.backspace(),
            _ => {}
        }
        Ok(())
    }

    /// Handle keys in the Login view
    fn handle_login_key(&mut self, key: KeyEvent) -> Result<()> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            // "Sign Up" tab
            KeyCode::Char('s') | KeyCode::Char('u') if !ctrl => {
                self.state.status_message = None;
                self.navigate(View::Signup);
            }
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            _ => {}
        }
        Ok(())
    }

    /// Validate the form and start the registration call.
    ///
    /// Does nothing while a registration is already in flight or the form
    /// is invalid.
    pub fn submit(&mut self) {
        let Some(registration) = self.state.signup.begin_submit() else {
            return;
        };

        let Some(auth) = self.auth.clone() else {
            self.apply_registration(Err(AuthError::ProviderMissing));
            return;
        };

        tracing::debug!(email = %registration.email, "submitting signup");
        self.pending = Some(tokio::spawn(register(auth, registration)));
    }

    /// Apply the registration result if the call has finished
    pub async fn poll_registration(&mut self) {
        if self
            .pending
            .as_ref()
            .is_some_and(|handle| handle.is_finished())
        {
            self.wait_for_registration().await;
        }
    }

    /// Wait for the in-flight registration, if any, and apply its result
    pub async fn wait_for_registration(&mut self) {
        let Some(handle) = self.pending.take() else {
            return;
        };
        let outcome = match handle.await {
            Ok(outcome) => outcome,
            Err(e) => Err(AuthError::Rejected(format!("registration task failed: {e}"))),
        };
        self.apply_registration(outcome);
    }

    fn apply_registration(&mut self, outcome: Result<(), AuthError>) {
        self.state.signup.finish_submit(&outcome);
        match outcome {
            Ok(()) => {
                tracing::info!("signup succeeded, redirecting to login");
                self.state.status_message = Some(SIGNUP_SUCCESS_MESSAGE.to_string());
                self.replace_view(View::Login);
            }
            Err(e) => {
                tracing::error!(error = %e, "signup failed");
            }
        }
    }
}

async fn register(auth: Arc<dyn AuthProvider>, registration: Registration) -> Result<(), AuthError> {
    auth.register(
        &registration.first_name,
        &registration.last_name,
        &registration.email,
        &registration.password,
    )
    .await
}
