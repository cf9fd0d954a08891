//! Signup TUI - terminal signup form
//!
//! A Ratatui-based signup form with per-field validation, password
//! reveal toggles and registration through a pluggable auth provider.

mod app;
mod auth;
mod config;
mod platform;
mod state;
mod ui;

use anyhow::Result;
use app::App;
use auth::{AuthProvider, LocalAccountStore};
use config::SignupConfig;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use state::AppState;
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Config is read before logging so it can pick the filter
    let (config, config_error) = match SignupConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (SignupConfig::default(), Some(e)),
    };

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let mut state = AppState::new(config.reveal_passwords());
    if let Some(e) = config_error {
        tracing::warn!(error = %e, "failed to load config, using defaults");
        state.push_error(format!("Failed to load config: {e}"));
    }

    let auth = match LocalAccountStore::from_config(&config) {
        Some(store) => {
            match store.accounts().await {
                Ok(accounts) => tracing::info!(
                    path = %store.path().display(),
                    accounts = accounts.len(),
                    "account store ready"
                ),
                Err(e) => {
                    tracing::warn!(error = %e, "account store unreadable");
                    state.push_error(format!("Account store unreadable: {e}"));
                }
            }
            Some(Arc::new(store) as Arc<dyn AuthProvider>)
        }
        None => {
            tracing::warn!("no data directory available, registration disabled");
            None
        }
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(auth, state);
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Poll faster while a registration is in flight so its result lands promptly
        let poll_duration = if app.is_registering() {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(100)
        };

        if event::poll(poll_duration)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    // Global quit: Ctrl+C
                    if key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL)
                    {
                        return Ok(());
                    }
                    app.handle_key(key).await?;
                }
            }
        }

        app.poll_registration().await;

        if app.should_quit() {
            return Ok(());
        }
    }
}
