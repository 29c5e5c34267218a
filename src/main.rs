// ABOUTME: Main entry point for the Fabrica onboarding wizard
//
// Binary: fabrica-onboard
// Usage: fabrica-onboard [COMMAND]
// - No command: launches the wizard TUI
// - status: show the saved onboarding draft
// - reset: discard the saved onboarding draft

#![allow(missing_docs)]

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    io::{self, IsTerminal},
    time::{Duration, Instant},
};

mod app;
mod cli;
mod components;
mod config;
mod onboarding;

use app::{App, EventHandler};
use components::WizardComponent;
use config::AppConfig;

/// Terminal cleanup utility to ensure proper restoration
fn cleanup_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}

fn main() -> Result<()> {
    setup_logging();
    setup_panic_handler();

    let args = cli::Cli::parse();

    let result = match args.command {
        Some(cli::Commands::Status) => cli::status::execute(args.format),
        Some(cli::Commands::Reset) => cli::reset::execute(),
        Some(cli::Commands::Wizard) | None => {
            let config = AppConfig::load().unwrap_or_else(|e| {
                tracing::warn!("failed to load config, using defaults: {e:#}");
                AppConfig::default()
            });
            let mut app = App::new(config);
            let wizard = WizardComponent::new();
            run_tui(&mut app, &wizard)
        }
    };

    if result.is_err() {
        cleanup_terminal();
    }

    result
}

fn run_tui(app: &mut App, wizard: &WizardComponent) -> Result<()> {
    if !IsTerminal::is_terminal(&io::stdout()) {
        return Err(anyhow::anyhow!(
            "No TTY detected. This application requires a terminal.\n\
             Try running directly in a terminal instead of redirecting output."
        ));
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_tui_loop(app, wizard, &mut terminal);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if app.state.completed {
        println!("Your Fabrica store is live. Welcome aboard!");
    }

    result
}

fn run_tui_loop(
    app: &mut App,
    wizard: &WizardComponent,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    let tick_rate = Duration::from_millis(250);
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| {
            wizard.render(frame, &app.state, &app.config);
        })?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key_event) = event::read()? {
                // Windows terminals report both press and release
                if key_event.kind == crossterm::event::KeyEventKind::Press {
                    if let Some(app_event) = EventHandler::handle_key_event(key_event, &app.state) {
                        EventHandler::process_event(app_event, &mut app.state);
                    }
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            if let Err(e) = app.sync_draft() {
                tracing::error!("failed to sync onboarding draft: {e:#}");
            }
            last_tick = Instant::now();
        }

        if app.state.should_quit {
            // Final sync so nothing typed since the last tick is lost
            if let Err(e) = app.sync_draft() {
                tracing::error!("failed to sync onboarding draft on exit: {e:#}");
            }
            break;
        }
    }

    Ok(())
}

fn setup_logging() {
    use std::fs::OpenOptions;
    use tracing_subscriber::prelude::*;

    let log_dir = match crate::onboarding::draft::base_dir() {
        Ok(base) => base.join("logs"),
        Err(_) => std::path::PathBuf::from(".fabrica/logs"),
    };

    if std::fs::create_dir_all(&log_dir).is_err() {
        return;
    }

    let log_file = log_dir.join(format!(
        "fabrica-onboard-{}.jsonl",
        chrono::Local::now().format("%Y%m%d-%H%M%S")
    ));

    let Ok(file) = OpenOptions::new().create(true).append(true).open(&log_file) else {
        return;
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_target(true)
                .with_writer(file)
                .with_ansi(false),
        )
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fabrica_onboard=info".into()),
        )
        .init();
}

fn setup_panic_handler() {
    use tracing::error;

    std::panic::set_hook(Box::new(|panic_info| {
        // Restore the terminal before logging so the message is readable
        cleanup_terminal();

        error!("Application panicked: {}", panic_info);
        eprintln!("Application panicked: {}", panic_info);
        eprintln!("Please check the logs for more details.");
    }));
}
