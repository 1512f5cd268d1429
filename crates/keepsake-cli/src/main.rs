//! `keepsake` — terminal UI for a couple's profile, memories and love notes.
//!
//! # Usage
//!
//! ```
//! keepsake --url http://localhost:8000
//! keepsake --config ~/.config/keepsake/config.toml --log-file /tmp/keepsake.log
//! ```

mod app;
mod client;
mod config;
#[cfg(test)]
mod testing;
mod ui;

use std::{fs::OpenOptions, io, path::Path, sync::Mutex, time::Duration};

use anyhow::{Context, Result};
use app::{App, Command};
use clap::Parser;
use client::ApiClient;
use config::{Args, Settings};
use crossterm::{
  event::{self, Event, KeyEventKind},
  execute,
  terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use keepsake_core::view::ViewController;
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

type Term = Terminal<CrosstermBackend<io::Stdout>>;

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
  let settings = Settings::resolve(Args::parse())?;
  init_tracing(settings.log_file.as_deref())?;
  tracing::info!(base_url = %settings.base_url, "starting keepsake");

  let client = ApiClient::new(&settings.base_url)?;
  let view = ViewController::new(client, settings.author.clone());
  let mut app = App::new(view, settings.title, settings.author);

  // Set up the terminal.
  enable_raw_mode().context("enabling raw mode")?;
  let mut stdout = io::stdout();
  execute!(stdout, EnterAlternateScreen).context("entering alternate screen")?;
  let backend = CrosstermBackend::new(stdout);
  let mut terminal = Terminal::new(backend).context("creating terminal")?;

  // Run the event loop; restore terminal even on error.
  let run_result = run_event_loop(&mut terminal, &mut app).await;

  // Restore terminal regardless of result.
  disable_raw_mode().ok();
  execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
  terminal.show_cursor().ok();

  run_result
}

/// Log to `path` when given. Nothing is installed otherwise: stdout is the UI.
fn init_tracing(path: Option<&Path>) -> Result<()> {
  let Some(path) = path else {
    return Ok(());
  };
  let file = OpenOptions::new()
    .create(true)
    .append(true)
    .open(path)
    .with_context(|| format!("opening log file {}", path.display()))?;

  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .with_ansi(false)
    .with_writer(Mutex::new(file))
    .init();
  Ok(())
}

// ─── Event loop ───────────────────────────────────────────────────────────────

fn draw(terminal: &mut Term, app: &App) -> Result<()> {
  terminal.draw(|f| ui::draw(f, app)).context("drawing frame")?;
  Ok(())
}

async fn run_event_loop(terminal: &mut Term, app: &mut App) -> Result<()> {
  // Initial load for the configured base URL.
  if app.view.begin_load_if_stale() {
    draw(terminal, app)?;
    app.load().await;
  }

  loop {
    draw(terminal, app)?;

    // Poll for an event, yielding control to tokio while waiting.
    let maybe_event = tokio::task::block_in_place(|| {
      if event::poll(Duration::from_millis(50))? {
        Ok::<_, io::Error>(Some(event::read()?))
      } else {
        Ok(None)
      }
    })?;

    let Some(Event::Key(key)) = maybe_event else {
      // Resizes are picked up by the next draw.
      continue;
    };
    if key.kind != KeyEventKind::Press {
      continue;
    }

    match app.handle_key(key) {
      Command::Nothing => {}
      Command::Quit => break,
      Command::Reload => {
        app.view.begin_load();
        draw(terminal, app)?;
        app.load().await;
      }
      Command::Submit => {
        if app.view.begin_submit() {
          draw(terminal, app)?;
          app.submit().await;
        }
      }
      Command::Connect(url) => {
        app.status_msg = format!("Connecting to {url}…");
        if app.connect(&url) {
          draw(terminal, app)?;
          app.load().await;
        }
      }
    }
  }

  Ok(())
}
