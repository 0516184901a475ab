//! Folio site - page controller for a personal portfolio site
//!
//! Drives the navigation toggle, theme preference, skill bars and contact
//! form of the site, previewed in a Ratatui terminal host.

mod app;
mod config;
mod controller;
mod platform;
mod state;
mod storage;
mod ui;

use anyhow::Result;
use app::App;
use chrono::Local;
use config::SiteConfig;
use controller::{PageController, PageEvents};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};
use storage::{FileStore, MemoryStore, PreferenceStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "folio_site=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = SiteConfig::load()?;
    let mut page = PageController::new(&config, preference_store(&config));
    page.on_load(Local::now(), Instant::now());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(page);
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

/// Pick where the theme preference lives
fn preference_store(config: &SiteConfig) -> Box<dyn PreferenceStore> {
    let store = match config.preferences_path {
        Some(ref path) => Some(FileStore::new(path.clone())),
        None => FileStore::in_data_dir(),
    };
    match store {
        Some(store) => {
            tracing::debug!("Preferences stored at {}", store.path().display());
            Box::new(store)
        }
        None => {
            tracing::warn!("No data directory available, preferences will not persist");
            Box::new(MemoryStore::default())
        }
    }
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        app.tick(Instant::now());

        terminal.draw(|frame| ui::draw(frame, app))?;

        // Faster polling while skill bars fill (16ms = ~60fps), 100ms otherwise
        let poll_duration = if app.is_animating() {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(100)
        };

        if event::poll(poll_duration)? {
            match event::read()? {
                Event::Key(key) => app.handle_key(key)?,
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                _ => {}
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
