//! SilicaGel TUI - terminal storefront for SilicaGel Pro industrial desiccants
//!
//! A Ratatui-based TUI presenting the product catalogue and a contact /
//! quote form that submits inquiries over HTTP.

mod app;
mod config;
mod content;
mod platform;
mod state;
mod submission;
mod ui;

use anyhow::Result;
use app::App;
use config::SiteConfig;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io;
use std::time::{Duration, Instant};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_ENV: &str = "SILICAGEL_TUI_LOG";
const LOG_FILE: &str = "silicagel-tui.log";
const FAST_POLL: Duration = Duration::from_millis(16);
const IDLE_POLL: Duration = Duration::from_millis(100);

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| "silicagel_tui=info".into())
}

/// Log to a file in the data directory; the alternate screen owns the terminal.
/// Falls back to stderr when no data directory is usable.
fn init_logging() -> Option<WorkerGuard> {
    let log_dir = SiteConfig::project_dirs()
        .map(|dirs| dirs.data_dir().to_path_buf())
        .filter(|dir| std::fs::create_dir_all(dir).is_ok());

    match log_dir {
        Some(dir) => {
            let file_appender = tracing_appender::rolling::never(&dir, LOG_FILE);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            tracing_subscriber::registry()
                .with(env_filter())
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_ansi(false)
                        .with_writer(non_blocking),
                )
                .init();
            tracing::info!(dir = %dir.display(), "Logging to file");
            Some(guard)
        }
        None => {
            tracing_subscriber::registry()
                .with(env_filter())
                .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
                .init();
            None
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let _log_guard = init_logging();

    let (config, config_error) = match SiteConfig::load() {
        Ok(config) => (config, None),
        Err(err) => {
            tracing::warn!("Falling back to default config: {err:#}");
            (SiteConfig::default(), Some(format!("{err:#}")))
        }
    };
    let submitter = submission::from_config(&config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(&config, submitter);
    if let Some(message) = config_error {
        app.push_error(message);
    }
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        tracing::error!("Exited with error: {err:?}");
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
        let size = terminal.size()?;
        let now = Instant::now();

        if app.in_splash() {
            app.update_splash(now, size.height);
        }

        // The particle field spans the page body
        let body = ui::body_area(Rect::new(0, 0, size.width, size.height));
        app.resize(body.width, body.height);
        app.tick(now);

        terminal.draw(|frame| ui::draw(frame, app))?;

        // ~60fps while something moves or a submission is in flight
        let poll_duration = if app.wants_fast_tick() {
            FAST_POLL
        } else {
            IDLE_POLL
        };

        if event::poll(poll_duration)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key)?,
                // Picked up by the size check at the top of the loop
                Event::Resize(..) => {}
                _ => {}
            }
        }

        if app.should_quit() {
            tracing::info!("Quit requested");
            return Ok(());
        }

        // Let spawned submissions make progress between frames
        tokio::task::yield_now().await;
    }
}
