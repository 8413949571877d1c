//! Commit Widget
//!
//! Binary entry point for the terminal widget.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;

use commit_widget::app::{App, SharedProvider};
use commit_widget::github::constants::{API_BASE, defaults};
use commit_widget::{CommitFetcher, GithubClient, TimelineProvider, WidgetConfig, logging};

/// Show the latest commit on a GitHub branch
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Repository owner
    #[arg(long, default_value = defaults::OWNER)]
    owner: String,

    /// Repository name
    #[arg(long, default_value = defaults::REPO)]
    repo: String,

    /// Branch to watch
    #[arg(long, default_value = defaults::BRANCH)]
    branch: String,

    /// GitHub API root
    #[arg(long, default_value = API_BASE)]
    api_base: String,

    /// Write logs to this file (RUST_LOG controls verbosity)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Show the sample entry without touching the network
    #[arg(long)]
    preview: bool,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    let _log_guard = match args.log_file {
        Some(ref path) => Some(logging::init_file_logging(path)?),
        None => None,
    };

    let config =
        WidgetConfig::new(&args.owner, &args.repo, &args.branch).with_api_base(&args.api_base);
    let client = GithubClient::new(&config)?;
    tracing::info!(url = %client.url(), preview = args.preview, "commit-widget starting");

    let fetcher: Box<dyn CommitFetcher> = Box::new(client);
    let provider: SharedProvider = Arc::new(TimelineProvider::with_refresh_interval(
        fetcher,
        config.refresh_interval,
    ));

    let app = if args.preview {
        App::preview(config, provider, Utc::now())
    } else {
        App::new(config, provider, Utc::now())
    };

    let terminal = ratatui::init();
    let result = run(terminal, app);
    ratatui::restore();
    result
}

/// Run the application's main loop.
fn run(mut terminal: DefaultTerminal, mut app: App) -> color_eyre::Result<()> {
    while app.running {
        terminal.draw(|frame| app.render(frame))?;
        handle_events(&mut app)?;
    }

    Ok(())
}

/// Handle crossterm events.
///
/// Uses poll with 200ms timeout, then runs the tick so due refreshes start
/// and finished ones are picked up even while keys are arriving.
fn handle_events(app: &mut App) -> color_eyre::Result<()> {
    if event::poll(Duration::from_millis(200))?
        && let Event::Key(key) = event::read()?
        && key.kind == KeyEventKind::Press
    {
        app.on_key_event(key, Utc::now());
    }
    app.on_tick(Utc::now());
    Ok(())
}
