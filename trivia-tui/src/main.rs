//! trivia-tui - terminal trivia quiz
//!
//! Pick a category and difficulty, answer a batch of questions from the
//! Open Trivia Database, see your score, start over.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use crossbeam_channel::unbounded;
use libtrivia::logging::{LogFormat, LoggingConfig};
use libtrivia::provider::opentdb::OpenTdbClient;
use libtrivia::{Config, TriviaProvider};
use tracing::{error, info};
use trivia_tui::{
    app::{map_key, Action, AppState, EventHandler, TuiEvent, UiConfig},
    error::{Result, TuiError},
    services::{dispatch, ChannelNotifier, ServiceEvent, ServiceHandle},
    terminal::{install_panic_hook, restore_terminal, setup_terminal, Tui},
    ui,
};

#[derive(Parser, Debug)]
#[command(name = "trivia-tui")]
#[command(version)]
#[command(about = "Answer trivia questions from the Open Trivia Database", long_about = None)]
struct Cli {
    /// Path to the configuration file (default: $TRIVIA_CONFIG or
    /// ~/.config/trivia/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the provider base URL
    #[arg(long)]
    base_url: Option<String>,

    /// Write logs to this file (default: $TRIVIA_LOG_FILE, off if unset)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log format: text, json, or pretty (default: $TRIVIA_LOG_FORMAT or text)
    #[arg(long)]
    log_format: Option<LogFormat>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        error!("Exiting with error: {}", e);
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut logging = LoggingConfig {
        verbose: cli.verbose,
        ..LoggingConfig::default()
    };
    if let Some(format) = cli.log_format {
        logging.format = format;
    }
    if let Some(path) = cli.log_file {
        logging = logging.with_file(path);
    }
    logging
        .init()
        .map_err(|e| TuiError::Application(format!("Failed to open log file: {}", e)))?;

    let mut config = match &cli.config {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };
    if let Some(base_url) = cli.base_url {
        config.provider.base_url = base_url;
    }
    config.validate()?;

    let client = OpenTdbClient::new(&config.provider)?;
    info!(base_url = client.base_url(), "Starting trivia-tui");

    let ui_config = UiConfig::default().with_notification_ttl(config.notifications.ttl());

    install_panic_hook();
    let mut terminal = setup_terminal()?;

    let result = run_app(&mut terminal, Arc::new(client), ui_config);

    restore_terminal(terminal)?;

    result
}

fn run_app(
    terminal: &mut Tui,
    provider: Arc<dyn TriviaProvider>,
    ui_config: UiConfig,
) -> Result<()> {
    let (tx, rx) = unbounded::<ServiceEvent>();
    let notifier = Arc::new(ChannelNotifier::new(tx.clone()));
    let services = ServiceHandle::new(provider, notifier, tx)?;

    let event_handler = EventHandler::new(ui_config.tick_rate_ms);
    let mut state = AppState::with_config(ui_config);

    // Categories are fetched once, in the background
    state = dispatch(state, Action::CategoriesRequested, &services);

    loop {
        terminal.draw(|frame| ui::render(frame, &state))?;

        let action = match event_handler.next()? {
            TuiEvent::Key(key) => map_key(&state, key),
            other => other.into_action(),
        };
        if let Some(action) = action {
            state = dispatch(state, action, &services);
        }

        // Apply fetch results and notifications in arrival order
        while let Ok(event) = rx.try_recv() {
            state = dispatch(state, event.into(), &services);
        }

        if state.should_quit {
            info!("Quit requested");
            break;
        }
    }

    Ok(())
}
