use clap::Parser;
use pakquiz::{app::App, config::QuizConfig, error, logging, Result};
use std::path::PathBuf;
use std::time::Duration;

/// Pakistani general knowledge quiz in the terminal
#[derive(Parser, Debug)]
#[command(name = "pakquiz", version, about, long_about = None)]
struct Cli {
    /// Path to a config file (defaults to the user config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override how long the splash screen is shown, e.g. "2s" or "500ms"
    #[arg(long, value_parser = humantime::parse_duration)]
    splash_delay: Option<Duration>,

    /// Directory for the log file (defaults to the user cache directory)
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

/// Set up panic hook to restore terminal state on panic
fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(std::io::stdout(), crossterm::terminal::LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}

fn load_config(cli: &Cli) -> Result<QuizConfig> {
    let mut config = match &cli.config {
        Some(path) => QuizConfig::load_from(path)?,
        None => QuizConfig::load()?,
    };
    if let Some(delay) = cli.splash_delay {
        config = config.with_splash_delay(delay);
    }
    config.validate()?;
    Ok(config)
}

async fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;
    if cli.print_config {
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    tracing::info!(splash_delay = %config.splash_delay, "starting pakquiz");

    let mut app = App::new(&config)?;
    app.init()?;
    app.run().await
}

#[tokio::main]
async fn main() {
    setup_panic_hook();
    let cli = Cli::parse();

    let log_dir = cli.log_dir.clone().unwrap_or_else(logging::default_log_dir);
    let guard = match logging::init(&log_dir) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("{}", error::user_friendly_message(&e));
            std::process::exit(1);
        }
    };

    let result = run(cli).await;
    if let Err(e) = &result {
        tracing::error!(error = %e, "pakquiz failed");
    }

    // Flush the log file before exiting
    drop(guard);

    if let Err(e) = result {
        eprintln!("{}", error::user_friendly_message(&e));
        std::process::exit(1);
    }
}
