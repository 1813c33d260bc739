//! Main entry point for the homework status bot.

use clap::Parser;
use homework_bot::{BotResult, HomeworkBot};
use homework_common::{init_logging, LoggingConfig};
use homework_config::ConfigLoader;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, error, info, warn};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log filter, e.g. "info" or "homework_bot=trace"
    #[arg(short, long, env = "LOG_LEVEL", default_value = "debug")]
    log_level: String,

    /// Emit logs as JSON lines
    #[arg(long, env = "LOG_JSON")]
    json_logs: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Loaded first so LOG_LEVEL and LOG_JSON may come from .env as well
    let dotenv = dotenvy::dotenv();
    let args = Args::parse();

    let logging = LoggingConfig {
        level: args.log_level.clone(),
        json_format: args.json_logs,
        ansi: !args.json_logs,
        ..LoggingConfig::default()
    };
    if let Err(e) = init_logging(logging) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    match dotenv {
        Ok(path) => debug!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => debug!("No .env file found"),
        Err(e) => warn!("Failed to load .env file: {}", e),
    }

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> BotResult<()> {
    info!("Starting homework bot v{}", env!("CARGO_PKG_VERSION"));

    let config = ConfigLoader::load(args.config.as_deref())?;
    let bot = HomeworkBot::from_config(&config)?;

    tokio::select! {
        () = bot.run() => {}
        result = tokio::signal::ctrl_c() => {
            result?;
            info!("Received Ctrl-C, shutting down");
        }
    }

    Ok(())
}
