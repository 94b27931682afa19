use std::process::ExitCode;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use yogaflow_cal::storage::config::{APP_DIR, Config};

mod cli;
use cli::{USAGE, parse_cli_mode, run};

fn main() -> ExitCode {
    let _log_guard = setup_logging();

    let args = match parse_cli_mode(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(err) => {
            eprintln!("Error: {}", err);
            println!("{}", USAGE);
            return ExitCode::FAILURE;
        }
    };

    let config = match Config::load_or_create() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Falling back to default config: {}", e);
            Config::default()
        }
    };

    if let Err(e) = run(args, &config) {
        eprintln!("Error: {:#}", e);
        tracing::error!("Command failed: {:#}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn setup_logging() -> WorkerGuard {
    let log_dir = Config::config_dir();

    std::fs::create_dir_all(&log_dir).ok();

    let file_appender = tracing_appender::rolling::daily(log_dir, format!("{}.log", APP_DIR));
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(false)
        .init();

    tracing::info!("yogaflow-cal started");
    guard
}
