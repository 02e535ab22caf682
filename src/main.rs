use std::process::ExitCode;

pub mod cli;
pub mod config;
pub mod heartbeat;
pub mod logger;
pub mod probe;
pub mod report;

use cli::Cli;
use config::load_config;
use heartbeat::{Heartbeat, TokioSleeper};
use logger::FileLog;
use probe::prelude::*;
use report::HttpReporter;

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is fine.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse_args();
    logger::subscriber::init();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    // Nothing has been written yet, so failures here go to stderr.
    let log = match FileLog::open(&config.log_file) {
        Ok(log) => log,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };
    tracing::debug!(path = %log.path().display(), "Event log opened");

    let prober = PingProber::new(&config.probe.program).with_wait(config.probe.wait_seconds);
    let reporter = match HttpReporter::new(config.request_timeout) {
        Ok(reporter) => reporter,
        Err(e) => {
            eprintln!("Failed to create HTTP client: {}", report::describe(&e));
            return ExitCode::FAILURE;
        }
    };

    // An incomplete configuration is a usage problem; it is already in the
    // event log and still exits cleanly.
    if let Err(e) = Heartbeat::new(&config, &prober, &reporter, &TokioSleeper, &log)
        .start()
        .await
    {
        tracing::debug!(error = %e, "Configuration incomplete, nothing to do");
    }

    ExitCode::SUCCESS
}
