//! Interactive composite shape editor over stdin/stdout.
//!
//! Pass `--log <path>` to mirror runtime events into a JSON-lines file.

use std::io;
use std::process::ExitCode;

use easel_mvp::logging::{FileSink, Logger, LoggingResult};
use easel_mvp::{CliDriver, CliDriverError, EaselError, RuntimeConfig};

const LOG_BUDGET_BYTES: u64 = 512 * 1024;

fn main() -> ExitCode {
    let config = match build_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("An error occurred: {err}");
            return ExitCode::FAILURE;
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let driver = CliDriver::with_config(stdin.lock(), stdout.lock(), config);

    match driver.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliDriverError::Easel(EaselError::InvalidNumber { .. })) => {
            eprintln!("Enter a valid number.");
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("An error occurred: {err}");
            ExitCode::FAILURE
        }
    }
}

fn build_config() -> LoggingResult<RuntimeConfig> {
    let mut config = RuntimeConfig::default();
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--log" {
            let path = args.next().unwrap_or_else(|| "easel.log.jsonl".to_string());
            let sink = FileSink::new(path, LOG_BUDGET_BYTES)?;
            config.logger = Some(Logger::new(sink));
        }
    }
    Ok(config)
}
