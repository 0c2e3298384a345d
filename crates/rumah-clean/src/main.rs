//! rumah-clean - listing spreadsheet to CSV

use clap::Parser;
use rumah_clean::{pipeline, CleanConfig, Cli};
use rumah_common::logging::{init_logging, LogConfig, LogLevel, LogOutput};
use std::process;
use tracing::error;

fn main() {
    // A missing .env is fine
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let log_config = LogConfig::builder()
        .level(if cli.verbose {
            LogLevel::Debug
        } else {
            LogLevel::Warn
        })
        .output(LogOutput::Console)
        .log_file_prefix("rumah-clean")
        .build();

    // Environment variables take precedence
    let log_config = log_config.clone().with_env_overrides().unwrap_or(log_config);

    // The tool must work without logging
    let _guard = init_logging(&log_config).unwrap_or_default();

    let config = CleanConfig::from_cli(&cli);

    match pipeline::run(&config) {
        Ok(summary) => {
            println!(
                "Wrote {} cleaned rows to {}",
                summary.written,
                summary.output.display()
            );
        },
        Err(e) => {
            error!(error = %e, "Cleaning failed");
            eprintln!("Error: {}", e);
            process::exit(1);
        },
    }
}
