//! Logging initialization for the terminal host.
//!
//! Writes to `./concierge.log`, the terminal, or both.

use std::fs::File;
use std::path::Path;

use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

const LOG_FILE: &str = "./concierge.log";

/// Destination for log output.
#[allow(dead_code)]
pub enum LogDestination {
    /// Write to ./concierge.log in the current directory.
    File,
    /// Write to terminal (stdout).
    Terminal,
    /// Write to both file and terminal.
    Both,
}

/// Initialize the global logger for the chosen destination. Failing to
/// create the log file degrades to whatever loggers remain.
pub fn initialize(destination: LogDestination) {
    let level = LevelFilter::Info;
    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build();

    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();
    if matches!(destination, LogDestination::Terminal | LogDestination::Both) {
        loggers.push(TermLogger::new(
            level,
            config.clone(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ));
    }
    if matches!(destination, LogDestination::File | LogDestination::Both) {
        match File::create(Path::new(LOG_FILE)) {
            Ok(file) => loggers.push(WriteLogger::new(level, config.clone(), file)),
            Err(err) => eprintln!("Warning: could not create {LOG_FILE}: {err}"),
        }
    }

    if !loggers.is_empty() {
        let _ = CombinedLogger::init(loggers);
    }
}
