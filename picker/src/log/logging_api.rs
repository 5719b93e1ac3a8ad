// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use tracing_core::LevelFilter;

use crate::{CommonResult, TracingConfig, ok};

/// Used when no log file is given.
pub const LOG_FILE_NAME: &str = "log.txt";

/// Logs to `log_file` (or [`LOG_FILE_NAME`]) for the rest of the process. `OFF` turns
/// logging off, and nothing is installed.
///
/// # Errors
///
/// If the log file can't be opened, or logging was already initialized.
pub fn try_initialize_logging_global(
    level_filter: LevelFilter,
    log_file: Option<String>,
) -> CommonResult<()> {
    if level_filter == LevelFilter::OFF {
        return ok!();
    }

    let log_file = log_file.unwrap_or_else(|| LOG_FILE_NAME.to_string());
    TracingConfig::new_file(log_file, level_filter).install_global()
}
