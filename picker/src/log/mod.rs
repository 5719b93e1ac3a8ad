// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Logging to a file with `tracing`. The terminal is used by the color wheel, so logs
//! never go to stdout or stderr.

// Attach.
pub mod rolling_file_appender_impl;
mod logging_api;
mod tracing_config;
mod tracing_init;

// Re-export.
pub use logging_api::*;
pub use tracing_config::*;
pub use tracing_init::*;
