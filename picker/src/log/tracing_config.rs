// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use miette::IntoDiagnostic;
use tracing::subscriber::DefaultGuard;
use tracing_core::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{CommonResult, ok, try_create_layers};

/// Where the logs are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriterConfig {
    None,
    /// Path of the log file, eg: `log.txt` or `/tmp/huepick.log`.
    File(String),
}

/// Configure the tracing logging to suit your needs: the log file, and the log level.
///
/// - [`TracingConfig::install_global`] for the whole process, eg: from `main`.
/// - [`TracingConfig::install_thread_local`] for the current thread only, eg: in tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    pub writer_config: WriterConfig,
    pub level_filter: LevelFilter,
}

impl TracingConfig {
    #[must_use]
    pub fn new_file(file_path: impl Into<String>, level_filter: LevelFilter) -> Self {
        Self {
            writer_config: WriterConfig::File(file_path.into()),
            level_filter,
        }
    }

    #[must_use]
    pub fn get_writer_config(&self) -> WriterConfig { self.writer_config.clone() }

    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { self.level_filter }

    /// Does nothing when there is nothing to log.
    ///
    /// # Errors
    ///
    /// If the log file can't be opened, or a global subscriber is already installed.
    pub fn install_global(self) -> CommonResult<()> {
        let Some(layers) = try_create_layers(&self)? else {
            return ok!();
        };
        tracing_subscriber::registry()
            .with(layers)
            .try_init()
            .into_diagnostic()
    }

    /// Logging stops when the returned guard is dropped. `None` when there is nothing
    /// to log.
    ///
    /// # Errors
    ///
    /// If the log file can't be opened.
    pub fn install_thread_local(self) -> CommonResult<Option<DefaultGuard>> {
        let maybe_layers = try_create_layers(&self)?;
        ok!(maybe_layers.map(|layers| tracing_subscriber::registry().with(layers).set_default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_install_thread_local_writes_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("huepick.log");
        let config = TracingConfig::new_file(file_path.to_str().unwrap(), LevelFilter::INFO);

        {
            let _guard = config.install_thread_local().unwrap().unwrap();
            tracing::info!(message = "session started");
            tracing::debug!(message = "filtered out");
        }

        let content = std::fs::read_to_string(&file_path).unwrap();
        assert!(content.contains("session started"));
        assert!(!content.contains("filtered out"));
    }

    #[test]
    fn test_nothing_to_install() {
        let config = TracingConfig {
            writer_config: WriterConfig::None,
            level_filter: LevelFilter::DEBUG,
        };
        assert!(config.install_thread_local().unwrap().is_none());
    }
}
