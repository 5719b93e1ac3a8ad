// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::PathBuf;

use miette::IntoDiagnostic;
use tracing_appender::rolling::{RollingFileAppender, Rotation};

/// Opens (or creates) the file at `path_str` for appending. The file is never rotated.
/// Missing parent folders are created.
///
/// # Errors
///
/// If `path_str` has no file name, or the file can't be opened.
pub fn try_create(path_str: &str) -> miette::Result<RollingFileAppender> {
    let path = PathBuf::from(path_str);

    let parent = path.parent().ok_or_else(|| {
        miette::miette!(
            "Can't access the folder of {}. It might not exist, or you might not have the required permissions.",
            path.display()
        )
    })?;

    let file_name = path.file_name().ok_or_else(|| {
        miette::miette!("{} does not name a file.", path.display())
    })?;

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy())
        .build(parent)
        .into_diagnostic()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_create_makes_missing_folders() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("nested").join("huepick.log");

        let appender = try_create(file_path.to_str().unwrap());

        assert!(appender.is_ok());
        assert!(file_path.exists());
    }

    #[test]
    fn test_try_create_without_file_name() {
        assert!(try_create("/").is_err());
    }
}
