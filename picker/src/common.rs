// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Turns on verbose `tracing::debug!` output of every key press and state change.
pub const DEVELOPMENT_MODE: bool = false;

/// Type alias to make it easy to work with [`miette::Result`].
pub type CommonResult<T> = miette::Result<T>;

/// Syntactic sugar for `Ok(())` (no args) and `Ok($value)` (one arg).
#[macro_export]
macro_rules! ok {
    () => {
        Ok(())
    };
    ($value:expr) => {
        Ok($value)
    };
}
