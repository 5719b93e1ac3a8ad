// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Queues crossterm commands on `$writer`, which must already be borrowed mutably. The
/// commands are written out when `$writer` is flushed, so a whole frame can be painted
/// in one go. Errors are converted to [`miette::Report`] and returned with `?`.
#[macro_export]
macro_rules! queue_commands_no_lock {
    ($writer:expr $(, $command:expr)* $(,)?) => {{
        use miette::IntoDiagnostic as _;
        $(
            ::crossterm::QueueableCommand::queue($writer, $command).into_diagnostic()?;
        )*
    }}
}

/// Same as [`queue_commands_no_lock!`], and then flushes `$writer`. Used for the terminal
/// setup and teardown that has to reach the terminal right away.
#[macro_export]
macro_rules! execute_commands_no_lock {
    ($writer:expr $(, $command:expr)* $(,)?) => {{
        use miette::IntoDiagnostic as _;
        $(
            ::crossterm::QueueableCommand::queue($writer, $command).into_diagnostic()?;
        )*
        ::std::io::Write::flush($writer).into_diagnostic()?;
    }}
}
