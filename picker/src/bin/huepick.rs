// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::process::ExitCode;

use clap::Parser;
use huepick::{CLIArg, CommonResult, ok, run_color_wheel_session,
              try_initialize_logging_global};
use huepick_color::global_color_support;
use tracing_core::LevelFilter;

/// Prints the picked color. Exits with `1` when the selection was cancelled, so scripts
/// can tell the two apart.
fn main() -> CommonResult<ExitCode> {
    let cli_arg = CLIArg::parse();

    if let Some(color_support) = cli_arg.color_support {
        global_color_support::set_override(color_support.into());
    }

    if cli_arg.global_options.enable_logging {
        try_initialize_logging_global(
            LevelFilter::DEBUG,
            Some(cli_arg.global_options.log_file.clone()),
        )?;
        tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);
    }

    let outcome = run_color_wheel_session(cli_arg.wheel_state())?;
    println!("{}", cli_arg.format.format(outcome.color()));

    ok!(if outcome.is_accepted() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
