// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use miette::Diagnostic;

use crate::Size;

/// Errors that end a color wheel session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Diagnostic)]
pub enum WheelError {
    /// A raw mode value that is not one of [`crate::ColorMode`]'s variants. This means an
    /// invariant was broken, the session can't continue.
    #[error("Invalid color mode: {value}")]
    #[diagnostic(code(huepick::invalid_mode))]
    InvalidMode { value: u8 },

    #[error("The input stream was closed before a color was picked")]
    #[diagnostic(
        code(huepick::input_closed),
        help("Press Enter to accept a color or Esc to cancel")
    )]
    InputClosed,

    #[error("The color wheel needs an interactive terminal")]
    #[diagnostic(
        code(huepick::not_interactive),
        help("Run it from a terminal, with stdin and stdout not redirected")
    )]
    NotInteractive,
}

/// The panels of the wheel don't fit in the terminal. The renderer recovers from this by
/// clamping every panel to at least one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error, Diagnostic)]
#[error("Terminal {size:?} is too small, panels would be {panel_width} x {panel_height}")]
#[diagnostic(
    code(huepick::terminal_too_small),
    help("Make the terminal window larger")
)]
pub struct TerminalTooSmallError {
    pub size: Size,
    pub panel_width: i32,
    pub panel_height: i32,
}
