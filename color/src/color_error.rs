// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use miette::Diagnostic;

/// Errors produced while building or parsing colors and severities.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Diagnostic)]
pub enum ColorError {
    #[error("Invalid hex color: {input:?}")]
    #[diagnostic(
        code(huepick_color::invalid_hex_color),
        help("Use the `#RRGGBB` format, eg: `#00ff7f`")
    )]
    InvalidHexColor { input: String },

    #[error("Invalid color: {input:?}")]
    #[diagnostic(
        code(huepick_color::invalid_sequence),
        help(
            "Use `#RRGGBB`, `r;g;b`, a palette index `N` (or `ansi256:N`), or `ansi16:N`"
        )
    )]
    InvalidSequence { input: String },

    #[error("Palette index {index} is out of range, it must be less than {len}")]
    #[diagnostic(code(huepick_color::palette_index_out_of_range))]
    PaletteIndexOutOfRange { index: u16, len: u16 },

    #[error("Severity {value} is out of range")]
    #[diagnostic(
        code(huepick_color::severity_out_of_range),
        help("Severity must be between 0.0 and 1.0")
    )]
    SeverityOutOfRange { value: String },
}
