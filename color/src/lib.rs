// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # `huepick_color`
//!
//! Color model used by the `huepick` color wheel. It does not perform any terminal I/O,
//! it only describes colors and how they look to people with a color-vision deficiency.
//!
//! - [`Color`] is the value handed across the color wheel's boundary. It is one of a true
//!   color [`RgbValue`], an index into the xterm 256 color palette, or an index into the
//!   16 system colors.
//! - [`AnsiValue`] and [`RgbValue`] are the primitive representations, and the
//!   [`TransformColor`] trait converts between them (nearest palette entry, grayscale).
//! - [`SimulateDeficiency`] maps a color, a [`Deficiency`] kind and a [`Severity`] to the
//!   color that a person with that deficiency perceives. [`MachadoSimulator`] is the
//!   default implementation.
//! - [`global_color_support`] detects (or overrides) what the terminal can display.
//!
//! More info:
//! - <https://www.ditig.com/256-colors-cheat-sheet>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#8-bit>
//! - <https://en.wikipedia.org/wiki/Color_blindness>
//! - <https://www.inf.ufrgs.br/~oliveira/pubs_files/CVD_Simulation/CVD_Simulation.html>

// Enforce strict error handling in production library code only.
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach.
mod ansi_value;
mod color;
mod color_error;
mod convert;
mod deficiency;
mod detect_color_support;
mod macros;
mod palette;
mod rgb_value;

// Re-export.
pub use ansi_value::*;
pub use color::*;
pub use color_error::*;
pub use convert::*;
pub use deficiency::*;
pub use detect_color_support::*;
pub use palette::*;
pub use rgb_value::*;
