// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # huepick
//!
//! An interactive color wheel for the terminal. Pick a true color, an ANSI 256 color or
//! one of the 16 system colors with the keyboard, and see right away how it looks to
//! people with protanopia, deuteranopia or tritanopia.
//!
//! ```no_run
//! use huepick::run_color_wheel;
//! use huepick_color::Color;
//!
//! fn main() -> miette::Result<()> {
//!     let color = run_color_wheel(Some(Color::rgb(200, 50, 75)))?;
//!     println!("{}", color.to_hex());
//!     Ok(())
//! }
//! ```
//!
//! # How it is put together
//!
//! 1. [`WheelState`] holds the session: the [`ColorMode`], the RGB channels, both palette
//!    indices, the active [`RgbChannel`] and the deficiency [`Severity`].
//! 2. [`KeyPressReader`] blocks for one [`InputEvent`], which becomes a [`WheelEvent`].
//! 3. [`apply_wheel_event`] updates the state and tells the loop what to do next with an
//!    [`EventLoopResult`].
//! 4. [`render_wheel`] is a pure function from the state and the terminal [`Size`] to a
//!    list of [`DrawCommand`]s, which a [`DrawingPrimitives`] implementation (eg:
//!    [`CrosstermPainter`]) paints.
//! 5. [`enter_event_loop`] repeats this until the user accepts (Enter) or cancels (Esc).
//!
//! Logging is off unless [`try_initialize_logging_global`] is called. The logs go to a
//! file, since the terminal is busy displaying the wheel.
//!
//! [`Severity`]: huepick_color::Severity

// Enforce strict error handling in production library code only.
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach.
mod clap_config;
mod color_mode;
mod common;
mod crossterm_macros;
mod dimens;
mod event_loop;
mod help;
mod keypress;
mod layout;
mod log;
mod painter;
mod renderer;
mod wheel_error;
mod wheel_event;
mod wheel_state;

#[cfg(test)]
pub mod test_utils;

// Re-export.
pub use clap_config::*;
pub use color_mode::*;
pub use common::*;
pub use dimens::*;
pub use event_loop::*;
pub use help::*;
pub use keypress::*;
pub use layout::*;
pub use log::*;
pub use painter::*;
pub use renderer::*;
pub use wheel_error::*;
pub use wheel_event::*;
pub use wheel_state::*;
