// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::{IsTerminal, Stdout, stdin, stdout};

use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
                          enable_raw_mode};
use huepick_color::{Color, MachadoSimulator, SimulateDeficiency};
use miette::IntoDiagnostic;

use crate::{CommonResult, CrosstermKeyPressReader, CrosstermPainter, DrawingPrimitives,
            EventLoopResult, KeyPressReader, Size, WheelError, WheelEvent, WheelState,
            apply_wheel_event, execute_commands_no_lock, ok, render_help_pages,
            render_wheel};

/// How a session ended, and with which color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WheelOutcome {
    /// Enter was pressed, this is the color on the wheel.
    Accepted(Color),
    /// Esc was pressed, this is the color the session started from.
    Cancelled(Color),
}

impl WheelOutcome {
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Self::Accepted(color) | Self::Cancelled(color) => color,
        }
    }

    #[must_use]
    pub fn is_accepted(self) -> bool { matches!(self, Self::Accepted(_)) }
}

/// Paints the wheel, blocks for one key, applies it, and repeats until the key is Enter
/// or Esc. The terminal size is read again before every frame, so resizes are picked
/// up on the next key press.
///
/// This does not set up the terminal, see [`run_color_wheel_session`] for that.
///
/// # Errors
///
/// - [`WheelError::InputClosed`] if `key_press_reader` runs out of input.
/// - Any error from `key_press_reader`, as is.
/// - [`WheelError::InvalidMode`] if the state machine is broken.
/// - Any error from `painter` or `terminal_size`.
pub fn enter_event_loop(
    state: &mut WheelState,
    painter: &mut impl DrawingPrimitives,
    key_press_reader: &mut impl KeyPressReader,
    terminal_size: impl Fn() -> CommonResult<Size>,
    simulator: &impl SimulateDeficiency,
) -> CommonResult<WheelOutcome> {
    loop {
        let size = terminal_size()?;
        painter.paint(&render_wheel(state, size, simulator), size)?;

        let input_event = key_press_reader
            .read_key_press()?
            .ok_or(WheelError::InputClosed)?;

        match apply_wheel_event(state, WheelEvent::from(input_event))? {
            EventLoopResult::ContinueAndRerender => {}
            EventLoopResult::ShowHelp => {
                show_help(painter, key_press_reader, terminal_size()?)?;
            }
            EventLoopResult::Accept(color) => return ok!(WheelOutcome::Accepted(color)),
            EventLoopResult::Cancel(color) => return ok!(WheelOutcome::Cancelled(color)),
        }
    }
}

/// Each page of help stays up until any key is pressed. That key is not applied to the
/// wheel.
fn show_help(
    painter: &mut impl DrawingPrimitives,
    key_press_reader: &mut impl KeyPressReader,
    size: Size,
) -> CommonResult<()> {
    for page in render_help_pages(size) {
        painter.paint(&page, size)?;
        key_press_reader
            .read_key_press()?
            .ok_or(WheelError::InputClosed)?;
    }
    ok!()
}

/// Runs a session on the real terminal: raw mode, the alternate screen, and a hidden
/// cursor for its duration. The terminal is restored even when the session fails.
///
/// # Errors
///
/// - [`WheelError::NotInteractive`] if stdin or stdout is not a terminal.
/// - Any error from [`enter_event_loop`], or from setting up the terminal.
pub fn run_color_wheel_session(mut state: WheelState) -> CommonResult<WheelOutcome> {
    if !(stdin().is_terminal() && stdout().is_terminal()) {
        return Err(WheelError::NotInteractive.into());
    }

    tracing::info!(message = "Color wheel session started", seed = ?state.seed());

    let mut painter = CrosstermPainter::new_with_detected_color_support(stdout());
    if let Err(error) = run_before_event_loop(&mut painter) {
        run_after_event_loop(&mut painter).ok();
        return Err(error);
    }

    let result = enter_event_loop(
        &mut state,
        &mut painter,
        &mut CrosstermKeyPressReader,
        || crossterm::terminal::size().map(Size::from).into_diagnostic(),
        &MachadoSimulator,
    );
    let cleanup_result = run_after_event_loop(&mut painter);

    match &result {
        Ok(outcome) => tracing::info!(message = "Color wheel session ended", ?outcome),
        Err(error) => tracing::error!(message = "Color wheel session failed", %error),
    }

    let outcome = result?;
    cleanup_result?;
    ok!(outcome)
}

/// Shows the color wheel, seeded with `initial_color`, and returns the color that was
/// accepted. When the session is cancelled, this is `initial_color` (or the default
/// `0;128;0` when there is none).
///
/// # Errors
///
/// See [`run_color_wheel_session`].
pub fn run_color_wheel(initial_color: Option<Color>) -> CommonResult<Color> {
    run_color_wheel_session(WheelState::new(initial_color)).map(WheelOutcome::color)
}

fn run_before_event_loop(painter: &mut CrosstermPainter<Stdout>) -> CommonResult<()> {
    enable_raw_mode().into_diagnostic()?;
    let writer = painter.get_writer_mut();
    execute_commands_no_lock!(writer, EnterAlternateScreen);
    painter.set_cursor_visible(false)?;
    painter.flush()
}

fn run_after_event_loop(painter: &mut CrosstermPainter<Stdout>) -> CommonResult<()> {
    painter.set_cursor_visible(true)?;
    let writer = painter.get_writer_mut();
    execute_commands_no_lock!(writer, LeaveAlternateScreen);
    disable_raw_mode().into_diagnostic()
}
