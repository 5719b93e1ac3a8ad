// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use huepick_color::Color;

use crate::{CommonResult, DEVELOPMENT_MODE, InputEvent, Key, KeyPress, WheelState, ok};

/// Everything a key press can ask the color wheel to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WheelEvent {
    ModeNext,
    ChannelUp,
    ChannelDown,
    AdjustNext,
    AdjustPrev,
    SeverityUp,
    SeverityDown,
    ShowHelp,
    Accept,
    Cancel,
    /// Unknown keys and terminal resizes. The wheel is painted again as it is.
    Noop,
}

/// | Key                | Event                                  |
/// |--------------------|----------------------------------------|
/// | Tab                | [`WheelEvent::ModeNext`]               |
/// | Up / Down          | [`WheelEvent::ChannelUp`] / `ChannelDown` |
/// | Right / Left       | [`WheelEvent::AdjustNext`] / `AdjustPrev` |
/// | Ctrl+Right / Left  | [`WheelEvent::SeverityUp`] / `SeverityDown` |
/// | h / H              | [`WheelEvent::ShowHelp`]               |
/// | Enter              | [`WheelEvent::Accept`]                 |
/// | Esc, Ctrl+C        | [`WheelEvent::Cancel`]                 |
impl From<InputEvent> for WheelEvent {
    fn from(input_event: InputEvent) -> Self {
        let InputEvent::Keyboard(KeyPress { key, ctrl }) = input_event else {
            return Self::Noop;
        };

        match (key, ctrl) {
            (Key::Tab, _) => Self::ModeNext,
            (Key::Up, _) => Self::ChannelUp,
            (Key::Down, _) => Self::ChannelDown,
            (Key::Right, true) => Self::SeverityUp,
            (Key::Right, false) => Self::AdjustNext,
            (Key::Left, true) => Self::SeverityDown,
            (Key::Left, false) => Self::AdjustPrev,
            (Key::Char('h' | 'H'), false) => Self::ShowHelp,
            (Key::Enter, _) => Self::Accept,
            (Key::Esc, _) | (Key::Char('c'), true) => Self::Cancel,
            _ => Self::Noop,
        }
    }
}

/// What the event loop should do after an event was applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventLoopResult {
    ContinueAndRerender,
    ShowHelp,
    /// The user picked this color.
    Accept(Color),
    /// The user gave up, this is the initial color (or the default one).
    Cancel(Color),
}

/// Applies `event` to `state`. Every event is valid in every state.
///
/// # Errors
///
/// Only if the state machine itself is broken, see [`crate::WheelError::InvalidMode`].
pub fn apply_wheel_event(
    state: &mut WheelState,
    event: WheelEvent,
) -> CommonResult<EventLoopResult> {
    DEVELOPMENT_MODE.then(|| {
        // % is Display, ? is Debug.
        tracing::debug!(
            message = "apply_wheel_event",
            event = ?event,
            before = ?state
        );
    });

    let result = match event {
        WheelEvent::ModeNext => {
            state.next_mode()?;
            EventLoopResult::ContinueAndRerender
        }
        WheelEvent::ChannelUp => {
            state.increment_value();
            EventLoopResult::ContinueAndRerender
        }
        WheelEvent::ChannelDown => {
            state.decrement_value();
            EventLoopResult::ContinueAndRerender
        }
        WheelEvent::AdjustNext => {
            state.next_channel();
            EventLoopResult::ContinueAndRerender
        }
        WheelEvent::AdjustPrev => {
            state.prev_channel();
            EventLoopResult::ContinueAndRerender
        }
        WheelEvent::SeverityUp => {
            state.increment_severity();
            EventLoopResult::ContinueAndRerender
        }
        WheelEvent::SeverityDown => {
            state.decrement_severity();
            EventLoopResult::ContinueAndRerender
        }
        WheelEvent::ShowHelp => EventLoopResult::ShowHelp,
        WheelEvent::Accept => EventLoopResult::Accept(state.resolve()),
        WheelEvent::Cancel => {
            state.reset();
            EventLoopResult::Cancel(state.resolve())
        }
        WheelEvent::Noop => EventLoopResult::ContinueAndRerender,
    };

    DEVELOPMENT_MODE.then(|| {
        tracing::debug!(message = "apply_wheel_event", result = ?result, after = ?state);
    });

    ok!(result)
}

#[cfg(test)]
mod tests {
    use huepick_color::{Severity, assert_eq2};
    use test_case::test_case;

    use super::*;
    use crate::{ColorMode, RgbChannel, Size};

    #[test_case(KeyPress::plain(Key::Tab), WheelEvent::ModeNext)]
    #[test_case(KeyPress::plain(Key::Up), WheelEvent::ChannelUp)]
    #[test_case(KeyPress::plain(Key::Down), WheelEvent::ChannelDown)]
    #[test_case(KeyPress::plain(Key::Right), WheelEvent::AdjustNext)]
    #[test_case(KeyPress::plain(Key::Left), WheelEvent::AdjustPrev)]
    #[test_case(KeyPress::with_ctrl(Key::Right), WheelEvent::SeverityUp)]
    #[test_case(KeyPress::with_ctrl(Key::Left), WheelEvent::SeverityDown)]
    #[test_case(KeyPress::plain(Key::Char('h')), WheelEvent::ShowHelp)]
    #[test_case(KeyPress::plain(Key::Char('H')), WheelEvent::ShowHelp)]
    #[test_case(KeyPress::plain(Key::Enter), WheelEvent::Accept)]
    #[test_case(KeyPress::plain(Key::Esc), WheelEvent::Cancel)]
    #[test_case(KeyPress::with_ctrl(Key::Char('c')), WheelEvent::Cancel)]
    #[test_case(KeyPress::plain(Key::Char('x')), WheelEvent::Noop)]
    #[test_case(KeyPress::plain(Key::Other), WheelEvent::Noop)]
    fn test_key_translation(key_press: KeyPress, expected: WheelEvent) {
        assert_eq2!(WheelEvent::from(InputEvent::Keyboard(key_press)), expected);
    }

    #[test]
    fn test_resize_is_noop() {
        let event = WheelEvent::from(InputEvent::Resize(Size::new(10, 10)));
        assert_eq2!(event, WheelEvent::Noop);
    }

    #[test]
    fn test_accept_after_channel_up() {
        let mut state = WheelState::new(None);
        assert_eq2!(state.active_channel(), RgbChannel::Green);

        let result = apply_wheel_event(&mut state, WheelEvent::ChannelUp).unwrap();
        assert_eq2!(result, EventLoopResult::ContinueAndRerender);

        let result = apply_wheel_event(&mut state, WheelEvent::Accept).unwrap();
        assert_eq2!(result, EventLoopResult::Accept(Color::rgb(0, 129, 0)));
    }

    #[test]
    fn test_cancel_reverts_to_initial_color() {
        let initial = Color::rgb(200, 50, 75);
        let mut state = WheelState::new(Some(initial));

        for event in [
            WheelEvent::ChannelUp,
            WheelEvent::ModeNext,
            WheelEvent::ChannelUp,
            WheelEvent::SeverityUp,
            WheelEvent::ModeNext,
            WheelEvent::ChannelUp,
            WheelEvent::AdjustNext,
        ] {
            apply_wheel_event(&mut state, event).unwrap();
        }
        assert_eq2!(state.mode(), ColorMode::Palette16);

        let result = apply_wheel_event(&mut state, WheelEvent::Cancel).unwrap();
        assert_eq2!(result, EventLoopResult::Cancel(initial));
        assert_eq2!(state, WheelState::new(Some(initial)));
    }

    #[test]
    fn test_cancel_returns_palette_16_initial_color_exactly() {
        let initial = Color::try_palette_16(13).unwrap();
        let mut state = WheelState::new(Some(initial));
        for event in [WheelEvent::ChannelUp, WheelEvent::ChannelUp, WheelEvent::ModeNext] {
            apply_wheel_event(&mut state, event).unwrap();
        }
        let result = apply_wheel_event(&mut state, WheelEvent::Cancel).unwrap();
        assert_eq2!(result, EventLoopResult::Cancel(initial));
    }

    #[test]
    fn test_cancel_without_initial_color_returns_default() {
        let mut state = WheelState::new(None);
        apply_wheel_event(&mut state, WheelEvent::ChannelDown).unwrap();
        let result = apply_wheel_event(&mut state, WheelEvent::Cancel).unwrap();
        assert_eq2!(result, EventLoopResult::Cancel(Color::rgb(0, 128, 0)));
    }

    #[test]
    fn test_severity_events_wrap() {
        let mut state = WheelState::new(None).with_severity(Severity::FULL);

        apply_wheel_event(&mut state, WheelEvent::SeverityUp).unwrap();
        assert_eq2!(state.severity(), Severity::NONE);

        apply_wheel_event(&mut state, WheelEvent::SeverityDown).unwrap();
        assert_eq2!(state.severity(), Severity::FULL);
    }

    #[test]
    fn test_adjust_events_in_palette_mode_only_move_the_channel() {
        let mut state = WheelState::new(Some(Color::palette_256(100)));
        apply_wheel_event(&mut state, WheelEvent::AdjustPrev).unwrap();
        assert_eq2!(state.active_channel(), RgbChannel::Red);
        assert_eq2!(state.resolve(), Color::palette_256(100));
    }

    #[test]
    fn test_show_help_and_noop_do_not_change_state() {
        let mut state = WheelState::new(Some(Color::rgb(1, 2, 3)));
        let before = state;

        let result = apply_wheel_event(&mut state, WheelEvent::ShowHelp).unwrap();
        assert_eq2!(result, EventLoopResult::ShowHelp);

        let result = apply_wheel_event(&mut state, WheelEvent::Noop).unwrap();
        assert_eq2!(result, EventLoopResult::ContinueAndRerender);

        assert_eq2!(state, before);
    }
}
