// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use miette::IntoDiagnostic;

use crate::{CommonResult, Size};

/// The keys that the color wheel tells apart. Everything else is [`Key::Other`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Tab,
    Enter,
    Esc,
    Char(char),
    Other,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct KeyPress {
    pub key: Key,
    pub ctrl: bool,
}

impl KeyPress {
    #[must_use]
    pub const fn plain(key: Key) -> Self { Self { key, ctrl: false } }

    #[must_use]
    pub const fn with_ctrl(key: Key) -> Self { Self { key, ctrl: true } }
}

impl From<Key> for KeyPress {
    fn from(key: Key) -> Self { Self::plain(key) }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputEvent {
    Keyboard(KeyPress),
    Resize(Size),
}

/// Key releases, mouse and focus events are not [`InputEvent`]s, they are skipped.
impl TryFrom<Event> for InputEvent {
    type Error = ();

    fn try_from(event: Event) -> Result<Self, Self::Error> {
        match event {
            Event::Key(key_event) if key_event.kind != KeyEventKind::Release => {
                Ok(Self::Keyboard(KeyPress::from(key_event)))
            }
            Event::Resize(col_width, row_height) => {
                Ok(Self::Resize(Size::new(col_width, row_height)))
            }
            _ => Err(()),
        }
    }
}

impl From<KeyEvent> for KeyPress {
    fn from(key_event: KeyEvent) -> Self {
        let key = match key_event.code {
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Tab => Key::Tab,
            KeyCode::Enter => Key::Enter,
            KeyCode::Esc => Key::Esc,
            KeyCode::Char(character) => Key::Char(character),
            _ => Key::Other,
        };
        Self {
            key,
            ctrl: key_event.modifiers.contains(KeyModifiers::CONTROL),
        }
    }
}

/// Blocks until the next [`InputEvent`] is available. `Ok(None)` means that no more
/// input will ever arrive.
pub trait KeyPressReader {
    /// # Errors
    ///
    /// Returns an error if the terminal can't be read from.
    fn read_key_press(&mut self) -> CommonResult<Option<InputEvent>>;
}

#[derive(Debug, Default)]
pub struct CrosstermKeyPressReader;

impl KeyPressReader for CrosstermKeyPressReader {
    fn read_key_press(&mut self) -> CommonResult<Option<InputEvent>> {
        loop {
            let event = crossterm::event::read().into_diagnostic()?;
            if let Ok(input_event) = InputEvent::try_from(event) {
                return Ok(Some(input_event));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyEventState;
    use huepick_color::assert_eq2;

    use super::*;

    fn key_event(code: KeyCode, modifiers: KeyModifiers, kind: KeyEventKind) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind,
            state: KeyEventState::NONE,
        })
    }

    #[test]
    fn test_convert_crossterm_events() {
        // Ctrl + Right.
        {
            let event =
                key_event(KeyCode::Right, KeyModifiers::CONTROL, KeyEventKind::Press);
            assert_eq2!(
                InputEvent::try_from(event),
                Ok(InputEvent::Keyboard(KeyPress::with_ctrl(Key::Right)))
            );
        }

        // Unknown keys are kept, so they can re-render.
        {
            let event = key_event(KeyCode::F(5), KeyModifiers::NONE, KeyEventKind::Press);
            assert_eq2!(
                InputEvent::try_from(event),
                Ok(InputEvent::Keyboard(KeyPress::plain(Key::Other)))
            );
        }

        // Releases are skipped.
        {
            let event = key_event(KeyCode::Enter, KeyModifiers::NONE, KeyEventKind::Release);
            assert_eq2!(InputEvent::try_from(event), Err(()));
        }

        // Resize.
        {
            assert_eq2!(
                InputEvent::try_from(Event::Resize(120, 40)),
                Ok(InputEvent::Resize(Size::new(120, 40)))
            );
        }
    }
}
