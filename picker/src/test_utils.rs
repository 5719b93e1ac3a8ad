// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{collections::VecDeque,
          io::{Result, Write}};

use miette::IntoDiagnostic;

use crate::{CommonResult, InputEvent, Key, KeyPress, KeyPressReader};

/// Captures everything the painter writes, escape sequences included.
#[derive(Debug, Default)]
pub struct TestStringWriter {
    buffer: String,
}

impl TestStringWriter {
    pub fn new() -> Self { Self::default() }

    pub fn get_buffer(&self) -> &str { &self.buffer }
}

impl Write for TestStringWriter {
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        match std::str::from_utf8(buf) {
            Ok(value) => {
                self.buffer.push_str(value);
                Ok(buf.len())
            }
            Err(_) => Ok(0),
        }
    }

    fn flush(&mut self) -> Result<()> { Ok(()) }
}

/// Hands out the queued events in order, then `None`, like a closed stdin.
#[derive(Debug, Default)]
pub struct TestVecKeyPressReader {
    pub input_event_vec: VecDeque<InputEvent>,
}

impl TestVecKeyPressReader {
    pub fn from_keys(keys: impl IntoIterator<Item = KeyPress>) -> Self {
        Self {
            input_event_vec: keys.into_iter().map(InputEvent::Keyboard).collect(),
        }
    }

    /// The number of events that were not read yet.
    pub fn remaining(&self) -> usize { self.input_event_vec.len() }
}

impl KeyPressReader for TestVecKeyPressReader {
    fn read_key_press(&mut self) -> CommonResult<Option<InputEvent>> {
        Ok(self.input_event_vec.pop_front())
    }
}

/// Every read fails with an I/O error, like a terminal that went away.
#[derive(Debug, Default)]
pub struct TestFailingKeyPressReader;

pub const TEST_READ_ERROR_MESSAGE: &str = "terminal went away";

impl KeyPressReader for TestFailingKeyPressReader {
    fn read_key_press(&mut self) -> CommonResult<Option<InputEvent>> {
        Err::<Option<InputEvent>, _>(std::io::Error::other(TEST_READ_ERROR_MESSAGE))
            .into_diagnostic()
    }
}

pub fn key(key: Key) -> KeyPress { KeyPress::plain(key) }

pub fn ctrl(key: Key) -> KeyPress { KeyPress::with_ctrl(key) }
