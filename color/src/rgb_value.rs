// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! RGB (24-bit truecolor) color representation.

use std::fmt::{Display, Formatter, Result};

use crate::{AnsiValue, ColorError, TransformColor, convert_rgb_into_ansi256,
            convert_rgb_into_grayscale};

/// Luminance above which a color is considered "bright", on a 0..=255 scale.
pub const BRIGHTNESS_THRESHOLD: f64 = 127.5;

/// Represents a color in RGB (24-bit truecolor) format.
#[derive(Clone, PartialEq, Eq, Hash, Copy, Debug, Default)]
pub struct RgbValue {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl From<(u8, u8, u8)> for RgbValue {
    fn from((red, green, blue): (u8, u8, u8)) -> Self { Self::from_u8(red, green, blue) }
}

/// Converts `0xRRGGBB`, the top byte is ignored.
impl From<u32> for RgbValue {
    fn from(value: u32) -> Self {
        let [_, red, green, blue] = value.to_be_bytes();
        Self { red, green, blue }
    }
}

impl RgbValue {
    #[must_use]
    pub const fn from_u8(red: u8, green: u8, blue: u8) -> Self { Self { red, green, blue } }

    /// Parses `#RRGGBB` (the `#` is optional, and hex digits are case insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidHexColor`] if `input` is not 6 hex digits.
    pub fn try_from_hex_color(input: &str) -> std::result::Result<Self, ColorError> {
        let invalid = || ColorError::InvalidHexColor {
            input: input.to_string(),
        };

        let digits = input.trim().strip_prefix('#').unwrap_or(input.trim());
        if digits.len() != 6 || !digits.chars().all(|it| it.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |range: std::ops::Range<usize>| {
            digits
                .get(range)
                .and_then(|it| u8::from_str_radix(it, 16).ok())
                .ok_or_else(invalid)
        };

        Ok(Self::from_u8(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Formats the color as `#RRGGBB` using uppercase hex digits.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }

    /// Perceived luminance on a 0.0..=255.0 scale, using the Rec. 709 coefficients.
    #[must_use]
    pub fn luminance(self) -> f64 {
        0.2126 * f64::from(self.red)
            + 0.7152 * f64::from(self.green)
            + 0.0722 * f64::from(self.blue)
    }

    #[must_use]
    pub fn is_bright(self) -> bool { self.luminance() > BRIGHTNESS_THRESHOLD }
}

/// Displays the plain `r;g;b` sequence.
impl Display for RgbValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{};{};{}", self.red, self.green, self.blue)
    }
}

impl TransformColor for RgbValue {
    fn as_rgb(&self) -> RgbValue { *self }

    fn as_ansi(&self) -> AnsiValue { convert_rgb_into_ansi256(*self) }

    fn as_grayscale(&self) -> AnsiValue { convert_rgb_into_grayscale(*self) }
}
