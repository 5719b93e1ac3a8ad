// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Display, Formatter},
          str::FromStr};

use strum_macros::Display as StrumDisplay;

use crate::{Ansi16Value, AnsiValue, ColorError, PALETTE_16_LEN, PALETTE_256_LEN, RgbValue,
            TransformColor};

/// The color space that a [`Color`] belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, StrumDisplay)]
pub enum ColorType {
    #[strum(to_string = "TrueColor")]
    TrueColor,
    #[strum(to_string = "256Color")]
    Ansi256,
    #[strum(to_string = "16Color")]
    Ansi16,
}

/// A color handed into and out of the color wheel.
///
/// Palette variants hold the index, their RGB value is the canonical xterm value for
/// that entry. A [`Color::Palette16`] index is always in `0..16`, build one from an
/// untrusted index with [`Color::try_palette_16`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    TrueColor(RgbValue),
    Palette256(AnsiValue),
    Palette16(Ansi16Value),
}

impl Default for Color {
    /// `0;128;0`, the same RGB value as the `Green` system color.
    fn default() -> Self { Self::TrueColor(RgbValue::from_u8(0, 128, 0)) }
}

impl From<RgbValue> for Color {
    fn from(rgb: RgbValue) -> Self { Self::TrueColor(rgb) }
}

impl Color {
    #[must_use]
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::TrueColor(RgbValue::from_u8(red, green, blue))
    }

    #[must_use]
    pub const fn palette_256(index: u8) -> Self { Self::Palette256(AnsiValue::new(index)) }

    /// # Errors
    ///
    /// Returns [`ColorError::PaletteIndexOutOfRange`] if `index` is not in `0..16`.
    pub fn try_palette_16(index: u8) -> Result<Self, ColorError> {
        Ansi16Value::try_new(index).map(Self::Palette16)
    }

    #[must_use]
    pub fn color_type(self) -> ColorType {
        match self {
            Self::TrueColor(_) => ColorType::TrueColor,
            Self::Palette256(_) => ColorType::Ansi256,
            Self::Palette16(_) => ColorType::Ansi16,
        }
    }

    /// The palette entry, for palette colors.
    #[must_use]
    pub fn palette_entry(self) -> Option<AnsiValue> {
        match self {
            Self::TrueColor(_) => None,
            Self::Palette256(ansi) => Some(ansi),
            Self::Palette16(ansi) => Some(ansi.as_ansi_value()),
        }
    }

    /// `r;g;b` for true colors, the palette index for palette colors.
    #[must_use]
    pub fn plain_sequence(self) -> String {
        match self {
            Self::TrueColor(rgb) => rgb.to_string(),
            Self::Palette256(ansi) => ansi.index.to_string(),
            Self::Palette16(ansi) => ansi.index().to_string(),
        }
    }

    #[must_use]
    pub fn to_hex(self) -> String { self.as_rgb().to_hex() }

    #[must_use]
    pub fn is_bright(self) -> bool { self.as_rgb().is_bright() }

    #[must_use]
    pub fn brightness_label(self) -> &'static str {
        if self.is_bright() { "Bright" } else { "Dark" }
    }
}

impl TransformColor for Color {
    fn as_rgb(&self) -> RgbValue {
        match self {
            Self::TrueColor(rgb) => *rgb,
            Self::Palette256(ansi) => ansi.as_rgb(),
            Self::Palette16(ansi) => ansi.as_rgb(),
        }
    }

    fn as_ansi(&self) -> AnsiValue {
        match self {
            Self::TrueColor(rgb) => rgb.as_ansi(),
            Self::Palette256(ansi) => *ansi,
            Self::Palette16(ansi) => ansi.as_ansi_value(),
        }
    }

    fn as_grayscale(&self) -> AnsiValue { self.as_rgb().as_grayscale() }
}

/// Same format as [`Color::plain_sequence`] for true colors. Palette colors are
/// prefixed with their palette, eg: `ansi256:42`, `ansi16:2`, so that the output can be
/// parsed back with [`Color::from_str`].
impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TrueColor(rgb) => write!(f, "{rgb}"),
            Self::Palette256(ansi) => write!(f, "ansi256:{}", ansi.index),
            Self::Palette16(ansi) => write!(f, "ansi16:{}", ansi.index()),
        }
    }
}

/// Accepts:
/// - `#RRGGBB`: true color.
/// - `r;g;b`: true color, each channel in `0..=255`.
/// - `N` or `ansi256:N`: 256 palette index.
/// - `ansi16:N`: 16 color palette index.
impl FromStr for Color {
    type Err = ColorError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        let invalid = || ColorError::InvalidSequence {
            input: input.to_string(),
        };

        if trimmed.starts_with('#') {
            return Ok(Self::TrueColor(RgbValue::try_from_hex_color(trimmed)?));
        }

        if let Some(index) = trimmed.strip_prefix("ansi16:") {
            let index = parse_palette_index(index, PALETTE_16_LEN).ok_or_else(invalid)?;
            return Self::try_palette_16(index);
        }

        let palette_256 = trimmed.strip_prefix("ansi256:").unwrap_or(trimmed);
        if !palette_256.contains(';') {
            let index =
                parse_palette_index(palette_256, PALETTE_256_LEN).ok_or_else(invalid)?;
            return Ok(Self::palette_256(index));
        }

        let channels = trimmed
            .split(';')
            .map(|it| it.trim().parse::<u8>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| invalid())?;
        match channels.as_slice() {
            [red, green, blue] => Ok(Self::rgb(*red, *green, *blue)),
            _ => Err(invalid()),
        }
    }
}

fn parse_palette_index(input: &str, len: u16) -> Option<u8> {
    let index = input.trim().parse::<u16>().ok()?;
    if index < len { u8::try_from(index).ok() } else { None }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_default_is_green() {
        let color = Color::default();
        assert_eq2!(color.as_rgb(), RgbValue::from_u8(0, 128, 0));
        assert_eq2!(color.color_type(), ColorType::TrueColor);
    }

    #[test]
    fn test_palette_16_range() {
        assert_eq2!(
            Color::try_palette_16(15),
            Ok(Color::Palette16(Ansi16Value::WHITE))
        );
        assert_eq2!(
            Color::try_palette_16(16),
            Err(ColorError::PaletteIndexOutOfRange { index: 16, len: 16 })
        );
    }

    #[test_case(Color::rgb(10, 20, 30), "10;20;30", "#0A141E", "TrueColor")]
    #[test_case(Color::palette_256(57), "57", "#5F00FF", "256Color")]
    #[test_case(Color::try_palette_16(2).unwrap(), "2", "#008000", "16Color")]
    fn test_metadata(color: Color, sequence: &str, hex: &str, type_label: &str) {
        assert_eq2!(color.plain_sequence(), sequence);
        assert_eq2!(color.to_hex(), hex);
        assert_eq2!(color.color_type().to_string(), type_label);
    }

    #[test_case(Color::rgb(255, 255, 0), "Bright")]
    #[test_case(Color::palette_256(232), "Dark")]
    fn test_brightness_label(color: Color, expected: &str) {
        assert_eq2!(color.brightness_label(), expected);
    }

    #[test_case("#C8324B", Color::rgb(200, 50, 75))]
    #[test_case("200;50;75", Color::rgb(200, 50, 75))]
    #[test_case(" 0 ; 128 ; 0 ", Color::rgb(0, 128, 0))]
    #[test_case("255", Color::palette_256(255))]
    #[test_case("ansi256:42", Color::palette_256(42))]
    #[test_case("ansi16:9", Color::try_palette_16(9).unwrap())]
    fn test_from_str(input: &str, expected: Color) {
        assert_eq2!(input.parse::<Color>(), Ok(expected));
    }

    #[test_case("256")]
    #[test_case("ansi16:16")]
    #[test_case("1;2")]
    #[test_case("1;2;300")]
    #[test_case("#12345")]
    #[test_case("green")]
    fn test_from_str_invalid(input: &str) {
        assert!(input.parse::<Color>().is_err(), "{input} should not parse");
    }

    #[test]
    fn test_display_can_be_parsed_back() {
        for color in [
            Color::rgb(1, 2, 3),
            Color::palette_256(200),
            Color::try_palette_16(7).unwrap(),
        ] {
            assert_eq2!(color.to_string().parse::<Color>(), Ok(color));
        }
    }
}
