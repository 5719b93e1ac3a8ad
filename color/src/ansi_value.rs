// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{ANSI_COLOR_NAMES, ANSI_COLOR_PALETTE, ColorError, RgbValue, TransformColor,
            convert_rgb_into_grayscale};

/// Number of entries in the xterm 256 color palette.
pub const PALETTE_256_LEN: u16 = 256;

/// Number of system colors, the first 16 entries of the palette.
pub const PALETTE_16_LEN: u16 = 16;

/// Index into the xterm 256 color palette. Each index maps to a fixed RGB value and a
/// (not necessarily unique) xterm name.
#[derive(Clone, PartialEq, Eq, Hash, Copy, Debug)]
pub struct AnsiValue {
    pub index: u8,
}

impl From<u8> for AnsiValue {
    fn from(index: u8) -> Self { Self { index } }
}

impl AnsiValue {
    #[must_use]
    pub const fn new(index: u8) -> Self { Self { index } }

    /// The xterm name of this palette entry, eg: `Green`, `DeepSkyBlue4`, `Grey93`.
    #[must_use]
    pub fn name(self) -> &'static str { ANSI_COLOR_NAMES[usize::from(self.index)] }

    /// Check if this is one of the 16 system colors (indices 0-15).
    #[must_use]
    pub const fn is_basic(self) -> bool { self.index < 16 }
}

impl TransformColor for AnsiValue {
    fn as_rgb(&self) -> RgbValue { ANSI_COLOR_PALETTE[usize::from(self.index)].into() }

    fn as_ansi(&self) -> AnsiValue { *self }

    fn as_grayscale(&self) -> AnsiValue { convert_rgb_into_grayscale(self.as_rgb()) }
}

/// One of the 16 system colors. The index is always in `0..16`, the only way to build
/// one from an arbitrary index is [`Ansi16Value::try_new`].
#[derive(Clone, PartialEq, Eq, Hash, Copy, Debug)]
pub struct Ansi16Value(AnsiValue);

impl Ansi16Value {
    pub const GREEN: Self = Self(AnsiValue::new(2));
    pub const WHITE: Self = Self(AnsiValue::new(15));

    /// # Errors
    ///
    /// Returns [`ColorError::PaletteIndexOutOfRange`] if `index` is not in `0..16`.
    pub fn try_new(index: u8) -> Result<Self, ColorError> {
        let ansi = AnsiValue::new(index);
        if ansi.is_basic() {
            Ok(Self(ansi))
        } else {
            Err(ColorError::PaletteIndexOutOfRange {
                index: index.into(),
                len: PALETTE_16_LEN,
            })
        }
    }

    #[must_use]
    pub const fn index(self) -> u8 { self.0.index }

    #[must_use]
    pub const fn as_ansi_value(self) -> AnsiValue { self.0 }

    /// Moves `delta` entries along the 16 system colors, wrapping at both ends.
    #[must_use]
    pub fn wrapping_add(self, delta: i16) -> Self {
        let len = i16::try_from(PALETTE_16_LEN).unwrap_or(16);
        let next = (i16::from(self.index()) + delta).rem_euclid(len);
        Self(AnsiValue::new(u8::try_from(next).unwrap_or(0)))
    }
}

impl TryFrom<AnsiValue> for Ansi16Value {
    type Error = ColorError;

    fn try_from(ansi: AnsiValue) -> Result<Self, Self::Error> { Self::try_new(ansi.index) }
}

impl From<Ansi16Value> for AnsiValue {
    fn from(value: Ansi16Value) -> Self { value.0 }
}

impl TransformColor for Ansi16Value {
    fn as_rgb(&self) -> RgbValue { self.0.as_rgb() }

    fn as_ansi(&self) -> AnsiValue { self.0 }

    fn as_grayscale(&self) -> AnsiValue { self.0.as_grayscale() }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    #[test_case(2, RgbValue::from_u8(0, 128, 0), "Green")]
    #[test_case(42, RgbValue::from_u8(0, 215, 135), "SpringGreen2")]
    #[test_case(57, RgbValue::from_u8(95, 0, 255), "BlueViolet")]
    #[test_case(255, RgbValue::from_u8(238, 238, 238), "Grey93")]
    fn test_as_rgb_and_name(index: u8, rgb: RgbValue, name: &str) {
        let ansi = AnsiValue::new(index);
        assert_eq2!(ansi.as_rgb(), rgb);
        assert_eq2!(ansi.name(), name);
    }

    #[test]
    fn test_is_basic() {
        for index in 0..16 {
            assert!(AnsiValue::from(index).is_basic(), "{index} should be basic");
        }
        for index in [16, 50, 196, 232, 255] {
            assert!(!AnsiValue::from(index).is_basic(), "{index} is not basic");
        }
    }

    #[test]
    fn test_ansi_16_value_rejects_palette_256_indices() {
        assert_eq2!(Ansi16Value::try_new(15), Ok(Ansi16Value::WHITE));
        assert_eq2!(
            Ansi16Value::try_new(200),
            Err(ColorError::PaletteIndexOutOfRange {
                index: 200,
                len: 16
            })
        );
        assert!(Ansi16Value::try_from(AnsiValue::new(16)).is_err());
    }

    #[test_case(15, 1, 0)]
    #[test_case(0, -1, 15)]
    #[test_case(2, 1, 3)]
    fn test_ansi_16_value_wraps(index: u8, delta: i16, expected: u8) {
        let value = Ansi16Value::try_new(index).unwrap().wrapping_add(delta);
        assert_eq2!(value.index(), expected);
    }
}
