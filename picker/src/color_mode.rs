// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use huepick_color::{Color, ColorType};
use strum::EnumCount;
use strum_macros::{Display, EnumCount, EnumIter};

use crate::WheelError;

/// Which of the wheel's raw values is authoritative: the RGB channels, the 256 palette
/// index, or the 16 color palette index. Tab cycles through them in declaration order.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumCount, EnumIter)]
pub enum ColorMode {
    TrueColor = 0,
    Palette256 = 1,
    Palette16 = 2,
}

impl TryFrom<u8> for ColorMode {
    type Error = WheelError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::TrueColor),
            1 => Ok(Self::Palette256),
            2 => Ok(Self::Palette16),
            _ => Err(WheelError::InvalidMode { value }),
        }
    }
}

impl From<ColorType> for ColorMode {
    fn from(color_type: ColorType) -> Self {
        match color_type {
            ColorType::TrueColor => Self::TrueColor,
            ColorType::Ansi256 => Self::Palette256,
            ColorType::Ansi16 => Self::Palette16,
        }
    }
}

impl ColorMode {
    /// `(mode + 1) mod 3`.
    ///
    /// # Errors
    ///
    /// Returns [`WheelError::InvalidMode`] if the arithmetic lands outside the known
    /// modes.
    pub fn try_next(self) -> Result<Self, WheelError> {
        #[allow(clippy::cast_possible_truncation)]
        let count = Self::COUNT as u8;
        Self::try_from((self as u8 + 1) % count)
    }
}

/// The RGB channel that Up and Down change in [`ColorMode::TrueColor`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum RgbChannel {
    Red,
    Green,
    Blue,
}

impl RgbChannel {
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Red => Self::Green,
            Self::Green => Self::Blue,
            Self::Blue => Self::Red,
        }
    }

    #[must_use]
    pub fn prev(self) -> Self {
        match self {
            Self::Red => Self::Blue,
            Self::Green => Self::Red,
            Self::Blue => Self::Green,
        }
    }

    /// Pure red, green or blue, used to paint this channel's adjuster.
    #[must_use]
    pub fn display_color(self) -> Color {
        match self {
            Self::Red => Color::rgb(255, 0, 0),
            Self::Green => Color::rgb(0, 255, 0),
            Self::Blue => Color::rgb(0, 0, 255),
        }
    }
}
