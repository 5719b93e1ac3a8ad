// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use huepick_color::{Ansi16Value, AnsiValue, Color, RgbValue, Severity, TransformColor};

use crate::{ColorMode, RgbChannel, WheelError};

/// Palette index used when the seed color doesn't say otherwise: `Green`, which is also
/// the RGB value `0;128;0`. [`Ansi16Value::GREEN`] is the same entry.
pub const DEFAULT_PALETTE_INDEX: u8 = 2;

/// What a session starts from, and goes back to when it is cancelled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct WheelSeed {
    pub initial_color: Option<Color>,
    pub severity: Severity,
}

/// The whole state of one color wheel session.
///
/// Only the raw value selected by [`ColorMode`] is used by [`WheelState::resolve`]. The
/// other two keep their last value, so switching modes and back again doesn't lose
/// anything.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WheelState {
    mode: ColorMode,
    rgb: RgbValue,
    palette_256: AnsiValue,
    palette_16: Ansi16Value,
    active_channel: RgbChannel,
    severity: Severity,
    seed: WheelSeed,
}

impl Default for WheelState {
    fn default() -> Self { Self::from_seed(WheelSeed::default()) }
}

impl WheelState {
    #[must_use]
    pub fn new(initial_color: Option<Color>) -> Self {
        Self::from_seed(WheelSeed {
            initial_color,
            ..Default::default()
        })
    }

    /// With no initial color: true color mode, `0;128;0`, and `Green` in both palettes.
    /// Otherwise the mode follows the color's type, the RGB channels take its RGB value,
    /// and the palette index is only taken for the palette that the color belongs to.
    #[must_use]
    pub fn from_seed(seed: WheelSeed) -> Self {
        let color = seed.initial_color.unwrap_or_default();
        let default_index = AnsiValue::new(DEFAULT_PALETTE_INDEX);
        let (palette_256, palette_16) = match color {
            Color::TrueColor(_) => (default_index, Ansi16Value::GREEN),
            Color::Palette256(ansi) => (ansi, Ansi16Value::GREEN),
            Color::Palette16(ansi) => (default_index, ansi),
        };

        Self {
            mode: ColorMode::from(color.color_type()),
            rgb: color.as_rgb(),
            palette_256,
            palette_16,
            active_channel: RgbChannel::Green,
            severity: seed.severity,
            seed,
        }
    }

    /// Replaces the severity, and also the one that a cancelled session reverts to.
    #[must_use]
    pub fn with_severity(self, severity: Severity) -> Self {
        Self::from_seed(WheelSeed {
            severity,
            ..self.seed
        })
    }

    #[must_use]
    pub fn mode(&self) -> ColorMode { self.mode }

    #[must_use]
    pub fn rgb(&self) -> RgbValue { self.rgb }

    #[must_use]
    pub fn active_channel(&self) -> RgbChannel { self.active_channel }

    #[must_use]
    pub fn severity(&self) -> Severity { self.severity }

    #[must_use]
    pub fn seed(&self) -> WheelSeed { self.seed }

    /// The color that the current mode describes.
    #[must_use]
    pub fn resolve(&self) -> Color {
        match self.mode {
            ColorMode::TrueColor => Color::TrueColor(self.rgb),
            ColorMode::Palette256 => Color::Palette256(self.palette_256),
            ColorMode::Palette16 => Color::Palette16(self.palette_16),
        }
    }

    /// # Errors
    ///
    /// Returns [`WheelError::InvalidMode`] if the next mode can't be computed.
    pub fn next_mode(&mut self) -> Result<(), WheelError> {
        self.mode = self.mode.try_next()?;
        Ok(())
    }

    pub fn next_channel(&mut self) { self.active_channel = self.active_channel.next(); }

    pub fn prev_channel(&mut self) { self.active_channel = self.active_channel.prev(); }

    /// Adds one to the value selected by the mode (and the active channel, in true color
    /// mode). Wraps from the last value to the first.
    pub fn increment_value(&mut self) {
        match self.mode {
            ColorMode::TrueColor => {
                let channel = self.channel_mut();
                *channel = channel.wrapping_add(1);
            }
            ColorMode::Palette256 => {
                self.palette_256.index = self.palette_256.index.wrapping_add(1);
            }
            ColorMode::Palette16 => {
                self.palette_16 = self.palette_16.wrapping_add(1);
            }
        }
    }

    /// Subtracts one from the value selected by the mode. Wraps from the first value to
    /// the last.
    pub fn decrement_value(&mut self) {
        match self.mode {
            ColorMode::TrueColor => {
                let channel = self.channel_mut();
                *channel = channel.wrapping_sub(1);
            }
            ColorMode::Palette256 => {
                self.palette_256.index = self.palette_256.index.wrapping_sub(1);
            }
            ColorMode::Palette16 => {
                self.palette_16 = self.palette_16.wrapping_add(-1);
            }
        }
    }

    pub fn increment_severity(&mut self) { self.severity = self.severity.increment(); }

    pub fn decrement_severity(&mut self) { self.severity = self.severity.decrement(); }

    /// Go back to the seed, dropping every change made in this session.
    pub fn reset(&mut self) { *self = Self::from_seed(self.seed); }

    /// The value of `channel` in the RGB raw value.
    #[must_use]
    pub fn channel_value(&self, channel: RgbChannel) -> u8 {
        match channel {
            RgbChannel::Red => self.rgb.red,
            RgbChannel::Green => self.rgb.green,
            RgbChannel::Blue => self.rgb.blue,
        }
    }

    fn channel_mut(&mut self) -> &mut u8 {
        match self.active_channel {
            RgbChannel::Red => &mut self.rgb.red,
            RgbChannel::Green => &mut self.rgb.green,
            RgbChannel::Blue => &mut self.rgb.blue,
        }
    }
}

#[cfg(test)]
mod tests {
    use huepick_color::assert_eq2;
    use test_case::test_case;

    use super::*;

    #[test]
    fn test_defaults() {
        let state = WheelState::new(None);
        assert_eq2!(state.mode(), ColorMode::TrueColor);
        assert_eq2!(state.resolve(), Color::rgb(0, 128, 0));
        assert_eq2!(state.active_channel(), RgbChannel::Green);
        assert_eq2!(state.severity().to_string(), "0.60");
    }

    #[test_case(Color::rgb(200, 50, 75), ColorMode::TrueColor)]
    #[test_case(Color::palette_256(196), ColorMode::Palette256)]
    #[test_case(Color::try_palette_16(12).unwrap(), ColorMode::Palette16)]
    fn test_seed_selects_mode_and_resolves_back(color: Color, mode: ColorMode) {
        let state = WheelState::new(Some(color));
        assert_eq2!(state.mode(), mode);
        assert_eq2!(state.resolve(), color);
    }

    #[test]
    fn test_palette_seed_fills_rgb_channels() {
        let state = WheelState::new(Some(Color::palette_256(57)));
        assert_eq2!(state.rgb(), RgbValue::from_u8(95, 0, 255));
    }

    #[test]
    fn test_channel_wraps_around() {
        let mut state = WheelState::new(Some(Color::rgb(0, 255, 0)));

        state.increment_value();
        assert_eq2!(state.resolve(), Color::rgb(0, 0, 0));

        state.decrement_value();
        assert_eq2!(state.resolve(), Color::rgb(0, 255, 0));

        state.next_channel();
        state.decrement_value();
        assert_eq2!(state.resolve(), Color::rgb(0, 255, 255));
    }

    #[test]
    fn test_every_channel_value_wraps() {
        for channel in [RgbChannel::Red, RgbChannel::Green, RgbChannel::Blue] {
            let mut state = WheelState::new(Some(Color::rgb(255, 255, 255)));
            while state.active_channel() != channel {
                state.next_channel();
            }
            state.increment_value();
            assert_eq2!(state.channel_value(channel), 0);
            state.decrement_value();
            assert_eq2!(state.channel_value(channel), 255);
        }
    }

    #[test]
    fn test_palette_256_wraps_around() {
        let mut state = WheelState::new(Some(Color::palette_256(255)));
        state.increment_value();
        assert_eq2!(state.resolve(), Color::palette_256(0));
        state.decrement_value();
        assert_eq2!(state.resolve(), Color::palette_256(255));
    }

    #[test]
    fn test_palette_16_wraps_around() {
        let mut state = WheelState::new(Some(Color::try_palette_16(15).unwrap()));
        state.increment_value();
        assert_eq2!(state.resolve(), Color::try_palette_16(0).unwrap());
        state.decrement_value();
        assert_eq2!(state.resolve(), Color::try_palette_16(15).unwrap());
    }

    #[test]
    fn test_every_palette_16_seed_resets_to_itself() {
        for index in 0..16 {
            let seed = Color::try_palette_16(index).unwrap();
            let mut state = WheelState::new(Some(seed));
            state.increment_value();
            state.next_mode().unwrap();
            state.reset();
            assert_eq2!(state.resolve(), seed);
        }
        assert!(Color::try_palette_16(200).is_err());
    }

    #[test]
    fn test_mode_round_trip_keeps_values() {
        let mut state = WheelState::new(Some(Color::rgb(10, 20, 30)));

        state.next_mode().unwrap();
        assert_eq2!(state.mode(), ColorMode::Palette256);
        state.increment_value();
        assert_eq2!(
            state.resolve(),
            Color::palette_256(DEFAULT_PALETTE_INDEX + 1)
        );

        state.next_mode().unwrap();
        state.next_mode().unwrap();
        assert_eq2!(state.resolve(), Color::rgb(10, 20, 30));

        state.next_mode().unwrap();
        assert_eq2!(
            state.resolve(),
            Color::palette_256(DEFAULT_PALETTE_INDEX + 1)
        );
    }

    #[test]
    fn test_reset_goes_back_to_seed() {
        let seed = Color::rgb(200, 50, 75);
        let mut state = WheelState::new(Some(seed));
        state.increment_value();
        state.next_mode().unwrap();
        state.increment_severity();

        state.reset();
        assert_eq2!(state, WheelState::new(Some(seed)));
    }

    #[test]
    fn test_with_severity_survives_reset() {
        let severity = Severity::try_from_hundredths(25).unwrap();
        let mut state = WheelState::new(None).with_severity(severity);
        state.decrement_severity();
        state.reset();
        assert_eq2!(state.severity(), severity);
    }
}
