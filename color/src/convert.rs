// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Conversions between [`RgbValue`] and the xterm 256 color palette. These are used to
//! degrade true colors when the terminal can't display them.

use crate::{AnsiValue, CUBE_LEVELS, GRAYSCALE_START, RgbValue};

/// Any color that can be expressed as RGB, and approximated by a palette entry.
pub trait TransformColor {
    /// The true color value of `self`.
    fn as_rgb(&self) -> RgbValue;

    /// The palette entry (16..=255) closest to `self`.
    fn as_ansi(&self) -> AnsiValue;

    /// The grayscale palette entry (black, white, or 232..=255) closest to the luma of
    /// `self`.
    fn as_grayscale(&self) -> AnsiValue;
}

/// Finds the closest entry in the 6x6x6 cube or the grayscale ramp. The 16 system colors
/// are skipped, since terminals are free to remap them.
#[must_use]
pub fn convert_rgb_into_ansi256(rgb: RgbValue) -> AnsiValue {
    let (red_step, red) = nearest_cube_level(rgb.red);
    let (green_step, green) = nearest_cube_level(rgb.green);
    let (blue_step, blue) = nearest_cube_level(rgb.blue);
    let cube_index = 16 + 36 * red_step + 6 * green_step + blue_step;
    let cube_rgb = RgbValue::from_u8(red, green, blue);

    let average = (u16::from(rgb.red) + u16::from(rgb.green) + u16::from(rgb.blue)) / 3;
    let gray_step = nearest_gray_step(average);
    let gray_level = gray_level_for_step(gray_step);
    let gray_rgb = RgbValue::from_u8(gray_level, gray_level, gray_level);

    if squared_distance(rgb, gray_rgb) < squared_distance(rgb, cube_rgb) {
        AnsiValue::new(GRAYSCALE_START + gray_step)
    } else {
        AnsiValue::new(cube_index)
    }
}

/// Uses the Rec. 601 luma of `rgb` to pick between black (16), white (231) and the
/// grayscale ramp (232..=255).
#[must_use]
pub fn convert_rgb_into_grayscale(rgb: RgbValue) -> AnsiValue {
    let luma = (299 * u32::from(rgb.red)
        + 587 * u32::from(rgb.green)
        + 114 * u32::from(rgb.blue)
        + 500)
        / 1000;

    let ramp = (0..24_u8).map(|step| {
        (GRAYSCALE_START + step, u32::from(gray_level_for_step(step)))
    });
    let candidates = [(16_u8, 0_u32), (231, 255)].into_iter().chain(ramp);

    let (index, _) = candidates
        .min_by_key(|(_, level)| level.abs_diff(luma))
        .unwrap_or((16, 0));
    AnsiValue::new(index)
}

fn nearest_cube_level(channel: u8) -> (u8, u8) {
    let mut best = (0_u8, CUBE_LEVELS[0]);
    for (step, level) in (0_u8..).zip(CUBE_LEVELS) {
        if level.abs_diff(channel) < best.1.abs_diff(channel) {
            best = (step, level);
        }
    }
    best
}

fn nearest_gray_step(average: u16) -> u8 {
    let step = average.saturating_sub(3) / 10;
    u8::try_from(step.min(23)).unwrap_or(23)
}

fn gray_level_for_step(step: u8) -> u8 { 8 + 10 * step }

fn squared_distance(lhs: RgbValue, rhs: RgbValue) -> u32 {
    let delta = |a: u8, b: u8| u32::from(a.abs_diff(b)).pow(2);
    delta(lhs.red, rhs.red) + delta(lhs.green, rhs.green) + delta(lhs.blue, rhs.blue)
}
