// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Color-vision deficiency simulation.
//!
//! The default [`MachadoSimulator`] uses the full severity matrices from Machado,
//! Oliveira and Fernandes (2009), "A Physiologically-based Model for Simulation of Color
//! Vision Deficiency". Partial severities linearly blend the matrix with the identity,
//! `(1 - s) * I + s * M`. The matrices operate on linear RGB, so colors are decoded
//! from sRGB first and encoded again afterwards.

use std::{fmt::{Display, Formatter, Result},
          str::FromStr};

use strum_macros::{Display as StrumDisplay, EnumIter};

use crate::{ColorError, RgbValue};

/// Which cone type is missing (or anomalous).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, StrumDisplay, EnumIter)]
pub enum Deficiency {
    /// Reduced sensitivity to red.
    #[strum(to_string = "Protanopia")]
    Protan,
    /// Reduced sensitivity to green.
    #[strum(to_string = "Deuteranopia")]
    Deutan,
    /// Reduced sensitivity to blue.
    #[strum(to_string = "Tritanopia")]
    Tritan,
}

type Matrix3 = [[f64; 3]; 3];

#[rustfmt::skip]
const PROTAN_MATRIX: Matrix3 = [
    [ 0.152_286,  1.052_583, -0.204_868],
    [ 0.114_503,  0.786_281,  0.099_216],
    [-0.003_882, -0.048_116,  1.051_998],
];

#[rustfmt::skip]
const DEUTAN_MATRIX: Matrix3 = [
    [ 0.367_322,  0.860_646, -0.227_968],
    [ 0.280_085,  0.672_501,  0.047_413],
    [-0.011_820,  0.042_940,  0.968_881],
];

#[rustfmt::skip]
const TRITAN_MATRIX: Matrix3 = [
    [ 1.255_528, -0.076_749, -0.178_779],
    [-0.078_411,  0.930_809,  0.147_602],
    [ 0.004_733,  0.691_367,  0.303_900],
];

impl Deficiency {
    fn full_severity_matrix(self) -> &'static Matrix3 {
        match self {
            Self::Protan => &PROTAN_MATRIX,
            Self::Deutan => &DEUTAN_MATRIX,
            Self::Tritan => &TRITAN_MATRIX,
        }
    }
}

/// Severity of a deficiency, in `0.00..=1.00` with a step of `0.01`.
///
/// It is stored as hundredths so that stepping up and down never accumulates floating
/// point error. Stepping is circular: [`Severity::increment`] past `1.00` goes back to
/// `0.00` and [`Severity::decrement`] below `0.00` goes to `1.00`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Severity {
    hundredths: u8,
}

impl Severity {
    pub const MAX_HUNDREDTHS: u8 = 100;
    pub const NONE: Self = Self { hundredths: 0 };
    pub const FULL: Self = Self {
        hundredths: Self::MAX_HUNDREDTHS,
    };

    /// # Errors
    ///
    /// Returns [`ColorError::SeverityOutOfRange`] if `hundredths` is greater than 100.
    pub fn try_from_hundredths(hundredths: u8) -> std::result::Result<Self, ColorError> {
        if hundredths > Self::MAX_HUNDREDTHS {
            return Err(ColorError::SeverityOutOfRange {
                value: format!("{hundredths}/100"),
            });
        }
        Ok(Self { hundredths })
    }

    /// Rounds `value` to the nearest hundredth.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::SeverityOutOfRange`] if `value` is not in `0.0..=1.0`.
    pub fn try_from_f64(value: f64) -> std::result::Result<Self, ColorError> {
        if !(0.0..=1.0).contains(&value) {
            return Err(ColorError::SeverityOutOfRange {
                value: value.to_string(),
            });
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let hundredths = (value * 100.0).round() as u8;
        Self::try_from_hundredths(hundredths)
    }

    #[must_use]
    pub fn as_f64(self) -> f64 { f64::from(self.hundredths) / 100.0 }

    #[must_use]
    pub fn hundredths(self) -> u8 { self.hundredths }

    #[must_use]
    pub fn increment(self) -> Self {
        if self.hundredths >= Self::MAX_HUNDREDTHS {
            Self::NONE
        } else {
            Self {
                hundredths: self.hundredths + 1,
            }
        }
    }

    #[must_use]
    pub fn decrement(self) -> Self {
        match self.hundredths.checked_sub(1) {
            Some(hundredths) => Self { hundredths },
            None => Self::FULL,
        }
    }
}

impl Default for Severity {
    fn default() -> Self { Self { hundredths: 60 } }
}

/// Formats with 2 decimal places, eg: `0.60`.
impl Display for Severity {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result { write!(f, "{:.2}", self.as_f64()) }
}

/// Parses a number in `0.0..=1.0`, eg: `0.6` or `0.60`.
impl FromStr for Severity {
    type Err = ColorError;

    fn from_str(input: &str) -> std::result::Result<Self, Self::Err> {
        let value = input
            .trim()
            .parse::<f64>()
            .map_err(|_| ColorError::SeverityOutOfRange {
                value: input.to_string(),
            })?;
        Self::try_from_f64(value)
    }
}

/// Seam used by the renderer, so tests can observe which colors get simulated.
pub trait SimulateDeficiency {
    /// Must be pure: the same arguments always produce the same color.
    fn simulate(
        &self,
        color: RgbValue,
        deficiency: Deficiency,
        severity: Severity,
    ) -> RgbValue;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MachadoSimulator;

impl SimulateDeficiency for MachadoSimulator {
    fn simulate(
        &self,
        color: RgbValue,
        deficiency: Deficiency,
        severity: Severity,
    ) -> RgbValue {
        let amount = severity.as_f64();
        let matrix = deficiency.full_severity_matrix();
        let linear = [
            srgb_to_linear(color.red),
            srgb_to_linear(color.green),
            srgb_to_linear(color.blue),
        ];

        let mut output = [0_u8; 3];
        for (row_index, row) in matrix.iter().enumerate() {
            let sum: f64 = row
                .iter()
                .zip(linear)
                .enumerate()
                .map(|(column, (weight, channel))| {
                    let identity = if row_index == column { 1.0 } else { 0.0 };
                    ((1.0 - amount) * identity + amount * weight) * channel
                })
                .sum();
            output[row_index] = linear_to_srgb(sum);
        }

        RgbValue::from_u8(output[0], output[1], output[2])
    }
}

fn srgb_to_linear(channel: u8) -> f64 {
    let value = f64::from(channel) / 255.0;
    if value <= 0.040_45 {
        value / 12.92
    } else {
        ((value + 0.055) / 1.055).powf(2.4)
    }
}

fn linear_to_srgb(value: f64) -> u8 {
    let value = value.clamp(0.0, 1.0);
    let encoded = if value <= 0.003_130_8 {
        value * 12.92
    } else {
        1.055 * value.powf(1.0 / 2.4) - 0.055
    };
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let it = (encoded * 255.0).round().clamp(0.0, 255.0) as u8;
    it
}
