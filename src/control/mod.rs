//! Control-law primitives: the normalized value types that flow from the
//! light sensor to the LED, and the automatic-mode mapping between them.
//!
//! ```text
//!   SensorReading ──▶ automatic_duty() ──▶ DutyCycle ──▶ LED PWM
//!        │                                     │
//!        └──────── percent() ──▶ gate ◀── percent() ┘
//! ```

pub mod gate;

use crate::error::{ActuatorError, SensorError};

// ---------------------------------------------------------------------------
// SensorReading
// ---------------------------------------------------------------------------

/// Normalized ambient-light reading, always within [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct SensorReading(f32);

impl SensorReading {
    pub const DARK: Self = Self(0.0);
    pub const BRIGHT: Self = Self(1.0);

    /// Accept `value` only if it already lies within [0, 1].
    pub fn checked(value: f32) -> Result<Self, SensorError> {
        if (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(SensorError::OutOfRange)
        }
    }

    /// Clamp `value` into [0, 1]. NaN maps to 0.
    pub fn saturating(value: f32) -> Self {
        if value.is_nan() {
            Self(0.0)
        } else {
            Self(value.clamp(0.0, 1.0))
        }
    }

    /// Normalize a raw ADC count against the converter's full-scale count.
    pub fn from_raw(raw: u16, full_scale: u16) -> Result<Self, SensorError> {
        if full_scale == 0 {
            return Err(SensorError::OutOfRange);
        }
        Self::checked(f32::from(raw) / f32::from(full_scale))
    }

    pub fn fraction(self) -> f32 {
        self.0
    }

    /// Ambient luminosity as a percentage (0–100).
    pub fn percent(self) -> f32 {
        self.0 * 100.0
    }
}

// ---------------------------------------------------------------------------
// DutyCycle
// ---------------------------------------------------------------------------

/// Fraction of each PWM period the LED is driven, always within [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct DutyCycle(f32);

impl DutyCycle {
    pub const OFF: Self = Self(0.0);
    pub const FULL: Self = Self(1.0);

    /// Accept `value` only if it already lies within [0, 1].
    pub fn checked(value: f32) -> Result<Self, ActuatorError> {
        if (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ActuatorError::DutyOutOfRange)
        }
    }

    /// Clamp `value` into [0, 1]. NaN maps to 0 (LED off).
    pub fn saturating(value: f32) -> Self {
        if value.is_nan() {
            Self(0.0)
        } else {
            Self(value.clamp(0.0, 1.0))
        }
    }

    /// Slider position (0–100) to duty. Values above 100 are rejected.
    pub fn from_percent(percent: u8) -> Result<Self, ActuatorError> {
        if percent > 100 {
            return Err(ActuatorError::DutyOutOfRange);
        }
        Ok(Self(f32::from(percent) / 100.0))
    }

    pub fn fraction(self) -> f32 {
        self.0
    }

    /// LED intensity as a percentage (0–100).
    pub fn percent(self) -> f32 {
        self.0 * 100.0
    }

    /// Scale to a HAL compare value in `0..=max`.
    pub fn to_ticks(self, max: u16) -> u16 {
        (self.0 * f32::from(max)).round() as u16
    }
}

// ---------------------------------------------------------------------------
// Automatic control law
// ---------------------------------------------------------------------------

/// Darker room, brighter LED: `duty = 1 - reading`.
pub fn automatic_duty(reading: SensorReading) -> DutyCycle {
    DutyCycle::saturating(1.0 - reading.fraction())
}
