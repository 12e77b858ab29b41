//! Host-side analog input.
//!
//! The raw count lives in a shared `AtomicU16`; a [`SimLightHandle`] lets
//! another thread (the light generator in the host binary, or a test)
//! move it around.

use core::sync::atomic::{AtomicBool, AtomicU16, Ordering};
use std::sync::Arc;

use super::AnalogInput;
use crate::error::SensorError;

/// 12-bit converter, like most MCU ADCs.
pub const SIM_FULL_SCALE: u16 = 4095;

#[derive(Default)]
struct Shared {
    raw: AtomicU16,
    fail: AtomicBool,
}

pub struct SimAnalogInput {
    shared: Arc<Shared>,
}

/// Injection side of a [`SimAnalogInput`].
#[derive(Clone)]
pub struct SimLightHandle {
    shared: Arc<Shared>,
}

impl SimAnalogInput {
    pub fn new() -> (Self, SimLightHandle) {
        let shared = Arc::new(Shared::default());
        (
            Self {
                shared: shared.clone(),
            },
            SimLightHandle { shared },
        )
    }
}

impl SimLightHandle {
    pub fn set_raw(&self, raw: u16) {
        self.shared.raw.store(raw, Ordering::Relaxed);
    }

    /// Set the level as a fraction of full scale (clamped).
    pub fn set_level(&self, level: f32) {
        let raw = (level.clamp(0.0, 1.0) * f32::from(SIM_FULL_SCALE)).round() as u16;
        self.set_raw(raw);
    }

    /// Make subsequent conversions fail until cleared.
    pub fn set_failing(&self, fail: bool) {
        self.shared.fail.store(fail, Ordering::Relaxed);
    }
}

impl AnalogInput for SimAnalogInput {
    fn read_raw(&mut self) -> Result<u16, SensorError> {
        if self.shared.fail.load(Ordering::Relaxed) {
            return Err(SensorError::AdcReadFailed);
        }
        Ok(self.shared.raw.load(Ordering::Relaxed))
    }

    fn full_scale(&self) -> u16 {
        SIM_FULL_SCALE
    }
}
