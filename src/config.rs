//! System configuration parameters
//!
//! All tunable parameters for the dimmer. Read once at start-up, either
//! from defaults or from a JSON document; never written back.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Core system configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    // --- Timing ---
    /// Control loop tick interval (milliseconds)
    pub tick_interval_ms: u32,

    // --- PWM ---
    /// LED PWM switching period (microseconds)
    pub pwm_period_us: u32,

    // --- Display ---
    /// Minimum change (percentage points) before the automatic page is redrawn
    pub display_threshold_pct: f32,

    // --- Diagnostics ---
    /// Emit one telemetry event per tick while a mode is selected
    pub diagnostics_enabled: bool,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 10,   // 100 Hz
            pwm_period_us: 1000,    // 1 kHz
            display_threshold_pct: 2.0,
            diagnostics_enabled: true,
        }
    }
}

impl SystemConfig {
    /// Parse a JSON document. Missing fields fall back to their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|_| Error::Config("malformed JSON"))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the control loop cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.tick_interval_ms == 0 {
            return Err(Error::Config("tick_interval_ms must be non-zero"));
        }
        if self.pwm_period_us == 0 {
            return Err(Error::Config("pwm_period_us must be non-zero"));
        }
        if !(self.display_threshold_pct > 0.0 && self.display_threshold_pct <= 100.0) {
            return Err(Error::Config("display_threshold_pct must be in (0, 100]"));
        }
        Ok(())
    }

    pub fn tick_interval(&self) -> core::time::Duration {
        core::time::Duration::from_millis(u64::from(self.tick_interval_ms))
    }

    pub fn pwm_period(&self) -> core::time::Duration {
        core::time::Duration::from_micros(u64::from(self.pwm_period_us))
    }
}
