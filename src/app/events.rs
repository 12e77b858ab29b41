//! Outbound application events.
//!
//! The application core emits these through the
//! [`EventSink`](super::ports::EventSink) port. Adapters on the other side
//! decide what to do with them — log to the serial console, record in a
//! test, etc.

use crate::control::gate::UpdateDecision;
use crate::fsm::StateId;

use super::mode::Mode;

/// Structured events emitted by the application core.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// The service has started (carries the configured PWM period in µs).
    Started { pwm_period_us: u32 },

    /// The control loop moved between states.
    StateChanged { from: StateId, to: StateId },

    /// A mode was picked on the menu.
    ModeSelected(Mode),

    /// The user went back to the menu.
    ReturnedToMenu,

    /// The slider commanded a new intensity (percent actually applied).
    ManualIntensity(u8),

    /// The automatic page was offered a new pair.
    DisplayOffered(UpdateDecision),

    /// Per-tick diagnostic snapshot while a mode is selected.
    Telemetry(TelemetryData),
}

/// A point-in-time diagnostic snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TelemetryData {
    pub state: StateId,
    pub tick: u64,
    /// Ambient reading if the sensor was sampled this tick.
    pub reading: Option<f32>,
    /// Duty cycle currently commanded on the LED.
    pub duty: f32,
}
