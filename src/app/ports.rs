//! Port traits — the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ AppService / ControlLoop (domain)
//! ```
//!
//! Driven adapters (light sensor, LED PWM, UI labels, event sinks) implement
//! these traits. The domain consumes them via generics, so it never touches
//! hardware or the graphics toolkit directly.

use core::time::Duration;

use crate::control::{DutyCycle, SensorReading};
use crate::error::ActuatorError;

// ───────────────────────────────────────────────────────────────
// Sensor port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: the control loop calls this once per automatic tick.
///
/// Infallible by contract. Implementations clamp out-of-range data and
/// fall back to the last good value on a failed conversion.
pub trait SensorPort {
    fn read(&mut self) -> SensorReading;
}

// ───────────────────────────────────────────────────────────────
// Actuator port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port for the LED PWM output.
pub trait ActuatorPort {
    /// Set the switching period. Called once at start-up.
    fn configure(&mut self, period: Duration) -> Result<(), ActuatorError>;

    /// Command a new duty cycle. Implementations log their own failures;
    /// callers only decide whether to carry on.
    fn write(&mut self, duty: DutyCycle) -> Result<(), ActuatorError>;

    /// Last commanded duty cycle (diagnostics only).
    fn read(&self) -> DutyCycle;
}

// ───────────────────────────────────────────────────────────────
// Display port (driven adapter: domain → UI toolkit)
// ───────────────────────────────────────────────────────────────

/// Screen currently presented by the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    /// Mode picker with the welcome prompt.
    Menu,
    /// Read-only luminosity and intensity labels.
    Automatic,
    /// Intensity slider and its label.
    Manual,
}

/// Outbound UI surface. Every call happens with the UI lock held.
pub trait DisplayPort {
    /// Replace the visible page. The surface drops widgets of the old page.
    fn show_page(&mut self, page: Page);

    fn set_prompt_text(&mut self, text: &str);

    fn set_luminosity_text(&mut self, text: &str);

    fn set_intensity_text(&mut self, text: &str);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port. Adapters decide where they go (serial log, test
/// recorder, etc.).
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
