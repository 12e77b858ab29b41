//! Shared mutable context threaded through every FSM handler.
//!
//! `FsmContext` is the single struct that state handlers read from and
//! write to. Handlers never touch the LED or the UI: they leave commands
//! here, and the control loop applies them after the FSM tick.

use crate::config::SystemConfig;
use crate::control::{DutyCycle, SensorReading};

// ---------------------------------------------------------------------------
// Tick outputs (written by state handlers; consumed by the control loop)
// ---------------------------------------------------------------------------

/// Percentages the automatic page should show, if the gate lets them through.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayRequest {
    pub luminosity_pct: f32,
    pub intensity_pct: f32,
}

/// What the current tick wants done. Cleared before every tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickCommands {
    /// New LED duty, or `None` to leave the output untouched.
    pub duty: Option<DutyCycle>,
    /// Display refresh request for the automatic page.
    pub display: Option<DisplayRequest>,
}

// ---------------------------------------------------------------------------
// FsmContext
// ---------------------------------------------------------------------------

/// The shared context passed to every state handler function.
pub struct FsmContext {
    // -- Sensor data --
    /// Reading taken this tick. `None` when the state does not sample.
    pub reading: Option<SensorReading>,

    // -- Outputs --
    pub commands: TickCommands,

    // -- Configuration --
    pub config: SystemConfig,
}

impl FsmContext {
    pub fn new(config: SystemConfig) -> Self {
        Self {
            reading: None,
            commands: TickCommands::default(),
            config,
        }
    }

    /// Drop last tick's outputs.
    pub fn clear_outputs(&mut self) {
        self.reading = None;
        self.commands = TickCommands::default();
    }
}
