//! Periodic control loop.
//!
//! One call to [`ControlLoop::tick`] is one control cycle:
//!
//! 1. derive the target state from the mode state and jump there if needed
//! 2. run the FSM tick (the sensor is read only in AutomaticRun)
//! 3. apply the LED command, with no UI lock held
//! 4. offer the display pair to the gate under the UI lock
//! 5. emit diagnostics

use log::debug;

use crate::config::SystemConfig;
use crate::fsm::context::FsmContext;
use crate::fsm::states::build_state_table;
use crate::fsm::{Fsm, StateId};

use super::events::{AppEvent, TelemetryData};
use super::mode::SelectionState;
use super::ports::{ActuatorPort, DisplayPort, EventSink, SensorPort};
use super::service::AppService;

pub struct ControlLoop<'a, S, A, D> {
    service: &'a AppService<A, D>,
    sensor: S,
    fsm: Fsm,
    ctx: FsmContext,
    diagnostics_enabled: bool,
}

impl<'a, S, A, D> ControlLoop<'a, S, A, D>
where
    S: SensorPort,
    A: ActuatorPort,
    D: DisplayPort,
{
    pub fn new(service: &'a AppService<A, D>, sensor: S, config: SystemConfig) -> Self {
        let diagnostics_enabled = config.diagnostics_enabled;
        Self {
            service,
            sensor,
            fsm: Fsm::new(build_state_table(), StateId::Idle),
            ctx: FsmContext::new(config),
            diagnostics_enabled,
        }
    }

    /// Enter the initial state. Call once before the first tick.
    pub fn start(&mut self) {
        self.fsm.start(&mut self.ctx);
    }

    pub fn tick(&mut self, sink: &mut impl EventSink) {
        let (mode, selection) = self.service.mode();

        let from = self.fsm.current_state();
        let to = StateId::for_selection(mode, selection);
        if self.fsm.force_transition(to, &mut self.ctx) {
            sink.emit(&AppEvent::StateChanged { from, to });
        }

        self.ctx.clear_outputs();
        let sensor = &mut self.sensor;
        self.fsm.tick(&mut self.ctx, || sensor.read());

        let commands = self.ctx.commands;
        if let Some(duty) = commands.duty {
            if !self.service.drive_automatic(duty) {
                debug!("LED: automatic duty dropped, mode changed mid-tick");
            }
        }
        if let Some(request) = commands.display {
            if let Some(decision) = self.service.offer_display(request) {
                sink.emit(&AppEvent::DisplayOffered(decision));
            }
        }

        if self.diagnostics_enabled && selection == SelectionState::Selected {
            sink.emit(&AppEvent::Telemetry(TelemetryData {
                state: self.fsm.current_state(),
                tick: self.fsm.tick_count(),
                reading: self.ctx.reading.map(|r| r.fraction()),
                duty: self.service.duty().fraction(),
            }));
        }
    }

    pub fn state(&self) -> StateId {
        self.fsm.current_state()
    }

    pub fn tick_count(&self) -> u64 {
        self.fsm.tick_count()
    }

    pub fn sensor(&self) -> &S {
        &self.sensor
    }

    pub fn sensor_mut(&mut self) -> &mut S {
        &mut self.sensor
    }
}
