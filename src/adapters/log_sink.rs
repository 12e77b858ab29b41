//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the `log` facade (env_logger on the host, the board logger on target).
//! Per-tick `DIAG` lines go out at info level; they are switched off with
//! `diagnostics_enabled` in the config, not with the log filter.

use log::{debug, info};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;
use crate::control::gate::UpdateDecision;

/// Adapter that logs every [`AppEvent`] as a single line.
#[derive(Clone, Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Telemetry(t) => match t.reading {
                Some(reading) => info!(
                    "DIAG | state={:?} tick={} | ambient={:.3} | duty={:.3}",
                    t.state, t.tick, reading, t.duty
                ),
                None => info!(
                    "DIAG | state={:?} tick={} | duty={:.3}",
                    t.state, t.tick, t.duty
                ),
            },
            AppEvent::StateChanged { from, to } => {
                info!("STATE | {:?} -> {:?}", from, to);
            }
            AppEvent::ModeSelected(mode) => {
                info!("MODE | selected {:?}", mode);
            }
            AppEvent::ReturnedToMenu => {
                info!("MODE | back to menu");
            }
            AppEvent::ManualIntensity(percent) => {
                info!("MODE | manual intensity {}%", percent);
            }
            AppEvent::DisplayOffered(UpdateDecision::Update) => {
                debug!("UI | automatic labels refreshed");
            }
            AppEvent::DisplayOffered(UpdateDecision::Suppress) => {}
            AppEvent::Started { pwm_period_us } => {
                info!("START | pwm_period={}us", pwm_period_us);
            }
        }
    }
}
