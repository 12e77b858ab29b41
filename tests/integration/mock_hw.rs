//! Mock adapters for integration tests.
//!
//! Record every sensor read, actuator call and UI mutation so tests can
//! assert on the full history without touching real ADC/PWM registers.

use core::time::Duration;

use lumidim::app::events::AppEvent;
use lumidim::app::ports::{ActuatorPort, DisplayPort, EventSink, Page, SensorPort};
use lumidim::app::service::AppService;
use lumidim::config::SystemConfig;
use lumidim::control::{DutyCycle, SensorReading};
use lumidim::error::ActuatorError;

// ── Sensor ────────────────────────────────────────────────────

pub struct MockSensor {
    pub level: f32,
    pub reads: usize,
}

#[allow(dead_code)]
impl MockSensor {
    pub fn new(level: f32) -> Self {
        Self { level, reads: 0 }
    }
}

impl SensorPort for MockSensor {
    fn read(&mut self) -> SensorReading {
        self.reads += 1;
        SensorReading::saturating(self.level)
    }
}

// ── Actuator ──────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum ActuatorCall {
    Configure(Duration),
    Write(DutyCycle),
}

#[derive(Default)]
pub struct MockActuator {
    pub calls: Vec<ActuatorCall>,
    duty: DutyCycle,
}

#[allow(dead_code)]
impl MockActuator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn writes(&self) -> Vec<DutyCycle> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                ActuatorCall::Write(d) => Some(*d),
                ActuatorCall::Configure(_) => None,
            })
            .collect()
    }
}

impl ActuatorPort for MockActuator {
    fn configure(&mut self, period: Duration) -> Result<(), ActuatorError> {
        self.calls.push(ActuatorCall::Configure(period));
        Ok(())
    }

    fn write(&mut self, duty: DutyCycle) -> Result<(), ActuatorError> {
        self.calls.push(ActuatorCall::Write(duty));
        self.duty = duty;
        Ok(())
    }

    fn read(&self) -> DutyCycle {
        self.duty
    }
}

// ── Display ───────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum DisplayCall {
    ShowPage(Page),
    Prompt(String),
    Luminosity(String),
    Intensity(String),
}

#[derive(Default)]
pub struct MockDisplay {
    pub calls: Vec<DisplayCall>,
}

#[allow(dead_code)]
impl MockDisplay {
    pub fn last_intensity(&self) -> Option<&str> {
        self.calls.iter().rev().find_map(|c| match c {
            DisplayCall::Intensity(t) => Some(t.as_str()),
            _ => None,
        })
    }

    pub fn last_luminosity(&self) -> Option<&str> {
        self.calls.iter().rev().find_map(|c| match c {
            DisplayCall::Luminosity(t) => Some(t.as_str()),
            _ => None,
        })
    }

    pub fn pages(&self) -> Vec<Page> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DisplayCall::ShowPage(p) => Some(*p),
                _ => None,
            })
            .collect()
    }
}

impl DisplayPort for MockDisplay {
    fn show_page(&mut self, page: Page) {
        self.calls.push(DisplayCall::ShowPage(page));
    }

    fn set_prompt_text(&mut self, text: &str) {
        self.calls.push(DisplayCall::Prompt(text.to_owned()));
    }

    fn set_luminosity_text(&mut self, text: &str) {
        self.calls.push(DisplayCall::Luminosity(text.to_owned()));
    }

    fn set_intensity_text(&mut self, text: &str) {
        self.calls.push(DisplayCall::Intensity(text.to_owned()));
    }
}

// ── Event sink ────────────────────────────────────────────────

#[derive(Default)]
pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, pred: impl Fn(&AppEvent) -> bool) -> usize {
        self.events.iter().filter(|e| pred(e)).count()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}

// ── Fixtures ──────────────────────────────────────────────────

pub type MockService = AppService<MockActuator, MockDisplay>;

/// A started service with diagnostics off, so the sink only sees
/// lifecycle events.
#[allow(dead_code)]
pub fn started_service() -> (MockService, SystemConfig) {
    let config = SystemConfig {
        diagnostics_enabled: false,
        ..SystemConfig::default()
    };
    let service = AppService::new(MockActuator::new(), MockDisplay::default(), &config);
    service
        .start(config.pwm_period(), &mut RecordingSink::new())
        .expect("mock actuator accepts any period");
    (service, config)
}

/// Number of LED writes recorded so far.
#[allow(dead_code)]
pub fn write_count(service: &MockService) -> usize {
    service.with_actuator(|led| led.writes().len())
}
