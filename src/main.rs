//! Lumidim — host entry point.
//!
//! Wires the simulated board to the application core and runs it.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                      Adapters (outer ring)                     │
//! │                                                                │
//! │  LightSensor<SimAnalogInput>   LedPwm<SimPwm>   LabelDisplay   │
//! │  (SensorPort)                  (ActuatorPort)   (DisplayPort)  │
//! │  LogEventSink (EventSink)                                      │
//! │                                                                │
//! │  ──────────────── Port Trait Boundary ───────────────────      │
//! │                                                                │
//! │  ┌────────────────────────────────────────────────────────┐    │
//! │  │  AppService · ControlLoop (FSM) · RefreshGate          │    │
//! │  └────────────────────────────────────────────────────────┘    │
//! │                                                                │
//! │  light thread ──▶ SimLightHandle   user thread ──▶ UiBridge     │
//! └────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Usage: `lumidim [config.json]`. Without an argument the defaults are
//! used. Per-tick `DIAG` lines are on by default; set
//! `"diagnostics_enabled": false` in the config to silence them.

use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use log::{info, warn};

use lumidim::adapters::label_display::LabelDisplay;
use lumidim::adapters::log_sink::LogEventSink;
use lumidim::app::bridge::UiBridge;
use lumidim::app::commands::UiEvent;
use lumidim::app::mode::Mode;
use lumidim::app::service::AppService;
use lumidim::config::SystemConfig;
use lumidim::drivers::led_pwm::LedPwm;
use lumidim::drivers::sim_pwm::SimPwm;
use lumidim::runtime;
use lumidim::sensors::light::LightSensor;
use lumidim::sensors::sim::{SimAnalogInput, SimLightHandle};

fn main() -> Result<()> {
    // ── 1. Logging ────────────────────────────────────────────
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("Lumidim v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. Configuration ──────────────────────────────────────
    let config = load_config(std::env::args().nth(1).as_deref())?;

    // ── 3. Board ──────────────────────────────────────────────
    let (input, light) = SimAnalogInput::new();
    let sensor = LightSensor::new(input);
    let led = LedPwm::new(SimPwm::new());

    // ── 4. Application core ───────────────────────────────────
    let service = AppService::new(led, LabelDisplay::new(), &config);
    let bridge = UiBridge::new();
    service
        .start(config.pwm_period(), &mut LogEventSink::new())
        .context("starting LED output")?;

    // ── 5. Run ────────────────────────────────────────────────
    thread::scope(|s| -> Result<()> {
        s.spawn(|| simulate_daylight(&light));
        s.spawn(|| simulate_user(&bridge));
        match runtime::run(&service, &bridge, sensor, config, LogEventSink::new()) {}
    })
}

/// Read the JSON config at `path`, or fall back to the defaults.
fn load_config(path: Option<&str>) -> Result<SystemConfig> {
    let config = match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading config file {path}"))?;
            let config = SystemConfig::from_json(&json)
                .with_context(|| format!("parsing config file {path}"))?;
            info!("Config loaded from {path}");
            config
        }
        None => {
            info!("No config file given, using defaults");
            SystemConfig::default()
        }
    };
    config.validate().context("invalid configuration")?;
    Ok(config)
}

/// Sweep the ambient level slowly up and down.
fn simulate_daylight(light: &SimLightHandle) {
    let mut level: f32 = 0.5;
    let mut step: f32 = 0.01;
    loop {
        light.set_level(level);
        level += step;
        if !(0.0..=1.0).contains(&level) {
            step = -step;
            level = level.clamp(0.0, 1.0);
        }
        thread::sleep(Duration::from_millis(50));
    }
}

/// Scripted stand-in for the touch screen: visit both modes forever.
fn simulate_user(bridge: &UiBridge) {
    let script = [
        (UiEvent::ModeSelected(Mode::Automatic), 5_000),
        (UiEvent::ReturnRequested, 1_000),
        (UiEvent::ModeSelected(Mode::Manual), 500),
        (UiEvent::IntensityChanged(25), 1_000),
        (UiEvent::IntensityChanged(75), 1_000),
        (UiEvent::IntensityChanged(100), 1_000),
        (UiEvent::ReturnRequested, 1_000),
    ];
    loop {
        for (event, pause_ms) in script {
            if let Err(e) = bridge.post(event) {
                warn!("USER: {e}");
            }
            thread::sleep(Duration::from_millis(pause_ms));
        }
    }
}
