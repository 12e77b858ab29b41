//! Application service — the synchronized gateway shared by both actors.
//!
//! [`AppService`] owns the mode state, the LED actuator and the UI surface.
//! The periodic tick (via [`ControlLoop`](super::control_loop::ControlLoop))
//! and the UI event task both go through it; neither touches the hardware
//! or the display directly.
//!
//! ```text
//!  UiEvent ──▶ ┌─────────────────────────────┐ ──▶ EventSink
//!              │         AppService           │
//!  tick ─────▶ │  ModeState · [LED] · [UI]    │ ──▶ ActuatorPort / DisplayPort
//!              └─────────────────────────────┘
//! ```
//!
//! `[LED]` and `[UI]` are two independent blocking mutexes over
//! `NoopRawMutex`: both tasks that use them run on the same local executor,
//! so taking one lock never excludes the other. A re-entrant `borrow_mut`
//! on the same lock panics in the `RefCell`. The UI lock is never held
//! while the PWM is written. The only cross-thread entry point is the
//! [`UiBridge`](super::bridge::UiBridge) channel.

use core::cell::RefCell;
use core::time::Duration;

use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use log::{debug, info, warn};

use crate::config::SystemConfig;
use crate::control::DutyCycle;
use crate::control::gate::UpdateDecision;
use crate::error::Result;
use crate::fsm::context::DisplayRequest;

use super::commands::UiEvent;
use super::display::GatedDisplay;
use super::events::AppEvent;
use super::mode::{Mode, ModeState, SelectionState};
use super::ports::{ActuatorPort, DisplayPort, EventSink, Page};

type Guarded<T> = Mutex<NoopRawMutex, RefCell<T>>;

// ───────────────────────────────────────────────────────────────
// AppService
// ───────────────────────────────────────────────────────────────

pub struct AppService<A, D> {
    mode: ModeState,
    actuator: Guarded<A>,
    display: Guarded<GatedDisplay<D>>,
}

impl<A: ActuatorPort, D: DisplayPort> AppService<A, D> {
    /// Build the service. Nothing is written to the hardware until
    /// [`start`](Self::start).
    pub fn new(actuator: A, display: D, config: &SystemConfig) -> Self {
        Self {
            mode: ModeState::new(),
            actuator: Mutex::new(RefCell::new(actuator)),
            display: Mutex::new(RefCell::new(GatedDisplay::new(
                display,
                config.display_threshold_pct,
            ))),
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Configure the PWM period and present the menu.
    pub fn start(&self, pwm_period: Duration, sink: &mut impl EventSink) -> Result<()> {
        self.with_actuator(|led| led.configure(pwm_period))?;
        self.with_display(|ui| ui.enter_page(Page::Menu));

        let pwm_period_us = u32::try_from(pwm_period.as_micros()).unwrap_or(u32::MAX);
        sink.emit(&AppEvent::Started { pwm_period_us });
        info!("AppService started, PWM period {pwm_period_us} us");
        Ok(())
    }

    // ── UI events ─────────────────────────────────────────────

    /// Dispatch one event from the UI bridge.
    pub fn handle_event(&self, event: UiEvent, sink: &mut impl EventSink) {
        match event {
            UiEvent::ModeSelected(mode) => self.select_mode(mode, sink),
            UiEvent::IntensityChanged(percent) => self.set_manual_intensity(percent, sink),
            UiEvent::ReturnRequested => self.return_to_menu(sink),
        }
    }

    /// Record `mode` as selected and show its page. Re-selecting the mode
    /// that is already active changes nothing.
    pub fn select_mode(&self, mode: Mode, sink: &mut impl EventSink) {
        // Mode and page flip together under the UI lock so a concurrent
        // display offer never lands on the wrong page.
        let changed = self.with_display(|ui| {
            let changed = self.mode.select(mode);
            if changed {
                ui.enter_page(Page::for_mode(mode));
            }
            changed
        });

        if changed {
            sink.emit(&AppEvent::ModeSelected(mode));
        } else {
            debug!("UI: {mode:?} already selected");
        }
    }

    /// Back to the menu. The LED keeps its last duty.
    pub fn return_to_menu(&self, sink: &mut impl EventSink) {
        let was_selected = self.with_display(|ui| {
            let was_selected = self.mode.reset();
            if was_selected {
                ui.enter_page(Page::Menu);
            }
            was_selected
        });

        if was_selected {
            sink.emit(&AppEvent::ReturnedToMenu);
        } else {
            debug!("UI: return requested while already on the menu");
        }
    }

    /// Slider feedback. Only honoured while Manual is selected; values
    /// above 100 are clamped.
    pub fn set_manual_intensity(&self, percent: u8, sink: &mut impl EventSink) {
        if self.mode.active() != Some(Mode::Manual) {
            debug!("UI: intensity {percent} ignored outside manual mode");
            return;
        }

        let percent = if percent > 100 {
            warn!("UI: intensity {percent} % clamped to 100 %");
            100
        } else {
            percent
        };
        let duty = DutyCycle::from_percent(percent).unwrap_or(DutyCycle::FULL);

        self.drive(duty);
        self.with_display(|ui| ui.show_manual_intensity(percent));
        sink.emit(&AppEvent::ManualIntensity(percent));
    }

    // ── Tick-side operations ──────────────────────────────────

    /// Write `duty` to the LED if Automatic is still the active mode when
    /// the actuator lock is taken. Returns `true` if the write was attempted.
    pub fn drive_automatic(&self, duty: DutyCycle) -> bool {
        self.with_actuator(|led| {
            if self.mode.active() != Some(Mode::Automatic) {
                return false;
            }
            // A failed write is already logged by the driver; the next tick retries.
            let _ = led.write(duty);
            true
        })
    }

    /// Offer an automatic-page pair to the gate. `None` if the automatic
    /// page is no longer shown.
    pub fn offer_display(&self, request: DisplayRequest) -> Option<UpdateDecision> {
        self.with_display(|ui| {
            (ui.page() == Page::Automatic)
                .then(|| ui.offer(request.luminosity_pct, request.intensity_pct))
        })
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn mode(&self) -> (Mode, SelectionState) {
        self.mode.current()
    }

    /// Last commanded LED duty.
    pub fn duty(&self) -> DutyCycle {
        self.with_actuator(|led| led.read())
    }

    pub fn page(&self) -> Page {
        self.with_display(|ui| ui.page())
    }

    /// Run `f` with the UI lock held.
    pub fn with_display<R>(&self, f: impl FnOnce(&mut GatedDisplay<D>) -> R) -> R {
        self.display.lock(|cell| f(&mut cell.borrow_mut()))
    }

    /// Run `f` with the actuator lock held.
    pub fn with_actuator<R>(&self, f: impl FnOnce(&mut A) -> R) -> R {
        self.actuator.lock(|cell| f(&mut cell.borrow_mut()))
    }

    // ── Internal ──────────────────────────────────────────────

    fn drive(&self, duty: DutyCycle) {
        let _ = self.with_actuator(|led| led.write(duty));
    }
}
