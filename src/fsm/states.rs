//! Concrete state handler functions and table builder.
//!
//! Each state is defined by plain `fn` pointers — no closures, no dynamic
//! dispatch, no heap.
//!
//! ```text
//!           ModeSelected(Automatic)          ModeSelected(Manual)
//!   IDLE ─────────────────────────▶ AUTO     IDLE ──────────────▶ MANUAL
//!     ▲                               │        ▲                     │
//!     └──────── ReturnRequested ──────┘        └── ReturnRequested ──┘
//! ```
//!
//! Transitions are driven from the mode state by the control loop; the
//! handlers here only describe what each state does while it is current.

use super::context::{DisplayRequest, FsmContext};
use super::{StateDescriptor, StateId};
use crate::control::{SensorReading, automatic_duty};
use log::info;

// ═══════════════════════════════════════════════════════════════════════════
//  Table builder
// ═══════════════════════════════════════════════════════════════════════════

/// Build the static state table. Called once at startup.
pub fn build_state_table() -> [StateDescriptor; StateId::COUNT] {
    [
        // Index 0 — Idle
        StateDescriptor {
            id: StateId::Idle,
            name: "Idle",
            on_enter: Some(idle_enter),
            on_exit: None,
            on_sample: None,
        },
        // Index 1 — AutomaticRun
        StateDescriptor {
            id: StateId::AutomaticRun,
            name: "AutomaticRun",
            on_enter: Some(automatic_enter),
            on_exit: None,
            on_sample: Some(automatic_sample),
        },
        // Index 2 — ManualRun
        StateDescriptor {
            id: StateId::ManualRun,
            name: "ManualRun",
            on_enter: Some(manual_enter),
            on_exit: None,
            on_sample: None,
        },
    ]
}

// ═══════════════════════════════════════════════════════════════════════════
//  IDLE state
// ═══════════════════════════════════════════════════════════════════════════

fn idle_enter(ctx: &mut FsmContext) {
    // The LED keeps whatever duty it was last given.
    ctx.clear_outputs();
}

// ═══════════════════════════════════════════════════════════════════════════
//  AUTOMATIC state
// ═══════════════════════════════════════════════════════════════════════════

fn automatic_enter(ctx: &mut FsmContext) {
    info!(
        "AUTO: tracking ambient light every {} ms",
        ctx.config.tick_interval_ms
    );
}

fn automatic_sample(ctx: &mut FsmContext, reading: SensorReading) {
    let duty = automatic_duty(reading);
    ctx.reading = Some(reading);
    ctx.commands.duty = Some(duty);
    ctx.commands.display = Some(DisplayRequest {
        luminosity_pct: reading.percent(),
        intensity_pct: duty.percent(),
    });
}

// ═══════════════════════════════════════════════════════════════════════════
//  MANUAL state
// ═══════════════════════════════════════════════════════════════════════════

fn manual_enter(ctx: &mut FsmContext) {
    // Slider events drive the LED from here on; the tick only reports.
    ctx.clear_outputs();
    info!("MANUAL: waiting for slider input");
}
