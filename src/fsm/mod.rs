//! Function-pointer finite state machine engine.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  StateTable                                                  │
//! │  ┌──────────────┬───────────┬──────────┬──────────────────┐  │
//! │  │ StateId      │ on_enter  │ on_exit  │ on_sample        │  │
//! │  ├──────────────┼───────────┼──────────┼──────────────────┤  │
//! │  │ Idle         │ fn(ctx)   │ —        │ —                │  │
//! │  │ AutomaticRun │ fn(ctx)   │ —        │ fn(ctx, reading) │  │
//! │  │ ManualRun    │ fn(ctx)   │ —        │ —                │  │
//! │  └──────────────┴───────────┴──────────┴──────────────────┘  │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each tick the engine looks at the current state's `on_sample`. Only if
//! the state has one is the sensor read and the handler invoked; states
//! without a sample handler never touch the sensor. Transitions are
//! requested from outside via [`Fsm::force_transition`], which runs
//! `on_exit` for the current state and `on_enter` for the next.

pub mod context;
pub mod states;

use context::FsmContext;
use log::info;

use crate::app::mode::{Mode, SelectionState};
use crate::control::SensorReading;

// ---------------------------------------------------------------------------
// State identity
// ---------------------------------------------------------------------------

/// Enumeration of all control loop states.
/// Must stay in sync with the state table built in [`states::build_state_table`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum StateId {
    Idle = 0,
    AutomaticRun = 1,
    ManualRun = 2,
}

impl StateId {
    /// Total number of states — used to size the table array.
    pub const COUNT: usize = 3;

    /// Convert a `usize` index back to `StateId`. Panics on out-of-range in
    /// debug builds; returns `Idle` in release.
    pub fn from_index(idx: usize) -> Self {
        match idx {
            0 => Self::Idle,
            1 => Self::AutomaticRun,
            2 => Self::ManualRun,
            _ => {
                debug_assert!(false, "invalid state index: {idx}");
                Self::Idle
            }
        }
    }

    /// The state the loop should be in for a given mode-state snapshot.
    pub fn for_selection(mode: Mode, selection: SelectionState) -> Self {
        match (selection, mode) {
            (SelectionState::Unselected, _) => Self::Idle,
            (SelectionState::Selected, Mode::Automatic) => Self::AutomaticRun,
            (SelectionState::Selected, Mode::Manual) => Self::ManualRun,
        }
    }
}

// ---------------------------------------------------------------------------
// Function-pointer type aliases
// ---------------------------------------------------------------------------

/// Signature for `on_enter` and `on_exit` actions.
/// These run exactly once on each state transition.
pub type StateActionFn = fn(&mut FsmContext);

/// Per-tick handler for states that sample the sensor.
pub type StateSampleFn = fn(&mut FsmContext, SensorReading);

// ---------------------------------------------------------------------------
// State descriptor (one row in the table)
// ---------------------------------------------------------------------------

/// Static descriptor for a single FSM state.
pub struct StateDescriptor {
    pub id: StateId,
    pub name: &'static str,
    pub on_enter: Option<StateActionFn>,
    pub on_exit: Option<StateActionFn>,
    pub on_sample: Option<StateSampleFn>,
}

// ---------------------------------------------------------------------------
// FSM engine
// ---------------------------------------------------------------------------

pub struct Fsm {
    /// Fixed-size table indexed by `StateId as usize`.
    table: [StateDescriptor; StateId::COUNT],
    current: usize,
    tick_count: u64,
}

impl Fsm {
    pub fn new(table: [StateDescriptor; StateId::COUNT], initial: StateId) -> Self {
        Self {
            table,
            current: initial as usize,
            tick_count: 0,
        }
    }

    /// Run the initial `on_enter` for the starting state.
    /// Call once after construction, before the first `tick()`.
    pub fn start(&mut self, ctx: &mut FsmContext) {
        info!("FSM starting in state: {}", self.table[self.current].name);
        if let Some(enter) = self.table[self.current].on_enter {
            enter(ctx);
        }
    }

    /// Advance the FSM by one tick.
    ///
    /// `sample` is called at most once, and only when the current state
    /// has an `on_sample` handler.
    pub fn tick(&mut self, ctx: &mut FsmContext, sample: impl FnOnce() -> SensorReading) {
        self.tick_count += 1;

        if let Some(on_sample) = self.table[self.current].on_sample {
            on_sample(ctx, sample());
        }
    }

    /// Jump to `next` unless already there. Returns `true` on a transition.
    pub fn force_transition(&mut self, next: StateId, ctx: &mut FsmContext) -> bool {
        if next as usize == self.current {
            return false;
        }
        self.transition(next, ctx);
        true
    }

    pub fn current_state(&self) -> StateId {
        StateId::from_index(self.current)
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    // -----------------------------------------------------------------------
    // Internal
    // -----------------------------------------------------------------------

    fn transition(&mut self, next_id: StateId, ctx: &mut FsmContext) {
        let next_idx = next_id as usize;

        info!(
            "FSM transition: {} -> {}",
            self.table[self.current].name, self.table[next_idx].name
        );

        if let Some(exit) = self.table[self.current].on_exit {
            exit(ctx);
        }

        self.current = next_idx;

        if let Some(enter) = self.table[self.current].on_enter {
            enter(ctx);
        }
    }
}
