//! Mode state shared by the tick loop and the UI event path.
//!
//! Mode and selection live in one atomic byte so a reader always sees a
//! consistent pair. Transitions are level-triggered: the control loop reads
//! the current value every tick, and the last write wins.

use core::sync::atomic::{AtomicU8, Ordering};

/// Exclusive control strategy governing the LED.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// LED follows the inverse of the ambient light.
    Automatic,
    /// LED follows the on-screen slider.
    Manual,
}

/// Whether the user has picked a mode since the menu was last shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectionState {
    Unselected,
    Selected,
}

const SELECTED_BIT: u8 = 0b01;
const AUTOMATIC_BIT: u8 = 0b10;

pub struct ModeState {
    bits: AtomicU8,
}

impl ModeState {
    /// Starts Unselected. The recorded mode is meaningless until the
    /// first `select`.
    pub const fn new() -> Self {
        Self {
            bits: AtomicU8::new(0),
        }
    }

    /// Record `mode` and mark it selected.
    ///
    /// Returns `true` if the (mode, selection) pair changed.
    pub fn select(&self, mode: Mode) -> bool {
        let bits = match mode {
            Mode::Automatic => SELECTED_BIT | AUTOMATIC_BIT,
            Mode::Manual => SELECTED_BIT,
        };
        self.bits.swap(bits, Ordering::AcqRel) != bits
    }

    /// Back to the menu. The recorded mode is kept but is meaningless
    /// until the next `select`.
    ///
    /// Returns `true` if a mode was selected before the call.
    pub fn reset(&self) -> bool {
        self.bits.fetch_and(!SELECTED_BIT, Ordering::AcqRel) & SELECTED_BIT != 0
    }

    pub fn current(&self) -> (Mode, SelectionState) {
        let bits = self.bits.load(Ordering::Acquire);
        let mode = if bits & AUTOMATIC_BIT != 0 {
            Mode::Automatic
        } else {
            Mode::Manual
        };
        let selection = if bits & SELECTED_BIT != 0 {
            SelectionState::Selected
        } else {
            SelectionState::Unselected
        };
        (mode, selection)
    }

    /// The selected mode, or `None` while on the menu.
    pub fn active(&self) -> Option<Mode> {
        match self.current() {
            (mode, SelectionState::Selected) => Some(mode),
            (_, SelectionState::Unselected) => None,
        }
    }
}

impl Default for ModeState {
    fn default() -> Self {
        Self::new()
    }
}
