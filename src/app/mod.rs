//! Application core — domain logic behind port traits.
//!
//! This module contains the rules of the light controller: mode
//! selection, the periodic control loop, the display refresh gate and the
//! UI event bridge. All interaction with hardware and the UI toolkit
//! happens through **port traits** defined in [`ports`], keeping this
//! layer fully testable without real peripherals.

pub mod bridge;
pub mod commands;
pub mod control_loop;
pub mod display;
pub mod events;
pub mod mode;
pub mod ports;
pub mod service;
