//! Lumidim library.
//!
//! Ambient-light driven LED dimmer. Exposes the application core, the
//! adapters and the runtime for the host binary and for integration
//! testing.

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod control;
pub mod drivers;
pub mod error;
pub mod fsm;
pub mod runtime;
pub mod sensors;

#[cfg(test)]
mod testing;
