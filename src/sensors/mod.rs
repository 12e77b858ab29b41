//! Sensor subsystem — the ambient light reader and its board primitive.
//!
//! [`light::LightSensor`] implements the application's
//! [`SensorPort`](crate::app::ports::SensorPort) on top of any
//! [`AnalogInput`]. On the host the input is a [`sim::SimAnalogInput`]
//! whose raw count is injected from another thread.

pub mod light;
pub mod sim;

use crate::error::SensorError;

/// One ADC channel, as exposed by the board layer.
pub trait AnalogInput {
    /// Take one conversion.
    fn read_raw(&mut self) -> Result<u16, SensorError>;

    /// Count that corresponds to full illumination.
    fn full_scale(&self) -> u16;
}
