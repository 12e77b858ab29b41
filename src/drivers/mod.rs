//! Actuator drivers.
//!
//! [`led_pwm::LedPwm`] adapts any `embedded-hal` PWM channel to the
//! application's [`ActuatorPort`](crate::app::ports::ActuatorPort).
//! [`sim_pwm::SimPwm`] is the in-memory channel used on the host.

pub mod led_pwm;
pub mod sim_pwm;

use core::time::Duration;

use crate::error::ActuatorError;

/// Timer-side control of a PWM channel. `embedded-hal` only covers the
/// compare value, so the board layer supplies the period separately.
pub trait PwmPeriod {
    fn set_period(&mut self, period: Duration) -> Result<(), ActuatorError>;
}
