//! LED intensity driver.
//!
//! Converts a [`DutyCycle`] into a compare value for the underlying PWM
//! channel. The driver is a dumb actuator: which duty to apply is decided
//! by the application core.
//!
//! ## Dual-target design
//!
//! On hardware: wraps the board's LEDC / timer channel.
//! On host/test: wraps [`SimPwm`](super::sim_pwm::SimPwm).

use core::time::Duration;

use embedded_hal::pwm::SetDutyCycle;
use log::{info, warn};

use super::PwmPeriod;
use crate::app::ports::ActuatorPort;
use crate::control::DutyCycle;
use crate::error::ActuatorError;

pub struct LedPwm<P> {
    pwm: P,
    /// Last duty handed to `write`, even if the HAL rejected it.
    commanded: DutyCycle,
    period: Option<Duration>,
}

impl<P> LedPwm<P>
where
    P: SetDutyCycle + PwmPeriod,
{
    pub fn new(pwm: P) -> Self {
        Self {
            pwm,
            commanded: DutyCycle::OFF,
            period: None,
        }
    }

    pub fn period(&self) -> Option<Duration> {
        self.period
    }

    pub fn channel(&self) -> &P {
        &self.pwm
    }
}

impl<P> ActuatorPort for LedPwm<P>
where
    P: SetDutyCycle + PwmPeriod,
{
    fn configure(&mut self, period: Duration) -> Result<(), ActuatorError> {
        if period.is_zero() {
            return Err(ActuatorError::InvalidPeriod);
        }
        self.pwm.set_period(period)?;
        self.period = Some(period);
        info!("LED: PWM period {} us", period.as_micros());
        Ok(())
    }

    fn write(&mut self, duty: DutyCycle) -> Result<(), ActuatorError> {
        self.commanded = duty;
        let max = self.pwm.max_duty_cycle();
        let ticks = duty.to_ticks(max).min(max);
        self.pwm.set_duty_cycle(ticks).map_err(|e| {
            warn!("LED: HAL rejected compare value {ticks}/{max}: {e:?}");
            ActuatorError::PwmWriteFailed
        })
    }

    fn read(&self) -> DutyCycle {
        self.commanded
    }
}
