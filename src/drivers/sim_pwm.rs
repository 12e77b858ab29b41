//! In-memory PWM channel for host builds and tests.

use core::sync::atomic::{AtomicBool, AtomicU16, AtomicU32, Ordering};
use core::time::Duration;

use embedded_hal::pwm::{ErrorKind, ErrorType, SetDutyCycle};

use super::PwmPeriod;
use crate::error::ActuatorError;

/// Compare resolution of the simulated timer.
pub const SIM_MAX_DUTY: u16 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimPwmError;

impl embedded_hal::pwm::Error for SimPwmError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

#[derive(Default)]
pub struct SimPwm {
    duty: AtomicU16,
    period_us: AtomicU32,
    fail: AtomicBool,
}

impl SimPwm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn duty_ticks(&self) -> u16 {
        self.duty.load(Ordering::Relaxed)
    }

    pub fn period(&self) -> Option<Duration> {
        match self.period_us.load(Ordering::Relaxed) {
            0 => None,
            us => Some(Duration::from_micros(u64::from(us))),
        }
    }

    /// Make subsequent compare writes fail until cleared.
    pub fn set_failing(&self, fail: bool) {
        self.fail.store(fail, Ordering::Relaxed);
    }
}

impl ErrorType for SimPwm {
    type Error = SimPwmError;
}

impl SetDutyCycle for SimPwm {
    fn max_duty_cycle(&self) -> u16 {
        SIM_MAX_DUTY
    }

    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
        if self.fail.load(Ordering::Relaxed) || duty > SIM_MAX_DUTY {
            return Err(SimPwmError);
        }
        self.duty.store(duty, Ordering::Relaxed);
        Ok(())
    }
}

impl PwmPeriod for SimPwm {
    fn set_period(&mut self, period: Duration) -> Result<(), ActuatorError> {
        let us = u32::try_from(period.as_micros()).map_err(|_| ActuatorError::InvalidPeriod)?;
        if us == 0 {
            return Err(ActuatorError::InvalidPeriod);
        }
        self.period_us.store(us, Ordering::Relaxed);
        Ok(())
    }
}
