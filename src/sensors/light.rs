//! Ambient light sensor driver.
//!
//! Normalizes raw ADC counts into a [`SensorReading`]. Never fails: an
//! out-of-range count is clamped, and a failed conversion returns the last
//! good reading so a flaky channel cannot stall the control loop.

use log::{info, warn};

use super::AnalogInput;
use crate::app::ports::SensorPort;
use crate::control::SensorReading;
use crate::error::SensorError;

pub struct LightSensor<A> {
    input: A,
    last_good: SensorReading,
    /// Set while the input is reporting out-of-range counts, so the
    /// warning is logged once per excursion.
    out_of_range: bool,
    /// Set from the first failed conversion until the next good one.
    read_failing: bool,
    failed_reads: u32,
}

impl<A: AnalogInput> LightSensor<A> {
    pub fn new(input: A) -> Self {
        Self {
            input,
            last_good: SensorReading::DARK,
            out_of_range: false,
            read_failing: false,
            failed_reads: 0,
        }
    }

    pub fn last_good(&self) -> SensorReading {
        self.last_good
    }

    /// Conversions that failed since start-up.
    pub fn failed_reads(&self) -> u32 {
        self.failed_reads
    }

    fn normalize(&mut self, raw: u16) -> SensorReading {
        let full_scale = self.input.full_scale();
        match SensorReading::from_raw(raw, full_scale) {
            Ok(reading) => {
                self.out_of_range = false;
                reading
            }
            Err(SensorError::OutOfRange) if full_scale > 0 => {
                if !self.out_of_range {
                    warn!("LIGHT: raw {raw} above full scale {full_scale}, clamping");
                    self.out_of_range = true;
                }
                SensorReading::BRIGHT
            }
            Err(e) => {
                if !self.out_of_range {
                    warn!("LIGHT: cannot normalize raw {raw}: {e}");
                    self.out_of_range = true;
                }
                self.last_good
            }
        }
    }
}

impl<A: AnalogInput> SensorPort for LightSensor<A> {
    fn read(&mut self) -> SensorReading {
        match self.input.read_raw() {
            Ok(raw) => {
                if self.read_failing {
                    info!("LIGHT: read recovered after {} failures", self.failed_reads);
                    self.read_failing = false;
                }
                let reading = self.normalize(raw);
                self.last_good = reading;
                reading
            }
            Err(e) => {
                self.failed_reads = self.failed_reads.saturating_add(1);
                if !self.read_failing {
                    warn!("LIGHT: read failed ({e}), holding {:.3}", self.last_good.fraction());
                    self.read_failing = true;
                }
                self.last_good
            }
        }
    }
}
