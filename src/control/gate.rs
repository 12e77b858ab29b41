//! Display refresh gate.
//!
//! Sensor noise produces sub-percent jitter every tick. The gate forwards
//! a (luminosity %, intensity %) pair to the UI only when either channel
//! moved by at least the threshold since the last value actually shown.

/// Default hysteresis in percentage points.
pub const DEFAULT_THRESHOLD_PCT: f32 = 2.0;

/// Result of offering a new pair to the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateDecision {
    /// The pair was recorded as displayed; redraw the labels.
    Update,
    /// Change too small; nothing was touched.
    Suppress,
}

/// Last pair forwarded to the UI.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayedValue {
    pub luminosity_pct: f32,
    pub intensity_pct: f32,
}

/// Change-detection filter in front of the automatic page labels.
#[derive(Debug, Clone)]
pub struct RefreshGate {
    threshold: f32,
    /// `None` until the first update: never equal to a real percentage.
    last: Option<DisplayedValue>,
}

impl RefreshGate {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            last: None,
        }
    }

    pub fn offer(&mut self, luminosity_pct: f32, intensity_pct: f32) -> UpdateDecision {
        let changed = match self.last {
            None => true,
            Some(last) => {
                (luminosity_pct - last.luminosity_pct).abs() >= self.threshold
                    || (intensity_pct - last.intensity_pct).abs() >= self.threshold
            }
        };

        if !changed {
            return UpdateDecision::Suppress;
        }

        self.last = Some(DisplayedValue {
            luminosity_pct,
            intensity_pct,
        });
        UpdateDecision::Update
    }

    /// Forget the last shown pair so the next offer always updates.
    pub fn reset(&mut self) {
        self.last = None;
    }

    pub fn last_displayed(&self) -> Option<DisplayedValue> {
        self.last
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }
}

impl Default for RefreshGate {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD_PCT)
    }
}
