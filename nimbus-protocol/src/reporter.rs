//! Rate-limited status reporting
//!
//! Decides when the codec should emit a status dump. It only looks at the
//! clock, never at the stream, so report cadence does not depend on how
//! fast frames arrive.

/// Report timer driven by a millisecond clock
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PeriodicReporter {
    /// Report period in milliseconds, `None` when disabled
    period_ms: Option<f32>,
    /// Time of the last report
    last_ms: u32,
}

impl PeriodicReporter {
    /// Create a reporter firing `frequency_hz` times per second
    pub fn new(frequency_hz: f32) -> Self {
        Self {
            period_ms: period_for(frequency_hz),
            last_ms: 0,
        }
    }

    /// Change the report rate; zero, negative or NaN disables reporting
    pub fn set_frequency(&mut self, frequency_hz: f32) {
        self.period_ms = period_for(frequency_hz);
    }

    /// Returns true if reports can fire
    pub fn is_enabled(&self) -> bool {
        self.period_ms.is_some()
    }

    /// Check the timer, restarting it when a report is due
    ///
    /// Elapsed time wraps with the millisecond counter.
    pub fn report_if_due(&mut self, now_ms: u32) -> bool {
        let Some(period_ms) = self.period_ms else {
            return false;
        };
        let elapsed = now_ms.wrapping_sub(self.last_ms);
        if (elapsed as f32) < period_ms {
            return false;
        }
        self.last_ms = now_ms;
        true
    }
}

fn period_for(frequency_hz: f32) -> Option<f32> {
    (frequency_hz > 0.0).then(|| 1000.0 / frequency_hz)
}
