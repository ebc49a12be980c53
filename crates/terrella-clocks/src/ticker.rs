//! Fixed-cadence gate for the textual clock refresh.
//!
//! The frame loop runs at display rate but the clock text only changes
//! once a second; [`ClockTicker`] turns the per-frame poll into an
//! approximately once-per-period answer.

use chrono::{DateTime, Duration, Utc};

/// Gates work to roughly once per period.
///
/// `due` answers true on the first poll and then at most once per period.
/// After firing, the next period is measured from the firing instant, so a
/// late frame delays subsequent ticks rather than double-firing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClockTicker {
    period: Duration,
    last: Option<DateTime<Utc>>,
}

impl ClockTicker {
    pub fn new(period: Duration) -> Self {
        Self { period, last: None }
    }

    /// Ticker with a period given in (possibly fractional) seconds.
    pub fn from_seconds(seconds: f64) -> Self {
        Self::new(Duration::milliseconds((seconds * 1_000.0) as i64))
    }

    #[must_use]
    pub fn period(&self) -> Duration {
        self.period
    }

    /// True when a refresh is due at `now`; arms the next period.
    pub fn due(&mut self, now: DateTime<Utc>) -> bool {
        match self.last {
            Some(last) if now - last < self.period => false,
            _ => {
                self.last = Some(now);
                true
            }
        }
    }

    /// Make the next [`due`](Self::due) poll answer true regardless of
    /// elapsed time. Used when a popup opens and needs fresh text now.
    pub fn expire(&mut self) {
        self.last = None;
    }
}
