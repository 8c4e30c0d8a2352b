use std::time::{Duration, Instant};

/// Default simulation rate in Hz.
pub const DEFAULT_TICK_RATE_HZ: f32 = 60.0;

/// Gate for a cooperative fixed-step loop driven by a monotonic clock.
///
/// The host calls [`FixedTimestep::poll`] every iteration; it fires when the
/// deadline has passed and schedules the next one from the current time, so
/// a stalled loop drops ticks instead of bursting to catch up.
#[derive(Debug, Clone)]
pub struct FixedTimestep {
    interval: Duration,
    next_due: Option<Instant>,
}

impl FixedTimestep {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_due: None,
        }
    }

    /// Callers must pass a positive, finite rate (see `LightcycleConfig::validate`).
    pub fn from_hz(hz: f32) -> Self {
        Self::new(Duration::from_secs_f32(1.0 / hz))
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Returns true when a tick is due at `now`. The first poll always fires.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.next_due {
            Some(due) if now < due => false,
            _ => {
                self.next_due = Some(now + self.interval);
                true
            },
        }
    }

    /// Time left before the next tick is due.
    pub fn until_due(&self, now: Instant) -> Duration {
        self.next_due
            .map(|due| due.saturating_duration_since(now))
            .unwrap_or(Duration::ZERO)
    }
}

impl Default for FixedTimestep {
    fn default() -> Self {
        Self::from_hz(DEFAULT_TICK_RATE_HZ)
    }
}
