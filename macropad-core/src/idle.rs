//! Inactivity tracking

/// Default inactivity threshold before returning to the idle view
pub const DEFAULT_IDLE_MS: u64 = 3000;

/// Tracks time since the last serviced event
///
/// The idle flag is sticky: [`IdleMonitor::tick`] reports the transition
/// once and stays quiet until the next activity.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IdleMonitor {
    last_activity_ms: u64,
    threshold_ms: u64,
    idle: bool,
}

impl IdleMonitor {
    /// Start the clock at `now_ms`, not idle
    pub const fn new(threshold_ms: u64, now_ms: u64) -> Self {
        Self {
            last_activity_ms: now_ms,
            threshold_ms,
            idle: false,
        }
    }

    pub fn on_activity(&mut self, now_ms: u64) {
        self.last_activity_ms = now_ms;
        self.idle = false;
    }

    /// Returns true on the transition into idle
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if self.idle {
            return false;
        }
        if now_ms.saturating_sub(self.last_activity_ms) > self.threshold_ms {
            self.idle = true;
            return true;
        }
        false
    }

    pub fn is_idle(&self) -> bool {
        self.idle
    }
}
