//! Periodic tick sources.

use std::time::{Duration, Instant};

/// A latched "new period elapsed" flag, polled and cleared by the demo loop.
///
/// Models the update flag of a real-time-clock peripheral: once a period
/// completes the flag stays set until the consumer clears it, so a slow
/// consumer never misses a period entirely (it only coalesces them).
pub trait TickSource {
    /// Whether a new period has elapsed since the flag was last cleared.
    fn update_pending(&mut self) -> bool;

    /// Clear the latched flag.
    fn clear_update(&mut self);
}

/// Wall-clock ticker with a fixed period.
pub struct PeriodicTicker {
    period: Duration,
    deadline: Instant,
    pending: bool,
}

impl PeriodicTicker {
    /// Create a ticker whose first tick fires one period from now.
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            deadline: Instant::now() + period,
            pending: false,
        }
    }

    /// The configured period.
    pub fn period(&self) -> Duration {
        self.period
    }
}

impl TickSource for PeriodicTicker {
    fn update_pending(&mut self) -> bool {
        if !self.pending {
            let now = Instant::now();
            if now >= self.deadline {
                self.pending = true;
                // Skip past any periods that elapsed while the consumer was
                // busy, so cleared ticks don't fire in a burst.
                while self.deadline <= now {
                    self.deadline += self.period;
                }
            }
        }
        self.pending
    }

    fn clear_update(&mut self) {
        self.pending = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_pending_before_first_period() {
        let mut ticker = PeriodicTicker::new(Duration::from_secs(60));
        assert!(!ticker.update_pending());
    }

    #[test]
    fn test_pending_latches_after_period() {
        let mut ticker = PeriodicTicker::new(Duration::from_millis(1));
        std::thread::sleep(Duration::from_millis(10));

        assert!(ticker.update_pending());
        // Latched until cleared
        assert!(ticker.update_pending());

        ticker.clear_update();
        assert!(!ticker.pending);
    }
}
