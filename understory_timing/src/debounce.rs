// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use crate::oneshot::{OneShot, TimerToken};

/// Last-write-wins debouncer.
///
/// Each [`trigger`](Self::trigger) restarts the quiet period. [`poll`](Self::poll)
/// reports `true` exactly once after a full quiet period has elapsed since the
/// most recent trigger.
#[derive(Clone, Debug)]
pub struct Debouncer {
    delay: Duration,
    timer: OneShot,
}

impl Debouncer {
    /// Creates an idle debouncer with the given quiet period.
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            timer: OneShot::new(),
        }
    }

    /// Returns the quiet period.
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Sets the quiet period used by subsequent triggers.
    ///
    /// A pending deadline keeps the period it was armed with.
    pub fn set_delay(&mut self, delay: Duration) {
        self.delay = delay;
    }

    /// Records activity at `now`, cancelling any pending deadline.
    pub fn trigger(&mut self, now: Duration) -> TimerToken {
        self.timer.arm(now, self.delay)
    }

    /// Drops any pending deadline without firing it.
    pub fn cancel(&mut self) {
        self.timer.cancel();
    }

    /// Returns `true` while a quiet period is running.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.timer.is_armed()
    }

    /// Returns the time at which the running quiet period ends.
    #[must_use]
    pub fn deadline(&self) -> Option<Duration> {
        self.timer.deadline()
    }

    /// Returns `true` if the quiet period ended at or before `now`.
    pub fn poll(&mut self, now: Duration) -> bool {
        self.timer.poll(now).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn single_trigger_settles_after_delay() {
        let mut d = Debouncer::new(ms(200));
        d.trigger(Duration::ZERO);
        assert!(d.is_pending());
        assert!(!d.poll(ms(199)));
        assert!(d.poll(ms(200)));
        assert!(!d.is_pending());
    }

    #[test]
    fn burst_settles_once_from_last_trigger() {
        let mut d = Debouncer::new(ms(200));
        d.trigger(Duration::ZERO);
        d.trigger(ms(100));
        d.trigger(ms(150));
        assert_eq!(d.deadline(), Some(ms(350)));

        let fired = [200, 300, 349, 350, 400, 1000]
            .iter()
            .filter(|&&t| d.poll(ms(t)))
            .count();
        assert_eq!(fired, 1);
    }

    #[test]
    fn cancel_suppresses_settle() {
        let mut d = Debouncer::new(ms(10));
        d.trigger(Duration::ZERO);
        d.cancel();
        assert!(!d.poll(ms(100)));
    }

    #[test]
    fn set_delay_applies_to_next_trigger() {
        let mut d = Debouncer::new(ms(10));
        d.trigger(Duration::ZERO);
        d.set_delay(ms(50));
        assert_eq!(d.deadline(), Some(ms(10)));
        d.trigger(Duration::ZERO);
        assert_eq!(d.deadline(), Some(ms(50)));
        assert_eq!(d.delay(), ms(50));
    }
}
