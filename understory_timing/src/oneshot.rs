// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cancellable single-shot timer.

use core::time::Duration;

/// Identifies one arming of a [`OneShot`].
///
/// Every call to [`OneShot::arm`] yields a fresh token, so a host that
/// schedules its own wake-ups can tell a stale wake-up from the current one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerToken(u64);

impl TimerToken {
    /// Returns the raw token value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// A single-shot timer with explicit cancel-on-rearm semantics.
///
/// At most one deadline is pending at a time. Arming while a deadline is
/// pending cancels it.
#[derive(Clone, Debug, Default)]
pub struct OneShot {
    pending: Option<(Duration, TimerToken)>,
    next_token: u64,
}

impl OneShot {
    /// Creates an idle timer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms the timer to fire `delay` after `now`, replacing any pending deadline.
    pub fn arm(&mut self, now: Duration, delay: Duration) -> TimerToken {
        let token = TimerToken(self.next_token);
        self.next_token = self.next_token.wrapping_add(1);
        self.pending = Some((now.saturating_add(delay), token));
        token
    }

    /// Cancels the pending deadline, returning its token if there was one.
    pub fn cancel(&mut self) -> Option<TimerToken> {
        self.pending.take().map(|(_, token)| token)
    }

    /// Returns `true` while a deadline is pending.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }

    /// Returns the pending deadline, if any.
    #[must_use]
    pub fn deadline(&self) -> Option<Duration> {
        self.pending.map(|(deadline, _)| deadline)
    }

    /// Returns the token of the pending arming, if any.
    #[must_use]
    pub fn token(&self) -> Option<TimerToken> {
        self.pending.map(|(_, token)| token)
    }

    /// Fires the timer if its deadline has been reached.
    ///
    /// Returns the token of the arming that fired. A fired timer is idle
    /// again, so it fires at most once per arming.
    pub fn poll(&mut self, now: Duration) -> Option<TimerToken> {
        match self.pending {
            Some((deadline, token)) if now >= deadline => {
                self.pending = None;
                Some(token)
            }
            _ => None,
        }
    }
}
