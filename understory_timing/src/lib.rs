// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_timing --heading-base-level=0

//! Understory Timing: host-agnostic timer primitives for UI runtimes.
//!
//! UI toolkits all own an event loop with some way to schedule a callback
//! later, and they all do it differently. This crate keeps the *policy* of
//! timers out of the host: timers here never fire on their own. Instead the
//! host reads the current time from a [`Clock`], asks a timer for its
//! [`deadline`](OneShot::deadline) so it can schedule a wake-up, and calls
//! `poll` when it wakes.
//!
//! It provides:
//! - [`Clock`]: a source of monotonic timestamps expressed as a
//!   [`Duration`](core::time::Duration) since an arbitrary origin.
//! - [`ManualClock`]: a shared, manually advanced clock for tests and for
//!   hosts that already track frame time.
//! - [`MonotonicClock`]: a clock backed by `std::time::Instant` (requires the
//!   `std` feature).
//! - [`OneShot`]: a cancellable single-shot timer. Re-arming replaces the
//!   pending deadline, so at most one is ever pending.
//! - [`Debouncer`]: last-write-wins debouncing on top of [`OneShot`].
//!
//! ## Debounce example
//!
//! ```rust
//! use core::time::Duration;
//! use understory_timing::{Clock, Debouncer, ManualClock};
//!
//! let clock = ManualClock::new();
//! let mut settle = Debouncer::new(Duration::from_millis(200));
//!
//! // Two triggers in quick succession: the first one is superseded.
//! settle.trigger(clock.now());
//! clock.advance(Duration::from_millis(150));
//! settle.trigger(clock.now());
//!
//! clock.advance(Duration::from_millis(150));
//! assert!(!settle.poll(clock.now()));
//!
//! clock.advance(Duration::from_millis(50));
//! assert!(settle.poll(clock.now()));
//! assert!(!settle.poll(clock.now()));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod clock;
mod debounce;
mod oneshot;

#[cfg(feature = "std")]
pub use clock::MonotonicClock;
pub use clock::{Clock, ManualClock};
pub use debounce::Debouncer;
pub use oneshot::{OneShot, TimerToken};
