// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_timing --heading-base-level=0

//! Understory Timing: host-agnostic timer primitives for UI runtimes.
//!
//! Interaction state machines often need "do this in 200 ms unless something
//! else happens first". Timers in this crate never read a clock: the host
//! passes a monotonic `now` (milliseconds) when arming and polling, and uses
//! [`OneShot::deadline`] to schedule its own wake-up.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_timing::OneShot;
//!
//! let mut timer = OneShot::new();
//! assert!(timer.arm(1_000, 200));
//! // Only one deadline can be pending.
//! assert!(!timer.arm(1_050, 200));
//!
//! assert!(!timer.fire(1_199));
//! assert!(timer.fire(1_200));
//! // A fired timer is spent.
//! assert!(!timer.is_pending());
//! assert!(!timer.fire(2_000));
//! ```
//!
//! This crate is `no_std` and has no dependencies.

#![no_std]

/// A cancelable single-shot timer.
///
/// Holds at most one pending deadline. The deadline is cleared when the timer
/// fires or is canceled, so a stale deadline can never fire later.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct OneShot {
    deadline: Option<u64>,
}

impl OneShot {
    /// Create a disarmed timer.
    pub const fn new() -> Self {
        Self { deadline: None }
    }

    /// Arm the timer to fire `delay` ms after `now`.
    ///
    /// Returns `false`, leaving the existing deadline untouched, if the timer
    /// is already pending.
    pub fn arm(&mut self, now: u64, delay: u64) -> bool {
        if self.deadline.is_some() {
            return false;
        }
        self.deadline = Some(now.saturating_add(delay));
        true
    }

    /// Cancel the pending deadline. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        self.deadline.take().is_some()
    }

    /// Whether a deadline is pending.
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// The pending deadline, if any.
    pub fn deadline(&self) -> Option<u64> {
        self.deadline
    }

    /// Time left until the deadline, saturating at zero.
    pub fn remaining(&self, now: u64) -> Option<u64> {
        self.deadline.map(|deadline| deadline.saturating_sub(now))
    }

    /// Fire the timer if its deadline has been reached.
    ///
    /// Returns `true` exactly once per armed deadline; the timer is disarmed
    /// when it fires.
    pub fn fire(&mut self, now: u64) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_timer_is_idle() {
        let mut t = OneShot::new();
        assert!(!t.is_pending());
        assert_eq!(t.deadline(), None);
        assert_eq!(t.remaining(5), None);
        assert!(!t.fire(u64::MAX));
        assert!(!t.cancel());
    }

    #[test]
    fn arm_sets_deadline_once() {
        let mut t = OneShot::new();
        assert!(t.arm(10, 5));
        assert!(!t.arm(11, 100));
        assert_eq!(t.deadline(), Some(15));
        assert_eq!(t.remaining(12), Some(3));
        assert_eq!(t.remaining(20), Some(0));
    }

    #[test]
    fn cancel_prevents_firing() {
        let mut t = OneShot::new();
        t.arm(0, 10);
        assert!(t.cancel());
        assert!(!t.fire(100));
        // Can be armed again after cancel.
        assert!(t.arm(100, 10));
        assert!(t.fire(110));
    }

    #[test]
    fn fires_exactly_once() {
        let mut t = OneShot::new();
        t.arm(0, 10);
        assert!(!t.fire(9));
        assert!(t.is_pending());
        assert!(t.fire(10));
        assert!(!t.fire(11));
        assert!(!t.is_pending());
    }

    #[test]
    fn deadline_saturates() {
        let mut t = OneShot::new();
        t.arm(u64::MAX - 1, 10);
        assert_eq!(t.deadline(), Some(u64::MAX));
    }
}
