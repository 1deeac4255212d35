// Copyright 2026 U.S. Federal Government (in countries where recognized)
// SPDX-License-Identifier: Apache-2.0

//! Device uptime.
//!
//! The client never reads wall-clock time. Everything it does between
//! exchanges is measured in milliseconds of monotonic uptime supplied by a
//! [`Clock`].

use std::time::{Duration, Instant};

/// Monotonic millisecond counter plus a way to wait.
pub trait Clock {
    /// Milliseconds since an arbitrary fixed origin. Must never decrease.
    fn millis(&self) -> u64;

    /// Block for roughly `ms` milliseconds.
    fn sleep_ms(&self, ms: u64);
}

impl<C: Clock + ?Sized> Clock for &C {
    fn millis(&self) -> u64 {
        (**self).millis()
    }

    fn sleep_ms(&self, ms: u64) {
        (**self).sleep_ms(ms)
    }
}

/// [`Clock`] backed by [`std::time::Instant`], counting from construction.
#[derive(Clone, Copy, Debug)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    /// Start counting from now.
    pub fn new() -> Self {
        SystemClock {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        SystemClock::new()
    }
}

impl Clock for SystemClock {
    fn millis(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }

    fn sleep_ms(&self, ms: u64) {
        std::thread::sleep(Duration::from_millis(ms));
    }
}
