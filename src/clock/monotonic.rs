// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use std::fmt;
use std::time::{Duration, Instant};

use crate::clock::{Clock, NANOS_PER_MS};
use crate::error::Result;

/// Portable clock backed by `std::time::Instant`, ticking in nanoseconds
pub struct MonotonicClock {
    start: Instant,
    elapsed: Duration,
}

impl Clock for MonotonicClock {
    fn new() -> Result<Self> {
        Ok(MonotonicClock {
            start: Instant::now(),
            elapsed: Duration::default(),
        })
    }

    #[inline]
    fn start(&mut self) {
        self.start = Instant::now();
    }

    #[inline]
    fn stop(&mut self) {
        self.elapsed = Instant::now().saturating_duration_since(self.start);
    }

    fn ms(&self) -> f64 {
        (self.ticks() / NANOS_PER_MS) as f64
    }

    fn ticks(&self) -> u64 {
        self.elapsed.as_nanos() as u64
    }
}

impl fmt::Display for MonotonicClock {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Timer: std::time::Instant  Precision: 1000000000")
    }
}
