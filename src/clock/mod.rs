// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use std::fmt;

use log::warn;

use crate::error::Result;

mod cpu;
mod monotonic;
mod native;

pub use self::cpu::CpuClock;
pub use self::monotonic::MonotonicClock;
pub use self::native::NativeClock;

#[cfg(feature = "native-clock")]
pub use self::native::NativeClock as SelectedClock;

#[cfg(all(feature = "cpu-clock", not(feature = "native-clock")))]
pub use self::cpu::CpuClock as SelectedClock;

#[cfg(not(any(feature = "native-clock", feature = "cpu-clock")))]
pub use self::monotonic::MonotonicClock as SelectedClock;

pub(crate) const NANOS_PER_MS: u64 = 1_000_000;

#[cfg(unix)]
pub(crate) fn timespec_nanos(ts: &libc::timespec) -> u64 {
    (ts.tv_sec as u64)
        .saturating_mul(1_000_000_000)
        .saturating_add(ts.tv_nsec as u64)
}

/// Unwraps a timestamp read, keeping `previous` and logging when the
/// counter failed after initialization.
pub(crate) fn read_or(read: Result<u64>, previous: u64) -> u64 {
    match read {
        Ok(now) => now,
        Err(e) => {
            warn!("{}, reusing previous timestamp", e);
            previous
        }
    }
}

/// Trait implemented by the timing back-ends
///
/// The `Display` implementation is the one-line self-identification,
/// including resolution or frequency.
pub trait Clock: fmt::Display + Sized {
    /// Initialize the back-end, failing if the underlying counter is
    /// not available on this platform.
    fn new() -> Result<Self>;

    /// Capture the measurement origin, overwriting any previous one.
    fn start(&mut self);

    /// Capture the end timestamp and compute the elapsed time.
    fn stop(&mut self);

    /// Elapsed whole milliseconds.
    fn ms(&self) -> f64;

    /// Elapsed time in the back-end's native unit, zero when the unit is
    /// not distinct from milliseconds.
    fn ticks(&self) -> u64;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spin() -> u64 {
        let mut acc = 0u64;
        for i in 0..100_000u64 {
            acc = std::hint::black_box(acc.wrapping_add(i));
        }
        acc
    }

    fn elapsed_is_non_negative<C: Clock>() {
        let mut clock = C::new().unwrap();

        clock.start();
        spin();
        clock.stop();

        assert!(clock.ms() >= 0.0);
        assert_eq!(clock.ms().fract(), 0.0);

        // back to back
        clock.start();
        clock.stop();
        assert!(clock.ms() >= 0.0);
        assert!(clock.ms() < 50.0);
    }

    fn restart_overwrites<C: Clock>() {
        let mut clock = C::new().unwrap();
        clock.start();
        spin();
        clock.start();
        clock.stop();
        assert!(clock.ms() < 50.0);
    }

    #[test]
    fn failed_read_keeps_previous_timestamp() {
        use crate::error::Error;
        use std::io;

        assert_eq!(read_or(Ok(42), 7), 42);
        let failed = Err(Error::clock_unavailable(
            "test",
            io::Error::new(io::ErrorKind::Other, "counter gone"),
        ));
        assert_eq!(read_or(failed, 7), 7);
    }

    #[test]
    fn monotonic_clock() {
        elapsed_is_non_negative::<MonotonicClock>();
        restart_overwrites::<MonotonicClock>();
    }

    #[cfg(any(unix, windows))]
    #[test]
    fn native_clock() {
        elapsed_is_non_negative::<NativeClock>();
        restart_overwrites::<NativeClock>();
    }

    #[cfg(any(unix, windows))]
    #[test]
    fn cpu_clock() {
        elapsed_is_non_negative::<CpuClock>();
        restart_overwrites::<CpuClock>();
    }

    #[test]
    fn selected_clock_identifies_itself() {
        let clock = SelectedClock::new().unwrap();
        let line = clock.to_string();
        assert!(line.starts_with("Timer: "));
        assert!(!line.contains('\n'));
    }
}
