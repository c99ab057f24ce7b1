// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use std::fmt;

use crate::clock::{read_or, Clock, NANOS_PER_MS};
use crate::error::Result;

/// The operating system's highest resolution monotonic counter
pub struct NativeClock {
    counter: imp::Counter,
    start: u64,
    elapsed: u64,
}

impl Clock for NativeClock {
    fn new() -> Result<Self> {
        let counter = imp::Counter::open()?;
        let start = counter.now()?;
        Ok(NativeClock {
            counter,
            start,
            elapsed: 0,
        })
    }

    #[inline]
    fn start(&mut self) {
        self.start = read_or(self.counter.now(), self.start);
    }

    #[inline]
    fn stop(&mut self) {
        let end = read_or(self.counter.now(), self.start);
        self.elapsed = end.saturating_sub(self.start);
    }

    fn ms(&self) -> f64 {
        (self.counter.nanos(self.elapsed) / NANOS_PER_MS) as f64
    }

    fn ticks(&self) -> u64 {
        self.counter.ticks(self.elapsed)
    }
}

impl fmt::Display for NativeClock {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.counter, f)
    }
}

// Linux and the other unices: CLOCK_MONOTONIC, ticking in nanoseconds
#[cfg(all(unix, not(target_vendor = "apple")))]
mod imp {
    use std::fmt;
    use std::mem;

    use crate::clock::timespec_nanos;
    use crate::error::{Error, Result};

    const NAME: &str = "native";

    pub struct Counter {
        resolution: u64,
    }

    impl Counter {
        pub fn open() -> Result<Self> {
            let mut res: libc::timespec = unsafe { mem::zeroed() };
            if unsafe { libc::clock_getres(libc::CLOCK_MONOTONIC, &mut res) }
                != 0
            {
                return Err(Error::last_os_error(NAME));
            }
            Ok(Counter {
                resolution: timespec_nanos(&res),
            })
        }

        #[inline]
        pub fn now(&self) -> Result<u64> {
            let mut ts: libc::timespec = unsafe { mem::zeroed() };
            if unsafe { libc::clock_gettime(libc::CLOCK_MONOTONIC, &mut ts) }
                != 0
            {
                return Err(Error::last_os_error(NAME));
            }
            Ok(timespec_nanos(&ts))
        }

        pub fn nanos(&self, ticks: u64) -> u64 {
            ticks
        }

        pub fn ticks(&self, ticks: u64) -> u64 {
            ticks
        }
    }

    impl fmt::Display for Counter {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            let os = if cfg!(target_os = "linux") {
                "Linux"
            } else {
                "POSIX"
            };
            write!(
                f,
                "Timer: {} High Precision   Resolution: {}ns",
                os, self.resolution
            )
        }
    }
}

// macOS and iOS: mach absolute time, converted to nanoseconds
#[cfg(target_vendor = "apple")]
#[allow(deprecated)]
mod imp {
    use std::fmt;

    use crate::error::{Error, Result};

    const NAME: &str = "native";

    pub struct Counter {
        numer: u64,
        denom: u64,
    }

    impl Counter {
        pub fn open() -> Result<Self> {
            let mut info = libc::mach_timebase_info { numer: 0, denom: 0 };
            if unsafe { libc::mach_timebase_info(&mut info) } != 0
                || info.denom == 0
            {
                return Err(Error::last_os_error(NAME));
            }
            Ok(Counter {
                numer: info.numer as u64,
                denom: info.denom as u64,
            })
        }

        #[inline]
        pub fn now(&self) -> Result<u64> {
            Ok(unsafe { libc::mach_absolute_time() })
        }

        pub fn nanos(&self, ticks: u64) -> u64 {
            (ticks as u128 * self.numer as u128 / self.denom as u128) as u64
        }

        pub fn ticks(&self, ticks: u64) -> u64 {
            self.nanos(ticks)
        }
    }

    impl fmt::Display for Counter {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            write!(
                f,
                "Timer: OSX High Precision   Timebase: {}/{}",
                self.numer, self.denom
            )
        }
    }
}

// Windows: the performance counter, ticking at its queried frequency
#[cfg(windows)]
mod imp {
    use std::fmt;
    use std::mem;

    use winapi::shared::ntdef::LARGE_INTEGER;
    use winapi::um::profileapi::{
        QueryPerformanceCounter, QueryPerformanceFrequency,
    };

    use crate::error::{Error, Result};

    const NAME: &str = "native";

    pub struct Counter {
        frequency: u64,
    }

    impl Counter {
        pub fn open() -> Result<Self> {
            let frequency = unsafe {
                let mut freq: LARGE_INTEGER = mem::zeroed();
                if QueryPerformanceFrequency(&mut freq) == 0 {
                    return Err(Error::last_os_error(NAME));
                }
                *freq.QuadPart()
            };
            if frequency <= 0 {
                return Err(Error::last_os_error(NAME));
            }
            Ok(Counter {
                frequency: frequency as u64,
            })
        }

        #[inline]
        pub fn now(&self) -> Result<u64> {
            unsafe {
                let mut count: LARGE_INTEGER = mem::zeroed();
                if QueryPerformanceCounter(&mut count) == 0 {
                    return Err(Error::last_os_error(NAME));
                }
                Ok(*count.QuadPart() as u64)
            }
        }

        pub fn nanos(&self, ticks: u64) -> u64 {
            (ticks as u128 * 1_000_000_000 / self.frequency as u128) as u64
        }

        pub fn ticks(&self, ticks: u64) -> u64 {
            ticks
        }
    }

    impl fmt::Display for Counter {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            write!(
                f,
                "Timer: Windows High Precision   Frequency: {}Hz",
                self.frequency
            )
        }
    }
}

#[cfg(not(any(unix, windows)))]
mod imp {
    use std::fmt;
    use std::io;

    use crate::error::{Error, Result};

    pub enum Counter {}

    impl Counter {
        pub fn open() -> Result<Self> {
            Err(Error::clock_unavailable(
                "native",
                io::Error::new(
                    io::ErrorKind::Other,
                    "no high resolution counter on this platform",
                ),
            ))
        }

        pub fn now(&self) -> Result<u64> {
            match *self {}
        }

        pub fn nanos(&self, _: u64) -> u64 {
            match *self {}
        }

        pub fn ticks(&self, _: u64) -> u64 {
            match *self {}
        }
    }

    impl fmt::Display for Counter {
        fn fmt(&self, _: &mut fmt::Formatter) -> fmt::Result {
            match *self {}
        }
    }
}
