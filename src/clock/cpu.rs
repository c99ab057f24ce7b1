// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use std::fmt;

use crate::clock::{read_or, Clock};
use crate::error::Result;

/// Coarse clock measuring CPU time consumed by the process
pub struct CpuClock {
    start: u64,
    elapsed: u64,
}

impl Clock for CpuClock {
    fn new() -> Result<Self> {
        let start = imp::cpu_ticks()?;
        Ok(CpuClock { start, elapsed: 0 })
    }

    #[inline]
    fn start(&mut self) {
        self.start = read_or(imp::cpu_ticks(), self.start);
    }

    #[inline]
    fn stop(&mut self) {
        let end = read_or(imp::cpu_ticks(), self.start);
        self.elapsed = end.saturating_sub(self.start);
    }

    fn ms(&self) -> f64 {
        (self.elapsed * 1000 / imp::CLOCKS_PER_SEC) as f64
    }

    fn ticks(&self) -> u64 {
        self.elapsed
    }
}

impl fmt::Display for CpuClock {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Timer: process cpu time   Precision: Clocks/Second: {}",
            imp::CLOCKS_PER_SEC
        )
    }
}

#[cfg(unix)]
mod imp {
    use std::mem;

    use crate::clock::timespec_nanos;
    use crate::error::{Error, Result};

    /// Ticks are quantized to microseconds, as `clock()` does on POSIX
    pub const CLOCKS_PER_SEC: u64 = 1_000_000;

    const NANOS_PER_CLOCK: u64 = 1_000_000_000 / CLOCKS_PER_SEC;

    pub fn cpu_ticks() -> Result<u64> {
        let mut ts: libc::timespec = unsafe { mem::zeroed() };
        if unsafe {
            libc::clock_gettime(libc::CLOCK_PROCESS_CPUTIME_ID, &mut ts)
        } != 0
        {
            return Err(Error::last_os_error("cpu"));
        }
        Ok(timespec_nanos(&ts) / NANOS_PER_CLOCK)
    }
}

#[cfg(windows)]
mod imp {
    use std::mem;

    use winapi::shared::minwindef::FILETIME;
    use winapi::um::processthreadsapi::{GetCurrentProcess, GetProcessTimes};

    use crate::error::{Error, Result};

    /// `FILETIME` counts in 100ns intervals
    pub const CLOCKS_PER_SEC: u64 = 10_000_000;

    fn filetime(ft: &FILETIME) -> u64 {
        (ft.dwHighDateTime as u64) << 32 | ft.dwLowDateTime as u64
    }

    pub fn cpu_ticks() -> Result<u64> {
        unsafe {
            let mut creation: FILETIME = mem::zeroed();
            let mut exit: FILETIME = mem::zeroed();
            let mut kernel: FILETIME = mem::zeroed();
            let mut user: FILETIME = mem::zeroed();
            if GetProcessTimes(
                GetCurrentProcess(),
                &mut creation,
                &mut exit,
                &mut kernel,
                &mut user,
            ) == 0
            {
                return Err(Error::last_os_error("cpu"));
            }
            Ok(filetime(&kernel) + filetime(&user))
        }
    }
}

#[cfg(not(any(unix, windows)))]
mod imp {
    use std::io;

    use crate::error::{Error, Result};

    pub const CLOCKS_PER_SEC: u64 = 1;

    pub fn cpu_ticks() -> Result<u64> {
        Err(Error::clock_unavailable(
            "cpu",
            io::Error::new(
                io::ErrorKind::Other,
                "no process cpu clock on this platform",
            ),
        ))
    }
}
