// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use std::io;

use thiserror::Error;

/// Errors that stop a benchmark run
#[derive(Debug, Error)]
pub enum Error {
    /// The selected clock back-end could not be initialized
    #[error("clock `{clock}` unavailable: {source}")]
    ClockUnavailable {
        clock: &'static str,
        #[source]
        source: io::Error,
    },
    /// Writing the report failed
    #[error("could not write report: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    pub(crate) fn clock_unavailable(clock: &'static str, source: io::Error) -> Self {
        Error::ClockUnavailable { clock, source }
    }

    /// Shorthand for the last OS error of a failed clock call
    pub(crate) fn last_os_error(clock: &'static str) -> Self {
        Self::clock_unavailable(clock, io::Error::last_os_error())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
