// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Single pass traversal benchmark over the std collections and a raw
//! heap buffer, each holding boxed payloads.

mod bench;
mod clock;
mod containers;
mod error;
mod payload;
mod raw_array;
mod report;
#[cfg(test)]
mod tests;

pub use crate::bench::{Benchmark, Config, DEFAULT_ELEMENTS};
pub use crate::clock::{
    Clock, CpuClock, MonotonicClock, NativeClock, SelectedClock,
};
pub use crate::containers::{expected_total, ContainerKind, Containers};
pub use crate::error::{Error, Result};
pub use crate::payload::Payload;
pub use crate::raw_array::RawArray;
pub use crate::report::{Divergence, Measurement, Population, Report};
