// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

/// The object traversed by the benchmark
///
/// The decimal form is rendered on construction, so that its cost is paid
/// while populating and not inside the timed traversal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Payload {
    x: i64,
    string: String,
}

impl Payload {
    /// Creates a new `Payload` for `x`
    pub fn new(x: i64) -> Self {
        Payload {
            x,
            string: x.to_string(),
        }
    }

    /// The integer value
    #[inline]
    pub fn get(&self) -> i64 {
        self.x
    }

    /// A copy of the decimal representation
    #[inline]
    pub fn string(&self) -> String {
        self.string.clone()
    }
}
