// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use std::io::{self, Write};

use arrayvec::ArrayVec;

use crate::containers::ContainerKind;

const DIVIDER: &str = "*****";

/// Timing of the population phase
#[derive(Clone, Debug, PartialEq)]
pub struct Population {
    pub elements: usize,
    pub ms: f64,
}

impl Population {
    pub fn write<W: Write>(&self, w: &mut W) -> io::Result<()> {
        writeln!(
            w,
            "Number of elements: {}  ms: {}",
            self.elements, self.ms as u64
        )
    }
}

/// One container's measurement block
#[derive(Clone, Debug, PartialEq)]
pub struct Measurement {
    pub kind: ContainerKind,
    pub ms: f64,
    pub ticks: u64,
    /// Accumulator value after the traversal
    pub total: i64,
}

impl Measurement {
    pub fn write<W: Write>(&self, w: &mut W) -> io::Result<()> {
        writeln!(w)?;
        writeln!(w, "{}", DIVIDER)?;
        writeln!(w, "{}", self.kind)?;
        writeln!(w, "ms: {}", self.ms as u64)?;
        if self.ticks != 0 {
            writeln!(w, "ticks: {}", self.ticks)?;
        }
        Ok(())
    }
}

/// A traversal whose total disagrees with the first one
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Divergence {
    pub kind: ContainerKind,
    pub total: i64,
    pub expected: i64,
}

impl Divergence {
    pub fn write<W: Write>(&self, w: &mut W) -> io::Result<()> {
        writeln!(w, "Total: {}", self.total)
    }
}

/// Everything a run measured
#[derive(Clone, Debug)]
pub struct Report {
    /// Self-identification of the clock used
    pub clock: String,
    pub population: Population,
    pub measurements: ArrayVec<[Measurement; 5]>,
    pub divergences: Vec<Divergence>,
}

impl Report {
    /// The reference total, taken from the first traversal
    pub fn reference(&self) -> Option<i64> {
        self.measurements.first().map(|m| m.total)
    }

    pub fn measurement(&self, kind: ContainerKind) -> Option<&Measurement> {
        self.measurements.iter().find(|m| m.kind == kind)
    }

    /// True when every traversal produced the same total
    pub fn agrees(&self) -> bool {
        self.divergences.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render<F: Fn(&mut Vec<u8>) -> io::Result<()>>(f: F) -> String {
        let mut out = vec![];
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn population_line() {
        let p = Population {
            elements: 0,
            ms: 0.0,
        };
        assert_eq!(
            render(|w| p.write(w)),
            "Number of elements: 0  ms: 0\n"
        );
    }

    #[test]
    fn block_with_ticks() {
        let m = Measurement {
            kind: ContainerKind::HashMap,
            ms: 12.0,
            ticks: 12_345_678,
            total: 45,
        };
        assert_eq!(
            render(|w| m.write(w)),
            "\n*****\nhash map\nms: 12\nticks: 12345678\n"
        );
    }

    #[test]
    fn block_without_ticks() {
        let m = Measurement {
            kind: ContainerKind::RawArray,
            ms: 0.0,
            ticks: 0,
            total: 0,
        };
        assert_eq!(render(|w| m.write(w)), "\n*****\narray\nms: 0\n");
    }

    #[test]
    fn divergence_line() {
        let d = Divergence {
            kind: ContainerKind::Sequence,
            total: 44,
            expected: 45,
        };
        assert_eq!(render(|w| d.write(w)), "Total: 44\n");
    }
}
