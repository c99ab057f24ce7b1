// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use std::hint;
use std::io::Write;

use arrayvec::ArrayVec;
use log::{debug, info, warn};

use crate::clock::Clock;
use crate::containers::{ContainerKind, Containers};
use crate::error::Result;
use crate::report::{Divergence, Measurement, Population, Report};

/// Number of elements per container when nothing else is configured
pub const DEFAULT_ELEMENTS: usize = 1_000_000;

/// Parameters of a run
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Payloads inserted into each container
    pub elements: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            elements: DEFAULT_ELEMENTS,
        }
    }
}

impl Config {
    pub fn with_elements(elements: usize) -> Self {
        Config { elements }
    }
}

/// Single pass benchmark driver, generic over the clock back-end
pub struct Benchmark<C: Clock> {
    clock: C,
    config: Config,
}

impl<C: Clock> Benchmark<C> {
    /// Initializes the clock, failing if it is unavailable
    pub fn new(config: Config) -> Result<Self> {
        let clock = C::new()?;
        info!("{}", clock);
        Ok(Self::with_clock(clock, config))
    }

    pub fn with_clock(clock: C, config: Config) -> Self {
        Benchmark { clock, config }
    }

    /// Populates the containers, measures one traversal of each and
    /// writes the text report to `out` as it goes.
    pub fn run<W: Write>(&mut self, out: &mut W) -> Result<Report> {
        let n = self.config.elements;
        info!("running with {} elements per container", n);

        writeln!(out, "{}", self.clock)?;
        writeln!(out, "Allocating elements")?;

        self.clock.start();
        let containers = Containers::populate(n);
        self.clock.stop();

        let population = Population {
            elements: n,
            ms: self.clock.ms(),
        };
        population.write(out)?;
        debug!("populated in {} ms", population.ms);

        let mut measurements = ArrayVec::<[Measurement; 5]>::new();
        let mut divergences = vec![];
        let mut reference = None;

        for &kind in ContainerKind::ALL.iter() {
            let measurement = self.measure(&containers, kind);
            measurement.write(out)?;
            debug!(
                "{}: {} ms, total {}",
                kind, measurement.ms, measurement.total
            );

            if let Some(divergence) = cross_check(&mut reference, &measurement)
            {
                warn!(
                    "{} total {} differs from {}",
                    kind, divergence.total, divergence.expected
                );
                divergence.write(out)?;
                divergences.push(divergence);
            }

            measurements.push(measurement);
        }

        self.clock.start();
        drop(containers);
        self.clock.stop();
        debug!("teardown in {} ms", self.clock.ms());

        out.flush()?;

        Ok(Report {
            clock: self.clock.to_string(),
            population,
            measurements,
            divergences,
        })
    }

    fn measure(
        &mut self,
        containers: &Containers,
        kind: ContainerKind,
    ) -> Measurement {
        self.clock.start();
        let total = containers.traverse(kind);
        self.clock.stop();

        Measurement {
            kind,
            ms: self.clock.ms(),
            ticks: self.clock.ticks(),
            total: hint::black_box(total),
        }
    }
}

/// Compares a traversal total against the first one seen, which becomes
/// the reference.
fn cross_check(
    reference: &mut Option<i64>,
    measurement: &Measurement,
) -> Option<Divergence> {
    match *reference {
        None => {
            *reference = Some(measurement.total);
            None
        }
        Some(expected) if expected != measurement.total => Some(Divergence {
            kind: measurement.kind,
            total: measurement.total,
            expected,
        }),
        Some(_) => None,
    }
}
