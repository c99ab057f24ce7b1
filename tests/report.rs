// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use iterbench::{
    expected_total, Benchmark, Clock, Config, ContainerKind, CpuClock,
    MonotonicClock, NativeClock, Report, DEFAULT_ELEMENTS,
};

const LABELS: [&str; 5] = ["btree map", "hash map", "vec", "linked list", "array"];

fn run<C: Clock>(n: usize) -> (Report, String) {
    let mut bench = Benchmark::<C>::new(Config::with_elements(n)).unwrap();
    let mut out = vec![];
    let report = bench.run(&mut out).unwrap();
    (report, String::from_utf8(out).unwrap())
}

/// Labels of the measurement blocks, in output order
fn block_labels(output: &str) -> Vec<&str> {
    let lines: Vec<&str> = output.lines().collect();
    lines
        .iter()
        .enumerate()
        .filter(|(_, line)| **line == "*****")
        .map(|(i, _)| lines[i + 1])
        .collect()
}

fn check<C: Clock>(n: usize) -> String {
    let (report, output) = run::<C>(n);
    let mut lines = output.lines();

    assert!(lines.next().unwrap().starts_with("Timer: "));
    assert_eq!(lines.next(), Some("Allocating elements"));
    assert!(lines
        .next()
        .unwrap()
        .starts_with(&format!("Number of elements: {}  ms: ", n)));

    assert_eq!(block_labels(&output), LABELS.to_vec());
    assert_eq!(output.matches("\nms: ").count(), 5);
    assert!(!output.contains("Total: "));

    assert!(report.agrees());
    assert_eq!(report.reference(), Some(expected_total(n)));
    for kind in ContainerKind::ALL.iter() {
        assert_eq!(
            report.measurement(*kind).map(|m| m.total),
            Some(expected_total(n))
        );
    }
    output
}

#[test]
fn zero_elements() {
    let output = check::<MonotonicClock>(0);
    assert!(output.contains("Number of elements: 0  ms: 0\n"));
    for block in output.split("*****").skip(1) {
        assert!(block.contains("\nms: 0\n"), "{}", block);
    }
}

#[test]
fn known_sizes() {
    check::<MonotonicClock>(1);
    check::<MonotonicClock>(10);
    check::<MonotonicClock>(1000);

    assert_eq!(expected_total(1), 0);
    assert_eq!(expected_total(10), 45);
    assert_eq!(expected_total(1000), 499_500);
}

#[cfg(any(unix, windows))]
#[test]
fn clocks_are_interchangeable() {
    let strip = |output: String| -> Vec<String> {
        output
            .lines()
            .skip(1)
            .filter(|l| !l.starts_with("ms: ") && !l.starts_with("ticks: "))
            .filter(|l| !l.starts_with("Number of elements: "))
            .map(String::from)
            .collect()
    };

    let monotonic = strip(check::<MonotonicClock>(1000));
    let native = strip(check::<NativeClock>(1000));
    let cpu = strip(check::<CpuClock>(1000));

    assert_eq!(monotonic, native);
    assert_eq!(monotonic, cpu);
}

#[test]
#[ignore]
fn default_size() {
    let (report, output) = run::<MonotonicClock>(DEFAULT_ELEMENTS);
    assert_eq!(report.reference(), Some(499_999_500_000));
    assert!(report.agrees());
    assert_eq!(block_labels(&output).len(), 5);
}
