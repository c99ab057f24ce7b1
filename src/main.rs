// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use std::io;
use std::process;

use iterbench::{Benchmark, Config, Result, SelectedClock};

fn run() -> Result<()> {
    let mut bench = Benchmark::<SelectedClock>::new(Config::default())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    bench.run(&mut out)?;
    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}
