// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use clap::{App, Arg, ArgMatches};
use log::info;
use seamcarve::SeamCarver;
use std::error::Error;
use std::process;

fn dimension(matches: &ArgMatches, name: &str, current: u32) -> Result<u32, Box<dyn Error>> {
    match matches.value_of(name) {
        None => Ok(current),
        Some(value) => value
            .parse()
            .map_err(|e| format!("bad --{} {:?}: {}", name, value, e).into()),
    }
}

fn run(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    // Both are required arguments.
    let input = matches.value_of("INPUT").unwrap_or_default();
    let output = matches.value_of("OUTPUT").unwrap_or_default();

    let image = image::open(input)?.to_rgb8();
    let mut carver = SeamCarver::new(&image)?;
    let (width, height) = (carver.width(), carver.height());
    info!("read {} ({}x{})", input, width, height);

    if matches.is_present("energy") {
        carver.energy_image().save(output)?;
        return Ok(());
    }

    let new_width = dimension(matches, "width", width)?;
    let new_height = dimension(matches, "height", height)?;
    carver.carve(new_width, new_height)?;
    info!("carved to {}x{}, writing {}", new_width, new_height, output);
    carver.to_image().save(output)?;
    Ok(())
}

fn main() {
    env_logger::init();

    let matches = App::new("seamcarve")
        .version("0.1.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Content-aware image shrinking by seam carving")
        .arg(
            Arg::with_name("INPUT")
                .help("The image to carve")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("OUTPUT")
                .help("Where to write the result")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::with_name("width")
                .long("width")
                .takes_value(true)
                .value_name("W")
                .help("Target width (default: unchanged)"),
        )
        .arg(
            Arg::with_name("height")
                .long("height")
                .takes_value(true)
                .value_name("H")
                .help("Target height (default: unchanged)"),
        )
        .arg(
            Arg::with_name("energy")
                .long("energy")
                .help("Write the energy map of INPUT instead of carving it"),
        )
        .get_matches();

    if let Err(e) = run(&matches) {
        eprintln!("seamcarve: {}", e);
        process::exit(1);
    }
}
