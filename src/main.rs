// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

extern crate clap;
extern crate env_logger;
extern crate failure;
#[macro_use]
extern crate log;
extern crate mandelbrot;
extern crate num_cpus;

use clap::{App, Arg, ArgMatches};
use mandelbrot::{output_name, PaintType, Plot, DEFAULT_NAME, MAX_PIXEL_DENSITY};
use std::process::Command;
use std::str::FromStr;

fn validate_range<T: FromStr + Ord>(
    s: &str,
    low: T,
    high: T,
    isnotanumber_err: &str,
    isnotinrange_err: &str,
) -> Result<(), String> {
    match T::from_str(s) {
        Ok(i) => {
            if i >= low && i <= high {
                Ok(())
            } else {
                Err(isnotinrange_err.to_string())
            }
        }
        Err(_) => Err(isnotanumber_err.to_string()),
    }
}

const TYPE: &str = "type";
const PIXEL_DENSITY: &str = "pixel-density";
const MAX_ITERATIONS: &str = "max-iterations";
const NAME: &str = "name";
const THREADS: &str = "threads";
const NO_SHOW: &str = "no-show";
const NO_SAVE: &str = "no-save";

fn args<'a>() -> ArgMatches<'a> {
    let max_threads = num_cpus::get();
    let max_density = i64::from(MAX_PIXEL_DENSITY);

    App::new("mandelbrot")
        .version("0.1.0")
        .about("Display the Mandelbrot set as a scatter plot or a black-and-white image")
        .arg(
            Arg::with_name(NO_SHOW)
                .long(NO_SHOW)
                .conflicts_with(NO_SAVE)
                .help("Don't show the result in a viewer"),
        )
        .arg(
            Arg::with_name(NO_SAVE)
                .long(NO_SAVE)
                .help("Don't save the image"),
        )
        .arg(
            Arg::with_name(NAME)
                .long(NAME)
                .takes_value(true)
                .default_value(DEFAULT_NAME)
                .help("Name of the output file; %(pixel_density)d is replaced by the density"),
        )
        .arg(
            Arg::with_name(PIXEL_DENSITY)
                .long(PIXEL_DENSITY)
                .takes_value(true)
                .allow_hyphen_values(true)
                .validator(move |s| {
                    validate_range(
                        &s,
                        1,
                        max_density,
                        "Could not parse pixel density",
                        &format!("Pixel density must be between 1 and {}", max_density),
                    )
                })
                .help("Pixel density of the image (default: 21 for dots, 512 for normal)"),
        )
        .arg(
            Arg::with_name(TYPE)
                .long(TYPE)
                .takes_value(true)
                .possible_values(&["dots", "normal"])
                .default_value("dots")
                .help("Painting type"),
        )
        .arg(
            Arg::with_name(MAX_ITERATIONS)
                .long(MAX_ITERATIONS)
                .takes_value(true)
                .allow_hyphen_values(true)
                .validator(|s| {
                    validate_range(
                        &s,
                        1,
                        i64::from(u32::max_value()),
                        "Could not parse iteration count",
                        "Iteration count must be a positive integer",
                    )
                })
                .help("Maximum number of iterations for a pixel (default: 20 for dots, 100 for normal)"),
        )
        .arg(
            Arg::with_name(THREADS)
                .long(THREADS)
                .short("t")
                .takes_value(true)
                .default_value("1")
                .validator(move |s| {
                    validate_range(
                        &s,
                        1,
                        max_threads,
                        "Could not parse thread count",
                        &format!("Thread count must be between 1 and {}", max_threads),
                    )
                })
                .help("Number of threads to use in the evaluator"),
        )
        .get_matches()
}

/// Hand a saved image to the platform's viewer.  Failing to do so is
/// not worth aborting over: the image is already on disk.
fn show_image(path: &str) {
    let (program, args): (&str, Vec<&str>) = if cfg!(target_os = "windows") {
        ("cmd", vec!["/C", "start", "", path])
    } else if cfg!(target_os = "macos") {
        ("open", vec![path])
    } else {
        ("xdg-open", vec![path])
    };
    match Command::new(program).args(&args).spawn() {
        Ok(_) => debug!("opened {} with {}", path, program),
        Err(e) => warn!("could not open {} with {}: {}", path, program, e),
    }
}

fn run(matches: &ArgMatches) -> Result<(), failure::Error> {
    let paint_type = PaintType::from_str(matches.value_of(TYPE).unwrap_or("dots"))?;
    let defaults = paint_type.defaults();

    let pixel_density = match matches.value_of(PIXEL_DENSITY) {
        Some(s) => u32::from_str(s)?,
        None => defaults.pixel_density,
    };
    let iterations = match matches.value_of(MAX_ITERATIONS) {
        Some(s) => usize::from_str(s)?,
        None => defaults.iterations,
    };
    let threads = usize::from_str(matches.value_of(THREADS).unwrap_or("1"))?;

    let image = Plot::new(paint_type)
        .pixel_density(pixel_density)
        .iterations(iterations)
        .threads(threads)
        .render()?;

    let show = !matches.is_present(NO_SHOW);
    if matches.is_present(NO_SAVE) {
        if show {
            warn!("nothing to show: the image was not saved");
        }
        return Ok(());
    }

    let filename = output_name(matches.value_of(NAME).unwrap_or(DEFAULT_NAME), pixel_density);
    image.save(&filename)?;
    info!("saved {}", filename);

    if show {
        show_image(&filename);
    }
    Ok(())
}

fn main() {
    env_logger::init();
    let matches = args();
    if let Err(e) = run(&matches) {
        eprintln!("Render failure: {}", e);
        std::process::exit(1);
    }
}
