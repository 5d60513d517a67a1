// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use clap::{App, Arg, ArgMatches};
use escapetime::{EscapeFunction, FractalRenderer, Julia, Mandelbrot, RenderError};
use num::Complex;
use std::str::FromStr;

/// Splits "12x34" or "-0.5,1" into its two halves.
fn parse_pair<T: FromStr>(s: &str, separator: char) -> Option<(T, T)> {
    let (left, right) = s.split_once(separator)?;
    Some((left.trim().parse().ok()?, right.trim().parse().ok()?))
}

/// A point on the complex plane, written "re,im".
fn parse_complex(s: &str) -> Option<Complex<f64>> {
    parse_pair(s, ',').map(|(re, im)| Complex::new(re, im))
}

fn validate_point(s: String, what: &str) -> Result<(), String> {
    match parse_complex(&s) {
        Some(_) => Ok(()),
        None => Err(format!("{} must be written re,im, got '{}'", what, s)),
    }
}

fn validate_size(s: String) -> Result<(), String> {
    match parse_pair::<u16>(&s, 'x') {
        Some(_) => Ok(()),
        None => Err(format!("Image size must be written WIDTHxHEIGHT, got '{}'", s)),
    }
}

fn validate_count(s: String, what: &str, low: usize, high: usize) -> Result<(), String> {
    match s.parse::<usize>() {
        Ok(n) if n >= low && n <= high => Ok(()),
        Ok(n) => Err(format!("{} must be between {} and {}, got {}", what, low, high, n)),
        Err(_) => Err(format!("{} must be a whole number, got '{}'", what, s)),
    }
}

const OUTPUT: &str = "output";
const SIZE: &str = "size";
const LEFTLOWER: &str = "leftlower";
const RIGHTUPPER: &str = "rightupper";
const FRACTAL: &str = "fractal";
const JULIA: &str = "julia";
const THREADS: &str = "threads";
const ITERATIONS: &str = "iterations";
const VERBOSE: &str = "verbose";

fn args<'a>() -> ArgMatches<'a> {
    let max_threads = num_cpus::get();

    App::new("escapetime")
        .version(env!("CARGO_PKG_VERSION"))
        .author("elf")
        .about("Escape-time fractal renderer")
        .arg(
            Arg::with_name(OUTPUT)
                .required(true)
                .long(OUTPUT)
                .short("o")
                .takes_value(true)
                .help("Output file; the format follows the extension"),
        )
        .arg(
            Arg::with_name(SIZE)
                .required(false)
                .long(SIZE)
                .short("s")
                .takes_value(true)
                .default_value("1000x1000")
                .validator(validate_size)
                .help("Size of output image"),
        )
        .arg(
            Arg::with_name(LEFTLOWER)
                .required(false)
                .long(LEFTLOWER)
                .short("l")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("-2,-2")
                .validator(|s| validate_point(s, "The left lower corner"))
                .help("Left lower corner of the complex plane"),
        )
        .arg(
            Arg::with_name(RIGHTUPPER)
                .required(false)
                .long(RIGHTUPPER)
                .short("r")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("2,2")
                .validator(|s| validate_point(s, "The right upper corner"))
                .help("Right upper corner of the complex plane"),
        )
        .arg(
            Arg::with_name(FRACTAL)
                .required(false)
                .long(FRACTAL)
                .short("f")
                .takes_value(true)
                .possible_values(&["mandelbrot", "julia"])
                .default_value("mandelbrot")
                .help("Which fractal to draw"),
        )
        .arg(
            Arg::with_name(JULIA)
                .required(false)
                .long(JULIA)
                .short("j")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("0,-0.85")
                .validator(|s| validate_point(s, "The Julia constant"))
                .help("The constant of the Julia set"),
        )
        .arg(
            Arg::with_name(THREADS)
                .required(false)
                .long(THREADS)
                .short("t")
                .takes_value(true)
                .default_value("1")
                .validator(move |s| validate_count(s, "Thread count", 1, max_threads))
                .help("Number of threads to use in solver"),
        )
        .arg(
            Arg::with_name(ITERATIONS)
                .required(false)
                .long(ITERATIONS)
                .short("i")
                .takes_value(true)
                .default_value("100")
                .validator(|s| validate_count(s, "Iteration count", 2, 100_000))
                .help("Iteration budget per point"),
        )
        .arg(
            Arg::with_name(VERBOSE)
                .long(VERBOSE)
                .short("v")
                .help("Log progress for every row"),
        )
        .get_matches()
}

fn draw<E: EscapeFunction + Sync>(
    matches: &ArgMatches,
    escape: E,
) -> Result<(), RenderError> {
    let (width, height): (u16, u16) = parse_pair(matches.value_of(SIZE).unwrap(), 'x')
        .expect("Error parsing image dimensions");
    let leftlower = parse_complex(matches.value_of(LEFTLOWER).unwrap())
        .expect("Error parsing left lower point");
    let rightupper = parse_complex(matches.value_of(RIGHTUPPER).unwrap())
        .expect("Error parsing right upper point");
    let threads =
        usize::from_str(matches.value_of(THREADS).unwrap()).expect("Could not parse thread count.");

    let renderer = FractalRenderer::with_plane(
        usize::from(width),
        usize::from(height),
        leftlower,
        rightupper,
        escape,
    )?;
    let buffer = if threads > 1 {
        renderer.render_threaded(threads)?
    } else {
        renderer.render()?
    };
    buffer.save(matches.value_of(OUTPUT).unwrap())
}

fn main() {
    let matches = args();

    let level = if matches.is_present(VERBOSE) { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let limit = usize::from_str(matches.value_of(ITERATIONS).unwrap())
        .expect("Could not parse iteration count.");

    let result = match matches.value_of(FRACTAL).unwrap() {
        "julia" => {
            let c = parse_complex(matches.value_of(JULIA).unwrap())
                .expect("Error parsing Julia constant");
            draw(&matches, Julia { c, limit })
        }
        _ => draw(&matches, Mandelbrot { limit }),
    };

    if let Err(e) = result {
        eprintln!("Render failure: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs_split_on_the_separator() {
        assert_eq!(parse_pair::<u16>("640x480", 'x'), Some((640, 480)));
        assert_eq!(parse_pair::<u16>("640", 'x'), None);
        assert_eq!(parse_pair::<u16>("640xbig", 'x'), None);
    }

    #[test]
    fn points_may_be_negative() {
        assert_eq!(parse_complex("-0.5,-1"), Some(Complex::new(-0.5, -1.0)));
        assert_eq!(parse_complex("0;1"), None);
    }

    #[test]
    fn validators_name_what_went_wrong() {
        assert!(validate_size("big".to_string()).unwrap_err().contains("WIDTHxHEIGHT"));
        assert!(validate_point("1".to_string(), "The Julia constant")
            .unwrap_err()
            .starts_with("The Julia constant"));
        assert!(validate_count("0".to_string(), "Thread count", 1, 4)
            .unwrap_err()
            .contains("between 1 and 4"));
        assert!(validate_count("x".to_string(), "Thread count", 1, 4).is_err());
        assert!(validate_count("3".to_string(), "Thread count", 1, 4).is_ok());
    }
}
