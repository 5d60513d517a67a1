// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Renders the two reference pictures: the whole Mandelbrot set and
//! the Julia set for c = -0.85i, both 1000x1000.  Takes an optional
//! output directory.

use escapetime::{FractalRenderer, Julia, Mandelbrot, RenderError};
use num::Complex;
use std::path::PathBuf;

fn gallery(dir: PathBuf) -> Result<(), RenderError> {
    let threads = num_cpus::get();

    let mandelbrot = FractalRenderer::with_plane(
        1000,
        1000,
        Complex::new(-2.0, -2.0),
        Complex::new(2.0, 2.0),
        Mandelbrot::default(),
    )?;
    mandelbrot
        .render_threaded(threads)?
        .save(dir.join("mandelbrot.png"))?;

    let julia = FractalRenderer::with_plane(
        1000,
        1000,
        Complex::new(-1.0, -1.0),
        Complex::new(1.0, 1.0),
        Julia::new(Complex::new(0.0, -0.85)),
    )?;
    julia.render_threaded(threads)?.save(dir.join("julia.png"))
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));

    if let Err(e) = gallery(dir) {
        eprintln!("Render failure: {}", e);
        std::process::exit(1);
    }
}
