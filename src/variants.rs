// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The two classic escape-time fractals, ready to hand to a
//! `FractalRenderer`.  Both iterate z <- z^2 + c and report the first
//! iteration at which |z| exceeds 2.

use num::Complex;

use crate::errors::RenderError;
use crate::escape::EscapeFunction;

/// The iteration budget the reference renders use.
pub const DEFAULT_LIMIT: usize = 100;

fn check_finite(point: Complex<f64>) -> Result<(), RenderError> {
    if point.re.is_finite() && point.im.is_finite() {
        Ok(())
    } else {
        Err(RenderError::Computation(format!(
            "Cannot iterate a non-finite point {}",
            point
        )))
    }
}

/// Runs the orbit from `z` with constant `c`.  Counting starts at 1;
/// a point that survives `limit - 1` iterations is reported as 0.
#[inline]
fn iterate(mut z: Complex<f64>, c: Complex<f64>, limit: usize) -> usize {
    for n in 1..limit {
        z = z * z + c;
        if z.norm_sqr() > 4.0 {
            return n;
        }
    }
    0
}

/// The Mandelbrot set: every point is its own constant, and every
/// orbit starts at the origin.
#[derive(Copy, Clone, Debug)]
pub struct Mandelbrot {
    /// The iteration budget.
    pub limit: usize,
}

impl Default for Mandelbrot {
    fn default() -> Self {
        Mandelbrot {
            limit: DEFAULT_LIMIT,
        }
    }
}

impl EscapeFunction for Mandelbrot {
    fn escape(&self, point: Complex<f64>) -> Result<usize, RenderError> {
        check_finite(point)?;
        Ok(iterate(Complex::new(0.0, 0.0), point, self.limit))
    }
}

/// A Julia set: every orbit starts at its own point, and the constant
/// is shared by the whole image.
#[derive(Copy, Clone, Debug)]
pub struct Julia {
    /// The constant added on every iteration.
    pub c: Complex<f64>,
    /// The iteration budget.
    pub limit: usize,
}

impl Julia {
    /// A Julia set for `c` with the default iteration budget.
    pub fn new(c: Complex<f64>) -> Self {
        Julia {
            c,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl EscapeFunction for Julia {
    fn escape(&self, point: Complex<f64>) -> Result<usize, RenderError> {
        check_finite(point)?;
        Ok(iterate(point, self.c, self.limit))
    }
}
