// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The seam between the renderer and the mathematics.  The renderer
//! neither knows nor cares which formula it is drawing; it only asks
//! "how long did this point take to escape?"

use num::Complex;

use crate::errors::RenderError;

/// Anything that can tell the renderer how many iterations a point on
/// the complex plane took to escape.  Zero means the point never
/// escaped within whatever budget the function gives itself; any
/// other value is the iteration at which it left.
///
/// Closures of the form `Fn(Complex<f64>) -> Result<usize, RenderError>`
/// implement this trait directly.
pub trait EscapeFunction {
    /// Count the iterations `point` needs to escape.
    fn escape(&self, point: Complex<f64>) -> Result<usize, RenderError>;
}

impl<F> EscapeFunction for F
where
    F: Fn(Complex<f64>) -> Result<usize, RenderError>,
{
    fn escape(&self, point: Complex<f64>) -> Result<usize, RenderError> {
        self(point)
    }
}
