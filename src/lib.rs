#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Escape-time fractal renderer
//!
//! An escape-time fractal is drawn by taking each pixel of an image,
//! finding the point of the complex plane it stands for, and
//! iterating some function on that point until it runs off towards
//! infinity.  The number of iterations that took is the pixel's
//! "escape time"; points that never leave within the budget report
//! zero.  The Mandelbrot set and the Julia sets are the famous
//! examples, but the renderer accepts any `EscapeFunction`.
//!
//! Rendering happens in two passes.  The first files every pixel into
//! a bucket keyed by its escape time.  The second gives each bucket a
//! color that depends on its key and on how many buckets there are,
//! which is why the second pass can't start until the first is done.

pub mod buckets;
pub mod buffer;
pub mod colors;
pub mod errors;
pub mod escape;
pub mod planes;
pub mod render;
pub mod variants;

pub use buckets::IterationBuckets;
pub use buffer::ColorBuffer;
pub use colors::PercentRgb;
pub use errors::RenderError;
pub use escape::EscapeFunction;
pub use planes::{Pixel, PlaneMapper};
pub use render::FractalRenderer;
pub use variants::{Julia, Mandelbrot};
