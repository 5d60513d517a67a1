// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The error type shared by every stage of a render, from reading
//! the plane description to writing the finished image.

use failure::Fail;

/// Anything that can stop a render.  Configuration problems are
/// reported before a single pixel is visited; computation problems
/// abort a render partway through and leave no usable buffer.
#[derive(Debug, Fail)]
pub enum RenderError {
    /// The resolution, the complex rectangle, or the worker count
    /// cannot describe a render.
    #[fail(display = "Configuration error: {}", _0)]
    Configuration(String),

    /// The escape function could not evaluate a point.
    #[fail(display = "Computation error: {}", _0)]
    Computation(String),

    /// The output file could not be written.
    #[fail(display = "I/O error: {}", _0)]
    Io(#[cause] std::io::Error),

    /// The encoder refused the buffer.
    #[fail(display = "Image error: {}", _0)]
    Image(String),

    /// Someone raised the cancellation flag while the render was running.
    #[fail(display = "Render cancelled")]
    Cancelled,
}

impl From<std::io::Error> for RenderError {
    fn from(err: std::io::Error) -> Self {
        RenderError::Io(err)
    }
}

impl From<image::ImageError> for RenderError {
    fn from(err: image::ImageError) -> Self {
        match err {
            image::ImageError::IoError(e) => RenderError::Io(e),
            other => RenderError::Image(other.to_string()),
        }
    }
}
