// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Contains the PlaneMapper struct, which describes a relationship
//! between a rectangle on the integral plane with an origin at 0,0
//! in the upper-left, and a rectangle on the complex plane described
//! by its left-lower and right-upper corners.
use num::Complex;

use crate::errors::RenderError;

/// Describes the width and height of an integral plane that is
/// assumed to start at 0,0.  All values are non-negative integers.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct IntegralPlane(pub usize, pub usize);

/// Describes the left-lower corner and right-upper corner of the
/// complex plane, treating the real part of each value as the
/// x-component and the imaginary part of each value as the
/// y-component.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ComplexPlane(pub Complex<f64>, pub Complex<f64>);

/// Describes the column, row of a pixel in the integral plane.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Pixel(pub usize, pub usize);

/// Contains the definitions of two planes: an integral cartesian
/// plane, and a complex cartesian plane.  Maps pixels from the first
/// onto points of the second.
///
/// Row 0 of the integral plane is the *top* of the image, so it maps
/// to the largest imaginary value of the complex plane.  The corners
/// are taken as given: the real part of `leftlower` is the left edge
/// and the imaginary part of `rightupper` is the top edge.  Handing
/// the corners over in any other order produces a mirrored image.
#[derive(Debug)]
pub struct PlaneMapper {
    /// The size of the integral cartesian plane.
    pub integral_plane: IntegralPlane,
    /// The two corners defining the complex cartesian plane,
    /// left-lower and right-upper.
    pub complex_plane: ComplexPlane,
    // Width and height of a single pixel, measured on the complex plane.
    steps: (f64, f64),
}

impl PlaneMapper {
    /// Constructor.  Takes the width and height of the image and two
    /// points describing the complex plane.  Fails if the image has
    /// no area or if the rectangle collapses to a line or a point.
    pub fn new(
        width: usize,
        height: usize,
        leftlower: Complex<f64>,
        rightupper: Complex<f64>,
    ) -> Result<PlaneMapper, RenderError> {
        if width == 0 || height == 0 {
            return Err(RenderError::Configuration(format!(
                "The image must have a positive size, got {}x{}",
                width, height
            )));
        }

        if width > u32::MAX as usize
            || height > u32::MAX as usize
            || width.checked_mul(height).is_none()
        {
            return Err(RenderError::Configuration(format!(
                "The image size {}x{} is too large to encode",
                width, height
            )));
        }

        if !(leftlower.re.is_finite()
            && leftlower.im.is_finite()
            && rightupper.re.is_finite()
            && rightupper.im.is_finite())
        {
            return Err(RenderError::Configuration(
                "The corners of the complex plane must be finite".to_string(),
            ));
        }

        let steps = (
            (leftlower.re - rightupper.re).abs() / (width as f64),
            (leftlower.im - rightupper.im).abs() / (height as f64),
        );

        if steps.0 == 0.0 || steps.1 == 0.0 {
            return Err(RenderError::Configuration(
                "The complex plane has no width or no height".to_string(),
            ));
        }

        Ok(PlaneMapper {
            integral_plane: IntegralPlane(width, height),
            complex_plane: ComplexPlane(leftlower, rightupper),
            steps,
        })
    }

    /// The width of the integral plane.
    pub fn width(&self) -> usize {
        self.integral_plane.0
    }

    /// The height of the integral plane.
    pub fn height(&self) -> usize {
        self.integral_plane.1
    }

    /// The total number of points in the integral grid.
    pub fn len(&self) -> usize {
        self.integral_plane.0 * self.integral_plane.1
    }

    /// Describes whether the integral plane has no area.
    pub fn is_empty(&self) -> bool {
        self.integral_plane.0 == 0 || self.integral_plane.1 == 0
    }

    /// The distance between neighbouring pixels on the complex plane,
    /// horizontally and vertically.
    pub fn steps(&self) -> (f64, f64) {
        self.steps
    }

    /// Given a pixel on the integral cartesian plane, map it onto the
    /// complex cartesian plane.  Columns grow to the right, rows grow
    /// downward.
    pub fn pixel_to_point(&self, pixel: &Pixel) -> Complex<f64> {
        Complex::new(
            self.complex_plane.0.re + self.steps.0 * (pixel.0 as f64),
            self.complex_plane.1.im - self.steps.1 * (pixel.1 as f64),
        )
    }
}
