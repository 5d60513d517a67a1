// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The finished raster, and its hand-off to the image encoder.

use std::path::Path;

use image::RgbImage;
use log::info;

use crate::colors::{PercentRgb, BACKGROUND};
use crate::errors::RenderError;
use crate::planes::Pixel;

/// A width x height grid of colors, stored row by row.  Every cell
/// starts out as `BACKGROUND` (black).
#[derive(Clone, Debug, PartialEq)]
pub struct ColorBuffer {
    width: usize,
    height: usize,
    pixels: Vec<PercentRgb>,
}

impl ColorBuffer {
    /// A buffer of the given size, filled with the background color.
    pub fn new(width: usize, height: usize) -> Self {
        ColorBuffer {
            width,
            height,
            pixels: vec![BACKGROUND; width * height],
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    fn offset(&self, pixel: &Pixel) -> Option<usize> {
        if pixel.0 < self.width && pixel.1 < self.height {
            Some(pixel.1 * self.width + pixel.0)
        } else {
            None
        }
    }

    /// The color at `pixel`, or `None` if it lies outside the buffer.
    pub fn get(&self, pixel: &Pixel) -> Option<PercentRgb> {
        self.offset(pixel).map(|o| self.pixels[o])
    }

    /// Paint a list of pixels with one color.  Pixels outside the
    /// buffer are ignored.
    pub fn paint(&mut self, pixels: &[Pixel], color: PercentRgb) {
        for pixel in pixels {
            if let Some(o) = self.offset(pixel) {
                self.pixels[o] = color;
            }
        }
    }

    /// Every color in the buffer, row by row.
    pub fn as_slice(&self) -> &[PercentRgb] {
        &self.pixels
    }

    /// Convert to an 8-bit RGB image.
    pub fn to_image(&self) -> RgbImage {
        RgbImage::from_fn(self.width as u32, self.height as u32, |x, y| {
            self.pixels[(y as usize) * self.width + (x as usize)].to_rgb8()
        })
    }

    /// Encode the buffer to `path`; the format follows the extension.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), RenderError> {
        let path = path.as_ref();
        self.to_image().save(path)?;
        info!("Wrote {}x{} image to {}", self.width, self.height, path.display());
        Ok(())
    }
}
