// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Bucket coloring.  Colors are kept as percentages of full
//! intensity, and only become bytes when handed to the encoder.

use image::Rgb;
use num::clamp;

const RED_SCALE: f64 = 50.0;
const BLUE_SCALE: f64 = 100.0;

/// An RGB color, each channel a percentage from 0 to 100.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct PercentRgb {
    /// Red, 0-100.
    pub red: u8,
    /// Green, 0-100.
    pub green: u8,
    /// Blue, 0-100.
    pub blue: u8,
}

/// The color every pixel holds before any bucket is painted.
pub const BACKGROUND: PercentRgb = PercentRgb {
    red: 0,
    green: 0,
    blue: 0,
};

fn scale_channel(ratio: f64, scale: f64) -> u8 {
    clamp((ratio * scale).floor(), 0.0, 100.0) as u8
}

fn to_byte(percent: u8) -> u8 {
    ((f64::from(percent) * 255.0) / 100.0).round() as u8
}

impl PercentRgb {
    /// The color of the bucket for `iterations` in an image that saw
    /// `distinct` different iteration counts.  Depends on nothing
    /// else, so buckets can be painted in any order.
    ///
    /// Iteration counts larger than `distinct` saturate at 100%.
    pub fn for_bucket(iterations: usize, distinct: usize) -> PercentRgb {
        if distinct == 0 {
            return BACKGROUND;
        }
        let ratio = iterations as f64 / distinct as f64;
        PercentRgb {
            red: scale_channel(ratio, RED_SCALE),
            green: 0,
            blue: scale_channel(ratio, BLUE_SCALE),
        }
    }

    /// Rescale to the 0-255 bytes the image encoder works in.
    pub fn to_rgb8(self) -> Rgb<u8> {
        Rgb([to_byte(self.red), to_byte(self.green), to_byte(self.blue)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_iterations_is_black() {
        assert_eq!(PercentRgb::for_bucket(0, 1), BACKGROUND);
        assert_eq!(PercentRgb::for_bucket(0, 40), BACKGROUND);
    }

    #[test]
    fn half_way_is_quarter_red_half_blue() {
        assert_eq!(
            PercentRgb::for_bucket(1, 2),
            PercentRgb {
                red: 25,
                green: 0,
                blue: 50
            }
        );
    }

    #[test]
    fn channels_are_floored() {
        // 1/3 * 50 = 16.67, 1/3 * 100 = 33.33
        let c = PercentRgb::for_bucket(1, 3);
        assert_eq!((c.red, c.green, c.blue), (16, 0, 33));
    }

    #[test]
    fn counts_beyond_the_bucket_total_saturate() {
        let c = PercentRgb::for_bucket(99, 20);
        assert_eq!((c.red, c.green, c.blue), (100, 0, 100));
        let c = PercentRgb::for_bucket(30, 20);
        assert_eq!((c.red, c.green, c.blue), (75, 0, 100));
    }

    #[test]
    fn bytes_rescale_linearly() {
        assert_eq!(BACKGROUND.to_rgb8(), Rgb([0, 0, 0]));
        let c = PercentRgb {
            red: 25,
            green: 0,
            blue: 50,
        };
        assert_eq!(c.to_rgb8(), Rgb([64, 0, 128]));
        let c = PercentRgb {
            red: 100,
            green: 100,
            blue: 100,
        };
        assert_eq!(c.to_rgb8(), Rgb([255, 255, 255]));
    }
}
