// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Pixels grouped by the iteration count their points escaped at.

use std::collections::btree_map::{self, BTreeMap};

use crate::planes::Pixel;

/// Maps an iteration count to every pixel that produced it.  Within a
/// bucket, pixels are kept in the order they were added, which for a
/// render is raster order: row by row, left to right.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IterationBuckets {
    buckets: BTreeMap<usize, Vec<Pixel>>,
    pixels: usize,
}

impl IterationBuckets {
    /// An empty collection.
    pub fn new() -> Self {
        IterationBuckets::default()
    }

    /// File `pixel` under `iterations`, starting a new bucket if this
    /// count hasn't been seen before.
    pub fn insert(&mut self, iterations: usize, pixel: Pixel) {
        self.buckets
            .entry(iterations)
            .or_insert_with(Vec::new)
            .push(pixel);
        self.pixels += 1;
    }

    /// Append every bucket of `other` to the matching bucket here.
    /// Merging the partial results of several workers in worker order
    /// preserves raster order inside each bucket, as long as each
    /// worker covered a band of rows below the previous one.
    pub fn merge(&mut self, other: IterationBuckets) {
        for (iterations, pixels) in other.buckets {
            self.buckets
                .entry(iterations)
                .or_insert_with(Vec::new)
                .extend(pixels);
        }
        self.pixels += other.pixels;
    }

    /// The number of distinct iteration counts seen.
    pub fn distinct(&self) -> usize {
        self.buckets.len()
    }

    /// The number of pixels filed, across all buckets.
    pub fn pixel_count(&self) -> usize {
        self.pixels
    }

    /// True when nothing has been filed.
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// The pixels that escaped at `iterations`, if any did.
    pub fn get(&self, iterations: usize) -> Option<&[Pixel]> {
        self.buckets.get(&iterations).map(|v| v.as_slice())
    }

    /// The iteration counts seen, smallest first.
    pub fn keys(&self) -> impl Iterator<Item = usize> + '_ {
        self.buckets.keys().cloned()
    }

    /// Every bucket, smallest iteration count first.
    pub fn iter(&self) -> btree_map::Iter<'_, usize, Vec<Pixel>> {
        self.buckets.iter()
    }
}

impl<'a> IntoIterator for &'a IterationBuckets {
    type Item = (&'a usize, &'a Vec<Pixel>);
    type IntoIter = btree_map::Iter<'a, usize, Vec<Pixel>>;

    fn into_iter(self) -> Self::IntoIter {
        self.buckets.iter()
    }
}
