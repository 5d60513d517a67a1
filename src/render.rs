// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The FractalRenderer walks every pixel of the integral plane, asks
//! the escape function how quickly the matching complex point leaves,
//! files the pixel under that count, and once every pixel has been
//! filed paints each bucket with a color derived from its count and
//! from how many distinct counts the image produced.
//!
//! Coloring has to wait for classification to finish: the color of a
//! bucket depends on the total number of buckets.

use std::ops::Range;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use crossbeam::thread::ScopedJoinHandle;
use log::{debug, info, warn};

use crate::buckets::IterationBuckets;
use crate::buffer::ColorBuffer;
use crate::colors::PercentRgb;
use crate::errors::RenderError;
use crate::escape::EscapeFunction;
use crate::planes::{Pixel, PlaneMapper};

/// A plane, an escape function, and optionally a flag that stops the
/// render between rows.  Once built, a renderer can be run any number
/// of times; each run owns its own buckets and buffer.
pub struct FractalRenderer<E> {
    plane: PlaneMapper,
    escape: E,
    cancel: Option<Arc<AtomicBool>>,
}

impl<E: EscapeFunction> FractalRenderer<E> {
    /// Pairs a plane with the function that will classify its points.
    pub fn new(plane: PlaneMapper, escape: E) -> Self {
        FractalRenderer {
            plane,
            escape,
            cancel: None,
        }
    }

    /// Requires the width and height of the image, the left-lower and
    /// right-upper corners of the complex plane, and the escape
    /// function.
    pub fn with_plane(
        width: usize,
        height: usize,
        leftlower: num::Complex<f64>,
        rightupper: num::Complex<f64>,
        escape: E,
    ) -> Result<Self, RenderError> {
        let plane = PlaneMapper::new(width, height, leftlower, rightupper)?;
        Ok(FractalRenderer::new(plane, escape))
    }

    /// Stop the render at the next row boundary once `flag` is set.
    pub fn with_cancel(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// The plane being rendered.
    pub fn plane(&self) -> &PlaneMapper {
        &self.plane
    }

    fn cancelled(&self) -> bool {
        match self.cancel {
            Some(ref flag) => flag.load(Ordering::Relaxed),
            None => false,
        }
    }

    /// Classify one band of rows, top to bottom, left to right.
    fn classify_rows(&self, rows: Range<usize>) -> Result<IterationBuckets, RenderError> {
        let mut buckets = IterationBuckets::new();
        let height = self.plane.height();
        for row in rows {
            if self.cancelled() {
                warn!("Render cancelled at row {}", row);
                return Err(RenderError::Cancelled);
            }
            debug!("{} of {}", row, height);
            for column in 0..self.plane.width() {
                let pixel = Pixel(column, row);
                let iterations = self.escape.escape(self.plane.pixel_to_point(&pixel))?;
                buckets.insert(iterations, pixel);
            }
        }
        Ok(buckets)
    }

    /// Classify every pixel of the plane on the calling thread.
    pub fn classify(&self) -> Result<IterationBuckets, RenderError> {
        self.classify_rows(0..self.plane.height())
    }

    /// Paint a fully classified plane.  Each bucket's color depends
    /// only on its own count and on the number of buckets, so the
    /// order buckets are visited in doesn't matter.
    pub fn paint(&self, buckets: &IterationBuckets) -> ColorBuffer {
        let mut buffer = ColorBuffer::new(self.plane.width(), self.plane.height());
        let distinct = buckets.distinct();
        for (&iterations, pixels) in buckets {
            buffer.paint(pixels, PercentRgb::for_bucket(iterations, distinct));
        }
        buffer
    }

    /// The main function for single-threaded renders.
    pub fn render(&self) -> Result<ColorBuffer, RenderError> {
        let start = Instant::now();
        info!(
            "Rendering {}x{} over {:?}",
            self.plane.width(),
            self.plane.height(),
            self.plane.complex_plane
        );
        let buckets = self.classify()?;
        let buffer = self.paint(&buckets);
        info!(
            "Rendered {} buckets in {:?}",
            buckets.distinct(),
            start.elapsed()
        );
        Ok(buffer)
    }
}

impl<E: EscapeFunction + Sync> FractalRenderer<E> {
    /// Classify the plane with `threads` workers.  Each worker takes a
    /// contiguous band of rows; the partial results are merged in band
    /// order, so the buckets come out exactly as `classify` would
    /// produce them.
    pub fn classify_threaded(&self, threads: usize) -> Result<IterationBuckets, RenderError> {
        if threads == 0 {
            return Err(RenderError::Configuration(
                "At least one worker thread is required".to_string(),
            ));
        }
        let height = self.plane.height();
        // Workers beyond one per row would only get empty bands.
        let threads = threads.min(height);
        let band = height / threads + (height % threads != 0) as usize;

        let partials = crossbeam::scope(|spawner| {
            let handles: Vec<ScopedJoinHandle<Result<IterationBuckets, RenderError>>> = (0
                ..threads)
                .map(|worker| {
                    let rows = (worker * band).min(height)..((worker + 1) * band).min(height);
                    debug!("Worker {} takes rows {:?}", worker, rows);
                    spawner.spawn(move |_| self.classify_rows(rows))
                })
                .collect();

            handles
                .into_iter()
                .map(|handle| {
                    handle.join().unwrap_or_else(|_| {
                        Err(RenderError::Computation(
                            "A render worker panicked".to_string(),
                        ))
                    })
                })
                .collect::<Vec<_>>()
        })
        .map_err(|_| RenderError::Computation("A render worker panicked".to_string()))?;

        let mut buckets = IterationBuckets::new();
        for partial in partials {
            buckets.merge(partial?);
        }
        Ok(buckets)
    }

    /// A multi-threaded version of the render function that takes a
    /// thread count.
    pub fn render_threaded(&self, threads: usize) -> Result<ColorBuffer, RenderError> {
        let start = Instant::now();
        info!(
            "Rendering {}x{} over {:?} with {} threads",
            self.plane.width(),
            self.plane.height(),
            self.plane.complex_plane,
            threads
        );
        let buckets = self.classify_threaded(threads)?;
        let buffer = self.paint(&buckets);
        info!(
            "Rendered {} buckets in {:?}",
            buckets.distinct(),
            start.elapsed()
        );
        Ok(buffer)
    }
}
