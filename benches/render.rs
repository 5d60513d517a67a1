// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

#[macro_use]
extern crate criterion;

use criterion::Criterion;
use escapetime::{FractalRenderer, Mandelbrot};
use num::Complex;

fn renderer() -> FractalRenderer<Mandelbrot> {
    FractalRenderer::with_plane(
        200,
        200,
        Complex::new(-2.0, -2.0),
        Complex::new(2.0, 2.0),
        Mandelbrot::default(),
    )
    .unwrap()
}

fn single(c: &mut Criterion) {
    let r = renderer();
    c.bench_function("mandelbrot 200x200", move |b| b.iter(|| r.render().unwrap()));
}

fn threaded(c: &mut Criterion) {
    let r = renderer();
    let threads = num_cpus::get();
    c.bench_function("mandelbrot 200x200 threaded", move |b| {
        b.iter(|| r.render_threaded(threads).unwrap())
    });
}

criterion_group!(benches, single, threaded);
criterion_main!(benches);
