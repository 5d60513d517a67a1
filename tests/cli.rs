// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn renders_a_small_mandelbrot() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("mandel.png");
    Command::cargo_bin("escapetime")
        .unwrap()
        .args(&["-o", out.to_str().unwrap(), "-s", "40x30"])
        .assert()
        .success();
    let img = image::open(&out).unwrap().to_rgb();
    assert_eq!(img.dimensions(), (40, 30));
}

#[test]
fn renders_a_julia_set() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("julia.png");
    Command::cargo_bin("escapetime")
        .unwrap()
        .args(&[
            "-o",
            out.to_str().unwrap(),
            "-s",
            "32x32",
            "-f",
            "julia",
            "-j",
            "-0.4,0.6",
            "-l",
            "-1,-1",
            "-r",
            "1,1",
            "-t",
            "1",
        ])
        .assert()
        .success();
    assert!(out.exists());
}

#[test]
fn an_empty_image_is_a_configuration_error() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("empty.png");
    Command::cargo_bin("escapetime")
        .unwrap()
        .args(&["-o", out.to_str().unwrap(), "-s", "0x100"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
    assert!(!out.exists());
}

#[test]
fn a_flat_rectangle_is_a_configuration_error() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("flat.png");
    Command::cargo_bin("escapetime")
        .unwrap()
        .args(&["-o", out.to_str().unwrap(), "-s", "10x10", "-l", "0,0", "-r", "0,1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Render failure"));
}

#[test]
fn bad_sizes_are_rejected_by_the_parser() {
    Command::cargo_bin("escapetime")
        .unwrap()
        .args(&["-o", "never.png", "-s", "big"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("WIDTHxHEIGHT"));
}

#[test]
fn unwritable_output_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("no").join("such").join("dir.png");
    Command::cargo_bin("escapetime")
        .unwrap()
        .args(&["-o", out.to_str().unwrap(), "-s", "8x8"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Render failure"));
}
