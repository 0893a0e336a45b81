// Copyright 2024 Martin Pool

use std::f64::consts::PI;

use anyhow::{ensure, Context};

use crate::Result;

/// Area of a circle with the given radius.
pub fn circle_area(radius: f64) -> f64 {
    PI * radius * radius
}

/// Accept `radius` only if it's finite and its area is too.
///
/// Radii beyond about 7.5e153 square to infinity, which can't be printed
/// consistently as text and JSON.
pub fn check_radius(radius: f64) -> Result<f64> {
    ensure!(radius.is_finite(), "radius {radius} is not a finite number");
    ensure!(
        circle_area(radius).is_finite(),
        "radius {radius} is too large: its area overflows"
    );
    Ok(radius)
}

/// Parse a radius from the command line.
pub fn parse_radius(s: &str) -> Result<f64> {
    let radius: f64 = s.parse().with_context(|| format!("invalid radius {s:?}"))?;
    check_radius(radius)
}
