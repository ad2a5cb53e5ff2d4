// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unit conversions between millimetres, pixels, and PDF points.

use crate::error::{Result, ScrollpressError};

/// Points per millimetre (1 inch = 72 points = 25.4 mm).
pub const POINTS_PER_MM: f64 = 72.0 / 25.4;

/// DPI assumed for pixel-denominated margins (CSS reference pixel).
pub const PIXEL_DPI: f64 = 96.0;

/// Convert millimetres to points.
#[inline]
pub fn mm_to_points(mm: f64) -> f64 {
    mm * POINTS_PER_MM
}

/// Convert millimetres to whole pixels at the given DPI.
#[inline]
pub fn mm_to_pixels(mm: f64, dpi: u32) -> u32 {
    (mm * dpi as f64 / 25.4) as u32
}

/// Parse a margin string into points.
///
/// Accepts `"10mm"`, `"10px"`, or a bare number. Bare numbers and `px` values
/// are interpreted at 96 DPI; `mm` values convert physically.
pub fn parse_margin(margin: &str) -> Result<f64> {
    let bad = || ScrollpressError::InvalidMargin(margin.to_string());

    if let Some(value) = margin.strip_suffix("mm") {
        let mm: f64 = value.trim().parse().map_err(|_| bad())?;
        Ok(mm_to_points(mm))
    } else if let Some(value) = margin.strip_suffix("px") {
        let px: f64 = value.trim().parse().map_err(|_| bad())?;
        Ok(px * 72.0 / PIXEL_DPI)
    } else {
        let px: f64 = margin.trim().parse().map_err(|_| bad())?;
        Ok(px * 72.0 / PIXEL_DPI)
    }
}
