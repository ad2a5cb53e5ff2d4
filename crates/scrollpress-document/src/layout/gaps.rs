// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Gap detection -- scans the image row by row for blank bands where a page
// break can fall without cutting through content.

use image::DynamicImage;
use tracing::debug;

/// Luminance above which a pixel counts as background.
const BACKGROUND_LUMA: u8 = 250;

/// Find the midpoints of blank horizontal bands at least `min_gap_size` rows
/// tall.
///
/// A row is blank when the fraction of its pixels with luminance at or below
/// 250 does not exceed `blank_ratio`; at `blank_ratio = 0.0` every pixel must
/// be brighter than 250. Returned y-coordinates are in increasing order.
///
/// A blank run only closes when a content row follows it, so a run that
/// touches the bottom edge of the image is never emitted -- the slice planner
/// reaches the true image end on its own and needs no cut candidate there.
pub fn find_gaps(image: &DynamicImage, min_gap_size: u32, blank_ratio: f64) -> Vec<u32> {
    let gray = image.to_luma8();
    let (width, height) = gray.dimensions();
    let max_content_pixels = blank_ratio * width as f64;

    let mut gaps = Vec::new();
    let mut run_start: Option<u32> = None;

    for y in 0..height {
        let content_pixels = (0..width)
            .filter(|&x| gray.get_pixel(x, y).0[0] <= BACKGROUND_LUMA)
            .count();
        let is_blank = content_pixels as f64 <= max_content_pixels;

        match (is_blank, run_start) {
            (true, None) => run_start = Some(y),
            (false, Some(start)) => {
                let run_length = y - start;
                if run_length >= min_gap_size {
                    gaps.push(start + run_length / 2);
                }
                run_start = None;
            }
            _ => {}
        }
    }

    debug!(
        gap_count = gaps.len(),
        min_gap_size, blank_ratio, "Gap detection complete"
    );
    gaps
}
