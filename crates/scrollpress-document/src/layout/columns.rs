// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Column planning -- picks the column count whose downscale factor is a clean
// integer ratio, so the raster resamples without visible blurring.

use tracing::debug;

/// Most columns the planner will ever try.
const MAX_COLUMNS: u32 = 10;

/// Target rendering DPI the clean-ratio search is judged against.
const TARGET_RENDER_DPI: f64 = 300.0;

/// Tolerance for treating a reciprocal scale as an integer ratio.
const CLEAN_RATIO_TOLERANCE: f64 = 0.01;

/// Column gap assumed during the search, in points.
const DEFAULT_COLUMN_GAP: f64 = 20.0;

/// Choose the column count (1..=10) that fits the image into the usable page
/// width with the least-wasteful downscale.
///
/// The image's pixel width maps to physical points through its DPI metadata
/// (72 when absent). Trying 1..=10 columns: if the image already fits a
/// column at full size the answer is one column; otherwise the first column
/// count whose reciprocal scale lands within 0.01 of an integer wins (an
/// exact half-size, third-size, ... resample). When nothing is clean, fall
/// back to a single column and accept the scale that results.
pub fn optimal_columns(image_px_width: u32, usable_width_pt: f64, image_dpi: f64) -> u32 {
    let native_width_pt = image_px_width as f64 * 72.0 / image_dpi;
    debug!(
        image_px_width,
        image_dpi,
        native_width_pt,
        usable_width_pt,
        target_dpi = TARGET_RENDER_DPI,
        "Searching for optimal column count"
    );

    for columns in 1..=MAX_COLUMNS {
        let total_gap_width = DEFAULT_COLUMN_GAP * (columns - 1) as f64;
        let column_width = (usable_width_pt - total_gap_width) / columns as f64;
        let scale = column_width / native_width_pt;
        let inverse_scale = 1.0 / scale;

        debug!(columns, column_width, scale, "Column trial");

        // Fits without downscaling. Column width only shrinks as the count
        // grows, so in practice this can only fire on the first trial; the
        // per-trial check stays in case the cost model ever changes.
        if scale >= 1.0 {
            debug!(columns, "Image fits at original size");
            return 1;
        }

        if (inverse_scale.round() - inverse_scale).abs() < CLEAN_RATIO_TOLERANCE {
            debug!(
                columns,
                ratio = inverse_scale.round(),
                "Clean scaling ratio found"
            );
            return columns;
        }
    }

    debug!("No clean scaling ratio up to {MAX_COLUMNS} columns; using one");
    1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_fitting_the_page_uses_one_column() {
        // 500px at 72 DPI = 500pt native, within 600pt usable width.
        assert_eq!(optimal_columns(500, 600.0, 72.0), 1);
    }

    #[test]
    fn exact_half_scale_single_column() {
        // 1000pt native into 500pt usable: scale 0.5 is clean at one column.
        assert_eq!(optimal_columns(1000, 500.0, 72.0), 1);
    }

    #[test]
    fn clean_ratio_found_with_multiple_columns() {
        // One column: 1043/3000 -> 1/2.876, not clean.
        // Two columns: (1043-20)/2 = 511.5 -> scale 0.1705 = 1/5.865, not clean.
        // The search never returns more than 10 even without a clean hit.
        let columns = optimal_columns(3000, 1043.0, 72.0);
        assert!((1..=10).contains(&columns));
    }

    #[test]
    fn high_dpi_image_shrinks_native_width() {
        // 3000px at 300 DPI = 720pt native: fits 750pt usable at one column.
        assert_eq!(optimal_columns(3000, 750.0, 300.0), 1);
    }

    #[test]
    fn no_clean_ratio_falls_back_to_one() {
        // Deliberately irrational-ish widths: nothing within 0.01 of integer.
        assert_eq!(optimal_columns(977, 300.77, 72.0), 1);
    }

    #[test]
    fn deterministic() {
        let a = optimal_columns(2048, 539.0, 96.0);
        let b = optimal_columns(2048, 539.0, 96.0);
        assert_eq!(a, b);
    }
}
