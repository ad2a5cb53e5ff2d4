// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Layout module -- the pagination engine: gap detection, column planning,
// slice planning, and page composition.

pub mod columns;
pub mod compose;
pub mod gaps;
pub mod slices;

use serde::{Deserialize, Serialize};

pub use columns::optimal_columns;
pub use compose::{PageGeometry, PagePlan, PlacedSlice, TextDraw, compose};
pub use gaps::find_gaps;
pub use slices::plan_slices;

/// A contiguous vertical band of the source image, in image pixel
/// coordinates. Half-open: covers rows `start_y..end_y`.
///
/// Slices produced for one image are contiguous and exhaustive: the first
/// starts at 0, the last ends at the image height, and each slice begins
/// where the previous one ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slice {
    pub start_y: u32,
    pub end_y: u32,
}

impl Slice {
    pub fn new(start_y: u32, end_y: u32) -> Self {
        debug_assert!(start_y < end_y, "slice must be non-empty");
        Self { start_y, end_y }
    }

    /// Height of the band in pixels.
    pub fn height(&self) -> u32 {
        self.end_y - self.start_y
    }
}
