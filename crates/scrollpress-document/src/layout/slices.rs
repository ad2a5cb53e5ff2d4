// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Slice planning -- partitions the image height into page-sized bands,
// preferring to cut at detected blank gaps.

use scrollpress_core::error::{Result, ScrollpressError};
use tracing::debug;

use super::Slice;

/// Partition `image_height` into contiguous, exhaustive slices of at most
/// `page_usable_height` pixels each.
///
/// Each cut prefers the last detected gap before the ideal page boundary.
/// Without `no_split_content`, a gap is only taken when it lies within a
/// quarter page of the ideal boundary; otherwise the cut falls at the ideal
/// boundary even through content. With `no_split_content`, the absence of any
/// gap in the window is a hard [`ScrollpressError::ContentUnsplittable`]
/// failure.
///
/// `gaps` must be in increasing y order, as produced by
/// [`find_gaps`](super::gaps::find_gaps).
pub fn plan_slices(
    image_height: u32,
    page_usable_height: u32,
    gaps: &[u32],
    no_split_content: bool,
) -> Result<Vec<Slice>> {
    let mut slices = Vec::new();
    let mut current_pos: u32 = 0;
    let gap_tolerance = page_usable_height / 4;

    while current_pos < image_height {
        let ideal_end = (current_pos + page_usable_height).min(image_height);

        // The final slice always reaches the true image end.
        if ideal_end == image_height {
            slices.push(Slice::new(current_pos, image_height));
            break;
        }

        // Last gap strictly inside (current_pos, ideal_end) -- the candidate
        // nearest the ideal boundary from below.
        let candidate = gaps
            .iter()
            .copied()
            .filter(|&gap| gap > current_pos && gap < ideal_end)
            .next_back();

        let chosen_end = if no_split_content {
            candidate.ok_or(ScrollpressError::ContentUnsplittable {
                start: current_pos,
                end: ideal_end,
            })?
        } else {
            match candidate {
                Some(gap) if ideal_end - gap <= gap_tolerance => gap,
                _ => ideal_end,
            }
        };

        slices.push(Slice::new(current_pos, chosen_end));
        current_pos = chosen_end;
    }

    debug!(
        slice_count = slices.len(),
        image_height, page_usable_height, "Slice planning complete"
    );
    Ok(slices)
}
