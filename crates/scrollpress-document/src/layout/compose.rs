// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Page composition -- maps the ordered slices onto pages and columns and
// resolves every annotation to a concrete draw position. The renderer
// executes these instructions without further layout decisions.

use scrollpress_core::config::{NumberingSpec, TitleSpec};
use scrollpress_core::error::{Result, ScrollpressError};
use scrollpress_core::types::{PageRange, TitleAlignment};
use tracing::debug;

use super::Slice;
use crate::pdf::metrics::text_width;

/// Page and column geometry shared by every page of one document.
///
/// The scale factor (points per source pixel) is derived once from the
/// column width and applied uniformly to every slice in every column.
#[derive(Debug, Clone)]
pub struct PageGeometry {
    pub page_width: f64,
    pub page_height: f64,
    pub margin: f64,
    pub columns: u32,
    pub column_width: f64,
    pub column_gap: f64,
    /// Points per source pixel: `column_width / image_px_width`.
    pub scale: f64,
}

impl PageGeometry {
    /// Derive the document geometry from page dimensions and the source
    /// image's pixel width.
    ///
    /// Fails when the margins (plus column gaps) consume the whole page, or
    /// when the resulting scale collapses the usable slice height below one
    /// source pixel.
    pub fn new(
        page_width: f64,
        page_height: f64,
        margin: f64,
        columns: u32,
        column_gap: f64,
        image_px_width: u32,
    ) -> Result<Self> {
        let usable_width = page_width - 2.0 * margin;
        let usable_height = page_height - 2.0 * margin;
        let column_width = (usable_width - column_gap * (columns - 1) as f64) / columns as f64;

        if column_width <= 0.0 || usable_height <= 0.0 {
            return Err(ScrollpressError::MarginsTooLarge {
                margin_pt: margin,
                page_width_pt: page_width,
                page_height_pt: page_height,
            });
        }

        let scale = column_width / image_px_width as f64;
        let geometry = Self {
            page_width,
            page_height,
            margin,
            columns,
            column_width,
            column_gap,
            scale,
        };

        if geometry.usable_height_px() == 0 {
            return Err(ScrollpressError::MarginsTooLarge {
                margin_pt: margin,
                page_width_pt: page_width,
                page_height_pt: page_height,
            });
        }
        Ok(geometry)
    }

    /// Usable page height in points.
    pub fn usable_height(&self) -> f64 {
        self.page_height - 2.0 * self.margin
    }

    /// Usable page width in points.
    pub fn usable_width(&self) -> f64 {
        self.page_width - 2.0 * self.margin
    }

    /// Per-page usable height converted to source pixels -- the slice
    /// planner's page height.
    pub fn usable_height_px(&self) -> u32 {
        (self.usable_height() / self.scale) as u32
    }

    /// Pages needed for a slice count at this column count (ceiling).
    pub fn page_count(&self, slice_count: usize) -> u32 {
        slice_count.div_ceil(self.columns as usize) as u32
    }
}

/// One slice's on-page rectangle, in points with a bottom-left origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedSlice {
    pub slice: Slice,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// A fully resolved text draw: position, builtin font name, and size.
#[derive(Debug, Clone, PartialEq)]
pub struct TextDraw {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font: String,
    pub size: f64,
}

/// Draw instructions for one output page.
#[derive(Debug, Clone)]
pub struct PagePlan {
    pub slices: Vec<PlacedSlice>,
    pub texts: Vec<TextDraw>,
}

/// Assign slices to pages and columns and resolve all annotations.
///
/// Fill is column-major: within a page, columns 0..C-1 left to right, then
/// the next page. `range` restricts output to a 1-based sub-range of the
/// slice-derived page count; the title lands on the first composed page and
/// page numbers restart at 1 for the composed output.
pub fn compose(
    slices: &[Slice],
    geometry: &PageGeometry,
    numbering: &NumberingSpec,
    title: Option<&TitleSpec>,
    range: PageRange,
) -> Vec<PagePlan> {
    let columns = geometry.columns as usize;
    let start_slice = (range.start as usize - 1) * columns;
    let end_slice = (range.end as usize * columns).min(slices.len());
    let retained = &slices[start_slice.min(slices.len())..end_slice];

    debug!(
        total_slices = slices.len(),
        retained = retained.len(),
        columns,
        "Composing pages"
    );

    let mut pages = Vec::new();
    for (page_idx, chunk) in retained.chunks(columns).enumerate() {
        let page_number = page_idx as u32 + 1;
        let mut placed = Vec::with_capacity(chunk.len());

        for (col, &slice) in chunk.iter().enumerate() {
            let height = slice.height() as f64 * geometry.scale;
            placed.push(PlacedSlice {
                slice,
                x: geometry.margin
                    + col as f64 * (geometry.column_width + geometry.column_gap),
                // Flush to the bottom margin: content grows upward from it.
                y: geometry.page_height - height - geometry.margin,
                width: geometry.column_width,
                height,
            });
        }

        let mut texts = Vec::new();
        if page_idx == 0 {
            if let Some(title) = title {
                texts.push(title_draw(title, geometry));
            }
        }
        if numbering.enabled && !(numbering.skip_first && page_number == 1) {
            texts.push(number_draw(page_number, numbering, geometry));
        }

        pages.push(PagePlan {
            slices: placed,
            texts,
        });
    }
    pages
}

/// Title placement: just under the top margin, aligned per the title
/// settings.
fn title_draw(title: &TitleSpec, geometry: &PageGeometry) -> TextDraw {
    let width = text_width(&title.text, &title.font, title.size);
    let x = match title.position {
        TitleAlignment::Left => geometry.margin,
        TitleAlignment::Right => geometry.page_width - geometry.margin - width,
        TitleAlignment::Center => (geometry.page_width - width) / 2.0,
    };
    TextDraw {
        text: title.text.clone(),
        x,
        y: geometry.page_height - geometry.margin - title.size,
        font: title.font.clone(),
        size: title.size,
    }
}

/// Page-number placement: half a font size inside the chosen vertical
/// margin, flush to the chosen horizontal margin.
fn number_draw(page_number: u32, numbering: &NumberingSpec, geometry: &PageGeometry) -> TextDraw {
    let text = page_number.to_string();
    let y = if numbering.position.is_bottom() {
        geometry.margin + numbering.size / 2.0
    } else {
        geometry.page_height - geometry.margin - numbering.size / 2.0
    };
    let x = if numbering.position.is_left() {
        geometry.margin
    } else {
        geometry.page_width
            - geometry.margin
            - text_width(&text, &numbering.font, numbering.size)
    };
    TextDraw {
        text,
        x,
        y,
        font: numbering.font.clone(),
        size: numbering.size,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrollpress_core::types::CornerPosition;

    fn geometry(columns: u32) -> PageGeometry {
        // 595x842pt page, 20pt margin, 500px-wide image.
        PageGeometry::new(595.0, 842.0, 20.0, columns, 20.0, 500).unwrap()
    }

    fn slices(pairs: &[(u32, u32)]) -> Vec<Slice> {
        pairs.iter().map(|&(a, b)| Slice::new(a, b)).collect()
    }

    fn full_range(total: u32) -> PageRange {
        PageRange {
            start: 1,
            end: total,
        }
    }

    #[test]
    fn geometry_rejects_oversized_margins() {
        assert!(PageGeometry::new(595.0, 842.0, 300.0, 1, 20.0, 500).is_err());
        assert!(PageGeometry::new(595.0, 842.0, 450.0, 1, 20.0, 500).is_err());
    }

    #[test]
    fn scale_is_column_width_over_image_width() {
        let g = geometry(1);
        assert!((g.column_width - 555.0).abs() < 1e-9);
        assert!((g.scale - 555.0 / 500.0).abs() < 1e-9);
    }

    #[test]
    fn column_major_fill_and_offsets() {
        let g = geometry(2);
        let slices = slices(&[(0, 100), (100, 200), (200, 300)]);
        let pages = compose(&slices, &g, &NumberingSpec::default(), None, full_range(2));

        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].slices.len(), 2);
        assert_eq!(pages[1].slices.len(), 1);

        // Column 0 at the margin, column 1 a column width plus gap further.
        let first = &pages[0].slices[0];
        let second = &pages[0].slices[1];
        assert!((first.x - 20.0).abs() < 1e-9);
        assert!((second.x - (20.0 + g.column_width + 20.0)).abs() < 1e-9);
        assert_eq!(second.slice.start_y, 100);
    }

    #[test]
    fn slices_sit_flush_to_the_bottom_margin() {
        let g = geometry(1);
        let slices = slices(&[(0, 100), (100, 350)]);
        let pages = compose(&slices, &g, &NumberingSpec::default(), None, full_range(2));

        for page in &pages {
            for placed in &page.slices {
                let expected_h = placed.slice.height() as f64 * g.scale;
                assert!((placed.height - expected_h).abs() < 1e-9);
                assert!((placed.y - (g.page_height - expected_h - g.margin)).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn title_only_on_first_page() {
        let g = geometry(1);
        let slices = slices(&[(0, 100), (100, 200)]);
        let title = TitleSpec::new("Chat Log");
        let numbering = NumberingSpec {
            enabled: false,
            ..NumberingSpec::default()
        };
        let pages = compose(&slices, &g, &numbering, Some(&title), full_range(2));

        assert_eq!(pages[0].texts.len(), 1);
        assert_eq!(pages[0].texts[0].text, "Chat Log");
        assert!((pages[0].texts[0].y - (842.0 - 20.0 - 14.0)).abs() < 1e-9);
        assert!(pages[1].texts.is_empty());
    }

    #[test]
    fn skip_first_suppresses_page_one_number() {
        let g = geometry(1);
        let slices = slices(&[(0, 100), (100, 200), (200, 300)]);
        let pages = compose(&slices, &g, &NumberingSpec::default(), None, full_range(3));

        assert!(pages[0].texts.is_empty());
        assert_eq!(pages[1].texts[0].text, "2");
        assert_eq!(pages[2].texts[0].text, "3");
        // Bottom-left default: half a font size above the margin.
        assert!((pages[1].texts[0].y - (20.0 + 5.0)).abs() < 1e-9);
        assert!((pages[1].texts[0].x - 20.0).abs() < 1e-9);
    }

    #[test]
    fn top_right_number_is_right_aligned() {
        let g = geometry(1);
        let slices = slices(&[(0, 100), (100, 200)]);
        let numbering = NumberingSpec {
            position: CornerPosition::TopRight,
            skip_first: false,
            ..NumberingSpec::default()
        };
        let pages = compose(&slices, &g, &numbering, None, full_range(2));

        let draw = &pages[0].texts[0];
        assert_eq!(draw.text, "1");
        assert!((draw.y - (842.0 - 20.0 - 5.0)).abs() < 1e-9);
        assert!(draw.x < 595.0 - 20.0);
        assert!(draw.x > 500.0);
    }

    #[test]
    fn page_range_filters_slices_and_restarts_numbering() {
        let g = geometry(2);
        let slices = slices(&[(0, 1), (1, 2), (2, 3), (3, 4), (4, 5), (5, 6)]);
        let numbering = NumberingSpec {
            skip_first: false,
            ..NumberingSpec::default()
        };
        let range = PageRange { start: 2, end: 3 };
        let pages = compose(&slices, &g, &numbering, None, range);

        assert_eq!(pages.len(), 2);
        // Page 2 of the full document holds slices 2 and 3.
        assert_eq!(pages[0].slices[0].slice.start_y, 2);
        assert_eq!(pages[0].slices[1].slice.start_y, 3);
        // Numbering restarts at 1 for the composed output.
        assert_eq!(pages[0].texts[0].text, "1");
        assert_eq!(pages[1].texts[0].text, "2");
    }

    #[test]
    fn page_count_is_ceiling_division() {
        let g = geometry(3);
        assert_eq!(g.page_count(0), 0);
        assert_eq!(g.page_count(3), 1);
        assert_eq!(g.page_count(4), 2);
        assert_eq!(g.page_count(9), 3);
    }
}
