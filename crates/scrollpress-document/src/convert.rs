// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Top-level conversion pipeline: open and trim the scrollshot, plan the
// layout, compose the pages, and render the PDF. Data flows strictly forward
// and every failure is terminal for the run.

use std::path::Path;

use image::DynamicImage;
use scrollpress_core::config::ConvertConfig;
use scrollpress_core::error::{Result, ScrollpressError};
use scrollpress_core::types::{PageRange, title_from_filename};
use tracing::{debug, info, instrument};

use crate::image::{detect_dpi, trim_whitespace};
use crate::layout::{PageGeometry, compose, find_gaps, optimal_columns, plan_slices};
use crate::ocr::OcrBackend;
use crate::pdf::PdfWriter;

/// What a completed conversion produced.
#[derive(Debug, Clone)]
pub struct ConversionSummary {
    /// Slices the image was cut into (before range filtering).
    pub slice_count: usize,
    /// Pages the full document would hold.
    pub total_pages: u32,
    /// Pages actually written after range filtering.
    pub written_pages: u32,
    /// Column count used (configured or automatically selected).
    pub columns: u32,
}

/// Convert one scrollshot image file into a paginated PDF at `output`.
#[instrument(skip(config, output), fields(input = %input.as_ref().display()))]
pub fn convert_image(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    config: &ConvertConfig,
) -> Result<ConversionSummary> {
    let input = input.as_ref();
    let output = output.as_ref();

    info!("Opening image {}", input.display());
    let source = image::open(input).map_err(|err| {
        ScrollpressError::ImageError(format!("failed to open {}: {}", input.display(), err))
    })?;

    info!("Trimming background border");
    let trimmed = trim_whitespace(&source);
    let dpi = detect_dpi(input);

    let geometry = plan_geometry(&trimmed, dpi, config)?;
    info!(
        columns = geometry.columns,
        scale = geometry.scale,
        "Layout geometry resolved"
    );

    info!("Finding content gaps for page breaks");
    let gaps = find_gaps(&trimmed, config.min_gap_size, config.blank_ratio);

    let slices = plan_slices(
        trimmed.height(),
        geometry.usable_height_px(),
        &gaps,
        config.no_split_content,
    )?;
    let total_pages = geometry.page_count(slices.len());
    info!(
        slices = slices.len(),
        pages = total_pages,
        "Image partitioned"
    );

    let range = PageRange::parse(config.page_range.as_deref().unwrap_or(""), total_pages)?;

    // OCR availability is settled here, before any page is drawn.
    let ocr_backend = if config.ocr {
        let backend = OcrBackend::probe(&config.ocr_language);
        if let Some(reason) = backend.unavailable_reason() {
            return Err(ScrollpressError::OcrUnavailable(reason.to_string()));
        }
        Some(backend)
    } else {
        None
    };

    let pages = compose(
        &slices,
        &geometry,
        &config.numbering,
        config.title.as_ref(),
        range,
    );
    let written_pages = pages.len() as u32;

    let doc_title = config
        .title
        .as_ref()
        .map(|t| t.text.clone())
        .unwrap_or_else(|| title_from_filename(&input.to_string_lossy()));

    info!("Creating PDF {}", output.display());
    let writer = PdfWriter::new(&geometry, doc_title);
    writer.render_to_file(&trimmed, &pages, ocr_backend.as_ref(), output)?;

    Ok(ConversionSummary {
        slice_count: slices.len(),
        total_pages,
        written_pages,
        columns: geometry.columns,
    })
}

/// Resolve the document geometry, selecting a column count automatically
/// when the configuration leaves it open.
fn plan_geometry(
    trimmed: &DynamicImage,
    dpi: f64,
    config: &ConvertConfig,
) -> Result<PageGeometry> {
    let usable_width = config.page_width - 2.0 * config.margin;
    if usable_width <= 0.0 {
        return Err(ScrollpressError::MarginsTooLarge {
            margin_pt: config.margin,
            page_width_pt: config.page_width,
            page_height_pt: config.page_height,
        });
    }

    let columns = match config.columns {
        Some(columns) => columns.max(1),
        None => {
            let columns = optimal_columns(trimmed.width(), usable_width, dpi);
            info!(columns, "Automatically selected column count");
            columns
        }
    };
    debug!(columns, usable_width, dpi, "Deriving page geometry");

    PageGeometry::new(
        config.page_width,
        config.page_height,
        config.margin,
        columns,
        config.column_gap,
        trimmed.width(),
    )
}
