// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Scrollpress.

use thiserror::Error;

/// Top-level error type for all Scrollpress operations.
#[derive(Debug, Error)]
pub enum ScrollpressError {
    // -- Configuration errors --
    #[error("invalid margin {0:?}: margin must be specified in px, mm, or as a plain pixel count")]
    InvalidMargin(String),

    #[error("unknown page size {name:?}; valid sizes: {available}")]
    UnknownPageSize { name: String, available: String },

    #[error("invalid page range {0:?}: format is N, N-M, N-, or -M (1 to {1})")]
    InvalidPageRange(String, u32),

    #[error("margins of {margin_pt:.1}pt leave no usable area on a {page_width_pt:.0}x{page_height_pt:.0}pt page")]
    MarginsTooLarge {
        margin_pt: f64,
        page_width_pt: f64,
        page_height_pt: f64,
    },

    // -- Content layout impossibility --
    #[error(
        "no blank gap to break at between y={start} and y={end} while content splitting is \
         disallowed; drop --no-split-content, use a larger page size, lower --min-gap, or \
         raise --blank-ratio"
    )]
    ContentUnsplittable { start: u32, end: u32 },

    // -- Document errors --
    #[error("image processing failed: {0}")]
    ImageError(String),

    #[error("PDF generation failed: {0}")]
    PdfError(String),

    // -- Optional OCR dependency --
    #[error("OCR is unavailable: {0}")]
    OcrUnavailable(String),

    #[error("OCR failed: {0}")]
    OcrError(String),

    // -- I/O --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, ScrollpressError>;
