// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// scrollpress-document -- the Scrollpress pagination engine.
//
// Takes one tall scrollshot image and turns it into a multi-page PDF: trims
// the uniform background border, finds blank gaps between content blocks,
// picks a column count with a clean downscale ratio, partitions the image
// height into page-sized slices that cut at gaps where possible, composes the
// slices onto pages, and renders the result with printpdf -- optionally with
// an invisible OCR text layer for searchability.

pub mod convert;
pub mod image;
pub mod layout;
pub mod ocr;
pub mod pdf;

// Re-export the primary entry points so callers can use
// `scrollpress_document::convert_image` etc.
pub use convert::{ConversionSummary, convert_image};
pub use layout::Slice;
pub use ocr::OcrBackend;
pub use pdf::writer::PdfWriter;
