// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PDF module -- rendering of composed pages via printpdf, plus builtin-font
// name mapping and width estimation.

pub mod metrics;
pub mod writer;

pub use writer::PdfWriter;
