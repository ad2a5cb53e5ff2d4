// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Conversion configuration.

use serde::{Deserialize, Serialize};

use crate::types::{CornerPosition, TitleAlignment};

/// Page-number annotation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NumberingSpec {
    /// Whether page numbers are drawn at all.
    pub enabled: bool,
    /// Which corner the number sits in.
    pub position: CornerPosition,
    /// Builtin font name, e.g. "Helvetica".
    pub font: String,
    /// Font size in points.
    pub size: f64,
    /// Skip the number on the first composed page.
    pub skip_first: bool,
}

impl Default for NumberingSpec {
    fn default() -> Self {
        Self {
            enabled: true,
            position: CornerPosition::BottomLeft,
            font: "Helvetica".into(),
            size: 10.0,
            skip_first: true,
        }
    }
}

/// Title annotation settings. The title is drawn once, on the first composed
/// page only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TitleSpec {
    pub text: String,
    pub position: TitleAlignment,
    /// Builtin font name, e.g. "Helvetica-Bold".
    pub font: String,
    /// Font size in points.
    pub size: f64,
}

impl TitleSpec {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            position: TitleAlignment::Center,
            font: "Helvetica-Bold".into(),
            size: 14.0,
        }
    }
}

/// Full settings for one scrollshot-to-PDF conversion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertConfig {
    /// Page width in points.
    pub page_width: f64,
    /// Page height in points.
    pub page_height: f64,
    /// Margin on all four sides, in points.
    pub margin: f64,
    /// Minimum blank-run length (in source pixels) to qualify as a cut point.
    pub min_gap_size: u32,
    /// Fraction of non-background pixels a row may contain and still count as
    /// blank (0.0 = strictly blank).
    pub blank_ratio: f64,
    /// Fail instead of cutting through a content block.
    pub no_split_content: bool,
    /// Fixed column count; `None` selects the optimal count automatically.
    pub columns: Option<u32>,
    /// Horizontal gap between columns, in points.
    pub column_gap: f64,
    /// Page-number annotations.
    pub numbering: NumberingSpec,
    /// Optional title for the first page.
    pub title: Option<TitleSpec>,
    /// Raw page-range string (`N`, `N-M`, `N-`, `-M`); `None` keeps all pages.
    pub page_range: Option<String>,
    /// Add an invisible, searchable text layer via OCR.
    pub ocr: bool,
    /// OCR language tag (the bundled models are Latin-script only).
    pub ocr_language: String,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        let (page_width, page_height) = crate::types::lookup_page_size("a4")
            .expect("a4 is always present in the page-size table");
        Self {
            page_width,
            page_height,
            margin: crate::units::mm_to_points(10.0),
            min_gap_size: 50,
            blank_ratio: 0.0,
            no_split_content: false,
            columns: None,
            column_gap: 20.0,
            numbering: NumberingSpec::default(),
            title: None,
            page_range: None,
            ocr: false,
            ocr_language: "eng".into(),
        }
    }
}
