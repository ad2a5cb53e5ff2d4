// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for Scrollpress: the named page-size table, page-range
// parsing, annotation positions, and title derivation.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScrollpressError};
use crate::units::mm_to_points;

// -- Page sizes ---------------------------------------------------------------

/// Base page sizes. ISO sizes are defined in millimetres, US sizes directly in
/// points (so `letter` is exactly 612x792pt).
const ISO_SIZES_MM: &[(&str, f64, f64)] = &[
    ("a0", 841.0, 1189.0),
    ("a1", 594.0, 841.0),
    ("a2", 420.0, 594.0),
    ("a3", 297.0, 420.0),
    ("a4", 210.0, 297.0),
    ("a5", 148.0, 210.0),
    ("a6", 105.0, 148.0),
    ("b4", 250.0, 353.0),
    ("b5", 176.0, 250.0),
    ("b6", 125.0, 176.0),
];

const US_SIZES_PT: &[(&str, f64, f64)] = &[
    ("letter", 612.0, 792.0),
    ("legal", 612.0, 1008.0),
    ("tabloid", 792.0, 1224.0),
    ("ledger", 1224.0, 792.0),
    ("elevenseventeen", 792.0, 1224.0),
];

/// The immutable page-size table: lowercase name -> (width, height) in points.
///
/// Built once on first access. Every portrait entry gets a programmatically
/// derived `<name>-landscape` variant with width and height swapped.
pub fn page_sizes() -> &'static BTreeMap<String, (f64, f64)> {
    static TABLE: OnceLock<BTreeMap<String, (f64, f64)>> = OnceLock::new();
    TABLE.get_or_init(|| {
        let mut table = BTreeMap::new();
        for &(name, w_mm, h_mm) in ISO_SIZES_MM {
            table.insert(name.to_string(), (mm_to_points(w_mm), mm_to_points(h_mm)));
        }
        for &(name, w_pt, h_pt) in US_SIZES_PT {
            table.insert(name.to_string(), (w_pt, h_pt));
        }
        let landscape: Vec<(String, (f64, f64))> = table
            .iter()
            .map(|(name, &(w, h))| (format!("{name}-landscape"), (h, w)))
            .collect();
        table.extend(landscape);
        table
    })
}

/// Look up a page size by name (case-insensitive), returning points.
pub fn lookup_page_size(name: &str) -> Result<(f64, f64)> {
    let key = name.to_ascii_lowercase();
    page_sizes()
        .get(&key)
        .copied()
        .ok_or_else(|| ScrollpressError::UnknownPageSize {
            name: name.to_string(),
            available: page_size_names().join(", "),
        })
}

/// Sorted list of valid page-size names (for CLI help and error messages).
pub fn page_size_names() -> Vec<&'static str> {
    page_sizes().keys().map(String::as_str).collect()
}

// -- Page-range parsing -------------------------------------------------------

/// An inclusive, 1-based range of output pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRange {
    pub start: u32,
    pub end: u32,
}

impl PageRange {
    /// Parse a page-range string against the total page count.
    ///
    /// Accepts `""` (all pages), `"N"`, `"N-M"`, `"N-"`, and `"-M"`. Anything
    /// unparsable or out of `[1, total]`, or with start > end, is an error.
    pub fn parse(range: &str, total: u32) -> Result<Self> {
        let bad = || ScrollpressError::InvalidPageRange(range.to_string(), total);

        if range.is_empty() {
            return Ok(Self {
                start: 1,
                end: total,
            });
        }

        let (start, end) = match range.split_once('-') {
            Some((start_str, end_str)) => {
                let start = if start_str.is_empty() {
                    1
                } else {
                    start_str.parse().map_err(|_| bad())?
                };
                let end = if end_str.is_empty() {
                    total
                } else {
                    end_str.parse().map_err(|_| bad())?
                };
                (start, end)
            }
            None => {
                let page: u32 = range.parse().map_err(|_| bad())?;
                (page, page)
            }
        };

        if start < 1 || end > total || start > end {
            return Err(bad());
        }
        Ok(Self { start, end })
    }
}

// -- Annotation positions -----------------------------------------------------

/// Corner placement for page numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CornerPosition {
    BottomLeft,
    BottomRight,
    TopLeft,
    TopRight,
}

impl CornerPosition {
    pub fn is_bottom(self) -> bool {
        matches!(self, Self::BottomLeft | Self::BottomRight)
    }

    pub fn is_left(self) -> bool {
        matches!(self, Self::BottomLeft | Self::TopLeft)
    }
}

/// Horizontal alignment for the document title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TitleAlignment {
    Left,
    Center,
    Right,
}

// -- Title derivation ---------------------------------------------------------

/// Derive a display title from an input filename.
///
/// Strips the directory and extension, replaces `_` and `-` separators with
/// spaces, and title-cases the result only when the stem is entirely
/// lower-case. Mixed- or upper-case stems keep their original casing.
pub fn title_from_filename(filename: &str) -> String {
    let stem = Path::new(filename)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let spaced = stem.replace(['_', '-'], " ");

    let has_lower = stem.chars().any(|c| c.is_lowercase());
    let has_upper = stem.chars().any(|c| c.is_uppercase());
    if has_lower && !has_upper {
        titlecase(&spaced)
    } else {
        spaced
    }
}

/// Capitalize the first letter of every alphabetic run, lowercasing the rest.
fn titlecase(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_size_table_has_landscape_variants() {
        let (w, h) = lookup_page_size("a4").unwrap();
        let (lw, lh) = lookup_page_size("a4-landscape").unwrap();
        assert_eq!((w, h), (lh, lw));
        assert!((w - 595.27).abs() < 0.01);
        assert!((h - 841.89).abs() < 0.01);
    }

    #[test]
    fn page_size_lookup_is_case_insensitive() {
        assert_eq!(
            lookup_page_size("Letter").unwrap(),
            lookup_page_size("letter").unwrap()
        );
        assert_eq!(lookup_page_size("letter").unwrap(), (612.0, 792.0));
    }

    #[test]
    fn page_size_unknown_name_lists_alternatives() {
        let err = lookup_page_size("a99").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("a99"));
        assert!(msg.contains("a4"));
    }

    #[test]
    fn page_range_full_forms() {
        assert_eq!(
            PageRange::parse("", 10).unwrap(),
            PageRange { start: 1, end: 10 }
        );
        assert_eq!(
            PageRange::parse("5", 10).unwrap(),
            PageRange { start: 5, end: 5 }
        );
        assert_eq!(
            PageRange::parse("5-8", 10).unwrap(),
            PageRange { start: 5, end: 8 }
        );
        assert_eq!(
            PageRange::parse("-8", 10).unwrap(),
            PageRange { start: 1, end: 8 }
        );
        assert_eq!(
            PageRange::parse("5-", 10).unwrap(),
            PageRange { start: 5, end: 10 }
        );
    }

    #[test]
    fn page_range_rejects_out_of_bounds() {
        assert!(PageRange::parse("11", 10).is_err());
        assert!(PageRange::parse("5-11", 10).is_err());
        assert!(PageRange::parse("8-5", 10).is_err());
        assert!(PageRange::parse("0-3", 10).is_err());
        assert!(PageRange::parse("abc", 10).is_err());
    }

    #[test]
    fn title_derivation() {
        assert_eq!(title_from_filename("test.png"), "Test");
        assert_eq!(title_from_filename("test_file.png"), "Test File");
        assert_eq!(title_from_filename("test-file.png"), "Test File");
        assert_eq!(title_from_filename("TEST_FILE.png"), "TEST FILE");
        assert_eq!(title_from_filename("/path/to/test_file.png"), "Test File");
    }

    #[test]
    fn title_preserves_mixed_case() {
        assert_eq!(title_from_filename("MyChat_log.png"), "MyChat log");
    }
}
