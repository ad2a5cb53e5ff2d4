// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Builtin-font handling: name mapping and text-width estimation.
//
// printpdf exposes the standard-14 fonts but no glyph metrics for them, so
// widths are estimated from an average glyph width per family. The strings
// measured here are short annotations (a title, a page number), for which the
// estimate anchors right- and centre-aligned text acceptably.

use printpdf::BuiltinFont;
use tracing::warn;

/// Map a PostScript-style font name to a printpdf builtin font.
///
/// Unknown names fall back to Helvetica with a warning rather than aborting
/// the run.
pub fn builtin_font(name: &str) -> BuiltinFont {
    match name {
        "Helvetica" => BuiltinFont::Helvetica,
        "Helvetica-Bold" => BuiltinFont::HelveticaBold,
        "Helvetica-Oblique" => BuiltinFont::HelveticaOblique,
        "Helvetica-BoldOblique" => BuiltinFont::HelveticaBoldOblique,
        "Times-Roman" => BuiltinFont::TimesRoman,
        "Times-Bold" => BuiltinFont::TimesBold,
        "Times-Italic" => BuiltinFont::TimesItalic,
        "Times-BoldItalic" => BuiltinFont::TimesBoldItalic,
        "Courier" => BuiltinFont::Courier,
        "Courier-Bold" => BuiltinFont::CourierBold,
        "Courier-Oblique" => BuiltinFont::CourierOblique,
        "Courier-BoldOblique" => BuiltinFont::CourierBoldOblique,
        "Symbol" => BuiltinFont::Symbol,
        "ZapfDingbats" => BuiltinFont::ZapfDingbats,
        other => {
            warn!(font = other, "Unknown builtin font; falling back to Helvetica");
            BuiltinFont::Helvetica
        }
    }
}

/// Average glyph width as a fraction of the font size.
///
/// Courier is fixed-pitch at exactly 0.6 em; the proportional families use
/// averages over typical Latin text.
fn average_glyph_factor(name: &str) -> f64 {
    match name {
        "Courier" | "Courier-Bold" | "Courier-Oblique" | "Courier-BoldOblique" => 0.600,
        "Helvetica-Bold" | "Helvetica-BoldOblique" => 0.56,
        "Times-Roman" | "Times-Italic" => 0.50,
        "Times-Bold" | "Times-BoldItalic" => 0.53,
        _ => 0.52,
    }
}

/// Estimated width of `text` in points at the given font and size.
pub fn text_width(text: &str, font_name: &str, size: f64) -> f64 {
    text.chars().count() as f64 * average_glyph_factor(font_name) * size
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_names_map_to_builtins() {
        assert_eq!(builtin_font("Helvetica"), BuiltinFont::Helvetica);
        assert_eq!(builtin_font("Helvetica-Bold"), BuiltinFont::HelveticaBold);
        assert_eq!(builtin_font("Times-Roman"), BuiltinFont::TimesRoman);
        assert_eq!(builtin_font("Courier"), BuiltinFont::Courier);
    }

    #[test]
    fn unknown_name_falls_back_to_helvetica() {
        assert_eq!(builtin_font("Comic Sans"), BuiltinFont::Helvetica);
    }

    #[test]
    fn courier_width_is_exact() {
        // Fixed pitch: 5 characters at 10pt occupy exactly 30pt.
        assert_eq!(text_width("12345", "Courier", 10.0), 30.0);
    }

    #[test]
    fn wider_family_measures_wider() {
        let regular = text_width("Title", "Helvetica", 14.0);
        let bold = text_width("Title", "Helvetica-Bold", 14.0);
        assert!(bold > regular);
    }

    #[test]
    fn empty_text_has_zero_width() {
        assert_eq!(text_width("", "Helvetica", 12.0), 0.0);
    }
}
