// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Invisible-text overlay -- maps recognized words from slice pixel space into
// page space and emits text ops with an invisible rendering mode, so the
// rendered page becomes searchable without any visual change.

use printpdf::{BuiltinFont, Op, Point, Pt, TextItem, TextRenderingMode};

use super::OcrWord;
use crate::layout::PlacedSlice;

/// Fraction of a word's height down from its top where the baseline sits.
const BASELINE_RATIO: f32 = 0.8;

/// Build the invisible text ops for one slice's recognized words.
///
/// Words map through the same linear scale as the visible raster
/// (`placed.width / slice_px_w` horizontally, `placed.height / slice_px_h`
/// vertically), so the hidden glyphs align under the visible ones. Words with
/// zero confidence or blank text are skipped. The visible geometry is never
/// touched.
pub fn overlay_ops(
    words: &[OcrWord],
    placed: &PlacedSlice,
    slice_px_w: u32,
    slice_px_h: u32,
) -> Vec<Op> {
    if slice_px_w == 0 || slice_px_h == 0 {
        return Vec::new();
    }
    let scale_x = placed.width / slice_px_w as f64;
    let scale_y = placed.height / slice_px_h as f64;

    let mut ops = Vec::new();
    for word in words {
        if word.confidence <= 0.0 || word.text.trim().is_empty() {
            continue;
        }

        // Pixel rows grow downward; page y grows upward from the slice's
        // bottom edge.
        let baseline_px = word.y + word.height * BASELINE_RATIO;
        let x = placed.x + word.x as f64 * scale_x;
        let y = placed.y + placed.height - baseline_px as f64 * scale_y;
        let size = (word.height as f64 * scale_y).max(1.0);

        ops.push(Op::StartTextSection);
        ops.push(Op::SetTextRenderingMode {
            mode: TextRenderingMode::Invisible,
        });
        ops.push(Op::SetTextCursor {
            pos: Point {
                x: Pt(x as f32),
                y: Pt(y as f32),
            },
        });
        ops.push(Op::SetFontSizeBuiltinFont {
            size: Pt(size as f32),
            font: BuiltinFont::Helvetica,
        });
        ops.push(Op::WriteTextBuiltinFont {
            items: vec![TextItem::Text(word.text.clone())],
            font: BuiltinFont::Helvetica,
        });
        ops.push(Op::EndTextSection);
    }
    ops
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Slice;

    fn placed() -> PlacedSlice {
        PlacedSlice {
            slice: Slice::new(0, 200),
            x: 30.0,
            y: 500.0,
            width: 100.0,
            height: 100.0,
        }
    }

    fn word(text: &str, confidence: f32) -> OcrWord {
        OcrWord {
            text: text.into(),
            x: 40.0,
            y: 60.0,
            width: 80.0,
            height: 20.0,
            confidence,
        }
    }

    #[test]
    fn blank_and_zero_confidence_words_are_skipped() {
        let words = vec![word("  ", 1.0), word("kept", 0.0), word("kept", 0.9)];
        let ops = overlay_ops(&words, &placed(), 200, 200);
        // Only one word survives: six ops per word.
        assert_eq!(ops.len(), 6);
    }

    #[test]
    fn overlay_uses_invisible_rendering_mode() {
        let ops = overlay_ops(&[word("search me", 1.0)], &placed(), 200, 200);
        assert!(ops.iter().any(|op| matches!(
            op,
            Op::SetTextRenderingMode {
                mode: TextRenderingMode::Invisible
            }
        )));
    }

    #[test]
    fn word_position_maps_through_slice_scale() {
        // 200px slice into a 100pt rectangle: scale 0.5 both axes.
        let ops = overlay_ops(&[word("w", 1.0)], &placed(), 200, 200);
        let cursor = ops.iter().find_map(|op| match op {
            Op::SetTextCursor { pos } => Some(*pos),
            _ => None,
        });
        let pos = cursor.expect("cursor op present");
        // x = 30 + 40*0.5 = 50; baseline at 60 + 0.8*20 = 76px,
        // y = 500 + 100 - 76*0.5 = 562.
        assert!((pos.x.0 - 50.0).abs() < 0.01);
        assert!((pos.y.0 - 562.0).abs() < 0.01);
    }

    #[test]
    fn degenerate_slice_produces_no_ops() {
        assert!(overlay_ops(&[word("w", 1.0)], &placed(), 0, 200).is_empty());
    }
}
