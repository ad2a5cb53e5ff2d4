// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Image resolution metadata. The column planner needs the source's physical
// DPI to judge how many points the image "wants" on the page; PNG carries it
// in the pHYs chunk (pixels per metre). Everything else falls back to 72.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use tracing::debug;

/// DPI assumed when the image carries no resolution metadata.
pub const DEFAULT_DPI: f64 = 72.0;

/// Read the horizontal DPI recorded in an image file's metadata.
///
/// Only PNG `pHYs` metadata with a metre unit is honoured; missing chunks,
/// unreadable files, and non-PNG formats all yield [`DEFAULT_DPI`]. This never
/// fails: a broken file surfaces later through the actual decode path.
pub fn detect_dpi(path: impl AsRef<Path>) -> f64 {
    let path = path.as_ref();
    let dpi = png_dpi(path).unwrap_or(DEFAULT_DPI);
    debug!(path = %path.display(), dpi, "Resolved image DPI");
    dpi
}

fn png_dpi(path: &Path) -> Option<f64> {
    let file = File::open(path).ok()?;
    let decoder = png::Decoder::new(BufReader::new(file));
    let reader = decoder.read_info().ok()?;
    let dims = reader.info().pixel_dims?;
    if dims.unit != png::Unit::Meter || dims.xppu == 0 {
        return None;
    }
    Some(dims.xppu as f64 * 0.0254)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_falls_back_to_default() {
        assert_eq!(detect_dpi("/nonexistent/image.png"), DEFAULT_DPI);
    }

    #[test]
    fn non_png_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("not-a-png.jpg");
        std::fs::write(&path, b"\xff\xd8\xff\xe0 junk").unwrap();
        assert_eq!(detect_dpi(&path), DEFAULT_DPI);
    }

    #[test]
    fn png_with_phys_chunk_reports_dpi() {
        // Write a 1x1 PNG carrying a pHYs chunk of 11811 px/m (~300 DPI).
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resolution.png");
        let file = File::create(&path).unwrap();
        let mut encoder = png::Encoder::new(file, 1, 1);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_pixel_dims(Some(png::PixelDimensions {
            xppu: 11811,
            yppu: 11811,
            unit: png::Unit::Meter,
        }));
        let mut writer = encoder.write_header().unwrap();
        writer.write_image_data(&[255, 255, 255]).unwrap();
        drop(writer);

        let dpi = detect_dpi(&path);
        assert!((dpi - 300.0).abs() < 0.5, "expected ~300 DPI, got {dpi}");
    }
}
