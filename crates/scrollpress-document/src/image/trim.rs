// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Whitespace trimming -- removes the uniform background border around the
// content of a scrollshot.

use image::{DynamicImage, Rgb, RgbImage};
use tracing::{debug, info};

/// Trim the pure-white border from an image, returning a copy cropped to the
/// minimal bounding box that contains every non-white pixel.
///
/// Transparency never counts as content: images with an alpha channel are
/// first composited onto an opaque white background, so fully transparent
/// regions trim away exactly like white ones. If the image contains no
/// content at all, it is returned unchanged (never a zero-size crop).
pub fn trim_whitespace(image: &DynamicImage) -> DynamicImage {
    let rgb = flatten_onto_white(image);
    let (width, height) = rgb.dimensions();

    match content_bbox(&rgb) {
        Some((x0, y0, x1, y1)) => {
            let (w, h) = (x1 - x0 + 1, y1 - y0 + 1);
            info!(
                from_w = width,
                from_h = height,
                to_w = w,
                to_h = h,
                "Trimmed background border"
            );
            DynamicImage::ImageRgb8(rgb).crop_imm(x0, y0, w, h)
        }
        None => {
            debug!("Image is entirely background; leaving untrimmed");
            DynamicImage::ImageRgb8(rgb)
        }
    }
}

/// Composite the image onto an opaque white background and drop the alpha
/// channel.
fn flatten_onto_white(image: &DynamicImage) -> RgbImage {
    let rgba = image.to_rgba8();
    RgbImage::from_fn(rgba.width(), rgba.height(), |x, y| {
        let image::Rgba([r, g, b, a]) = *rgba.get_pixel(x, y);
        let blend = |channel: u8| -> u8 {
            ((channel as u16 * a as u16 + 255 * (255 - a as u16)) / 255) as u8
        };
        Rgb([blend(r), blend(g), blend(b)])
    })
}

/// Inclusive bounding box `(x0, y0, x1, y1)` of all non-white pixels, or
/// `None` when every pixel is white.
fn content_bbox(rgb: &RgbImage) -> Option<(u32, u32, u32, u32)> {
    const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
    let mut bbox: Option<(u32, u32, u32, u32)> = None;

    for (x, y, pixel) in rgb.enumerate_pixels() {
        if *pixel != WHITE {
            bbox = Some(match bbox {
                Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
                None => (x, y, x, y),
            });
        }
    }
    bbox
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn white_canvas(w: u32, h: u32) -> RgbImage {
        RgbImage::from_pixel(w, h, Rgb([255, 255, 255]))
    }

    #[test]
    fn trims_to_content_rectangle() {
        let mut img = white_canvas(100, 100);
        for y in 20..80 {
            for x in 25..75 {
                img.put_pixel(x, y, Rgb([0, 0, 0]));
            }
        }
        let trimmed = trim_whitespace(&DynamicImage::ImageRgb8(img));
        assert_eq!((trimmed.width(), trimmed.height()), (50, 60));
    }

    #[test]
    fn all_white_image_is_returned_unchanged() {
        let img = white_canvas(40, 30);
        let trimmed = trim_whitespace(&DynamicImage::ImageRgb8(img));
        assert_eq!((trimmed.width(), trimmed.height()), (40, 30));
    }

    #[test]
    fn single_dark_pixel_trims_to_one_pixel() {
        let mut img = white_canvas(10, 10);
        img.put_pixel(3, 7, Rgb([10, 10, 10]));
        let trimmed = trim_whitespace(&DynamicImage::ImageRgb8(img));
        assert_eq!((trimmed.width(), trimmed.height()), (1, 1));
    }

    #[test]
    fn transparent_border_trims_like_white() {
        // Fully transparent border around an opaque black square.
        let mut img = image::RgbaImage::from_pixel(60, 60, Rgba([0, 0, 0, 0]));
        for y in 10..50 {
            for x in 10..50 {
                img.put_pixel(x, y, Rgba([0, 0, 0, 255]));
            }
        }
        let trimmed = trim_whitespace(&DynamicImage::ImageRgba8(img));
        assert_eq!((trimmed.width(), trimmed.height()), (40, 40));
    }

    #[test]
    fn near_white_pixels_count_as_content() {
        // Trimming is exact: only pure white is background.
        let mut img = white_canvas(10, 10);
        img.put_pixel(0, 0, Rgb([254, 254, 254]));
        let trimmed = trim_whitespace(&DynamicImage::ImageRgb8(img));
        assert_eq!((trimmed.width(), trimmed.height()), (1, 1));
    }
}
