// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// OCR capability interface and the invisible-text overlay.
//
// The real engine (behind the `ocr` cargo feature, in `engine.rs`) is the
// `ocrs` crate, a pure-Rust OCR engine backed by neural network models
// executed via `rten`. Whether the engine can actually run is decided once,
// at startup, by [`OcrBackend::probe`]: a build without the feature, or a
// build with the feature but without the model files on disk, yields the
// `Unavailable` variant, and every recognition request through it reports
// the reason. The pipeline never checks availability anywhere else.

#[cfg(feature = "ocr")]
pub mod engine;
pub mod overlay;

use image::DynamicImage;
use scrollpress_core::error::{Result, ScrollpressError};
use tracing::debug;

/// One recognized word with its bounding box in slice pixel coordinates
/// (top-left origin).
#[derive(Debug, Clone, PartialEq)]
pub struct OcrWord {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Engine confidence in (0, 1]. Words the engine rejected never surface.
    pub confidence: f32,
}

/// OCR capability, selected once at startup.
pub enum OcrBackend {
    /// The engine is loaded and ready.
    #[cfg(feature = "ocr")]
    Available(engine::OcrEngine),
    /// OCR cannot run; the payload explains why and how to fix it.
    Unavailable(String),
}

impl OcrBackend {
    /// Probe the environment once and select the backend variant.
    pub fn probe(language: &str) -> Self {
        #[cfg(feature = "ocr")]
        {
            match engine::OcrEngine::with_defaults(language) {
                Ok(engine) => Self::Available(engine),
                Err(err) => {
                    debug!(error = %err, "OCR engine unavailable");
                    Self::Unavailable(err.to_string())
                }
            }
        }
        #[cfg(not(feature = "ocr"))]
        {
            let _ = language;
            debug!("Built without the `ocr` feature");
            Self::Unavailable(
                "this build does not include OCR support; rebuild with `--features ocr`".into(),
            )
        }
    }

    pub fn is_available(&self) -> bool {
        match self {
            #[cfg(feature = "ocr")]
            Self::Available(_) => true,
            Self::Unavailable(_) => false,
        }
    }

    /// The reason OCR is unavailable, if it is.
    pub fn unavailable_reason(&self) -> Option<&str> {
        match self {
            #[cfg(feature = "ocr")]
            Self::Available(_) => None,
            Self::Unavailable(reason) => Some(reason),
        }
    }

    /// Recognize the words in a slice image, with bounding boxes.
    pub fn recognize_words(&self, image: &DynamicImage) -> Result<Vec<OcrWord>> {
        match self {
            #[cfg(feature = "ocr")]
            Self::Available(engine) => engine.recognize_words(image),
            Self::Unavailable(reason) => Err(ScrollpressError::OcrUnavailable(reason.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unavailable_backend_reports_reason() {
        let backend = OcrBackend::Unavailable("no models".into());
        assert!(!backend.is_available());
        assert_eq!(backend.unavailable_reason(), Some("no models"));

        let image = DynamicImage::new_rgb8(10, 10);
        let err = backend.recognize_words(&image).unwrap_err();
        assert!(err.to_string().contains("no models"));
    }

    #[cfg(not(feature = "ocr"))]
    #[test]
    fn probe_without_feature_is_unavailable() {
        let backend = OcrBackend::probe("eng");
        assert!(!backend.is_available());
        assert!(
            backend
                .unavailable_reason()
                .unwrap()
                .contains("--features ocr")
        );
    }
}
