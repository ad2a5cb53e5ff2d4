// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PDF writer -- renders composed page plans into a PDF document using
// `printpdf` 0.8.
//
// printpdf 0.8 uses a data-oriented API: documents are built by constructing
// `PdfPage` structs containing `Vec<Op>` operation lists, then serialised via
// `PdfDocument::save()`. Slices are cropped in memory and embedded as
// `RawImage` xobjects -- no temporary files are ever written.

use std::path::Path;

use image::DynamicImage;
use printpdf::{
    Mm, Op, PdfDocument, PdfPage, PdfSaveOptions, PdfWarnMsg, Point, Pt, RawImage, RawImageData,
    RawImageFormat, TextItem, XObjectTransform,
};
use scrollpress_core::error::Result;
use tracing::{debug, info, instrument};

use crate::layout::{PageGeometry, PagePlan, PlacedSlice, TextDraw};
use crate::ocr::{OcrBackend, overlay};
use crate::pdf::metrics::builtin_font;

/// Renders composed pages into a PDF document.
pub struct PdfWriter {
    /// Page width in points.
    page_width: f64,
    /// Page height in points.
    page_height: f64,
    /// Title metadata embedded in the PDF /Info dictionary.
    doc_title: String,
}

impl PdfWriter {
    /// Create a writer for the given document geometry and /Info title.
    pub fn new(geometry: &PageGeometry, doc_title: impl Into<String>) -> Self {
        Self {
            page_width: geometry.page_width,
            page_height: geometry.page_height,
            doc_title: doc_title.into(),
        }
    }

    /// Render the page plans against the source image, returning PDF bytes.
    ///
    /// Each placed slice is cropped from `image`, embedded as an RGB8
    /// xobject, and drawn into its on-page rectangle. When an available OCR
    /// backend is supplied, every slice additionally gets an invisible text
    /// layer aligned under its visible glyphs.
    #[instrument(skip_all, fields(pages = pages.len(), ocr = ocr.is_some()))]
    pub fn render(
        &self,
        image: &DynamicImage,
        pages: &[PagePlan],
        ocr: Option<&OcrBackend>,
    ) -> Result<Vec<u8>> {
        let mut doc = PdfDocument::new(&self.doc_title);
        let mut pdf_pages: Vec<PdfPage> = Vec::with_capacity(pages.len());
        let total = pages.len();

        for (index, plan) in pages.iter().enumerate() {
            info!(page = index + 1, total, "Rendering page");
            let mut ops: Vec<Op> = Vec::new();

            for placed in &plan.slices {
                ops.extend(self.slice_ops(&mut doc, image, placed)?);
                if let Some(backend) = ocr {
                    ops.extend(self.ocr_ops(image, placed, backend)?);
                }
            }
            for text in &plan.texts {
                ops.extend(text_ops(text));
            }

            pdf_pages.push(PdfPage::new(
                pt_to_mm(self.page_width),
                pt_to_mm(self.page_height),
                ops,
            ));
        }

        doc.with_pages(pdf_pages);

        let mut warnings: Vec<PdfWarnMsg> = Vec::new();
        let output = doc.save(&PdfSaveOptions::default(), &mut warnings);
        debug!(
            bytes = output.len(),
            warnings = warnings.len(),
            "Document serialised"
        );
        Ok(output)
    }

    /// Render and write the document directly to a file.
    pub fn render_to_file(
        &self,
        image: &DynamicImage,
        pages: &[PagePlan],
        ocr: Option<&OcrBackend>,
        path: impl AsRef<Path>,
    ) -> Result<()> {
        let bytes = self.render(image, pages, ocr)?;
        std::fs::write(path.as_ref(), &bytes)?;
        info!("Wrote PDF to {}", path.as_ref().display());
        Ok(())
    }

    /// Crop one slice from the source, embed it, and place it on the page.
    fn slice_ops(
        &self,
        doc: &mut PdfDocument,
        image: &DynamicImage,
        placed: &PlacedSlice,
    ) -> Result<Vec<Op>> {
        let crop = image.crop_imm(0, placed.slice.start_y, image.width(), placed.slice.height());
        let rgb = crop.to_rgb8();
        let (px_w, px_h) = rgb.dimensions();

        let raw = RawImage {
            pixels: RawImageData::U8(rgb.into_raw()),
            width: px_w as usize,
            height: px_h as usize,
            data_format: RawImageFormat::RGB8,
            tag: Vec::new(),
        };
        let xobject_id = doc.add_image(&raw);

        // At 72 DPI the xobject's natural size is one point per pixel, so the
        // scale factors are exactly target-points-per-pixel.
        let scale_x = placed.width / px_w as f64;
        let scale_y = placed.height / px_h as f64;

        Ok(vec![Op::UseXobject {
            id: xobject_id,
            transform: XObjectTransform {
                translate_x: Some(Pt(placed.x as f32)),
                translate_y: Some(Pt(placed.y as f32)),
                scale_x: Some(scale_x as f32),
                scale_y: Some(scale_y as f32),
                dpi: Some(72.0),
                rotate: None,
            },
        }])
    }

    /// Recognize the slice's words and emit the invisible text layer.
    fn ocr_ops(
        &self,
        image: &DynamicImage,
        placed: &PlacedSlice,
        backend: &OcrBackend,
    ) -> Result<Vec<Op>> {
        let crop = image.crop_imm(0, placed.slice.start_y, image.width(), placed.slice.height());
        let words = backend.recognize_words(&crop)?;
        debug!(
            start_y = placed.slice.start_y,
            words = words.len(),
            "OCR overlay for slice"
        );
        Ok(overlay::overlay_ops(
            &words,
            placed,
            crop.width(),
            crop.height(),
        ))
    }
}

/// Ops for one resolved annotation text draw.
fn text_ops(text: &TextDraw) -> Vec<Op> {
    let font = builtin_font(&text.font);
    vec![
        Op::StartTextSection,
        Op::SetTextCursor {
            pos: Point {
                x: Pt(text.x as f32),
                y: Pt(text.y as f32),
            },
        },
        Op::SetFontSizeBuiltinFont {
            size: Pt(text.size as f32),
            font,
        },
        Op::WriteTextBuiltinFont {
            items: vec![TextItem::Text(text.text.clone())],
            font,
        },
        Op::EndTextSection,
    ]
}

/// Points to printpdf's Mm unit.
fn pt_to_mm(pt: f64) -> Mm {
    Mm((pt * 25.4 / 72.0) as f32)
}
