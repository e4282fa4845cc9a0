//! PDF compilation via Typst.
//!
//! Behind the `typst-render` feature flag due to the heavyweight
//! dependencies involved; without it, callers still get Typst source from
//! [`crate::layout::ExportJob::typst_source`] and can compile it with an
//! external `typst` binary.

use tracing::warn;

use crate::error::ExportError;
use crate::layout::ExportJob;

/// Compile Typst source to PDF bytes.
pub fn render_pdf(source: &str) -> Result<Vec<u8>, ExportError> {
    use typst_as_lib::{typst_kit_options::TypstKitFontOptions, TypstEngine};

    let engine = TypstEngine::builder()
        .main_file(source)
        .search_fonts_with(
            TypstKitFontOptions::default()
                .include_system_fonts(true)
                .include_embedded_fonts(true),
        )
        .build();

    let compiled = engine.compile();
    for warning in &compiled.warnings {
        warn!(?warning, "typst warning");
    }

    let document = compiled
        .output
        .map_err(|e| ExportError::Compile(format!("{e:?}")))?;

    let pdf_options = typst_pdf::PdfOptions::default();
    typst_pdf::pdf(&document, &pdf_options).map_err(|e| ExportError::Pdf(format!("{e:?}")))
}

impl ExportJob {
    /// Build this document's Typst source and compile it to PDF bytes.
    pub fn render_pdf(&self) -> Result<Vec<u8>, ExportError> {
        render_pdf(&self.typst_source())
    }
}
