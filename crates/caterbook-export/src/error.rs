use thiserror::Error;

/// Errors from the export layer.
///
/// Unlike the store's silent-recovery reads, export failures always
/// surface: a half-configured business profile or a layout that will not
/// compile must reach the user.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("profile read error: {0}")]
    Io(#[from] std::io::Error),

    #[error("profile parse error: {0}")]
    Profile(#[from] toml::de::Error),

    /// Typst compilation failed with source errors
    #[error("Typst compilation error: {0}")]
    Compile(String),

    /// PDF generation failed after successful compilation
    #[error("PDF generation error: {0}")]
    Pdf(String),
}
