//! Error types for the svg-letter library

use thiserror::Error;

/// Result type alias using LetterError
pub type Result<T> = std::result::Result<T, LetterError>;

/// Errors that can occur when generating or exporting letters
#[derive(Debug, Error)]
pub enum LetterError {
    /// CSV template export requested but no `{{tag}}` placeholders exist
    /// in the active sections
    #[error("no template tags found in the active sections")]
    NoTemplateTags,

    /// File write failed at the export boundary
    #[error("export failed: {0}")]
    Io(#[from] std::io::Error),
}
