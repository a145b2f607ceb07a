//! Error types for docx2tex.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for docx2tex operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during DOCX to LaTeX conversion.
#[derive(Error, Debug)]
pub enum Error {
    /// Input path does not end in `docx`.
    #[error("Input file is not a Word document: {}", .0.display())]
    NotDocx(PathBuf),

    /// Input path does not exist.
    #[error("Input file does not exist: {}", .0.display())]
    InputNotFound(PathBuf),

    /// Error occurred while parsing DOCX file.
    #[error("Failed to parse DOCX file: {0}")]
    DocxParse(String),

    /// A required part is absent from the DOCX package.
    #[error("Missing document part: {0}")]
    MissingPart(String),

    /// Error occurred during file I/O operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("XML error: {0}")]
    Xml(#[from] roxmltree::Error),
}
