//! Driver error types

use thiserror::Error;

/// Errors from driver setup, which in practice means font loading. The
/// frame loop itself has no fallible operations; builder misuse panics
/// instead of surfacing here.
#[derive(Error, Debug)]
pub enum AppError {
    /// Font file could not be read
    #[error("failed to read font file: {0}")]
    FontRead(#[from] std::io::Error),

    /// Font data could not be parsed
    #[error("failed to parse font data: {0}")]
    FontParse(#[from] ttf_parser::FaceParsingError),

    /// No candidate system font could be loaded
    #[error("no usable system font found")]
    NoSystemFont,
}

/// Result type for driver operations
pub type Result<T> = std::result::Result<T, AppError>;
