use miette::Diagnostic;
use thiserror::Error;

/// Main error type for pgen operations
#[derive(Error, Diagnostic, Debug)]
pub enum PgenError {
    #[error("IO error: {0}")]
    #[diagnostic(code(pgen::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(pgen::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("no usable glyph directory at {path}")]
    #[diagnostic(
        code(pgen::glyphs::library_not_found),
        help("the glyph directory must exist and contain at least one decodable tile")
    )]
    LibraryNotFound { path: std::path::PathBuf },

    #[error("barcode must be 13 digits, got {found}")]
    #[diagnostic(code(pgen::barcode::invalid_length))]
    InvalidLength { found: usize },

    #[error("barcode contains non-digit character {found:?} at position {position}")]
    #[diagnostic(code(pgen::barcode::invalid_digits))]
    InvalidDigits { found: char, position: usize },

    #[error("invalid accent colour {value:?}")]
    #[diagnostic(
        code(pgen::colour::invalid_accent),
        help("accent colours use the #rrggbb format, e.g. #1a2b3c")
    )]
    InvalidAccentColour { value: String },

    #[error("tile {index} is {found_w}x{found_h}, expected {expected_w}x{expected_h}")]
    #[diagnostic(code(pgen::compose::dimension_mismatch))]
    DimensionMismatch {
        index: usize,
        expected_w: u32,
        expected_h: u32,
        found_w: u32,
        found_h: u32,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(pgen::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, PgenError>;
