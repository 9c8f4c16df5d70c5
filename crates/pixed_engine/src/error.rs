//! Unified error types for pixed_engine

use thiserror::Error;

/// Structural errors found while reading XPM data.
///
/// The messages are shown to the user as they are, so every rule of the
/// format has its own variant and wording.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    // === Value line ===
    #[error("Value line is missing.")]
    ValueLineMissing,

    #[error("Value line should be in format '<width> <height> <color count> <chars per pixel>'.")]
    ValueLineFormat,

    #[error("Value line should contain only non-zero integers.")]
    ValueLineNotInteger,

    // === Color table ===
    #[error("Color lines are missing or not enough.")]
    ColorLinesMissing,

    #[error("Color key should be followed by a space.")]
    ColorKeySpaceMissing,

    #[error("Only color key 'c' is supported, found <{key}>.")]
    ColorKeyUnsupported { key: String },

    #[error("Color value is missing.")]
    ColorValueMissing,

    #[error("Color value <{value}> is invalid.")]
    ColorValueInvalid { value: String },

    #[error("Color <{key}> was found more than once.")]
    ColorDuplicated { key: String },

    // === Pixel rows ===
    #[error("Pixel rows are missing or not enough.")]
    PixelRowsMissing,

    #[error("Pixel row is broken.")]
    PixelRowBroken,

    #[error("Pixel row is too small.")]
    PixelRowTooSmall,

    #[error("Pixel row is too large.")]
    PixelRowTooLarge,

    #[error("Pixel value <{key}> is invalid.")]
    PixelValueInvalid { key: String },

    #[error("Extra pixel rows are found.")]
    ExtraPixelRows,
}

/// Main error type for pixed_engine operations
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Invalid pixmap dimensions {width}x{height}, both must be at least 1")]
    InvalidDimensions { width: usize, height: usize },

    #[error("{count} colors can't be keyed with {chars_per_pixel} chars per pixel")]
    TooManyColors { count: usize, chars_per_pixel: usize },

    #[error("{chars_per_pixel} chars per pixel is out of range, at most {max} are supported")]
    CharsPerPixelOutOfRange { chars_per_pixel: usize, max: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("Invalid options: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Can't write options: {0}")]
    ConfigWrite(#[from] toml::ser::Error),
}

/// Result type alias for pixed_engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

impl EngineError {
    /// Returns the XPM structural error if this is one.
    pub fn parse_error(&self) -> Option<&ParseError> {
        match self {
            EngineError::Parse(err) => Some(err),
            _ => None,
        }
    }
}
