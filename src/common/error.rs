use thiserror::Error;

// Error
//------------------------------------------------------------------------------

#[derive(Debug, Error, PartialEq, Eq, Copy, Clone)]
pub enum QRError {
    /// Nothing to encode.
    #[error("Empty input")]
    EmptyInput,

    /// The text holds a character the encoding mode cannot represent.
    #[error("Input cannot be represented in the requested encoding mode")]
    UnsupportedMode,

    /// The text does not fit the largest allowed version at the requested level.
    #[error("Input exceeds the capacity of the symbol")]
    CapacityExceeded,

    /// The reserved region hides more codewords than even level H can correct.
    #[error("Reserved region hides more codewords than error correction can recover")]
    RegionTooLarge,
}

pub type QRResult<T> = Result<T, QRError>;
