//! Error types for QIM steganography operations.

use std::fmt;
use thiserror::Error;

/// Result type alias for QIM operations.
pub type Result<T> = std::result::Result<T, QimError>;

/// Errors that can occur during QIM embedding, extraction and analysis.
#[derive(Error)]
pub enum QimError {
    /// The framed bitstream does not fit into the coefficient array. Nothing was modified.
    #[error("capacity exceeded: frame requires {required} bits but only {available} bits available")]
    CapacityExceeded { required: usize, available: usize },

    /// Payload length does not fit the 32 bit length field of the header.
    #[error("payload length {payload_len} exceeds maximum of 4294967295 bytes")]
    ExceedsMaxPayloadLength { payload_len: usize },

    /// The extracted header does not start with the frame magic.
    #[error("framing error: expected magic {expected:02x?} but found {found:02x?}")]
    MagicMismatch { expected: [u8; 4], found: [u8; 4] },

    /// The extracted header declares more payload than the carrier can hold.
    #[error(
        "framing error: declared payload of {declared} bytes needs {required} bits but only {available} bits available"
    )]
    ImplausibleLength {
        declared: u32,
        required: u64,
        available: usize,
    },

    /// The carrier is too small to hold even the frame header.
    #[error("framing error: carrier offers {available} bits, not enough for a frame header")]
    TruncatedHeader { available: usize },

    /// The stego image does not give back the payload it was built from, because
    /// reconstructed samples were clamped to the intensity range or rounded to
    /// pixels. Saturated (very bright or very dark) covers cause this.
    #[error("cover cannot carry the payload: {corrupted_bytes} of {payload_len} bytes do not survive pixel conversion")]
    UnreliableCarrier {
        payload_len: usize,
        corrupted_bytes: usize,
    },

    /// Two sample grids that must be equally sized are not.
    #[error("dimension mismatch: expected {expected:?} but got {found:?} (rows, cols)")]
    DimensionMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },

    /// A raw sample buffer does not match the dimensions it was declared with.
    #[error("sample buffer holds {actual} samples, but {expected} are required")]
    InvalidSampleBuffer { expected: usize, actual: usize },

    /// The quantization step must be a finite, positive number.
    #[error("invalid quantization step {step}: must be finite and greater than zero")]
    InvalidQuantizationStep { step: f64 },

    /// Represents an invalid carrier image media. For example, a broken PNG file
    #[error("Image media is invalid")]
    InvalidImageMedia(#[source] image::ImageError),

    /// Represents a failure when encoding an image file.
    #[error("Image encoding error")]
    ImageEncodingError(#[source] image::ImageError),

    /// Represents a failure to read from input.
    #[error("Read error")]
    ReadError { source: std::io::Error },

    /// Represents a failure to write target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// I/O error during bit operations.
    #[error("bit I/O error: {0}")]
    BitIo(#[from] std::io::Error),
}

impl QimError {
    /// True for every error that signals extracted data is not a valid frame,
    /// e.g. wrong quantization step, a carrier without payload or a recompressed image.
    pub fn is_framing_error(&self) -> bool {
        matches!(
            self,
            QimError::MagicMismatch { .. }
                | QimError::ImplausibleLength { .. }
                | QimError::TruncatedHeader { .. }
        )
    }
}

impl fmt::Debug for QimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Use Display for Debug so unwrap() shows user-friendly messages
        write!(f, "{self}")
    }
}
