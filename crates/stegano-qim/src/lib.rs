//! QIM Steganography in the DCT domain
//!
//! This crate hides an opaque byte payload in the frequency domain of a single
//! channel image. The image is split into 8x8 blocks, each block is transformed
//! with an orthonormal DCT, and payload bits are written into the parity of
//! quantized mid-frequency coefficients (quantization index modulation).
//!
//! # Layer Responsibilities
//!
//! - [`transform`]: forward / inverse block DCT between [`SampleGrid`] and [`CoefficientArray`]
//! - [`QimEncoder`] / [`QimDecoder`]: framing (magic + length) and parity embedding
//! - [`capacity`] and [`quality`]: pre-flight sizing and MSE / PSNR diagnostics
//! - [`image_ops`]: luma reduction and PNG file handling on top of the `image` crate
//!
//! Payload format, compression and encryption are handled by outer layers.
//! The quantization step is not stored inside the image, extraction has to use
//! the same [`QimOptions`] as embedding.
//!
//! # Example
//!
//! ```rust
//! use stegano_qim::{forward, inverse, QimDecoder, QimEncoder, SampleGrid};
//!
//! let cover = SampleGrid::filled(64, 64, 128.0);
//!
//! let mut coefficients = forward(&cover);
//! QimEncoder::new().embed(&mut coefficients, b"AB")?;
//! let stego = inverse(&coefficients);
//!
//! let extracted = QimDecoder::new().extract(&forward(&stego))?;
//! assert_eq!(extracted, b"AB");
//! # Ok::<(), stegano_qim::QimError>(())
//! ```

pub mod capacity;
mod coefficients;
mod decoder;
mod encoder;
mod error;
pub mod frame;
mod grid;
pub mod image_ops;
mod options;
pub mod positions;
pub mod quality;
pub mod quantizer;
pub mod transform;

pub use capacity::capacity_bits;
pub use coefficients::{Block, CoefficientArray};
pub use decoder::QimDecoder;
pub use encoder::QimEncoder;
pub use error::{QimError, Result};
pub use grid::SampleGrid;
pub use options::{QimOptions, DEFAULT_QUANTIZATION_STEP};
pub use quality::{quality_metrics, QualityMetrics};
pub use transform::{forward, inverse};
