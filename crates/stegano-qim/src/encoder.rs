//! QIM Encoder - embeds a framed payload into DCT coefficients.
//!
//! Bits are bound to blocks by index before any coefficient is touched:
//! block `n` receives frame bits `n * 14 .. (n + 1) * 14`, written in position
//! table order. There is no shared cursor, so the mapping does not depend on
//! the order blocks are visited in.

use crate::capacity::{ensure_capacity, required_bits};
use crate::coefficients::CoefficientArray;
use crate::error::Result;
use crate::frame::{frame_bits, Header};
use crate::options::QimOptions;
use crate::positions::{BITS_PER_BLOCK, POSITION_TABLE};
use crate::quantizer::embed_bit;

/// QIM Encoder for embedding data into DCT coefficients.
///
/// # Note
///
/// The encoder does NOT handle encryption. The payload is carried as opaque
/// bytes, encrypt it beforehand if needed.
#[derive(Debug, Default)]
pub struct QimEncoder {
    options: QimOptions,
}

impl QimEncoder {
    /// Create a new encoder with the default quantization step.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: QimOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &QimOptions {
        &self.options
    }

    /// Embed `payload` into `coefficients`.
    ///
    /// # Returns
    /// * `Ok(())` on success (coefficients modified in-place)
    /// * `Err(QimError::CapacityExceeded)` if the frame does not fit; the
    ///   coefficients are left untouched in that case
    pub fn embed(&self, coefficients: &mut CoefficientArray, payload: &[u8]) -> Result<()> {
        Header::for_payload(payload)?;
        let available = coefficients.capacity_bits();
        ensure_capacity(required_bits(payload.len()), available)?;

        let bits = frame_bits(payload)?;

        let step = self.options.quantization_step();
        for (block, chunk) in coefficients
            .blocks_mut()
            .iter_mut()
            .zip(bits.chunks(BITS_PER_BLOCK))
        {
            for (&bit, &(r, c)) in chunk.iter().zip(POSITION_TABLE.iter()) {
                block[r][c] = embed_bit(block[r][c], bit, step);
            }
        }

        log::debug!(
            "embedded {} payload bytes ({} of {} bits) with step {}",
            payload.len(),
            bits.len(),
            available,
            step
        );
        Ok(())
    }

    /// Largest payload in bytes the given coefficients can carry.
    pub fn capacity(&self, coefficients: &CoefficientArray) -> usize {
        crate::capacity::max_payload_len(coefficients.block_count())
    }
}
