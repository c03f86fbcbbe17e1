//! Pre-flight capacity arithmetic. Nothing in here touches coefficients.

use crate::error::{QimError, Result};
use crate::frame::HEADER_BITS;
use crate::positions::BITS_PER_BLOCK;

/// Maximum number of bits, header included, that `num_blocks` blocks carry.
pub fn capacity_bits(num_blocks: usize) -> usize {
    num_blocks * BITS_PER_BLOCK
}

/// Bits needed to embed a payload of `payload_len` bytes, header included.
///
/// Saturates at `usize::MAX`, which no carrier can offer.
pub fn required_bits(payload_len: usize) -> usize {
    payload_len.saturating_mul(8).saturating_add(HEADER_BITS)
}

/// Largest payload in bytes that fits into `num_blocks` blocks.
pub fn max_payload_len(num_blocks: usize) -> usize {
    capacity_bits(num_blocks).saturating_sub(HEADER_BITS) / 8
}

/// Fails with [`QimError::CapacityExceeded`] if `required` bits do not fit into `available`.
pub fn ensure_capacity(required: usize, available: usize) -> Result<()> {
    if required > available {
        return Err(QimError::CapacityExceeded {
            required,
            available,
        });
    }
    Ok(())
}
