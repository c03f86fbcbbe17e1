//! QIM Decoder - extracts a framed payload from DCT coefficients.
//!
//! The decoder walks the same tape as the encoder, reads the header, validates
//! magic and declared length against the carrier capacity and only then reads
//! the payload bits.

use crate::coefficients::CoefficientArray;
use crate::error::{QimError, Result};
use crate::frame::{bits_to_bytes, Header, HEADER_BITS, HEADER_LEN};
use crate::options::QimOptions;
use crate::quantizer::extract_bit;

/// QIM Decoder for extracting data from DCT coefficients.
///
/// # Note
///
/// The decoder does NOT handle decryption. Data returned from `extract()` is
/// exactly what was handed to the encoder.
#[derive(Debug, Default)]
pub struct QimDecoder {
    options: QimOptions,
}

impl QimDecoder {
    /// Create a new decoder with the default quantization step.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: QimOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &QimOptions {
        &self.options
    }

    /// Extract the payload from `coefficients`.
    ///
    /// # Returns
    /// * `Ok(Vec<u8>)` - the embedded payload
    /// * `Err(QimError::MagicMismatch)` if the carrier holds no frame, or a
    ///   different quantization step was used
    /// * `Err(QimError::ImplausibleLength)` if the declared length cannot fit
    pub fn extract(&self, coefficients: &CoefficientArray) -> Result<Vec<u8>> {
        let available = coefficients.capacity_bits();
        if available < HEADER_BITS {
            return Err(QimError::TruncatedHeader { available });
        }

        let step = self.options.quantization_step();
        let mut tape = coefficients.tape().map(|v| extract_bit(v, step));

        let header_bits: Vec<bool> = tape.by_ref().take(HEADER_BITS).collect();
        let mut header_bytes = [0u8; HEADER_LEN];
        header_bytes.copy_from_slice(&bits_to_bytes(&header_bits)?);
        let header = Header::parse(&header_bytes)?;

        let required = header.frame_bits();
        if required > available as u64 {
            return Err(QimError::ImplausibleLength {
                declared: header.payload_len,
                required,
                available,
            });
        }

        let payload_bits: Vec<bool> = tape.take(header.payload_len as usize * 8).collect();
        let payload = bits_to_bytes(&payload_bits)?;

        log::debug!(
            "extracted {} payload bytes from {} blocks with step {}",
            payload.len(),
            coefficients.block_count(),
            step
        );
        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::QimEncoder;
    use crate::frame::FRAME_MAGIC;
    use crate::positions::POSITION_TABLE;
    use crate::quantizer::embed_bit;

    fn textured_coefficients(blocks_wide: usize, blocks_tall: usize) -> CoefficientArray {
        let mut rng = fastrand::Rng::with_seed(4242);
        let mut coefficients = CoefficientArray::zeroed(blocks_tall * 8, blocks_wide * 8);
        for block in coefficients.blocks_mut() {
            for value in block.iter_mut().flat_map(|row| row.iter_mut()) {
                *value = rng.f64() * 400.0 - 200.0;
            }
        }
        coefficients
    }

    /// Writes raw bits onto the tape, bypassing the encoder's framing.
    fn write_raw_bits(coefficients: &mut CoefficientArray, bits: &[bool], step: f64) {
        for (block, chunk) in coefficients
            .blocks_mut()
            .iter_mut()
            .zip(bits.chunks(POSITION_TABLE.len()))
        {
            for (&bit, &(r, c)) in chunk.iter().zip(POSITION_TABLE.iter()) {
                block[r][c] = embed_bit(block[r][c], bit, step);
            }
        }
    }

    #[test]
    fn test_roundtrip_simple() {
        let mut coefficients = textured_coefficients(8, 8);
        let message = b"Hello World";

        QimEncoder::new().embed(&mut coefficients, message).unwrap();
        let extracted = QimDecoder::new().extract(&coefficients).unwrap();

        assert_eq!(extracted, message);
    }

    #[test]
    fn test_roundtrip_empty_message() {
        let mut coefficients = textured_coefficients(5, 1);

        QimEncoder::new().embed(&mut coefficients, b"").unwrap();
        let extracted = QimDecoder::new().extract(&coefficients).unwrap();

        assert!(extracted.is_empty());
    }

    #[test]
    fn test_binary_data() {
        let mut coefficients = textured_coefficients(16, 16);
        let message: Vec<u8> = (0..=255).collect();

        QimEncoder::new().embed(&mut coefficients, &message).unwrap();
        let extracted = QimDecoder::new().extract(&coefficients).unwrap();

        assert_eq!(extracted, message);
    }

    #[test]
    fn should_reject_carrier_without_frame() {
        let coefficients = CoefficientArray::zeroed(64, 64);
        match QimDecoder::new().extract(&coefficients) {
            Err(QimError::MagicMismatch { expected, found }) => {
                assert_eq!(expected, FRAME_MAGIC);
                assert_eq!(found, [0; 4]);
            }
            other => panic!("expected magic mismatch, got {other:?}"),
        }
    }

    #[test]
    fn should_reject_carrier_too_small_for_header() {
        let coefficients = CoefficientArray::zeroed(8, 32);
        assert!(matches!(
            QimDecoder::new().extract(&coefficients),
            Err(QimError::TruncatedHeader { available: 56 })
        ));
    }

    #[test]
    fn should_reject_implausible_length() {
        let mut coefficients = textured_coefficients(8, 8);
        let step = QimDecoder::new().options().quantization_step();
        let header = Header { payload_len: 105 };
        let bits = crate::frame::bytes_to_bits(&header.to_bytes()).unwrap();
        write_raw_bits(&mut coefficients, &bits, step);

        match QimDecoder::new().extract(&coefficients) {
            Err(QimError::ImplausibleLength {
                declared,
                required,
                available,
            }) => {
                assert_eq!(declared, 105);
                assert_eq!(required, 904);
                assert_eq!(available, 896);
            }
            other => panic!("expected implausible length, got {other:?}"),
        }
    }

    #[test]
    fn wrong_step_does_not_yield_payload() {
        let mut coefficients = textured_coefficients(8, 8);
        let message = b"Secret";

        QimEncoder::new().embed(&mut coefficients, message).unwrap();
        let options = QimOptions::default().with_step(7.0).unwrap();
        let result = QimDecoder::with_options(options).extract(&coefficients);

        match result {
            Err(e) => assert!(e.is_framing_error()),
            Ok(extracted) => assert_ne!(extracted, message),
        }
    }
}
