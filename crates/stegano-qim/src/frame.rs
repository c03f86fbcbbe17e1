//! In-band framing of the payload.
//!
//! A frame is `magic (4 bytes) ∥ length (u32, big endian) ∥ payload`, expanded
//! into bits MSB first. Encoder and decoder both take the layout from the
//! constants in this module.

use bitstream_io::{BigEndian, BitRead, BitReader, BitWrite, BitWriter};
use byteorder::{ByteOrder, BigEndian as ByteBigEndian};

use crate::error::{QimError, Result};

/// Marks the start of every embedded frame.
pub const FRAME_MAGIC: [u8; 4] = *b"QIM1";

/// Header size in bytes: 4 bytes magic + 4 bytes payload length.
pub const HEADER_LEN: usize = 8;

/// Header size in bits.
pub const HEADER_BITS: usize = HEADER_LEN * 8;

/// Maximum payload length in bytes (2^32 - 1).
pub const MAX_PAYLOAD_LEN: usize = u32::MAX as usize;

/// Frame header carrying the payload length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub payload_len: u32,
}

impl Header {
    pub fn for_payload(payload: &[u8]) -> Result<Self> {
        let payload_len =
            u32::try_from(payload.len()).map_err(|_| QimError::ExceedsMaxPayloadLength {
                payload_len: payload.len(),
            })?;
        Ok(Self { payload_len })
    }

    pub fn to_bytes(&self) -> [u8; HEADER_LEN] {
        let mut bytes = [0u8; HEADER_LEN];
        bytes[..4].copy_from_slice(&FRAME_MAGIC);
        ByteBigEndian::write_u32(&mut bytes[4..], self.payload_len);
        bytes
    }

    /// Parses header bytes, rejecting anything without the frame magic.
    pub fn parse(bytes: &[u8; HEADER_LEN]) -> Result<Self> {
        let mut found = [0u8; 4];
        found.copy_from_slice(&bytes[..4]);
        if found != FRAME_MAGIC {
            return Err(QimError::MagicMismatch {
                expected: FRAME_MAGIC,
                found,
            });
        }

        Ok(Self {
            payload_len: ByteBigEndian::read_u32(&bytes[4..]),
        })
    }

    /// Bits occupied by header and payload together.
    pub fn frame_bits(&self) -> u64 {
        HEADER_BITS as u64 + self.payload_len as u64 * 8
    }
}

/// Header bits followed by payload bits.
pub fn frame_bits(payload: &[u8]) -> Result<Vec<bool>> {
    let header = Header::for_payload(payload)?;
    let mut bits = bytes_to_bits(&header.to_bytes())?;
    bits.extend(bytes_to_bits(payload)?);
    Ok(bits)
}

/// Expands bytes into bits, most significant bit first.
pub fn bytes_to_bits(bytes: &[u8]) -> Result<Vec<bool>> {
    let mut reader = BitReader::endian(bytes, BigEndian);
    let mut bits = Vec::with_capacity(bytes.len() * 8);
    for _ in 0..bytes.len() * 8 {
        bits.push(reader.read_bit()?);
    }
    Ok(bits)
}

/// Packs bits into bytes, most significant bit first.
///
/// A trailing group of fewer than 8 bits is padded with zeros.
pub fn bits_to_bytes(bits: &[bool]) -> Result<Vec<u8>> {
    let mut writer = BitWriter::endian(Vec::with_capacity(bits.len().div_ceil(8)), BigEndian);
    for &bit in bits {
        writer.write_bit(bit)?;
    }
    writer.byte_align()?;
    Ok(writer.into_writer())
}
