//! Fixed-width integer and bit-level primitives.

use crate::{CodecError, Result};

/// Returns whether bit `k` (0 = least significant) of `byte` is set.
///
/// Bits above 7 do not exist in a byte; any `k > 7` reports `false`.
pub fn is_bit_set(byte: u8, k: u8) -> bool {
    k < 8 && (byte >> k) & 1 == 1
}

/// Decodes exactly 2 bytes as a big-endian unsigned integer.
pub fn decode_uint16(bytes: &[u8]) -> Result<u16> {
    let raw: [u8; 2] = bytes
        .try_into()
        .map_err(|_| CodecError::LengthMismatch {
            bits: 16,
            expected: 2,
        })?;
    Ok(u16::from_be_bytes(raw))
}

/// Decodes exactly 4 bytes as a big-endian unsigned integer.
pub fn decode_uint32(bytes: &[u8]) -> Result<u32> {
    let raw: [u8; 4] = bytes
        .try_into()
        .map_err(|_| CodecError::LengthMismatch {
            bits: 32,
            expected: 4,
        })?;
    Ok(u32::from_be_bytes(raw))
}
