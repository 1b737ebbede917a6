//! Packed zone-geometry extraction.
//!
//! A zone-coordinates payload is a control byte followed by a packed
//! coordinate block. The control byte's high nibble selects the shape
//! type and its low nibble the zone id. Rectangles are the only shape
//! the current firmware emits; the two corner points are packed as four
//! 10-bit big-endian fields in half-unit steps.

use crate::{CodecError, Result};
use serde::Serialize;

/// Shape-type code for a rectangular zone (control byte high nibble).
pub const SHAPE_RECTANGLE: u8 = 2;

/// Bytes in a rectangle payload: control byte + 40-bit coordinate block.
const RECTANGLE_LEN: usize = 6;

/// Geometry of a configured zone.
///
/// Shape codes other than rectangle decode to [`ZoneShape::NotSupported`]
/// with the zone id still populated; newer firmware may emit shapes this
/// library does not know about yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum ZoneShape {
    #[serde(rename = "rectangle")]
    Rectangle {
        zone_id: u8,
        point_1: [u16; 2],
        point_2: [u16; 2],
    },
    #[serde(rename = "not supported")]
    NotSupported { zone_id: u8 },
}

/// Decodes a zone-coordinates payload.
pub fn decode_zone_shape(bytes: &[u8]) -> Result<ZoneShape> {
    let control = *bytes.first().ok_or(CodecError::InsufficientData {
        expected: 1,
        actual: 0,
    })?;
    let shape = control >> 4;
    let zone_id = control & 0x0F;

    if shape != SHAPE_RECTANGLE {
        return Ok(ZoneShape::NotSupported { zone_id });
    }

    if bytes.len() < RECTANGLE_LEN {
        return Err(CodecError::InsufficientData {
            expected: RECTANGLE_LEN,
            actual: bytes.len(),
        });
    }

    // Four 10-bit coordinates (x1, y1, x2, y2) in a 40-bit big-endian
    // block, transmitted in half-unit steps.
    let mut block = 0u64;
    for &byte in &bytes[1..RECTANGLE_LEN] {
        block = block << 8 | u64::from(byte);
    }
    let coord = |i: u32| (block >> (30 - 10 * i) & 0x3FF) as u16 >> 1;

    Ok(ZoneShape::Rectangle {
        zone_id,
        point_1: [coord(0), coord(1)],
        point_2: [coord(2), coord(3)],
    })
}
