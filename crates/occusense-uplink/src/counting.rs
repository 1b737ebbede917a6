//! The fixed-layout counting-data frame.
//!
//! Layout: status flags (byte 0), aggregate occupancy (byte 1), then one
//! sentinel-aware occupancy byte per zone slot (bytes 2..9).

use crate::Result;
use occusense_codec::{decode_flags, CodecError, ZoneOccupancy};
use serde_json::{json, Map, Value};

/// Zone slots reported in every counting frame.
pub const ZONE_SLOTS: usize = 8;

/// Flags byte + global byte + one byte per zone slot.
const FRAME_LEN: usize = 2 + ZONE_SLOTS;

/// Decodes a counting-data frame into its wire JSON object.
///
/// Trailing bytes beyond the fixed layout are ignored so longer frames
/// from newer firmware still decode.
pub fn decode_counting_frame(bytes: &[u8]) -> Result<Map<String, Value>> {
    if bytes.len() < FRAME_LEN {
        return Err(CodecError::InsufficientData {
            expected: FRAME_LEN,
            actual: bytes.len(),
        }
        .into());
    }

    let mut flags = Map::new();
    for flag in decode_flags(bytes[0]) {
        flags.insert(flag.name().to_string(), json!(true));
    }

    let mut data = Map::new();
    data.insert("flags".to_string(), Value::Object(flags));
    data.insert(
        "zone_global".to_string(),
        json!(ZoneOccupancy::from(bytes[1])),
    );
    for slot in 0..ZONE_SLOTS {
        data.insert(
            format!("zone_{slot}"),
            json!(ZoneOccupancy::from(bytes[2 + slot])),
        );
    }

    Ok(data)
}
