//! Sentinel-aware zone occupancy counts.

use serde::{Serialize, Serializer};

/// Reserved byte meaning "field not applicable / not set".
pub const NOT_SET: u8 = 255;

/// Occupancy count reported for a single zone slot.
///
/// The device reserves the byte value 255 to mean the zone is not
/// configured; every other value is a people count in `[0, 254]`.
/// Serializes to the string `"not set"` or the plain integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneOccupancy {
    NotSet,
    Count(u8),
}

impl From<u8> for ZoneOccupancy {
    fn from(byte: u8) -> Self {
        if byte == NOT_SET {
            ZoneOccupancy::NotSet
        } else {
            ZoneOccupancy::Count(byte)
        }
    }
}

impl Serialize for ZoneOccupancy {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            ZoneOccupancy::NotSet => serializer.serialize_str("not set"),
            ZoneOccupancy::Count(n) => serializer.serialize_u8(*n),
        }
    }
}
