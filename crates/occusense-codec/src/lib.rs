//! Primitive binary field codecs for occupancy-sensor payloads.
//!
//! Everything in this crate is a pure function of its input bytes: bit
//! tests, exact-width big-endian integers, sentinel-aware occupancy
//! counts, status-flag sets and packed zone geometry. The command
//! registry and uplink dispatch built on top of these live in
//! `occusense-uplink`.

pub mod bytes;
mod error;
pub mod flags;
pub mod occupancy;
pub mod zone;

pub use bytes::{decode_uint16, decode_uint32, is_bit_set};
pub use error::{CodecError, Result};
pub use flags::{decode_flags, StatusFlag};
pub use occupancy::ZoneOccupancy;
pub use zone::{decode_zone_shape, ZoneShape};
