//! Device status flags packed into the first byte of a counting frame.

use crate::bytes::is_bit_set;
use serde::Serialize;

/// A single device status flag.
///
/// Serializes to the wire name used by the network-server JSON
/// (`STOPPED`, `STUCK`, `WIFI_ACCESS_POINT_ON`, `WARMUP`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusFlag {
    Stopped,
    Stuck,
    WifiAccessPointOn,
    Warmup,
}

impl StatusFlag {
    /// Wire name of this flag.
    pub fn name(self) -> &'static str {
        match self {
            StatusFlag::Stopped => "STOPPED",
            StatusFlag::Stuck => "STUCK",
            StatusFlag::WifiAccessPointOn => "WIFI_ACCESS_POINT_ON",
            StatusFlag::Warmup => "WARMUP",
        }
    }

    fn bit(self) -> u8 {
        match self {
            StatusFlag::Stopped => 0,
            StatusFlag::Stuck => 1,
            StatusFlag::WifiAccessPointOn => 2,
            StatusFlag::Warmup => 3,
        }
    }
}

const ALL_FLAGS: [StatusFlag; 4] = [
    StatusFlag::Stopped,
    StatusFlag::Stuck,
    StatusFlag::WifiAccessPointOn,
    StatusFlag::Warmup,
];

/// Decodes a status byte into the set of raised flags.
///
/// The representation is sparse: a flag that is absent from the result is
/// not raised. Bits 4-7 of the status byte are unused by the device and
/// never produce a flag.
pub fn decode_flags(byte: u8) -> Vec<StatusFlag> {
    ALL_FLAGS
        .into_iter()
        .filter(|flag| is_bit_set(byte, flag.bit()))
        .collect()
}
