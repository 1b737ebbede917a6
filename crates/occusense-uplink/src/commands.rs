//! The fixed protocol command set and its payload decoders.
//!
//! Each downlink command travels on a dedicated LoRaWAN port; get-style
//! commands carry a response payload decoded by one of the functions
//! below, set-style commands are only ever echoed back as
//! acknowledgements. Set ids mirror their get counterpart with the high
//! bit raised (`CMD_GET_HEIGHT` 0x01, `CMD_SET_HEIGHT` 0x81).

use crate::registry::CommandRegistry;
use crate::{Result, UplinkError};
use occusense_codec::{decode_uint16, decode_zone_shape, is_bit_set, ZoneOccupancy};
use serde_json::{json, Value};

// Command ports
pub const PORT_REBOOT: u16 = 3;
pub const PORT_VERSION: u16 = 4;
pub const PORT_ACCESS_POINT: u16 = 5;
pub const PORT_REJOIN: u16 = 6;
pub const PORT_ANALOG_OUTPUT: u16 = 8;
pub const PORT_DEVICE_CONFIG: u16 = 100;
pub const PORT_ZONE_CONFIG: u16 = 101;

// Command ids, per port
pub const CMD_REBOOT: u16 = 0;
pub const CMD_REJOIN: u16 = 0;
pub const CMD_GET_SOFTWARE_VERSION: u16 = 1;
pub const CMD_GET_MODULE_VERSION: u16 = 2;
pub const CMD_GET_ACCESS_POINT_STATE: u16 = 1;
pub const CMD_SET_ACCESS_POINT_STATE: u16 = 129;
pub const CMD_GET_ANALOG_OUTPUT: u16 = 1;
pub const CMD_SET_ANALOG_OUTPUT: u16 = 129;
pub const CMD_GET_HEIGHT: u16 = 1;
pub const CMD_GET_PUSH_PERIOD: u16 = 2;
pub const CMD_GET_DEVICE_USE_CASE: u16 = 3;
pub const CMD_SET_HEIGHT: u16 = 129;
pub const CMD_SET_PUSH_PERIOD: u16 = 130;
pub const CMD_SET_DEVICE_USE_CASE: u16 = 131;
pub const CMD_GET_OCCUPANCY_ZONE: u16 = 1;
pub const CMD_GET_ZONE_COORDINATES: u16 = 2;
pub const CMD_GET_EXCLUDING_ZONE: u16 = 3;
pub const CMD_GET_EXCLUDING_ZONE_COORDINATES: u16 = 4;
pub const CMD_GET_ACTIVE_ZONES: u16 = 5;
pub const CMD_SET_OCCUPANCY_ZONE: u16 = 129;
pub const CMD_DELETE_OCCUPANCY_ZONE: u16 = 130;

impl CommandRegistry {
    /// Builds the registry for the fixed protocol command set.
    pub fn standard() -> Result<Self> {
        let mut r = Self::new();

        r.register(PORT_REBOOT, "CMD_REBOOT", CMD_REBOOT, None)?;

        r.register(
            PORT_VERSION,
            "CMD_GET_SOFTWARE_VERSION",
            CMD_GET_SOFTWARE_VERSION,
            Some(decode_version),
        )?;
        r.register(
            PORT_VERSION,
            "CMD_GET_MODULE_VERSION",
            CMD_GET_MODULE_VERSION,
            Some(decode_version),
        )?;

        r.register(
            PORT_ACCESS_POINT,
            "CMD_GET_ACCESS_POINT_STATE",
            CMD_GET_ACCESS_POINT_STATE,
            Some(decode_access_point_state),
        )?;
        r.register(
            PORT_ACCESS_POINT,
            "CMD_SET_ACCESS_POINT_STATE",
            CMD_SET_ACCESS_POINT_STATE,
            None,
        )?;

        r.register(PORT_REJOIN, "CMD_REJOIN", CMD_REJOIN, None)?;

        r.register(
            PORT_ANALOG_OUTPUT,
            "CMD_GET_ANALOG_OUTPUT",
            CMD_GET_ANALOG_OUTPUT,
            Some(decode_analog_output),
        )?;
        r.register(
            PORT_ANALOG_OUTPUT,
            "CMD_SET_ANALOG_OUTPUT",
            CMD_SET_ANALOG_OUTPUT,
            None,
        )?;

        r.register(
            PORT_DEVICE_CONFIG,
            "CMD_GET_HEIGHT",
            CMD_GET_HEIGHT,
            Some(decode_height),
        )?;
        r.register(
            PORT_DEVICE_CONFIG,
            "CMD_GET_PUSH_PERIOD",
            CMD_GET_PUSH_PERIOD,
            Some(decode_push_period),
        )?;
        r.register(
            PORT_DEVICE_CONFIG,
            "CMD_GET_DEVICE_USE_CASE",
            CMD_GET_DEVICE_USE_CASE,
            Some(decode_device_use_case),
        )?;
        r.register(PORT_DEVICE_CONFIG, "CMD_SET_HEIGHT", CMD_SET_HEIGHT, None)?;
        r.register(
            PORT_DEVICE_CONFIG,
            "CMD_SET_PUSH_PERIOD",
            CMD_SET_PUSH_PERIOD,
            None,
        )?;
        r.register(
            PORT_DEVICE_CONFIG,
            "CMD_SET_DEVICE_USE_CASE",
            CMD_SET_DEVICE_USE_CASE,
            None,
        )?;

        r.register(
            PORT_ZONE_CONFIG,
            "CMD_GET_OCCUPANCY_ZONE",
            CMD_GET_OCCUPANCY_ZONE,
            Some(decode_occupancy_zone),
        )?;
        r.register(
            PORT_ZONE_CONFIG,
            "CMD_GET_ZONE_COORDINATES",
            CMD_GET_ZONE_COORDINATES,
            Some(decode_zone_coordinates),
        )?;
        r.register(
            PORT_ZONE_CONFIG,
            "CMD_GET_EXCLUDING_ZONE",
            CMD_GET_EXCLUDING_ZONE,
            Some(decode_excluding_zones),
        )?;
        r.register(
            PORT_ZONE_CONFIG,
            "CMD_GET_EXCLUDING_ZONE_COORDINATES",
            CMD_GET_EXCLUDING_ZONE_COORDINATES,
            Some(decode_zone_coordinates),
        )?;
        r.register(
            PORT_ZONE_CONFIG,
            "CMD_GET_ACTIVE_ZONES",
            CMD_GET_ACTIVE_ZONES,
            Some(decode_active_zones),
        )?;
        r.register(
            PORT_ZONE_CONFIG,
            "CMD_SET_OCCUPANCY_ZONE",
            CMD_SET_OCCUPANCY_ZONE,
            None,
        )?;
        r.register(
            PORT_ZONE_CONFIG,
            "CMD_DELETE_OCCUPANCY_ZONE",
            CMD_DELETE_OCCUPANCY_ZONE,
            None,
        )?;

        Ok(r)
    }
}

fn require(payload: &[u8], expected: usize) -> Result<()> {
    if payload.len() < expected {
        return Err(UplinkError::Codec(
            occusense_codec::CodecError::InsufficientData {
                expected,
                actual: payload.len(),
            },
        ));
    }
    Ok(())
}

/// Mounting height in millimetres, 16-bit big-endian.
fn decode_height(payload: &[u8]) -> Result<Value> {
    Ok(json!({ "mounting_height": decode_uint16(payload)? }))
}

/// Reporting period in seconds, 16-bit big-endian.
fn decode_push_period(payload: &[u8]) -> Result<Value> {
    Ok(json!({ "push_period": decode_uint16(payload)? }))
}

/// Use-case byte through the fixed firmware enumeration. Unknown codes
/// decode to "not recognized" so newer firmware stays decodable.
fn decode_device_use_case(payload: &[u8]) -> Result<Value> {
    require(payload, 1)?;
    let label = match payload[0] {
        0 => "open space",
        1 => "installation mode",
        2 => "meeting room",
        3 => "waiting lounge",
        4 => "work office",
        5 => "point of sale",
        _ => "not recognized",
    };
    Ok(json!(label))
}

/// ASCII version string, terminated by 0 or the 255 filler byte. A
/// payload of all 255s is the firmware's "could not read version" reply.
fn decode_version(payload: &[u8]) -> Result<Value> {
    require(payload, 1)?;
    if payload.iter().all(|&b| b == 255) {
        return Ok(json!("failure to retrieve"));
    }
    let end = payload
        .iter()
        .position(|&b| b == 0 || b == 255)
        .unwrap_or(payload.len());
    Ok(json!(String::from_utf8_lossy(&payload[..end])))
}

fn output_state_label(byte: u8) -> &'static str {
    match byte {
        0 => "DISABLED",
        1 => "ENABLED",
        _ => "not recognized",
    }
}

fn decode_access_point_state(payload: &[u8]) -> Result<Value> {
    require(payload, 1)?;
    Ok(json!(output_state_label(payload[0])))
}

/// 16-bit max occupancy threshold plus the output state byte.
fn decode_analog_output(payload: &[u8]) -> Result<Value> {
    require(payload, 3)?;
    Ok(json!({
        "max_occupancy": decode_uint16(&payload[..2])?,
        "state": output_state_label(payload[2]),
    }))
}

/// Zone id plus its sentinel-aware occupancy count.
fn decode_occupancy_zone(payload: &[u8]) -> Result<Value> {
    require(payload, 2)?;
    Ok(json!({
        "zone_id": payload[0],
        "occupancy": ZoneOccupancy::from(payload[1]),
    }))
}

fn decode_zone_coordinates(payload: &[u8]) -> Result<Value> {
    Ok(json!(decode_zone_shape(payload)?))
}

fn zone_mask(byte: u8) -> Vec<u8> {
    (0..8).filter(|&k| is_bit_set(byte, k)).collect()
}

fn decode_active_zones(payload: &[u8]) -> Result<Value> {
    require(payload, 1)?;
    Ok(json!({ "active_zones": zone_mask(payload[0]) }))
}

fn decode_excluding_zones(payload: &[u8]) -> Result<Value> {
    require(payload, 1)?;
    Ok(json!({ "excluding_zones": zone_mask(payload[0]) }))
}
