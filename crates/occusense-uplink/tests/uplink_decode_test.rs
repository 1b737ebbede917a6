//! End-to-end decode tests using the network-server reference vectors.
//!
//! Each test feeds a `{fPort, bytes}` uplink through the formatter and
//! compares the full result object against the wire JSON the network
//! server expects.

use occusense_uplink::{Uplink, UplinkFormatter};
use serde_json::json;

fn decode(f_port: u8, bytes: &[u8]) -> serde_json::Value {
    UplinkFormatter::new()
        .unwrap()
        .decode(&Uplink {
            f_port,
            bytes: bytes.to_vec(),
        })
        .unwrap()
}

#[test]
fn test_counting_uplink_no_zones_created() {
    let result = decode(1, &[0, 0, 255, 255, 255, 255, 255, 255, 255, 255]);
    assert_eq!(
        result,
        json!({
            "data": {
                "flags": {},
                "zone_global": 0,
                "zone_0": "not set",
                "zone_1": "not set",
                "zone_2": "not set",
                "zone_3": "not set",
                "zone_4": "not set",
                "zone_5": "not set",
                "zone_6": "not set",
                "zone_7": "not set",
            }
        })
    );
}

#[test]
fn test_counting_uplink_all_zones_created() {
    let result = decode(1, &[0, 8, 1, 1, 1, 1, 1, 1, 1, 1]);
    assert_eq!(
        result,
        json!({
            "data": {
                "flags": {},
                "zone_global": 8,
                "zone_0": 1,
                "zone_1": 1,
                "zone_2": 1,
                "zone_3": 1,
                "zone_4": 1,
                "zone_5": 1,
                "zone_6": 1,
                "zone_7": 1,
            }
        })
    );
}

#[test]
fn test_counting_uplink_zone_0_min_and_max() {
    let result = decode(1, &[0, 0, 0, 255, 255, 255, 255, 255, 255, 255]);
    assert_eq!(result["data"]["zone_global"], json!(0));
    assert_eq!(result["data"]["zone_0"], json!(0));
    assert_eq!(result["data"]["zone_1"], json!("not set"));

    let result = decode(1, &[0, 254, 254, 255, 255, 255, 255, 255, 255, 255]);
    assert_eq!(result["data"]["zone_global"], json!(254));
    assert_eq!(result["data"]["zone_0"], json!(254));
}

#[test]
fn test_counting_uplink_single_flags() {
    let result = decode(1, &[1, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
    assert_eq!(result["data"]["flags"], json!({ "STOPPED": true }));

    let result = decode(1, &[2, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
    assert_eq!(result["data"]["flags"], json!({ "STUCK": true }));

    let result = decode(1, &[4, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
    assert_eq!(
        result["data"]["flags"],
        json!({ "WIFI_ACCESS_POINT_ON": true })
    );

    let result = decode(1, &[8, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
    assert_eq!(result["data"]["flags"], json!({ "WARMUP": true }));
}

#[test]
fn test_counting_uplink_all_flags() {
    let result = decode(1, &[15, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
    assert_eq!(
        result["data"]["flags"],
        json!({
            "STOPPED": true,
            "STUCK": true,
            "WIFI_ACCESS_POINT_ON": true,
            "WARMUP": true,
        })
    );
}

#[test]
fn test_get_height_response() {
    let result = decode(100, &[1, 5, 220]);
    assert_eq!(
        result,
        json!({
            "data": {
                "cmd": {
                    "name": "CMD_GET_HEIGHT",
                    "id": 1,
                    "success": true,
                    "value": { "mounting_height": 1500 },
                }
            }
        })
    );
}

#[test]
fn test_set_height_acknowledgement() {
    let result = decode(100, &[255, 129, 0]);
    assert_eq!(
        result,
        json!({
            "data": {
                "cmd": {
                    "name": "CMD_SET_HEIGHT",
                    "id": 129,
                    "success": true,
                }
            }
        })
    );
}

#[test]
fn test_get_zone_coordinates_rectangle() {
    let result = decode(101, &[2, 32, 0, 0, 0, 24, 6]);
    assert_eq!(
        result["data"]["cmd"]["value"],
        json!({
            "type": "rectangle",
            "zone_id": 0,
            "point_1": [0, 0],
            "point_2": [3, 3],
        })
    );
    assert_eq!(
        result["data"]["cmd"]["name"],
        json!("CMD_GET_ZONE_COORDINATES")
    );
}

#[test]
fn test_get_zone_coordinates_unsupported_shape() {
    let result = decode(101, &[2, 64, 0, 0, 0, 24, 6]);
    assert_eq!(
        result["data"]["cmd"]["value"],
        json!({ "type": "not supported", "zone_id": 0 })
    );
}

#[test]
fn test_get_device_use_case_response() {
    let result = decode(100, &[3, 2]);
    assert_eq!(result["data"]["cmd"]["value"], json!("meeting room"));

    // Enum codes from newer firmware decode to the sentinel, not an error
    let result = decode(100, &[3, 9]);
    assert_eq!(result["data"]["cmd"]["value"], json!("not recognized"));
}

#[test]
fn test_get_software_version_response() {
    let result = decode(4, &[1, 0x32, 0x2E, 0x31, 0x2E, 0x30, 255, 255]);
    assert_eq!(result["data"]["cmd"]["value"], json!("2.1.0"));
    assert_eq!(
        result["data"]["cmd"]["name"],
        json!("CMD_GET_SOFTWARE_VERSION")
    );

    let result = decode(4, &[1, 255, 255, 255, 255]);
    assert_eq!(result["data"]["cmd"]["value"], json!("failure to retrieve"));
}

#[test]
fn test_get_access_point_state_response() {
    let result = decode(5, &[1, 1]);
    assert_eq!(result["data"]["cmd"]["value"], json!("ENABLED"));

    let result = decode(5, &[1, 0]);
    assert_eq!(result["data"]["cmd"]["value"], json!("DISABLED"));
}

#[test]
fn test_get_analog_output_response() {
    let result = decode(8, &[1, 5, 220, 1]);
    assert_eq!(
        result["data"]["cmd"]["value"],
        json!({ "max_occupancy": 1500, "state": "ENABLED" })
    );
}

#[test]
fn test_get_active_zones_response() {
    let result = decode(101, &[5, 0b0000_0101]);
    assert_eq!(
        result["data"]["cmd"]["value"],
        json!({ "active_zones": [0, 2] })
    );
}

#[test]
fn test_reboot_acknowledgement() {
    let result = decode(3, &[255, 0, 0]);
    assert_eq!(
        result,
        json!({
            "data": {
                "cmd": {
                    "name": "CMD_REBOOT",
                    "id": 0,
                    "success": true,
                }
            }
        })
    );
}

#[test]
fn test_rejoin_acknowledgement() {
    let result = decode(6, &[255, 0, 0]);
    assert_eq!(result["data"]["cmd"]["name"], json!("CMD_REJOIN"));
}

#[test]
fn test_uplink_input_deserializes_network_server_shape() {
    let uplink: Uplink =
        serde_json::from_value(json!({ "fPort": 100, "bytes": [1, 5, 220] })).unwrap();
    assert_eq!(uplink.f_port, 100);
    assert_eq!(uplink.bytes, vec![1, 5, 220]);
}
