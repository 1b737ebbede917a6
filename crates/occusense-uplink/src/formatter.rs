//! Top-level uplink dispatch.

use crate::counting::decode_counting_frame;
use crate::frame::{parse_command_frame, CommandFrame};
use crate::registry::{CommandDescriptor, CommandRegistry};
use crate::Result;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use tracing::{debug, instrument, warn};

/// Default port carrying counting-data frames. Deployments may remap
/// this (83 is a common alternate); see [`UplinkFormatter::with_counting_port`].
pub const DEFAULT_COUNTING_PORT: u8 = 1;

/// An uplink as handed over by the network-server payload-formatter hook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Uplink {
    #[serde(rename = "fPort")]
    pub f_port: u8,
    pub bytes: Vec<u8>,
}

/// Stateless payload formatter for sensor uplinks.
///
/// Holds the immutable command registry and the deployment's counting
/// port; safe to share across threads and decode calls.
#[derive(Debug, Clone)]
pub struct UplinkFormatter {
    counting_port: u8,
    registry: CommandRegistry,
}

impl UplinkFormatter {
    /// Creates a formatter with the standard command set and the default
    /// counting port.
    pub fn new() -> Result<Self> {
        Self::with_counting_port(DEFAULT_COUNTING_PORT)
    }

    /// Creates a formatter for a deployment with a remapped counting port.
    pub fn with_counting_port(counting_port: u8) -> Result<Self> {
        Ok(Self {
            counting_port,
            registry: CommandRegistry::standard()?,
        })
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Decodes one uplink into the network-server result object.
    ///
    /// Counting-data frames decode to
    /// `{"data": {"flags", "zone_global", "zone_0".."zone_7"}}`; every
    /// other port is a command channel and decodes to
    /// `{"data": {"cmd": {"name", "id", "success", "value"?}}}`. A port
    /// carrying neither format fails with
    /// [`UplinkError::NotRegistered`](crate::UplinkError::NotRegistered).
    #[instrument(skip_all, fields(fport = uplink.f_port, payload_size = uplink.bytes.len()))]
    pub fn decode(&self, uplink: &Uplink) -> Result<Value> {
        if uplink.f_port == self.counting_port {
            debug!("decoding counting-data frame");
            let data = decode_counting_frame(&uplink.bytes)?;
            return Ok(json!({ "data": data }));
        }

        match parse_command_frame(&uplink.bytes)? {
            CommandFrame::Ack { cmd_id } => {
                let descriptor = self.registry.lookup(uplink.f_port, cmd_id)?;
                debug!(command = descriptor.name, cmd_id, "command acknowledged");
                Ok(command_result(descriptor, None))
            }
            CommandFrame::Response { cmd_id, payload } => {
                let descriptor = self.registry.lookup(uplink.f_port, cmd_id)?;
                debug!(command = descriptor.name, cmd_id, "decoding command response");
                let value = match descriptor.decoder {
                    Some(decoder) => Some(decoder(payload)?),
                    None => {
                        warn!(
                            command = descriptor.name,
                            "response for a command without a payload decoder"
                        );
                        None
                    }
                };
                Ok(command_result(descriptor, value))
            }
        }
    }
}

fn command_result(descriptor: &CommandDescriptor, value: Option<Value>) -> Value {
    let mut cmd = Map::new();
    cmd.insert("name".to_string(), json!(descriptor.name));
    cmd.insert("id".to_string(), json!(descriptor.cmd_id));
    cmd.insert("success".to_string(), json!(true));
    if let Some(value) = value {
        cmd.insert("value".to_string(), value);
    }
    json!({ "data": { "cmd": cmd } })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::UplinkError;

    fn formatter() -> UplinkFormatter {
        UplinkFormatter::new().unwrap()
    }

    fn uplink(f_port: u8, bytes: &[u8]) -> Uplink {
        Uplink {
            f_port,
            bytes: bytes.to_vec(),
        }
    }

    #[test]
    fn test_counting_port_dispatch() {
        let result = formatter()
            .decode(&uplink(1, &[0, 5, 5, 255, 255, 255, 255, 255, 255, 255]))
            .unwrap();
        assert_eq!(result["data"]["zone_global"], json!(5));
    }

    #[test]
    fn test_remapped_counting_port() {
        let formatter = UplinkFormatter::with_counting_port(83).unwrap();

        let result = formatter
            .decode(&uplink(83, &[0, 2, 2, 255, 255, 255, 255, 255, 255, 255]))
            .unwrap();
        assert_eq!(result["data"]["zone_global"], json!(2));

        // Port 1 is now an (empty) command channel
        let err = formatter.decode(&uplink(1, &[1, 0])).unwrap_err();
        assert!(matches!(err, UplinkError::NotRegistered { .. }));
    }

    #[test]
    fn test_unknown_port_is_not_registered() {
        let err = formatter().decode(&uplink(42, &[1, 0])).unwrap_err();
        assert_eq!(err.to_string(), "command not registered");
    }

    #[test]
    fn test_get_response_carries_value() {
        let result = formatter().decode(&uplink(100, &[1, 5, 220])).unwrap();
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
    fn test_ack_has_no_value() {
        let result = formatter().decode(&uplink(100, &[255, 129, 0])).unwrap();
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
    fn test_ack_for_unregistered_command() {
        let err = formatter().decode(&uplink(100, &[255, 200, 0])).unwrap_err();
        assert_eq!(
            err,
            UplinkError::NotRegistered {
                fport: 100,
                cmd_id: 200
            }
        );
    }

    #[test]
    fn test_payload_error_aborts_decode() {
        // CMD_GET_HEIGHT with a 1-byte payload
        let err = formatter().decode(&uplink(100, &[1, 5])).unwrap_err();
        assert_eq!(err.to_string(), "uint16 must have exactly 2 bytes");
    }
}
