//! Command-channel frame parsing.
//!
//! A command-channel uplink is either an acknowledgement of a previously
//! issued downlink (leading sentinel byte 255, then the acknowledged
//! command id and a status byte) or a get-style response (leading command
//! id, then the command-specific payload).

use crate::Result;
use occusense_codec::CodecError;

/// Leading byte marking an acknowledgement frame.
pub const ACK_SENTINEL: u8 = 255;

/// Sentinel + cmd id + status byte.
const ACK_HEADER_LEN: usize = 3;

/// A parsed command-channel uplink frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandFrame<'a> {
    /// The device acknowledges executing `cmd_id`. The status byte is
    /// part of the header but carries no information today.
    Ack { cmd_id: u8 },
    /// Response to a get-style command; `payload` is handed to the
    /// command's registered decoder.
    Response { cmd_id: u8, payload: &'a [u8] },
}

/// Splits a command-channel uplink into its frame kind.
pub fn parse_command_frame(bytes: &[u8]) -> Result<CommandFrame<'_>> {
    let first = *bytes.first().ok_or(CodecError::InsufficientData {
        expected: 1,
        actual: 0,
    })?;

    if first == ACK_SENTINEL {
        if bytes.len() < ACK_HEADER_LEN {
            return Err(CodecError::InsufficientData {
                expected: ACK_HEADER_LEN,
                actual: bytes.len(),
            }
            .into());
        }
        return Ok(CommandFrame::Ack { cmd_id: bytes[1] });
    }

    Ok(CommandFrame::Response {
        cmd_id: first,
        payload: &bytes[1..],
    })
}
