//! Composite-keyed command registry.
//!
//! Downlink commands are scoped to the LoRaWAN port they travel on, so
//! the registry key is the (fport, cmd_id) pair as a two-field struct.
//! Two ports may reuse the same command id without colliding.

use crate::{Result, UplinkError};
use serde_json::Value;
use std::collections::HashMap;

/// Decodes the payload bytes of a get-style command response.
pub type PayloadDecodeFn = fn(&[u8]) -> Result<Value>;

/// Registry key: port plus command id, each one byte on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CommandKey {
    pub fport: u8,
    pub cmd_id: u8,
}

/// A registered command.
#[derive(Debug, Clone)]
pub struct CommandDescriptor {
    pub name: &'static str,
    pub cmd_id: u8,
    /// Absent for commands whose responses carry no payload beyond the
    /// acknowledgement (reboot, sets, deletes).
    pub decoder: Option<PayloadDecodeFn>,
}

/// Mapping from (fport, cmd_id) to command descriptors.
///
/// Built once at process start and read-only afterwards; lookups take
/// `&self` and are safe to run concurrently.
#[derive(Debug, Clone, Default)]
pub struct CommandRegistry {
    commands: HashMap<CommandKey, CommandDescriptor>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a command under the (fport, cmd_id) composite key.
    ///
    /// fport must be in `[1, 255]` and cmd_id in `[0, 254]` (255 is the
    /// acknowledgement sentinel). Registering the same key twice replaces
    /// the earlier descriptor: last write wins.
    pub fn register(
        &mut self,
        fport: u16,
        name: &'static str,
        cmd_id: u16,
        decoder: Option<PayloadDecodeFn>,
    ) -> Result<()> {
        if fport < 1 || fport > 255 {
            return Err(UplinkError::OutOfRange {
                field: "fport",
                min: 1,
                max: 255,
            });
        }
        if cmd_id > 254 {
            return Err(UplinkError::OutOfRange {
                field: "cmd_id",
                min: 0,
                max: 254,
            });
        }

        let key = CommandKey {
            fport: fport as u8,
            cmd_id: cmd_id as u8,
        };
        self.commands.insert(
            key,
            CommandDescriptor {
                name,
                cmd_id: key.cmd_id,
                decoder,
            },
        );
        Ok(())
    }

    /// Looks up the command registered for (fport, cmd_id).
    pub fn lookup(&self, fport: u8, cmd_id: u8) -> Result<&CommandDescriptor> {
        self.commands
            .get(&CommandKey { fport, cmd_id })
            .ok_or(UplinkError::NotRegistered { fport, cmd_id })
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
