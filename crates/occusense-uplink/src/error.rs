use occusense_codec::CodecError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UplinkError {
    /// A registry key component is outside the protocol bounds.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: u16,
        max: u16,
    },

    /// No command is registered for this (fport, cmd_id) pair.
    #[error("command not registered")]
    NotRegistered { fport: u8, cmd_id: u8 },

    #[error(transparent)]
    Codec(#[from] CodecError),
}

pub type Result<T> = std::result::Result<T, UplinkError>;
