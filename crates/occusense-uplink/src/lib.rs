//! Command registry and uplink dispatch for a LoRaWAN people-counting
//! sensor.
//!
//! The sensor multiplexes two payload families over its LoRaWAN ports: a
//! fixed-layout counting-data frame (status flags plus per-zone occupancy
//! counts) and command channels carrying get-style responses and
//! acknowledgements of previously issued downlink commands.
//!
//! [`UplinkFormatter`] is the network-server entry point:
//!
//! ```
//! use occusense_uplink::{Uplink, UplinkFormatter};
//!
//! let formatter = UplinkFormatter::new().unwrap();
//! let result = formatter
//!     .decode(&Uplink { f_port: 100, bytes: vec![1, 5, 220] })
//!     .unwrap();
//! assert_eq!(result["data"]["cmd"]["value"]["mounting_height"], 1500);
//! ```
//!
//! The registry is built once at startup and never mutated afterwards, so
//! a single formatter can serve concurrent decode calls without locking.

pub mod commands;
pub mod counting;
mod error;
pub mod formatter;
pub mod frame;
pub mod registry;

pub use error::{Result, UplinkError};
pub use formatter::{Uplink, UplinkFormatter, DEFAULT_COUNTING_PORT};
pub use frame::{parse_command_frame, CommandFrame, ACK_SENTINEL};
pub use registry::{CommandDescriptor, CommandKey, CommandRegistry, PayloadDecodeFn};
