//! Protocol module - wire values, framing, command builders, reply parsers.
//!
//! This module implements the binary protocol spoken over the stream:
//! - Little-endian value encoding and NUL-terminated strings
//! - `[length: u16 LE][payload]` framing
//! - Per-operation command payload builders
//! - Reply-tag validation and fixed-offset reply parsers

pub mod command;
pub mod frame;
pub mod reply;
pub mod wire;

pub use frame::{read_frame, write_frame};
pub use wire::{MAX_FILENAME_LEN, MAX_NAME_LEN, MAX_PAYLOAD_SIZE, REPLY_TAG};
