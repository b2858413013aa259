//! # nxt-client
//!
//! Command/response protocol client for the LEGO NXT brick.
//!
//! The brick is reachable over any byte-oriented duplex stream — a
//! Bluetooth serial (SPP) channel and USB-serial both work. This crate
//! implements the protocol only: it turns typed operation requests into
//! length-prefixed binary frames, writes them to the stream, reads the
//! matching reply frame, validates it, and decodes it into typed results.
//!
//! Device discovery, pairing, and opening the stream are the caller's
//! concern; [`Brick`] is constructed from an already-open stream.
//!
//! ## Architecture
//!
//! - [`protocol::frame`] — 2-byte little-endian length prefix framing
//! - [`protocol::command`] — one pure payload builder per operation
//! - [`protocol::reply`] — reply-tag validation and fixed-offset parsers
//! - [`Brick`] — the engine: build → frame → write → read → validate → parse
//!
//! ## Example
//!
//! ```ignore
//! use nxt_client::Brick;
//!
//! fn main() -> nxt_client::Result<()> {
//!     let port = serialport::new("/dev/rfcomm0", 115_200).open().unwrap();
//!     let mut brick = Brick::new(port);
//!
//!     brick.play_tone(440, 500)?;
//!     let info = brick.get_device_info()?;
//!     println!("{} @ {}", info.name, info.bluetooth_address);
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod protocol;
pub mod types;

mod brick;

pub use brick::Brick;
pub use error::{NxtError, Result};
pub use types::{DeviceInfo, FileRef, FirmwareVersion};
