//! Frame codec: length-prefixed payloads over a blocking stream.
//!
//! Wire format:
//! ```text
//! ┌────────────┬───────────────────────┐
//! │ Length     │ Payload               │
//! │ u16 LE     │ exactly Length bytes  │
//! └────────────┴───────────────────────┘
//! ```
//!
//! The prefix always equals the exact byte count of the payload, so the
//! receiver knows how much to read before parsing. No maximum frame size
//! is enforced beyond the 16-bit length field itself.

use std::io::{Read, Write};

use bytes::Bytes;

use super::wire::{LENGTH_PREFIX_SIZE, MAX_PAYLOAD_SIZE};
use crate::error::{NxtError, Result};

/// Write a length-prefixed frame and flush.
///
/// Fails with `InvalidArgument` if the payload does not fit the 16-bit
/// length prefix. Command builders never produce such payloads.
pub fn write_frame<W: Write>(stream: &mut W, payload: &[u8]) -> Result<()> {
    if payload.len() > MAX_PAYLOAD_SIZE {
        return Err(NxtError::InvalidArgument(format!(
            "payload too long for frame: {} bytes (max {MAX_PAYLOAD_SIZE})",
            payload.len()
        )));
    }
    stream.write_all(&(payload.len() as u16).to_le_bytes())?;
    stream.write_all(payload)?;
    stream.flush()?;
    Ok(())
}

/// Read one length-prefixed frame, blocking until it is complete.
///
/// Reads the 2-byte length, then exactly that many payload bytes. Fails
/// with `Io` (UnexpectedEof) if the stream closes before the declared
/// length is satisfied.
pub fn read_frame<R: Read>(stream: &mut R) -> Result<Bytes> {
    let mut prefix = [0u8; LENGTH_PREFIX_SIZE];
    stream.read_exact(&mut prefix)?;
    let length = u16::from_le_bytes(prefix) as usize;

    let mut payload = vec![0u8; length];
    stream.read_exact(&mut payload)?;
    Ok(Bytes::from(payload))
}
