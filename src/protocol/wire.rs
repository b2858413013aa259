//! Low-level value encoding and decoding.
//!
//! Shared by the command builders and reply parsers:
//! - Unsigned little-endian integer get/put at arbitrary offsets
//! - NUL-terminated string encoding (low 8 bits of each character)
//! - Lowercase hex rendering for addresses and debug dumps
//!
//! All multi-byte integers on the wire are little-endian.

use bytes::BufMut;

use crate::error::{NxtError, Result};

/// Reply tag: the first byte of every well-formed reply payload.
pub const REPLY_TAG: u8 = 0x02;

/// Maximum filename length in characters ("15.3" naming).
pub const MAX_FILENAME_LEN: usize = 19;

/// Maximum brick name length in characters.
pub const MAX_NAME_LEN: usize = 15;

/// Size of the frame length prefix in bytes.
pub const LENGTH_PREFIX_SIZE: usize = 2;

/// Maximum payload size representable by the 16-bit length prefix.
pub const MAX_PAYLOAD_SIZE: usize = 65535;

/// Check a string against a length limit, failing with `InvalidArgument`.
///
/// The limit counts characters, matching the low-byte-per-character wire
/// encoding. Called by builders before any bytes are produced.
pub fn check_len(value: &str, max: usize, what: &str) -> Result<()> {
    let len = value.chars().count();
    if len > max {
        return Err(NxtError::InvalidArgument(format!(
            "{what} too long: {len} characters (max {max})"
        )));
    }
    Ok(())
}

/// Append each character's low 8 bits followed by a NUL terminator.
///
/// Non-ASCII characters are masked to their low byte, not rejected.
/// Length limits are validated by callers before encoding.
pub fn put_str_z(buf: &mut impl BufMut, s: &str) {
    for c in s.chars() {
        buf.put_u8((c as u32 & 0xff) as u8);
    }
    buf.put_u8(0);
}

/// Read the byte at `offset`.
pub fn get_u8(buf: &[u8], offset: usize) -> Result<u8> {
    buf.get(offset).copied().ok_or_else(|| short_reply(buf.len(), offset + 1))
}

/// Decode an unsigned 16-bit little-endian integer at `offset`.
pub fn get_u16_le(buf: &[u8], offset: usize) -> Result<u16> {
    let bytes = buf
        .get(offset..offset + 2)
        .ok_or_else(|| short_reply(buf.len(), offset + 2))?;
    Ok(u16::from_le_bytes([bytes[0], bytes[1]]))
}

/// Decode an unsigned 32-bit little-endian integer at `offset`.
pub fn get_u32_le(buf: &[u8], offset: usize) -> Result<u32> {
    let bytes = buf
        .get(offset..offset + 4)
        .ok_or_else(|| short_reply(buf.len(), offset + 4))?;
    Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
}

fn short_reply(actual: usize, needed: usize) -> NxtError {
    NxtError::Protocol(format!("reply too short: {actual} bytes, need {needed}"))
}

/// Render bytes as lowercase hex, exactly two digits per byte.
///
/// # Example
///
/// ```
/// use nxt_client::protocol::wire::hex_string;
///
/// assert_eq!(hex_string(&[0x00, 0x16, 0x53]), "001653");
/// ```
pub fn hex_string(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}
