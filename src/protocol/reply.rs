//! Reply validation and fixed-offset parsers.
//!
//! Every reply payload begins with the reply tag `0x02`; anything else is
//! a malformed or protocol-mismatched response. The fields that follow
//! sit at fixed offsets, specific to each operation:
//!
//! ```text
//! battery level:    [3..5]  millivolts, u16 LE
//! open read/write:  [3]     handle     [4..8]   length, u32 LE
//! firmware version: [3]     protocol tenths     [4]  protocol integer
//!                   [5]     firmware tenths     [6]  firmware integer
//! device info:      [3..17] name (NUL-padded)   [18..24] bluetooth address
//!                   [25..29] signal strength    [29..33] free user flash
//! ```
//!
//! Each parser bounds-checks before indexing; a reply shorter than its
//! layout fails with a `Protocol` error, never a panic.

use super::wire::{get_u16_le, get_u32_le, get_u8, hex_string, REPLY_TAG};
use crate::error::{NxtError, Result};
use crate::types::{DeviceInfo, FileRef, FirmwareVersion};

const NAME_OFFSET: usize = 3;
const NAME_LEN: usize = 14;
const ADDR_OFFSET: usize = 18;
const ADDR_LEN: usize = 6;
const SIGNAL_OFFSET: usize = 25;
const FLASH_OFFSET: usize = 29;

/// Minimum length of a `get device info` reply.
pub const DEVICE_INFO_LEN: usize = 33;

/// Validate the reply tag byte.
///
/// Fails with `Protocol("malformed response")` if the payload is empty or
/// its first byte is not [`REPLY_TAG`].
pub fn check_reply(payload: &[u8]) -> Result<()> {
    match payload.first() {
        Some(&REPLY_TAG) => Ok(()),
        _ => Err(NxtError::Protocol("malformed response".to_string())),
    }
}

/// Decode a `get battery level` reply into volts.
pub fn parse_battery_level(payload: &[u8]) -> Result<f32> {
    check_reply(payload)?;
    let millivolts = get_u16_le(payload, 3)?;
    Ok(millivolts as f32 / 1000.0)
}

/// Decode an `open read`/`open write` reply into a [`FileRef`].
///
/// `name` is the caller-supplied filename; the device reply carries only
/// the handle and length.
pub fn parse_open(name: &str, payload: &[u8]) -> Result<FileRef> {
    check_reply(payload)?;
    Ok(FileRef {
        name: name.to_string(),
        handle: get_u8(payload, 3)?,
        length: get_u32_le(payload, 4)?,
    })
}

/// Decode a `get firmware version` reply.
///
/// Each version is a fixed-point pair on the wire, tenths byte first.
pub fn parse_firmware_version(payload: &[u8]) -> Result<FirmwareVersion> {
    check_reply(payload)?;
    Ok(FirmwareVersion {
        protocol: fixed_point(get_u8(payload, 4)?, get_u8(payload, 3)?),
        firmware: fixed_point(get_u8(payload, 6)?, get_u8(payload, 5)?),
    })
}

fn fixed_point(integer: u8, tenths: u8) -> f32 {
    integer as f32 + tenths as f32 / 10.0
}

/// Decode a `get device info` reply.
///
/// The name occupies a fixed 14-byte window; the logical name runs up to
/// the first NUL, or the whole window if none is present.
pub fn parse_device_info(payload: &[u8]) -> Result<DeviceInfo> {
    check_reply(payload)?;
    if payload.len() < DEVICE_INFO_LEN {
        return Err(NxtError::Protocol(format!(
            "reply too short: {} bytes, need {DEVICE_INFO_LEN}",
            payload.len()
        )));
    }

    let window = &payload[NAME_OFFSET..NAME_OFFSET + NAME_LEN];
    let logical = match window.iter().position(|&b| b == 0) {
        Some(end) => &window[..end],
        None => window,
    };
    let name = logical.iter().map(|&b| b as char).collect();

    Ok(DeviceInfo {
        name,
        bluetooth_address: hex_string(&payload[ADDR_OFFSET..ADDR_OFFSET + ADDR_LEN]),
        signal_strength: get_u32_le(payload, SIGNAL_OFFSET)? as i32,
        free_user_flash: get_u32_le(payload, FLASH_OFFSET)? as i32,
    })
}
