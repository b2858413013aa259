//! Typed results returned by brick queries.

/// Snapshot of device information returned by `get device info`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceInfo {
    /// Brick name, at most 15 characters.
    pub name: String,
    /// Bluetooth address rendered as 12 lowercase hex digits.
    pub bluetooth_address: String,
    /// Bluetooth signal strength.
    pub signal_strength: i32,
    /// Free user flash in bytes.
    pub free_user_flash: i32,
}

/// Handle to a file opened on the brick, returned by `open read`/`open write`.
///
/// The name is the one the caller supplied, not re-read from the device.
/// The caller uses the handle in subsequent read/write/close commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRef {
    /// File name as requested.
    pub name: String,
    /// Device-assigned file handle.
    pub handle: u8,
    /// File length in bytes; meaningful only for read-opened files.
    pub length: u32,
}

/// Protocol and firmware versions, each an integer part plus a tenths
/// fraction (e.g. firmware 1.3).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FirmwareVersion {
    pub protocol: f32,
    pub firmware: f32,
}
