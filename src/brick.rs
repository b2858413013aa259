//! Protocol engine: the public operation set of the brick.
//!
//! [`Brick`] owns an already-open duplex byte stream (Bluetooth SPP and
//! USB-serial both work; acquisition is the caller's concern) and exposes
//! one method per protocol operation. Every operation is synchronous:
//! build → frame → write, then for reply-expecting operations read →
//! validate → parse.
//!
//! The protocol is strictly half-duplex with one outstanding request:
//! methods take `&mut self` and read each reply in full before returning,
//! so no pipelining or locking discipline is needed. Stream reads block
//! until satisfied; a non-responding device stalls the call. Transports
//! with their own timeout configuration surface expiry as `Io` errors.
//!
//! # Example
//!
//! ```ignore
//! use nxt_client::Brick;
//!
//! let port = serialport::new("/dev/rfcomm0", 115_200).open().unwrap();
//! let mut brick = Brick::new(port);
//!
//! brick.play_tone(440, 500)?;
//! let battery = brick.get_battery_level()?;
//! println!("battery: {battery:.3} V");
//! ```

use std::io::{Read, Write};

use bytes::Bytes;

use crate::error::Result;
use crate::protocol::{command, frame, reply, wire};
use crate::types::{DeviceInfo, FileRef, FirmwareVersion};

/// Protocol engine for a single brick connection.
///
/// Exclusively owns its stream for its lifetime; use [`Brick::into_inner`]
/// to take the stream back.
pub struct Brick<S> {
    stream: S,
    debug: bool,
}

impl<S> Brick<S> {
    /// Wrap an already-open duplex stream.
    pub fn new(stream: S) -> Self {
        Self { stream, debug: false }
    }

    /// Wrap a stream with debug frame dumping enabled.
    pub fn with_debug(stream: S) -> Self {
        Self { stream, debug: true }
    }

    /// Toggle debug mode: every outgoing and incoming payload is logged
    /// as lowercase hex via `tracing::debug!`. Wire behavior is unchanged.
    pub fn set_debug(&mut self, on: bool) {
        self.debug = on;
    }

    /// Whether debug frame dumping is enabled.
    pub fn debug(&self) -> bool {
        self.debug
    }

    /// Consume the engine and return the underlying stream.
    pub fn into_inner(self) -> S {
        self.stream
    }
}

impl<S: Read + Write> Brick<S> {
    fn send(&mut self, payload: &[u8]) -> Result<()> {
        if self.debug {
            tracing::debug!(payload = %wire::hex_string(payload), "send frame");
        }
        frame::write_frame(&mut self.stream, payload)
    }

    fn receive(&mut self) -> Result<Bytes> {
        let payload = frame::read_frame(&mut self.stream)?;
        if self.debug {
            tracing::debug!(payload = %wire::hex_string(&payload), "recv frame");
        }
        Ok(payload)
    }

    /// Load and execute a program stored on the brick.
    pub fn start_program(&mut self, filename: &str) -> Result<()> {
        let cmd = command::start_program(filename)?;
        self.send(&cmd)
    }

    /// Stop execution of the currently running program.
    pub fn stop_program(&mut self) -> Result<()> {
        self.send(&command::stop_program())
    }

    /// Play the sound in the named file, once or looped endlessly.
    pub fn play_sound_file(&mut self, filename: &str, repeat: bool) -> Result<()> {
        let cmd = command::play_sound_file(filename, repeat)?;
        self.send(&cmd)
    }

    /// Play a tone of `frequency` Hz for `duration_ms` milliseconds.
    pub fn play_tone(&mut self, frequency: u16, duration_ms: u16) -> Result<()> {
        self.send(&command::play_tone(frequency, duration_ms))
    }

    /// Send a text message to one of the brick's mailboxes.
    pub fn send_message(&mut self, mailbox: u8, text: &str) -> Result<()> {
        let cmd = command::message_write(mailbox, text)?;
        self.send(&cmd)
    }

    /// Reset the position of the motor on `port` (0-2), relative or
    /// absolute.
    pub fn reset_motor_position(&mut self, port: u8, relative: bool) -> Result<()> {
        let cmd = command::reset_motor_position(port, relative)?;
        self.send(&cmd)
    }

    /// Query the battery voltage in volts.
    pub fn get_battery_level(&mut self) -> Result<f32> {
        self.send(&command::get_battery_level())?;
        let payload = self.receive()?;
        reply::parse_battery_level(&payload)
    }

    /// Halt sound playback.
    pub fn stop_sound_playback(&mut self) -> Result<()> {
        self.send(&command::stop_sound_playback())
    }

    /// Open a file on the brick for reading.
    ///
    /// The returned [`FileRef`] carries the device-assigned handle and the
    /// file length for subsequent read/close commands.
    pub fn open_read(&mut self, filename: &str) -> Result<FileRef> {
        let cmd = command::open_read(filename)?;
        self.send(&cmd)?;
        let payload = self.receive()?;
        reply::parse_open(filename, &payload)
    }

    /// Open a file on the brick for writing.
    pub fn open_write(&mut self, filename: &str) -> Result<FileRef> {
        let cmd = command::open_write(filename)?;
        self.send(&cmd)?;
        let payload = self.receive()?;
        reply::parse_open(filename, &payload)
    }

    /// Query the protocol and firmware versions.
    pub fn get_firmware_version(&mut self) -> Result<FirmwareVersion> {
        self.send(&command::get_firmware_version())?;
        let payload = self.receive()?;
        reply::parse_firmware_version(&payload)
    }

    /// Rename the brick (at most 15 characters).
    pub fn set_brick_name(&mut self, name: &str) -> Result<()> {
        let cmd = command::set_brick_name(name)?;
        self.send(&cmd)
    }

    /// Query the brick's name, Bluetooth address, signal strength, and
    /// free user flash.
    pub fn get_device_info(&mut self) -> Result<DeviceInfo> {
        self.send(&command::get_device_info())?;
        let payload = self.receive()?;
        reply::parse_device_info(&payload)
    }
}
