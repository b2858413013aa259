//! Command payload builders, one per operation.
//!
//! Each builder takes typed arguments, validates static constraints
//! synchronously (no I/O), and returns an owned payload buffer with the
//! two opcode bytes at the front. Length violations fail with
//! `InvalidArgument` before any bytes are produced, so a command is
//! either written in full or not sent at all.
//!
//! # Example
//!
//! ```
//! use nxt_client::protocol::command;
//!
//! let payload = command::play_tone(440, 500);
//! assert_eq!(&payload[..], &[0x80, 0x03, 0xb8, 0x01, 0xf4, 0x01]);
//! ```

use bytes::{BufMut, Bytes, BytesMut};

use super::wire::{check_len, put_str_z, MAX_FILENAME_LEN, MAX_NAME_LEN};
use crate::error::{NxtError, Result};

/// Opcode pairs: the leading two payload bytes of each command.
pub mod opcode {
    pub const START_PROGRAM: [u8; 2] = [0x80, 0x00];
    pub const STOP_PROGRAM: [u8; 2] = [0x80, 0x01];
    pub const PLAY_SOUND_FILE: [u8; 2] = [0x80, 0x02];
    pub const PLAY_TONE: [u8; 2] = [0x80, 0x03];
    pub const MESSAGE_WRITE: [u8; 2] = [0x80, 0x09];
    pub const RESET_MOTOR_POSITION: [u8; 2] = [0x00, 0x0a];
    pub const GET_BATTERY_LEVEL: [u8; 2] = [0x00, 0x0b];
    pub const STOP_SOUND_PLAYBACK: [u8; 2] = [0x80, 0x0c];
    pub const OPEN_READ: [u8; 2] = [0x01, 0x80];
    pub const OPEN_WRITE: [u8; 2] = [0x01, 0x81];
    pub const GET_FIRMWARE_VERSION: [u8; 2] = [0x01, 0x88];
    pub const SET_BRICK_NAME: [u8; 2] = [0x81, 0x98];
    pub const GET_DEVICE_INFO: [u8; 2] = [0x01, 0x9b];
}

fn check_filename(filename: &str) -> Result<()> {
    check_len(filename, MAX_FILENAME_LEN, "filename")
}

/// Opcode pair + filename + NUL: shared tail of the file commands.
fn with_filename(op: [u8; 2], filename: &str) -> Result<Bytes> {
    check_filename(filename)?;
    let mut buf = BytesMut::with_capacity(2 + filename.len() + 1);
    buf.put_slice(&op);
    put_str_z(&mut buf, filename);
    Ok(buf.freeze())
}

/// `start program`: load and execute a program stored on the brick.
pub fn start_program(filename: &str) -> Result<Bytes> {
    with_filename(opcode::START_PROGRAM, filename)
}

/// `stop program`: halt the currently running program.
pub fn stop_program() -> Bytes {
    Bytes::from_static(&opcode::STOP_PROGRAM)
}

/// `play sound file`: play a sound file once, or loop it endlessly.
pub fn play_sound_file(filename: &str, repeat: bool) -> Result<Bytes> {
    check_filename(filename)?;
    let mut buf = BytesMut::with_capacity(3 + filename.len() + 1);
    buf.put_slice(&opcode::PLAY_SOUND_FILE);
    buf.put_u8(repeat as u8);
    put_str_z(&mut buf, filename);
    Ok(buf.freeze())
}

/// `play tone`: frequency in Hz and duration in milliseconds.
pub fn play_tone(frequency: u16, duration_ms: u16) -> Bytes {
    let mut buf = BytesMut::with_capacity(6);
    buf.put_slice(&opcode::PLAY_TONE);
    buf.put_u16_le(frequency);
    buf.put_u16_le(duration_ms);
    buf.freeze()
}

/// `message write`: deliver text to one of the brick's mailboxes.
///
/// The wire carries the text length plus its NUL terminator in a single
/// byte, so the text is capped at 254 characters.
pub fn message_write(mailbox: u8, text: &str) -> Result<Bytes> {
    let len = text.chars().count();
    if len + 1 > u8::MAX as usize {
        return Err(NxtError::InvalidArgument(format!(
            "message too long: {len} characters (max 254)"
        )));
    }
    let mut buf = BytesMut::with_capacity(4 + len + 1);
    buf.put_slice(&opcode::MESSAGE_WRITE);
    buf.put_u8(mailbox);
    buf.put_u8((len + 1) as u8);
    put_str_z(&mut buf, text);
    Ok(buf.freeze())
}

/// `reset motor position`: port 0-2, relative or absolute.
pub fn reset_motor_position(port: u8, relative: bool) -> Result<Bytes> {
    if port > 2 {
        return Err(NxtError::InvalidArgument(format!(
            "motor port must be 0, 1 or 2, got {port}"
        )));
    }
    let mut buf = BytesMut::with_capacity(4);
    buf.put_slice(&opcode::RESET_MOTOR_POSITION);
    buf.put_u8(port);
    buf.put_u8(relative as u8);
    Ok(buf.freeze())
}

/// `get battery level`: query battery voltage (reply expected).
pub fn get_battery_level() -> Bytes {
    Bytes::from_static(&opcode::GET_BATTERY_LEVEL)
}

/// `stop sound playback`: halt any playing sound.
pub fn stop_sound_playback() -> Bytes {
    Bytes::from_static(&opcode::STOP_SOUND_PLAYBACK)
}

/// `open read`: open a file on the brick for reading (reply expected).
pub fn open_read(filename: &str) -> Result<Bytes> {
    with_filename(opcode::OPEN_READ, filename)
}

/// `open write`: open a file on the brick for writing (reply expected).
pub fn open_write(filename: &str) -> Result<Bytes> {
    with_filename(opcode::OPEN_WRITE, filename)
}

/// `get firmware version`: query protocol/firmware versions (reply expected).
pub fn get_firmware_version() -> Bytes {
    Bytes::from_static(&opcode::GET_FIRMWARE_VERSION)
}

/// `set brick name`: rename the brick (at most 15 characters).
pub fn set_brick_name(name: &str) -> Result<Bytes> {
    check_len(name, MAX_NAME_LEN, "name")?;
    let mut buf = BytesMut::with_capacity(2 + name.len() + 1);
    buf.put_slice(&opcode::SET_BRICK_NAME);
    put_str_z(&mut buf, name);
    Ok(buf.freeze())
}

/// `get device info`: query name, address, signal, free flash (reply expected).
pub fn get_device_info() -> Bytes {
    Bytes::from_static(&opcode::GET_DEVICE_INFO)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_program_layout() {
        let payload = start_program("demo.rxe").unwrap();
        assert_eq!(payload[..2], opcode::START_PROGRAM);
        assert_eq!(&payload[2..10], b"demo.rxe");
        assert_eq!(payload[10], 0);
        assert_eq!(payload.len(), "demo.rxe".len() + 3);
    }

    #[test]
    fn test_start_program_length_for_all_valid_names() {
        for n in 0..=MAX_FILENAME_LEN {
            let name = "x".repeat(n);
            let payload = start_program(&name).unwrap();
            assert_eq!(payload.len(), n + 3);
            assert_eq!(payload[payload.len() - 1], 0);
        }
    }

    #[test]
    fn test_file_builders_reject_long_filenames() {
        let long = "x".repeat(MAX_FILENAME_LEN + 1);
        for result in [
            start_program(&long),
            play_sound_file(&long, false),
            open_read(&long),
            open_write(&long),
        ] {
            let err = result.unwrap_err();
            assert!(matches!(err, NxtError::InvalidArgument(_)));
            assert!(err.to_string().contains("filename too long"));
        }
    }

    #[test]
    fn test_stop_program_layout() {
        assert_eq!(&stop_program()[..], &[0x80, 0x01]);
    }

    #[test]
    fn test_play_sound_file_loop_flag() {
        let once = play_sound_file("beep.rso", false).unwrap();
        let looped = play_sound_file("beep.rso", true).unwrap();
        assert_eq!(once[..2], opcode::PLAY_SOUND_FILE);
        assert_eq!(once[2], 0);
        assert_eq!(looped[2], 1);
        assert_eq!(&once[3..11], b"beep.rso");
        assert_eq!(once[11], 0);
    }

    #[test]
    fn test_play_tone_reversible_for_u16_values() {
        for &(f, d) in &[
            (0u16, 0u16),
            (1, 1),
            (0x00ff, 0xff00),
            (0xff00, 0x00ff),
            (440, 500),
            (0xffff, 0xffff),
        ] {
            let payload = play_tone(f, d);
            assert_eq!(payload[..2], opcode::PLAY_TONE);
            assert_eq!(u16::from_le_bytes([payload[2], payload[3]]), f);
            assert_eq!(u16::from_le_bytes([payload[4], payload[5]]), d);
        }
    }

    #[test]
    fn test_message_write_layout() {
        let payload = message_write(4, "go").unwrap();
        assert_eq!(payload[..2], opcode::MESSAGE_WRITE);
        assert_eq!(payload[2], 4);
        assert_eq!(payload[3], 3); // text length + NUL
        assert_eq!(&payload[4..6], b"go");
        assert_eq!(payload[6], 0);
    }

    #[test]
    fn test_message_write_rejects_text_overflowing_length_byte() {
        assert!(message_write(0, &"m".repeat(254)).is_ok());
        let err = message_write(0, &"m".repeat(255)).unwrap_err();
        assert!(err.to_string().contains("message too long"));
    }

    #[test]
    fn test_reset_motor_position_ports() {
        for port in 0..=2 {
            let payload = reset_motor_position(port, true).unwrap();
            assert_eq!(&payload[..], &[0x00, 0x0a, port, 1]);
        }
        let err = reset_motor_position(3, false).unwrap_err();
        assert!(matches!(err, NxtError::InvalidArgument(_)));
    }

    #[test]
    fn test_no_argument_commands() {
        assert_eq!(&get_battery_level()[..], &[0x00, 0x0b]);
        assert_eq!(&stop_sound_playback()[..], &[0x80, 0x0c]);
        assert_eq!(&get_firmware_version()[..], &[0x01, 0x88]);
        assert_eq!(&get_device_info()[..], &[0x01, 0x9b]);
    }

    #[test]
    fn test_open_read_write_opcodes() {
        assert_eq!(open_read("a.txt").unwrap()[..2], [0x01, 0x80]);
        assert_eq!(open_write("a.txt").unwrap()[..2], [0x01, 0x81]);
    }

    #[test]
    fn test_set_brick_name_layout() {
        let payload = set_brick_name("R2D2").unwrap();
        assert_eq!(payload[..2], opcode::SET_BRICK_NAME);
        assert_eq!(&payload[2..6], b"R2D2");
        assert_eq!(payload[6], 0);

        assert!(set_brick_name(&"n".repeat(15)).is_ok());
        let err = set_brick_name(&"n".repeat(16)).unwrap_err();
        assert!(err.to_string().contains("name too long"));
    }
}
