// desfire/src/protocol/commands/data.rs

//! ReadData and WriteData.

use crate::constants::{INS_READ_DATA, INS_WRITE_DATA, MAX_DATA_LEN};
use crate::protocol::frame::Frame;
use crate::types::u24_to_le;
use crate::{Error, Result};

/// Offsets are accepted up to one byte; the wire field is 24 bits.
pub const MAX_OFFSET: u32 = 0xFF;

/// Read lengths are accepted up to one byte; the wire field is 24 bits.
pub const MAX_READ_LEN: usize = 0xFF;

/// Header bytes preceding the payload of a WriteData command
const WRITE_HEADER_LEN: usize = 7;

/// Largest payload a single plain WriteData command can carry (Lc = 7 + n)
pub const MAX_WRITE_LEN: usize = MAX_DATA_LEN - WRITE_HEADER_LEN;

fn check_offset(offset: u32) -> Result<()> {
    if offset > MAX_OFFSET {
        return Err(Error::InvalidArgument(format!(
            "offset {} exceeds {}",
            offset, MAX_OFFSET
        )));
    }
    Ok(())
}

/// Encode ReadData (0xBD)
/// Data: file_no(1) + offset(3, LE) + length(3, LE)
pub fn encode_read_data(file_no: u8, offset: u32, length: usize) -> Result<Vec<u8>> {
    check_offset(offset)?;
    if length == 0 || length > MAX_READ_LEN {
        return Err(Error::InvalidArgument(format!(
            "read length {} outside 1..={}",
            length, MAX_READ_LEN
        )));
    }

    let mut data = Vec::with_capacity(WRITE_HEADER_LEN);
    data.push(file_no);
    data.extend_from_slice(&u24_to_le(offset)?);
    data.extend_from_slice(&u24_to_le(length as u32)?);
    Frame::encode(INS_READ_DATA, &data)
}

/// Encode WriteData (0x8D)
/// Data: file_no(1) + offset(3, LE) + length(3, LE) + payload(length)
pub fn encode_write_data(file_no: u8, offset: u32, payload: &[u8]) -> Result<Vec<u8>> {
    check_offset(offset)?;
    if payload.is_empty() || payload.len() > MAX_WRITE_LEN {
        return Err(Error::InvalidArgument(format!(
            "write length {} outside 1..={}",
            payload.len(),
            MAX_WRITE_LEN
        )));
    }

    let mut data = Vec::with_capacity(WRITE_HEADER_LEN + payload.len());
    data.push(file_no);
    data.extend_from_slice(&u24_to_le(offset)?);
    data.extend_from_slice(&u24_to_le(payload.len() as u32)?);
    data.extend_from_slice(payload);
    Frame::encode(INS_WRITE_DATA, &data)
}
