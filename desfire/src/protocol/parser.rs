// desfire/src/protocol/parser.rs

//! Bounds-checked helpers used by the response decoders.

use crate::protocol::frame::Frame;
use crate::status::{StatusWord, interpret};
use crate::types::le_u24;
use crate::{Error, Result};

/// Ensure the slice has at least `min` bytes.
pub fn ensure_len(data: &[u8], min: usize) -> Result<()> {
    if data.len() < min {
        return Err(Error::WrongResponseLength {
            expected: min,
            actual: data.len(),
        });
    }
    Ok(())
}

/// Ensure the slice has exactly `len` bytes.
pub fn ensure_exact_len(data: &[u8], len: usize) -> Result<()> {
    if data.len() != len {
        return Err(Error::WrongResponseLength {
            expected: len,
            actual: data.len(),
        });
    }
    Ok(())
}

/// Ensure `min <= data.len() <= max`.
pub fn ensure_len_between(data: &[u8], min: usize, max: usize) -> Result<()> {
    ensure_len(data, min)?;
    if data.len() > max {
        return Err(Error::WrongResponseLength {
            expected: max,
            actual: data.len(),
        });
    }
    Ok(())
}

/// Read a single byte at `idx` with bounds checking.
pub fn byte_at(data: &[u8], idx: usize) -> Result<u8> {
    ensure_len(data, idx + 1)?;
    Ok(data[idx])
}

/// Read a little-endian 24-bit value at `idx` with bounds checking.
pub fn le_u24_at(data: &[u8], idx: usize) -> Result<u32> {
    ensure_len(data, idx + 3)?;
    Ok(le_u24([data[idx], data[idx + 1], data[idx + 2]]))
}

/// Read a little-endian signed 32-bit value at `idx` with bounds checking.
pub fn le_i32_at(data: &[u8], idx: usize) -> Result<i32> {
    ensure_len(data, idx + 4)?;
    Ok(i32::from_le_bytes([
        data[idx],
        data[idx + 1],
        data[idx + 2],
        data[idx + 3],
    ]))
}

/// Validate the trailer of a raw response against `expected` and return
/// the payload. Any other trailer is mapped through the status taxonomy,
/// so `91 00` where `91 AF` was expected is an unknown-error; the payload
/// of a failed response is never handed out.
pub fn expect_trailer(response: &[u8], expected: StatusWord) -> Result<&[u8]> {
    let (payload, sw) = Frame::split(response)?;
    if sw != expected {
        return Err(interpret(sw.sw1(), sw.sw2()));
    }
    Ok(payload)
}

/// Shorthand for [`expect_trailer`] with `91 00`.
pub fn expect_ok(response: &[u8]) -> Result<&[u8]> {
    expect_trailer(response, StatusWord::OPERATION_OK)
}

/// Copy `payload` into a caller buffer. Nothing is written when the
/// buffer is too small.
pub fn copy_into(payload: &[u8], out: &mut [u8]) -> Result<usize> {
    if out.len() < payload.len() {
        return Err(Error::NoRoom {
            needed: payload.len(),
            capacity: out.len(),
        });
    }
    out[..payload.len()].copy_from_slice(payload);
    Ok(payload.len())
}
