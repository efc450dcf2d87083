// desfire/src/protocol/responses/picc.rs

//! PICC level responses: GetVersion frames, GetMoreData, FreeMemory.

use crate::constants::FREE_MEMORY_LEN;
use crate::protocol::parser;
use crate::status::StatusWord;
use crate::Result;

/// Decode a FreeMemory response: 3 byte little-endian count of free bytes.
pub fn decode_get_free_memory(response: &[u8]) -> Result<u32> {
    let payload = parser::expect_ok(response)?;
    parser::ensure_exact_len(payload, FREE_MEMORY_LEN)?;
    parser::le_u24_at(payload, 0)
}

/// Decode one frame of a chained response. `91 AF` means more frames are
/// queued, `91 00` means this was the last one; anything else is mapped
/// through the status taxonomy.
pub fn decode_more_data(response: &[u8]) -> Result<(&[u8], bool)> {
    match parser::expect_trailer(response, StatusWord::ADDITIONAL_FRAME) {
        Ok(payload) => Ok((payload, true)),
        Err(_) => parser::expect_ok(response).map(|payload| (payload, false)),
    }
}

/// Decode one round of the GetVersion exchange: the trailer must be
/// `expected` and the payload one of the `allowed` lengths.
pub fn decode_version_frame<'a>(
    response: &'a [u8],
    expected: StatusWord,
    allowed: &[usize],
) -> Result<&'a [u8]> {
    let payload = parser::expect_trailer(response, expected)?;
    if !allowed.contains(&payload.len()) {
        return Err(crate::Error::WrongResponseLength {
            expected: allowed.first().copied().unwrap_or(0),
            actual: payload.len(),
        });
    }
    Ok(payload)
}
