// desfire/src/protocol/responses/data.rs

//! ReadData responses.

use crate::protocol::parser;
use crate::Result;

/// Decode a ReadData response. The card must return exactly the number of
/// bytes that were requested.
pub fn decode_read_data(response: &[u8], requested: usize) -> Result<&[u8]> {
    let payload = parser::expect_ok(response)?;
    parser::ensure_exact_len(payload, requested)?;
    Ok(payload)
}
