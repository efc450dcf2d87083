// desfire/src/protocol/responses/status.rs

//! Responses that carry only a trailer.

use crate::protocol::parser;
use crate::Result;

/// Decode a response that carries nothing but the trailer
/// (SelectApplication, CreateApplication, CreateStdDataFile, WriteData).
/// A success trailer with trailing payload bytes is a malformed response.
///
/// Every status-only answer shares this rule, SelectApplication included:
/// a select answer of the wrong length is `WrongResponseLength`, not a
/// separate generic error.
pub fn decode_status_only(response: &[u8]) -> Result<()> {
    let payload = parser::expect_ok(response)?;
    parser::ensure_exact_len(payload, 0)
}
