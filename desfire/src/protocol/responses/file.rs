// desfire/src/protocol/responses/file.rs

//! GetFileSettings responses.

use crate::constants::{FILE_SETTINGS_MAX_LEN, FILE_SETTINGS_MIN_LEN};
use crate::protocol::file_settings::{FileSettings, decode_file_settings};
use crate::protocol::parser;
use crate::Result;

/// Decode a GetFileSettings response. Returns the raw payload together
/// with the decoded settings.
pub fn decode_get_file_settings(file_no: u8, response: &[u8]) -> Result<(&[u8], FileSettings)> {
    let payload = parser::expect_ok(response)?;
    parser::ensure_len_between(payload, FILE_SETTINGS_MIN_LEN, FILE_SETTINGS_MAX_LEN)?;
    Ok((payload, decode_file_settings(file_no, payload)))
}
