// desfire/src/protocol/commands/picc.rs

//! PICC level commands without data.

use crate::constants::{INS_GET_FREE_MEMORY, INS_GET_MORE_DATA, INS_GET_VERSION};
use crate::protocol::frame::Frame;
use crate::Result;

/// Encode GetVersion (0x60), no data
pub fn encode_get_version() -> Result<Vec<u8>> {
    Frame::encode(INS_GET_VERSION, &[])
}

/// Encode the AdditionalFrame request (0xAF), no data
pub fn encode_get_more_data() -> Result<Vec<u8>> {
    Frame::encode(INS_GET_MORE_DATA, &[])
}

/// Encode FreeMemory (0x6E), no data
pub fn encode_get_free_memory() -> Result<Vec<u8>> {
    Frame::encode(INS_GET_FREE_MEMORY, &[])
}
