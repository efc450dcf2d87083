// desfire/src/protocol/commands/file.rs

//! CreateStdDataFile and GetFileSettings.

use crate::constants::{INS_CREATE_STANDARD_DATA_FILE, INS_GET_FILE_SETTINGS};
use crate::protocol::frame::Frame;
use crate::types::{AccessRights, CommMode, u24_to_le};
use crate::{Error, Result};

/// Largest standard file this crate creates. The size field is 24 bits
/// wide on the wire but only its low byte is ever populated.
pub const MAX_STANDARD_FILE_SIZE: u32 = 0xFF;

/// Encode CreateStdDataFile (0xCD)
/// Data: file_no(1) + comm_mode(1) + rw_car(1) + r_w(1) + size(3, LE)
pub fn encode_create_standard_data_file(
    file_no: u8,
    comm_mode: CommMode,
    access_rights: AccessRights,
    size: u32,
) -> Result<Vec<u8>> {
    if size > MAX_STANDARD_FILE_SIZE {
        return Err(Error::InvalidArgument(format!(
            "standard file size {} exceeds {}",
            size, MAX_STANDARD_FILE_SIZE
        )));
    }

    let mut data = Vec::with_capacity(7);
    data.push(file_no);
    data.push(comm_mode.as_u8());
    data.push(access_rights.rw_car);
    data.push(access_rights.r_w);
    data.extend_from_slice(&u24_to_le(size)?);
    Frame::encode(INS_CREATE_STANDARD_DATA_FILE, &data)
}

/// Encode GetFileSettings (0xF5)
/// Data: file_no(1)
pub fn encode_get_file_settings(file_no: u8) -> Result<Vec<u8>> {
    Frame::encode(INS_GET_FILE_SETTINGS, &[file_no])
}
