// desfire/src/card/operations/file.rs

//! File creation and file settings.

use log::debug;

use crate::card::Desfire;
use crate::card::operations::{expect_done, unexpected};
use crate::constants::DEFAULT_STANDARD_FILE_SIZE;
use crate::protocol::file_settings::FileSettings;
use crate::protocol::parser::copy_into;
use crate::protocol::{Command, Response};
use crate::types::{AccessRights, CommMode};
use crate::Result;

/// Create a standard data file. Sizes above 255 bytes are rejected.
pub fn create_standard_data_file(
    card: &mut Desfire,
    file_no: u8,
    comm_mode: CommMode,
    access_rights: AccessRights,
    size: u32,
) -> Result<()> {
    debug!(
        "create standard file {} ({}, rights {:02X}{:02X}, {} bytes)",
        file_no, comm_mode, access_rights.rw_car, access_rights.r_w, size
    );
    let resp = card.execute(Command::CreateStandardDataFile {
        file_no,
        comm_mode,
        access_rights,
        size,
    })?;
    expect_done("CreateStdDataFile", resp)
}

/// 32 byte file with key-slot access rights.
pub fn create_standard_file_default_32(
    card: &mut Desfire,
    file_no: u8,
    comm_mode: CommMode,
) -> Result<()> {
    create_standard_file_default_sized(card, file_no, u32::from(DEFAULT_STANDARD_FILE_SIZE), comm_mode)
}

/// Key-slot access rights, caller chosen size.
pub fn create_standard_file_default_sized(
    card: &mut Desfire,
    file_no: u8,
    size: u32,
    comm_mode: CommMode,
) -> Result<()> {
    create_standard_data_file(card, file_no, comm_mode, AccessRights::KEY_SLOTS, size)
}

/// Free access rights, caller chosen size.
pub fn create_standard_file_free_access_sized(
    card: &mut Desfire,
    file_no: u8,
    size: u32,
    comm_mode: CommMode,
) -> Result<()> {
    create_standard_data_file(card, file_no, comm_mode, AccessRights::FREE, size)
}

fn fetch_file_settings(card: &mut Desfire, file_no: u8) -> Result<(Vec<u8>, FileSettings)> {
    match card.execute(Command::GetFileSettings { file_no })? {
        Response::FileSettings { raw, settings } => Ok((raw, settings)),
        other => Err(unexpected("GetFileSettings", &other)),
    }
}

/// Query and decode the settings of `file_no`. The record is built fresh
/// for every call.
pub fn get_file_settings(card: &mut Desfire, file_no: u8) -> Result<FileSettings> {
    fetch_file_settings(card, file_no).map(|(_, settings)| settings)
}

/// Like [`get_file_settings`] but also copies the raw payload into `out`.
/// `out` is left untouched unless the whole call succeeds.
pub fn get_file_settings_into(
    card: &mut Desfire,
    file_no: u8,
    out: &mut [u8],
) -> Result<(usize, FileSettings)> {
    let (raw, settings) = fetch_file_settings(card, file_no)?;
    let n = copy_into(&raw, out)?;
    Ok((n, settings))
}
