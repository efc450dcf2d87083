// desfire/src/protocol/commands/mod.rs

//! Per-command encoders and the [`Command`] enum.

pub mod application;
pub mod data;
pub mod file;
pub mod picc;

pub use application::{encode_create_application, encode_select_application};
pub use data::{MAX_OFFSET, MAX_READ_LEN, MAX_WRITE_LEN, encode_read_data, encode_write_data};
pub use file::{
    MAX_STANDARD_FILE_SIZE, encode_create_standard_data_file, encode_get_file_settings,
};
pub use picc::{encode_get_free_memory, encode_get_more_data, encode_get_version};

use crate::constants::*;
use crate::types::{AccessRights, Aid, ApplicationSettings, CommMode};

/// High-level Command enum. New commands should be added here and
/// their per-command encoder placed in `protocol::commands::<group>.rs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `5A`
    SelectApplication {
        /// Application to select, [`Aid::MASTER`] for the PICC level
        aid: Aid,
    },
    /// `CA`
    CreateApplication {
        /// New application
        aid: Aid,
        /// Key and application settings bytes
        settings: ApplicationSettings,
    },
    /// `CD`
    CreateStandardDataFile {
        /// File number
        file_no: u8,
        /// Communication mode
        comm_mode: CommMode,
        /// Access rights
        access_rights: AccessRights,
        /// File size in bytes, at most [`MAX_STANDARD_FILE_SIZE`]
        size: u32,
    },
    /// `BD`
    ReadData {
        /// File number
        file_no: u8,
        /// Start offset
        offset: u32,
        /// Bytes to read
        length: usize,
    },
    /// `8D`
    WriteData {
        /// File number
        file_no: u8,
        /// Start offset
        offset: u32,
        /// Bytes to write
        data: Vec<u8>,
    },
    /// `F5`
    GetFileSettings {
        /// File number
        file_no: u8,
    },
    /// `60`, first of three rounds
    GetVersion,
    /// `AF`
    GetMoreData,
    /// `6E`
    GetFreeMemory,
}

impl Command {
    /// Return the DESFire instruction byte.
    pub fn instruction(&self) -> u8 {
        match self {
            Self::SelectApplication { .. } => INS_SELECT_APPLICATION,
            Self::CreateApplication { .. } => INS_CREATE_APPLICATION,
            Self::CreateStandardDataFile { .. } => INS_CREATE_STANDARD_DATA_FILE,
            Self::ReadData { .. } => INS_READ_DATA,
            Self::WriteData { .. } => INS_WRITE_DATA,
            Self::GetFileSettings { .. } => INS_GET_FILE_SETTINGS,
            Self::GetVersion => INS_GET_VERSION,
            Self::GetMoreData => INS_GET_MORE_DATA,
            Self::GetFreeMemory => INS_GET_FREE_MEMORY,
        }
    }

    /// Human readable command name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::SelectApplication { .. } => "SelectApplication",
            Self::CreateApplication { .. } => "CreateApplication",
            Self::CreateStandardDataFile { .. } => "CreateStdDataFile",
            Self::ReadData { .. } => "ReadData",
            Self::WriteData { .. } => "WriteData",
            Self::GetFileSettings { .. } => "GetFileSettings",
            Self::GetVersion => "GetVersion",
            Self::GetMoreData => "GetMoreData",
            Self::GetFreeMemory => "GetFreeMemory",
        }
    }

    /// Encode the command into a complete command APDU. Parameters outside
    /// what the single-byte length fields can carry are rejected here.
    pub fn encode(&self) -> crate::Result<Vec<u8>> {
        match self {
            Self::SelectApplication { aid } => encode_select_application(*aid),
            Self::CreateApplication { aid, settings } => {
                encode_create_application(*aid, *settings)
            }
            Self::CreateStandardDataFile {
                file_no,
                comm_mode,
                access_rights,
                size,
            } => encode_create_standard_data_file(*file_no, *comm_mode, *access_rights, *size),
            Self::ReadData {
                file_no,
                offset,
                length,
            } => encode_read_data(*file_no, *offset, *length),
            Self::WriteData {
                file_no,
                offset,
                data,
            } => encode_write_data(*file_no, *offset, &data[..]),
            Self::GetFileSettings { file_no } => encode_get_file_settings(*file_no),
            Self::GetVersion => encode_get_version(),
            Self::GetMoreData => encode_get_more_data(),
            Self::GetFreeMemory => encode_get_free_memory(),
        }
    }
}
