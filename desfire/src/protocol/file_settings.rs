// desfire/src/protocol/file_settings.rs

//! GetFileSettings payload decoder.
//!
//! Layout (trailer already stripped):
//! file_type(1) + options(1) + rw_car(1) + r_w(1) + type specific fields
//!
//! * standard / backup: file_size(3, LE)
//! * value: lower_limit(4) + upper_limit(4) + limited_credit(4) + flags(1)
//! * linear / cyclic record: record_size(3) + max_records(3) + current_records(3)
//!
//! Decoding never fails: a payload that is too short for its file type, or
//! a file type without a known layout (transaction MAC, unknown codes),
//! produces a record flagged invalid. Each call returns a fresh record.

use crate::constants::FILE_SETTINGS_MIN_LEN;
use crate::protocol::parser;
use crate::types::{AccessRights, CommMode, FileType};

/// Minimum payload for a value file (flags byte at index 16)
pub const VALUE_FILE_SETTINGS_LEN: usize = 17;

/// Minimum payload for a record file (current count ends at index 12)
pub const RECORD_FILE_SETTINGS_LEN: usize = 13;

/// Fields shared by every file type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FileHeader {
    /// File type byte
    pub file_type: FileType,
    /// Raw options byte: comm mode in bits 0-1, SDM options above
    pub options: u8,
    /// Decoded from the options byte
    pub comm_mode: CommMode,
    /// Access rights bytes
    pub access_rights: AccessRights,
}

/// Type specific part of the settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FileDetails {
    /// Nothing decoded (short payload or a type without known fields)
    None,
    /// Standard and backup data files
    Data {
        /// Size in bytes
        file_size: u32,
    },
    /// Value files
    Value {
        /// Lowest value allowed
        lower_limit: i32,
        /// Highest value allowed
        upper_limit: i32,
        /// Current limited credit amount
        limited_credit_value: i32,
        /// Flags bit 0
        limited_credit_enabled: bool,
        /// Flags bit 1
        free_get_value: bool,
    },
    /// Linear and cyclic record files
    Record {
        /// Bytes per record
        record_size: u32,
        /// Capacity in records
        max_records: u32,
        /// Records written so far
        current_records: u32,
    },
}

/// Decoded result of GetFileSettings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FileSettings {
    /// File number the settings were read for
    pub file_no: u8,
    /// Set only when the type specific fields were decoded
    pub valid: bool,
    /// Present whenever the payload held at least the 7 common bytes
    pub header: Option<FileHeader>,
    /// Type specific fields
    pub details: FileDetails,
}

impl FileSettings {
    fn invalid(file_no: u8, header: Option<FileHeader>) -> Self {
        Self {
            file_no,
            valid: false,
            header,
            details: FileDetails::None,
        }
    }

    /// File type, when the header was decoded.
    pub fn file_type(&self) -> Option<FileType> {
        self.header.map(|h| h.file_type)
    }

    /// Communication mode, when the header was decoded.
    pub fn comm_mode(&self) -> Option<CommMode> {
        self.header.map(|h| h.comm_mode)
    }

    /// File size for standard and backup data files.
    pub fn file_size(&self) -> Option<u32> {
        match self.details {
            FileDetails::Data { file_size } => Some(file_size),
            _ => None,
        }
    }
}

/// Decode a GetFileSettings payload for `file_no`.
pub fn decode_file_settings(file_no: u8, payload: &[u8]) -> FileSettings {
    if payload.len() < FILE_SETTINGS_MIN_LEN {
        return FileSettings::invalid(file_no, None);
    }

    let file_type = FileType::from_u8(payload[0]);
    let options = payload[1];
    let header = FileHeader {
        file_type,
        options,
        comm_mode: CommMode::from_options(options),
        access_rights: AccessRights::new(payload[2], payload[3]),
    };

    let details = match file_type {
        FileType::StandardData | FileType::BackupData => decode_data_details(payload),
        FileType::Value => decode_value_details(payload),
        FileType::LinearRecord | FileType::CyclicRecord => decode_record_details(payload),
        // No field layout known: header kept, record left invalid
        FileType::TransactionMac | FileType::Unknown(_) => None,
    };

    match details {
        Some(details) => FileSettings {
            file_no,
            valid: true,
            header: Some(header),
            details,
        },
        None => FileSettings::invalid(file_no, Some(header)),
    }
}

fn decode_data_details(payload: &[u8]) -> Option<FileDetails> {
    let file_size = parser::le_u24_at(payload, 4).ok()?;
    Some(FileDetails::Data { file_size })
}

fn decode_value_details(payload: &[u8]) -> Option<FileDetails> {
    if payload.len() < VALUE_FILE_SETTINGS_LEN {
        return None;
    }
    let flags = parser::byte_at(payload, 16).ok()?;
    Some(FileDetails::Value {
        lower_limit: parser::le_i32_at(payload, 4).ok()?,
        upper_limit: parser::le_i32_at(payload, 8).ok()?,
        limited_credit_value: parser::le_i32_at(payload, 12).ok()?,
        limited_credit_enabled: flags & 0x01 != 0,
        free_get_value: flags & 0x02 != 0,
    })
}

fn decode_record_details(payload: &[u8]) -> Option<FileDetails> {
    if payload.len() < RECORD_FILE_SETTINGS_LEN {
        return None;
    }
    Some(FileDetails::Record {
        record_size: parser::le_u24_at(payload, 4).ok()?,
        max_records: parser::le_u24_at(payload, 7).ok()?,
        current_records: parser::le_u24_at(payload, 10).ok()?,
    })
}
