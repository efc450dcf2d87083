// desfire/src/protocol/responses/mod.rs

//! Per-command response decoders and the [`Response`] dispatcher.

pub mod data;
pub mod file;
pub mod picc;
pub mod status;

pub use data::decode_read_data;
pub use file::decode_get_file_settings;
pub use picc::{decode_get_free_memory, decode_more_data, decode_version_frame};
pub use status::decode_status_only;

use crate::constants::VERSION_PART_LEN;
use crate::protocol::commands::Command;
use crate::protocol::file_settings::FileSettings;
use crate::status::StatusWord;

/// High-level Response enum. Per-command decoders live in
/// `protocol::responses::<group>.rs` and are dispatched here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Trailer-only success
    Done,
    /// ReadData payload
    Data(Vec<u8>),
    /// GetFileSettings payload and its decoded form
    FileSettings {
        /// Payload as received
        raw: Vec<u8>,
        /// Decoded settings
        settings: FileSettings,
    },
    /// Free bytes on the PICC
    FreeMemory(u32),
    /// One frame of a chained response
    MoreData {
        /// Frame payload
        payload: Vec<u8>,
        /// More frames queued on the card
        more: bool,
    },
    /// First frame of GetVersion (hardware block)
    VersionPart(Vec<u8>),
}

impl Response {
    /// Decode a raw response (payload plus trailer) for the command that
    /// produced it.
    pub fn decode(cmd: &Command, raw: &[u8]) -> crate::Result<Self> {
        match cmd {
            Command::SelectApplication { .. }
            | Command::CreateApplication { .. }
            | Command::CreateStandardDataFile { .. }
            | Command::WriteData { .. } => {
                decode_status_only(raw)?;
                Ok(Self::Done)
            }
            Command::ReadData { length, .. } => {
                Ok(Self::Data(decode_read_data(raw, *length)?.to_vec()))
            }
            Command::GetFileSettings { file_no } => {
                let (payload, settings) = decode_get_file_settings(*file_no, raw)?;
                Ok(Self::FileSettings {
                    raw: payload.to_vec(),
                    settings,
                })
            }
            Command::GetFreeMemory => Ok(Self::FreeMemory(decode_get_free_memory(raw)?)),
            Command::GetMoreData => {
                let (payload, more) = decode_more_data(raw)?;
                Ok(Self::MoreData {
                    payload: payload.to_vec(),
                    more,
                })
            }
            Command::GetVersion => {
                let part =
                    decode_version_frame(raw, StatusWord::ADDITIONAL_FRAME, &[VERSION_PART_LEN])?;
                Ok(Self::VersionPart(part.to_vec()))
            }
        }
    }

    /// True when the card signalled that further frames are pending.
    pub fn has_more(&self) -> bool {
        matches!(
            self,
            Self::MoreData { more: true, .. } | Self::VersionPart(_)
        )
    }
}
