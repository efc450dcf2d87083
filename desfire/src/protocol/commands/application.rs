// desfire/src/protocol/commands/application.rs

//! SelectApplication and CreateApplication.

use crate::constants::{INS_CREATE_APPLICATION, INS_SELECT_APPLICATION};
use crate::protocol::frame::Frame;
use crate::types::{Aid, ApplicationSettings};
use crate::Result;

/// Encode SelectApplication (0x5A)
/// Data: aid(3)
pub fn encode_select_application(aid: Aid) -> Result<Vec<u8>> {
    Frame::encode(INS_SELECT_APPLICATION, aid.as_bytes())
}

/// Encode CreateApplication (0xCA)
/// Data: aid(3) + key_settings(1) + app_settings(1)
pub fn encode_create_application(aid: Aid, settings: ApplicationSettings) -> Result<Vec<u8>> {
    let mut data = [0u8; 5];
    data[..3].copy_from_slice(aid.as_bytes());
    data[3] = settings.key_settings;
    data[4] = settings.app_settings;
    Frame::encode(INS_CREATE_APPLICATION, &data)
}
