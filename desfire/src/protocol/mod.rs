// desfire/src/protocol/mod.rs

//! Command encoding and response decoding, no I/O.

pub mod commands;
pub mod file_settings;
pub mod frame;
pub mod parser;
pub mod responses;
pub mod version;

pub use commands::{
    Command, MAX_OFFSET, MAX_READ_LEN, MAX_STANDARD_FILE_SIZE, MAX_WRITE_LEN,
    encode_create_application, encode_create_standard_data_file, encode_get_file_settings,
    encode_get_free_memory, encode_get_more_data, encode_get_version, encode_read_data,
    encode_select_application, encode_write_data,
};
pub use file_settings::{FileDetails, FileHeader, FileSettings, decode_file_settings};
pub use frame::Frame;
pub use responses::{
    Response, decode_get_file_settings, decode_get_free_memory, decode_more_data,
    decode_read_data, decode_status_only, decode_version_frame,
};
pub use version::{ProductInfo, VersionInfo};
