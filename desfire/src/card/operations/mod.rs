// desfire/src/card/operations/mod.rs

//! Card operations, one module per command group.

// Re-export the operation functions at the operations root so callers can
// use `crate::card::operations::read_data(...)` directly.
pub mod application;
pub mod data;
pub mod file;
pub mod picc;

pub use application::{create_application, create_application_default_aes, select_application};
pub use data::{read_data, read_data_into, write_data};
pub use file::{
    create_standard_data_file, create_standard_file_default_32,
    create_standard_file_default_sized, create_standard_file_free_access_sized, get_file_settings,
    get_file_settings_into,
};
pub use picc::{get_free_memory, get_more_data, get_version, get_version_into, get_version_raw};

use crate::protocol::Response;
use crate::{Error, Result};

/// Internal: a decoded response that does not match the command issued.
pub(crate) fn unexpected(cmd: &str, resp: &Response) -> Error {
    Error::Internal(format!("{} decoded as {:?}", cmd, resp))
}

/// Expect a trailer-only success.
pub(crate) fn expect_done(cmd: &str, resp: Response) -> Result<()> {
    match resp {
        Response::Done => Ok(()),
        other => Err(unexpected(cmd, &other)),
    }
}
