// desfire/src/prelude.rs

//! Common imports for session users.

pub use crate::card::{Desfire, DesfireBuilder};
pub use crate::config::SessionConfig;
pub use crate::protocol::{Command, FileDetails, FileSettings, Response, VersionInfo};
pub use crate::status::StatusWord;
pub use crate::transport::{MockTransport, Transceive};
pub use crate::{
    AccessRights, Aid, ApplicationSettings, CommMode, Error, FileType, Provenance, Result,
};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, parse_hex};
