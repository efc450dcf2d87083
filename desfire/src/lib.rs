// desfire/src/lib.rs

//! desfire
//!
//! Plain-mode command framing for Mifare DESFire EVx cards: APDU
//! construction, response validation and the status taxonomy, driven
//! through any reader that implements [`transport::Transceive`].
#![warn(missing_docs)]

pub mod card;
pub mod config;
pub mod constants;
pub mod error;
pub mod prelude;
pub mod protocol;
pub mod report;
pub mod status;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
