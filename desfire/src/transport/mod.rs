// desfire/src/transport/mod.rs

//! Reader boundary.

pub mod mock;
pub mod traits;

pub use mock::MockTransport;
pub use traits::Transceive;
