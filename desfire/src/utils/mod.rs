//! Small helpers used across the crate: hex rendering for frame traces
//! and the reporter, hex parsing for fixtures and the demo.

pub mod hex;

pub use hex::*;
