// desfire/src/config.rs

//! Session configuration.

use crate::constants::{MAX_RESPONSE_LEN, PN532_MAX_RESPONSE_LEN, TRAILER_LEN};
use crate::{Error, Result};

/// Per-session settings handed to [`DesfireBuilder`](crate::card::DesfireBuilder).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionConfig {
    max_response_len: usize,
    trace_frames: bool,
}

impl SessionConfig {
    /// Config with a custom response ceiling. The ceiling must leave room
    /// for the trailer and may not exceed the protocol maximum.
    pub fn new(max_response_len: usize) -> Result<Self> {
        if !(TRAILER_LEN..=MAX_RESPONSE_LEN).contains(&max_response_len) {
            return Err(Error::InvalidArgument(format!(
                "max_response_len {} outside {}..={}",
                max_response_len, TRAILER_LEN, MAX_RESPONSE_LEN
            )));
        }
        Ok(Self {
            max_response_len,
            trace_frames: true,
        })
    }

    /// PN532 based readers cap a single exchange at 125 bytes.
    pub fn pn532() -> Self {
        Self {
            max_response_len: PN532_MAX_RESPONSE_LEN,
            trace_frames: true,
        }
    }

    /// Enable or disable hex tracing of every frame.
    pub fn with_trace_frames(mut self, enabled: bool) -> Self {
        self.trace_frames = enabled;
        self
    }

    /// Largest response accepted, trailer included.
    pub fn max_response_len(&self) -> usize {
        self.max_response_len
    }

    /// Whether frames are traced at `trace` level.
    pub fn trace_frames(&self) -> bool {
        self.trace_frames
    }

    /// Largest payload a single response can carry under this config.
    pub fn max_payload_len(&self) -> usize {
        self.max_response_len - TRAILER_LEN
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_response_len: MAX_RESPONSE_LEN,
            trace_frames: true,
        }
    }
}
