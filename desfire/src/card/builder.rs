// desfire/src/card/builder.rs

//! Session builder.

use crate::card::Desfire;
use crate::config::SessionConfig;
use crate::transport::Transceive;
use crate::{Error, Result};

/// Helper to construct a [`Desfire`] session with optional configuration.
#[derive(Default)]
pub struct DesfireBuilder {
    transport: Option<Box<dyn Transceive>>,
    config: SessionConfig,
}

impl DesfireBuilder {
    /// Empty builder with the default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Provide the reader transport (e.g. a MockTransport in tests).
    pub fn with_transport(mut self, transport: Box<dyn Transceive>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Replace the session config.
    pub fn with_config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    /// Consume the builder. A transport is required.
    pub fn build(self) -> Result<Desfire> {
        match self.transport {
            Some(t) => Ok(Desfire::with_config(t, self.config)),
            None => Err(Error::InvalidArgument("no transport configured".into())),
        }
    }
}
