// desfire/src/card/mod.rs

//! The [`Desfire`] session handle.

use log::{debug, trace, warn};

use crate::config::SessionConfig;
use crate::constants::TRAILER_LEN;
use crate::protocol::file_settings::FileSettings;
use crate::protocol::version::VersionInfo;
use crate::protocol::{Command, Response};
use crate::transport::Transceive;
use crate::types::{AccessRights, Aid, ApplicationSettings, CommMode};
use crate::utils::bytes_to_hex_spaced;
use crate::{Error, Provenance, Result};

pub mod builder;
pub mod operations;

pub use builder::DesfireBuilder;

/// A plain-mode session with one DESFire card.
///
/// Exchanges are strictly sequential: each method issues its command (or
/// the three GetVersion rounds) and consumes every response frame before
/// returning, so a session never has a command in flight between calls.
pub struct Desfire {
    transport: Box<dyn Transceive>,
    config: SessionConfig,
}

impl Desfire {
    /// Session over `transport` with the default config.
    pub fn new(transport: Box<dyn Transceive>) -> Self {
        Self::with_config(transport, SessionConfig::default())
    }

    /// Session over `transport` with an explicit config.
    pub fn with_config(transport: Box<dyn Transceive>, config: SessionConfig) -> Self {
        Self { transport, config }
    }

    /// Start a [`DesfireBuilder`].
    pub fn builder() -> DesfireBuilder {
        DesfireBuilder::new()
    }

    /// Config in effect for this session.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Exchange one already framed APDU and return the raw response.
    ///
    /// Reader failures surface as transport errors; a response longer than
    /// the configured ceiling is rejected before anyone looks at it.
    pub fn transceive_raw(&mut self, apdu: &[u8]) -> Result<Vec<u8>> {
        let max = self.config.max_response_len();
        if self.config.trace_frames() {
            trace!(">> {}", bytes_to_hex_spaced(apdu));
        }

        let raw = self.transport.transceive(apdu, max).map_err(|e| {
            warn!("transceive failed: {}", e);
            match e.provenance() {
                Provenance::Transport => e,
                _ => Error::Communication(e.to_string()),
            }
        })?;

        if self.config.trace_frames() {
            trace!("<< {}", bytes_to_hex_spaced(&raw));
        }
        if raw.len() > max {
            warn!("response of {} bytes exceeds ceiling of {}", raw.len(), max);
            return Err(Error::WrongResponseLength {
                expected: max,
                actual: raw.len(),
            });
        }
        Ok(raw)
    }

    /// Encode `cmd`, exchange it and decode the answer.
    pub fn execute(&mut self, cmd: Command) -> Result<Response> {
        let apdu = cmd.encode()?;
        let raw = self.transceive_raw(&apdu)?;
        match Response::decode(&cmd, &raw) {
            Ok(resp) => {
                debug!("{} ok", cmd.name());
                Ok(resp)
            }
            Err(e) => {
                warn!("{} failed: {}", cmd.name(), e);
                Err(e)
            }
        }
    }

    /// Largest payload a single response may carry in this session.
    pub(crate) fn max_payload_len(&self) -> usize {
        self.config.max_response_len().saturating_sub(TRAILER_LEN)
    }

    /// Select `aid`; [`Aid::MASTER`] returns to the PICC level.
    pub fn select_application(&mut self, aid: Aid) -> Result<()> {
        operations::select_application(self, aid)
    }

    /// Create an application with explicit settings.
    pub fn create_application(&mut self, aid: Aid, settings: ApplicationSettings) -> Result<()> {
        operations::create_application(self, aid, settings)
    }

    /// Create an AES application with five keys (0x0F / 0x85).
    pub fn create_application_default_aes(&mut self, aid: Aid) -> Result<()> {
        operations::create_application_default_aes(self, aid)
    }

    /// Create a standard data file. Sizes above 255 are rejected.
    pub fn create_standard_data_file(
        &mut self,
        file_no: u8,
        comm_mode: CommMode,
        access_rights: AccessRights,
        size: u32,
    ) -> Result<()> {
        operations::create_standard_data_file(self, file_no, comm_mode, access_rights, size)
    }

    /// 32 byte file with key-slot access rights (0x12 / 0x34).
    pub fn create_standard_file_default_32(&mut self, file_no: u8, comm_mode: CommMode) -> Result<()> {
        operations::create_standard_file_default_32(self, file_no, comm_mode)
    }

    /// Standard file with key-slot access rights.
    pub fn create_standard_file_default_sized(
        &mut self,
        file_no: u8,
        size: u32,
        comm_mode: CommMode,
    ) -> Result<()> {
        operations::create_standard_file_default_sized(self, file_no, size, comm_mode)
    }

    /// Standard file every key may read and write.
    pub fn create_standard_file_free_access_sized(
        &mut self,
        file_no: u8,
        size: u32,
        comm_mode: CommMode,
    ) -> Result<()> {
        operations::create_standard_file_free_access_sized(self, file_no, size, comm_mode)
    }

    /// Fetch and decode the settings of `file_no`.
    pub fn get_file_settings(&mut self, file_no: u8) -> Result<FileSettings> {
        operations::get_file_settings(self, file_no)
    }

    /// Copy the raw settings payload into `out` and return its length
    /// together with the decoded record.
    pub fn get_file_settings_into(
        &mut self,
        file_no: u8,
        out: &mut [u8],
    ) -> Result<(usize, FileSettings)> {
        operations::get_file_settings_into(self, file_no, out)
    }

    /// Read `length` bytes from `offset`.
    pub fn read_data(&mut self, file_no: u8, offset: u32, length: usize) -> Result<Vec<u8>> {
        operations::read_data(self, file_no, offset, length)
    }

    /// Read into `out`, returning the byte count. `out` is untouched on error.
    pub fn read_data_into(
        &mut self,
        file_no: u8,
        offset: u32,
        length: usize,
        out: &mut [u8],
    ) -> Result<usize> {
        operations::read_data_into(self, file_no, offset, length, out)
    }

    /// Write `data` at `offset`.
    pub fn write_data(&mut self, file_no: u8, offset: u32, data: &[u8]) -> Result<()> {
        operations::write_data(self, file_no, offset, data)
    }

    /// Run the three round GetVersion exchange and decode the result.
    pub fn get_version(&mut self) -> Result<VersionInfo> {
        operations::get_version(self)
    }

    /// Concatenated 28 or 29 byte GetVersion payload.
    pub fn get_version_raw(&mut self) -> Result<Vec<u8>> {
        operations::get_version_raw(self)
    }

    /// Copy the raw GetVersion payload into `out` and return its length.
    pub fn get_version_into(&mut self, out: &mut [u8]) -> Result<usize> {
        operations::get_version_into(self, out)
    }

    /// Free bytes left on the PICC.
    pub fn get_free_memory(&mut self) -> Result<u32> {
        operations::get_free_memory(self)
    }

    /// Fetch one pending frame. The flag is true while the card reports
    /// further frames.
    pub fn get_more_data(&mut self) -> Result<(Vec<u8>, bool)> {
        operations::get_more_data(self)
    }
}

impl std::fmt::Debug for Desfire {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Desfire")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
