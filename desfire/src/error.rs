// desfire/src/error.rs

//! Crate-wide status taxonomy.
//!
//! Every failure a caller can observe comes through the single [`Error`]
//! enum. The variants have two provenances:
//!
//! * **card-reported**: decoded from the `SW1 SW2` trailer the card
//!   appended to its response (see [`crate::status`]). These are always
//!   recoverable by the caller: retry, authenticate, pick other parameters.
//! * **local / transport**: produced by this crate or by the transceive
//!   adapter without the card having said anything about them (malformed
//!   response length, undersized caller buffer, adapter I/O failure, bad
//!   arguments).
//!
//! [`Error::provenance`] tells the two apart.

use thiserror::Error;

use crate::status::StatusWord;

/// Where an [`Error`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    /// Decoded from a status trailer returned by the card
    Card,
    /// Detected by this crate while framing or validating
    Local,
    /// Reported by the transceive adapter
    Transport,
}

/// Status taxonomy. `Ok(..)` of [`Result`] stands for the `91 00` status.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    // --- card-reported (SW1 SW2) ---
    /// `65 81` or `91 EE`
    #[error("memory error: failure reading or writing non-volatile memory")]
    MemoryError,

    /// `67 00` or `91 7E`
    #[error("length error: length of command string invalid")]
    LengthError,

    /// `69 82`
    #[error("security status not satisfied")]
    SecurityNotSatisfied,

    /// `69 85`
    #[error("conditions of use not satisfied")]
    ConditionsNotSatisfied,

    /// `6A 82`
    #[error("file or application not found")]
    FileOrAppNotFound,

    /// `6A 86`
    #[error("incorrect parameters P1-P2")]
    IncorrectParams,

    /// `6A 87`
    #[error("Lc inconsistent with parameters P1-P2")]
    IncorrectLc,

    /// `6A 00`
    #[error("CLA not supported")]
    ClaNotSupported,

    /// `91 0B`
    #[error("command not found")]
    CommandNotFound,

    /// `91 0C`
    #[error("command format error")]
    CommandFormatError,

    /// `91 1C`
    #[error("illegal command code")]
    IllegalCommandCode,

    /// `91 1E`
    #[error("integrity error: CRC or MAC does not match data")]
    IntegrityError,

    /// `91 40`
    #[error("no such key")]
    NoSuchKey,

    /// `91 9D`
    #[error("permission denied")]
    PermissionDenied,

    /// `91 9E`
    #[error("parameter error")]
    ParameterError,

    /// `91 AD`
    #[error("authentication delay: not allowed to authenticate yet")]
    AuthenticationDelay,

    /// `91 AE`
    #[error("authentication error")]
    AuthenticationError,

    /// `91 AF` where a final answer was expected
    #[error("additional frame expected")]
    AdditionalFrame,

    /// `91 BE`
    #[error("boundary error: access beyond file or record limits")]
    BoundaryError,

    /// `91 CA`
    #[error("command aborted: previous command not fully completed")]
    CommandAborted,

    /// `91 F0`
    #[error("file not found")]
    FileNotFound,

    /// `91 DE`
    #[error("duplicate error: file or application already exists")]
    DuplicateError,

    /// `91 0E`
    #[error("out of EEPROM: no memory left for creation")]
    OutOfEepromError,

    /// Any trailer outside the table, including an out of place `91 00`
    #[error("unknown card status: ({sw1:#04x}, {sw2:#04x})")]
    UnknownError {
        /// First trailer byte
        sw1: u8,
        /// Second trailer byte
        sw2: u8,
    },

    // --- local / transport ---
    /// The adapter failed to exchange the frame
    #[error("communication error: {0}")]
    Communication(String),

    /// Response or payload length outside what the command allows
    #[error("wrong response length: expected {expected}, got {actual}")]
    WrongResponseLength {
        /// Length the decoder accepts
        expected: usize,
        /// Length received
        actual: usize,
    },

    /// Caller buffer or response ceiling too small
    #[error("no room: {needed} bytes needed, buffer holds {capacity}")]
    NoRoom {
        /// Bytes the answer needs
        needed: usize,
        /// Bytes available
        capacity: usize,
    },

    /// CRC_A mismatch flagged by the adapter
    #[error("CRC_A mismatch reported by transport")]
    CrcWrong,

    /// Rejected before any I/O
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Broken invariant inside this crate
    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Classify the error by origin.
    pub fn provenance(&self) -> Provenance {
        match self {
            Error::Communication(_) | Error::CrcWrong => Provenance::Transport,
            Error::WrongResponseLength { .. }
            | Error::NoRoom { .. }
            | Error::InvalidArgument(_)
            | Error::Internal(_) => Provenance::Local,
            _ => Provenance::Card,
        }
    }

    /// True when the card itself reported this status.
    pub fn is_card_reported(&self) -> bool {
        self.provenance() == Provenance::Card
    }

    /// The trailer that maps to this status, for card-reported errors.
    ///
    /// Where two trailers share a status (`6700`/`917E`, `6581`/`91EE`)
    /// the native DESFire one is returned.
    pub fn status_word(&self) -> Option<StatusWord> {
        let sw = match self {
            Error::MemoryError => 0x91EE,
            Error::LengthError => 0x917E,
            Error::SecurityNotSatisfied => 0x6982,
            Error::ConditionsNotSatisfied => 0x6985,
            Error::FileOrAppNotFound => 0x6A82,
            Error::IncorrectParams => 0x6A86,
            Error::IncorrectLc => 0x6A87,
            Error::ClaNotSupported => 0x6A00,
            Error::CommandNotFound => 0x910B,
            Error::CommandFormatError => 0x910C,
            Error::IllegalCommandCode => 0x911C,
            Error::IntegrityError => 0x911E,
            Error::NoSuchKey => 0x9140,
            Error::PermissionDenied => 0x919D,
            Error::ParameterError => 0x919E,
            Error::AuthenticationDelay => 0x91AD,
            Error::AuthenticationError => 0x91AE,
            Error::AdditionalFrame => 0x91AF,
            Error::BoundaryError => 0x91BE,
            Error::CommandAborted => 0x91CA,
            Error::FileNotFound => 0x91F0,
            Error::DuplicateError => 0x91DE,
            Error::OutOfEepromError => 0x910E,
            Error::UnknownError { sw1, sw2 } => return Some(StatusWord::new(*sw1, *sw2)),
            _ => return None,
        };
        Some(StatusWord::from_u16(sw))
    }
}

/// Crate result alias.
pub type Result<T> = std::result::Result<T, Error>;
