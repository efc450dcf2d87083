// desfire/src/status.rs

//! Status trailer (`SW1 SW2`) handling.
//!
//! DESFire answers native commands with `91 xx`; ISO 7816-4 checking
//! errors (`67xx`, `69xx`, `6Axx`) may still show up when the card
//! rejects the wrapping itself.

use std::fmt::{self, Display, Formatter};

use crate::Error;
use crate::constants::{SW1_DESFIRE, SW2_ADDITIONAL_FRAME, SW2_OPERATION_OK};

/// Two-byte status trailer, `SW1` in the high byte.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusWord(u16);

impl StatusWord {
    /// `91 00`, normal completion
    pub const OPERATION_OK: Self = Self::new(SW1_DESFIRE, SW2_OPERATION_OK);
    /// `91 AF`, more frames queued
    pub const ADDITIONAL_FRAME: Self = Self::new(SW1_DESFIRE, SW2_ADDITIONAL_FRAME);

    /// Build from the two trailer bytes.
    pub const fn new(sw1: u8, sw2: u8) -> Self {
        Self(((sw1 as u16) << 8) | sw2 as u16)
    }

    /// Build from `SW1 << 8 | SW2`.
    pub const fn from_u16(sw: u16) -> Self {
        Self(sw)
    }

    /// `SW1 << 8 | SW2`.
    pub fn as_u16(self) -> u16 {
        self.0
    }

    /// First trailer byte.
    pub fn sw1(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Second trailer byte.
    pub fn sw2(self) -> u8 {
        (self.0 & 0xFF) as u8
    }

    /// Map a trailer to the status taxonomy. `91 00` is the only success.
    pub fn to_result(self) -> Result<(), Error> {
        let err = match self.0 {
            0x9100 => return Ok(()),
            0x6581 | 0x91EE => Error::MemoryError,
            0x6700 | 0x917E => Error::LengthError,
            0x6982 => Error::SecurityNotSatisfied,
            0x6985 => Error::ConditionsNotSatisfied,
            0x6A82 => Error::FileOrAppNotFound,
            0x6A86 => Error::IncorrectParams,
            0x6A87 => Error::IncorrectLc,
            0x6A00 => Error::ClaNotSupported,
            0x910B => Error::CommandNotFound,
            0x910C => Error::CommandFormatError,
            0x911C => Error::IllegalCommandCode,
            0x911E => Error::IntegrityError,
            0x9140 => Error::NoSuchKey,
            0x919D => Error::PermissionDenied,
            0x919E => Error::ParameterError,
            0x91AD => Error::AuthenticationDelay,
            0x91AE => Error::AuthenticationError,
            0x91AF => Error::AdditionalFrame,
            0x91BE => Error::BoundaryError,
            0x91CA => Error::CommandAborted,
            0x91F0 => Error::FileNotFound,
            0x91DE => Error::DuplicateError,
            0x910E => Error::OutOfEepromError,
            _ => Error::UnknownError {
                sw1: self.sw1(),
                sw2: self.sw2(),
            },
        };
        Err(err)
    }
}

impl Display for StatusWord {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:04X}", self.0)
    }
}

/// Map a trailer that did not match the expected one to its error.
/// `91 00` has no failure meaning and comes back as an unknown-error.
pub fn interpret(sw1: u8, sw2: u8) -> Error {
    match StatusWord::new(sw1, sw2).to_result() {
        Ok(()) => Error::UnknownError { sw1, sw2 },
        Err(e) => e,
    }
}
