// desfire/src/types.rs

//! Value types shared by commands and responses.

use derive_more::{Display, From, Into};

use crate::constants::{
    ACCESS_RIGHTS_FREE_R_W, ACCESS_RIGHTS_FREE_RW_CAR, ACCESS_RIGHTS_KEY_SLOTS_R_W,
    ACCESS_RIGHTS_KEY_SLOTS_RW_CAR, AID_LEN, DEFAULT_AES_APP_SETTINGS, DEFAULT_KEY_SETTINGS,
};
use crate::{Error, Result};

/// Largest value a 24-bit size field can carry
pub const U24_MAX: u32 = 0x00FF_FFFF;

/// Application identifier - Newtype Pattern (3 bytes)
///
/// Bytes are kept in the order they go on the wire. Some tools print
/// AIDs most-significant byte first; [`Aid::reversed`] converts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, From, Into)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aid([u8; AID_LEN]);

impl Aid {
    /// The PICC level application
    pub const MASTER: Self = Self([0x00, 0x00, 0x00]);

    /// AID from its wire-order bytes.
    pub const fn from_bytes(bytes: [u8; AID_LEN]) -> Self {
        Self(bytes)
    }

    /// Wire-order bytes.
    pub fn as_bytes(&self) -> &[u8; AID_LEN] {
        &self.0
    }

    /// Swap between wire order and display order.
    pub fn reversed(&self) -> Self {
        Self([self.0[2], self.0[1], self.0[0]])
    }

    /// Upper-case hex of the wire-order bytes.
    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for Aid {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        let arr: [u8; AID_LEN] = bytes.try_into().map_err(|_| {
            Error::InvalidArgument(format!(
                "AID must be {} bytes, got {}",
                AID_LEN,
                bytes.len()
            ))
        })?;
        Ok(Self(arr))
    }
}

/// Communication mode of a file.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CommMode {
    /// No protection
    #[display(fmt = "PLAIN")]
    Plain = 0x00,
    /// Plain data followed by a MAC
    #[display(fmt = "MAC")]
    Mac = 0x01,
    /// Enciphered
    #[display(fmt = "FULL encrypted")]
    Full = 0x03,
}

impl CommMode {
    /// Decode bits 0-1 of a file options byte.
    ///
    /// Plain shows up as `00b` or `10b`: bit 1 only matters when bit 0 is set.
    pub fn from_options(options: u8) -> Self {
        match (options & 0x01 != 0, options & 0x02 != 0) {
            (false, _) => Self::Plain,
            (true, false) => Self::Mac,
            (true, true) => Self::Full,
        }
    }

    /// Option bits as sent in CreateStdDataFile.
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

/// File type byte reported by GetFileSettings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FileType {
    /// `0x00`
    #[display(fmt = "Standard Data File")]
    StandardData,
    /// `0x01`
    #[display(fmt = "Backup Data File")]
    BackupData,
    /// `0x02`
    #[display(fmt = "Value File")]
    Value,
    /// `0x03`
    #[display(fmt = "Linear Record File")]
    LinearRecord,
    /// `0x04`
    #[display(fmt = "Cyclic Record File")]
    CyclicRecord,
    /// `0x05`
    #[display(fmt = "Transaction MAC File")]
    TransactionMac,
    /// Any other code, kept as received
    #[display(fmt = "Unknown File Type")]
    Unknown(u8),
}

impl FileType {
    /// Decode a file type byte. Unlisted codes are kept as [`FileType::Unknown`].
    pub fn from_u8(b: u8) -> Self {
        match b {
            0x00 => Self::StandardData,
            0x01 => Self::BackupData,
            0x02 => Self::Value,
            0x03 => Self::LinearRecord,
            0x04 => Self::CyclicRecord,
            0x05 => Self::TransactionMac,
            other => Self::Unknown(other),
        }
    }

    /// Wire value of the file type.
    pub fn as_u8(self) -> u8 {
        match self {
            Self::StandardData => 0x00,
            Self::BackupData => 0x01,
            Self::Value => 0x02,
            Self::LinearRecord => 0x03,
            Self::CyclicRecord => 0x04,
            Self::TransactionMac => 0x05,
            Self::Unknown(b) => b,
        }
    }
}

/// The two access-rights bytes of a file.
///
/// `rw_car`: high nibble Read&Write key, low nibble ChangeAccessRights key.
/// `r_w`: high nibble Read key, low nibble Write key.
/// Key number `0xE` grants free access, `0xF` denies access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AccessRights {
    /// Read&Write key, ChangeAccessRights key
    pub rw_car: u8,
    /// Read key, Write key
    pub r_w: u8,
}

impl AccessRights {
    /// Key number granting free access
    pub const FREE_ACCESS_KEY: u8 = 0x0E;
    /// Key number denying access
    pub const NO_ACCESS_KEY: u8 = 0x0F;

    /// Key 1 RW, key 2 CAR, key 3 R, key 4 W
    pub const KEY_SLOTS: Self = Self::new(ACCESS_RIGHTS_KEY_SLOTS_RW_CAR, ACCESS_RIGHTS_KEY_SLOTS_R_W);

    /// Every operation allowed without authentication
    pub const FREE: Self = Self::new(ACCESS_RIGHTS_FREE_RW_CAR, ACCESS_RIGHTS_FREE_R_W);

    /// Rights from the two wire bytes.
    pub const fn new(rw_car: u8, r_w: u8) -> Self {
        Self { rw_car, r_w }
    }

    /// Read&Write key number.
    pub fn read_write_key(&self) -> u8 {
        self.rw_car >> 4
    }

    /// ChangeAccessRights key number.
    pub fn change_key(&self) -> u8 {
        self.rw_car & 0x0F
    }

    /// Read key number.
    pub fn read_key(&self) -> u8 {
        self.r_w >> 4
    }

    /// Write key number.
    pub fn write_key(&self) -> u8 {
        self.r_w & 0x0F
    }
}

/// Key settings and application settings bytes used by CreateApplication.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ApplicationSettings {
    /// Master key settings byte
    pub key_settings: u8,
    /// Cipher (high nibble) and key count (low nibble)
    pub app_settings: u8,
}

impl ApplicationSettings {
    /// AES cipher, 5 keys, default master key settings
    pub const DEFAULT_AES: Self = Self::new(DEFAULT_KEY_SETTINGS, DEFAULT_AES_APP_SETTINGS);

    /// Settings from the two wire bytes.
    pub const fn new(key_settings: u8, app_settings: u8) -> Self {
        Self {
            key_settings,
            app_settings,
        }
    }

    /// Number of application keys (low nibble of the app settings).
    pub fn key_count(&self) -> u8 {
        self.app_settings & 0x0F
    }

    /// AES cipher selected (bit 7).
    pub fn is_aes(&self) -> bool {
        self.app_settings & 0x80 != 0
    }
}

/// Decode a little-endian 24-bit value.
pub fn le_u24(bytes: [u8; 3]) -> u32 {
    u32::from_le_bytes([bytes[0], bytes[1], bytes[2], 0])
}

/// Encode a value into a little-endian 24-bit field.
pub fn u24_to_le(value: u32) -> Result<[u8; 3]> {
    if value > U24_MAX {
        return Err(Error::InvalidArgument(format!(
            "{} does not fit a 24-bit field",
            value
        )));
    }
    let b = value.to_le_bytes();
    Ok([b[0], b[1], b[2]])
}
