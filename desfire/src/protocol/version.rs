// desfire/src/protocol/version.rs

//! GetVersion payload (all three frames concatenated, trailers stripped):
//! hardware(7) + software(7) + uid(7) + batch_no(4) + production(3) + [fab_key_id(1)]

use crate::constants::{VERSION_PART_LEN, VERSION_PRODUCTION_LEN, VERSION_PRODUCTION_LEN_EXT};
use crate::protocol::parser;
use crate::{Error, Result};

/// Total payload lengths GetVersion can produce
pub const VERSION_LEN: usize = 2 * VERSION_PART_LEN + VERSION_PRODUCTION_LEN;
/// Length with the trailing fab key id
pub const VERSION_LEN_EXT: usize = 2 * VERSION_PART_LEN + VERSION_PRODUCTION_LEN_EXT;

/// Hardware or software product block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProductInfo {
    /// `0x04` for NXP
    pub vendor_id: u8,
    /// Product type
    pub kind: u8,
    /// Product subtype
    pub subtype: u8,
    /// Major version
    pub major: u8,
    /// Minor version
    pub minor: u8,
    /// Encoded storage size, see [`ProductInfo::storage_bytes`]
    pub storage_size: u8,
    /// Communication protocol type
    pub protocol: u8,
}

impl ProductInfo {
    fn from_slice(b: &[u8]) -> Result<Self> {
        parser::ensure_len(b, VERSION_PART_LEN)?;
        Ok(Self {
            vendor_id: b[0],
            kind: b[1],
            subtype: b[2],
            major: b[3],
            minor: b[4],
            storage_size: b[5],
            protocol: b[6],
        })
    }

    /// Storage size in bytes. Bits 7-1 give the exponent `n`; with bit 0
    /// clear the size is exactly `2^n`, with bit 0 set it lies between
    /// `2^n` and `2^(n+1)` and the lower bound is returned.
    pub fn storage_bytes(&self) -> u64 {
        1u64
            .checked_shl(u32::from(self.storage_size >> 1))
            .unwrap_or(u64::MAX)
    }

    /// True when the storage size lies strictly between two powers of two.
    pub fn storage_is_approximate(&self) -> bool {
        self.storage_size & 0x01 != 0
    }
}

/// Decoded GetVersion response.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VersionInfo {
    /// First frame
    pub hardware: ProductInfo,
    /// Second frame
    pub software: ProductInfo,
    /// 7 byte UID
    pub uid: [u8; 7],
    /// Production batch number
    pub batch_no: [u8; 4],
    /// Batch/fab key, CW/fab key and year of production bytes
    pub production: [u8; 3],
    /// Only present on tags answering with 15 production bytes
    pub fab_key_id: Option<u8>,
}

impl VersionInfo {
    /// Decode the 28 or 29 byte concatenated payload.
    pub fn decode(payload: &[u8]) -> Result<Self> {
        if payload.len() != VERSION_LEN && payload.len() != VERSION_LEN_EXT {
            return Err(Error::WrongResponseLength {
                expected: VERSION_LEN,
                actual: payload.len(),
            });
        }

        let hardware = ProductInfo::from_slice(&payload[0..7])?;
        let software = ProductInfo::from_slice(&payload[7..14])?;

        let mut uid = [0u8; 7];
        uid.copy_from_slice(&payload[14..21]);
        let mut batch_no = [0u8; 4];
        batch_no.copy_from_slice(&payload[21..25]);
        let mut production = [0u8; 3];
        production.copy_from_slice(&payload[25..28]);

        Ok(Self {
            hardware,
            software,
            uid,
            batch_no,
            production,
            fab_key_id: payload.get(28).copied(),
        })
    }
}
