// desfire/src/protocol/frame.rs

//! ISO 7816-4 wrapping of native commands and trailer splitting.

use crate::constants::{
    COMMAND_HEADER_LEN, DESFIRE_CLA, DESFIRE_LE, DESFIRE_P1, DESFIRE_P2, MAX_DATA_LEN, TRAILER_LEN,
};
use crate::status::StatusWord;
use crate::{Error, Result};

/// ISO 7816-4 wrapping of native DESFire commands.
/// Command: [CLA=0x90] [INS] [P1=0] [P2=0] [Lc] [Data(Lc)] [Le=0]
/// Commands without data omit Lc: [CLA] [INS] [P1] [P2] [Le]
/// Response: [Payload(n)] [SW1] [SW2]
pub struct Frame;

impl Frame {
    /// Wrap instruction data into a command APDU.
    pub fn encode(ins: u8, data: &[u8]) -> Result<Vec<u8>> {
        if data.len() > MAX_DATA_LEN {
            return Err(Error::InvalidArgument(format!(
                "command data is {} bytes, Lc holds at most {}",
                data.len(),
                MAX_DATA_LEN
            )));
        }

        let mut out = Vec::with_capacity(COMMAND_HEADER_LEN + 1 + data.len() + 1);
        out.extend_from_slice(&[DESFIRE_CLA, ins, DESFIRE_P1, DESFIRE_P2]);
        if !data.is_empty() {
            out.push(data.len() as u8);
            out.extend_from_slice(data);
        }
        out.push(DESFIRE_LE);
        Ok(out)
    }

    /// Split a response into payload and trailer. Fails when the response
    /// cannot hold a trailer.
    pub fn split(response: &[u8]) -> Result<(&[u8], StatusWord)> {
        if response.len() < TRAILER_LEN {
            return Err(Error::WrongResponseLength {
                expected: TRAILER_LEN,
                actual: response.len(),
            });
        }
        let (payload, trailer) = response.split_at(response.len() - TRAILER_LEN);
        Ok((payload, StatusWord::new(trailer[0], trailer[1])))
    }
}
