// desfire/src/card/operations/picc.rs

//! PICC level operations, including the chained GetVersion exchange.

use log::{debug, warn};

use crate::card::Desfire;
use crate::card::operations::unexpected;
use crate::constants::{VERSION_PART_LEN, VERSION_PRODUCTION_LEN, VERSION_PRODUCTION_LEN_EXT};
use crate::protocol::parser::copy_into;
use crate::protocol::version::{VERSION_LEN_EXT, VersionInfo};
use crate::protocol::{Command, Response, decode_version_frame, encode_get_more_data};
use crate::status::StatusWord;
use crate::Result;

/// One continuation round of GetVersion: GetMoreData with a fixed trailer
/// and payload length expected.
fn version_round(
    card: &mut Desfire,
    round: usize,
    expected: StatusWord,
    allowed: &[usize],
) -> Result<Vec<u8>> {
    let raw = card.transceive_raw(&encode_get_more_data()?)?;
    decode_version_frame(&raw, expected, allowed)
        .map(|payload| payload.to_vec())
        .map_err(|e| {
            warn!("GetVersion round {} failed: {}", round, e);
            e
        })
}

/// Run the three GetVersion rounds and return the concatenated payload.
///
/// Any round answering with an unexpected trailer or length aborts the
/// sequence; frames already collected are dropped.
pub fn get_version_raw(card: &mut Desfire) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(VERSION_LEN_EXT);

    match card.execute(Command::GetVersion)? {
        Response::VersionPart(part) => out.extend_from_slice(&part),
        other => return Err(unexpected("GetVersion", &other)),
    }
    out.extend_from_slice(&version_round(
        card,
        2,
        StatusWord::ADDITIONAL_FRAME,
        &[VERSION_PART_LEN],
    )?);
    out.extend_from_slice(&version_round(
        card,
        3,
        StatusWord::OPERATION_OK,
        &[VERSION_PRODUCTION_LEN, VERSION_PRODUCTION_LEN_EXT],
    )?);

    debug!("GetVersion complete ({} bytes)", out.len());
    Ok(out)
}

/// Run GetVersion and decode the payload.
pub fn get_version(card: &mut Desfire) -> Result<VersionInfo> {
    VersionInfo::decode(&get_version_raw(card)?)
}

/// Copy the GetVersion payload into `out`. Nothing is written on error.
pub fn get_version_into(card: &mut Desfire, out: &mut [u8]) -> Result<usize> {
    let payload = get_version_raw(card)?;
    copy_into(&payload, out)
}

/// Free bytes left on the PICC.
pub fn get_free_memory(card: &mut Desfire) -> Result<u32> {
    match card.execute(Command::GetFreeMemory)? {
        Response::FreeMemory(n) => {
            debug!("free memory: {} bytes", n);
            Ok(n)
        }
        other => Err(unexpected("GetFreeMemory", &other)),
    }
}

/// Issue a bare GetMoreData and return the frame payload together with
/// whether the card still has frames queued.
pub fn get_more_data(card: &mut Desfire) -> Result<(Vec<u8>, bool)> {
    match card.execute(Command::GetMoreData)? {
        Response::MoreData { payload, more } => Ok((payload, more)),
        other => Err(unexpected("GetMoreData", &other)),
    }
}
