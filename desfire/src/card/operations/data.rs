// desfire/src/card/operations/data.rs

//! Reading and writing standard data files.

use log::{debug, warn};

use crate::card::Desfire;
use crate::card::operations::{expect_done, unexpected};
use crate::protocol::parser::copy_into;
use crate::protocol::{Command, Response, encode_read_data};
use crate::{Error, Result};

/// Read `length` bytes at `offset` from a standard data file.
///
/// The request is refused up front when the answer could not fit in the
/// session's response ceiling.
pub fn read_data(card: &mut Desfire, file_no: u8, offset: u32, length: usize) -> Result<Vec<u8>> {
    // Validate the parameters before the capacity check so range errors win.
    encode_read_data(file_no, offset, length)?;
    let capacity = card.max_payload_len();
    if length > capacity {
        warn!("read of {} bytes exceeds response capacity {}", length, capacity);
        return Err(Error::NoRoom {
            needed: length,
            capacity,
        });
    }

    debug!("read file {} offset {} length {}", file_no, offset, length);
    match card.execute(Command::ReadData {
        file_no,
        offset,
        length,
    })? {
        Response::Data(data) => Ok(data),
        other => Err(unexpected("ReadData", &other)),
    }
}

/// Like [`read_data`] but copies into `out`. Nothing is written on error.
pub fn read_data_into(
    card: &mut Desfire,
    file_no: u8,
    offset: u32,
    length: usize,
    out: &mut [u8],
) -> Result<usize> {
    if out.len() < length {
        return Err(Error::NoRoom {
            needed: length,
            capacity: out.len(),
        });
    }
    let data = read_data(card, file_no, offset, length)?;
    copy_into(&data, out)
}

/// Write `data` at `offset`. At most [`MAX_WRITE_LEN`](crate::protocol::MAX_WRITE_LEN) bytes per call.
pub fn write_data(card: &mut Desfire, file_no: u8, offset: u32, data: &[u8]) -> Result<()> {
    debug!("write file {} offset {} length {}", file_no, offset, data.len());
    let resp = card.execute(Command::WriteData {
        file_no,
        offset,
        data: data.to_vec(),
    })?;
    expect_done("WriteData", resp)
}
