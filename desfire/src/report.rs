// desfire/src/report.rs

//! Text rendering of statuses and file settings for diagnostics.
//!
//! Nothing here influences protocol behaviour.

use std::fmt::{self, Display, Formatter};

use crate::protocol::file_settings::{FileDetails, FileSettings};
use crate::{Error, Result};

/// One-line summary of an operation outcome.
pub fn status_line<T>(result: &Result<T>) -> &'static str {
    match result {
        Ok(_) => "SUCCESS",
        Err(Error::PermissionDenied) => "PERMISSION_DENIED ERROR",
        Err(Error::FileNotFound) | Err(Error::FileOrAppNotFound) => "FILE/APP NOT FOUND ERROR",
        Err(Error::DuplicateError) => "DUPLICATE ERROR",
        Err(_) => "FAIL (not categorized)",
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "YES" } else { "NO" }
}

impl Display for FileSettings {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "File Settings for file {:02x}", self.file_no)?;
        let header = match (self.valid, self.header) {
            (true, Some(header)) => header,
            _ => return writeln!(f, "The FileSettings for this file are INVALID"),
        };

        writeln!(
            f,
            "File Type         : {:02x} ({})",
            header.file_type.as_u8(),
            header.file_type
        )?;
        writeln!(f, "File Options      : {:02X}", header.options)?;
        writeln!(f, "File Comm Mode    : {}", header.comm_mode)?;
        writeln!(f, "File RW/CAR AccRg : {:02X}", header.access_rights.rw_car)?;
        writeln!(f, "File R/W    AccRg : {:02X}", header.access_rights.r_w)?;

        match self.details {
            FileDetails::None => Ok(()),
            FileDetails::Data { file_size } => writeln!(f, "File Size         : {}", file_size),
            FileDetails::Value {
                lower_limit,
                upper_limit,
                limited_credit_value,
                limited_credit_enabled,
                free_get_value,
            } => {
                writeln!(f, "Lower Limit       : {}", lower_limit)?;
                writeln!(f, "Upper Limit       : {}", upper_limit)?;
                writeln!(f, "Limited Credit    : {}", limited_credit_value)?;
                writeln!(f, "Limtd Cred Enabld : {}", yes_no(limited_credit_enabled))?;
                writeln!(f, "FreeAccess GetVal : {}", yes_no(free_get_value))
            }
            FileDetails::Record {
                record_size,
                max_records,
                current_records,
            } => {
                writeln!(f, "File Record Size  : {}", record_size)?;
                writeln!(f, "Max No of Records : {}", max_records)?;
                writeln!(f, "Cur No of Records : {}", current_records)
            }
        }
    }
}
