#[path = "../common/mod.rs"]
mod common;

use common::fixtures::{OK, response, standard_file_settings_payload};
use desfire::protocol::{Command, FileDetails, Response, decode_file_settings};
use desfire::types::{CommMode, FileType};

#[test]
fn standard_file_round_trip() {
    let fs = decode_file_settings(1, &standard_file_settings_payload());
    assert!(fs.valid);
    assert_eq!(fs.file_type(), Some(FileType::StandardData));
    assert_eq!(fs.comm_mode(), Some(CommMode::Plain));
    assert_eq!(fs.file_size(), Some(32));
}

#[test]
fn plain_mode_with_bit1_set() {
    let fs = decode_file_settings(1, &common::fixtures::h("01 02 12 34 00 01 00"));
    assert_eq!(fs.file_type(), Some(FileType::BackupData));
    assert_eq!(fs.comm_mode(), Some(CommMode::Plain));
    assert_eq!(fs.file_size(), Some(256));
}

#[test]
fn record_file_via_response() {
    let raw = response("04 01 EE EE 10 00 00 0A 00 00 03 00 00", OK);
    match Response::decode(&Command::GetFileSettings { file_no: 5 }, &raw).unwrap() {
        Response::FileSettings { raw, settings } => {
            assert_eq!(raw.len(), 13);
            assert_eq!(settings.file_no, 5);
            assert_eq!(settings.comm_mode(), Some(CommMode::Mac));
            assert_eq!(
                settings.details,
                FileDetails::Record {
                    record_size: 16,
                    max_records: 10,
                    current_records: 3
                }
            );
        }
        other => panic!("unexpected response: {:?}", other),
    }
}

#[test]
fn short_value_file_is_invalid() {
    // 16 bytes: one short of the flags byte
    let fs = decode_file_settings(2, &[0x02; 16]);
    assert!(!fs.valid);
    assert_eq!(fs.file_type(), Some(FileType::Value));
    assert_eq!(fs.details, FileDetails::None);
}

#[test]
fn transaction_mac_reported_invalid() {
    let fs = decode_file_settings(7, &common::fixtures::h("05 00 F0 1F 00 00 00"));
    assert!(!fs.valid);
    assert_eq!(fs.file_type(), Some(FileType::TransactionMac));
    assert_eq!(fs.details, FileDetails::None);
}
