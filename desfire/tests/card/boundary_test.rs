#[path = "../common/mod.rs"]
mod common;

use common::fixtures::{OK, response, sample_aid};
use desfire::config::SessionConfig;
use desfire::test_support::mock_session_with_config;
use desfire::types::{AccessRights, CommMode};
use desfire::Error;

fn is_wrong_length<T: std::fmt::Debug>(res: desfire::Result<T>) -> bool {
    matches!(res, Err(Error::WrongResponseLength { .. }))
}

#[test]
fn one_byte_response_on_every_operation() {
    let one = || vec![vec![0x91]];
    let aid = sample_aid();
    let mut buf = [0u8; 64];

    let (mut c, _m) = common::session(one());
    assert!(is_wrong_length(c.select_application(aid)));
    let (mut c, _m) = common::session(one());
    assert!(is_wrong_length(c.create_application_default_aes(aid)));
    let (mut c, _m) = common::session(one());
    assert!(is_wrong_length(c.create_standard_data_file(
        1,
        CommMode::Plain,
        AccessRights::FREE,
        32
    )));
    let (mut c, _m) = common::session(one());
    assert!(is_wrong_length(c.write_data(1, 0, &[1, 2, 3])));
    let (mut c, _m) = common::session(one());
    assert!(is_wrong_length(c.read_data(1, 0, 3)));
    let (mut c, _m) = common::session(one());
    assert!(is_wrong_length(c.read_data_into(1, 0, 3, &mut buf)));
    let (mut c, _m) = common::session(one());
    assert!(is_wrong_length(c.get_file_settings(1)));
    let (mut c, _m) = common::session(one());
    assert!(is_wrong_length(c.get_file_settings_into(1, &mut buf)));
    let (mut c, _m) = common::session(one());
    assert!(is_wrong_length(c.get_version()));
    let (mut c, _m) = common::session(one());
    assert!(is_wrong_length(c.get_free_memory()));
    let (mut c, _m) = common::session(one());
    assert!(is_wrong_length(c.get_more_data()));
}

#[test]
fn trailing_bytes_on_status_only_response() {
    let (mut card, _m) = common::session(vec![response("00", OK)]);
    assert_eq!(
        card.select_application(sample_aid()),
        Err(Error::WrongResponseLength {
            expected: 0,
            actual: 1
        })
    );
}

#[test]
fn short_read_payload() {
    let (mut card, _m) = common::session(vec![response("0102", OK)]);
    assert_eq!(
        card.read_data(1, 0, 4),
        Err(Error::WrongResponseLength {
            expected: 4,
            actual: 2
        })
    );
}

#[test]
fn pn532_ceiling_limits_reads() {
    let (mut card, mock) = mock_session_with_config(vec![], SessionConfig::pn532());
    assert_eq!(
        card.read_data(1, 0, 200),
        Err(Error::NoRoom {
            needed: 200,
            capacity: 123
        })
    );
    assert!(mock.sent().is_empty());
}

#[test]
fn free_memory_wrong_length() {
    let (mut card, _m) = common::session(vec![response("0001", OK)]);
    assert_eq!(
        card.get_free_memory(),
        Err(Error::WrongResponseLength {
            expected: 3,
            actual: 2
        })
    );
}
