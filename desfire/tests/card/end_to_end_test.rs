#[path = "../common/mod.rs"]
mod common;

use common::card_sim::SimulatedCard;
use common::fixtures::{OK, counting_payload, h, response, sample_aid};
use desfire::card::Desfire;
use desfire::report::status_line;
use desfire::types::{AccessRights, CommMode};
use desfire::Error;

#[test]
fn create_select_write_read() {
    common::init_logger();
    let data = counting_payload();
    let mut read_back = data.clone();
    read_back.extend_from_slice(&h(OK));

    let (mut card, mock) = common::session(vec![
        response("", OK),
        response("", OK),
        response("", OK),
        response("", OK),
        read_back,
    ]);
    let aid = sample_aid();

    assert_eq!(status_line(&card.create_application_default_aes(aid)), "SUCCESS");
    card.select_application(aid).unwrap();
    card.create_standard_data_file(1, CommMode::Plain, AccessRights::FREE, 32)
        .unwrap();
    card.write_data(1, 0, &data).unwrap();
    assert_eq!(card.read_data(1, 0, 32).unwrap(), data);

    let sent = mock.sent();
    assert_eq!(sent.len(), 5);
    assert_eq!(sent[0], h("90 CA 00 00 05 56 78 9A 0F 85 00"));
    assert_eq!(sent[1], h("90 5A 00 00 03 56 78 9A 00"));
    assert_eq!(sent[2], h("90 CD 00 00 07 01 00 EE EE 20 00 00 00"));
    assert_eq!(&sent[3][..12], &h("90 8D 00 00 27 01 00 00 00 20 00 00")[..]);
    assert_eq!(&sent[3][12..44], &data[..]);
    assert_eq!(sent[3][44], 0x00);
    assert_eq!(sent[3].len(), 45);
    assert_eq!(sent[4], h("90 BD 00 00 07 01 00 00 00 20 00 00 00"));
    assert_eq!(mock.pending(), 0);
}

#[test]
fn file_settings_after_create() {
    let (mut card, _mock) = common::session(vec![
        response("", OK),
        response("00 00 EE EE 20 00 00", OK),
    ]);
    card.create_standard_file_free_access_sized(1, 32, CommMode::Plain)
        .unwrap();
    let fs = card.get_file_settings(1).unwrap();
    assert!(fs.valid);
    assert_eq!(fs.header.unwrap().access_rights, AccessRights::FREE);
    assert_eq!(fs.file_size(), Some(32));
}

#[test]
fn duplicate_application_reported() {
    let (mut card, _mock) = common::session(vec![response("", "91DE")]);
    let res = card.create_application_default_aes(sample_aid());
    assert_eq!(status_line(&res), "DUPLICATE ERROR");
}

#[test]
fn written_bytes_come_back_from_card() {
    common::init_logger();
    let mut card = Desfire::new(Box::new(SimulatedCard::new()));
    let aid = sample_aid();
    let data = counting_payload();

    card.create_application_default_aes(aid).unwrap();
    card.select_application(aid).unwrap();
    card.create_standard_data_file(1, CommMode::Plain, AccessRights::FREE, 32)
        .unwrap();
    card.write_data(1, 0, &data).unwrap();
    assert_eq!(card.read_data(1, 0, 32).unwrap(), data);

    // Partial overwrite lands at the requested offset
    card.write_data(1, 4, &[0xAA; 4]).unwrap();
    assert_eq!(card.read_data(1, 2, 8).unwrap(), vec![3, 4, 0xAA, 0xAA, 0xAA, 0xAA, 9, 10]);
}

#[test]
fn simulated_card_reports_its_errors() {
    let mut card = Desfire::new(Box::new(SimulatedCard::new()));
    let aid = sample_aid();
    card.create_application_default_aes(aid).unwrap();
    assert_eq!(
        card.create_application_default_aes(aid),
        Err(Error::DuplicateError)
    );
    card.select_application(aid).unwrap();
    card.create_standard_file_free_access_sized(1, 16, CommMode::Plain)
        .unwrap();
    assert_eq!(card.write_data(1, 12, &[0; 8]), Err(Error::BoundaryError));
    assert_eq!(card.read_data(2, 0, 4), Err(Error::FileNotFound));
}
