#[path = "../common/mod.rs"]
mod common;

use common::fixtures::{OK, response, sample_aid};
use desfire::card::DesfireBuilder;
use desfire::transport::{MockTransport, Transceive};
use desfire::{Error, Provenance};

#[test]
fn failure_then_recovery() {
    let mock = MockTransport::new();
    mock.push_failure("timeout");
    mock.push_response(response("", OK));
    let mut card = DesfireBuilder::new()
        .with_transport(Box::new(mock.clone()))
        .build()
        .unwrap();

    let err = card.select_application(sample_aid()).unwrap_err();
    assert_eq!(err.provenance(), Provenance::Transport);
    // No retry: exactly one exchange for the failed call
    assert_eq!(mock.sent().len(), 1);

    card.select_application(sample_aid()).unwrap();
    assert_eq!(mock.sent().len(), 2);
}

#[test]
fn failure_mid_version_aborts() {
    let mock = MockTransport::with_responses(vec![common::fixtures::version_round1()]);
    mock.push_failure("field lost");
    let mut card = DesfireBuilder::new()
        .with_transport(Box::new(mock.clone()))
        .build()
        .unwrap();
    assert_eq!(
        card.get_version_raw(),
        Err(Error::Communication("field lost".into()))
    );
    assert_eq!(mock.sent().len(), 2);
}

/// A reader that reports its own failures with a non-transport error.
struct FlakyReader;

impl Transceive for FlakyReader {
    fn transceive(&mut self, _command: &[u8], _max: usize) -> desfire::Result<Vec<u8>> {
        Err(Error::Internal("usb stall".into()))
    }
}

#[test]
fn foreign_errors_become_communication() {
    let mut card = DesfireBuilder::new()
        .with_transport(Box::new(FlakyReader))
        .build()
        .unwrap();
    match card.get_free_memory() {
        Err(Error::Communication(msg)) => assert!(msg.contains("usb stall")),
        other => panic!("unexpected result: {:?}", other),
    }
}
