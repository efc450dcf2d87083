//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common MockTransport setup so tests across the
//! crate and tests/ directory can reuse the same logic.
#![allow(dead_code)]

use crate::card::Desfire;
use crate::config::SessionConfig;
use crate::constants::{SW1_DESFIRE, SW2_ADDITIONAL_FRAME, SW2_OPERATION_OK};
use crate::transport::MockTransport;

/// Append a `91 00` trailer to `payload`.
#[doc(hidden)]
pub fn ok_response(payload: &[u8]) -> Vec<u8> {
    status_response(payload, SW2_OPERATION_OK)
}

/// Append a `91 AF` trailer to `payload`.
#[doc(hidden)]
pub fn af_response(payload: &[u8]) -> Vec<u8> {
    status_response(payload, SW2_ADDITIONAL_FRAME)
}

/// Append a `91 <sw2>` trailer to `payload`.
#[doc(hidden)]
pub fn status_response(payload: &[u8], sw2: u8) -> Vec<u8> {
    let mut v = Vec::with_capacity(payload.len() + 2);
    v.extend_from_slice(payload);
    v.push(SW1_DESFIRE);
    v.push(sw2);
    v
}

/// Build a session over a MockTransport pre-seeded with `responses`.
/// The returned mock shares state with the one inside the session, so
/// callers can inspect the sent commands afterwards.
#[doc(hidden)]
pub fn mock_session(responses: Vec<Vec<u8>>) -> (Desfire, MockTransport) {
    mock_session_with_config(responses, SessionConfig::default())
}

/// Same as [`mock_session`] with an explicit config.
#[doc(hidden)]
pub fn mock_session_with_config(
    responses: Vec<Vec<u8>>,
    config: SessionConfig,
) -> (Desfire, MockTransport) {
    let mock = MockTransport::with_responses(responses);
    let session = Desfire::with_config(Box::new(mock.clone()), config);
    (session, mock)
}

/// The three frames of a well-formed GetVersion exchange. `production`
/// must be 14 or 15 bytes for the exchange to succeed.
#[doc(hidden)]
pub fn version_frames(production: &[u8]) -> Vec<Vec<u8>> {
    vec![
        af_response(&[0x04, 0x01, 0x01, 0x33, 0x00, 0x1A, 0x05]),
        af_response(&[0x04, 0x01, 0x01, 0x03, 0x00, 0x1A, 0x05]),
        ok_response(production),
    ]
}
