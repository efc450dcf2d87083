// fixtures.rs — provides commonly used test payloads/frames

use desfire::types::Aid;

pub const OK: &str = "9100";
pub const MORE: &str = "91AF";

/// Decode a hex fixture; spaces are allowed for readability.
pub fn h(s: &str) -> Vec<u8> {
    hex::decode(s.replace(' ', "")).expect("valid hex fixture")
}

/// `payload` followed by a trailer, both given as hex.
pub fn response(payload: &str, trailer: &str) -> Vec<u8> {
    let mut v = h(payload);
    v.extend_from_slice(&h(trailer));
    v
}

pub fn sample_aid() -> Aid {
    Aid::from_bytes([0x56, 0x78, 0x9A])
}

/// Bytes 1..=32, the tutorial payload.
pub fn counting_payload() -> Vec<u8> {
    (1..=32u8).collect()
}

pub fn version_round1() -> Vec<u8> {
    response("04 01 01 33 00 1A 05", MORE)
}

pub fn version_round2() -> Vec<u8> {
    response("04 01 01 03 00 1A 05", MORE)
}

/// uid(7) + batch(4) + production(3)
pub fn version_round3() -> Vec<u8> {
    response("04 52 6A 92 5F 61 80 BA 44 E4 2D 30 2E 18", OK)
}

pub fn standard_file_settings_payload() -> Vec<u8> {
    h("00 00 EE EE 20 00 00")
}
