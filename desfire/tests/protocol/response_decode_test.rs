#[path = "../common/mod.rs"]
mod common;

use common::fixtures::{MORE, OK, response, sample_aid};
use desfire::protocol::{Command, Response, decode_more_data, decode_read_data};
use desfire::Error;

#[test]
fn additional_frame_on_single_shot_is_error() {
    let cmds = [
        Command::SelectApplication { aid: sample_aid() },
        Command::ReadData {
            file_no: 1,
            offset: 0,
            length: 4,
        },
        Command::GetFileSettings { file_no: 1 },
        Command::GetFreeMemory,
    ];
    for cmd in &cmds {
        assert_eq!(
            Response::decode(cmd, &response("01020304", MORE)),
            Err(Error::AdditionalFrame),
            "{}",
            cmd.name()
        );
    }
}

#[test]
fn decoding_is_repeatable() {
    let raw = response("DEADBEEF", OK);
    let first = decode_read_data(&raw, 4).unwrap().to_vec();
    let second = decode_read_data(&raw, 4).unwrap().to_vec();
    assert_eq!(first, second);

    let failing = response("", "919D");
    assert_eq!(decode_read_data(&failing, 4), decode_read_data(&failing, 4));

    let cmd = Command::GetFileSettings { file_no: 3 };
    let fs = response("00 00 12 34 40 00 00", OK);
    assert_eq!(Response::decode(&cmd, &fs), Response::decode(&cmd, &fs));
}

#[test]
fn failure_payload_is_not_exposed() {
    // Bytes before an error trailer are never treated as data.
    let raw = response("AABBCCDD", "91BE");
    assert_eq!(decode_read_data(&raw, 4), Err(Error::BoundaryError));
}

#[test]
fn more_data_flag() {
    assert_eq!(
        decode_more_data(&response("0102", MORE)).unwrap(),
        (&[1u8, 2][..], true)
    );
    assert_eq!(
        decode_more_data(&response("03", OK)).unwrap(),
        (&[3u8][..], false)
    );
}

#[test]
fn free_memory_response() {
    assert_eq!(
        Response::decode(&Command::GetFreeMemory, &response("401F00", OK)).unwrap(),
        Response::FreeMemory(0x1F40)
    );
}
