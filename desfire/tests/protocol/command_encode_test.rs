#[path = "../common/mod.rs"]
mod common;

use common::fixtures::{h, sample_aid};
use desfire::protocol::{Command, MAX_WRITE_LEN};
use desfire::types::{AccessRights, ApplicationSettings, CommMode};
use desfire::Error;
use proptest::prelude::*;

#[test]
fn tutorial_commands_encode_byte_exact() {
    let aid = sample_aid();
    let cases = [
        (
            Command::CreateApplication {
                aid,
                settings: ApplicationSettings::DEFAULT_AES,
            },
            "90 CA 00 00 05 56 78 9A 0F 85 00",
        ),
        (Command::SelectApplication { aid }, "90 5A 00 00 03 56 78 9A 00"),
        (
            Command::CreateStandardDataFile {
                file_no: 1,
                comm_mode: CommMode::Plain,
                access_rights: AccessRights::FREE,
                size: 32,
            },
            "90 CD 00 00 07 01 00 EE EE 20 00 00 00",
        ),
        (
            Command::ReadData {
                file_no: 1,
                offset: 0,
                length: 32,
            },
            "90 BD 00 00 07 01 00 00 00 20 00 00 00",
        ),
        (Command::GetFileSettings { file_no: 1 }, "90 F5 00 00 01 01 00"),
        (Command::GetVersion, "90 60 00 00 00"),
        (Command::GetMoreData, "90 AF 00 00 00"),
        (Command::GetFreeMemory, "90 6E 00 00 00"),
    ];
    for (cmd, expected) in cases {
        assert_eq!(cmd.encode().unwrap(), h(expected), "{}", cmd.name());
    }
}

#[test]
fn write_data_carries_payload() {
    let data: Vec<u8> = (1..=32).collect();
    let apdu = Command::WriteData {
        file_no: 1,
        offset: 0,
        data: data.clone(),
    }
    .encode()
    .unwrap();
    assert_eq!(apdu.len(), 5 + 7 + 32 + 1);
    assert_eq!(apdu[4] as usize, 7 + 32);
    assert_eq!(&apdu[5..12], &h("01 000000 200000")[..]);
    assert_eq!(&apdu[12..44], &data[..]);
    assert_eq!(*apdu.last().unwrap(), 0x00);
}

#[test]
fn out_of_range_parameters_rejected() {
    let too_big = Command::WriteData {
        file_no: 1,
        offset: 0,
        data: vec![0; MAX_WRITE_LEN + 1],
    };
    assert!(matches!(too_big.encode(), Err(Error::InvalidArgument(_))));

    let far_offset = Command::ReadData {
        file_no: 1,
        offset: 0x100,
        length: 1,
    };
    assert!(matches!(far_offset.encode(), Err(Error::InvalidArgument(_))));

    let big_file = Command::CreateStandardDataFile {
        file_no: 1,
        comm_mode: CommMode::Plain,
        access_rights: AccessRights::KEY_SLOTS,
        size: 0x1_0000,
    };
    assert!(matches!(big_file.encode(), Err(Error::InvalidArgument(_))));
}

proptest! {
    #[test]
    fn select_application_layout(aid in any::<[u8; 3]>()) {
        let apdu = Command::SelectApplication { aid: aid.into() }.encode().unwrap();
        prop_assert_eq!(apdu.len(), 9);
        prop_assert_eq!(&apdu[5..8], &aid[..]);
        prop_assert_eq!(apdu[8], 0x00);
    }

    #[test]
    fn length_byte_matches_data(file_no in any::<u8>(), offset in 0u32..=0xFF, data in prop::collection::vec(any::<u8>(), 1..=MAX_WRITE_LEN)) {
        let apdu = Command::WriteData { file_no, offset, data }.encode().unwrap();
        prop_assert_eq!(apdu[4] as usize, apdu.len() - 6);
    }
}
