use desfire::status::StatusWord;
use desfire::{Error, Provenance};

#[test]
fn iso_and_native_aliases() {
    assert_eq!(StatusWord::from_u16(0x6581).to_result(), Err(Error::MemoryError));
    assert_eq!(StatusWord::from_u16(0x91EE).to_result(), Err(Error::MemoryError));
    assert_eq!(StatusWord::from_u16(0x6700).to_result(), Err(Error::LengthError));
    assert_eq!(StatusWord::from_u16(0x917E).to_result(), Err(Error::LengthError));
}

#[test]
fn unknown_trailer_never_success() {
    for sw in [0x9000u16, 0x9101, 0x6F00, 0x0000, 0xFFFF] {
        let res = StatusWord::from_u16(sw).to_result();
        assert!(
            matches!(res, Err(Error::UnknownError { .. })),
            "{:04X} -> {:?}",
            sw,
            res
        );
    }
}

#[test]
fn provenance_split() {
    assert_eq!(Error::PermissionDenied.provenance(), Provenance::Card);
    assert_eq!(
        Error::NoRoom {
            needed: 8,
            capacity: 4
        }
        .provenance(),
        Provenance::Local
    );
    assert_eq!(
        Error::Communication("lost".into()).provenance(),
        Provenance::Transport
    );
    assert_eq!(
        Error::DuplicateError.status_word(),
        Some(StatusWord::from_u16(0x91DE))
    );
    assert_eq!(Error::CrcWrong.status_word(), None);
}
