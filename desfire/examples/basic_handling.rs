// Basic DESFire handling walk-through.
//
// Runs the usual first steps against a card: version, free memory, create
// and select an application, create a standard file, write it, read it
// back and dump its settings. A real reader plugs in through the
// `Transceive` trait; here a MockTransport replays the answers a fresh
// EV2 card gives, so the example runs without hardware.
//
//     RUST_LOG=trace cargo run --example basic_handling

use anyhow::Context;
use desfire::prelude::*;
use desfire::report::status_line;
use desfire::test_support::{ok_response, version_frames};

const FILE_NO: u8 = 1;

fn seeded_reader(data: &[u8]) -> anyhow::Result<MockTransport> {
    let mock = MockTransport::with_responses(version_frames(&parse_hex(
        "04 52 6A 92 5F 61 80 BA 44 E4 2D 30 2E 18",
    )?));
    mock.push_response(ok_response(&parse_hex("00 1C 00")?));
    for _ in 0..4 {
        // create app, select, create file, write
        mock.push_response(ok_response(&[]));
    }
    mock.push_response(ok_response(data));
    mock.push_response(ok_response(&parse_hex("00 00 EE EE 20 00 00")?));
    Ok(mock)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let data: Vec<u8> = (1..=32).collect();
    let reader = seeded_reader(&data)?;
    let mut card = Desfire::builder()
        .with_transport(Box::new(reader.clone()))
        .with_config(SessionConfig::pn532())
        .build()?;

    let version = card.get_version().context("GetVersion")?;
    println!(
        "UID {}  HW {}.{}  SW {}.{}  storage {} bytes",
        bytes_to_hex_spaced(&version.uid),
        version.hardware.major,
        version.hardware.minor,
        version.software.major,
        version.software.minor,
        version.hardware.storage_bytes()
    );
    println!("free memory: {} bytes", card.get_free_memory()?);

    let aid = Aid::from_bytes([0x56, 0x78, 0x9A]);
    println!(
        "create application {}: {}",
        aid.to_hex(),
        status_line(&card.create_application_default_aes(aid))
    );
    println!(
        "select application {}: {}",
        aid.to_hex(),
        status_line(&card.select_application(aid))
    );
    println!(
        "create file {}: {}",
        FILE_NO,
        status_line(&card.create_standard_file_free_access_sized(FILE_NO, 32, CommMode::Plain))
    );
    println!(
        "write file {}: {}",
        FILE_NO,
        status_line(&card.write_data(FILE_NO, 0, &data))
    );

    let read = card.read_data(FILE_NO, 0, data.len())?;
    println!("read back: {}", bytes_to_hex_spaced(&read));
    anyhow::ensure!(read == data, "read back differs from written data");

    print!("{}", card.get_file_settings(FILE_NO)?);
    println!("{} frames exchanged", reader.sent().len());
    Ok(())
}
