// In-memory DESFire answering plain commands, for end-to-end tests.

use std::collections::HashMap;

use desfire::transport::Transceive;

const OK: [u8; 2] = [0x91, 0x00];
const DUPLICATE: [u8; 2] = [0x91, 0xDE];
const NOT_FOUND: [u8; 2] = [0x91, 0xF0];
const APP_NOT_FOUND: [u8; 2] = [0x91, 0xA0];
const BOUNDARY: [u8; 2] = [0x91, 0xBE];
const LENGTH: [u8; 2] = [0x91, 0x7E];
const ILLEGAL: [u8; 2] = [0x91, 0x1C];

fn le24(b: &[u8]) -> usize {
    usize::from(b[0]) | usize::from(b[1]) << 8 | usize::from(b[2]) << 16
}

/// Applications and their standard files live in memory; written bytes
/// are what ReadData hands back.
#[derive(Debug, Default)]
pub struct SimulatedCard {
    apps: HashMap<[u8; 3], HashMap<u8, Vec<u8>>>,
    selected: [u8; 3],
}

impl SimulatedCard {
    pub fn new() -> Self {
        Self::default()
    }

    fn files(&mut self) -> Option<&mut HashMap<u8, Vec<u8>>> {
        self.apps.get_mut(&self.selected)
    }

    fn answer(&mut self, ins: u8, data: &[u8]) -> Vec<u8> {
        match ins {
            0xCA => {
                let aid = [data[0], data[1], data[2]];
                if self.apps.contains_key(&aid) {
                    return DUPLICATE.to_vec();
                }
                self.apps.insert(aid, HashMap::new());
                OK.to_vec()
            }
            0x5A => {
                let aid = [data[0], data[1], data[2]];
                if aid != [0; 3] && !self.apps.contains_key(&aid) {
                    return APP_NOT_FOUND.to_vec();
                }
                self.selected = aid;
                OK.to_vec()
            }
            0xCD => {
                let (file_no, size) = (data[0], le24(&data[4..7]));
                let Some(files) = self.files() else {
                    return APP_NOT_FOUND.to_vec();
                };
                if files.contains_key(&file_no) {
                    return DUPLICATE.to_vec();
                }
                files.insert(file_no, vec![0; size]);
                OK.to_vec()
            }
            0x8D => {
                let (file_no, offset, len) = (data[0], le24(&data[1..4]), le24(&data[4..7]));
                let payload = &data[7..];
                if payload.len() != len {
                    return LENGTH.to_vec();
                }
                let Some(file) = self.files().and_then(|f| f.get_mut(&file_no)) else {
                    return NOT_FOUND.to_vec();
                };
                if offset + len > file.len() {
                    return BOUNDARY.to_vec();
                }
                file[offset..offset + len].copy_from_slice(payload);
                OK.to_vec()
            }
            0xBD => {
                let (file_no, offset, len) = (data[0], le24(&data[1..4]), le24(&data[4..7]));
                let Some(file) = self.files().and_then(|f| f.get(&file_no)) else {
                    return NOT_FOUND.to_vec();
                };
                if offset + len > file.len() {
                    return BOUNDARY.to_vec();
                }
                let mut out = file[offset..offset + len].to_vec();
                out.extend_from_slice(&OK);
                out
            }
            _ => ILLEGAL.to_vec(),
        }
    }
}

impl Transceive for SimulatedCard {
    fn transceive(&mut self, command: &[u8], _max: usize) -> desfire::Result<Vec<u8>> {
        // 90 INS 00 00 [Lc data..] 00
        let ins = command[1];
        let data = if command.len() > 5 {
            &command[5..command.len() - 1]
        } else {
            &[][..]
        };
        Ok(self.answer(ins, data))
    }
}
