// desfire/src/constants.rs
//! Common protocol constants used across the crate

/// Class byte of every native DESFire command wrapped in ISO 7816-4 framing
pub const DESFIRE_CLA: u8 = 0x90;

/// P1 is always zero for the wrapped native commands
pub const DESFIRE_P1: u8 = 0x00;
/// P2 of every wrapped native command
pub const DESFIRE_P2: u8 = 0x00;

/// Trailing Le byte appended to every command
pub const DESFIRE_LE: u8 = 0x00;

/// Length of the command header: CLA INS P1 P2
pub const COMMAND_HEADER_LEN: usize = 4;

// Instruction opcodes (the subset this crate speaks)

/// CreateApplication
pub const INS_CREATE_APPLICATION: u8 = 0xCA;
/// SelectApplication
pub const INS_SELECT_APPLICATION: u8 = 0x5A;
/// GetVersion
pub const INS_GET_VERSION: u8 = 0x60;
/// GetFileSettings
pub const INS_GET_FILE_SETTINGS: u8 = 0xF5;
/// FreeMemory
pub const INS_GET_FREE_MEMORY: u8 = 0x6E;
/// GetMoreData, also the continuation of GetVersion
pub const INS_GET_MORE_DATA: u8 = 0xAF;
/// CreateStdDataFile
pub const INS_CREATE_STANDARD_DATA_FILE: u8 = 0xCD;
/// ReadData
pub const INS_READ_DATA: u8 = 0xBD;
/// WriteData
pub const INS_WRITE_DATA: u8 = 0x8D;

/// SW1 of every native DESFire status trailer
pub const SW1_DESFIRE: u8 = 0x91;

/// SW2 for normal completion
pub const SW2_OPERATION_OK: u8 = 0x00;

/// SW2 when the card has more response frames queued
pub const SW2_ADDITIONAL_FRAME: u8 = 0xAF;

/// Length of the SW1 SW2 trailer
pub const TRAILER_LEN: usize = 2;

/// Single-byte Lc: no command carries more than this many data bytes
pub const MAX_DATA_LEN: usize = 255;

/// Largest response the session will ever accept from a transport
pub const MAX_RESPONSE_LEN: usize = 255;

/// Response ceiling of PN532 based readers (128 byte buffer minus 3)
pub const PN532_MAX_RESPONSE_LEN: usize = 125;

/// Length of an application identifier
pub const AID_LEN: usize = 3;

/// Shortest GetFileSettings payload accepted (trailer stripped)
pub const FILE_SETTINGS_MIN_LEN: usize = 7;
/// Longest GetFileSettings payload accepted
pub const FILE_SETTINGS_MAX_LEN: usize = 34;

/// GetFreeMemory payload is a 24-bit little-endian byte count
pub const FREE_MEMORY_LEN: usize = 3;

/// GetVersion: hardware and software frames carry 7 bytes each
pub const VERSION_PART_LEN: usize = 7;
/// Production frame of most tags
pub const VERSION_PRODUCTION_LEN: usize = 14;
/// Production frame with the extra byte
pub const VERSION_PRODUCTION_LEN_EXT: usize = 15;

/// Default key settings for new applications: master key changeable,
/// free directory listing, free create/delete, configuration changeable
pub const DEFAULT_KEY_SETTINGS: u8 = 0x0F;

/// Default application settings: AES cipher (high nibble 8), 5 keys
pub const DEFAULT_AES_APP_SETTINGS: u8 = 0x85;

/// Standard file rights: key 1 RW, key 2 CAR, key 3 R, key 4 W
pub const ACCESS_RIGHTS_KEY_SLOTS_RW_CAR: u8 = 0x12;
/// Second byte of the key-slot rights
pub const ACCESS_RIGHTS_KEY_SLOTS_R_W: u8 = 0x34;

/// Standard file rights: free access to every operation
pub const ACCESS_RIGHTS_FREE_RW_CAR: u8 = 0xEE;
/// Second byte of the free-access rights
pub const ACCESS_RIGHTS_FREE_R_W: u8 = 0xEE;

/// Size used by the "default 32" standard file preset
pub const DEFAULT_STANDARD_FILE_SIZE: u8 = 32;
