//! Stateless byte-buffer helpers used for container inspection and
//! diagnostic previews.

use byteorder::{LittleEndian, ReadBytesExt};
use std::io::Cursor;

/// Render each byte as two lowercase hex digits, separated by spaces.
///
/// Total function: empty input yields an empty string.
pub fn to_hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render printable bytes (32..=126) as their ASCII characters and
/// everything else as `.`.
pub fn to_ascii(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&b| if (32..=126).contains(&b) { b as char } else { '.' })
        .collect()
}

/// Read an unsigned little-endian 32-bit integer at `offset`.
///
/// Returns 0 when fewer than 8 bytes are available from `offset`. The 8-byte
/// bound matches the RIFF size-field use case (4-byte chunk tag followed by a
/// 4-byte size); this is not a general-purpose 4-byte reader.
pub fn read_le32(data: &[u8], offset: usize) -> u32 {
    if offset.saturating_add(8) > data.len() {
        return 0;
    }

    let mut cursor = Cursor::new(&data[offset..]);
    cursor.read_u32::<LittleEndian>().unwrap_or(0)
}
