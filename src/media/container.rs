//! RIFF container realignment for extracted WebP payloads.
//!
//! The streaming decoder hands back entry bytes whose container framing does
//! not always start at offset 0; the 12-byte RIFF+FourCC signature may sit a
//! few bytes in. This module locates the true start of the signature and
//! yields a view of the buffer from that point.
//!
//! Applies to [`MediaKind::Image`](super::MediaKind) payloads only; Ogg
//! framing needs no such repair.

use tracing::debug;

use crate::error::{Result, ViewerError};

/// `RIFF` chunk tag expected at the start of the container.
pub const RIFF_SIGNATURE: &[u8] = b"RIFF";

/// `WEBP` FourCC expected 8 bytes after the chunk tag.
pub const WEBP_FOURCC: &[u8] = b"WEBP";

/// Full signature length: tag (4) + chunk size (4) + FourCC (4).
pub const RIFF_HEADER_LEN: usize = 12;

/// Check for the RIFF/WEBP signature at `offset`.
fn signature_at(data: &[u8], offset: usize) -> bool {
    data.len() >= offset + RIFF_HEADER_LEN
        && &data[offset..offset + 4] == RIFF_SIGNATURE
        && &data[offset + 8..offset + RIFF_HEADER_LEN] == WEBP_FOURCC
}

/// Locate the RIFF/WEBP signature in `data`.
///
/// Offset 0 is checked directly so well-formed payloads skip the scan.
/// Otherwise offsets are scanned in ascending order and the first match
/// wins; the scan deliberately covers the whole buffer, matching observed
/// decoder behavior.
///
/// # Errors
///
/// [`ViewerError::MalformedContainer`] when `data` is shorter than the
/// 12-byte signature, [`ViewerError::HeaderNotFound`] when no signature
/// exists in the scanned range.
pub fn find_riff_header(data: &[u8]) -> Result<usize> {
    if data.len() < RIFF_HEADER_LEN {
        return Err(ViewerError::MalformedContainer { len: data.len() });
    }

    if signature_at(data, 0) {
        return Ok(0);
    }

    for offset in 1..data.len() - RIFF_HEADER_LEN {
        if signature_at(data, offset) {
            debug!(offset, "found RIFF header past start of payload");
            return Ok(offset);
        }
    }

    Err(ViewerError::HeaderNotFound)
}

/// Return the view of `data` starting at the RIFF signature.
///
/// Identity when the signature already sits at offset 0; calling it on its
/// own output is therefore a no-op.
pub fn align(data: &[u8]) -> Result<&[u8]> {
    let offset = find_riff_header(data)?;
    Ok(&data[offset..])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn webp(payload: &[u8]) -> Vec<u8> {
        let mut data = Vec::new();
        data.extend_from_slice(b"RIFF");
        data.extend_from_slice(&(4 + payload.len() as u32).to_le_bytes());
        data.extend_from_slice(b"WEBP");
        data.extend_from_slice(payload);
        data
    }

    #[test]
    fn aligned_payload_takes_fast_path() {
        let data = webp(b"vp8 payload");
        assert_eq!(find_riff_header(&data).unwrap(), 0);
    }

    #[test]
    fn align_is_identity_on_aligned_input() {
        let data = webp(b"vp8 payload");
        let first = align(&data).unwrap();
        assert_eq!(first, &data[..]);

        // Idempotent: aligning the output changes nothing.
        let second = align(first).unwrap();
        assert_eq!(second, first);
    }

    #[test]
    fn junk_prefix_is_skipped() {
        for junk_len in [0usize, 1, 7, 100] {
            let valid = webp(b"payload");
            let mut data = vec![0xAAu8; junk_len];
            data.extend_from_slice(&valid);

            assert_eq!(find_riff_header(&data).unwrap(), junk_len);
            assert_eq!(align(&data).unwrap(), &valid[..]);
        }
    }

    #[test]
    fn first_ascending_match_wins() {
        let mut data = vec![0u8; 3];
        data.extend_from_slice(&webp(b"first"));
        data.extend_from_slice(&webp(b"second"));
        assert_eq!(find_riff_header(&data).unwrap(), 3);
    }

    #[test]
    fn short_input_is_malformed() {
        for len in [0usize, 1, 11] {
            let data = vec![b'R'; len];
            assert!(matches!(
                find_riff_header(&data),
                Err(ViewerError::MalformedContainer { len: l }) if l == len
            ));
        }
    }

    #[test]
    fn missing_signature_is_not_found() {
        let data = vec![0x42u8; 64];
        assert!(matches!(
            find_riff_header(&data),
            Err(ViewerError::HeaderNotFound)
        ));
    }

    #[test]
    fn riff_tag_without_webp_fourcc_is_not_found() {
        let mut data = Vec::new();
        data.extend_from_slice(b"RIFF");
        data.extend_from_slice(&8u32.to_le_bytes());
        data.extend_from_slice(b"WAVEdata");
        assert!(matches!(
            find_riff_header(&data),
            Err(ViewerError::HeaderNotFound)
        ));
    }
}
