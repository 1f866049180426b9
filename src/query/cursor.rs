//! Opaque pagination cursors.
//!
//! A cursor is the base64url (no padding) encoding of the decimal offset
//! into the filtered sequence. The sequence is recomputed on every call, so
//! an offset is all the server needs; there is no iterator state, checksum
//! or expiry.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use thiserror::Error;

/// Raised by strict decoding when a cursor is not a valid offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Invalid or malformed cursor")]
pub struct CursorError;

/// Encode a zero-based offset as an opaque token.
pub fn encode(offset: usize) -> String {
    URL_SAFE_NO_PAD.encode(offset.to_string())
}

/// Decode a token back to an offset, or `None` if it is invalid.
pub fn decode(cursor: &str) -> Option<usize> {
    let bytes = URL_SAFE_NO_PAD.decode(cursor).ok()?;
    let text = String::from_utf8(bytes).ok()?;
    let offset: i64 = text.trim().parse().ok()?;
    if offset < 0 {
        return None;
    }
    Some(offset as usize)
}

/// Decode a token, raising [`CursorError`] if it is invalid.
pub fn decode_or_fail(cursor: &str) -> Result<usize, CursorError> {
    decode(cursor).ok_or(CursorError)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        for offset in [0usize, 1, 50, 100, 999_999] {
            assert_eq!(decode(&encode(offset)), Some(offset));
        }
    }

    #[test]
    fn test_tokens_are_url_safe() {
        for offset in [0usize, 62, 12_345, 999_999] {
            let token = encode(offset);
            assert!(token
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
        }
    }

    #[test]
    fn test_invalid_cursors_are_rejected() {
        assert_eq!(decode(""), None);
        assert_eq!(decode("!!!invalid!!!"), None);
        assert_eq!(decode(&URL_SAFE_NO_PAD.encode("not a number")), None);
    }

    #[test]
    fn test_negative_offsets_are_rejected() {
        assert_eq!(decode(&URL_SAFE_NO_PAD.encode("-5")), None);
    }

    #[test]
    fn test_decode_or_fail() {
        assert_eq!(decode_or_fail(&encode(7)), Ok(7));
        assert_eq!(decode_or_fail("!!!invalid!!!"), Err(CursorError));
    }
}
