//! Length-prefixed label encoding for domain names.
//!
//! Names travel on the wire as a sequence of `(length, bytes)` labels closed
//! by a single zero byte. Compression pointers are out of scope; every name
//! is written in full.

use crate::errors::ProtocolError;

/// Append the wire form of `name` to `buf`.
///
/// The empty name produces just the terminator byte. Callers keep each label
/// within a single length byte; the 63-byte limit of the standard is a
/// validation concern one layer up.
pub fn encode_name(name: &str, buf: &mut Vec<u8>) {
    for label in name.split('.').filter(|label| !label.is_empty()) {
        buf.push(label.len() as u8);
        buf.extend_from_slice(label.as_bytes());
    }
    buf.push(0);
}

/// Read one name from `buf` starting at `offset`.
///
/// Returns the dot-joined name and the number of bytes consumed, so a caller
/// can thread the offset to whatever follows the name.
pub fn decode_name(buf: &[u8], offset: usize) -> Result<(String, usize), ProtocolError> {
    let mut pos = offset;
    let mut name = String::new();
    loop {
        let len = *buf
            .get(pos)
            .ok_or(ProtocolError::UnterminatedName(pos))? as usize;
        pos += 1;
        if len == 0 {
            break;
        }
        let label = buf
            .get(pos..pos + len)
            .ok_or(ProtocolError::MalformedName { offset: pos, length: len })?;
        if !name.is_empty() {
            name.push('.');
        }
        name.push_str(&String::from_utf8_lossy(label));
        pos += len;
    }
    Ok((name, pos - offset))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_splits_on_dots() {
        let mut buf = Vec::new();
        encode_name("codecrafters.io", &mut buf);
        assert_eq!(buf, b"\x0ccodecrafters\x02io\x00");
    }

    #[test]
    fn test_empty_name_is_a_single_zero_byte() {
        let mut buf = Vec::new();
        encode_name("", &mut buf);
        assert_eq!(buf, [0]);
        assert_eq!(decode_name(&buf, 0), Ok((String::new(), 1)));
    }

    #[test]
    fn test_decode_reports_bytes_consumed() {
        let mut buf = vec![0xaa, 0xbb];
        encode_name("example.com", &mut buf);
        let (name, consumed) = decode_name(&buf, 2).unwrap();
        assert_eq!(name, "example.com");
        assert_eq!(consumed, buf.len() - 2);
    }

    #[test]
    fn test_label_overrunning_buffer_is_malformed() {
        // Length byte claims 10 bytes, only 3 remain.
        let buf = b"\x0aabc";
        assert_eq!(
            decode_name(buf, 0),
            Err(ProtocolError::MalformedName { offset: 1, length: 10 })
        );
    }

    #[test]
    fn test_missing_terminator_is_unterminated() {
        let buf = b"\x03abc";
        assert_eq!(decode_name(buf, 0), Err(ProtocolError::UnterminatedName(4)));
    }
}
