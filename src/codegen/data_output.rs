//! Big-endian output stream matching `java.io.DataOutputStream`
//!
//! Only the two primitives the canonical encoding needs: `writeInt` and
//! `writeUTF` (modified UTF-8 with a u16 length prefix).

use crate::consts::MAX_UTF_LENGTH;
use crate::error::{Error, Result};

#[derive(Debug, Default)]
pub struct DataOutput {
    buf: Vec<u8>,
}

impl DataOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { buf: Vec::with_capacity(capacity) }
    }

    pub fn write_int(&mut self, value: i32) {
        self.buf.extend_from_slice(&value.to_be_bytes());
    }

    /// Modified UTF-8: U+0000 takes two bytes and characters outside the
    /// BMP are written as two three-byte surrogate encodings.
    pub fn write_utf(&mut self, s: &str) -> Result<()> {
        let len = modified_utf8_len(s);
        if len > MAX_UTF_LENGTH {
            return Err(Error::UtfTooLong { len });
        }
        self.buf.reserve(len + 2);
        self.buf.extend_from_slice(&(len as u16).to_be_bytes());
        for unit in s.encode_utf16() {
            match unit {
                0x0001..=0x007F => self.buf.push(unit as u8),
                0x0000 | 0x0080..=0x07FF => {
                    self.buf.push(0xC0 | (unit >> 6) as u8);
                    self.buf.push(0x80 | (unit & 0x3F) as u8);
                }
                _ => {
                    self.buf.push(0xE0 | (unit >> 12) as u8);
                    self.buf.push(0x80 | ((unit >> 6) & 0x3F) as u8);
                    self.buf.push(0x80 | (unit & 0x3F) as u8);
                }
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}

fn modified_utf8_len(s: &str) -> usize {
    s.encode_utf16()
        .map(|unit| match unit {
            0x0001..=0x007F => 1,
            0x0000 | 0x0080..=0x07FF => 2,
            _ => 3,
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utf(s: &str) -> Vec<u8> {
        let mut out = DataOutput::new();
        out.write_utf(s).unwrap();
        out.into_bytes()
    }

    #[test]
    fn test_write_int_big_endian() {
        let mut out = DataOutput::new();
        out.write_int(0x0102_0304);
        out.write_int(-1);
        assert_eq!(out.as_bytes(), &[1, 2, 3, 4, 0xFF, 0xFF, 0xFF, 0xFF]);
    }

    #[test]
    fn test_write_utf_ascii() {
        assert_eq!(utf("<init>"), b"\x00\x06<init>");
        assert_eq!(utf(""), vec![0, 0]);
    }

    #[test]
    fn test_write_utf_modified_encoding() {
        assert_eq!(utf("\0"), vec![0x00, 0x02, 0xC0, 0x80]);
        assert_eq!(utf("é"), vec![0x00, 0x02, 0xC3, 0xA9]);
        assert_eq!(utf("€"), vec![0x00, 0x03, 0xE2, 0x82, 0xAC]);
        assert_eq!(utf("😀"), vec![0x00, 0x06, 0xED, 0xA0, 0xBD, 0xED, 0xB8, 0x80]);
    }

    #[test]
    fn test_write_utf_too_long() {
        let mut out = DataOutput::new();
        let long = "x".repeat(MAX_UTF_LENGTH + 1);
        assert!(matches!(out.write_utf(&long), Err(Error::UtfTooLong { len }) if len == MAX_UTF_LENGTH + 1));
        assert!(out.is_empty());

        let max = "x".repeat(MAX_UTF_LENGTH);
        out.write_utf(&max).unwrap();
        assert_eq!(out.len(), MAX_UTF_LENGTH + 2);
    }
}
