//! Bounds-checked little-endian word reader.
//!
//! Both the recognizer's two-word peek and the loader's vector table walk
//! go through [`WordCursor`], so every read is checked against the end of
//! the image in exactly one place.

use byteorder::{ByteOrder, LittleEndian};

use crate::error::{LoaderError, Result};

/// Size of one vector table word in bytes.
pub const WORD_SIZE: usize = 4;

/// Sequential reader of 32-bit little-endian words over a byte slice.
#[derive(Debug, Clone)]
pub struct WordCursor<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> WordCursor<'a> {
    /// Create a cursor positioned at offset 0.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, offset: 0 }
    }

    /// Read the word at the current offset without advancing.
    pub fn peek_u32(&self) -> Result<u32> {
        let end = self
            .offset
            .checked_add(WORD_SIZE)
            .filter(|&end| end <= self.data.len())
            .ok_or_else(|| LoaderError::TruncatedData {
                offset: self.offset,
                expected: WORD_SIZE,
                actual: self.data.len().saturating_sub(self.offset),
            })?;
        Ok(LittleEndian::read_u32(&self.data[self.offset..end]))
    }

    /// Read the word at the current offset and advance past it.
    pub fn read_u32(&mut self) -> Result<u32> {
        let word = self.peek_u32()?;
        self.offset += WORD_SIZE;
        Ok(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_little_endian() {
        let data = [0x01, 0x02, 0x03, 0x04, 0xFF, 0xFF, 0x00, 0x20];
        let mut cursor = WordCursor::new(&data);
        assert_eq!(cursor.read_u32().unwrap(), 0x0403_0201);
        assert_eq!(cursor.read_u32().unwrap(), 0x2000_FFFF);
        assert!(cursor.read_u32().is_err());
    }

    #[test]
    fn test_read_past_end() {
        let data = [0u8; 6];
        let mut cursor = WordCursor::new(&data);
        assert!(cursor.read_u32().is_ok());
        // A failed read does not move the cursor.
        for _ in 0..2 {
            match cursor.read_u32() {
                Err(LoaderError::TruncatedData {
                    offset: 4,
                    expected: 4,
                    actual: 2,
                }) => {}
                other => panic!("expected truncation, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_peek_does_not_advance() {
        let data = [0xAA, 0, 0, 0, 0x01, 0x01, 0, 0];
        let mut cursor = WordCursor::new(&data);
        assert_eq!(cursor.peek_u32().unwrap(), 0xAA);
        assert_eq!(cursor.peek_u32().unwrap(), 0xAA);
        assert_eq!(cursor.read_u32().unwrap(), 0xAA);
        assert_eq!(cursor.peek_u32().unwrap(), 0x101);
    }

    #[test]
    fn test_empty_data() {
        let mut cursor = WordCursor::new(&[]);
        assert!(matches!(
            cursor.peek_u32(),
            Err(LoaderError::TruncatedData { actual: 0, .. })
        ));
        assert!(cursor.read_u32().is_err());
    }
}
