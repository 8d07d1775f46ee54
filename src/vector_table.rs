//! Cortex-M interrupt vector table decoding.
//!
//! The table sits at image offset 0. Word 0 is the initial stack pointer,
//! word 1 the reset vector, and words 1..=K line up with the device's
//! interrupt catalog. Handler words carry the Thumb bit in bit 0; a word
//! that is zero once that bit is cleared marks an unused vector.

use serde::Serialize;

use crate::cursor::{WordCursor, WORD_SIZE};
use crate::device::InterruptCatalog;
use crate::error::{LoaderError, Result};

/// Clear the Thumb state bit from a code pointer.
pub const fn thumb_address(word: u32) -> u32 {
    word & !1
}

/// One catalog position of the vector table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VectorEntry<'a> {
    /// Catalog position (0 is the reset vector).
    pub position: usize,
    /// Catalog name for this position.
    pub name: &'a str,
    /// Word as stored in the image.
    pub raw: u32,
}

impl VectorEntry<'_> {
    /// Image offset of this entry.
    pub const fn offset(&self) -> usize {
        (self.position + 1) * WORD_SIZE
    }

    /// Handler address with the Thumb bit cleared, or `None` for an unused
    /// vector.
    pub const fn handler_address(&self) -> Option<u32> {
        match thumb_address(self.raw) {
            0 => None,
            addr => Some(addr),
        }
    }
}

/// Decoded vector table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VectorTable<'a> {
    /// Value loaded into SP at reset.
    pub initial_stack_pointer: u32,
    /// Raw reset vector word (image offset 4).
    pub reset_vector: u32,
    /// One entry per catalog position, in catalog order.
    pub entries: Vec<VectorEntry<'a>>,
}

impl<'a> VectorTable<'a> {
    /// Bytes that must be present to decode a table for `catalog`.
    ///
    /// The reset vector is always read, so at least two words are needed
    /// even for an empty catalog.
    pub const fn required_size(catalog: &InterruptCatalog<'_>) -> usize {
        let size = catalog.vector_table_size();
        if size < 2 * WORD_SIZE {
            2 * WORD_SIZE
        } else {
            size
        }
    }

    /// Decode the vector table at the start of `image`.
    ///
    /// Fails without decoding anything when the image is shorter than the
    /// table.
    pub fn parse(image: &[u8], catalog: &InterruptCatalog<'a>) -> Result<Self> {
        let expected = Self::required_size(catalog);
        if image.len() < expected {
            return Err(LoaderError::VectorTableTooShort {
                expected,
                actual: image.len(),
            });
        }

        let mut cursor = WordCursor::new(image);
        let initial_stack_pointer = cursor.read_u32()?;
        let reset_vector = cursor.peek_u32()?;

        let mut entries = Vec::with_capacity(catalog.len());
        for (position, name) in catalog.iter().enumerate() {
            let raw = cursor.read_u32()?;
            entries.push(VectorEntry {
                position,
                name,
                raw,
            });
        }

        Ok(Self {
            initial_stack_pointer,
            reset_vector,
            entries,
        })
    }

    /// Reset handler address with the Thumb bit cleared.
    pub const fn entry_point(&self) -> u32 {
        thumb_address(self.reset_vector)
    }

    /// Entries whose handler address is non-zero.
    pub fn handlers(&self) -> impl Iterator<Item = &VectorEntry<'a>> + '_ {
        self.entries
            .iter()
            .filter(|entry| entry.handler_address().is_some())
    }
}
