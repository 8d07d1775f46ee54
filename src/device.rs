//! Device variant description.
//!
//! The recognizer and loader never hardcode a particular chip: everything
//! device-specific lives in a [`DeviceProfile`], which bundles the SRAM
//! window, the reset vector bound, the ordered interrupt catalog, and the
//! peripheral register map. Supporting another variant means supplying
//! another profile.

use serde::Serialize;
use std::fmt;

use crate::cursor::WORD_SIZE;

/// Absolute address in the reconstructed address space.
pub type Address = u64;

/// Half-open address range `[start, start + size)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct MemoryRange {
    /// First address in the range.
    pub start: Address,
    /// Length in bytes.
    pub size: u64,
}

impl MemoryRange {
    /// Create a new range.
    pub const fn new(start: Address, size: u64) -> Self {
        Self { start, size }
    }

    /// One past the last address.
    pub const fn end(&self) -> Address {
        self.start + self.size
    }

    /// Whether `addr` lies inside the range.
    pub const fn contains(&self, addr: Address) -> bool {
        addr >= self.start && addr < self.end()
    }
}

impl fmt::Display for MemoryRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[0x{:08X}, 0x{:08X})", self.start, self.end())
    }
}

/// Ordered interrupt names, one per vector table word after the initial
/// stack pointer.
///
/// Position 0 names the reset vector (image offset 4), position `i` names
/// the word at image offset `4 * (i + 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterruptCatalog<'a> {
    names: &'a [&'a str],
}

impl<'a> InterruptCatalog<'a> {
    /// Wrap an ordered list of handler names.
    pub const fn new(names: &'a [&'a str]) -> Self {
        Self { names }
    }

    /// Number of catalog positions (K).
    pub const fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the catalog has no positions.
    pub const fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Name at a catalog position.
    pub fn name(&self, position: usize) -> Option<&'a str> {
        self.names.get(position).copied()
    }

    /// Names in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &'a str> + 'a {
        let names = self.names;
        names.iter().copied()
    }

    /// Bytes covered by the vector table: the stack pointer word plus one
    /// word per catalog position.
    pub const fn vector_table_size(&self) -> usize {
        (self.names.len() + 1) * WORD_SIZE
    }
}

/// Peripheral register addresses and their names.
///
/// Addresses are unique; order carries no meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisterMap<'a> {
    entries: &'a [(u32, &'a str)],
}

impl<'a> RegisterMap<'a> {
    /// Wrap an address/name table.
    pub const fn new(entries: &'a [(u32, &'a str)]) -> Self {
        Self { entries }
    }

    /// Number of registers.
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map is empty.
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Register name at an address.
    pub fn name_at(&self, addr: u32) -> Option<&'a str> {
        self.entries
            .iter()
            .find(|(a, _)| *a == addr)
            .map(|(_, name)| *name)
    }

    /// All `(address, name)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &'a str)> + 'a {
        let entries = self.entries;
        entries.iter().copied()
    }
}

/// Everything the recognizer and loader need to know about one device
/// variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceProfile<'a> {
    /// Short name, also used as the view name.
    pub name: &'a str,
    /// Descriptive name of the loaded view.
    pub long_name: &'a str,
    /// On-chip SRAM. The initial stack pointer must fall inside it.
    pub sram: MemoryRange,
    /// Largest reset vector value accepted by the recognizer.
    pub max_reset_vector: u32,
    /// Handler names for the vector table.
    pub interrupts: InterruptCatalog<'a>,
    /// Peripheral register names.
    pub registers: RegisterMap<'a>,
}

impl<'a> DeviceProfile<'a> {
    /// Smallest image the recognizer will consider.
    pub const fn minimum_image_size(&self) -> usize {
        self.interrupts.vector_table_size()
    }
}

impl DeviceProfile<'static> {
    /// Look up a shipped profile by name, ignoring ASCII case.
    pub fn by_name(name: &str) -> Option<&'static DeviceProfile<'static>> {
        crate::devices::ALL
            .iter()
            .find(|profile| profile.name.eq_ignore_ascii_case(name))
    }
}

impl Default for DeviceProfile<'static> {
    fn default() -> Self {
        crate::devices::HT32F1654
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_range() {
        let sram = MemoryRange::new(0x2000_0000, 0x4000);
        assert_eq!(sram.end(), 0x2000_4000);
        assert!(sram.contains(0x2000_0000));
        assert!(sram.contains(0x2000_3FFF));
        assert!(!sram.contains(0x2000_4000));
        assert!(!sram.contains(0x1FFF_FFFF));
        assert_eq!(sram.to_string(), "[0x20000000, 0x20004000)");
    }

    #[test]
    fn test_catalog_table_size() {
        let catalog = InterruptCatalog::new(&["Reset", "NMI", "HardFault", "SysTick"]);
        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.vector_table_size(), 20);
        assert_eq!(catalog.name(2), Some("HardFault"));
        assert_eq!(catalog.name(4), None);
    }

    #[test]
    fn test_register_lookup() {
        let map = RegisterMap::new(&[(0x4000_0000, "UART_DR"), (0x4000_0004, "UART_SR")]);
        assert_eq!(map.name_at(0x4000_0004), Some("UART_SR"));
        assert_eq!(map.name_at(0x4000_0008), None);
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_by_name() {
        let profile = DeviceProfile::by_name("ht32f1654").unwrap();
        assert_eq!(profile.name, "HT32F1654");
        assert!(DeviceProfile::by_name("stm32f103").is_none());
    }

    #[test]
    fn test_default_profile() {
        let profile = DeviceProfile::default();
        assert_eq!(profile.sram, MemoryRange::new(0x2000_0000, 0x4000));
        assert_eq!(profile.max_reset_vector, 0xFFFF);
        assert_eq!(
            profile.minimum_image_size(),
            (profile.interrupts.len() + 1) * 4
        );
    }
}
