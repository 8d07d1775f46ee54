//! The loaded program view.
//!
//! A [`LoadedView`] is what a successful load hands back: the reconstructed
//! address space, the symbol table, and the entry points. It holds the
//! image bytes (borrowed or owned) and is never modified once the loader
//! returns it.

use bitflags::bitflags;
use byteorder::{ByteOrder, LittleEndian};
use serde::Serialize;
use std::borrow::Cow;
use std::collections::{btree_map, BTreeMap, BTreeSet};
use std::fmt;
use std::iter;

use crate::device::{Address, MemoryRange};

/// Instruction set and environment of a loaded image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    /// ARMv7-M Thumb-2 code with no operating system.
    Thumb2Standalone,
}

impl Platform {
    /// Architecture name as a disassembler expects it.
    pub const fn architecture(&self) -> &'static str {
        match self {
            Platform::Thumb2Standalone => "thumb2",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Thumb2Standalone => write!(f, "thumb2 (standalone)"),
        }
    }
}

bitflags! {
    /// Segment access permissions.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
    pub struct SegmentFlags: u32 {
        /// Instructions may be fetched.
        const EXECUTABLE = 0x1;
        /// Writable.
        const WRITABLE = 0x2;
        /// Readable.
        const READABLE = 0x4;
    }
}

impl fmt::Display for SegmentFlags {
    /// `rwx` notation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bit = |flag, c| if self.contains(flag) { c } else { '-' };
        write!(
            f,
            "{}{}{}",
            bit(SegmentFlags::READABLE, 'r'),
            bit(SegmentFlags::WRITABLE, 'w'),
            bit(SegmentFlags::EXECUTABLE, 'x')
        )
    }
}

/// Where a segment's bytes come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SegmentBacking {
    /// No file data; reads as zero.
    Zeroed,
    /// `length` image bytes starting at `offset`.
    Image { offset: usize, length: usize },
}

/// A contiguous mapped address range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Segment {
    /// Short label ("SRAM", "Flash").
    pub name: &'static str,
    /// Mapped addresses.
    pub range: MemoryRange,
    /// Access permissions.
    pub flags: SegmentFlags,
    /// Data source.
    pub backing: SegmentBacking,
}

impl Segment {
    /// Whether `[addr, addr + len)` lies entirely inside this segment.
    pub fn covers(&self, addr: Address, len: u64) -> bool {
        match addr.checked_add(len) {
            Some(end) => addr >= self.range.start && end <= self.range.end(),
            None => false,
        }
    }
}

/// Symbol classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SymbolKind {
    /// Memory-mapped data, here peripheral registers.
    Data,
    /// Code entry, here interrupt handlers.
    Function,
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SymbolKind::Data => f.pad("data"),
            SymbolKind::Function => f.pad("function"),
        }
    }
}

/// A named address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Symbol {
    /// Address the symbol names.
    pub address: Address,
    /// Symbol name.
    pub name: String,
    /// Data or function.
    pub kind: SymbolKind,
}

impl Symbol {
    /// Create a data symbol.
    pub fn data(address: Address, name: impl Into<String>) -> Self {
        Self {
            address,
            name: name.into(),
            kind: SymbolKind::Data,
        }
    }

    /// Create a function symbol.
    pub fn function(address: Address, name: impl Into<String>) -> Self {
        Self {
            address,
            name: name.into(),
            kind: SymbolKind::Function,
        }
    }
}

/// Symbols keyed by address.
///
/// An address can carry several symbols: handlers shared by many vectors
/// keep every vector's name, and a handler word that points at a register
/// sits beside the register's data symbol. Symbols at one address keep
/// their definition order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SymbolTable {
    symbols: BTreeMap<Address, Vec<Symbol>>,
}

impl SymbolTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Define a symbol. Returns `false` if an identical symbol was already
    /// present, in which case the table is unchanged.
    pub fn define(&mut self, symbol: Symbol) -> bool {
        let slot = self.symbols.entry(symbol.address).or_default();
        if slot.contains(&symbol) {
            return false;
        }
        slot.push(symbol);
        true
    }

    /// Symbols at an address, in definition order.
    pub fn at(&self, address: Address) -> &[Symbol] {
        self.symbols
            .get(&address)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Number of symbols.
    pub fn len(&self) -> usize {
        self.symbols.values().map(Vec::len).sum()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Number of distinct addresses carrying a symbol.
    pub fn address_count(&self) -> usize {
        self.symbols.len()
    }

    /// Symbols in address order.
    pub fn iter(&self) -> Iter<'_> {
        self.symbols.values().flatten()
    }

    /// Symbols of one kind, in address order.
    pub fn of_kind(&self, kind: SymbolKind) -> impl Iterator<Item = &Symbol> + '_ {
        self.iter().filter(move |symbol| symbol.kind == kind)
    }
}

/// Iterator over a [`SymbolTable`].
pub type Iter<'t> = iter::Flatten<btree_map::Values<'t, Address, Vec<Symbol>>>;

impl<'t> IntoIterator for &'t SymbolTable {
    type Item = &'t Symbol;
    type IntoIter = Iter<'t>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Address space, symbols, and entry points of one loaded image.
#[derive(Debug, Clone, Serialize)]
pub struct LoadedView<'a> {
    name: String,
    long_name: String,
    platform: Platform,
    #[serde(skip)]
    image: Cow<'a, [u8]>,
    segments: Vec<Segment>,
    symbols: SymbolTable,
    entry_point: Address,
    entry_points: BTreeSet<Address>,
}

impl<'a> LoadedView<'a> {
    /// Start an empty view over `image`. Only the loader builds views.
    pub(crate) fn new(name: &str, long_name: &str, image: Cow<'a, [u8]>) -> Self {
        Self {
            name: name.to_string(),
            long_name: long_name.to_string(),
            platform: Platform::Thumb2Standalone,
            image,
            segments: Vec::new(),
            symbols: SymbolTable::new(),
            entry_point: 0,
            entry_points: BTreeSet::new(),
        }
    }

    pub(crate) fn add_segment(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    pub(crate) fn define_symbol(&mut self, symbol: Symbol) -> bool {
        self.symbols.define(symbol)
    }

    /// Record the primary entry point. It is also an entry point root.
    pub(crate) fn set_entry_point(&mut self, address: Address) {
        self.entry_point = address;
        self.entry_points.insert(address);
    }

    pub(crate) fn add_entry_point(&mut self, address: Address) {
        self.entry_points.insert(address);
    }

    /// View name (the device name).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Descriptive view name.
    pub fn long_name(&self) -> &str {
        &self.long_name
    }

    /// Instruction set of the image.
    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// The bytes the view was loaded from.
    pub fn image(&self) -> &[u8] {
        &self.image
    }

    /// Segments in creation order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Segment mapping `address`, if any.
    pub fn segment_containing(&self, address: Address) -> Option<&Segment> {
        self.segments
            .iter()
            .find(|segment| segment.range.contains(address))
    }

    /// Symbol table.
    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// Symbols at an address, in definition order.
    pub fn symbols_at(&self, address: Address) -> &[Symbol] {
        self.symbols.at(address)
    }

    /// Function symbol at an address, if any.
    pub fn function_at(&self, address: Address) -> Option<&Symbol> {
        self.symbols_at(address)
            .iter()
            .find(|symbol| symbol.kind == SymbolKind::Function)
    }

    /// Reset handler address.
    pub fn entry_point(&self) -> Address {
        self.entry_point
    }

    /// All disassembly roots: the reset handler plus every used vector.
    pub fn entry_points(&self) -> &BTreeSet<Address> {
        &self.entry_points
    }

    /// Read `len` bytes at `address`.
    ///
    /// The range must sit inside a single segment. Image-backed segments
    /// return borrowed image bytes; zeroed segments return zeros.
    pub fn read(&self, address: Address, len: usize) -> Option<Cow<'_, [u8]>> {
        let segment = self
            .segments
            .iter()
            .find(|segment| segment.covers(address, len as u64))?;
        let delta = usize::try_from(address - segment.range.start).ok()?;

        match segment.backing {
            SegmentBacking::Zeroed => Some(Cow::Owned(vec![0; len])),
            SegmentBacking::Image { offset, length } => {
                let start = offset.checked_add(delta)?;
                let end = start.checked_add(len)?;
                if end > offset + length {
                    return None;
                }
                self.image.get(start..end).map(Cow::Borrowed)
            }
        }
    }

    /// Read a little-endian word at `address`.
    pub fn read_u32(&self, address: Address) -> Option<u32> {
        self.read(address, 4)
            .map(|bytes| LittleEndian::read_u32(&bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(image: &[u8]) -> LoadedView<'_> {
        let mut view = LoadedView::new("TEST", "Test Flash Application", Cow::Borrowed(image));
        view.add_segment(Segment {
            name: "SRAM",
            range: MemoryRange::new(0x2000_0000, 0x100),
            flags: SegmentFlags::all(),
            backing: SegmentBacking::Zeroed,
        });
        view.add_segment(Segment {
            name: "Flash",
            range: MemoryRange::new(0x1000, image.len() as u64),
            flags: SegmentFlags::READABLE | SegmentFlags::EXECUTABLE,
            backing: SegmentBacking::Image {
                offset: 0,
                length: image.len(),
            },
        });
        view
    }

    #[test]
    fn test_flags_display() {
        assert_eq!(SegmentFlags::all().to_string(), "rwx");
        assert_eq!(
            (SegmentFlags::READABLE | SegmentFlags::EXECUTABLE).to_string(),
            "r-x"
        );
        assert_eq!(SegmentFlags::empty().to_string(), "---");
    }

    #[test]
    fn test_read_flash() {
        let image = [1u8, 2, 3, 4, 5, 6, 7, 8];
        let view = view(&image);
        assert_eq!(view.read(0x1000, 8).unwrap().as_ref(), &image[..]);
        assert_eq!(view.read_u32(0x1004), Some(0x0807_0605));
        assert!(view.read(0x1006, 4).is_none());
        assert!(view.read(0x0FFF, 1).is_none());
    }

    #[test]
    fn test_read_sram_is_zero() {
        let image = [0xFFu8; 4];
        let view = view(&image);
        assert_eq!(view.read(0x2000_0010, 4).unwrap().as_ref(), &[0, 0, 0, 0]);
        assert!(view.read(0x2000_00FE, 4).is_none());
    }

    #[test]
    fn test_segment_containing() {
        let image = [0u8; 16];
        let view = view(&image);
        assert_eq!(view.segment_containing(0x100F).unwrap().name, "Flash");
        assert_eq!(view.segment_containing(0x2000_0000).unwrap().name, "SRAM");
        assert!(view.segment_containing(0x1010).is_none());
    }

    #[test]
    fn test_symbol_table_keeps_every_name() {
        let mut table = SymbolTable::new();
        assert!(table.define(Symbol::data(0x4000_0000, "UART_DR")));
        assert!(table.define(Symbol::function(0x100, "NMI_Handler")));
        assert!(table.define(Symbol::function(0x100, "SysTick_Handler")));
        assert!(table.define(Symbol::function(0x4000_0000, "HardFault_Handler")));
        assert!(!table.define(Symbol::function(0x100, "NMI_Handler")));

        assert_eq!(table.len(), 4);
        assert_eq!(table.address_count(), 2);
        assert_eq!(
            table.at(0x100),
            &[
                Symbol::function(0x100, "NMI_Handler"),
                Symbol::function(0x100, "SysTick_Handler"),
            ]
        );
        assert_eq!(
            table.at(0x4000_0000),
            &[
                Symbol::data(0x4000_0000, "UART_DR"),
                Symbol::function(0x4000_0000, "HardFault_Handler"),
            ]
        );
        assert!(table.at(0x200).is_empty());

        let data: Vec<_> = table.of_kind(SymbolKind::Data).collect();
        assert_eq!(data, vec![&Symbol::data(0x4000_0000, "UART_DR")]);
        assert_eq!(table.of_kind(SymbolKind::Function).count(), 3);

        let addresses: Vec<_> = table.iter().map(|symbol| symbol.address).collect();
        assert_eq!(addresses, vec![0x100, 0x100, 0x4000_0000, 0x4000_0000]);
    }

    #[test]
    fn test_entry_points() {
        let image = [0u8; 4];
        let mut view = view(&image);
        view.set_entry_point(0x100);
        view.add_entry_point(0x200);
        view.add_entry_point(0x100);
        assert_eq!(view.entry_point(), 0x100);
        assert_eq!(view.entry_points().len(), 2);
    }

    #[test]
    fn test_platform() {
        assert_eq!(Platform::Thumb2Standalone.architecture(), "thumb2");
        assert_eq!(
            Platform::Thumb2Standalone.to_string(),
            "thumb2 (standalone)"
        );
    }
}
