//! HT32 Loader - Raw Flash Image Recognition and Symbolication
//!
//! This library recognizes raw flash dumps of HT32F1654-class Cortex-M
//! microcontrollers and turns them into an addressable, symbolicated view
//! ready for disassembly.
//!
//! # Features
//!
//! - **Recognition**: Cheap header-less check based on the vector table's
//!   initial stack pointer and reset vector
//! - **Address Space**: SRAM plus the flash image mapped at a caller-chosen
//!   base address
//! - **Symbolication**: Function symbols for every used interrupt vector,
//!   data symbols for every peripheral register
//! - **Device Profiles**: Interrupt catalog and register map are plain data,
//!   so other variants need no code changes
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use ht32_loader::{load, recognize, DeviceProfile};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let profile = DeviceProfile::default();
//!     let image = std::fs::read("firmware.bin")?;
//!
//!     if recognize(&image, &profile) {
//!         let view = load(&image, 0x0, &profile)?;
//!         println!("Entry: 0x{:08X}", view.entry_point());
//!         for symbol in view.symbols() {
//!             println!("0x{:08X} {}", symbol.address, symbol.name);
//!         }
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::similar_names)]
#![allow(clippy::too_many_lines)]

pub mod cursor;
pub mod device;
pub mod devices;
pub mod error;
pub mod formatter;
pub mod loader;
pub mod recognizer;
pub mod vector_table;
pub mod view;

pub use device::{Address, DeviceProfile, InterruptCatalog, MemoryRange, RegisterMap};
pub use error::{LoaderError, Result};
pub use loader::{load, load_file, open};
pub use recognizer::{check, recognize, Rejection, VectorHeader};
pub use vector_table::{VectorEntry, VectorTable};
pub use view::{
    LoadedView, Platform, Segment, SegmentBacking, SegmentFlags, Symbol, SymbolKind,
    SymbolTable,
};

/// Get version information for this library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Get the list of shipped device profiles.
pub fn supported_devices() -> &'static [DeviceProfile<'static>] {
    devices::ALL
}

/// Parse an address as written on a command line or in the environment.
///
/// Accepts `0x`-prefixed hex or decimal, with optional `_` separators.
///
/// # Errors
///
/// [`LoaderError::InvalidAddress`] when the text is not a number that fits
/// in 32 bits.
pub fn parse_address(input: &str) -> Result<Address> {
    let cleaned: String = input.trim().chars().filter(|&c| c != '_').collect();
    let parsed = match cleaned
        .strip_prefix("0x")
        .or_else(|| cleaned.strip_prefix("0X"))
    {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => cleaned.parse::<u32>(),
    };

    parsed
        .map(Address::from)
        .map_err(|_| LoaderError::InvalidAddress {
            input: input.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn words(words: &[u32]) -> Vec<u8> {
        words.iter().flat_map(|w| w.to_le_bytes()).collect()
    }

    const K4: DeviceProfile<'static> = DeviceProfile {
        name: "K4",
        long_name: "Four Vector Flash Application",
        sram: MemoryRange::new(0x2000_0000, 0x4000),
        max_reset_vector: 0xFFFF,
        interrupts: InterruptCatalog::new(&[
            "Reset_Handler",
            "NMI_Handler",
            "HardFault_Handler",
            "SysTick_Handler",
        ]),
        registers: RegisterMap::new(&[]),
    };

    #[test]
    fn test_version() {
        let v = version();
        assert!(!v.is_empty());
    }

    #[test]
    fn test_supported_devices() {
        let devices = supported_devices();
        assert!(!devices.is_empty());
        assert!(devices.iter().any(|d| d.name == "HT32F1654"));
    }

    #[test]
    fn test_thumb_reset_scenario() {
        let image = words(&[0x2000_1000, 0x0000_0101, 0, 0, 0]);
        assert!(recognize(&image, &K4));

        let view = load(&image, 0, &K4).unwrap();
        assert_eq!(view.entry_point(), 0x100);

        let functions: Vec<_> = view
            .symbols()
            .of_kind(SymbolKind::Function)
            .map(|s| s.address)
            .collect();
        assert_eq!(functions, vec![0x100]);
        assert_eq!(view.symbols().len(), 1);
    }

    #[test]
    fn test_foreign_stack_scenario() {
        let image = words(&[0x1000_0000, 0x0000_0101, 0, 0, 0]);
        assert!(!recognize(&image, &K4));
        assert!(matches!(
            open(&image, 0, &K4),
            Err(LoaderError::NotRecognized { .. })
        ));
    }

    #[test]
    fn test_parse_address() {
        assert_eq!(parse_address("0x0").unwrap(), 0);
        assert_eq!(parse_address("0x0800_0000").unwrap(), 0x0800_0000);
        assert_eq!(parse_address("0X1F").unwrap(), 0x1F);
        assert_eq!(parse_address(" 4096 ").unwrap(), 4096);
        assert!(parse_address("").is_err());
        assert!(parse_address("0x").is_err());
        assert!(parse_address("flash").is_err());
        assert!(parse_address("0x1_0000_0000").is_err());
    }
}
