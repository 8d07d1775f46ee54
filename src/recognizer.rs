//! Raw flash image recognition.
//!
//! An image has no header, so recognition relies on the first two vector
//! table words: the initial stack pointer must point into the device's
//! SRAM, and the reset vector must be a small flash offset. Nothing past
//! the second word is inspected. The check is cheap and errs towards
//! accepting; the host confirms the base address afterwards.

use std::fmt;

use tracing::debug;

use crate::cursor::WordCursor;
use crate::device::DeviceProfile;
use crate::error::LoaderError;

/// The two words the recognizer looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VectorHeader {
    /// Word 0.
    pub initial_stack_pointer: u32,
    /// Word 1, Thumb bit included.
    pub reset_vector: u32,
}

/// Why an image was not recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Shorter than the vector table.
    TooShort { expected: usize, actual: usize },
    /// Word 0 does not point into SRAM.
    StackPointerOutOfRange { value: u32 },
    /// Word 1 is above the device's reset vector bound.
    ResetVectorOutOfRange { value: u32, max: u32 },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::TooShort { expected, actual } => write!(
                f,
                "image is {} bytes, vector table needs {}",
                actual, expected
            ),
            Rejection::StackPointerOutOfRange { value } => {
                write!(f, "initial stack pointer 0x{:08X} outside SRAM", value)
            }
            Rejection::ResetVectorOutOfRange { value, max } => {
                write!(f, "reset vector 0x{:08X} above 0x{:X}", value, max)
            }
        }
    }
}

/// Check `image` against `profile` and say why it fails, if it does.
pub fn check(image: &[u8], profile: &DeviceProfile<'_>) -> Result<VectorHeader, Rejection> {
    let expected = profile.minimum_image_size();
    if image.len() < expected {
        return Err(Rejection::TooShort {
            expected,
            actual: image.len(),
        });
    }

    let mut cursor = WordCursor::new(image);
    // A catalog can be empty, in which case the size gate alone does not
    // guarantee two words.
    let too_short = |_: LoaderError| Rejection::TooShort {
        expected: expected.max(8),
        actual: image.len(),
    };

    let initial_stack_pointer = cursor.read_u32().map_err(too_short)?;
    if !profile.sram.contains(u64::from(initial_stack_pointer)) {
        return Err(Rejection::StackPointerOutOfRange {
            value: initial_stack_pointer,
        });
    }

    let reset_vector = cursor.read_u32().map_err(too_short)?;
    if reset_vector > profile.max_reset_vector {
        return Err(Rejection::ResetVectorOutOfRange {
            value: reset_vector,
            max: profile.max_reset_vector,
        });
    }

    Ok(VectorHeader {
        initial_stack_pointer,
        reset_vector,
    })
}

/// Whether `image` looks like flash firmware for `profile`'s device.
///
/// Never fails; malformed or truncated input is simply not recognized.
pub fn recognize(image: &[u8], profile: &DeviceProfile<'_>) -> bool {
    match check(image, profile) {
        Ok(header) => {
            debug!(
                device = profile.name,
                sp = format_args!("0x{:08X}", header.initial_stack_pointer),
                reset = format_args!("0x{:08X}", header.reset_vector),
                "image recognized"
            );
            true
        }
        Err(reason) => {
            debug!(device = profile.name, %reason, "image rejected");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::{InterruptCatalog, MemoryRange, RegisterMap};

    const SMALL: DeviceProfile<'static> = DeviceProfile {
        name: "TEST",
        long_name: "Test Flash Application",
        sram: MemoryRange::new(0x2000_0000, 0x4000),
        max_reset_vector: 0xFFFF,
        interrupts: InterruptCatalog::new(&["Reset", "NMI", "HardFault", "SysTick"]),
        registers: RegisterMap::new(&[]),
    };

    fn image(sp: u32, reset: u32, extra_words: usize) -> Vec<u8> {
        let mut data = Vec::new();
        data.extend_from_slice(&sp.to_le_bytes());
        data.extend_from_slice(&reset.to_le_bytes());
        data.resize(data.len() + extra_words * 4, 0);
        data
    }

    #[test]
    fn test_accepts_minimal_image() {
        let data = image(0x2000_1000, 0x101, 3);
        assert!(recognize(&data, &SMALL));
        assert_eq!(
            check(&data, &SMALL),
            Ok(VectorHeader {
                initial_stack_pointer: 0x2000_1000,
                reset_vector: 0x101,
            })
        );
    }

    #[test]
    fn test_rejects_short_images() {
        let data = image(0x2000_1000, 0x101, 3);
        for len in 0..data.len() {
            assert!(!recognize(&data[..len], &SMALL), "accepted {} bytes", len);
        }
        assert_eq!(
            check(&data[..19], &SMALL),
            Err(Rejection::TooShort {
                expected: 20,
                actual: 19,
            })
        );
    }

    #[test]
    fn test_stack_pointer_bounds() {
        assert!(recognize(&image(0x2000_0000, 0x101, 3), &SMALL));
        assert!(recognize(&image(0x2000_3FFF, 0x101, 3), &SMALL));
        assert!(!recognize(&image(0x2000_4000, 0x101, 3), &SMALL));
        assert!(!recognize(&image(0x1FFF_FFFF, 0x101, 3), &SMALL));
        assert!(!recognize(&image(0x1000_0000, 0x101, 3), &SMALL));
    }

    #[test]
    fn test_stack_pointer_checked_before_reset() {
        // Both words bad: the stack pointer is reported.
        assert_eq!(
            check(&image(0x1000_0000, 0x0100_0000, 3), &SMALL),
            Err(Rejection::StackPointerOutOfRange { value: 0x1000_0000 })
        );
    }

    #[test]
    fn test_reset_vector_bound() {
        assert!(recognize(&image(0x2000_1000, 0xFFFF, 3), &SMALL));
        assert!(recognize(&image(0x2000_1000, 0, 3), &SMALL));
        assert_eq!(
            check(&image(0x2000_1000, 0x1_0000, 3), &SMALL),
            Err(Rejection::ResetVectorOutOfRange {
                value: 0x1_0000,
                max: 0xFFFF,
            })
        );
    }

    #[test]
    fn test_only_first_two_words_inspected() {
        let mut data = image(0x2000_1000, 0x101, 3);
        data[8..].fill(0xFF);
        assert!(recognize(&data, &SMALL));
    }

    #[test]
    fn test_verdict_is_stable() {
        let data = image(0x2000_2000, 0x201, 10);
        assert_eq!(recognize(&data, &SMALL), recognize(&data, &SMALL));
        let bad = image(0x0800_0000, 0x201, 10);
        assert_eq!(recognize(&bad, &SMALL), recognize(&bad, &SMALL));
    }

    #[test]
    fn test_empty_catalog_needs_two_words() {
        let profile = DeviceProfile {
            interrupts: InterruptCatalog::new(&[]),
            ..SMALL
        };
        assert!(!recognize(&0x2000_1000u32.to_le_bytes(), &profile));
        assert!(recognize(&image(0x2000_1000, 0x41, 0), &profile));
    }

    #[test]
    fn test_rejection_display() {
        let reason = Rejection::StackPointerOutOfRange { value: 0x1000_0000 };
        assert_eq!(
            reason.to_string(),
            "initial stack pointer 0x10000000 outside SRAM"
        );
    }

    #[test]
    fn test_shipped_profile() {
        let profile = DeviceProfile::default();
        let mut data = vec![0u8; profile.minimum_image_size()];
        data[0..4].copy_from_slice(&0x2000_0FF8u32.to_le_bytes());
        data[4..8].copy_from_slice(&0x0000_00C1u32.to_le_bytes());
        assert!(recognize(&data, &profile));
        assert!(!recognize(&data[..data.len() - 1], &profile));
    }
}
