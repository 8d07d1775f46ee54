//! Image loading and symbolication.
//!
//! Loading turns an accepted image into a [`LoadedView`]:
//!
//! 1. The reset vector (Thumb bit cleared) becomes the primary entry point.
//! 2. SRAM is mapped at the device's fixed range, zero-filled, `rwx`.
//! 3. The image is mapped at the caller's base address, `r-x`.
//! 4. Every peripheral register becomes a data symbol.
//! 5. Every used vector becomes a function symbol and an entry point.
//!
//! The vector table is decoded before anything is added to the view, so a
//! load either produces a complete view or an error.

use std::borrow::Cow;
use std::path::Path;

use tracing::{debug, info, trace, warn};

use crate::device::{Address, DeviceProfile, MemoryRange, RegisterMap};
use crate::error::{LoaderError, Result};
use crate::recognizer;
use crate::vector_table::VectorTable;
use crate::view::{LoadedView, Segment, SegmentBacking, SegmentFlags, Symbol};

/// Label of the SRAM segment.
pub const SRAM_SEGMENT: &str = "SRAM";

/// Label of the flash segment.
pub const FLASH_SEGMENT: &str = "Flash";

/// Load an image at `base`.
///
/// The image is expected to have passed [`recognizer::recognize`]. `base`
/// is taken as given; choosing a sensible flash address is the caller's
/// job.
///
/// # Errors
///
/// [`LoaderError::VectorTableTooShort`] if the image cannot hold the
/// vector table. No view is produced in that case.
pub fn load<'a>(
    image: &'a [u8],
    base: Address,
    profile: &DeviceProfile<'_>,
) -> Result<LoadedView<'a>> {
    build(Cow::Borrowed(image), base, profile)
}

/// Recognize, then load.
///
/// # Errors
///
/// [`LoaderError::NotRecognized`] when the recognizer rejects the image.
pub fn open<'a>(
    image: &'a [u8],
    base: Address,
    profile: &DeviceProfile<'_>,
) -> Result<LoadedView<'a>> {
    ensure_recognized(image, profile)?;
    load(image, base, profile)
}

/// Read a file, recognize it, and load it.
///
/// The returned view owns the file contents.
pub fn load_file<P: AsRef<Path>>(
    path: P,
    base: Address,
    profile: &DeviceProfile<'_>,
) -> Result<LoadedView<'static>> {
    let path = path.as_ref();
    let data = std::fs::read(path)?;
    debug!(path = %path.display(), size = data.len(), "read image");
    ensure_recognized(&data, profile)?;
    build(Cow::Owned(data), base, profile)
}

fn ensure_recognized(image: &[u8], profile: &DeviceProfile<'_>) -> Result<()> {
    recognizer::check(image, profile)
        .map(|_| ())
        .map_err(|reason| {
            debug!(device = profile.name, %reason, "image rejected");
            LoaderError::NotRecognized {
                device: profile.name.to_string(),
                reason: reason.to_string(),
            }
        })
}

fn build<'a>(
    image: Cow<'a, [u8]>,
    base: Address,
    profile: &DeviceProfile<'_>,
) -> Result<LoadedView<'a>> {
    let table = VectorTable::parse(&image, &profile.interrupts).map_err(|err| {
        warn!(device = profile.name, %err, "load aborted");
        err
    })?;

    let image_len = image.len();
    let entry_point = Address::from(table.entry_point());

    let mut view = LoadedView::new(profile.name, profile.long_name, image);

    view.set_entry_point(entry_point);

    add_sram_segment(&mut view, profile.sram);
    add_flash_segment(&mut view, base, image_len);

    add_register_symbols(&mut view, &profile.registers);
    add_interrupt_symbols(&mut view, &table);

    info!(
        device = profile.name,
        base = format_args!("0x{:08X}", base),
        entry = format_args!("0x{:08X}", entry_point),
        symbols = view.symbols().len(),
        entry_points = view.entry_points().len(),
        "image loaded"
    );

    Ok(view)
}

fn add_sram_segment(view: &mut LoadedView<'_>, sram: MemoryRange) {
    debug!(range = %sram, "mapping SRAM");
    view.add_segment(Segment {
        name: SRAM_SEGMENT,
        range: sram,
        flags: SegmentFlags::READABLE | SegmentFlags::WRITABLE | SegmentFlags::EXECUTABLE,
        backing: SegmentBacking::Zeroed,
    });
}

fn add_flash_segment(view: &mut LoadedView<'_>, base: Address, len: usize) {
    let range = MemoryRange::new(base, len as u64);
    debug!(range = %range, "mapping flash");
    view.add_segment(Segment {
        name: FLASH_SEGMENT,
        range,
        flags: SegmentFlags::READABLE | SegmentFlags::EXECUTABLE,
        backing: SegmentBacking::Image {
            offset: 0,
            length: len,
        },
    });
}

fn add_register_symbols(view: &mut LoadedView<'_>, registers: &RegisterMap<'_>) {
    for (addr, name) in registers.iter() {
        trace!(addr = format_args!("0x{:08X}", addr), name, "register");
        view.define_symbol(Symbol::data(Address::from(addr), name));
    }
}

fn add_interrupt_symbols(view: &mut LoadedView<'_>, table: &VectorTable<'_>) {
    for entry in table.entries.iter() {
        let Some(handler) = entry.handler_address() else {
            continue;
        };
        let addr = Address::from(handler);
        trace!(addr = format_args!("0x{:08X}", addr), name = entry.name, "handler");
        if !view.define_symbol(Symbol::function(addr, entry.name)) {
            debug!(
                addr = format_args!("0x{:08X}", addr),
                name = entry.name,
                "duplicate handler symbol"
            );
        }
        view.add_entry_point(addr);
    }
}
