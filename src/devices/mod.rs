//! Shipped device profiles.

pub mod ht32f1654;

use crate::device::DeviceProfile;

/// HT32F1654 profile.
pub const HT32F1654: DeviceProfile<'static> = ht32f1654::PROFILE;

/// Every shipped profile, in lookup order.
pub static ALL: &[DeviceProfile<'static>] = &[HT32F1654];
