//! Power-setting subgroup GUIDs of the Windows power profile API.
//!
//! The constants live in [`subgroup`] and are re-exported here. With the
//! `export-symbols` feature the same values are also emitted as unmangled
//! statics (see [`export`]) so foreign code can link against them by name.

#![cfg_attr(not(test), no_std)]

#[macro_use]
extern crate log;
extern crate static_assertions as sa;

mod guid;
pub mod subgroup;
#[cfg(feature = "export-symbols")]
pub mod export;
pub mod logk;

pub use guid::{Guid, GuidFromStrError};
pub use subgroup::{
    PowerSubgroup, POWER_SUBGROUPS,
    NO_SUBGROUP_GUID, GUID_DISK_SUBGROUP, GUID_SYSTEM_BUTTON_SUBGROUP,
    GUID_PROCESSOR_SETTINGS_SUBGROUP, GUID_VIDEO_SUBGROUP, GUID_BATTERY_SUBGROUP,
    GUID_SLEEP_SUBGROUP, GUID_PCIEXPRESS_SETTINGS_SUBGROUP,
};
