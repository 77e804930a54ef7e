//! Unmangled statics carrying the vendor symbol names, so C code that refers
//! to e.g. `GUID_VIDEO_SUBGROUP` resolves it against this crate at link time.

use crate::guid::Guid;
use crate::subgroup;


#[no_mangle]
pub static NO_SUBGROUP_GUID: Guid = subgroup::NO_SUBGROUP_GUID;
#[no_mangle]
pub static GUID_DISK_SUBGROUP: Guid = subgroup::GUID_DISK_SUBGROUP;
#[no_mangle]
pub static GUID_SYSTEM_BUTTON_SUBGROUP: Guid = subgroup::GUID_SYSTEM_BUTTON_SUBGROUP;
#[no_mangle]
pub static GUID_PROCESSOR_SETTINGS_SUBGROUP: Guid = subgroup::GUID_PROCESSOR_SETTINGS_SUBGROUP;
#[no_mangle]
pub static GUID_VIDEO_SUBGROUP: Guid = subgroup::GUID_VIDEO_SUBGROUP;
#[no_mangle]
pub static GUID_BATTERY_SUBGROUP: Guid = subgroup::GUID_BATTERY_SUBGROUP;
#[no_mangle]
pub static GUID_SLEEP_SUBGROUP: Guid = subgroup::GUID_SLEEP_SUBGROUP;
#[no_mangle]
pub static GUID_PCIEXPRESS_SETTINGS_SUBGROUP: Guid = subgroup::GUID_PCIEXPRESS_SETTINGS_SUBGROUP;
