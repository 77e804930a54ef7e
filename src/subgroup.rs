//! Power-setting subgroup GUIDs, as accepted by `PowerCreatePossibleSetting`
//! and the other subgroup-scoped calls of the power profile API.

use crate::guid::Guid;


/// Settings that belong to no subgroup.
pub const NO_SUBGROUP_GUID: Guid =
    Guid::new(0xfea3413e, 0x7e05, 0x4911, [0x9a, 0x71, 0x70, 0x03, 0x31, 0xf1, 0xc2, 0x94]);
pub const GUID_DISK_SUBGROUP: Guid =
    Guid::new(0x0012ee47, 0x9041, 0x4b5d, [0x9b, 0x77, 0x53, 0x5f, 0xba, 0x8b, 0x14, 0x42]);
/// Power, sleep and lid buttons.
pub const GUID_SYSTEM_BUTTON_SUBGROUP: Guid =
    Guid::new(0x4f971e89, 0xeebd, 0x4455, [0xa8, 0xde, 0x9e, 0x59, 0x04, 0x0e, 0x73, 0x47]);
pub const GUID_PROCESSOR_SETTINGS_SUBGROUP: Guid =
    Guid::new(0x54533251, 0x82be, 0x4824, [0x96, 0xc1, 0x47, 0xb6, 0x0b, 0x74, 0x0d, 0x00]);
pub const GUID_VIDEO_SUBGROUP: Guid =
    Guid::new(0x7516b95f, 0xf776, 0x4464, [0x8c, 0x53, 0x06, 0x16, 0x7f, 0x40, 0xcc, 0x99]);
pub const GUID_BATTERY_SUBGROUP: Guid =
    Guid::new(0xe73a048d, 0xbf27, 0x4f12, [0x97, 0x31, 0x8b, 0x20, 0x76, 0xe8, 0x89, 0x1f]);
pub const GUID_SLEEP_SUBGROUP: Guid =
    Guid::new(0x238c9fa8, 0x0aad, 0x41ed, [0x83, 0xf4, 0x97, 0xbe, 0x24, 0x2c, 0x8f, 0x20]);
/// PCI Express link state power management.
pub const GUID_PCIEXPRESS_SETTINGS_SUBGROUP: Guid =
    Guid::new(0x501a4d13, 0x42af, 0x4429, [0x9f, 0xd1, 0xa8, 0x21, 0x8c, 0x26, 0x8e, 0x20]);

/// One named entry of [`POWER_SUBGROUPS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PowerSubgroup {
    pub name: &'static str,
    pub guid: Guid,
}

macro_rules! subgroup_table {
    ($($name:ident),+ $(,)?) => {
        [$(PowerSubgroup { name: stringify!($name), guid: $name }),+]
    };
}

const ENTRIES: &[PowerSubgroup] = &subgroup_table![
    NO_SUBGROUP_GUID,
    GUID_DISK_SUBGROUP,
    GUID_SYSTEM_BUTTON_SUBGROUP,
    GUID_PROCESSOR_SETTINGS_SUBGROUP,
    GUID_VIDEO_SUBGROUP,
    GUID_BATTERY_SUBGROUP,
    GUID_SLEEP_SUBGROUP,
    GUID_PCIEXPRESS_SETTINGS_SUBGROUP,
];

sa::const_assert_eq!(ENTRIES.len(), 8);

/// Every subgroup constant of this module, in declaration order.
pub static POWER_SUBGROUPS: &[PowerSubgroup] = ENTRIES;


#[cfg(test)]
mod tests {
    use super::*;

    const CANONICAL: [(&str, &str); 8] = [
        ("NO_SUBGROUP_GUID", "fea3413e-7e05-4911-9a71-700331f1c294"),
        ("GUID_DISK_SUBGROUP", "0012ee47-9041-4b5d-9b77-535fba8b1442"),
        ("GUID_SYSTEM_BUTTON_SUBGROUP", "4f971e89-eebd-4455-a8de-9e59040e7347"),
        ("GUID_PROCESSOR_SETTINGS_SUBGROUP", "54533251-82be-4824-96c1-47b60b740d00"),
        ("GUID_VIDEO_SUBGROUP", "7516b95f-f776-4464-8c53-06167f40cc99"),
        ("GUID_BATTERY_SUBGROUP", "e73a048d-bf27-4f12-9731-8b2076e8891f"),
        ("GUID_SLEEP_SUBGROUP", "238c9fa8-0aad-41ed-83f4-97be242c8f20"),
        ("GUID_PCIEXPRESS_SETTINGS_SUBGROUP", "501a4d13-42af-4429-9fd1-a8218c268e20"),
    ];

    #[test]
    fn table_has_exactly_the_documented_names() {
        assert_eq!(POWER_SUBGROUPS.len(), 8);
        let names: Vec<_> = POWER_SUBGROUPS.iter().map(|e| e.name).collect();
        let expected: Vec<_> = CANONICAL.iter().map(|(n, _)| *n).collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn values_match_canonical_form() {
        for (entry, (name, text)) in POWER_SUBGROUPS.iter().zip(CANONICAL.iter()) {
            assert_eq!(entry.name, *name);
            assert_eq!(entry.guid.to_string(), *text, "{}", name);
            assert_eq!(entry.guid, Guid::parse_or_panic(text), "{}", name);
            let independent = uguid::Guid::parse_or_panic(text);
            assert_eq!(entry.guid.to_bytes(), independent.to_bytes(), "{}", name);
        }
    }

    #[test]
    fn battery_bytes() {
        assert_eq!(
            GUID_BATTERY_SUBGROUP.to_bytes(),
            [
                0x8d, 0x04, 0x3a, 0xe7, 0x27, 0xbf, 0x12, 0x4f, 0x97, 0x31, 0x8b, 0x20, 0x76,
                0xe8, 0x89, 0x1f,
            ]
        );
    }

    #[test]
    fn values_are_unique() {
        for (i, a) in POWER_SUBGROUPS.iter().enumerate() {
            for b in &POWER_SUBGROUPS[i + 1..] {
                assert_ne!(a.guid, b.guid, "{} and {} collide", a.name, b.name);
            }
        }
        assert!(POWER_SUBGROUPS.iter().all(|e| e.guid != Guid::ZERO));
    }

    #[test]
    fn reads_are_stable() {
        let first = GUID_SLEEP_SUBGROUP.to_bytes();
        let second = GUID_SLEEP_SUBGROUP.to_bytes();
        assert_eq!(first, second);
        assert_eq!(POWER_SUBGROUPS[6].guid, GUID_SLEEP_SUBGROUP);
    }
}
