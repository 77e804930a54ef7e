//! The 128-bit structured identifier used across the Windows API.
//!
//! [`Guid`] mirrors the C `GUID` structure field for field, so a reference to
//! one can be handed straight to a system call expecting `const GUID *`.
//! Text conversions go through [`uguid`], whose `Guid` has the same byte image
//! but only byte alignment.

use core::fmt::{self, Write};
use core::mem::{align_of, offset_of, size_of};
use core::str::FromStr;

pub use uguid::GuidFromStrError;


/// A Globally Unique Identifier with the vendor field layout.
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Guid {
    pub data1: u32,
    pub data2: u16,
    pub data3: u16,
    pub data4: [u8; 8],
}

sa::const_assert_eq!(size_of::<Guid>(), 16);
sa::const_assert_eq!(align_of::<Guid>(), 4);
sa::const_assert_eq!(offset_of!(Guid, data1), 0);
sa::const_assert_eq!(offset_of!(Guid, data2), 4);
sa::const_assert_eq!(offset_of!(Guid, data3), 6);
sa::const_assert_eq!(offset_of!(Guid, data4), 8);

impl Guid {
    /// The nil GUID, all bits zero.
    pub const ZERO: Guid = Guid::new(0, 0, 0, [0; 8]);

    #[inline(always)]
    pub const fn new(data1: u32, data2: u16, data3: u16, data4: [u8; 8]) -> Self {
        Self { data1, data2, data3, data4 }
    }

    /// Returns the bytes as the structure is laid out in memory on a little-endian
    /// target: the three integer fields little-endian, then `data4` verbatim.
    ///
    /// This is the sequence the operating system compares.
    pub const fn to_bytes(self) -> [u8; 16] {
        let d1 = self.data1.to_le_bytes();
        let d2 = self.data2.to_le_bytes();
        let d3 = self.data3.to_le_bytes();
        let d4 = self.data4;
        [
            d1[0], d1[1], d1[2], d1[3], d2[0], d2[1], d3[0], d3[1], d4[0], d4[1], d4[2], d4[3],
            d4[4], d4[5], d4[6], d4[7],
        ]
    }

    /// Inverse of [`to_bytes`].
    ///
    /// [`to_bytes`]: Guid::to_bytes
    pub const fn from_bytes(b: [u8; 16]) -> Self {
        Self {
            data1: u32::from_le_bytes([b[0], b[1], b[2], b[3]]),
            data2: u16::from_le_bytes([b[4], b[5]]),
            data3: u16::from_le_bytes([b[6], b[7]]),
            data4: [b[8], b[9], b[10], b[11], b[12], b[13], b[14], b[15]],
        }
    }

    #[inline]
    pub const fn from_uguid(guid: uguid::Guid) -> Self {
        Self::from_bytes(guid.to_bytes())
    }

    #[inline]
    pub const fn to_uguid(self) -> uguid::Guid {
        uguid::Guid::from_bytes(self.to_bytes())
    }

    /// Parses the canonical `xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx` form.
    /// Hex digits may be in either case.
    pub const fn try_parse(s: &str) -> Result<Self, GuidFromStrError> {
        match uguid::Guid::try_parse(s) {
            Ok(guid) => Ok(Self::from_uguid(guid)),
            Err(err) => Err(err),
        }
    }

    /// Same as [`try_parse`] but panics on malformed input, which turns into a
    /// compile error when evaluated in a `const` item.
    ///
    /// [`try_parse`]: Guid::try_parse
    pub const fn parse_or_panic(s: &str) -> Self {
        Self::from_uguid(uguid::Guid::parse_or_panic(s))
    }
}

impl Default for Guid {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<uguid::Guid> for Guid {
    fn from(guid: uguid::Guid) -> Self {
        Self::from_uguid(guid)
    }
}

impl From<Guid> for uguid::Guid {
    fn from(guid: Guid) -> Self {
        guid.to_uguid()
    }
}

impl FromStr for Guid {
    type Err = GuidFromStrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Guid::try_parse(s)
    }
}

impl fmt::Display for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_uguid(), f)
    }
}

impl fmt::UpperHex for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.to_uguid().to_ascii_hex_lower() {
            f.write_char(char::from(c.to_ascii_uppercase()))?;
        }
        Ok(())
    }
}

impl fmt::Debug for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Guid({})", self)
    }
}
