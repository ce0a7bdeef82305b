//! Chip-specific pin capability tables.
//!
//! Each supported chip supplies a table mapping logical pin indices to the
//! GPIO numbers its driver understands. The table is data, not logic: a new
//! chip variant adds a module with a different table and a Cargo feature,
//! nothing else.

use crate::error::PinError;

/// Logical pin index, as supplied by callers.
pub type PinIndex = usize;

/// Opaque chip GPIO identifier.
///
/// Obtained only through a successful table lookup; backends unpack it with
/// [`HardwareId::number`]. Never changes once a handle holds it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct HardwareId(u8);

impl HardwareId {
    /// Wrap a raw chip GPIO number.
    pub const fn new(number: u8) -> Self {
        Self(number)
    }

    /// The raw chip GPIO number.
    pub const fn number(self) -> u8 {
        self.0
    }
}

/// Pin capability table for one chip.
///
/// `None` entries are indices that exist in the chip's numbering scheme but
/// map to no usable pin (reserved, or absent from the package). The entry
/// slice is fixed at build time and immutable for the process lifetime.
#[derive(Debug, Copy, Clone)]
pub struct PinTable {
    entries: &'static [Option<HardwareId>],
}

impl PinTable {
    /// Build a table over a static entry slice.
    pub const fn new(entries: &'static [Option<HardwareId>]) -> Self {
        Self { entries }
    }

    /// Number of indices in the table, reserved entries included.
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries at all.
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve a logical index to a hardware id.
    ///
    /// Fails with [`PinError::InvalidIndex`] when the index is out of
    /// bounds or names a reserved entry. Pure; no hardware is touched.
    pub fn lookup(&self, index: PinIndex) -> Result<HardwareId, PinError> {
        match self.entries.get(index) {
            Some(Some(id)) => Ok(*id),
            _ => Err(PinError::InvalidIndex),
        }
    }
}

// Chip selection based on Cargo features
cfg_if::cfg_if! {
    if #[cfg(feature = "esp32")] {
        pub mod esp32;
        pub use esp32::PIN_TABLE;
    } else if #[cfg(feature = "esp32c3")] {
        pub mod esp32c3;
        pub use esp32c3::PIN_TABLE;
    } else {
        compile_error!(
            "No chip selected!\n\
            Use: cargo build --features esp32\n\
            Or:  cargo build --no-default-features --features esp32c3"
        );
    }
}

// Ensure only one chip is selected
#[cfg(all(feature = "esp32", feature = "esp32c3"))]
compile_error!(
    "Multiple chips selected! Choose only one: esp32 OR esp32c3 \
    (use --no-default-features when selecting esp32c3)"
);

#[cfg(test)]
mod tests {
    use super::*;

    const ENTRIES: &[Option<HardwareId>] = &[
        Some(HardwareId::new(0)),
        Some(HardwareId::new(1)),
        None,
        Some(HardwareId::new(3)),
    ];

    const TABLE: PinTable = PinTable::new(ENTRIES);

    #[test]
    fn lookup_resolves_present_entries() {
        assert_eq!(TABLE.lookup(0), Ok(HardwareId::new(0)));
        assert_eq!(TABLE.lookup(1), Ok(HardwareId::new(1)));
        assert_eq!(TABLE.lookup(3), Ok(HardwareId::new(3)));
    }

    #[test]
    fn lookup_rejects_reserved_entry() {
        assert_eq!(TABLE.lookup(2), Err(PinError::InvalidIndex));
    }

    #[test]
    fn lookup_rejects_out_of_bounds() {
        assert_eq!(TABLE.lookup(4), Err(PinError::InvalidIndex));
        assert_eq!(TABLE.lookup(usize::MAX), Err(PinError::InvalidIndex));
    }

    #[test]
    fn table_reports_length() {
        assert_eq!(TABLE.len(), 4);
        assert!(!TABLE.is_empty());
        assert!(PinTable::new(&[]).is_empty());
    }

    #[cfg(feature = "esp32")]
    #[test]
    fn esp32_table_matches_chip_numbering() {
        assert_eq!(PIN_TABLE.len(), 40);

        // GPIOs 20, 24 and 28-31 do not exist on the package.
        for reserved in [20, 24, 28, 29, 30, 31] {
            assert_eq!(PIN_TABLE.lookup(reserved), Err(PinError::InvalidIndex));
        }

        // Every other index maps to the equally numbered GPIO.
        for index in (0..40).filter(|i| ![20, 24, 28, 29, 30, 31].contains(i)) {
            assert_eq!(PIN_TABLE.lookup(index), Ok(HardwareId::new(index as u8)));
        }
    }
}
