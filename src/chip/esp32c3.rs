//! ESP32-C3 pin capability table.
//!
//! The C3 package exposes GPIOs 0-21 with no holes in the numbering.
//! GPIOs 18-19 double as the USB D-/D+ pads and GPIOs 11-17 connect to the
//! embedded flash on most modules; the table leaves them available and the
//! board design decides whether to use them.

use super::{HardwareId, PinTable};

const fn gpio(number: u8) -> Option<HardwareId> {
    Some(HardwareId::new(number))
}

/// ESP32-C3 pin table: indices 0-21, all present.
pub const PIN_TABLE: PinTable = PinTable::new(&[
    gpio(0),
    gpio(1),
    gpio(2),
    gpio(3),
    gpio(4),
    gpio(5),
    gpio(6),
    gpio(7),
    gpio(8),
    gpio(9),
    gpio(10),
    gpio(11),
    gpio(12),
    gpio(13),
    gpio(14),
    gpio(15),
    gpio(16),
    gpio(17),
    gpio(18),
    gpio(19),
    gpio(20),
    gpio(21),
]);
