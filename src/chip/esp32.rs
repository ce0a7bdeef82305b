//! ESP32 pin capability table.
//!
//! Logical indices match the chip's GPIO numbering. GPIOs 20, 24 and 28-31
//! do not exist on the ESP32 package and are marked reserved. GPIOs 34-39
//! are input-only; the table does not encode that, so requesting an output
//! direction on them surfaces as a backend error.

use super::{HardwareId, PinTable};

const fn gpio(number: u8) -> Option<HardwareId> {
    Some(HardwareId::new(number))
}

/// ESP32 pin table: indices 0-39, reserved holes at 20, 24 and 28-31.
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
    None, // GPIO20 not present on the package
    gpio(21),
    gpio(22),
    gpio(23),
    None, // GPIO24 not present on the package
    gpio(25),
    gpio(26),
    gpio(27),
    None, // GPIO28-31 not present on the package
    None,
    None,
    None,
    gpio(32),
    gpio(33),
    gpio(34),
    gpio(35),
    gpio(36),
    gpio(37),
    gpio(38),
    gpio(39),
]);
