//! GPIO backend capability interface.
//!
//! [`GpioBackend`] is the seam across which the hardware driver is
//! substituted: memory-mapped register access, a vendor SDK, or a
//! call-recording fake in tests.

use crate::chip::HardwareId;

/// Pin logic level.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PinLevel {
    /// Logic low (0V or ground).
    Low,
    /// Logic high (VDD or 3.3V/5V depending on system).
    High,
}

impl From<bool> for PinLevel {
    fn from(value: bool) -> Self {
        if value {
            PinLevel::High
        } else {
            PinLevel::Low
        }
    }
}

impl From<PinLevel> for bool {
    fn from(level: PinLevel) -> bool {
        matches!(level, PinLevel::High)
    }
}

/// Pin direction.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    /// Pin reads external input.
    Input,
    /// Pin drives a push-pull output.
    Output,
    /// Pin drives output with open-drain behavior.
    OpenDrain,
}

/// Internal pull resistor configuration.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PullMode {
    /// No pull resistor (high impedance).
    None,
    /// Enable internal pull-up resistor.
    Up,
    /// Enable internal pull-down resistor.
    Down,
}

/// GPIO backend trait.
///
/// Implemented by the chip's GPIO driver. All methods address pins by
/// [`HardwareId`]; validating a logical index against the chip table is the
/// pin layer's job and happens before a `HardwareId` can exist.
///
/// Each method may fail with a backend-defined error. The pin layer logs
/// that error and wraps every failure uniformly as
/// [`PinError::BackendFailure`](crate::error::PinError::BackendFailure).
///
/// The backend is shared across all pin handles constructed over it and
/// must outlive every one of them. It provides no cross-handle mutual
/// exclusion; hardware registers guarantee nothing beyond single-write
/// atomicity.
pub trait GpioBackend {
    /// Error type for backend operations.
    type Error: core::fmt::Debug;

    /// Route the physical pad to its GPIO function.
    ///
    /// Idempotent on hardware; invoked unconditionally before any other
    /// configuration step.
    fn select_gpio_function(&mut self, id: HardwareId) -> Result<(), Self::Error>;

    /// Set the pin direction.
    fn set_direction(&mut self, id: HardwareId, direction: Direction) -> Result<(), Self::Error>;

    /// Configure the internal pull resistor.
    fn set_pull(&mut self, id: HardwareId, pull: PullMode) -> Result<(), Self::Error>;

    /// Drive the pin to a specific level.
    fn set_level(&mut self, id: HardwareId, level: PinLevel) -> Result<(), Self::Error>;

    /// Read the current logic level of the pin.
    fn get_level(&self, id: HardwareId) -> Result<PinLevel, Self::Error>;

    /// Drive the pin high.
    fn set_high(&mut self, id: HardwareId) -> Result<(), Self::Error> {
        self.set_level(id, PinLevel::High)
    }

    /// Drive the pin low.
    fn set_low(&mut self, id: HardwareId) -> Result<(), Self::Error> {
        self.set_level(id, PinLevel::Low)
    }
}
