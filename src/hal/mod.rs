//! Hardware Abstraction Layer (HAL) - Platform-Independent Traits
//!
//! This module defines the trait boundary between the pin layer and the
//! vendor GPIO driver. The driver implements [`gpio::GpioBackend`]; the pin
//! layer never touches registers itself.
//!
//! # Design Principles
//!
//! - **No platform leakage**: Traits speak [`HardwareId`](crate::chip::HardwareId)
//!   and the enums below, never chip register types
//! - **Substitutable**: Tests implement the traits with a call-recording fake
//!
//! # Available Interfaces
//!
//! - [`gpio`]: Pad function selection, direction, pull and level control

pub mod gpio;
