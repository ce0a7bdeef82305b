//! Hardware Pin Abstraction Layer
//!
//! This crate maps logical pin indices to chip GPIO identifiers, validates
//! them against a per-chip capability table, and forwards electrical actions
//! to a [`GpioBackend`] implemented by the vendor driver.
//!
//! # Module Organization
//!
//! - [`hal`]: Platform-independent trait definitions
//! - [`chip`]: Chip-specific pin capability tables (selected by Cargo feature)
//! - [`pin`]: The [`Pin`] handle and its operations
//! - [`error`]: Error taxonomy
//!
//! # Design Principles
//!
//! 1. **Data-Driven Tables**: Chip variants differ only in table data, never
//!    in lookup logic
//! 2. **No Hardware at Open**: A handle is pure bookkeeping until configured
//!    or written
//! 3. **Fail Fast, No Rollback**: Hardware writes are not transactional;
//!    steps applied before a failure stay in effect
//! 4. **No Hidden Locking**: Callers sharing a physical pin across concurrent
//!    contexts supply their own synchronization
//!
//! # Usage Example
//!
//! ```no_run
//! use pin_hal::{Config, Direction, GpioBackend, HardwareId, Pin, PinLevel, PullMode};
//!
//! # struct Driver;
//! # impl GpioBackend for Driver {
//! #     type Error = ();
//! #     fn select_gpio_function(&mut self, _: HardwareId) -> Result<(), ()> { Ok(()) }
//! #     fn set_direction(&mut self, _: HardwareId, _: Direction) -> Result<(), ()> { Ok(()) }
//! #     fn set_pull(&mut self, _: HardwareId, _: PullMode) -> Result<(), ()> { Ok(()) }
//! #     fn set_level(&mut self, _: HardwareId, _: PinLevel) -> Result<(), ()> { Ok(()) }
//! #     fn get_level(&self, _: HardwareId) -> Result<PinLevel, ()> { Ok(PinLevel::Low) }
//! # }
//! # fn main() -> Result<(), pin_hal::PinError> {
//! let mut driver = Driver;
//!
//! let mut led = Pin::open_and_configure(
//!     2,
//!     &mut driver,
//!     Config {
//!         mode: Some(Direction::Output),
//!         initial_value: Some(PinLevel::Low),
//!         ..Config::default()
//!     },
//! )?;
//!
//! led.write(&mut driver, PinLevel::High)?;
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(test), no_std)]

pub mod chip;
pub mod error;
pub mod hal;
pub mod pin;

// Re-export commonly used types
pub use chip::{HardwareId, PinIndex, PinTable};
pub use error::{BackendOp, PinError};
pub use hal::gpio::{Direction, GpioBackend, PinLevel, PullMode};
pub use pin::{Config, Pin};
