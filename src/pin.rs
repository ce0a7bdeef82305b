//! Pin handle and its operations.
//!
//! A [`Pin`] is bookkeeping over a validated [`HardwareId`]: it remembers
//! what this handle last applied and forwards every electrical action to a
//! [`GpioBackend`]. Opening a handle touches no hardware, and dropping one
//! resets nothing; electrical state belongs to the device, not the handle.
//!
//! Multiple handles over the same physical pin are allowed. The cached
//! fields reflect what *this* handle wrote, which is not necessarily the
//! device's state when another handle drives the same pin — last write
//! wins, exactly as on the hardware.

use log::{debug, trace, warn};

use crate::chip::{self, HardwareId, PinIndex, PinTable};
use crate::error::{BackendOp, PinError};
use crate::hal::gpio::{Direction, GpioBackend, PinLevel, PullMode};

/// Configuration request for [`Pin::configure`].
///
/// Absent fields leave the corresponding hardware setting untouched. The
/// application order is fixed by `configure`, not by field order here.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Pin direction to apply.
    pub mode: Option<Direction>,
    /// Pull resistor mode to apply.
    pub pull: Option<PullMode>,
    /// Output level to apply. Written before any direction change so that a
    /// pin switched to output does not glitch through a stale default level.
    pub initial_value: Option<PinLevel>,
}

/// Handle over one validated chip pin.
#[derive(Debug, Clone)]
pub struct Pin {
    id: HardwareId,
    direction: Option<Direction>,
    pull: PullMode,
    level: Option<PinLevel>,
}

impl Pin {
    /// Open a handle for a logical pin index on the selected chip.
    ///
    /// Validates the index against the chip's pin table and nothing else:
    /// no hardware is touched until the handle is configured or written.
    pub fn open(index: PinIndex) -> Result<Self, PinError> {
        Self::open_with(chip::PIN_TABLE, index)
    }

    /// Open a handle against an explicit pin table.
    ///
    /// Used by boards that remap the logical numbering, and by tests.
    pub fn open_with(table: PinTable, index: PinIndex) -> Result<Self, PinError> {
        let id = table.lookup(index)?;
        debug!("pin {} -> gpio {}", index, id.number());
        Ok(Self {
            id,
            direction: None,
            pull: PullMode::None,
            level: None,
        })
    }

    /// Open a handle and configure it in one call.
    ///
    /// Fails atomically from the caller's point of view: on a configuration
    /// error the handle is discarded and only the error returned. Backend
    /// steps applied before the failing one are *not* rolled back — the
    /// hardware keeps whatever state those writes left, because hardware
    /// actions are not transactional.
    pub fn open_and_configure<B: GpioBackend>(
        index: PinIndex,
        backend: &mut B,
        config: Config,
    ) -> Result<Self, PinError> {
        let mut pin = Self::open(index)?;
        pin.configure(backend, config)?;
        Ok(pin)
    }

    /// Apply a configuration to the pin.
    ///
    /// Steps run in fixed order: pad function select (always, idempotent),
    /// output level (if requested), direction, pull. The first backend
    /// failure aborts the remaining steps with no rollback; the error names
    /// the step that failed. Each field applied successfully updates the
    /// handle's cached state.
    pub fn configure<B: GpioBackend>(
        &mut self,
        backend: &mut B,
        config: Config,
    ) -> Result<(), PinError> {
        backend
            .select_gpio_function(self.id)
            .map_err(|e| backend_failure(self.id, BackendOp::SelectFunction, e))?;
        trace!("gpio {}: pad routed to GPIO function", self.id.number());

        if let Some(level) = config.initial_value {
            backend
                .set_level(self.id, level)
                .map_err(|e| backend_failure(self.id, BackendOp::SetLevel, e))?;
            trace!("gpio {}: initial level {:?}", self.id.number(), level);
            self.level = Some(level);
        }

        if let Some(mode) = config.mode {
            backend
                .set_direction(self.id, mode)
                .map_err(|e| backend_failure(self.id, BackendOp::SetDirection, e))?;
            trace!("gpio {}: direction {:?}", self.id.number(), mode);
            self.direction = Some(mode);
        }

        if let Some(pull) = config.pull {
            backend
                .set_pull(self.id, pull)
                .map_err(|e| backend_failure(self.id, BackendOp::SetPull, e))?;
            trace!("gpio {}: pull {:?}", self.id.number(), pull);
            self.pull = pull;
        }

        Ok(())
    }

    /// Read the live pin level from the backend.
    ///
    /// Never served from cached state: the level can change externally
    /// (input signal) or through another handle driving the same pin.
    pub fn read<B: GpioBackend>(&self, backend: &B) -> Result<PinLevel, PinError> {
        backend
            .get_level(self.id)
            .map_err(|e| backend_failure(self.id, BackendOp::GetLevel, e))
    }

    /// Drive the pin to `level`.
    ///
    /// The cached level is updated only after the backend accepts the write.
    pub fn write<B: GpioBackend>(
        &mut self,
        backend: &mut B,
        level: PinLevel,
    ) -> Result<(), PinError> {
        backend
            .set_level(self.id, level)
            .map_err(|e| backend_failure(self.id, BackendOp::SetLevel, e))?;
        self.level = Some(level);
        Ok(())
    }

    /// Scripting-style get/set convenience over [`read`](Pin::read) and
    /// [`write`](Pin::write).
    ///
    /// No arguments reads the pin, one argument writes it; anything longer
    /// fails with [`PinError::BadArity`] before any backend call. Returns
    /// the level read, or `None` after a write.
    pub fn value<B: GpioBackend>(
        &mut self,
        backend: &mut B,
        args: &[PinLevel],
    ) -> Result<Option<PinLevel>, PinError> {
        match args {
            [] => self.read(backend).map(Some),
            [level] => self.write(backend, *level).map(|_| None),
            _ => Err(PinError::BadArity),
        }
    }

    /// Hardware id resolved at open time. Fixed for the handle's lifetime.
    pub const fn hardware_id(&self) -> HardwareId {
        self.id
    }

    /// Direction this handle last applied, if any.
    pub const fn direction(&self) -> Option<Direction> {
        self.direction
    }

    /// Pull mode this handle last applied.
    pub const fn pull(&self) -> PullMode {
        self.pull
    }

    /// Level this handle last successfully wrote, if any.
    ///
    /// Cached bookkeeping, not the electrical state; use [`Pin::read`] for
    /// the live level.
    pub const fn last_written(&self) -> Option<PinLevel> {
        self.level
    }
}

fn backend_failure<E: core::fmt::Debug>(id: HardwareId, op: BackendOp, err: E) -> PinError {
    warn!("gpio {}: {:?} failed: {:?}", id.number(), op, err);
    PinError::BackendFailure(op)
}
