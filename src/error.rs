//! Error taxonomy for pin lookup and backend operations.

use core::fmt;

/// Backend operation that was in progress when a failure occurred.
///
/// Carried inside [`PinError::BackendFailure`] so callers can tell which
/// step of a multi-step configuration ran before the fault. Steps already
/// applied are never rolled back.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BackendOp {
    /// Routing the physical pad to its GPIO function.
    SelectFunction,
    /// Writing an output level.
    SetLevel,
    /// Setting the pin direction.
    SetDirection,
    /// Configuring the internal pull resistor.
    SetPull,
    /// Reading the pin level.
    GetLevel,
}

/// Errors returned by table lookup and pin operations.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PinError {
    /// The pin index is out of the table's range or names a reserved pin.
    /// Recoverable: report "invalid pin" and abort the construction.
    InvalidIndex,
    /// A backend call failed. Not retried automatically; the payload names
    /// the operation that failed, and operations applied before it remain
    /// in effect on the hardware.
    BackendFailure(BackendOp),
    /// [`Pin::value`](crate::pin::Pin::value) was called with more than one
    /// level argument. A caller contract violation, not a recoverable
    /// condition.
    BadArity,
}

impl fmt::Display for PinError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PinError::InvalidIndex => write!(f, "invalid pin"),
            PinError::BackendFailure(op) => write!(f, "backend failure during {op:?}"),
            PinError::BadArity => write!(f, "expected zero or one level arguments"),
        }
    }
}

impl core::error::Error for PinError {}
