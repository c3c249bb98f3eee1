//! # Error Types
//!
//! This module defines the error type returned by every encoder in the crate.
//!
//! All failures are local to one encode call. Nothing is retried; the caller
//! re-invokes with corrected input.

use std::collections::TryReserveError;

use thiserror::Error;

use crate::code128::Unit;

/// Coarse failure category.
///
/// | Kind | Raised when |
/// |------|-------------|
/// | `InvalidArgument` | input or output buffer missing/unusable, before any work |
/// | `InvalidInput` | a unit cannot be represented at its position |
/// | `AllocationFailure` | a per-call buffer could not be reserved |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    InvalidInput,
    AllocationFailure,
}

/// Main error type for barcode encoding
#[derive(Debug, Error)]
pub enum BarcodeError {
    /// Nothing to encode
    #[error("Invalid argument: input is empty")]
    EmptyInput,

    /// Output buffer cannot hold the barcode
    #[error("Invalid argument: output buffer holds {available} modules, {needed} needed")]
    BufferTooSmall { needed: usize, available: usize },

    /// Unit not representable by any code set at this position
    #[error("Invalid input: {unit} at position {position} cannot be encoded")]
    InvalidInput { position: usize, unit: Unit },

    /// Per-call buffer reservation failed
    #[error("Allocation failure: {0}")]
    Allocation(#[from] TryReserveError),
}

impl BarcodeError {
    /// Category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyInput | Self::BufferTooSmall { .. } => ErrorKind::InvalidArgument,
            Self::InvalidInput { .. } => ErrorKind::InvalidInput,
            Self::Allocation(_) => ErrorKind::AllocationFailure,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code128::Fnc;

    #[test]
    fn test_kind_mapping() {
        assert_eq!(BarcodeError::EmptyInput.kind(), ErrorKind::InvalidArgument);
        assert_eq!(
            BarcodeError::BufferTooSmall {
                needed: 66,
                available: 10
            }
            .kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(
            BarcodeError::InvalidInput {
                position: 3,
                unit: Unit::Data(0xE9)
            }
            .kind(),
            ErrorKind::InvalidInput
        );
    }

    #[test]
    fn test_allocation_kind() {
        let err = Vec::<bool>::new().try_reserve_exact(usize::MAX).unwrap_err();
        assert_eq!(BarcodeError::from(err).kind(), ErrorKind::AllocationFailure);
    }

    #[test]
    fn test_display_names_unit_and_position() {
        let err = BarcodeError::InvalidInput {
            position: 4,
            unit: Unit::Data(0xC3),
        };
        assert_eq!(
            err.to_string(),
            "Invalid input: byte 0xC3 at position 4 cannot be encoded"
        );

        let err = BarcodeError::InvalidInput {
            position: 0,
            unit: Unit::Control(Fnc::Fnc2),
        };
        assert_eq!(
            err.to_string(),
            "Invalid input: FNC2 at position 0 cannot be encoded"
        );
    }
}
