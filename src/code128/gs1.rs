//! # Input Units and GS1 Preprocessing
//!
//! Code 128 consumes a stream of 7-bit data bytes interleaved with four
//! function codes (FNC1–FNC4) that have no byte value of their own. The
//! stream is modelled as [`Unit`] so mappers match on the tag instead of on
//! reserved byte ranges.
//!
//! ## GS1-128
//!
//! Input starting with the literal marker `[FNC1]` is GS1-128 data:
//!
//! ```text
//! "[FNC1]01 0950 1101 5300 0"  →  FNC1 '0' '1' '0' '9' '5' '0' ...
//! ```
//!
//! The marker becomes a single FNC1 unit and every space after it is dropped.
//! Only a leading marker is recognised; later occurrences are ordinary text.

use std::fmt;

use crate::error::BarcodeError;

/// Literal text that switches an input into GS1 mode.
pub const GS1_MARKER: &str = "[FNC1]";

/// Code 128 function codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fnc {
    Fnc1,
    Fnc2,
    Fnc3,
    Fnc4,
}

/// One element of the preprocessed input stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    /// Raw input byte. Only 0x00–0x7F are encodable.
    Data(u8),
    /// Function code travelling out-of-band.
    Control(Fnc),
}

impl Unit {
    /// True for ASCII `'0'..='9'`.
    #[inline]
    pub fn is_digit(self) -> bool {
        matches!(self, Unit::Data(b) if b.is_ascii_digit())
    }

    /// Digit value for ASCII digits.
    #[inline]
    pub fn digit(self) -> Option<u8> {
        match self {
            Unit::Data(b) if b.is_ascii_digit() => Some(b - b'0'),
            _ => None,
        }
    }
}

impl fmt::Display for Fnc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = match self {
            Fnc::Fnc1 => 1,
            Fnc::Fnc2 => 2,
            Fnc::Fnc3 => 3,
            Fnc::Fnc4 => 4,
        };
        write!(f, "FNC{}", n)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unit::Data(b) if b.is_ascii_graphic() || *b == b' ' => write!(f, "'{}'", *b as char),
            Unit::Data(b) => write!(f, "byte 0x{:02X}", b),
            Unit::Control(fnc) => write!(f, "{}", fnc),
        }
    }
}

/// Convert input text into the unit stream for one encode call.
///
/// Plain input maps byte-for-byte to [`Unit::Data`]. GS1 input (leading
/// [`GS1_MARKER`]) starts with FNC1 and has its spaces stripped.
///
/// ## Example
///
/// ```
/// use linecode::code128::{preprocess, Fnc, Unit};
///
/// let units = preprocess("[FNC1]10 AB").unwrap();
/// assert_eq!(units[0], Unit::Control(Fnc::Fnc1));
/// assert_eq!(units.len(), 5);
/// ```
pub fn preprocess(input: &str) -> Result<Vec<Unit>, BarcodeError> {
    preprocess_with(input, true)
}

/// [`preprocess`] with GS1 marker detection switchable.
pub fn preprocess_with(input: &str, gs1_prefix: bool) -> Result<Vec<Unit>, BarcodeError> {
    let mut units = Vec::new();
    units.try_reserve_exact(input.len())?;

    match input.strip_prefix(GS1_MARKER) {
        Some(rest) if gs1_prefix => {
            units.push(Unit::Control(Fnc::Fnc1));
            units.extend(rest.bytes().filter(|&b| b != b' ').map(Unit::Data));
        }
        _ => units.extend(input.bytes().map(Unit::Data)),
    }

    Ok(units)
}
