//! # Code Set Mappers
//!
//! Code 128 has three overlapping alphabets:
//!
//! | Set | Covers | Units per symbol |
//! |-----|--------|------------------|
//! | A | ASCII 0–95 (control characters, uppercase, digits) + FNC1–4 | 1 |
//! | B | ASCII 32–127 (printable, lowercase) + FNC1–4 | 1 |
//! | C | digit pairs 00–99 + FNC1 | 2 (FNC1: 1) |
//!
//! A mapper looks at the units remaining from the cursor and either produces
//! a symbol index or reports that its set cannot represent the next unit.
//! `None` is an ordinary answer; the caller moves on to the next set.

use super::gs1::{Fnc, Unit};
use super::patterns::{FNC1, START_A, START_B, START_C};

/// One of the three Code 128 alphabets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodeSet {
    A,
    B,
    C,
}

impl CodeSet {
    /// Start symbol that opens a barcode in this set.
    pub fn start_symbol(self) -> u8 {
        match self {
            CodeSet::A => START_A,
            CodeSet::B => START_B,
            CodeSet::C => START_C,
        }
    }

    /// Map the units at the cursor using this set's alphabet.
    pub fn map(self, units: &[Unit]) -> Option<Mapped> {
        match self {
            CodeSet::A => map_a(units),
            CodeSet::B => map_b(units),
            CodeSet::C => map_c(units),
        }
    }
}

/// A successful mapping: symbol index plus how many units it covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mapped {
    pub index: u8,
    pub consumed: usize,
}

impl Mapped {
    fn single(index: u8) -> Option<Self> {
        Some(Self { index, consumed: 1 })
    }
}

/// Code set A: control characters, uppercase, digits, punctuation.
pub fn map_a(units: &[Unit]) -> Option<Mapped> {
    match *units.first()? {
        Unit::Data(b @ 32..=95) => Mapped::single(b - 32),
        Unit::Data(b @ 0..=31) => Mapped::single(b + 64),
        Unit::Data(_) => None,
        Unit::Control(Fnc::Fnc1) => Mapped::single(FNC1),
        Unit::Control(Fnc::Fnc2) => Mapped::single(97),
        Unit::Control(Fnc::Fnc3) => Mapped::single(96),
        Unit::Control(Fnc::Fnc4) => Mapped::single(101),
    }
}

/// Code set B: printable ASCII including lowercase.
pub fn map_b(units: &[Unit]) -> Option<Mapped> {
    match *units.first()? {
        Unit::Data(b @ 32..=127) => Mapped::single(b - 32),
        Unit::Data(_) => None,
        Unit::Control(Fnc::Fnc1) => Mapped::single(FNC1),
        Unit::Control(Fnc::Fnc2) => Mapped::single(97),
        Unit::Control(Fnc::Fnc3) => Mapped::single(96),
        Unit::Control(Fnc::Fnc4) => Mapped::single(100),
    }
}

/// Code set C: FNC1, or two digits packed into one symbol.
pub fn map_c(units: &[Unit]) -> Option<Mapped> {
    match units {
        [Unit::Control(Fnc::Fnc1), ..] => Mapped::single(FNC1),
        [hi, lo, ..] => {
            let index = hi.digit()? * 10 + lo.digit()?;
            Some(Mapped { index, consumed: 2 })
        }
        _ => None,
    }
}

/// Switch symbol announcing a change from `from` to `to`.
///
/// | from \ to | A | B | C |
/// |-----------|---|---|---|
/// | A | - | 100 | 99 |
/// | B | 101 | - | 99 |
/// | C | 101 | 100 | - |
pub fn switch_symbol(from: CodeSet, to: CodeSet) -> Option<u8> {
    match (from, to) {
        (CodeSet::A, CodeSet::B) => Some(100),
        (CodeSet::A, CodeSet::C) => Some(99),
        (CodeSet::B, CodeSet::A) => Some(101),
        (CodeSet::B, CodeSet::C) => Some(99),
        (CodeSet::C, CodeSet::A) => Some(101),
        (CodeSet::C, CodeSet::B) => Some(100),
        (CodeSet::A, CodeSet::A) | (CodeSet::B, CodeSet::B) | (CodeSet::C, CodeSet::C) => None,
    }
}
