//! # Encoding State and Bit Emitter
//!
//! [`EncodingState`] lives for exactly one encode call. It owns the write
//! cursor into the caller's module buffer, the active code set and the
//! weighted checksum:
//!
//! ```text
//! checksum = (start + Σ symbol[i] × i) mod 103      i = 1, 2, 3, ...
//! ```
//!
//! Switch symbols take a weight like any data symbol. The start symbol is
//! weighted 1 and shares that weight with the first data symbol.

use super::mappers::{CodeSet, switch_symbol};
use super::patterns::{self, STOP, Symbol};
use crate::error::BarcodeError;

/// Modulus of the Code 128 check symbol.
pub const CHECKSUM_MODULUS: usize = 103;

/// Write `symbol` into `out` at `cursor`, most significant module first.
///
/// Returns the cursor after the symbol. Never writes past `out`.
pub fn emit(symbol: Symbol, out: &mut [bool], cursor: usize) -> Result<usize, BarcodeError> {
    let end = cursor + symbol.width;
    let available = out.len();
    let slots = out.get_mut(cursor..end).ok_or(BarcodeError::BufferTooSmall {
        needed: end,
        available,
    })?;
    for (slot, module) in slots.iter_mut().zip(symbol.modules()) {
        *slot = module;
    }
    Ok(end)
}

/// Write `width` spaces at `cursor`.
pub fn emit_quiet_zone(out: &mut [bool], cursor: usize, width: usize) -> Result<usize, BarcodeError> {
    let end = cursor + width;
    let available = out.len();
    out.get_mut(cursor..end)
        .ok_or(BarcodeError::BufferTooSmall {
            needed: end,
            available,
        })?
        .fill(false);
    Ok(end)
}

/// Result of a finished encode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finished {
    /// Modules written, quiet zones included.
    pub len: usize,
    /// Every symbol in print order: start, data and switches, check, stop.
    pub symbols: Vec<u8>,
    /// Check symbol value.
    pub checksum: u8,
}

/// Mutable state of one encode call.
#[derive(Debug)]
pub struct EncodingState<'a> {
    out: &'a mut [bool],
    cursor: usize,
    set: CodeSet,
    checksum: usize,
    position: usize,
    symbols: Vec<u8>,
}

impl<'a> EncodingState<'a> {
    /// Write the leading quiet zone and the start symbol for `set`.
    pub fn begin(out: &'a mut [bool], set: CodeSet, quiet_zone: usize) -> Result<Self, BarcodeError> {
        let cursor = emit_quiet_zone(out, 0, quiet_zone)?;
        let mut state = Self {
            out,
            cursor,
            set,
            checksum: 0,
            position: 1,
            symbols: Vec::new(),
        };
        let start = set.start_symbol();
        state.write(start)?;
        state.checksum = start as usize;
        Ok(state)
    }

    /// Active code set.
    pub fn set(&self) -> CodeSet {
        self.set
    }

    /// Weight the next symbol will receive.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Emit a data (or switch) symbol at the current weight.
    pub fn push(&mut self, index: u8) -> Result<(), BarcodeError> {
        self.write(index)?;
        self.checksum = (self.checksum + index as usize * self.position) % CHECKSUM_MODULUS;
        self.position += 1;
        Ok(())
    }

    /// Change the active set, emitting the switch symbol when it differs.
    pub fn switch_to(&mut self, to: CodeSet) -> Result<(), BarcodeError> {
        if let Some(index) = switch_symbol(self.set, to) {
            self.push(index)?;
            self.set = to;
        }
        Ok(())
    }

    /// Emit check and stop symbols plus the trailing quiet zone.
    pub fn finish(mut self, quiet_zone: usize) -> Result<Finished, BarcodeError> {
        let checksum = (self.checksum % CHECKSUM_MODULUS) as u8;
        self.write(checksum)?;
        self.write(STOP)?;
        let len = emit_quiet_zone(self.out, self.cursor, quiet_zone)?;
        Ok(Finished {
            len,
            symbols: self.symbols,
            checksum,
        })
    }

    fn write(&mut self, index: u8) -> Result<(), BarcodeError> {
        self.cursor = emit(patterns::symbol(index), self.out, self.cursor)?;
        self.symbols.push(index);
        Ok(())
    }
}
