//! # Code 128
//!
//! Adaptive encoder for Code 128 (and GS1-128 via the `[FNC1]` prefix).
//!
//! ## Layout
//!
//! ```text
//! ┌────────┬───────┬──────────────────────────────┬───────┬──────┬────────┐
//! │ quiet  │ start │ data / switch symbols        │ check │ stop │ quiet  │
//! │ 10     │ 11    │ 11 each                      │ 11    │ 13   │ 10     │
//! └────────┴───────┴──────────────────────────────┴───────┴──────┴────────┘
//! ```
//!
//! ## Code Set Selection
//!
//! - **Start**: set C when the input is two units long or opens with four
//!   digits, otherwise B, otherwise A.
//! - **In A/B**: a digit-run lookahead ([`heuristic`]) may jump to C;
//!   otherwise B is preferred over A.
//! - **In C**: digit pairs stay in C; anything else falls back to B, then A.
//!
//! ## Usage
//!
//! ```
//! use linecode::code128;
//!
//! let mut out = vec![false; code128::max_len("123456789012")];
//! let len = code128::encode("123456789012", &mut out);
//! // start C + six digit pairs + check, stop and quiet zones
//! assert_eq!(len, 10 + 11 + 6 * 11 + 11 + 13 + 10);
//! ```

pub mod config;
pub mod gs1;
pub mod heuristic;
pub mod mappers;
pub mod patterns;
pub mod state;

pub use config::Code128Config;
pub use gs1::{Fnc, GS1_MARKER, Unit, preprocess, preprocess_with};
pub use mappers::{CodeSet, Mapped, map_a, map_b, map_c, switch_symbol};

use crate::error::BarcodeError;
use crate::symbology::{Barcode, Symbology};
use heuristic::RunDecision;
use patterns::{STOP_WIDTH, SYMBOL_WIDTH};
use state::{EncodingState, Finished};

/// Set order tried at the start when a digit run is present, and in set C.
const C_FIRST: [CodeSet; 3] = [CodeSet::C, CodeSet::B, CodeSet::A];

/// Set order tried at the start otherwise, and in sets A and B.
const B_FIRST: [CodeSet; 2] = [CodeSet::B, CodeSet::A];

/// Encoder with the standard configuration.
pub const STANDARD: Code128 = Code128::new(Code128Config::STANDARD);

impl CodeSet {
    /// Set opened by a start symbol.
    pub fn from_start_symbol(index: u8) -> Option<Self> {
        match index {
            patterns::START_A => Some(CodeSet::A),
            patterns::START_B => Some(CodeSet::B),
            patterns::START_C => Some(CodeSet::C),
            _ => None,
        }
    }
}

/// Code 128 encoder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Code128 {
    config: Code128Config,
}

impl Code128 {
    pub const fn new(config: Code128Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Code128Config {
        &self.config
    }

    /// Buffer size for `input`, never less than what a successful encode
    /// writes.
    ///
    /// The nominal estimate allows 10% slack for switch symbols:
    ///
    /// ```text
    /// quiet + start + ceil(len × 1.1) × 11 + check + stop + quiet
    /// ```
    ///
    /// Input that flips between sets A and B on nearly every character
    /// needs a switch plus a data symbol per unit, so the result is raised
    /// to that worst case. `len` is the raw input length in bytes, which is
    /// never less than the unit count.
    pub fn max_len(&self, input: &str) -> usize {
        self.nominal_len(input).max(self.worst_case_len(input.len()))
    }

    fn nominal_len(&self, input: &str) -> usize {
        let data_symbols = (input.len() * 11).div_ceil(10);
        2 * self.config.quiet_zone
            + SYMBOL_WIDTH
            + data_symbols * SYMBOL_WIDTH
            + SYMBOL_WIDTH
            + STOP_WIDTH
    }

    /// Encode into a caller-owned buffer; returns the modules written.
    pub fn encode_into(&self, input: &str, out: &mut [bool]) -> Result<usize, BarcodeError> {
        if out.is_empty() {
            return Err(BarcodeError::BufferTooSmall {
                needed: self.max_len(input),
                available: 0,
            });
        }
        let units = self.preprocess(input)?;
        Ok(self.encode_units(&units, out)?.len)
    }

    /// Encode into an owned [`Barcode`] carrying its symbol sequence.
    pub fn encode(&self, input: &str) -> Result<Barcode, BarcodeError> {
        let units = self.preprocess(input)?;

        let mut modules = Vec::new();
        let capacity = self.worst_case_len(units.len());
        modules.try_reserve_exact(capacity)?;
        modules.resize(capacity, false);

        let finished = self.encode_units(&units, &mut modules)?;
        modules.truncate(finished.len);
        Ok(Barcode::new(
            modules,
            finished.symbols,
            Some(finished.checksum),
        ))
    }

    /// Units the encoder will see for `input`.
    pub fn preprocess(&self, input: &str) -> Result<Vec<Unit>, BarcodeError> {
        if input.is_empty() {
            return Err(BarcodeError::EmptyInput);
        }
        preprocess_with(input, self.config.gs1_prefix)
    }

    /// Exact bound: at most a switch plus a data symbol per unit.
    fn worst_case_len(&self, units: usize) -> usize {
        2 * self.config.quiet_zone + (2 * units + 2) * SYMBOL_WIDTH + STOP_WIDTH
    }

    fn encode_units(&self, units: &[Unit], out: &mut [bool]) -> Result<Finished, BarcodeError> {
        let Some(&first) = units.first() else {
            return Err(BarcodeError::EmptyInput);
        };

        let candidates: &[CodeSet] = if heuristic::prefers_start_c(units) {
            &C_FIRST
        } else {
            &B_FIRST
        };
        let (set, mapped) = first_match(candidates, units).ok_or(BarcodeError::InvalidInput {
            position: 0,
            unit: first,
        })?;

        let mut state = EncodingState::begin(out, set, self.config.quiet_zone)?;
        state.push(mapped.index)?;
        let mut cursor = mapped.consumed;

        while cursor < units.len() {
            let candidates: &[CodeSet] = match state.set() {
                CodeSet::C => &C_FIRST,
                CodeSet::A | CodeSet::B => {
                    match heuristic::evaluate(units, cursor, state.position()) {
                        RunDecision::SwitchToC { digits } => {
                            state.switch_to(CodeSet::C)?;
                            for _ in 0..digits / 2 {
                                let Some(pair) = map_c(&units[cursor..]) else {
                                    break;
                                };
                                state.push(pair.index)?;
                                cursor += pair.consumed;
                            }
                            continue;
                        }
                        RunDecision::Stay => &B_FIRST,
                    }
                }
            };

            let (set, mapped) =
                first_match(candidates, &units[cursor..]).ok_or(BarcodeError::InvalidInput {
                    position: cursor,
                    unit: units[cursor],
                })?;
            state.switch_to(set)?;
            state.push(mapped.index)?;
            cursor += mapped.consumed;
        }

        state.finish(self.config.quiet_zone)
    }
}

/// First set in `candidates` able to map the units at the cursor.
fn first_match(candidates: &[CodeSet], units: &[Unit]) -> Option<(CodeSet, Mapped)> {
    candidates
        .iter()
        .find_map(|&set| set.map(units).map(|mapped| (set, mapped)))
}

impl Symbology for Code128 {
    fn name(&self) -> &'static str {
        "Code 128"
    }

    fn max_len(&self, input: &str) -> usize {
        Code128::max_len(self, input)
    }

    fn encode_into(&self, input: &str, out: &mut [bool]) -> Result<usize, BarcodeError> {
        Code128::encode_into(self, input, out)
    }

    fn encode(&self, input: &str) -> Result<Barcode, BarcodeError> {
        Code128::encode(self, input)
    }
}

/// [`Code128::max_len`] with the standard configuration.
pub fn max_len(input: &str) -> usize {
    STANDARD.max_len(input)
}

/// Encode with the standard configuration. Returns 0 on any failure; a zero
/// length means the buffer contents are unusable.
pub fn encode(input: &str, out: &mut [bool]) -> usize {
    STANDARD.encode_into(input, out).unwrap_or(0)
}

/// [`encode`] with the failure reason.
pub fn try_encode(input: &str, out: &mut [bool]) -> Result<usize, BarcodeError> {
    STANDARD.encode_into(input, out)
}

/// Owned encode with the standard configuration.
pub fn encode_to_barcode(input: &str) -> Result<Barcode, BarcodeError> {
    STANDARD.encode(input)
}
