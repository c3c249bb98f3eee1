//! # Code 128 Symbol Patterns
//!
//! Every Code 128 symbol is six alternating bars and spaces spanning 11
//! modules (the stop symbol adds a 2-module terminating bar, 13 modules).
//! Patterns are stored as integers read most-significant bit first, 1 = bar.
//!
//! | Index | Meaning |
//! |-------|---------|
//! | 0–95 | Data values (meaning depends on code set) |
//! | 96–102 | FNC3, FNC2, shift/Code C, Code C/B, Code B/FNC4, Code A/FNC4, FNC1 |
//! | 103–105 | Start A, Start B, Start C |
//! | 106 | Stop |
//!
//! ```text
//! index 104 (Start B) = 0x690 = 11010010000
//!                               ██ █  █
//! ```

/// Width of every symbol except stop.
pub const SYMBOL_WIDTH: usize = 11;

/// Width of the stop symbol.
pub const STOP_WIDTH: usize = 13;

pub const FNC1: u8 = 102;
pub const START_A: u8 = 103;
pub const START_B: u8 = 104;
pub const START_C: u8 = 105;
pub const STOP: u8 = 106;

/// Number of entries in the table.
pub const SYMBOL_COUNT: usize = 107;

static PATTERNS: [u16; SYMBOL_COUNT] = [
    0x6CC, 0x66C, 0x666, 0x498, 0x48C, 0x44C, 0x4C8, 0x4C4, // 0–7
    0x464, 0x648, 0x644, 0x624, 0x59C, 0x4DC, 0x4CE, 0x5CC, // 8–15
    0x4EC, 0x4E6, 0x672, 0x65C, 0x64E, 0x6E4, 0x674, 0x76E, // 16–23
    0x74C, 0x72C, 0x726, 0x764, 0x734, 0x732, 0x6D8, 0x6C6, // 24–31
    0x636, 0x518, 0x458, 0x446, 0x588, 0x468, 0x462, 0x688, // 32–39
    0x628, 0x622, 0x5B8, 0x58E, 0x46E, 0x5D8, 0x5C6, 0x476, // 40–47
    0x776, 0x68E, 0x62E, 0x6E8, 0x6E2, 0x6EE, 0x758, 0x746, // 48–55
    0x716, 0x768, 0x762, 0x71A, 0x77A, 0x642, 0x78A, 0x530, // 56–63
    0x50C, 0x4B0, 0x486, 0x42C, 0x426, 0x590, 0x584, 0x4D0, // 64–71
    0x4C2, 0x434, 0x432, 0x612, 0x650, 0x7BA, 0x614, 0x47A, // 72–79
    0x53C, 0x4BC, 0x49E, 0x5E4, 0x4F4, 0x4F2, 0x7A4, 0x794, // 80–87
    0x792, 0x6DE, 0x6F6, 0x7B6, 0x578, 0x51E, 0x45E, 0x5E8, // 88–95
    // Function codes 96–102
    0x5E2, 0x7A8, 0x7A2, 0x5DE, 0x5EE, 0x75E, 0x7AE,
    // Start A/B/C
    0x684, 0x690, 0x69C,
    // Stop
    0x18EB,
];

/// A resolved symbol: its bar pattern and module count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symbol {
    pub index: u8,
    pub pattern: u16,
    pub width: usize,
}

impl Symbol {
    /// Iterate the modules of this symbol, most significant bit first.
    pub fn modules(self) -> impl Iterator<Item = bool> {
        (0..self.width).rev().map(move |bit| self.pattern & (1 << bit) != 0)
    }
}

/// Symbol for an index produced by a mapper, the switch table or one of
/// the constants above.
///
/// Panics past index 106; use [`lookup`] for untrusted indices.
#[inline]
pub(crate) fn symbol(index: u8) -> Symbol {
    let width = if index == STOP { STOP_WIDTH } else { SYMBOL_WIDTH };
    Symbol {
        index,
        pattern: PATTERNS[index as usize],
        width,
    }
}

/// Look up a symbol by index. `None` past index 106.
#[inline]
pub fn lookup(index: u8) -> Option<Symbol> {
    ((index as usize) < SYMBOL_COUNT).then(|| symbol(index))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bits(symbol: Symbol) -> String {
        symbol.modules().map(|m| if m { '1' } else { '0' }).collect()
    }

    #[test]
    fn test_table_bounds() {
        assert!(lookup(0).is_some());
        assert!(lookup(STOP).is_some());
        assert!(lookup(107).is_none());
        assert!(lookup(u8::MAX).is_none());
    }

    #[test]
    fn test_widths() {
        for index in 0..STOP {
            assert_eq!(lookup(index).unwrap().width, SYMBOL_WIDTH, "index {}", index);
        }
        assert_eq!(lookup(STOP).unwrap().width, STOP_WIDTH);
    }

    #[test]
    fn test_start_and_stop_bits() {
        assert_eq!(bits(lookup(START_A).unwrap()), "11010000100");
        assert_eq!(bits(lookup(START_B).unwrap()), "11010010000");
        assert_eq!(bits(lookup(START_C).unwrap()), "11010011100");
        assert_eq!(bits(lookup(STOP).unwrap()), "1100011101011");
    }

    #[test]
    fn test_every_symbol_is_three_bars_three_spaces() {
        // Each 11-module symbol starts with a bar, ends with a space and has
        // exactly three bar runs.
        for index in 0..STOP {
            let s = bits(lookup(index).unwrap());
            assert!(s.starts_with('1') && s.ends_with('0'), "index {}: {}", index, s);
            let bar_runs = s.split('0').filter(|run| !run.is_empty()).count();
            assert_eq!(bar_runs, 3, "index {}: {}", index, s);
        }
    }

    #[test]
    fn test_patterns_unique() {
        let mut seen = std::collections::HashSet::new();
        for index in 0..=STOP {
            assert!(seen.insert(lookup(index).unwrap().pattern), "duplicate at {}", index);
        }
    }
}
