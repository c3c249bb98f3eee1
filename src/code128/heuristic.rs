//! # Digit-Run Lookahead
//!
//! Decides when a barcode running in set A or B should jump into set C to
//! pack digits in pairs. This is the historical rule shipped by thermal
//! printer firmware, not a length-optimal one, and changing it changes the
//! bars printed for mixed letter/digit input:
//!
//! ```text
//! "abc000000"   → B a b c | C 00 00 00
//! "abc0000001"  → B a b c 0 | C 00 00 01
//! "123A123A"    → B 1 2 3 A 1 2 3 A        (runs of 3 never switch)
//! ```

use super::gs1::{Fnc, Unit};

/// Longest run looked at in the middle of the data.
pub const MID_RUN_WINDOW: isize = 6;

/// Run length examined when choosing the start code.
pub const START_RUN_WINDOW: isize = 4;

/// Count contiguous ASCII digits starting at `start`, scanning while the
/// offset is below `limit`.
///
/// A leading FNC1 occupies one slot without counting and extends the window
/// by one. A `limit` of zero or less scans nothing. Units past the end stop
/// the scan.
pub fn count_digits(units: &[Unit], start: usize, limit: isize) -> usize {
    let mut offset = 0usize;
    let mut limit = limit;
    if units.get(start) == Some(&Unit::Control(Fnc::Fnc1)) {
        offset = 1;
        limit += 1;
    }

    let mut digits = 0;
    while (offset as isize) < limit {
        match units.get(start + offset) {
            Some(unit) if unit.is_digit() => digits += 1,
            _ => break,
        }
        offset += 1;
    }
    digits
}

/// Outcome of the mid-data lookahead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunDecision {
    /// Stay in the current set.
    Stay,
    /// Switch to set C and pack `digits / 2` pairs.
    SwitchToC { digits: usize },
}

/// Evaluate the lookahead at `cursor`.
///
/// `position` is the checksum weight the next symbol would get. The secondary
/// probe at `cursor + 1` has a window of `(len - position - 2) rem 2`, so it
/// can only succeed when that value is exactly 1.
pub fn evaluate(units: &[Unit], cursor: usize, position: usize) -> RunDecision {
    let digits = count_digits(units, cursor, MID_RUN_WINDOW);
    if digits <= 3 {
        return RunDecision::Stay;
    }

    let window = (units.len() as isize - position as isize - 2) % 2;
    if count_digits(units, cursor + 1, window) != 0 {
        RunDecision::SwitchToC { digits }
    } else {
        RunDecision::Stay
    }
}

/// Whether the barcode should open in set C.
///
/// True for exactly two units, or more than three units led by four digits.
pub fn prefers_start_c(units: &[Unit]) -> bool {
    units.len() == 2 || (units.len() > 3 && count_digits(units, 0, START_RUN_WINDOW) > 3)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn units(s: &str) -> Vec<Unit> {
        s.bytes().map(Unit::Data).collect()
    }

    fn gs1(s: &str) -> Vec<Unit> {
        std::iter::once(Unit::Control(Fnc::Fnc1))
            .chain(s.bytes().map(Unit::Data))
            .collect()
    }

    #[test]
    fn test_count_digits_window() {
        let u = units("12345678");
        assert_eq!(count_digits(&u, 0, 6), 6);
        assert_eq!(count_digits(&u, 0, 4), 4);
        assert_eq!(count_digits(&u, 5, 6), 3);
        assert_eq!(count_digits(&u, 8, 6), 0);
        assert_eq!(count_digits(&u, 20, 6), 0);
    }

    #[test]
    fn test_count_digits_stops_at_non_digit() {
        assert_eq!(count_digits(&units("12a456"), 0, 6), 2);
        assert_eq!(count_digits(&units("a123"), 0, 6), 0);
    }

    #[test]
    fn test_count_digits_non_positive_limit() {
        let u = units("1234");
        assert_eq!(count_digits(&u, 0, 0), 0);
        assert_eq!(count_digits(&u, 0, -1), 0);
        assert_eq!(count_digits(&u, 0, 1), 1);
    }

    #[test]
    fn test_count_digits_skips_leading_fnc1() {
        let u = gs1("1234567");
        assert_eq!(count_digits(&u, 0, 6), 6);
        assert_eq!(count_digits(&u, 0, 4), 4);
        // Negative window grows to zero: nothing scanned
        assert_eq!(count_digits(&u, 0, -1), 0);
        // Zero window grows to one slot, which the FNC1 itself occupies
        assert_eq!(count_digits(&u, 0, 0), 0);
        assert_eq!(count_digits(&u, 0, 1), 1);
    }

    #[test]
    fn test_short_runs_never_switch() {
        let u = units("a123b");
        assert_eq!(evaluate(&u, 1, 2), RunDecision::Stay);
    }

    #[test]
    fn test_trailing_six_digits_switch() {
        // "abc000000": start B + 'a' leaves position 2; at cursor 3 the
        // position is 4 and the window is (9 - 4 - 2) % 2 = 1
        let u = units("abc000000");
        assert_eq!(evaluate(&u, 3, 4), RunDecision::SwitchToC { digits: 6 });
    }

    #[test]
    fn test_odd_parity_defers_switch() {
        // "abc0000001": window at cursor 3 is (10 - 4 - 2) % 2 = 0
        let u = units("abc0000001");
        assert_eq!(evaluate(&u, 3, 4), RunDecision::Stay);
        // One digit later the window is (10 - 5 - 2) % 2 = 1
        assert_eq!(evaluate(&u, 4, 5), RunDecision::SwitchToC { digits: 6 });
    }

    #[test]
    fn test_negative_window_never_switches() {
        let u = units("a1234");
        assert_eq!(evaluate(&u, 1, 10), RunDecision::Stay);
    }

    #[test]
    fn test_prefers_start_c() {
        assert!(prefers_start_c(&units("12")));
        assert!(prefers_start_c(&units("1A")));
        assert!(prefers_start_c(&units("1234")));
        assert!(prefers_start_c(&units("1234AB")));
        assert!(!prefers_start_c(&units("123")));
        assert!(!prefers_start_c(&units("123A")));
        assert!(!prefers_start_c(&units("A1234")));
        assert!(!prefers_start_c(&units("1")));
        assert!(prefers_start_c(&gs1("1234")));
        assert!(!prefers_start_c(&gs1("123")));
    }
}
