//! # Symbology Contract
//!
//! Every linear symbology exposes the same two operations to a printer or
//! display driver:
//!
//! 1. [`Symbology::max_len`]: how many modules to allocate
//! 2. [`Symbology::encode_into`]: fill a caller-owned module buffer
//!
//! A module is one `bool`, `true` = bar, `false` = space. Packing modules
//! into printer bytes is left to the driver.
//!
//! ## Example
//!
//! ```
//! use linecode::{Code128, Symbology};
//!
//! let encoder = Code128::default();
//! let mut out = vec![false; encoder.max_len("Hello")];
//! let len = encoder.encode_into("Hello", &mut out).unwrap();
//! let bars = &out[..len];
//! assert!(bars.iter().any(|&m| m));
//! ```

use serde::Serialize;

use crate::error::BarcodeError;

/// A linear barcode encoder.
pub trait Symbology {
    /// Human-readable symbology name
    fn name(&self) -> &'static str;

    /// Upper bound on the modules [`encode_into`](Self::encode_into) writes
    /// for any input it accepts.
    fn max_len(&self, input: &str) -> usize;

    /// Encode `input` into `out`, returning the number of modules written.
    ///
    /// Contents of `out` are unspecified after an error.
    fn encode_into(&self, input: &str, out: &mut [bool]) -> Result<usize, BarcodeError>;

    /// Like [`encode_into`](Self::encode_into), with failure reported as 0.
    fn encode_len(&self, input: &str, out: &mut [bool]) -> usize {
        self.encode_into(input, out).unwrap_or(0)
    }

    /// Encode into a freshly allocated [`Barcode`].
    fn encode(&self, input: &str) -> Result<Barcode, BarcodeError> {
        let capacity = self.max_len(input);
        let mut modules = Vec::new();
        modules.try_reserve_exact(capacity)?;
        modules.resize(capacity, false);
        let len = self.encode_into(input, &mut modules)?;
        modules.truncate(len);
        Ok(Barcode::from_modules(modules))
    }
}

/// An encoded barcode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Barcode {
    modules: Vec<bool>,
    symbols: Vec<u8>,
    checksum: Option<u8>,
}

impl Barcode {
    /// Barcode with its symbol sequence and check value.
    pub fn new(modules: Vec<bool>, symbols: Vec<u8>, checksum: Option<u8>) -> Self {
        Self {
            modules,
            symbols,
            checksum,
        }
    }

    /// Barcode known only by its modules.
    pub fn from_modules(modules: Vec<bool>) -> Self {
        Self::new(modules, Vec::new(), None)
    }

    /// Modules in print order, quiet zones included.
    pub fn modules(&self) -> &[bool] {
        &self.modules
    }

    /// Symbol values in print order. Empty when the encoder does not
    /// report them.
    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }

    /// Computed check value, if the symbology has one.
    pub fn checksum(&self) -> Option<u8> {
        self.checksum
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Widen every module to `module_width` dots.
    ///
    /// A width of 0 is treated as 1.
    pub fn scaled(&self, module_width: usize) -> Vec<bool> {
        let scale = module_width.max(1);
        self.modules
            .iter()
            .flat_map(|&module| std::iter::repeat_n(module, scale))
            .collect()
    }

    pub fn into_modules(self) -> Vec<bool> {
        self.modules
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Encoder that writes each input byte's low bit as one module.
    struct LowBit;

    impl Symbology for LowBit {
        fn name(&self) -> &'static str {
            "low-bit"
        }

        fn max_len(&self, input: &str) -> usize {
            input.len()
        }

        fn encode_into(&self, input: &str, out: &mut [bool]) -> Result<usize, BarcodeError> {
            if input.is_empty() {
                return Err(BarcodeError::EmptyInput);
            }
            for (slot, b) in out.iter_mut().zip(input.bytes()) {
                *slot = b & 1 == 1;
            }
            Ok(input.len())
        }
    }

    #[test]
    fn test_provided_encode() {
        let barcode = LowBit.encode("ab").unwrap();
        assert_eq!(barcode.modules(), &[true, false]);
        assert!(barcode.symbols().is_empty());
        assert_eq!(barcode.checksum(), None);
    }

    #[test]
    fn test_encode_len_reports_zero_on_failure() {
        let mut out = [false; 4];
        assert_eq!(LowBit.encode_len("", &mut out), 0);
        assert_eq!(LowBit.encode_len("ac", &mut out), 2);
    }

    #[test]
    fn test_scaled() {
        let barcode = Barcode::from_modules(vec![true, false, true]);
        assert_eq!(
            barcode.scaled(2),
            vec![true, true, false, false, true, true]
        );
        assert_eq!(barcode.scaled(0), vec![true, false, true]);
    }

    #[test]
    fn test_barcode_serializes() {
        let barcode = Barcode::new(vec![true, false], vec![104, 7], Some(7));
        assert_eq!(
            serde_json::to_string(&barcode).unwrap(),
            r#"{"modules":[true,false],"symbols":[104,7],"checksum":7}"#
        );
        assert_eq!(
            serde_json::to_string(&LowBit.encode("a").unwrap()).unwrap(),
            r#"{"modules":[true],"symbols":[],"checksum":null}"#
        );
    }
}
