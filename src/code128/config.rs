//! # Encoder Configuration
//!
//! ```
//! use linecode::code128::{Code128, Code128Config};
//!
//! let config = Code128Config {
//!     quiet_zone: 20,
//!     ..Code128Config::STANDARD
//! };
//! let encoder = Code128::new(config);
//! assert_eq!(encoder.max_len("ABC"), 20 + (2 * 3 + 2) * 11 + 13 + 20);
//! ```

use serde::{Deserialize, Serialize};

/// Layout options for [`Code128`](super::Code128).
///
/// - **quiet_zone**: blank modules written before and after the symbols
/// - **gs1_prefix**: treat a leading `[FNC1]` literal as GS1-128 data
///
/// Deserialises from partial documents; missing fields take the
/// [`STANDARD`](Self::STANDARD) value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Code128Config {
    /// Quiet zone width in modules, on each side
    pub quiet_zone: usize,

    /// Recognise the `[FNC1]` literal prefix
    pub gs1_prefix: bool,
}

impl Code128Config {
    /// 10-module quiet zones, GS1 prefix detection on.
    pub const STANDARD: Self = Self {
        quiet_zone: 10,
        gs1_prefix: true,
    };
}

impl Default for Code128Config {
    fn default() -> Self {
        Self::STANDARD
    }
}
