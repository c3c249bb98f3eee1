//! # Linecode - Linear Barcode Encoder
//!
//! Linecode turns text into the bar/space modules of a linear barcode, ready
//! for a printer or display driver to rasterise. It provides:
//!
//! - **Code 128**: adaptive A/B/C code set switching with digit-pair packing
//! - **GS1-128**: `[FNC1]` literal prefix handling
//! - **Symbology contract**: the `max_len` + `encode_into` pair shared by
//!   linear encoders
//!
//! ## Quick Start
//!
//! ```
//! use linecode::code128;
//!
//! let input = "PJJ123C";
//!
//! // Size the module buffer, then encode into it
//! let mut modules = vec![false; code128::max_len(input)];
//! let len = code128::encode(input, &mut modules);
//! assert!(len > 0);
//!
//! // true = bar, false = space
//! let bars = &modules[..len];
//! assert!(!bars[0] && bars[10]);
//! ```
//!
//! Owned results carry the symbol sequence and check value:
//!
//! ```
//! use linecode::code128;
//!
//! let barcode = code128::encode_to_barcode("PJJ123C")?;
//! assert_eq!(barcode.checksum(), Some(55));
//! # Ok::<(), linecode::BarcodeError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`code128`] | Code 128 / GS1-128 encoder |
//! | [`symbology`] | Encoder contract and [`Barcode`] value |
//! | [`error`] | Error types |

pub mod code128;
pub mod error;
pub mod symbology;

// Re-exports for convenience
pub use code128::{Code128, Code128Config};
pub use error::{BarcodeError, ErrorKind};
pub use symbology::{Barcode, Symbology};
