//! This library decodes the text payload of AAMVA driver license PDF417
//! barcodes into named identity fields.
//!
//! The optical decoding itself is left to a barcode reader: the input here
//! is the text it recovered.
//!
//! ```
//! let fields = aamva_text::parse("@\n\x1e\rANSI 636014\nDACJOHN\nDCSSMITH\nJR\r");
//! assert_eq!(fields.get_by_name("firstName"), Some("JOHN"));
//! assert_eq!(fields.get_by_name("surnames"), Some("SMITH JR"));
//! ```
pub mod aamva;

pub use aamva::{parse, parse_bytes, Field, LicenseScan, ParsedFields, ScanSource};
