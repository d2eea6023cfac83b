//! AAMVA DL/ID barcode text.
//!
//! Text-oriented PDF417 readers return the barcode payload as a string of
//! subfile lines, each starting with a three letter element code:
//!
//! ```text
//! @
//!
//! ANSI 636014080002DL00410288ZF03190008DLDAQD12345678901234
//! DCSSMITH
//! DACJOHN
//! ...
//! ```
//!
//! [`parse`] turns such a payload into [`ParsedFields`].
//!
//! See: <https://www.aamva.org/assets/best-practices,-guides,-standards,-manuals,-whitepapers/aamva-dl-id-card-design-standard-(2020)>
mod macros;

pub(crate) use macros::*;

pub mod field;
pub use field::{Field, UnknownElementCode, UnknownFieldName, CRITICAL_FIELDS};

pub mod framing;

mod parsed;
pub use parsed::ParsedFields;

mod parser;
pub use parser::{extract_embedded_code, parse, parse_bytes};

pub mod scan;
pub use scan::{InvalidScanSource, LicenseScan, ScanSource};
