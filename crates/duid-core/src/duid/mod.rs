//! DUID decoding and encoding (RFC 8415 section 11, RFC 6355).
//!
//! The parser validates overall bounds (1..=130 bytes), reads the 2-byte
//! type code, then decodes the fixed fields of the registered layouts
//! (LLT, EN, LL, UUID). Unregistered type codes are kept as opaque data.
//!
//! Byte offsets live in `layout`, bounds-checked reads in `reader`; the
//! parser itself never indexes the payload directly.

pub mod encode;
pub mod error;
pub mod layout;
pub mod model;
pub mod parser;
pub mod reader;

pub use error::DuidError;
pub use model::{Duid, DuidType, OpaqueDuid, format_link_layer};
pub use parser::parse_duid;
