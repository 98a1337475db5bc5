//! DHCPv6 Unique Identifier (DUID) decoding.
//!
//! This crate turns the wire form of a DUID (RFC 8415 section 11, RFC 6355)
//! into a typed [`Duid`] value and back. Decoding follows a layered
//! structure (layout/reader/parser) so that byte offsets, bounds-checked
//! access and domain decoding stay separate. Parsing is pure; the CLI owns
//! all I/O and process termination.
//!
//! Invariants:
//! - Accepted inputs are 1..=130 bytes and start with a 2-byte type code.
//! - Registered types (LLT, EN, LL, UUID) must carry their fixed fields;
//!   DUID-UUID is exactly 18 bytes.
//! - Unregistered type codes decode to [`Duid::Unknown`] with their payload
//!   kept verbatim; [`OpaqueDuid`] cannot hold a registered code, so every
//!   constructible value encodes and decodes back to itself.
//!
//! # Examples
//! ```
//! use duid_core::{Duid, DuidReport};
//!
//! let duid: Duid = "00:01:00:01:2c:3d:4e:5f:aa:bb:cc:dd:ee:ff".parse()?;
//! assert_eq!(
//!     duid.to_string(),
//!     "DUID-LLT{HWType=Ethernet HWAddr=aa:bb:cc:dd:ee:ff Time=742215263}"
//! );
//!
//! let report = DuidReport::from_duid(&duid);
//! assert_eq!(report.duid_type, 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod duid;
pub mod hwtype;
mod input;
mod report;

pub use duid::{Duid, DuidError, DuidType, OpaqueDuid, format_link_layer, parse_duid};
pub use input::{InputError, ParseDuidError, parse_hex_input};
pub use report::{DuidReport, REPORT_VERSION, ToolInfo, llt_timestamp};

/// Largest accepted DUID, in bytes.
pub const MAX_DUID_LEN: usize = duid::layout::MAX_LEN;
