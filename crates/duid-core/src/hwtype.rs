//! IANA ARP hardware type codes as carried in DUID-LLT and DUID-LL.

use std::fmt;

pub const ETHERNET: u16 = 1;

const NAMES: &[(u16, &str)] = &[
    (ETHERNET, "Ethernet"),
    (6, "IEEE 802"),
    (7, "ARCNET"),
    (15, "Frame Relay"),
    (16, "ATM"),
    (18, "Fibre Channel"),
    (20, "Serial Line"),
    (24, "IEEE 1394"),
    (27, "EUI-64"),
    (32, "InfiniBand"),
];

/// Registered name of a hardware type, if it is one we know.
///
/// # Examples
/// ```
/// use duid_core::hwtype::hardware_type_name;
///
/// assert_eq!(hardware_type_name(1), Some("Ethernet"));
/// assert_eq!(hardware_type_name(0xfffe), None);
/// ```
pub fn hardware_type_name(code: u16) -> Option<&'static str> {
    NAMES
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, name)| *name)
}

/// Display adapter printing the registered name or `Unknown(<code>)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HardwareType(pub u16);

impl fmt::Display for HardwareType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match hardware_type_name(self.0) {
            Some(name) => f.write_str(name),
            None => write!(f, "Unknown({})", self.0),
        }
    }
}
