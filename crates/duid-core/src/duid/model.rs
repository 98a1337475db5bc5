use std::fmt;

use uuid::Uuid;

use super::error::DuidError;
use super::layout;
use crate::hwtype::HardwareType;

/// DUID type code (first two bytes, big-endian).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DuidType {
    Llt,
    En,
    Ll,
    Uuid,
    Unknown(u16),
}

impl DuidType {
    pub fn code(self) -> u16 {
        match self {
            DuidType::Llt => layout::TYPE_LLT,
            DuidType::En => layout::TYPE_EN,
            DuidType::Ll => layout::TYPE_LL,
            DuidType::Uuid => layout::TYPE_UUID,
            DuidType::Unknown(code) => code,
        }
    }

    /// Short label, e.g. `DUID-LLT`; unregistered codes map to `Unknown`.
    pub fn name(self) -> &'static str {
        match self {
            DuidType::Llt => "DUID-LLT",
            DuidType::En => "DUID-EN",
            DuidType::Ll => "DUID-LL",
            DuidType::Uuid => "DUID-UUID",
            DuidType::Unknown(_) => "Unknown",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            DuidType::Llt => "Link-layer address plus time",
            DuidType::En => "Vendor-assigned unique ID based on Enterprise Number",
            DuidType::Ll => "Link-layer address",
            DuidType::Uuid => "Universally Unique IDentifier",
            DuidType::Unknown(_) => "Unknown DUID type",
        }
    }
}

impl From<u16> for DuidType {
    fn from(code: u16) -> Self {
        match code {
            layout::TYPE_LLT => DuidType::Llt,
            layout::TYPE_EN => DuidType::En,
            layout::TYPE_LL => DuidType::Ll,
            layout::TYPE_UUID => DuidType::Uuid,
            other => DuidType::Unknown(other),
        }
    }
}

/// A decoded DHCP Unique Identifier.
///
/// Values are built by [`crate::parse_duid`], directly from their fields, or
/// through [`Duid::opaque`] for unregistered type codes, and print in a
/// compact canonical form.
///
/// # Examples
/// ```
/// use duid_core::Duid;
///
/// let duid = Duid::Ll {
///     hardware_type: 1,
///     link_layer_address: vec![0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff],
/// };
/// assert_eq!(
///     duid.to_string(),
///     "DUID-LL{HWType=Ethernet HWAddr=aa:bb:cc:dd:ee:ff}"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Duid {
    Llt {
        hardware_type: u16,
        /// Seconds since 2000-01-01T00:00:00Z.
        time: u32,
        link_layer_address: Vec<u8>,
    },
    En {
        enterprise_number: u32,
        identifier: Vec<u8>,
    },
    Ll {
        hardware_type: u16,
        link_layer_address: Vec<u8>,
    },
    Uuid {
        uuid: Uuid,
    },
    /// Any type code without a registered layout; payload kept verbatim.
    Unknown(OpaqueDuid),
}

/// Payload of a DUID whose type code has no registered layout.
///
/// The type code is never 1..=4, so encoding and decoding again always
/// yields [`Duid::Unknown`].
///
/// # Examples
/// ```
/// use duid_core::{DuidError, OpaqueDuid};
///
/// let opaque = OpaqueDuid::new(5, vec![0xde, 0xad])?;
/// assert_eq!(opaque.duid_type(), 5);
/// assert!(matches!(
///     OpaqueDuid::new(3, vec![]),
///     Err(DuidError::RegisteredType { duid_type: 3 })
/// ));
/// # Ok::<(), DuidError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OpaqueDuid {
    duid_type: u16,
    data: Vec<u8>,
}

impl OpaqueDuid {
    pub fn new(duid_type: u16, data: Vec<u8>) -> Result<Self, DuidError> {
        if let DuidType::Unknown(code) = DuidType::from(duid_type) {
            Ok(Self {
                duid_type: code,
                data,
            })
        } else {
            Err(DuidError::RegisteredType { duid_type })
        }
    }

    pub fn duid_type(&self) -> u16 {
        self.duid_type
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

impl Duid {
    /// Build [`Duid::Unknown`]; fails for registered type codes.
    pub fn opaque(duid_type: u16, data: Vec<u8>) -> Result<Self, DuidError> {
        OpaqueDuid::new(duid_type, data).map(Duid::Unknown)
    }

    pub fn duid_type(&self) -> DuidType {
        match self {
            Duid::Llt { .. } => DuidType::Llt,
            Duid::En { .. } => DuidType::En,
            Duid::Ll { .. } => DuidType::Ll,
            Duid::Uuid { .. } => DuidType::Uuid,
            Duid::Unknown(opaque) => DuidType::Unknown(opaque.duid_type),
        }
    }

    pub fn hardware_type(&self) -> Option<u16> {
        match self {
            Duid::Llt { hardware_type, .. } | Duid::Ll { hardware_type, .. } => {
                Some(*hardware_type)
            }
            _ => None,
        }
    }

    pub fn link_layer_address(&self) -> Option<&[u8]> {
        match self {
            Duid::Llt {
                link_layer_address, ..
            }
            | Duid::Ll {
                link_layer_address, ..
            } => Some(link_layer_address),
            _ => None,
        }
    }
}

impl fmt::Display for Duid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Duid::Llt {
                hardware_type,
                time,
                link_layer_address,
            } => write!(
                f,
                "DUID-LLT{{HWType={} HWAddr={} Time={}}}",
                HardwareType(*hardware_type),
                format_link_layer(link_layer_address),
                time
            ),
            Duid::En {
                enterprise_number,
                identifier,
            } => write!(
                f,
                "DUID-EN{{EnterpriseNumber={} EnterpriseIdentifier={}}}",
                enterprise_number,
                hex::encode(identifier)
            ),
            Duid::Ll {
                hardware_type,
                link_layer_address,
            } => write!(
                f,
                "DUID-LL{{HWType={} HWAddr={}}}",
                HardwareType(*hardware_type),
                format_link_layer(link_layer_address)
            ),
            Duid::Uuid { uuid } => write!(f, "DUID-UUID{{UUID={}}}", uuid.hyphenated()),
            Duid::Unknown(opaque) => write!(
                f,
                "DUID-Opaque{{Type={} Data={}}}",
                opaque.duid_type,
                hex::encode(&opaque.data)
            ),
        }
    }
}

/// Colon-separated lower-case octets, e.g. `aa:bb:cc`.
pub fn format_link_layer(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect::<Vec<_>>()
        .join(":")
}

#[cfg(test)]
mod tests {
    use super::{Duid, DuidType, OpaqueDuid, format_link_layer};
    use crate::duid::error::DuidError;
    use uuid::Uuid;

    #[test]
    fn duid_type_from_code() {
        assert_eq!(DuidType::from(1), DuidType::Llt);
        assert_eq!(DuidType::from(4), DuidType::Uuid);
        assert_eq!(DuidType::from(0), DuidType::Unknown(0));
        assert_eq!(DuidType::from(0x1234).code(), 0x1234);
    }

    #[test]
    fn display_llt() {
        let duid = Duid::Llt {
            hardware_type: 1,
            time: 0x2c3d_4e5f,
            link_layer_address: vec![0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff],
        };
        assert_eq!(
            duid.to_string(),
            "DUID-LLT{HWType=Ethernet HWAddr=aa:bb:cc:dd:ee:ff Time=742215263}"
        );
    }

    #[test]
    fn display_en_and_opaque() {
        let en = Duid::En {
            enterprise_number: 9,
            identifier: vec![1, 2, 3],
        };
        assert_eq!(
            en.to_string(),
            "DUID-EN{EnterpriseNumber=9 EnterpriseIdentifier=010203}"
        );

        let opaque = Duid::opaque(5, vec![0xde, 0xad]).unwrap();
        assert_eq!(opaque.to_string(), "DUID-Opaque{Type=5 Data=dead}");
    }

    #[test]
    fn opaque_rejects_registered_codes() {
        for code in 1..=4 {
            assert_eq!(
                OpaqueDuid::new(code, vec![0, 1, 0xaa]),
                Err(DuidError::RegisteredType { duid_type: code })
            );
        }
        let zero = Duid::opaque(0, vec![]).unwrap();
        assert_eq!(zero.duid_type(), DuidType::Unknown(0));
        let high = OpaqueDuid::new(0xffff, vec![7]).unwrap();
        assert_eq!(high.data(), &[7]);
    }

    #[test]
    fn display_uuid_is_hyphenated() {
        let duid = Duid::Uuid {
            uuid: Uuid::from_bytes([0x11; 16]),
        };
        assert_eq!(
            duid.to_string(),
            "DUID-UUID{UUID=11111111-1111-1111-1111-111111111111}"
        );
    }

    #[test]
    fn link_layer_formatting() {
        assert_eq!(format_link_layer(&[]), "");
        assert_eq!(format_link_layer(&[0x0a, 0xff]), "0a:ff");
    }

    #[test]
    fn hardware_type_only_for_link_layer_variants() {
        let ll = Duid::Ll {
            hardware_type: 6,
            link_layer_address: vec![],
        };
        assert_eq!(ll.hardware_type(), Some(6));
        let en = Duid::En {
            enterprise_number: 1,
            identifier: vec![],
        };
        assert_eq!(en.hardware_type(), None);
        assert_eq!(en.link_layer_address(), None);
    }
}
