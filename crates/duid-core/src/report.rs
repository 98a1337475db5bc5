use std::fmt::Write as _;

use serde::{Deserialize, Serialize};
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

use crate::duid::{Duid, DuidType, format_link_layer, layout};
use crate::hwtype::{ETHERNET, hardware_type_name};

/// Current report schema version.
pub const REPORT_VERSION: u32 = 1;

/// Tool metadata embedded in reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolInfo {
    pub name: String,
    pub version: String,
}

/// Serializable view of a decoded DUID.
///
/// Fields that do not apply to the decoded variant are omitted from JSON.
///
/// # Examples
/// ```
/// use duid_core::{DuidReport, parse_duid};
///
/// let duid = parse_duid(&[0x00, 0x03, 0x00, 0x01, 0xaa, 0xbb])?;
/// let report = DuidReport::from_duid(&duid);
/// assert_eq!(report.type_name, "DUID-LL");
/// assert_eq!(report.link_layer_address.as_deref(), Some("aa:bb"));
/// assert!(report.enterprise_number.is_none());
/// # Ok::<(), duid_core::DuidError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DuidReport {
    /// Report schema version (not the binary version).
    pub report_version: u32,
    pub tool: ToolInfo,
    /// Total encoded length in bytes, type code included.
    pub length: usize,
    pub duid_type: u16,
    /// Short label such as `DUID-LLT`, or `Unknown`.
    pub type_name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hardware_type: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hardware_type_name: Option<String>,
    /// DUID-LLT seconds since 2000-01-01T00:00:00Z.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<u32>,
    /// RFC3339 rendering of `time`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    /// Colon-separated hex octets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_layer_address: Option<String>,
    /// Number of octets in `link_layer_address`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_octets: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enterprise_number: Option<u32>,
    /// Lower-case hex.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    /// Undecoded payload of an unknown type, lower-case hex.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    /// Canonical one-line form.
    pub display: String,
}

impl DuidReport {
    pub fn from_duid(duid: &Duid) -> Self {
        let duid_type = duid.duid_type();
        let mut report = DuidReport {
            report_version: REPORT_VERSION,
            tool: ToolInfo {
                name: "decode-duid".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            length: duid.encoded_len(),
            duid_type: duid_type.code(),
            type_name: duid_type.name().to_string(),
            description: duid_type.description().to_string(),
            hardware_type: None,
            hardware_type_name: None,
            time: None,
            timestamp: None,
            link_layer_address: None,
            address_octets: None,
            enterprise_number: None,
            identifier: None,
            uuid: None,
            data: None,
            display: duid.to_string(),
        };

        if let Some(hw) = duid.hardware_type() {
            report.hardware_type = Some(hw);
            report.hardware_type_name =
                Some(hardware_type_name(hw).unwrap_or("Unknown").to_string());
        }
        if let Some(addr) = duid.link_layer_address() {
            report.link_layer_address = Some(format_link_layer(addr));
            report.address_octets = Some(addr.len());
        }
        match duid {
            Duid::Llt { time, .. } => {
                report.time = Some(*time);
                report.timestamp = llt_timestamp(*time);
            }
            Duid::En {
                enterprise_number,
                identifier,
            } => {
                report.enterprise_number = Some(*enterprise_number);
                report.identifier = Some(hex::encode(identifier));
            }
            Duid::Uuid { uuid } => {
                report.uuid = Some(uuid.hyphenated().to_string());
            }
            Duid::Unknown(opaque) => {
                if !opaque.data().is_empty() {
                    report.data = Some(hex::encode(opaque.data()));
                }
            }
            Duid::Ll { .. } => {}
        }
        report
    }

    /// Multi-line, human-oriented rendering.
    ///
    /// # Examples
    /// ```
    /// use duid_core::{DuidReport, parse_duid};
    ///
    /// let duid = parse_duid(&[0x00, 0x02, 0x00, 0x00, 0x00, 0x09, 0x01])?;
    /// let text = DuidReport::from_duid(&duid).render_text();
    /// assert!(text.contains("Enterprise Number: 9"));
    /// assert!(text.contains("Identifier: 0x01"));
    /// # Ok::<(), duid_core::DuidError>(())
    /// ```
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "DUID Type: {} [{} - {}]",
            self.duid_type, self.type_name, self.description
        );
        let _ = writeln!(out, "Total DUID Length: {} bytes", self.length);
        if let (Some(hw), Some(name)) = (self.hardware_type, &self.hardware_type_name) {
            let _ = writeln!(out, "Hardware Type: {hw} [{name}]");
        }
        if let Some(time) = self.time {
            let _ = writeln!(out, "Seconds since midnight (UTC), January 1, 2000: {time}");
        }
        if let Some(ts) = &self.timestamp {
            let _ = writeln!(out, "Calculated Timestamp (UTC): {ts}");
        }
        if let Some(addr) = &self.link_layer_address {
            if self.is_ethernet_mac() {
                let _ = writeln!(out, "Link-layer Address: {addr}");
            } else {
                let _ = writeln!(out, "Link-layer Address: {addr} (Hex)");
            }
        }
        if let Some(number) = self.enterprise_number {
            let _ = writeln!(out, "Enterprise Number: {number}");
        }
        if let Some(identifier) = &self.identifier {
            let _ = writeln!(out, "Identifier: 0x{identifier}");
        }
        if let Some(uuid) = &self.uuid {
            let _ = writeln!(out, "UUID: {uuid}");
        }
        if let DuidType::Unknown(_) = self.kind() {
            let _ = writeln!(out, "Unknown DUID Type. Unable to decode further.");
            if let Some(data) = &self.data {
                let _ = writeln!(out, "Remaining undecoded data: 0x{data}");
            }
        }
        out
    }

    /// Typed view of `duid_type`.
    pub fn kind(&self) -> DuidType {
        DuidType::from(self.duid_type)
    }

    fn is_ethernet_mac(&self) -> bool {
        const MAC_OCTETS: usize = 6;
        self.hardware_type == Some(ETHERNET) && self.address_octets == Some(MAC_OCTETS)
    }
}

/// RFC3339 instant of a DUID-LLT time value.
///
/// # Examples
/// ```
/// use duid_core::llt_timestamp;
///
/// assert_eq!(llt_timestamp(0).as_deref(), Some("2000-01-01T00:00:00Z"));
/// ```
pub fn llt_timestamp(seconds: u32) -> Option<String> {
    OffsetDateTime::from_unix_timestamp(layout::LLT_EPOCH_UNIX + i64::from(seconds))
        .ok()?
        .format(&Rfc3339)
        .ok()
}
