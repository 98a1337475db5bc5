use super::layout;
use super::model::Duid;

impl Duid {
    /// Serialize into wire format: big-endian type code followed by the
    /// variant's fields in layout order.
    ///
    /// Every constructible value decodes back to itself as long as it fits;
    /// length limits are not enforced here, and [`crate::parse_duid`] rejects
    /// anything longer than 130 bytes.
    ///
    /// # Examples
    /// ```
    /// use duid_core::{Duid, parse_duid};
    ///
    /// let duid = Duid::En {
    ///     enterprise_number: 9,
    ///     identifier: vec![1, 2, 3],
    /// };
    /// let bytes = duid.to_bytes();
    /// assert_eq!(bytes, [0, 2, 0, 0, 0, 9, 1, 2, 3]);
    /// assert_eq!(parse_duid(&bytes)?, duid);
    /// # Ok::<(), duid_core::DuidError>(())
    /// ```
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.encoded_len());
        out.extend_from_slice(&self.duid_type().code().to_be_bytes());
        match self {
            Duid::Llt {
                hardware_type,
                time,
                link_layer_address,
            } => {
                out.extend_from_slice(&hardware_type.to_be_bytes());
                out.extend_from_slice(&time.to_be_bytes());
                out.extend_from_slice(link_layer_address);
            }
            Duid::En {
                enterprise_number,
                identifier,
            } => {
                out.extend_from_slice(&enterprise_number.to_be_bytes());
                out.extend_from_slice(identifier);
            }
            Duid::Ll {
                hardware_type,
                link_layer_address,
            } => {
                out.extend_from_slice(&hardware_type.to_be_bytes());
                out.extend_from_slice(link_layer_address);
            }
            Duid::Uuid { uuid } => out.extend_from_slice(uuid.as_bytes()),
            Duid::Unknown(opaque) => out.extend_from_slice(opaque.data()),
        }
        out
    }

    pub fn encoded_len(&self) -> usize {
        match self {
            Duid::Llt {
                link_layer_address, ..
            } => layout::LLT_ADDR_OFFSET + link_layer_address.len(),
            Duid::En { identifier, .. } => layout::EN_IDENTIFIER_OFFSET + identifier.len(),
            Duid::Ll {
                link_layer_address, ..
            } => layout::LL_ADDR_OFFSET + link_layer_address.len(),
            Duid::Uuid { .. } => layout::UUID_DUID_LEN,
            Duid::Unknown(opaque) => layout::OPAQUE_DATA_OFFSET + opaque.data().len(),
        }
    }
}
