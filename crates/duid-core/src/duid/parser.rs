use tracing::debug;
use uuid::Uuid;

use super::error::DuidError;
use super::layout;
use super::model::{Duid, DuidType};
use super::reader::DuidReader;

/// Decode a wire-format DUID.
///
/// The first two bytes select the variant; each registered type must carry
/// at least its fixed fields, and DUID-UUID must be exactly 18 bytes.
/// Unregistered types keep their payload verbatim, whatever its length.
///
/// # Examples
/// ```
/// use duid_core::{Duid, parse_duid};
///
/// let duid = parse_duid(&[0x00, 0x02, 0x00, 0x00, 0x00, 0x09, 0x01, 0x02, 0x03])?;
/// assert_eq!(
///     duid,
///     Duid::En {
///         enterprise_number: 9,
///         identifier: vec![1, 2, 3],
///     }
/// );
/// # Ok::<(), duid_core::DuidError>(())
/// ```
pub fn parse_duid(payload: &[u8]) -> Result<Duid, DuidError> {
    let reader = DuidReader::new(payload);
    reader.require_bounds()?;
    reader.require_len(layout::TYPE_LEN)?;

    let duid_type = DuidType::from(reader.read_type()?);
    debug!(
        duid_type = duid_type.code(),
        len = payload.len(),
        "decoding DUID"
    );

    let duid = match duid_type {
        DuidType::Llt => parse_llt(&reader)?,
        DuidType::En => parse_en(&reader)?,
        DuidType::Ll => parse_ll(&reader)?,
        DuidType::Uuid => parse_uuid(&reader)?,
        DuidType::Unknown(code) => {
            Duid::opaque(code, reader.read_rest(layout::OPAQUE_DATA_OFFSET)?.to_vec())?
        }
    };
    Ok(duid)
}

impl Duid {
    /// Same as [`parse_duid`].
    pub fn from_bytes(payload: &[u8]) -> Result<Self, DuidError> {
        parse_duid(payload)
    }
}

fn parse_llt(reader: &DuidReader<'_>) -> Result<Duid, DuidError> {
    reader.require_len(layout::LLT_MIN_LEN)?;
    Ok(Duid::Llt {
        hardware_type: reader.read_u16_be(layout::LLT_HW_TYPE_OFFSET)?,
        time: reader.read_u32_be(layout::LLT_TIME_OFFSET)?,
        link_layer_address: reader.read_rest(layout::LLT_ADDR_OFFSET)?.to_vec(),
    })
}

fn parse_en(reader: &DuidReader<'_>) -> Result<Duid, DuidError> {
    reader.require_len(layout::EN_MIN_LEN)?;
    Ok(Duid::En {
        enterprise_number: reader.read_u32_be(layout::EN_ENTERPRISE_OFFSET)?,
        identifier: reader.read_rest(layout::EN_IDENTIFIER_OFFSET)?.to_vec(),
    })
}

fn parse_ll(reader: &DuidReader<'_>) -> Result<Duid, DuidError> {
    reader.require_len(layout::LL_MIN_LEN)?;
    Ok(Duid::Ll {
        hardware_type: reader.read_u16_be(layout::LL_HW_TYPE_OFFSET)?,
        link_layer_address: reader.read_rest(layout::LL_ADDR_OFFSET)?.to_vec(),
    })
}

fn parse_uuid(reader: &DuidReader<'_>) -> Result<Duid, DuidError> {
    reader.require_len(layout::UUID_DUID_LEN)?;
    let extra = reader.read_rest(layout::UUID_DUID_LEN)?.len();
    if extra > 0 {
        return Err(DuidError::TrailingData {
            duid_type: layout::TYPE_UUID,
            extra,
        });
    }
    let bytes = reader.read_array::<{ layout::UUID_LEN }>(layout::UUID_OFFSET)?;
    Ok(Duid::Uuid {
        uuid: Uuid::from_bytes(bytes),
    })
}

#[cfg(test)]
mod tests {
    use super::parse_duid;
    use crate::duid::error::DuidError;
    use crate::duid::layout;
    use crate::duid::model::Duid;

    #[test]
    fn parse_llt_ethernet() {
        let payload = [
            0x00, 0x01, 0x00, 0x01, 0x2c, 0x3d, 0x4e, 0x5f, 0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff,
        ];
        let duid = parse_duid(&payload).unwrap();
        assert_eq!(
            duid,
            Duid::Llt {
                hardware_type: 1,
                time: 0x2c3d_4e5f,
                link_layer_address: vec![0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff],
            }
        );
    }

    #[test]
    fn parse_llt_without_address() {
        let mut payload = vec![0u8; layout::LLT_MIN_LEN];
        payload[..layout::TYPE_LEN].copy_from_slice(&layout::TYPE_LLT.to_be_bytes());
        let duid = parse_duid(&payload).unwrap();
        assert_eq!(duid.link_layer_address(), Some(&[][..]));
    }

    #[test]
    fn parse_llt_too_short() {
        let payload = [0x00, 0x01, 0x00, 0x01, 0x2c, 0x3d, 0x4e];
        let err = parse_duid(&payload).unwrap_err();
        assert_eq!(
            err,
            DuidError::TooShort {
                needed: 8,
                actual: 7
            }
        );
    }

    #[test]
    fn parse_ll() {
        let payload = [0x00, 0x03, 0x00, 0x06, 0x01, 0x02];
        let duid = Duid::from_bytes(&payload).unwrap();
        assert_eq!(
            duid,
            Duid::Ll {
                hardware_type: 6,
                link_layer_address: vec![1, 2],
            }
        );
    }

    #[test]
    fn parse_en_too_short() {
        let err = parse_duid(&[0x00, 0x02, 0x00, 0x00, 0x09]).unwrap_err();
        assert!(err.to_string().contains("too short"));
    }

    #[test]
    fn parse_uuid_exact() {
        let mut payload = vec![0x00, 0x04];
        payload.extend(0u8..16);
        let duid = parse_duid(&payload).unwrap();
        match duid {
            Duid::Uuid { uuid } => assert_eq!(uuid.as_bytes()[15], 15),
            other => panic!("expected DUID-UUID, got {other:?}"),
        }
    }

    #[test]
    fn parse_uuid_short_and_long() {
        let mut short = vec![0x00, 0x04];
        short.extend([0u8; 15]);
        assert!(matches!(
            parse_duid(&short),
            Err(DuidError::TooShort { needed: 18, .. })
        ));

        let mut long = vec![0x00, 0x04];
        long.extend([0u8; 17]);
        assert_eq!(
            parse_duid(&long),
            Err(DuidError::TrailingData {
                duid_type: 4,
                extra: 1
            })
        );
    }

    #[test]
    fn parse_unknown_keeps_payload() {
        let duid = parse_duid(&[0x00, 0x05, 0xde, 0xad]).unwrap();
        assert_eq!(duid, Duid::opaque(5, vec![0xde, 0xad]).unwrap());
        let bare = parse_duid(&[0xff, 0xff]).unwrap();
        assert_eq!(bare, Duid::opaque(0xffff, vec![]).unwrap());
    }

    #[test]
    fn parse_rejects_bounds() {
        assert_eq!(parse_duid(&[]), Err(DuidError::Empty));
        assert_eq!(
            parse_duid(&[0x00]),
            Err(DuidError::TooShort {
                needed: 2,
                actual: 1
            })
        );
        let mut big = vec![0x00, 0x05];
        big.resize(layout::MAX_LEN + 1, 0);
        assert!(matches!(parse_duid(&big), Err(DuidError::TooLong { .. })));
        big.truncate(layout::MAX_LEN);
        assert!(parse_duid(&big).is_ok());
    }
}
