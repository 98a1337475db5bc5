//! Hex text input, e.g. `00:01:00:01:2c:3d:4e:5f:aa:bb:cc:dd:ee:ff`.

use std::str::FromStr;

use thiserror::Error;

use crate::duid::{Duid, DuidError, parse_duid};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("invalid hex string '{input}': {source}")]
    InvalidHex {
        input: String,
        #[source]
        source: hex::FromHexError,
    },
}

/// Either the text was not hex, or the bytes were not a DUID.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseDuidError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Duid(#[from] DuidError),
}

/// Strip `:` separators and hex-decode the rest.
///
/// # Examples
/// ```
/// use duid_core::parse_hex_input;
///
/// assert_eq!(parse_hex_input("00:03:AB")?, vec![0x00, 0x03, 0xab]);
/// assert!(parse_hex_input("0g").is_err());
/// # Ok::<(), duid_core::InputError>(())
/// ```
pub fn parse_hex_input(input: &str) -> Result<Vec<u8>, InputError> {
    let cleaned: String = input.chars().filter(|c| *c != ':').collect();
    hex::decode(&cleaned).map_err(|source| InputError::InvalidHex {
        input: input.to_string(),
        source,
    })
}

impl FromStr for Duid {
    type Err = ParseDuidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = parse_hex_input(s)?;
        Ok(parse_duid(&bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::{InputError, ParseDuidError, parse_hex_input};
    use crate::duid::{Duid, DuidError};

    #[test]
    fn colons_are_optional() {
        assert_eq!(
            parse_hex_input("0001aabb").unwrap(),
            parse_hex_input("00:01:aa:bb").unwrap()
        );
        assert_eq!(parse_hex_input("0:001").unwrap(), vec![0x00, 0x01]);
    }

    #[test]
    fn odd_length_is_invalid() {
        let err = parse_hex_input("00:1").unwrap_err();
        assert!(matches!(
            err,
            InputError::InvalidHex {
                source: hex::FromHexError::OddLength,
                ..
            }
        ));
    }

    #[test]
    fn non_hex_is_invalid() {
        let err = parse_hex_input("00:zz").unwrap_err();
        assert!(err.to_string().contains("invalid hex string '00:zz'"));
    }

    #[test]
    fn from_str_empty_is_malformed() {
        let err = "".parse::<Duid>().unwrap_err();
        assert_eq!(err, ParseDuidError::Duid(DuidError::Empty));
        let err = ":".parse::<Duid>().unwrap_err();
        assert_eq!(err, ParseDuidError::Duid(DuidError::Empty));
    }

    #[test]
    fn from_str_en() {
        let duid: Duid = "00:02:00:00:00:09:01:02:03".parse().unwrap();
        assert_eq!(
            duid,
            Duid::En {
                enterprise_number: 9,
                identifier: vec![1, 2, 3],
            }
        );
    }
}
