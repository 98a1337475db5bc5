use super::error::DuidError;
use super::layout;

/// Bounds-checked reads over a DUID payload.
///
/// Every `TooShort` error reports `needed` as the payload length the read
/// would have required and `actual` as the payload length.
pub struct DuidReader<'a> {
    payload: &'a [u8],
}

impl<'a> DuidReader<'a> {
    pub fn new(payload: &'a [u8]) -> Self {
        Self { payload }
    }

    pub fn require_len(&self, needed: usize) -> Result<(), DuidError> {
        if self.payload.len() < needed {
            return Err(DuidError::TooShort {
                needed,
                actual: self.payload.len(),
            });
        }
        Ok(())
    }

    /// Fails unless the payload is within 1..=`layout::MAX_LEN` bytes.
    pub fn require_bounds(&self) -> Result<(), DuidError> {
        if self.payload.is_empty() {
            return Err(DuidError::Empty);
        }
        if self.payload.len() > layout::MAX_LEN {
            return Err(DuidError::TooLong {
                max: layout::MAX_LEN,
                actual: self.payload.len(),
            });
        }
        Ok(())
    }

    pub fn read_u16_be(&self, offset: usize) -> Result<u16, DuidError> {
        Ok(u16::from_be_bytes(self.read_array(offset)?))
    }

    pub fn read_u32_be(&self, offset: usize) -> Result<u32, DuidError> {
        Ok(u32::from_be_bytes(self.read_array(offset)?))
    }

    pub fn read_array<const N: usize>(&self, offset: usize) -> Result<[u8; N], DuidError> {
        let bytes = self.read_slice(offset..offset + N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        Ok(out)
    }

    pub fn read_slice(&self, range: std::ops::Range<usize>) -> Result<&'a [u8], DuidError> {
        self.payload.get(range.clone()).ok_or(DuidError::TooShort {
            needed: range.end,
            actual: self.payload.len(),
        })
    }

    pub fn read_rest(&self, offset: usize) -> Result<&'a [u8], DuidError> {
        self.payload.get(offset..).ok_or(DuidError::TooShort {
            needed: offset,
            actual: self.payload.len(),
        })
    }

    pub fn read_type(&self) -> Result<u16, DuidError> {
        self.read_u16_be(layout::TYPE_OFFSET)
    }
}
