use super::error::DecodeError;

/// Cursor-style little-endian access over a raw record buffer.
pub struct RecordReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> RecordReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    pub fn require_exact_len(&self, expected: usize) -> Result<(), DecodeError> {
        if self.buf.len() != expected {
            return Err(DecodeError::WrongLength {
                expected,
                actual: self.buf.len(),
            });
        }
        Ok(())
    }

    pub fn take_u8(&mut self) -> Result<u8, DecodeError> {
        let bytes = self.take(1)?;
        Ok(bytes[0])
    }

    pub fn take_u16_le(&mut self) -> Result<u16, DecodeError> {
        let bytes = self.take(2)?;
        Ok(u16::from_le_bytes([bytes[0], bytes[1]]))
    }

    pub fn take_i16_le(&mut self) -> Result<i16, DecodeError> {
        let bytes = self.take(2)?;
        Ok(i16::from_le_bytes([bytes[0], bytes[1]]))
    }

    pub fn skip(&mut self, count: usize) -> Result<(), DecodeError> {
        self.take(count).map(|_| ())
    }

    fn take(&mut self, count: usize) -> Result<&'a [u8], DecodeError> {
        let end = self.pos + count;
        let bytes = self.buf.get(self.pos..end).ok_or(DecodeError::TooShort {
            needed: end,
            actual: self.buf.len(),
        })?;
        self.pos = end;
        Ok(bytes)
    }
}
