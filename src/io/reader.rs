/// Little-endian field reader over a byte slice.
///
/// Every read is checked against the remaining length before it touches the
/// underlying `BinaryReader`, so a short read surfaces as
/// `FontError::TruncatedInput`. Fixed-width reads leave the cursor where it
/// was when they fail.

use binary_reader::{BinaryReader, Endian};

use crate::bmfont::error::FontError;

pub struct FieldReader {
    inner: BinaryReader,
    len: usize,
}

impl FieldReader {
    pub fn new(data: &[u8]) -> Self {
        let mut inner = BinaryReader::from_u8(data);
        inner.set_endian(Endian::Little);
        Self {
            inner,
            len: data.len(),
        }
    }

    pub fn position(&self) -> usize {
        self.inner.pos
    }

    pub fn remaining(&self) -> usize {
        self.len.saturating_sub(self.inner.pos)
    }

    pub fn is_eof(&self) -> bool {
        self.remaining() == 0
    }

    fn ensure(&self, needed: usize, what: &'static str) -> Result<(), FontError> {
        let remaining = self.remaining();
        if remaining < needed {
            return Err(FontError::truncated(what, needed, remaining));
        }
        Ok(())
    }

    // ========== Integer fields ==========

    pub fn read_u8(&mut self, what: &'static str) -> Result<u8, FontError> {
        self.ensure(1, what)?;
        let remaining = self.remaining();
        self.inner
            .read_u8()
            .map_err(|_| FontError::truncated(what, 1, remaining))
    }

    pub fn read_i8(&mut self, what: &'static str) -> Result<i8, FontError> {
        self.ensure(1, what)?;
        let remaining = self.remaining();
        self.inner
            .read_i8()
            .map_err(|_| FontError::truncated(what, 1, remaining))
    }

    pub fn read_u16(&mut self, what: &'static str) -> Result<u16, FontError> {
        self.ensure(2, what)?;
        let remaining = self.remaining();
        self.inner
            .read_u16()
            .map_err(|_| FontError::truncated(what, 2, remaining))
    }

    pub fn read_i16(&mut self, what: &'static str) -> Result<i16, FontError> {
        self.ensure(2, what)?;
        let remaining = self.remaining();
        self.inner
            .read_i16()
            .map_err(|_| FontError::truncated(what, 2, remaining))
    }

    /// Read an unsigned 32-bit field. The bytes are combined as unsigned
    /// values, so a set high bit stays a magnitude bit.
    pub fn read_u32(&mut self, what: &'static str) -> Result<u32, FontError> {
        self.ensure(4, what)?;
        let remaining = self.remaining();
        self.inner
            .read_u32()
            .map_err(|_| FontError::truncated(what, 4, remaining))
    }

    pub fn read_i32(&mut self, what: &'static str) -> Result<i32, FontError> {
        self.ensure(4, what)?;
        let remaining = self.remaining();
        self.inner
            .read_i32()
            .map_err(|_| FontError::truncated(what, 4, remaining))
    }

    // ========== Byte runs ==========

    pub fn read_bytes(&mut self, count: usize, what: &'static str) -> Result<Vec<u8>, FontError> {
        self.ensure(count, what)?;
        let remaining = self.remaining();
        self.inner
            .read_bytes(count)
            .map(|bytes| bytes.to_vec())
            .map_err(|_| FontError::truncated(what, count, remaining))
    }

    pub fn skip(&mut self, count: usize, what: &'static str) -> Result<(), FontError> {
        self.read_bytes(count, what).map(|_| ())
    }

    /// Read a NUL-terminated string. The terminator is consumed but not
    /// returned; invalid UTF-8 is replaced lossily.
    pub fn read_cstr(&mut self, what: &'static str) -> Result<String, FontError> {
        let mut bytes = Vec::new();
        loop {
            if self.is_eof() {
                return Err(FontError::truncated(what, bytes.len() + 1, bytes.len()));
            }
            match self.read_u8(what)? {
                0 => break,
                byte => bytes.push(byte),
            }
        }
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_u16_little_endian() {
        let mut reader = FieldReader::new(&[0x34, 0x12]);
        assert_eq!(reader.read_u16("field").unwrap(), 0x1234);
        assert!(reader.is_eof());
    }

    #[test]
    fn test_read_u32_high_bit_set() {
        let mut reader = FieldReader::new(&[0x00, 0x00, 0x00, 0x80]);
        assert_eq!(reader.read_u32("field").unwrap(), 2_147_483_648);
    }

    #[test]
    fn test_read_u32_all_bytes_high() {
        let mut reader = FieldReader::new(&[0xFF, 0xFE, 0x80, 0x81]);
        assert_eq!(reader.read_u32("field").unwrap(), 0x8180_FEFF);
    }

    #[test]
    fn test_signed_fields() {
        let mut reader = FieldReader::new(&[0xFE, 0xFF, 0xFF, 0x80, 0xFF, 0xFF, 0xFF, 0xFF]);
        assert_eq!(reader.read_i16("field").unwrap(), -2);
        assert_eq!(reader.read_i8("field").unwrap(), -1);
        assert_eq!(reader.read_u8("field").unwrap(), 0x80);
        assert_eq!(reader.read_i32("field").unwrap(), -1);
    }

    #[test]
    fn test_truncated_read_keeps_cursor() {
        let mut reader = FieldReader::new(&[0x01, 0x02, 0x03]);
        let err = reader.read_u32("glyph id").unwrap_err();
        match err {
            FontError::TruncatedInput {
                what,
                needed,
                remaining,
            } => {
                assert_eq!(what, "glyph id");
                assert_eq!(needed, 4);
                assert_eq!(remaining, 3);
            }
            other => panic!("unexpected error: {}", other),
        }
        assert_eq!(reader.position(), 0);
        assert_eq!(reader.read_u16("field").unwrap(), 0x0201);
    }

    #[test]
    fn test_read_cstr() {
        let mut reader = FieldReader::new(b"font.png\0rest");
        assert_eq!(reader.read_cstr("name").unwrap(), "font.png");
        assert_eq!(reader.position(), 9);
        assert_eq!(reader.remaining(), 4);
    }

    #[test]
    fn test_read_cstr_without_terminator() {
        let mut reader = FieldReader::new(b"abc");
        assert!(matches!(
            reader.read_cstr("name"),
            Err(FontError::TruncatedInput { needed: 4, remaining: 3, .. })
        ));
    }

    #[test]
    fn test_skip_and_bytes() {
        let mut reader = FieldReader::new(&[1, 2, 3, 4, 5]);
        reader.skip(2, "padding").unwrap();
        assert_eq!(reader.read_bytes(3, "payload").unwrap(), vec![3, 4, 5]);
        assert!(reader.skip(1, "padding").is_err());
    }
}
