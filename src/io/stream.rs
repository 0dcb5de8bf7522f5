//! Little-endian primitive readers and writers

use std::io::{Read, Write};

use super::FormatError;

/// Writes fixed-width little-endian primitives
pub struct StreamWriter<W: Write> {
    inner: W,
}

impl<W: Write> StreamWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn write_i32(&mut self, value: i32) -> Result<(), FormatError> {
        self.inner.write_all(&value.to_le_bytes())?;
        Ok(())
    }

    pub fn write_u32(&mut self, value: u32) -> Result<(), FormatError> {
        self.inner.write_all(&value.to_le_bytes())?;
        Ok(())
    }

    pub fn write_f64(&mut self, value: f64) -> Result<(), FormatError> {
        self.inner.write_all(&value.to_le_bytes())?;
        Ok(())
    }

    /// One byte, 0 or 1
    pub fn write_bool(&mut self, value: bool) -> Result<(), FormatError> {
        self.inner.write_all(&[u8::from(value)])?;
        Ok(())
    }

    /// A collection length as `u32`
    pub fn write_len(&mut self, len: usize) -> Result<(), FormatError> {
        let count = u32::try_from(len).map_err(|_| FormatError::TooManyItems(len))?;
        self.write_u32(count)
    }

    pub fn flush(&mut self) -> Result<(), FormatError> {
        self.inner.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

/// Reads fixed-width little-endian primitives
///
/// Running out of input is reported as an `UnexpectedEof` I/O error.
pub struct StreamReader<R: Read> {
    inner: R,
}

impl<R: Read> StreamReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    fn read_array<const N: usize>(&mut self) -> Result<[u8; N], FormatError> {
        let mut buf = [0u8; N];
        self.inner.read_exact(&mut buf)?;
        Ok(buf)
    }

    pub fn read_i32(&mut self) -> Result<i32, FormatError> {
        Ok(i32::from_le_bytes(self.read_array()?))
    }

    pub fn read_u32(&mut self) -> Result<u32, FormatError> {
        Ok(u32::from_le_bytes(self.read_array()?))
    }

    pub fn read_f64(&mut self) -> Result<f64, FormatError> {
        Ok(f64::from_le_bytes(self.read_array()?))
    }

    pub fn read_bool(&mut self) -> Result<bool, FormatError> {
        match self.read_array::<1>()?[0] {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(FormatError::InvalidBool(other)),
        }
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}
