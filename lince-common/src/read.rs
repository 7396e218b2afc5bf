use std::io::{Cursor, Read};

/// Sequential byte origin that format checkers consume
///
/// There is deliberately no way to seek or rewind: checkers are written
/// as a single forward pass and a byte read by one checker is gone.
pub trait ByteSource {
    /// Fill `buf` completely or fail
    ///
    /// Short reads are never silently accepted.
    fn read_exact(&mut self, buf: &mut [u8]) -> Result<(), ReadError>;

    /// Advance exactly `n` bytes
    ///
    /// Fails with [`ReadError::UnexpectedEof`] if the input ends before
    /// `n` bytes could be consumed.
    fn skip(&mut self, n: u64) -> Result<(), ReadError>;

    fn read_byte(&mut self) -> Result<u8, ReadError> {
        let buf = &mut [0; 1];
        self.read_exact(buf)?;
        Ok(buf[0])
    }

    fn read_array<const N: usize>(&mut self) -> Result<[u8; N], ReadError> {
        let buf = &mut [0; N];
        self.read_exact(buf)?;
        Ok(*buf)
    }

    /// Read bytes as ISO-8859-1 characters up to a line feed
    ///
    /// The line feed is consumed but not included in the result. A line
    /// terminated by the end of the input instead of a line feed is
    /// still returned; only a line with no bytes at all is an error.
    ///
    /// ```
    /// # use lince_common::read::*;
    /// let mut s = SliceSource::new(b"first\nsecond");
    /// assert_eq!(s.read_line().unwrap(), "first");
    /// assert_eq!(s.read_line().unwrap(), "second");
    /// assert!(s.read_line().is_err());
    /// ```
    fn read_line(&mut self) -> Result<String, ReadError> {
        let mut line = String::new();
        loop {
            match self.read_byte() {
                Ok(b'\n') => break,
                Ok(byte) => line.push(char::from(byte)),
                Err(ReadError::UnexpectedEof) if !line.is_empty() => break,
                Err(err) => return Err(err),
            }
        }
        Ok(line)
    }
}

/// [`ByteSource`] over any [`Read`] implementation
pub struct StreamSource<R> {
    inner: R,
}

impl<R: Read> StreamSource<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> ByteSource for StreamSource<R> {
    fn read_exact(&mut self, buf: &mut [u8]) -> Result<(), ReadError> {
        self.inner.read_exact(buf).map_err(ReadError::from_io)
    }

    fn skip(&mut self, n: u64) -> Result<(), ReadError> {
        // Readers have no native skip. Draining into a sink consumes in
        // bulk where the reader supports it and byte-wise otherwise.
        let copied = std::io::copy(&mut self.inner.by_ref().take(n), &mut std::io::sink())?;
        if copied < n {
            return Err(ReadError::UnexpectedEof);
        }
        Ok(())
    }
}

/// [`ByteSource`] over in-memory data
///
/// ```
/// # use lince_common::read::*;
/// let mut s = SliceSource::new(&[0x47, 0x49, 0x46]);
/// assert_eq!(s.read_byte().unwrap(), 0x47);
/// assert_eq!(s.read_array().unwrap(), [0x49, 0x46]);
/// ```
pub struct SliceSource<'a> {
    cursor: Cursor<&'a [u8]>,
}

impl<'a> SliceSource<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            cursor: Cursor::new(data),
        }
    }
}

impl ByteSource for SliceSource<'_> {
    fn read_exact(&mut self, buf: &mut [u8]) -> Result<(), ReadError> {
        self.cursor.read_exact(buf).map_err(ReadError::from_io)
    }

    fn skip(&mut self, n: u64) -> Result<(), ReadError> {
        let len = self.cursor.get_ref().len() as u64;
        let end = self
            .cursor
            .position()
            .checked_add(n)
            .ok_or(ReadError::UnexpectedEof)?;
        if end > len {
            self.cursor.set_position(len);
            return Err(ReadError::UnexpectedEof);
        }
        self.cursor.set_position(end);
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error("Unexpected end of input")]
    UnexpectedEof,
    #[error("IO: {0}")]
    Io(#[from] std::io::Error),
}

impl ReadError {
    fn from_io(err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::UnexpectedEof {
            Self::UnexpectedEof
        } else {
            Self::Io(err)
        }
    }
}
