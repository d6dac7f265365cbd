// SPDX-License-Identifier: Apache-2.0

//! Byte sources for the parser.

/// Trait for input sources that can provide data to the parser on-demand.
pub trait Reader {
    /// The error type returned by read operations
    type Error;

    /// Read data into the provided buffer.
    /// Returns the number of bytes read, or an error.
    ///
    /// # Contract
    /// - A return value of 0 **MUST** indicate true end of stream
    /// - Implementations **MUST NOT** return 0 unless no more data will ever be available
    /// - The returned count must not exceed `buf.len()`
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error>;
}

impl<R: Reader + ?Sized> Reader for &mut R {
    type Error = R::Error;

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        (**self).read(buf)
    }
}

/// Adapts any [`std::io::Read`] into a [`Reader`].
///
/// Reads interrupted by a signal are retried.
///
/// ```rust
/// use saxjson::{Event, IoReader, SaxHandler, SaxParser};
///
/// struct Count(usize);
/// impl SaxHandler for Count {
///     type Error = ();
///     fn handle_event(&mut self, _event: Event<'_>) -> Result<(), ()> {
///         self.0 += 1;
///         Ok(())
///     }
/// }
///
/// let input = std::io::Cursor::new(b"[true, null]".to_vec());
/// let mut count = Count(0);
/// SaxParser::new(IoReader::new(input), &mut count).parse().unwrap();
/// assert_eq!(count.0, 6);
/// ```
#[cfg(feature = "std")]
#[derive(Debug)]
pub struct IoReader<T> {
    inner: T,
}

#[cfg(feature = "std")]
impl<T: std::io::Read> IoReader<T> {
    /// Wraps a `std::io::Read` implementation.
    pub fn new(inner: T) -> Self {
        Self { inner }
    }

    /// Returns the wrapped reader.
    pub fn into_inner(self) -> T {
        self.inner
    }
}

#[cfg(feature = "std")]
impl<T: std::io::Read> Reader for IoReader<T> {
    type Error = std::io::Error;

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        loop {
            match self.inner.read(buf) {
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                other => return other,
            }
        }
    }
}
