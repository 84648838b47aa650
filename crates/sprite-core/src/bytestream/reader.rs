/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Debug, Display, Formatter};
use std::io::{ErrorKind, Read};

/// Errors that may occur when reading from or writing to
/// an underlying byte source or sink
pub enum ByteIoError {
    /// The underlying reader or writer failed
    StdIoError(std::io::Error),
    /// The source ended early
    ///
    /// # Arguments
    /// - 1st argument is the number of bytes requested
    /// - 2nd argument is the number of bytes that were available
    NotEnoughBytes(usize, usize)
}

impl Debug for ByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            ByteIoError::StdIoError(err) => {
                writeln!(f, "Underlying I/O error {}", err)
            }
            ByteIoError::NotEnoughBytes(expected, found) => {
                writeln!(f, "Not enough bytes, expected {expected} but found {found}")
            }
        }
    }
}

impl Display for ByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

impl std::error::Error for ByteIoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ByteIoError::StdIoError(err) => Some(err),
            _ => None
        }
    }
}

impl From<std::io::Error> for ByteIoError {
    fn from(value: std::io::Error) -> Self {
        ByteIoError::StdIoError(value)
    }
}

/// An endian aware reader over any [`Read`] implementation.
///
/// Reads never seek, the source is consumed strictly in order,
/// and the reader keeps count of how many bytes it has consumed.
pub struct ByteReader<T: Read> {
    inner:    T,
    position: u64
}

impl<T: Read> ByteReader<T> {
    pub fn new(source: T) -> ByteReader<T> {
        ByteReader {
            inner:    source,
            position: 0
        }
    }
    /// Number of bytes consumed from the source so far
    pub const fn position(&self) -> u64 {
        self.position
    }

    /// Fill `buf` as far as the source allows, returning how many
    /// bytes were placed.
    ///
    /// Only stops short of `buf.len()` at end of stream.
    fn fill(&mut self, buf: &mut [u8]) -> Result<usize, ByteIoError> {
        let mut filled = 0;

        while filled < buf.len() {
            match self.inner.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(ByteIoError::StdIoError(e))
            }
        }
        self.position += filled as u64;

        Ok(filled)
    }

    /// Read exact bytes required to fill `buf` or return an error if that isn't possible
    pub fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<(), ByteIoError> {
        let filled = self.fill(buf)?;

        if filled != buf.len() {
            return Err(ByteIoError::NotEnoughBytes(buf.len(), filled));
        }
        Ok(())
    }

    #[inline]
    pub fn read_fixed_bytes_or_error<const N: usize>(&mut self) -> Result<[u8; N], ByteIoError> {
        let mut byte_store: [u8; N] = [0; N];
        self.read_exact_bytes(&mut byte_store)?;
        Ok(byte_store)
    }

    /// Read exactly `num_bytes` into a new vector.
    ///
    /// The vector grows with the data actually present, so a bogus
    /// length coming from a corrupt file cannot trigger a huge
    /// up-front allocation.
    pub fn read_vec(&mut self, num_bytes: usize) -> Result<Vec<u8>, ByteIoError> {
        let mut out = Vec::new();

        let read = (&mut self.inner)
            .take(num_bytes as u64)
            .read_to_end(&mut out)
            .map_err(ByteIoError::StdIoError)?;

        self.position += read as u64;

        if read != num_bytes {
            return Err(ByteIoError::NotEnoughBytes(num_bytes, read));
        }
        Ok(out)
    }
}

macro_rules! get_single_type {
    ($name_be:tt,$int_type:tt,$size:tt) => {
        impl<T: Read> ByteReader<T> {
            #[doc=concat!("Read ",stringify!($int_type)," as a big endian integer")]
            #[doc=concat!("Returning an error if the underlying source cannot support a ",stringify!($int_type)," read.")]
            #[inline]
            pub fn $name_be(&mut self) -> Result<$int_type, ByteIoError> {
                let space = self.read_fixed_bytes_or_error::<$size>()?;
                Ok($int_type::from_be_bytes(space))
            }
        }
    };
}

get_single_type!(get_u32_be_err, u32, 4);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endian_reads() {
        let data = [0x12, 0x34, 0x56, 0x78, 0x00, 0x00, 0x00, 0x0D];
        let mut reader = ByteReader::new(&data[..]);

        assert_eq!(reader.get_u32_be_err().unwrap(), 0x1234_5678);
        assert_eq!(reader.get_u32_be_err().unwrap(), 13);
        assert_eq!(reader.position(), 8);
    }

    #[test]
    fn test_short_read_reports_counts() {
        let data = [1, 2, 3];
        let mut reader = ByteReader::new(&data[..]);

        match reader.get_u32_be_err() {
            Err(ByteIoError::NotEnoughBytes(4, 3)) => (),
            other => panic!("unexpected result {:?}", other.map(|_| ()))
        }
    }

    #[test]
    fn test_read_vec_short() {
        let data = [9; 10];
        let mut reader = ByteReader::new(&data[..]);

        assert_eq!(reader.read_vec(4).unwrap(), vec![9; 4]);
        assert!(matches!(
            reader.read_vec(100),
            Err(ByteIoError::NotEnoughBytes(100, 6))
        ));
    }
}
