/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::io::Write;

use crate::bytestream::ByteIoError;

/// Encapsulates a simple byte writer with
/// support for endian aware writes
///
/// The writer keeps count of every byte handed to the sink
pub struct ByteWriter<T: Write> {
    buffer:        T,
    bytes_written: usize
}

impl<T: Write> ByteWriter<T> {
    /// Create a new writer for the sink
    pub fn new(data: T) -> ByteWriter<T> {
        ByteWriter {
            buffer:        data,
            bytes_written: 0
        }
    }
    /// Return the number of bytes the writer has written
    ///
    /// ```
    /// use sprite_core::bytestream::ByteWriter;
    /// let mut sink = vec![];
    /// let mut stream = ByteWriter::new(&mut sink);
    /// stream.write_u32_be_err(7).unwrap();
    /// assert_eq!(stream.bytes_written(), 4);
    /// ```
    pub const fn bytes_written(&self) -> usize {
        self.bytes_written
    }

    /// Destroy this writer returning the underlying sink
    pub fn consume(self) -> T {
        self.buffer
    }

    /// Write all bytes to the sink or return an error if something occurred
    pub fn write_all(&mut self, buf: &[u8]) -> Result<(), ByteIoError> {
        self.buffer.write_all(buf)?;
        self.bytes_written += buf.len();
        Ok(())
    }

    /// Ensure bytes are handed over to the sink's storage
    pub fn flush(&mut self) -> Result<(), ByteIoError> {
        self.buffer.flush().map_err(ByteIoError::StdIoError)
    }
}

macro_rules! write_single_type {
    ($name_be:tt,$int_type:tt) => {
        impl<T: Write> ByteWriter<T> {
            #[doc=concat!("Write ",stringify!($int_type)," as a big endian integer")]
            #[inline]
            pub fn $name_be(&mut self, byte: $int_type) -> Result<(), ByteIoError> {
                self.write_all(&byte.to_be_bytes())
            }
        }
    };
}

write_single_type!(write_u32_be_err, u32);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endian_writes() {
        let mut sink = vec![];
        let mut writer = ByteWriter::new(&mut sink);

        writer.write_u32_be_err(0x0102_0304).unwrap();
        writer.write_all(b"IEND").unwrap();

        assert_eq!(writer.bytes_written(), 8);
        assert_eq!(sink, [1, 2, 3, 4, b'I', b'E', b'N', b'D']);
    }
}
