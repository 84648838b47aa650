/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Incremental zlib decompression of IDAT bodies
use flate2::{Decompress, FlushDecompress, Status};

use crate::error::PngDecodeErrors;

/// Minimum amount the output grows by when it runs out of space
const MIN_GROWTH: usize = 1 << 15;

/// Largest up-front reservation, beyond this the output grows with
/// the data actually decompressed
const MAX_INITIAL_CAPACITY: usize = 1 << 20;

/// Decompresses a zlib stream delivered in pieces
///
/// IDAT bodies are fed one at a time as they are read, the stream can
/// be split at any byte. Output stops once `limit` bytes have been
/// produced, anything past that is never decompressed.
pub(crate) struct StreamingInflater {
    inner:    Decompress,
    out:      Vec<u8>,
    limit:    usize,
    finished: bool
}

impl StreamingInflater {
    /// Create a new inflater producing at most `limit` bytes
    pub fn new(limit: usize) -> StreamingInflater {
        StreamingInflater {
            inner: Decompress::new(true),
            out: Vec::with_capacity(limit.min(MAX_INITIAL_CAPACITY)),
            limit,
            finished: false
        }
    }

    fn is_full(&self) -> bool {
        self.finished || self.out.len() >= self.limit
    }

    fn grow_if_full(&mut self, hint: usize) {
        if self.out.len() == self.out.capacity() {
            let room = self.limit - self.out.len();
            self.out.reserve_exact(hint.max(MIN_GROWTH).min(room));
        }
    }

    /// Decompress as much of `input` as possible
    pub fn feed(&mut self, mut input: &[u8]) -> Result<(), PngDecodeErrors> {
        while !input.is_empty() && !self.is_full() {
            self.grow_if_full(input.len() * 2);

            let (in_before, out_before) = (self.inner.total_in(), self.out.len());

            let status = self
                .inner
                .decompress_vec(input, &mut self.out, FlushDecompress::None)?;

            let consumed = (self.inner.total_in() - in_before) as usize;
            input = &input[consumed..];

            match status {
                Status::StreamEnd => self.finished = true,
                Status::Ok | Status::BufError => {
                    if consumed == 0 && self.out.len() == out_before {
                        return Err(PngDecodeErrors::ZlibDecodeErrors(
                            "inflate made no progress".to_string()
                        ));
                    }
                }
            }
        }
        Ok(())
    }

    /// Flush whatever is still buffered and return the decompressed bytes
    ///
    /// A stream that ends early is not an error here, the caller notices
    /// that too few bytes came out.
    pub fn finish(mut self) -> Result<Vec<u8>, PngDecodeErrors> {
        while !self.is_full() {
            self.grow_if_full(MIN_GROWTH);

            let out_before = self.out.len();

            let status = self
                .inner
                .decompress_vec(&[], &mut self.out, FlushDecompress::Finish)?;

            match status {
                Status::StreamEnd => self.finished = true,
                Status::Ok | Status::BufError => {
                    if self.out.len() == out_before {
                        break;
                    }
                }
            }
        }
        Ok(self.out)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use flate2::write::ZlibEncoder;
    use flate2::Compression;

    use super::*;

    fn compress(data: &[u8]) -> Vec<u8> {
        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(data).unwrap();
        encoder.finish().unwrap()
    }

    #[test]
    fn split_at_every_byte() {
        let data: Vec<u8> = (0..100_000_u32).map(|x| (x % 251) as u8).collect();
        let compressed = compress(&data);

        let mut inflater = StreamingInflater::new(usize::MAX);
        for byte in compressed.chunks(1) {
            inflater.feed(byte).unwrap();
        }
        assert_eq!(inflater.finish().unwrap(), data);
    }

    #[test]
    fn truncated_stream_yields_short_output() {
        let data = vec![7_u8; 4096];
        let compressed = compress(&data);

        let mut inflater = StreamingInflater::new(data.len());
        inflater.feed(&compressed[..compressed.len() / 2]).unwrap();

        if let Ok(out) = inflater.finish() {
            assert!(out.len() <= data.len());
        }
    }

    #[test]
    fn output_stops_at_limit() {
        let data = vec![0_u8; 1 << 20];
        let compressed = compress(&data);

        let mut inflater = StreamingInflater::new(1000);
        inflater.feed(&compressed).unwrap();

        let out = inflater.finish().unwrap();
        assert!(out.len() >= 1000);
        assert!(out.len() < data.len());
    }

    #[test]
    fn huge_limit_does_not_reserve_up_front() {
        let inflater = StreamingInflater::new(usize::MAX);
        assert!(inflater.out.capacity() <= MAX_INITIAL_CAPACITY);
    }
}
