/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::io::Write;

use flate2::write::ZlibEncoder;
use flate2::Compression;
use log::debug;
use sprite_core::bytestream::ByteWriter;

use crate::constants::PNG_SIGNATURE;
use crate::error::PngEncodeErrors;
use crate::filters::sub_filter_row;
use crate::headers::writers::{write_iend, write_idat, write_ihdr};
use crate::image::ImageBuffer;

/// A PNG encoder
///
/// The output is always eight bit RGBA, not interlaced, with every row
/// sub filtered and all image data in a single IDAT chunk.
pub struct PngEncoder<'a> {
    image: &'a ImageBuffer
}

impl<'a> PngEncoder<'a> {
    pub fn new(image: &'a ImageBuffer) -> PngEncoder<'a> {
        PngEncoder { image }
    }

    fn filter_scanlines(&self) -> Vec<u8> {
        let (width, height) = self.image.dimensions();

        let mut scanlines = Vec::with_capacity(height * (1 + 4 * width));

        for row in self.image.pixels().chunks_exact(width) {
            sub_filter_row(row, &mut scanlines);
        }
        scanlines
    }

    /// Encode the image into `sink`, returning the number of bytes written
    pub fn encode<W: Write>(&self, sink: W) -> Result<usize, PngEncodeErrors> {
        let mut writer = ByteWriter::new(sink);

        writer.write_all(&PNG_SIGNATURE)?;
        write_ihdr(self.image.width(), self.image.height(), &mut writer)?;

        let scanlines = self.filter_scanlines();

        let mut compressor = ZlibEncoder::new(Vec::new(), Compression::default());
        compressor.write_all(&scanlines)?;
        let compressed = compressor.finish()?;

        debug!(
            "Compressed {} bytes of scanlines into {} bytes",
            scanlines.len(),
            compressed.len()
        );

        write_idat(&compressed, &mut writer)?;
        write_iend(&mut writer)?;

        writer.flush()?;

        Ok(writer.bytes_written())
    }
}

/// Encode `image` into `sink`, returning the number of bytes written
pub fn encode<W: Write>(sink: W, image: &ImageBuffer) -> Result<usize, PngEncodeErrors> {
    PngEncoder::new(image).encode(sink)
}

#[test]
fn test_simple_write() {
    use crate::decoder::decode;
    use crate::pixel::pack;

    let mut image = ImageBuffer::new(40, 10).unwrap();
    image.pixels_mut().fill(pack(100, 50, 25, 255));

    let mut sink = vec![];
    let written = encode(&mut sink, &image).unwrap();

    assert_eq!(written, sink.len());
    assert_eq!(&sink[..8], &PNG_SIGNATURE);
    assert_eq!(&sink[12..16], b"IHDR");
    assert_eq!(&sink[sink.len() - 8..sink.len() - 4], b"IEND");

    assert_eq!(decode(&sink[..]).unwrap(), image);
}
