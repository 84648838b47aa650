/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::io::Write;

use sprite_core::bytestream::ByteWriter;

use crate::chunks::write_chunk;
use crate::constants::IHDR_LENGTH;
use crate::enums::{InterlaceMethod, PngColor};
use crate::error::PngEncodeErrors;

/// Write the header chunk, always eight bit RGBA without interlacing
pub(crate) fn write_ihdr<W: Write>(
    width: usize, height: usize, writer: &mut ByteWriter<W>
) -> Result<(), PngEncodeErrors> {
    let width = u32::try_from(width).map_err(|_| PngEncodeErrors::TooLargeDimensions(width))?;
    let height = u32::try_from(height).map_err(|_| PngEncodeErrors::TooLargeDimensions(height))?;

    let mut body = [0; IHDR_LENGTH];

    body[0..4].copy_from_slice(&width.to_be_bytes());
    body[4..8].copy_from_slice(&height.to_be_bytes());
    body[8] = 8; // depth
    body[9] = PngColor::RGBA.to_int();
    body[10] = 0; // compression
    body[11] = 0; // filter method
    body[12] = InterlaceMethod::Standard.to_int();

    write_chunk(writer, b"IHDR", &body)
}

pub(crate) fn write_idat<W: Write>(
    compressed: &[u8], writer: &mut ByteWriter<W>
) -> Result<(), PngEncodeErrors> {
    write_chunk(writer, b"IDAT", compressed)
}

pub(crate) fn write_iend<W: Write>(writer: &mut ByteWriter<W>) -> Result<(), PngEncodeErrors> {
    write_chunk(writer, b"IEND", &[])
}
