/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Helpers shared by the integration tests
#![allow(dead_code)]

use std::io::Write;

use flate2::write::ZlibEncoder;
use flate2::{Compression, Crc};
use sprite_png::pixel::pack;

pub const SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

pub fn write_chunk(out: &mut Vec<u8>, chunk: &[u8; 4], body: &[u8]) {
    let mut crc = Crc::new();
    crc.update(chunk);
    crc.update(body);

    out.extend_from_slice(&(body.len() as u32).to_be_bytes());
    out.extend_from_slice(chunk);
    out.extend_from_slice(body);
    out.extend_from_slice(&crc.sum().to_be_bytes());
}

pub fn zlib(data: &[u8]) -> Vec<u8> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data).unwrap();
    encoder.finish().unwrap()
}

pub fn ihdr(width: u32, height: u32, depth: u8, color: u8, interlace: u8) -> Vec<u8> {
    let mut body = Vec::with_capacity(13);
    body.extend_from_slice(&width.to_be_bytes());
    body.extend_from_slice(&height.to_be_bytes());
    body.extend_from_slice(&[depth, color, 0, 0, interlace]);
    body
}

/// A whole file: signature, the header, `extra` chunks in order, one
/// IDAT holding the compressed `scanlines` and IEND
pub fn build_png(header: &[u8], extra: &[(&[u8; 4], &[u8])], scanlines: &[u8]) -> Vec<u8> {
    let mut out = SIGNATURE.to_vec();

    write_chunk(&mut out, b"IHDR", header);

    for (chunk, body) in extra {
        write_chunk(&mut out, chunk, body);
    }
    write_chunk(&mut out, b"IDAT", &zlib(scanlines));
    write_chunk(&mut out, b"IEND", &[]);
    out
}

/// Encode raw samples with the png crate
pub fn encode_ref(
    width: u32, height: u32, color: png::ColorType, depth: png::BitDepth,
    filter: png::FilterType, palette: Option<Vec<u8>>, data: &[u8]
) -> Vec<u8> {
    let mut output = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut output, width, height);
        encoder.set_color(color);
        encoder.set_depth(depth);
        encoder.set_filter(filter);

        if let Some(palette) = palette {
            encoder.set_palette(palette);
        }
        let mut writer = encoder.write_header().unwrap();
        writer.write_image_data(data).unwrap();
    }
    output
}

/// Decode with the png crate, expanded to eight bits and converted
/// to packed pixels
pub fn decode_ref(data: &[u8]) -> Vec<u32> {
    let mut decoder = png::Decoder::new(data);
    decoder.set_transformations(png::Transformations::EXPAND);

    let mut reader = decoder.read_info().unwrap();

    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf).unwrap();
    buf.truncate(info.buffer_size());

    match info.color_type {
        png::ColorType::Grayscale => buf.iter().map(|x| pack(*x, *x, *x, 255)).collect(),
        png::ColorType::GrayscaleAlpha => buf
            .chunks_exact(2)
            .map(|x| pack(x[0], x[0], x[0], x[1]))
            .collect(),
        png::ColorType::Rgb => buf
            .chunks_exact(3)
            .map(|x| pack(x[0], x[1], x[2], 255))
            .collect(),
        png::ColorType::Rgba => buf
            .chunks_exact(4)
            .map(|x| pack(x[0], x[1], x[2], x[3]))
            .collect(),
        png::ColorType::Indexed => unreachable!("EXPAND removes palettes")
    }
}
