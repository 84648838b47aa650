/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Chunk framing
//!
//! A chunk is laid out as
//!
//! `length (u32 be) - chunk type (4 bytes) - [data] - crc (u32 be)`
//!
//! with the crc covering the chunk type and the data
use std::io::{Read, Write};

use flate2::Crc;
use log::trace;
use sprite_core::bytestream::{ByteReader, ByteWriter};

use crate::enums::PngChunkType;
use crate::error::{PngDecodeErrors, PngEncodeErrors};

/// A chunk read from a stream
pub(crate) struct PngChunk {
    pub chunk:      [u8; 4],
    pub chunk_type: PngChunkType,
    pub data:       Vec<u8>
}

/// CRC-32 of the chunk type followed by the chunk data
pub(crate) fn calc_crc(chunk: &[u8; 4], data: &[u8]) -> u32 {
    let mut crc = Crc::new();
    crc.update(chunk);
    crc.update(data);
    crc.sum()
}

/// Read one whole chunk from the stream.
///
/// The stored crc is only compared against the data when `confirm_crc`
/// is set.
pub(crate) fn read_chunk<R: Read>(
    stream: &mut ByteReader<R>, confirm_crc: bool
) -> Result<PngChunk, PngDecodeErrors> {
    let length = stream.get_u32_be_err()? as usize;
    let chunk = stream.read_fixed_bytes_or_error::<4>()?;
    let data = stream.read_vec(length)?;
    let crc = stream.get_u32_be_err()?;

    let chunk_type = PngChunkType::from_bytes(&chunk);

    trace!(
        "Read chunk {:?}, length {length}",
        String::from_utf8_lossy(&chunk)
    );

    if confirm_crc {
        let calculated = calc_crc(&chunk, &data);

        if calculated != crc {
            return Err(PngDecodeErrors::BadCrc(crc, calculated));
        }
    }
    Ok(PngChunk {
        chunk,
        chunk_type,
        data
    })
}

/// Write `data` framed as a chunk of type `chunk`
pub(crate) fn write_chunk<W: Write>(
    writer: &mut ByteWriter<W>, chunk: &[u8; 4], data: &[u8]
) -> Result<(), PngEncodeErrors> {
    let length =
        u32::try_from(data.len()).map_err(|_| PngEncodeErrors::ChunkTooLarge(data.len()))?;

    trace!(
        "Writing chunk {:?}, length {length}",
        String::from_utf8_lossy(chunk)
    );

    writer.write_u32_be_err(length)?;
    writer.write_all(chunk)?;
    writer.write_all(data)?;
    writer.write_u32_be_err(calc_crc(chunk, data))?;

    Ok(())
}
