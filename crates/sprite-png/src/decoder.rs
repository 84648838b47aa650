/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::io::Read;

use log::debug;
use sprite_core::bytestream::{ByteIoError, ByteReader};
use sprite_core::options::DecoderOptions;

use crate::chunks::read_chunk;
use crate::constants::PNG_SIGNATURE;
use crate::enums::{InterlaceMethod, PngChunkType, PngColor};
use crate::error::PngDecodeErrors;
use crate::image::ImageBuffer;
use crate::inflate::StreamingInflater;
use crate::interlace::passes;
use crate::reconstruct::ReconstructContext;
use crate::unpack::{row_bytes, SampleDepth};

/// Information read from the header chunk
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct PngInfo {
    pub width:            usize,
    pub height:           usize,
    /// Bits per sample, one of 1, 2, 4 or 8
    pub depth:            u8,
    pub color:            PngColor,
    /// Samples stored per pixel
    pub component:        usize,
    pub interlace_method: InterlaceMethod
}

/// A PNG decoder
///
/// Reads the image from any [`Read`] implementation, decoding
/// into an [`ImageBuffer`] of packed `0xRRGGBBAA` pixels.
///
/// # Example
/// Read only the headers
/// ```no_run
/// use sprite_png::PngDecoder;
///
/// let file = std::fs::File::open("image.png").unwrap();
/// let mut decoder = PngDecoder::new(std::io::BufReader::new(file));
///
/// decoder.decode_headers().unwrap();
/// let (width, height) = decoder.get_dimensions().unwrap();
/// ```
pub struct PngDecoder<R: Read> {
    pub(crate) seen_hdr:  bool,
    pub(crate) decoded:   bool,
    pub(crate) stream:    ByteReader<R>,
    pub(crate) options:   DecoderOptions,
    pub(crate) png_info:  PngInfo,
    pub(crate) palette:   Vec<u32>,
    pub(crate) histogram: [usize; 5]
}

impl<R: Read> PngDecoder<R> {
    /// Create a new decoder with default options
    pub fn new(stream: R) -> PngDecoder<R> {
        PngDecoder::new_with_options(stream, DecoderOptions::default())
    }

    pub fn new_with_options(stream: R, options: DecoderOptions) -> PngDecoder<R> {
        PngDecoder {
            seen_hdr: false,
            decoded: false,
            stream: ByteReader::new(stream),
            options,
            png_info: PngInfo::default(),
            palette: Vec::new(),
            histogram: [0; 5]
        }
    }

    /// Get image dimensions or none if they aren't decoded
    pub const fn get_dimensions(&self) -> Option<(usize, usize)> {
        if !self.seen_hdr {
            return None;
        }
        Some((self.png_info.width, self.png_info.height))
    }

    /// Return the header information or `None` if headers
    /// haven't been decoded
    pub const fn get_info(&self) -> Option<&PngInfo> {
        if self.seen_hdr {
            Some(&self.png_info)
        } else {
            None
        }
    }

    /// Rows seen per filter type during the last decode, indexed by the
    /// filter type byte
    pub const fn filter_histogram(&self) -> [usize; 5] {
        self.histogram
    }

    /// Read the signature and the header chunk
    ///
    /// Calling this more than once is a no-op.
    pub fn decode_headers(&mut self) -> Result<(), PngDecodeErrors> {
        if self.seen_hdr {
            return Ok(());
        }
        let signature = match self.stream.read_fixed_bytes_or_error::<8>() {
            Ok(signature) => signature,
            // too short to even hold the signature
            Err(ByteIoError::NotEnoughBytes(_, _)) => return Err(PngDecodeErrors::BadSignature),
            Err(err) => return Err(err.into())
        };
        if signature != PNG_SIGNATURE {
            return Err(PngDecodeErrors::BadSignature);
        }

        let chunk = read_chunk(&mut self.stream, self.options.png_get_confirm_crc())?;

        if chunk.chunk_type != PngChunkType::IHDR {
            return Err(PngDecodeErrors::FirstChunkNotHeader(chunk.chunk));
        }
        self.parse_ihdr(chunk)
    }

    /// Expected size of the decompressed scanlines, filter bytes included
    fn expected_bytes(&self, depth: SampleDepth) -> Result<usize, PngDecodeErrors> {
        let info = &self.png_info;
        let mut size: usize = 0;

        for pass in passes(info.width, info.height, info.interlace_method)? {
            let pass_bytes = row_bytes(pass.width, info.component, depth)
                .and_then(|row| row.checked_add(1))
                .and_then(|row| row.checked_mul(pass.height))
                .and_then(|bytes| bytes.checked_add(size));

            size = pass_bytes.ok_or(PngDecodeErrors::GenericStatic(
                "Image too large, scanline size overflows"
            ))?;
        }
        Ok(size)
    }

    /// Decode the whole image
    ///
    /// The decoder reads its stream once, a second call returns an
    /// error whether or not the first one succeeded.
    ///
    /// # Errors
    /// Any structural problem with the stream, there is no partial result
    pub fn decode(&mut self) -> Result<ImageBuffer, PngDecodeErrors> {
        if self.decoded {
            return Err(PngDecodeErrors::GenericStatic(
                "Image already decoded, create a new decoder to decode again"
            ));
        }
        self.decoded = true;

        self.decode_headers()?;

        let info = self.png_info;
        let depth =
            SampleDepth::from_int(info.depth).ok_or(PngDecodeErrors::UnsupportedDepth(info.depth))?;

        let confirm_crc = self.options.png_get_confirm_crc();
        let expected = self.expected_bytes(depth)?;
        let mut inflater = StreamingInflater::new(expected);

        loop {
            let chunk = read_chunk(&mut self.stream, confirm_crc)?;

            match chunk.chunk_type {
                PngChunkType::IEND => break,
                PngChunkType::PLTE => self.parse_plte(chunk)?,
                PngChunkType::IDAT => inflater.feed(&chunk.data)?,
                PngChunkType::IHDR => {
                    self.warn_or_error("Duplicate IHDR chunk, ignoring".to_string())?;
                }
                PngChunkType::Unknown => {
                    let msg = format!(
                        "Ignoring unsupported chunk {:?}",
                        String::from_utf8_lossy(&chunk.chunk)
                    );
                    self.warn_or_error(msg)?;
                }
            }
        }
        let data = inflater.finish()?;

        debug!("Decompressed {} bytes", data.len());

        if info.color.is_indexed() && self.palette.is_empty() {
            return Err(PngDecodeErrors::EmptyPalette);
        }
        // the image is allocated only once its scanlines are known to be present
        if data.len() < expected {
            return Err(PngDecodeErrors::InsufficientData(
                "decompressed data shorter than the image"
            ));
        }

        let mut image = ImageBuffer::new(info.width, info.height)
            .map_err(|e| PngDecodeErrors::Generic(e.to_string()))?;

        let mut context = ReconstructContext::new(
            &data,
            &self.palette,
            info.color,
            depth,
            self.options.get_strict_mode()
        );

        for pass in passes(info.width, info.height, info.interlace_method)? {
            context.decode_pass(&pass, &mut image)?;
        }

        if context.remaining() != 0 {
            debug!("{} bytes of scanline data left over", context.remaining());
        }
        self.histogram = context.histogram();

        debug!("Filter histogram: {:?}", self.histogram);

        Ok(image)
    }
}

/// Decode a whole image from `stream` with default options
pub fn decode<R: Read>(stream: R) -> Result<ImageBuffer, PngDecodeErrors> {
    PngDecoder::new(stream).decode()
}
