/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible when decoding, encoding or manipulating images
use core::fmt::{Debug, Display, Formatter};

use sprite_core::bytestream::ByteIoError;

/// Possible errors that may occur during decoding
///
/// Everything except [`IoErrors`](PngDecodeErrors::IoErrors) is a problem
/// with the data itself, `IoErrors` means the underlying reader failed.
pub enum PngDecodeErrors {
    /// The stream does not start with the png signature
    BadSignature,
    /// The first chunk was not a header chunk, carries the type found
    FirstChunkNotHeader([u8; 4]),
    /// The header chunk body was not 13 bytes long
    BadHeaderLength(usize),
    /// Width or height is zero
    ZeroDimensions,
    /// A dimension exceeded the configured limits
    ///
    /// # Arguments
    /// - 1st argument is the name of the dimension
    /// - 2nd argument is the value found
    /// - 3rd argument is the configured limit
    TooLargeDimensions(&'static str, usize, usize),
    UnsupportedDepth(u8),
    UnsupportedColor(u8),
    UnsupportedCompression(u8),
    UnsupportedFilterMethod(u8),
    UnsupportedInterlace(u8),
    /// The combination of depth and colour type is not allowed,
    /// only reported in strict mode
    InvalidDepthForColor(u8, u8),
    /// A scanline started with an unknown filter type
    UnknownFilter(u8),
    /// The decompressed data ran out before the image was complete
    InsufficientData(&'static str),
    /// An indexed image had no palette
    EmptyPalette,
    /// A sample referenced a palette entry that does not exist
    ///
    /// # Arguments
    /// - 1st argument is the index found
    /// - 2nd argument is the palette length
    PaletteIndexOutOfRange(usize, usize),
    /// Chunk checksum mismatch, only reported when crc checking is enabled
    ///
    /// # Arguments
    /// - 1st argument is the stored crc
    /// - 2nd argument is the calculated crc
    BadCrc(u32, u32),
    ZlibDecodeErrors(String),
    Generic(String),
    GenericStatic(&'static str),
    /// The underlying reader failed
    IoErrors(ByteIoError)
}

impl Debug for PngDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::BadSignature => writeln!(f, "Bad PNG signature, not a png"),
            Self::FirstChunkNotHeader(chunk) => writeln!(
                f,
                "First chunk not IHDR but {:?}, corrupt PNG",
                String::from_utf8_lossy(chunk)
            ),
            Self::BadHeaderLength(length) => {
                writeln!(f, "Bad IHDR length {length}, expected 13")
            }
            Self::ZeroDimensions => writeln!(f, "Width or height cannot be zero"),
            Self::TooLargeDimensions(name, found, limit) => writeln!(
                f,
                "Image {name} {found}, larger than maximum configured {name} {limit}, aborting"
            ),
            Self::UnsupportedDepth(depth) => {
                if *depth == 16 {
                    writeln!(f, "16-bit color depth is not supported")
                } else {
                    writeln!(f, "Unsupported bit depth {depth}")
                }
            }
            Self::UnsupportedColor(color) => writeln!(f, "Unsupported color type {color}"),
            Self::UnsupportedCompression(method) => {
                writeln!(f, "Unsupported compression method {method}")
            }
            Self::UnsupportedFilterMethod(method) => {
                writeln!(f, "Unsupported filter method {method}")
            }
            Self::UnsupportedInterlace(method) => {
                writeln!(f, "Unsupported interlace method {method}")
            }
            Self::InvalidDepthForColor(depth, color) => writeln!(
                f,
                "Bit depth {depth} is not allowed for color type {color}"
            ),
            Self::UnknownFilter(filter) => writeln!(f, "Unknown filter type {filter}"),
            Self::InsufficientData(reason) => writeln!(f, "Insufficient data, {reason}"),
            Self::EmptyPalette => writeln!(f, "Indexed image without a PLTE chunk"),
            Self::PaletteIndexOutOfRange(index, len) => writeln!(
                f,
                "Palette index {index} out of range for palette with {len} entries"
            ),
            Self::BadCrc(expected, found) => writeln!(
                f,
                "CRC does not match, expected {expected:#010x} but found {found:#010x}"
            ),
            Self::ZlibDecodeErrors(err) => writeln!(f, "Error decoding idat chunks {err}"),
            Self::Generic(val) => writeln!(f, "{val}"),
            Self::GenericStatic(val) => writeln!(f, "{val}"),
            Self::IoErrors(err) => writeln!(f, "I/O error {err:?}")
        }
    }
}

impl Display for PngDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

impl std::error::Error for PngDecodeErrors {}

impl From<ByteIoError> for PngDecodeErrors {
    fn from(value: ByteIoError) -> Self {
        match value {
            // the stream ended early, that is a problem with the data
            ByteIoError::NotEnoughBytes(_, _) => {
                Self::InsufficientData("stream ended before the image was complete")
            }
            err => Self::IoErrors(err)
        }
    }
}

impl From<flate2::DecompressError> for PngDecodeErrors {
    fn from(value: flate2::DecompressError) -> Self {
        Self::ZlibDecodeErrors(value.to_string())
    }
}

/// Errors encountered during encoding
pub enum PngEncodeErrors {
    /// A dimension does not fit the header's 32 bit field
    TooLargeDimensions(usize),
    /// A chunk body does not fit the 32 bit length field
    ChunkTooLarge(usize),
    IoError(ByteIoError)
}

impl Debug for PngEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::TooLargeDimensions(found) => writeln!(
                f,
                "Too large image dimensions {found}, PNG can only encode dimensions up to {}",
                u32::MAX
            ),
            Self::ChunkTooLarge(length) => {
                writeln!(f, "Chunk of {length} bytes does not fit a PNG chunk")
            }
            Self::IoError(err) => writeln!(f, "I/O error {err:?}")
        }
    }
}

impl Display for PngEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

impl std::error::Error for PngEncodeErrors {}

impl From<ByteIoError> for PngEncodeErrors {
    fn from(value: ByteIoError) -> Self {
        Self::IoError(value)
    }
}

impl From<std::io::Error> for PngEncodeErrors {
    fn from(value: std::io::Error) -> Self {
        Self::IoError(ByteIoError::StdIoError(value))
    }
}

/// Errors from image buffer operations
pub enum ImageErrors {
    /// Width or height of a new buffer is zero
    ZeroDimensions(usize, usize),
    /// The number of pixels supplied does not match the dimensions
    ///
    /// # Arguments
    /// - 1st argument is the expected count
    /// - 2nd argument is the count found
    PixelCountMismatch(usize, usize),
    /// A region does not fit inside a buffer
    RegionOutOfBounds {
        x:             usize,
        y:             usize,
        width:         usize,
        height:        usize,
        buffer_width:  usize,
        buffer_height: usize
    }
}

impl Debug for ImageErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::ZeroDimensions(width, height) => writeln!(
                f,
                "Image dimensions must be greater than zero, found {width}x{height}"
            ),
            Self::PixelCountMismatch(expected, found) => writeln!(
                f,
                "Expected {expected} pixels but found {found}"
            ),
            Self::RegionOutOfBounds {
                x,
                y,
                width,
                height,
                buffer_width,
                buffer_height
            } => writeln!(
                f,
                "Region {width}x{height} at ({x},{y}) does not fit in a {buffer_width}x{buffer_height} image"
            )
        }
    }
}

impl Display for ImageErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

impl std::error::Error for ImageErrors {}
