/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

/// Decoder options that are flags
#[derive(Copy, Debug, Clone, Default)]
struct DecoderFlags {
    /// Whether the png decoder should confirm crc
    png_confirm_crc: bool,
    /// Whether recoverable non-conformance becomes an error
    strict_mode:     bool
}

/// Decoder options
///
/// The default options are permissive, chunk checksums are read
/// but not verified and recoverable oddities in a file are
/// logged instead of rejected.
#[derive(Debug, Copy, Clone)]
pub struct DecoderOptions {
    /// Maximum width for which decoders will
    /// not try to decode images larger than
    /// the specified width.
    ///
    /// - Default value: 16384
    max_width:  usize,
    /// Maximum height for which decoders will not
    /// try to decode images larger than the
    /// specified height
    ///
    /// - Default value: 16384
    max_height: usize,
    /// Boolean flags that influence decoding
    flags:      DecoderFlags
}

impl Default for DecoderOptions {
    fn default() -> Self {
        Self {
            max_width:  1 << 14,
            max_height: 1 << 14,
            flags:      DecoderFlags::default()
        }
    }
}

/// Global options respected by all decoders
impl DecoderOptions {
    /// Get maximum width configured for which the decoder
    /// should not try to decode images greater than this width
    pub const fn get_max_width(&self) -> usize {
        self.max_width
    }

    /// Get maximum height configured for which the decoder should
    /// not try to decode images greater than this height
    pub const fn get_max_height(&self) -> usize {
        self.max_height
    }

    /// Return true whether the decoder should be in strict mode
    /// and reject what would otherwise be a logged warning
    pub const fn get_strict_mode(&self) -> bool {
        self.flags.strict_mode
    }

    /// Set maximum width for which the decoder should not try
    /// decoding images greater than that width
    ///
    /// # Arguments
    ///
    /// * `width`:  The maximum width allowed
    pub fn set_max_width(mut self, width: usize) -> Self {
        self.max_width = width;
        self
    }

    /// Set maximum height for which the decoder should not try
    /// decoding images greater than that height
    ///
    /// # Arguments
    ///
    /// * `height`: The maximum height allowed
    pub fn set_max_height(mut self, height: usize) -> Self {
        self.max_height = height;
        self
    }

    /// Set whether the decoder should be in strict mode
    ///
    /// Unexpected chunks, a palette on a non indexed image, filtered indexed rows
    /// and odd bit depth/colour combinations become errors.
    pub fn set_strict_mode(mut self, yes: bool) -> Self {
        self.flags.strict_mode = yes;
        self
    }
}

/// PNG specific options
impl DecoderOptions {
    /// Whether the png decoder should confirm
    /// the CRC-32 trailing each chunk
    pub const fn png_get_confirm_crc(&self) -> bool {
        self.flags.png_confirm_crc
    }
    /// Set whether the png decoder should confirm
    /// the CRC-32 trailing each chunk
    ///
    /// - Default value: false
    pub fn png_set_confirm_crc(mut self, yes: bool) -> Self {
        self.flags.png_confirm_crc = yes;
        self
    }
}
