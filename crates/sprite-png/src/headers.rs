/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::io::Read;

use log::{info, warn};

use crate::chunks::PngChunk;
use crate::constants::IHDR_LENGTH;
use crate::decoder::PngDecoder;
use crate::enums::{InterlaceMethod, PngColor};
use crate::error::PngDecodeErrors;
use crate::pixel::pack;
use crate::unpack::SampleDepth;

pub(crate) mod writers;

impl<R: Read> PngDecoder<R> {
    pub(crate) fn parse_ihdr(&mut self, chunk: PngChunk) -> Result<(), PngDecodeErrors> {
        if chunk.data.len() != IHDR_LENGTH {
            return Err(PngDecodeErrors::BadHeaderLength(chunk.data.len()));
        }
        let data = &chunk.data;

        let width = u32::from_be_bytes([data[0], data[1], data[2], data[3]]) as usize;
        let height = u32::from_be_bytes([data[4], data[5], data[6], data[7]]) as usize;

        if width == 0 || height == 0 {
            return Err(PngDecodeErrors::ZeroDimensions);
        }
        if width > self.options.get_max_width() {
            return Err(PngDecodeErrors::TooLargeDimensions(
                "width",
                width,
                self.options.get_max_width()
            ));
        }
        if height > self.options.get_max_height() {
            return Err(PngDecodeErrors::TooLargeDimensions(
                "height",
                height,
                self.options.get_max_height()
            ));
        }

        let depth = data[8];

        if SampleDepth::from_int(depth).is_none() {
            return Err(PngDecodeErrors::UnsupportedDepth(depth));
        }
        let color =
            PngColor::from_int(data[9]).ok_or(PngDecodeErrors::UnsupportedColor(data[9]))?;

        if data[10] != 0 {
            return Err(PngDecodeErrors::UnsupportedCompression(data[10]));
        }
        if data[11] != 0 {
            return Err(PngDecodeErrors::UnsupportedFilterMethod(data[11]));
        }
        let interlace_method = InterlaceMethod::from_int(data[12])
            .ok_or(PngDecodeErrors::UnsupportedInterlace(data[12]))?;

        if self.options.get_strict_mode() && !color.allows_depth(depth) {
            return Err(PngDecodeErrors::InvalidDepthForColor(depth, color.to_int()));
        }

        self.png_info.width = width;
        self.png_info.height = height;
        self.png_info.depth = depth;
        self.png_info.color = color;
        self.png_info.component = color.num_components();
        self.png_info.interlace_method = interlace_method;

        info!("Width: {width}");
        info!("Height: {height}");
        info!("Depth: {depth}");
        info!("Color type: {color:?}");
        info!("Interlace: {interlace_method:?}");

        self.seen_hdr = true;

        Ok(())
    }

    pub(crate) fn parse_plte(&mut self, chunk: PngChunk) -> Result<(), PngDecodeErrors> {
        if !self.png_info.color.is_indexed() {
            return self.warn_or_error(
                "PLTE chunk in an image without an indexed color type, ignoring".to_string()
            );
        }
        let remainder = chunk.data.len() % 3;

        if remainder != 0 {
            let msg = format!(
                "PLTE length {} is not a multiple of 3, dropping {remainder} trailing bytes",
                chunk.data.len()
            );
            self.warn_or_error(msg)?;
        }
        // palette entries are always opaque
        self.palette = chunk
            .data
            .chunks_exact(3)
            .map(|x| pack(x[0], x[1], x[2], 255))
            .collect();

        Ok(())
    }

    /// Log a recoverable problem, or fail with it in strict mode
    pub(crate) fn warn_or_error(&self, msg: String) -> Result<(), PngDecodeErrors> {
        if self.options.get_strict_mode() {
            return Err(PngDecodeErrors::Generic(msg));
        }
        warn!("{msg}");
        Ok(())
    }
}
