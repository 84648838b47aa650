/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Turning decompressed scanlines into pixels
use log::warn;

use crate::enums::{FilterMethod, PngColor};
use crate::error::PngDecodeErrors;
use crate::filters::{defilter_row, Neighbours, RECONSTRUCTORS};
use crate::image::ImageBuffer;
use crate::interlace::PassGeometry;
use crate::pixel::pack;
use crate::unpack::{row_bytes, unpack_sample, SampleDepth};

/// Per decode state carried from one scanline to the next
pub(crate) struct ReconstructContext<'a> {
    data:      &'a [u8],
    cursor:    usize,
    palette:   &'a [u32],
    color:     PngColor,
    depth:     SampleDepth,
    strict:    bool,
    histogram: [usize; 5],
    prev_row:  Vec<u8>
}

impl<'a> ReconstructContext<'a> {
    pub fn new(
        data: &'a [u8], palette: &'a [u32], color: PngColor, depth: SampleDepth, strict: bool
    ) -> ReconstructContext<'a> {
        ReconstructContext {
            data,
            cursor: 0,
            palette,
            color,
            depth,
            strict,
            histogram: [0; 5],
            prev_row: Vec::new()
        }
    }

    /// Number of rows seen per filter type
    pub const fn histogram(&self) -> [usize; 5] {
        self.histogram
    }

    /// Bytes of decompressed data not consumed by any scanline
    pub fn remaining(&self) -> usize {
        self.data.len() - self.cursor
    }

    fn take(&mut self, length: usize) -> Result<&'a [u8], PngDecodeErrors> {
        let data: &'a [u8] = self.data;

        let bytes = data
            .get(self.cursor..self.cursor + length)
            .ok_or(PngDecodeErrors::InsufficientData(
                "scanline data ended before the image was complete"
            ))?;
        self.cursor += length;
        Ok(bytes)
    }

    /// Reconstruct every scanline of `pass`, writing pixels into `image`
    pub fn decode_pass(
        &mut self, pass: &PassGeometry, image: &mut ImageBuffer
    ) -> Result<(), PngDecodeErrors> {
        let row_length = row_bytes(pass.width, self.color.num_components(), self.depth)
            .ok_or(PngDecodeErrors::GenericStatic("Scanline size overflows"))?;

        // sub-byte rows are filtered on whole bytes
        let bytewise = !self.color.is_indexed() && self.depth != SampleDepth::Eight;

        self.prev_row.clear();
        self.prev_row.resize(row_length, 0);

        for y in 0..pass.height {
            let filter_byte = self.take(1)?[0];

            let filter = FilterMethod::from_int(filter_byte)
                .ok_or(PngDecodeErrors::UnknownFilter(filter_byte))?;

            self.histogram[usize::from(filter_byte)] += 1;

            let row = self.take(row_length)?;

            if self.color.is_indexed() {
                if filter != FilterMethod::None {
                    let msg = format!("Ignoring filter type {filter_byte} on indexed row {y}");

                    if self.strict {
                        return Err(PngDecodeErrors::Generic(msg));
                    }
                    warn!("{msg}");
                }
                self.indexed_row(row, pass, y, image)?;
            } else if bytewise {
                let mut current = row.to_vec();
                defilter_row(filter, &self.prev_row, &mut current);
                self.sample_row(&current, pass, y, image)?;
                self.prev_row = current;
            } else {
                self.filtered_row(filter, row, pass, y, image)?;
            }
        }
        Ok(())
    }

    /// Combine the samples of one pixel into a packed pixel
    fn compose(&self, row: &[u8], x: usize) -> Option<u32> {
        let components = self.color.num_components();
        let first = x * components;
        let sample = |c: usize| unpack_sample(row, self.depth, first + c);

        let pixel = match self.color {
            PngColor::Luma | PngColor::Palette => {
                let l = sample(0)?;
                pack(l, l, l, 0)
            }
            PngColor::LumaA => {
                let l = sample(0)?;
                pack(l, l, l, sample(1)?)
            }
            PngColor::RGB => pack(sample(0)?, sample(1)?, sample(2)?, 0),
            PngColor::RGBA => pack(sample(0)?, sample(1)?, sample(2)?, sample(3)?)
        };
        Some(pixel)
    }

    #[inline]
    fn finish_pixel(&self, pixel: u32) -> u32 {
        if self.color.has_alpha() {
            pixel
        } else {
            pixel | 0xFF
        }
    }

    /// Eight bit rows, reconstructed a pixel at a time from
    /// neighbours already written to `image`
    fn filtered_row(
        &self, filter: FilterMethod, row: &[u8], pass: &PassGeometry, y: usize,
        image: &mut ImageBuffer
    ) -> Result<(), PngDecodeErrors> {
        let reconstruct = RECONSTRUCTORS[usize::from(filter.to_int())];

        let mut left = 0;
        let mut upper_left = 0;

        for x in 0..pass.width {
            let value = self.compose(row, x).ok_or(PngDecodeErrors::InsufficientData(
                "scanline shorter than its width"
            ))?;
            let (px, py) = pass.coord_transform(x, y);

            let above = if y > 0 {
                let (ax, ay) = pass.coord_transform(x, y - 1);
                image.get(ax, ay)
            } else {
                0
            };
            let neighbours = Neighbours {
                left,
                above,
                upper_left
            };
            // lanes never mix, so forcing alpha does not disturb the
            // colour lanes later pixels are predicted from
            let pixel = self.finish_pixel(reconstruct(value, neighbours));

            left = pixel;
            upper_left = above;

            image.set(px, py, pixel);
        }
        Ok(())
    }

    /// Rows already defiltered, only the samples need unpacking
    fn sample_row(
        &self, row: &[u8], pass: &PassGeometry, y: usize, image: &mut ImageBuffer
    ) -> Result<(), PngDecodeErrors> {
        for x in 0..pass.width {
            let value = self.compose(row, x).ok_or(PngDecodeErrors::InsufficientData(
                "scanline shorter than its width"
            ))?;
            let (px, py) = pass.coord_transform(x, y);
            image.set(px, py, self.finish_pixel(value));
        }
        Ok(())
    }

    fn indexed_row(
        &self, row: &[u8], pass: &PassGeometry, y: usize, image: &mut ImageBuffer
    ) -> Result<(), PngDecodeErrors> {
        for x in 0..pass.width {
            let index = usize::from(unpack_sample(row, self.depth, x).ok_or(
                PngDecodeErrors::InsufficientData("scanline shorter than its width")
            )?);
            let entry = *self
                .palette
                .get(index)
                .ok_or(PngDecodeErrors::PaletteIndexOutOfRange(
                    index,
                    self.palette.len()
                ))?;
            let (px, py) = pass.coord_transform(x, y);
            image.set(px, py, entry);
        }
        Ok(())
    }
}
