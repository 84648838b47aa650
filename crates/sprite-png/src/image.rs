/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! An owned grid of packed pixels
//!
//! Decoding produces an [`ImageBuffer`], encoding consumes one, and
//! tooling builds new images by pasting regions of one buffer into another.
use std::io::Write;

use crate::error::ImageErrors;
use crate::pixel::{alpha, alpha_composite};

/// A quarter turn
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Rotation {
    /// One quarter turn clockwise, `+1`
    Clockwise,
    /// One quarter turn counter clockwise, `-1`
    CounterClockwise
}

impl Rotation {
    /// Map `+1` and `-1` quarter turns to a rotation
    pub const fn from_int(quarter_turns: i32) -> Option<Rotation> {
        match quarter_turns {
            1 => Some(Rotation::Clockwise),
            -1 => Some(Rotation::CounterClockwise),
            _ => None
        }
    }
}

/// A rectangle inside an image
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Region {
    pub x:      usize,
    pub y:      usize,
    pub width:  usize,
    pub height: usize
}

impl Region {
    pub const fn new(x: usize, y: usize, width: usize, height: usize) -> Region {
        Region {
            x,
            y,
            width,
            height
        }
    }

    fn check_fits(&self, width: usize, height: usize) -> Result<(), ImageErrors> {
        let fits_x = self.x.checked_add(self.width).map_or(false, |end| end <= width);
        let fits_y = self.y.checked_add(self.height).map_or(false, |end| end <= height);

        if fits_x && fits_y {
            return Ok(());
        }
        Err(ImageErrors::RegionOutOfBounds {
            x:             self.x,
            y:             self.y,
            width:         self.width,
            height:        self.height,
            buffer_width:  width,
            buffer_height: height
        })
    }
}

/// Options influencing [`ImageBuffer::paste`]
///
/// The default pastes the largest region that fits both images,
/// from the source's top left corner onto the destination's top left corner.
#[derive(Copy, Clone, Debug, Default)]
pub struct PasteOptions {
    source_x:        usize,
    source_y:        usize,
    dest_x:          usize,
    dest_y:          usize,
    size:            Option<(usize, usize)>,
    flip_horizontal: bool,
    rotation:        Option<Rotation>
}

impl PasteOptions {
    pub fn new() -> PasteOptions {
        PasteOptions::default()
    }
    /// Top left corner of the region read from the source image
    pub fn set_source_offset(mut self, x: usize, y: usize) -> Self {
        self.source_x = x;
        self.source_y = y;
        self
    }
    /// Top left corner in the destination image where the region lands
    pub fn set_dest_offset(mut self, x: usize, y: usize) -> Self {
        self.dest_x = x;
        self.dest_y = y;
        self
    }
    /// Size of the region taken from the source image
    ///
    /// When not set, the largest region that fits both images is used
    pub fn set_size(mut self, width: usize, height: usize) -> Self {
        self.size = Some((width, height));
        self
    }
    /// Mirror the region left to right before pasting
    pub fn set_flip_horizontal(mut self, yes: bool) -> Self {
        self.flip_horizontal = yes;
        self
    }
    /// Rotate the region by a quarter turn before pasting,
    /// this happens after the optional flip
    pub fn set_rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = Some(rotation);
        self
    }
}

/// A `width x height` grid of packed `0xRRGGBBAA` pixels in row major order
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ImageBuffer {
    width:  usize,
    height: usize,
    pixels: Vec<u32>
}

impl ImageBuffer {
    /// Create a new image with every pixel set to `0`, transparent black
    ///
    /// # Errors
    /// If either dimension is zero
    pub fn new(width: usize, height: usize) -> Result<ImageBuffer, ImageErrors> {
        let size = match width.checked_mul(height) {
            Some(0) | None => return Err(ImageErrors::ZeroDimensions(width, height)),
            Some(size) => size
        };
        Ok(ImageBuffer {
            width,
            height,
            pixels: vec![0; size]
        })
    }

    /// Create an image from row major pixels
    ///
    /// # Errors
    /// If either dimension is zero or `pixels` does not hold exactly
    /// `width*height` values
    pub fn from_pixels(
        width: usize, height: usize, pixels: Vec<u32>
    ) -> Result<ImageBuffer, ImageErrors> {
        let mut image = ImageBuffer::new(width, height)?;

        if pixels.len() != image.pixels.len() {
            return Err(ImageErrors::PixelCountMismatch(
                image.pixels.len(),
                pixels.len()
            ));
        }
        image.pixels = pixels;
        Ok(image)
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    /// Return `(width, height)`
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// The row major backing pixels
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [u32] {
        &mut self.pixels
    }

    #[inline(always)]
    fn index(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.width && y < self.height,
            "Pixel ({x},{y}) out of bounds for a {}x{} image",
            self.width,
            self.height
        );
        y * self.width + x
    }

    /// Return the pixel at `(x, y)`
    ///
    /// # Panics
    /// If the coordinate lies outside the image
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u32 {
        self.pixels[self.index(x, y)]
    }

    /// Overwrite the pixel at `(x, y)`
    ///
    /// # Panics
    /// If the coordinate lies outside the image
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: u32) {
        let index = self.index(x, y);
        self.pixels[index] = value;
    }

    /// Copy the whole image
    pub fn copy(&self) -> ImageBuffer {
        self.clone()
    }

    /// Copy a rectangular region into a new image
    ///
    /// # Errors
    /// If the region is empty or does not fit this image
    pub fn copy_region(&self, region: Region) -> Result<ImageBuffer, ImageErrors> {
        region.check_fits(self.width, self.height)?;

        let mut out = ImageBuffer::new(region.width, region.height)?;

        for (out_row, in_row) in out
            .pixels
            .chunks_exact_mut(region.width)
            .zip(self.pixels.chunks_exact(self.width).skip(region.y))
        {
            out_row.copy_from_slice(&in_row[region.x..region.x + region.width]);
        }
        Ok(out)
    }

    /// Mirror the image left to right in place
    pub fn flip_horizontal(&mut self) {
        for row in self.pixels.chunks_exact_mut(self.width) {
            row.reverse();
        }
    }

    /// Rotate the image by a quarter turn.
    ///
    /// Square images are rotated in place by cycling four cells at a time,
    /// other shapes go through a transposed copy and swap width and height.
    pub fn rotate(&mut self, rotation: Rotation) {
        if self.width == self.height {
            self.rotate_square(rotation);
        } else {
            self.rotate_rectangle(rotation);
        }
    }

    fn rotate_square(&mut self, rotation: Rotation) {
        let n = self.width;
        // for odd sizes the centre cell maps to itself and is never visited
        for y in 0..n / 2 {
            let y2 = n - 1 - y;

            for x in 0..(n + 1) / 2 {
                let x2 = n - 1 - x;
                let tmp = self.get(x, y);

                match rotation {
                    Rotation::Clockwise => {
                        self.set(x, y, self.get(y, x2));
                        self.set(y, x2, self.get(x2, y2));
                        self.set(x2, y2, self.get(y2, x));
                        self.set(y2, x, tmp);
                    }
                    Rotation::CounterClockwise => {
                        self.set(x, y, self.get(y2, x));
                        self.set(y2, x, self.get(x2, y2));
                        self.set(x2, y2, self.get(y, x2));
                        self.set(y, x2, tmp);
                    }
                }
            }
        }
    }

    fn rotate_rectangle(&mut self, rotation: Rotation) {
        let (old_width, old_height) = (self.width, self.height);
        let mut out = vec![0; self.pixels.len()];

        // new image is old_height wide
        for (y, out_row) in out.chunks_exact_mut(old_height).enumerate() {
            for (x, out_px) in out_row.iter_mut().enumerate() {
                let (in_x, in_y) = match rotation {
                    Rotation::Clockwise => (y, old_height - 1 - x),
                    Rotation::CounterClockwise => (old_width - 1 - y, x)
                };
                *out_px = self.pixels[in_y * old_width + in_x];
            }
        }
        self.pixels = out;
        self.width = old_height;
        self.height = old_width;
    }

    /// Paste a region of `source` into this image.
    ///
    /// When a flip or rotation is requested the region is first copied and
    /// transformed, `source` is never modified. Each pasted pixel follows
    /// its alpha: fully transparent pixels leave the destination alone,
    /// fully opaque ones overwrite it and the rest are composited over it
    /// with [`alpha_composite`].
    ///
    /// # Errors
    /// If an explicitly sized region does not fit the source, or its
    /// (possibly rotated) extent does not fit this image. Without an explicit
    /// size the region is clipped to what fits, which may be nothing at all.
    pub fn paste(&mut self, source: &ImageBuffer, options: PasteOptions) -> Result<(), ImageErrors> {
        let (source_x, source_y) = (options.source_x, options.source_y);
        let (dest_x, dest_y) = (options.dest_x, options.dest_y);

        let (width, height) = match options.size {
            Some((width, height)) => {
                Region::new(source_x, source_y, width, height)
                    .check_fits(source.width, source.height)?;
                (width, height)
            }
            None => (
                self.width
                    .saturating_sub(dest_x)
                    .min(source.width.saturating_sub(source_x)),
                self.height
                    .saturating_sub(dest_y)
                    .min(source.height.saturating_sub(source_y))
            )
        };
        if width == 0 || height == 0 {
            return Ok(());
        }

        let transformed;
        // a rotation swaps the extent, the transformed copy carries the right one
        let (src, src_x, src_y, mut paste_width, mut paste_height) =
            if options.flip_horizontal || options.rotation.is_some() {
                let mut region =
                    source.copy_region(Region::new(source_x, source_y, width, height))?;

                if options.flip_horizontal {
                    region.flip_horizontal();
                }
                if let Some(rotation) = options.rotation {
                    region.rotate(rotation);
                }
                transformed = region;
                (&transformed, 0, 0, transformed.width, transformed.height)
            } else {
                (source, source_x, source_y, width, height)
            };

        let dest_region = Region::new(dest_x, dest_y, paste_width, paste_height);

        if let Err(err) = dest_region.check_fits(self.width, self.height) {
            if options.size.is_some() {
                return Err(err);
            }
            paste_width = paste_width.min(self.width.saturating_sub(dest_x));
            paste_height = paste_height.min(self.height.saturating_sub(dest_y));
        }

        for y in 0..paste_height {
            let in_start = (src_y + y) * src.width + src_x;
            let out_start = (dest_y + y) * self.width + dest_x;

            let in_row = &src.pixels[in_start..in_start + paste_width];
            let out_row = &mut self.pixels[out_start..out_start + paste_width];

            for (out_px, in_px) in out_row.iter_mut().zip(in_row) {
                match alpha(*in_px) {
                    0 => (),
                    255 => *out_px = *in_px,
                    _ => *out_px = alpha_composite(*in_px, *out_px)
                }
            }
        }
        Ok(())
    }

    /// Write the backing pixels as little endian 32 bit words,
    /// row major, with no header
    pub fn write_le_dump<W: Write>(&self, mut writer: W) -> std::io::Result<()> {
        if cfg!(target_endian = "little") {
            writer.write_all(bytemuck::cast_slice(&self.pixels))
        } else {
            for pixel in &self.pixels {
                writer.write_all(&pixel.to_le_bytes())?;
            }
            Ok(())
        }
    }
}
