/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Pass layout for progressive (Adam7) images
use log::debug;

use crate::enums::InterlaceMethod;
use crate::error::PngDecodeErrors;

/// `(x offset, x stride, y offset, y stride)` of each of the seven passes
const ADAM7: [(usize, usize, usize, usize); 7] = [
    (0, 8, 0, 8),
    (4, 8, 0, 8),
    (0, 4, 4, 8),
    (2, 4, 0, 4),
    (0, 2, 2, 4),
    (1, 2, 0, 2),
    (0, 1, 1, 2)
];

/// A sub-image whose pixels are spread across the full image on a grid
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct PassGeometry {
    pub width:    usize,
    pub height:   usize,
    pub x_offset: usize,
    pub x_stride: usize,
    pub y_offset: usize,
    pub y_stride: usize
}

impl PassGeometry {
    /// A single pass covering the whole image
    pub const fn full(width: usize, height: usize) -> PassGeometry {
        PassGeometry {
            width,
            height,
            x_offset: 0,
            x_stride: 1,
            y_offset: 0,
            y_stride: 1
        }
    }
    pub const fn pixel_count(&self) -> usize {
        self.width * self.height
    }
    /// A pass with no pixels stores no scanlines
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
    /// Map a coordinate inside the pass to one inside the image
    #[inline(always)]
    pub const fn coord_transform(&self, x: usize, y: usize) -> (usize, usize) {
        (self.x_offset + x * self.x_stride, self.y_offset + y * self.y_stride)
    }
}

const fn pass_extent(extent: usize, offset: usize, stride: usize) -> usize {
    if extent <= offset {
        0
    } else {
        (extent - offset + stride - 1) / stride
    }
}

/// The seven Adam7 passes of a `width x height` image, empty ones included
pub fn adam7_passes(width: usize, height: usize) -> [PassGeometry; 7] {
    ADAM7.map(|(x_offset, x_stride, y_offset, y_stride)| PassGeometry {
        width: pass_extent(width, x_offset, x_stride),
        height: pass_extent(height, y_offset, y_stride),
        x_offset,
        x_stride,
        y_offset,
        y_stride
    })
}

/// The non-empty passes to decode, in stream order
pub(crate) fn passes(
    width: usize, height: usize, interlace: InterlaceMethod
) -> Result<Vec<PassGeometry>, PngDecodeErrors> {
    match interlace {
        InterlaceMethod::Standard => Ok(vec![PassGeometry::full(width, height)]),
        InterlaceMethod::Adam7 => {
            let passes = adam7_passes(width, height);

            let covered: usize = passes.iter().map(PassGeometry::pixel_count).sum();

            if width.checked_mul(height) != Some(covered) {
                return Err(PngDecodeErrors::Generic(format!(
                    "Interlace passes cover {covered} pixels of a {width}x{height} image"
                )));
            }
            for (i, pass) in passes.iter().enumerate() {
                debug!("Pass {}: {}x{}", i + 1, pass.width, pass.height);
            }
            Ok(passes.into_iter().filter(|x| !x.is_empty()).collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passes_cover_the_image() {
        for width in 1..40 {
            for height in 1..40 {
                let total: usize = adam7_passes(width, height)
                    .iter()
                    .map(PassGeometry::pixel_count)
                    .sum();
                assert_eq!(total, width * height, "{width}x{height}");
            }
        }
    }

    #[test]
    fn passes_touch_every_pixel_once() {
        let (width, height) = (13, 11);
        let mut seen = vec![0; width * height];

        for pass in adam7_passes(width, height) {
            for y in 0..pass.height {
                for x in 0..pass.width {
                    let (px, py) = pass.coord_transform(x, y);
                    seen[py * width + px] += 1;
                }
            }
        }
        assert!(seen.iter().all(|x| *x == 1));
    }

    #[test]
    fn single_pixel_has_one_pass() {
        let passes = passes(1, 1, InterlaceMethod::Adam7).unwrap();
        assert_eq!(passes.len(), 1);
        assert_eq!(passes[0].pixel_count(), 1);
    }

    #[test]
    fn eight_by_eight_pass_sizes() {
        let sizes: Vec<(usize, usize)> = adam7_passes(8, 8)
            .iter()
            .map(|x| (x.width, x.height))
            .collect();
        assert_eq!(
            sizes,
            [(1, 1), (1, 1), (2, 1), (2, 2), (4, 2), (4, 4), (8, 4)]
        );
    }

    #[test]
    fn standard_is_identity() {
        let passes = passes(5, 3, InterlaceMethod::Standard).unwrap();
        assert_eq!(passes, [PassGeometry::full(5, 3)]);
        assert_eq!(passes[0].coord_transform(4, 2), (4, 2));
    }
}
