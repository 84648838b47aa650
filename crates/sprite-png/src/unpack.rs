/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Sample extraction for sub-byte bit depths

/// Bits used by one sample
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SampleDepth {
    One,
    Two,
    Four,
    Eight
}

impl SampleDepth {
    /// Sixteen bit samples are not supported and map to `None`
    pub const fn from_int(depth: u8) -> Option<SampleDepth> {
        match depth {
            1 => Some(SampleDepth::One),
            2 => Some(SampleDepth::Two),
            4 => Some(SampleDepth::Four),
            8 => Some(SampleDepth::Eight),
            _ => None
        }
    }
    pub const fn bits(self) -> usize {
        match self {
            SampleDepth::One => 1,
            SampleDepth::Two => 2,
            SampleDepth::Four => 4,
            SampleDepth::Eight => 8
        }
    }
    pub const fn samples_per_byte(self) -> usize {
        8 / self.bits()
    }
}

/// Number of bytes holding `width` pixels of `components` samples each,
/// the last byte may be partially used
///
/// Returns `None` if the size does not fit a `usize`
pub fn row_bytes(width: usize, components: usize, depth: SampleDepth) -> Option<usize> {
    let bits = width.checked_mul(components)?.checked_mul(depth.bits())?;
    Some(bits / 8 + usize::from(bits % 8 != 0))
}

/// Extract sample number `index` from `data`.
///
/// Sub-byte samples are packed most significant bit first, so at depth 1
/// the first sample is bit 7 of the first byte.
///
/// Returns `None` if `data` is too short to hold the sample
#[inline]
pub fn unpack_sample(data: &[u8], depth: SampleDepth, index: usize) -> Option<u8> {
    if depth == SampleDepth::Eight {
        return data.get(index).copied();
    }
    let per_byte = depth.samples_per_byte();
    let bits = depth.bits();

    let byte = *data.get(index / per_byte)?;
    let shift = (per_byte - 1 - index % per_byte) * bits;
    let mask = (1_u8 << bits) - 1;

    Some((byte >> shift) & mask)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth_one_is_msb_first() {
        let samples: Vec<u8> = (0..8)
            .map(|i| unpack_sample(&[0b1011_0010], SampleDepth::One, i).unwrap())
            .collect();
        assert_eq!(samples, [1, 0, 1, 1, 0, 0, 1, 0]);
    }

    #[test]
    fn depth_two_and_four() {
        let data = [0b1110_0100, 0xA5];

        let two: Vec<u8> = (0..4)
            .map(|i| unpack_sample(&data, SampleDepth::Two, i).unwrap())
            .collect();
        assert_eq!(two, [3, 2, 1, 0]);

        assert_eq!(unpack_sample(&data, SampleDepth::Four, 2), Some(0xA));
        assert_eq!(unpack_sample(&data, SampleDepth::Four, 3), Some(0x5));
        assert_eq!(unpack_sample(&data, SampleDepth::Four, 4), None);
    }

    #[test]
    fn depth_eight_is_plain_bytes() {
        assert_eq!(unpack_sample(&[9, 8, 7], SampleDepth::Eight, 1), Some(8));
        assert_eq!(unpack_sample(&[9, 8, 7], SampleDepth::Eight, 3), None);
    }

    #[test]
    fn rows_round_up() {
        assert_eq!(row_bytes(3, 1, SampleDepth::One), Some(1));
        assert_eq!(row_bytes(9, 1, SampleDepth::One), Some(2));
        assert_eq!(row_bytes(8, 1, SampleDepth::One), Some(1));
        assert_eq!(row_bytes(3, 1, SampleDepth::Four), Some(2));
        assert_eq!(row_bytes(3, 4, SampleDepth::Eight), Some(12));
    }

    #[test]
    fn oversized_rows_do_not_wrap() {
        assert_eq!(row_bytes(usize::MAX / 2, 4, SampleDepth::Eight), None);
    }

    #[test]
    fn sixteen_bits_rejected() {
        assert_eq!(SampleDepth::from_int(16), None);
        assert_eq!(SampleDepth::from_int(3), None);
    }
}
