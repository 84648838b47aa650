/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Arithmetic on packed pixels
//!
//! A packed pixel is a `u32` laid out as `0xRRGGBBAA`. Every operation here
//! treats the four bytes as independent lanes, arithmetic wraps inside a
//! lane and never carries into its neighbour.

/// Pack four channel values into a pixel
#[inline(always)]
pub const fn pack(r: u8, g: u8, b: u8, a: u8) -> u32 {
    u32::from_be_bytes([r, g, b, a])
}

/// Split a pixel into its `[r, g, b, a]` lanes
#[inline(always)]
pub const fn unpack(pixel: u32) -> [u8; 4] {
    pixel.to_be_bytes()
}

/// The alpha lane of a pixel
#[inline(always)]
pub const fn alpha(pixel: u32) -> u8 {
    (pixel & 0xFF) as u8
}

#[inline(always)]
fn lane_wise<F: Fn(u8, u8) -> u8>(a: u32, b: u32, func: F) -> u32 {
    let a = unpack(a);
    let b = unpack(b);

    pack(
        func(a[0], b[0]),
        func(a[1], b[1]),
        func(a[2], b[2]),
        func(a[3], b[3])
    )
}

/// Lane-wise `a + b` modulo 256
#[inline]
pub fn add(a: u32, b: u32) -> u32 {
    lane_wise(a, b, u8::wrapping_add)
}

/// Lane-wise `a - b` modulo 256
#[inline]
pub fn sub(a: u32, b: u32) -> u32 {
    lane_wise(a, b, u8::wrapping_sub)
}

/// Lane-wise `floor((a + b) / 2)`
#[inline]
pub fn average(a: u32, b: u32) -> u32 {
    lane_wise(a, b, |x, y| ((u16::from(x) + u16::from(y)) >> 1) as u8)
}

/// Choose between the left (`a`), above (`b`) and upper left (`c`) neighbours,
/// whichever is closest to `a + b - c`, ties going to `a` then `b`.
#[inline]
pub fn paeth_predictor(a: u8, b: u8, c: u8) -> u8 {
    let (a_i, b_i, c_i) = (i16::from(a), i16::from(b), i16::from(c));

    let p = a_i + b_i - c_i;
    let pa = (p - a_i).abs();
    let pb = (p - b_i).abs();
    let pc = (p - c_i).abs();

    if pa <= pb && pa <= pc {
        a
    } else if pb <= pc {
        b
    } else {
        c
    }
}

/// Lane-wise paeth prediction over whole pixels
#[inline]
pub fn paeth(left: u32, above: u32, upper_left: u32) -> u32 {
    let a = unpack(left);
    let b = unpack(above);
    let c = unpack(upper_left);

    pack(
        paeth_predictor(a[0], b[0], c[0]),
        paeth_predictor(a[1], b[1], c[1]),
        paeth_predictor(a[2], b[2], c[2]),
        paeth_predictor(a[3], b[3], c[3])
    )
}

/// Composite `foreground` over `background` with the source-over rule.
///
/// All divisions truncate, the results are reproducible bit for bit:
///
/// ```text
/// out.a = S.a + D.a*(255 - S.a)/255
/// out.c = (S.c*S.a/255 + D.c*D.a*(255-S.a)/255/255) * 255 / out.a
/// ```
///
/// A fully transparent background yields the foreground untouched,
/// otherwise a fully transparent foreground yields the background and
/// a fully opaque one yields itself.
pub fn alpha_composite(foreground: u32, background: u32) -> u32 {
    let back_a = u32::from(alpha(background));

    if back_a == 0 {
        return foreground;
    }
    let fore_a = u32::from(alpha(foreground));

    match fore_a {
        0 => return background,
        255 => return foreground,
        _ => ()
    }
    let out_a = fore_a + back_a * (255 - fore_a) / 255;

    let fore = unpack(foreground);
    let back = unpack(background);

    let blend = |fore_c: u8, back_c: u8| -> u8 {
        let fore_c = u32::from(fore_c);
        let back_c = u32::from(back_c);

        let value = (fore_c * fore_a / 255 + back_c * back_a * (255 - fore_a) / 255 / 255) * 255;
        // the sum never exceeds out_a, so the quotient fits a byte
        (value / out_a) as u8
    };

    pack(
        blend(fore[0], back[0]),
        blend(fore[1], back[1]),
        blend(fore[2], back[2]),
        out_a as u8
    )
}

#[cfg(test)]
mod tests {
    use nanorand::{Rng, WyRand};

    use super::*;

    #[test]
    fn test_lanes_do_not_carry() {
        assert_eq!(add(0x00FF_FF00, 0x0001_0100), 0x0000_0000);
        assert_eq!(add(0xFF00_0000, 0x0100_0001), 0x0000_0001);
        assert_eq!(sub(0x0000_0000, 0x0101_0101), 0xFFFF_FFFF);
        assert_eq!(average(0xFF00_FF02, 0xFF02_0104), 0xFF01_8003);
    }

    #[test]
    fn test_sub_is_inverse_of_add() {
        let mut rng = WyRand::new_seed(0x5eed);

        for _ in 0..10_000 {
            let a = rng.generate::<u32>();
            let b = rng.generate::<u32>();

            assert_eq!(add(sub(a, b), b), a);
        }
    }

    #[test]
    fn test_paeth_without_neighbours() {
        assert_eq!(paeth(0, 0, 0), 0);
        assert_eq!(paeth_predictor(0, 0, 0), 0);
    }

    #[test]
    fn test_paeth_tie_breaking() {
        // p = 10, every distance is equal, left wins
        assert_eq!(paeth_predictor(10, 10, 10), 10);
        // p = 3 + 8 - 5 = 6, pa = 3, pb = 2, pc = 1
        assert_eq!(paeth_predictor(3, 8, 5), 5);
        // p = 20 + 10 - 20 = 10, pa = 10, pb = 0
        assert_eq!(paeth_predictor(20, 10, 20), 10);
    }

    #[test]
    fn test_composite_extremes() {
        let mut rng = WyRand::new_seed(42);

        for _ in 0..10_000 {
            let fore = rng.generate::<u32>();
            let back = rng.generate::<u32>() | 1;

            assert_eq!(alpha_composite(fore & !0xFF, back), back);
            assert_eq!(alpha_composite(fore | 0xFF, back), fore | 0xFF);
            assert_eq!(alpha_composite(fore, back & !0xFF), fore);
        }
    }

    #[test]
    fn test_composite_half_over_opaque() {
        // 50% white over opaque black
        let out = alpha_composite(pack(255, 255, 255, 128), pack(0, 0, 0, 255));
        // out.a = 128 + 255*127/255 = 255
        // out.c = (255*128/255 + 0) * 255 / 255 = 128
        assert_eq!(out, pack(128, 128, 128, 255));
    }

    #[test]
    fn test_composite_truncates() {
        let out = alpha_composite(pack(200, 100, 50, 100), pack(10, 20, 30, 200));
        // out.a = 100 + 200*155/255 = 100 + 121 = 221
        // r = (200*100/255 + 10*200*155/255/255) * 255 / 221 = (78 + 4) * 255 / 221 = 94
        // g = (100*100/255 + 20*200*155/255/255) * 255 / 221 = (39 + 9) * 255 / 221 = 55
        // b = (50*100/255 + 30*200*155/255/255) * 255 / 221 = (19 + 14) * 255 / 221 = 38
        assert_eq!(out, pack(94, 55, 38, 221));
    }
}
