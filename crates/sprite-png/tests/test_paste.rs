/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use nanorand::{Rng, WyRand};
use sprite_png::pixel::{alpha_composite, pack};
use sprite_png::{decode, encode, ImageBuffer, PasteOptions, Rotation};

fn random_pixels(rng: &mut WyRand, count: usize) -> Vec<u32> {
    (0..count).map(|_| rng.generate::<u32>()).collect()
}

#[test]
fn test_composite_identities() {
    let mut rng = WyRand::new_seed(21);

    for _ in 0..10_000 {
        let src = rng.generate::<u32>();
        let dst = rng.generate::<u32>();

        let transparent = src & !0xFF;
        let opaque = src | 0xFF;
        let empty_dst = dst & !0xFF;

        if dst & 0xFF != 0 {
            assert_eq!(alpha_composite(transparent, dst), dst);
        }
        assert_eq!(alpha_composite(opaque, dst), opaque);
        assert_eq!(alpha_composite(src, empty_dst), src);
    }
}

#[test]
fn test_composite_over_opaque_stays_opaque() {
    let mut rng = WyRand::new_seed(22);

    for _ in 0..10_000 {
        let src = rng.generate::<u32>();
        let dst = rng.generate::<u32>() | 0xFF;

        assert_eq!(alpha_composite(src, dst) & 0xFF, 0xFF);
    }
}

#[test]
fn test_transparent_paste_is_noop() {
    let mut rng = WyRand::new_seed(23);

    let dest_pixels = random_pixels(&mut rng, 16 * 16);
    let mut dest = ImageBuffer::from_pixels(16, 16, dest_pixels).unwrap();
    let before = dest.clone();

    let source_pixels = random_pixels(&mut rng, 8 * 8)
        .into_iter()
        .map(|x| x & !0xFF)
        .collect();
    let source = ImageBuffer::from_pixels(8, 8, source_pixels).unwrap();

    for options in [
        PasteOptions::new(),
        PasteOptions::new().set_dest_offset(12, 3),
        PasteOptions::new()
            .set_source_offset(1, 1)
            .set_size(4, 6)
            .set_rotation(Rotation::CounterClockwise),
        PasteOptions::new().set_flip_horizontal(true)
    ] {
        dest.paste(&source, options).unwrap();
        assert_eq!(dest, before, "{options:?}");
    }
}

#[test]
fn test_paste_matches_per_pixel_composite() {
    let mut rng = WyRand::new_seed(24);

    let dest_pixels = random_pixels(&mut rng, 10 * 10);
    let mut dest = ImageBuffer::from_pixels(10, 10, dest_pixels).unwrap();
    let before = dest.clone();

    let source = ImageBuffer::from_pixels(4, 4, random_pixels(&mut rng, 16)).unwrap();

    dest.paste(&source, PasteOptions::new().set_dest_offset(3, 5))
        .unwrap();

    for y in 0..10 {
        for x in 0..10 {
            let inside = (3..7).contains(&x) && (5..9).contains(&y);

            let expected = if inside {
                let src = source.get(x - 3, y - 5);
                match src & 0xFF {
                    0 => before.get(x, y),
                    0xFF => src,
                    _ => alpha_composite(src, before.get(x, y))
                }
            } else {
                before.get(x, y)
            };
            assert_eq!(dest.get(x, y), expected, "({x},{y})");
        }
    }
}

#[test]
fn test_sprite_sheet_round_trip() {
    // tile two decoded sprites into a sheet and write it back out
    let red = ImageBuffer::from_pixels(2, 2, vec![pack(255, 0, 0, 255); 4]).unwrap();
    let blue = ImageBuffer::from_pixels(2, 2, vec![pack(0, 0, 255, 128); 4]).unwrap();

    let mut files = vec![];
    for sprite in [&red, &blue] {
        let mut sink = vec![];
        encode(&mut sink, sprite).unwrap();
        files.push(sink);
    }

    let mut sheet = ImageBuffer::new(4, 2).unwrap();
    for (i, file) in files.iter().enumerate() {
        let sprite = decode(&file[..]).unwrap();
        sheet
            .paste(&sprite, PasteOptions::new().set_dest_offset(i * 2, 0))
            .unwrap();
    }

    let mut sink = vec![];
    encode(&mut sink, &sheet).unwrap();
    let decoded = decode(&sink[..]).unwrap();

    assert_eq!(decoded.get(0, 0), pack(255, 0, 0, 255));
    // translucent over transparent black is copied verbatim
    assert_eq!(decoded.get(3, 1), pack(0, 0, 255, 128));
}
