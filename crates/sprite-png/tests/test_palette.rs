/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

mod common;

use common::{build_png, decode_ref, encode_ref, ihdr};
use nanorand::{Rng, WyRand};
use sprite_png::error::PngDecodeErrors;
use sprite_png::pixel::pack;
use sprite_png::sprite_core::options::DecoderOptions;
use sprite_png::{decode, PngDecoder};

fn random_palette(rng: &mut WyRand, entries: usize) -> Vec<u8> {
    let mut palette = vec![0; entries * 3];
    rng.fill(&mut palette);
    palette
}

#[test]
fn test_palette_all_depths() {
    let mut rng = WyRand::new_seed(11);
    let (width, height) = (19_usize, 7_usize);

    for (depth, bits) in [
        (png::BitDepth::One, 1),
        (png::BitDepth::Two, 2),
        (png::BitDepth::Four, 4),
        (png::BitDepth::Eight, 8)
    ] {
        let palette = random_palette(&mut rng, 1 << bits);

        let row_bytes = (width * bits + 7) / 8;
        let mut samples = vec![0; row_bytes * height];
        rng.fill(&mut samples);

        let data = encode_ref(
            width as u32,
            height as u32,
            png::ColorType::Indexed,
            depth,
            png::FilterType::NoFilter,
            Some(palette),
            &samples
        );
        let image = decode(&data[..]).unwrap();

        assert_eq!(image.pixels(), decode_ref(&data), "depth {bits}");
    }
}

#[test]
fn test_palette_entries_are_opaque() {
    let palette = [10, 20, 30, 40, 50, 60];
    let data = build_png(&ihdr(2, 1, 8, 3, 0), &[(b"PLTE", &palette[..])], &[0, 1, 0]);

    let image = decode(&data[..]).unwrap();

    assert_eq!(image.pixels(), [pack(40, 50, 60, 255), pack(10, 20, 30, 255)]);
}

#[test]
fn test_missing_palette() {
    let data = build_png(&ihdr(1, 1, 8, 3, 0), &[], &[0, 0]);

    assert!(matches!(decode(&data[..]), Err(PngDecodeErrors::EmptyPalette)));
}

#[test]
fn test_index_out_of_range() {
    let data = build_png(&ihdr(1, 1, 8, 3, 0), &[(b"PLTE", &[1, 2, 3][..])], &[0, 1]);

    assert!(matches!(
        decode(&data[..]),
        Err(PngDecodeErrors::PaletteIndexOutOfRange(1, 1))
    ));
}

#[test]
fn test_filter_byte_ignored_on_indexed_rows() {
    let palette = [0, 0, 0, 255, 255, 255];
    // a sub filter byte that would turn the second pixel into index 2
    let data = build_png(&ihdr(2, 1, 8, 3, 0), &[(b"PLTE", &palette[..])], &[1, 1, 1]);

    let image = decode(&data[..]).unwrap();
    assert_eq!(image.pixels(), [pack(255, 255, 255, 255); 2]);

    let options = DecoderOptions::default().set_strict_mode(true);
    let mut decoder = PngDecoder::new_with_options(&data[..], options);
    assert!(decoder.decode().is_err());
}

#[test]
fn test_palette_in_truecolor_image_ignored() {
    let data = build_png(
        &ihdr(1, 1, 8, 2, 0),
        &[(b"PLTE", &[9, 9, 9][..])],
        &[0, 1, 2, 3]
    );
    assert_eq!(decode(&data[..]).unwrap().get(0, 0), pack(1, 2, 3, 255));

    let options = DecoderOptions::default().set_strict_mode(true);
    let mut decoder = PngDecoder::new_with_options(&data[..], options);
    assert!(decoder.decode().is_err());
}

#[test]
fn test_palette_trailing_bytes_dropped() {
    let data = build_png(
        &ihdr(1, 1, 8, 3, 0),
        &[(b"PLTE", &[1, 2, 3, 4][..])],
        &[0, 0]
    );
    assert_eq!(decode(&data[..]).unwrap().get(0, 0), pack(1, 2, 3, 255));
}
