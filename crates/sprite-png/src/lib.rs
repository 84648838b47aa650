/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A small png codec
//!
//! Decodes PNG images into an [`ImageBuffer`] of packed `0xRRGGBBAA`
//! pixels and encodes such buffers back into PNG.
//!
//! # Features
//! - Grayscale, gray+alpha, truecolor, truecolor+alpha and indexed images
//! - Bit depths 1, 2, 4 and 8 (16 bit images are rejected)
//! - Adam7 interlaced images
//! - Alpha composited pasting of one buffer into another
//!
//! The encoder is deliberately narrow, it always writes eight bit RGBA
//! without interlacing, with every row sub filtered.
//!
//! # Usage
//!
//! ```no_run
//! use sprite_png::{decode, encode, PasteOptions};
//!
//! let base = std::fs::read("base.png").unwrap();
//! let overlay = std::fs::read("overlay.png").unwrap();
//!
//! let mut image = decode(&base[..]).unwrap();
//! let overlay = decode(&overlay[..]).unwrap();
//!
//! image
//!     .paste(&overlay, PasteOptions::new().set_dest_offset(4, 4))
//!     .unwrap();
//!
//! let mut out = vec![];
//! encode(&mut out, &image).unwrap();
//! ```
//!
//! # Extracting metadata
//!
//! [`PngDecoder::decode_headers`] reads only the signature and header chunk,
//! after which [`PngDecoder::get_info`] returns a [`PngInfo`].
//!
//! # Crate features
//! - `serde-support`: Serialize [`PngInfo`] with serde
//!
//! # Alternatives
//! - [png](https://crates.io/crates/png) crate
#![allow(clippy::upper_case_acronyms)]

pub use decoder::{decode, PngDecoder, PngInfo};
pub use encoder::{encode, PngEncoder};
pub use enums::{InterlaceMethod, PngColor};
pub use image::{ImageBuffer, PasteOptions, Region, Rotation};
pub use sprite_core;

mod chunks;
mod constants;
mod decoder;
mod encoder;
mod enums;
pub mod error;
mod filters;
mod headers;
pub mod image;
mod inflate;
pub mod interlace;
pub mod pixel;
mod reconstruct;
mod serde;
pub mod unpack;
