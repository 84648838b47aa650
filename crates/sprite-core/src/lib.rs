/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Core routines shared by the sprite image crates
//!
//! It currently contains
//!
//! - A bytestream reader and writer with endian aware reads and writes
//!   layered over `std::io::Read` and `std::io::Write`
//! - Decoder options shared by image decoders
//!
//! # Features
//!  - `serde`: Enables serializing of the decoder options, tooling uses
//!    this to report the configuration an image was decoded with.
pub mod bytestream;
pub mod options;
pub mod serde;
