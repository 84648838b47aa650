/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

/// The eight bytes every png stream starts with, `\x89PNG\r\n\x1A\n`
pub const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

/// Length of the header chunk body
pub const IHDR_LENGTH: usize = 13;

/// Colour type flag, samples are palette indices
pub const COLOR_MASK_INDEXED: u8 = 1;
/// Colour type flag, three colour samples instead of one grey sample
pub const COLOR_MASK_COLOR: u8 = 2;
/// Colour type flag, an alpha sample follows the colour samples
pub const COLOR_MASK_ALPHA: u8 = 4;
