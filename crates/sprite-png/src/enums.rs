/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![allow(clippy::upper_case_acronyms)]

use crate::constants::{COLOR_MASK_ALPHA, COLOR_MASK_COLOR, COLOR_MASK_INDEXED};

/// Chunk types the codec understands, everything
/// else is skipped
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PngChunkType {
    IHDR,
    PLTE,
    IDAT,
    IEND,
    Unknown
}

impl PngChunkType {
    pub fn from_bytes(chunk: &[u8; 4]) -> PngChunkType {
        match chunk {
            b"IHDR" => Self::IHDR,
            b"PLTE" => Self::PLTE,
            b"IDAT" => Self::IDAT,
            b"IEND" => Self::IEND,
            _ => Self::Unknown
        }
    }
}

/// Per scanline filter types
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum FilterMethod {
    None,
    Sub,
    Up,
    Average,
    Paeth
}

impl FilterMethod {
    pub const fn from_int(int: u8) -> Option<FilterMethod> {
        match int {
            0 => Some(FilterMethod::None),
            1 => Some(FilterMethod::Sub),
            2 => Some(FilterMethod::Up),
            3 => Some(FilterMethod::Average),
            4 => Some(FilterMethod::Paeth),
            _ => None
        }
    }
    pub const fn to_int(self) -> u8 {
        match self {
            FilterMethod::None => 0,
            FilterMethod::Sub => 1,
            FilterMethod::Up => 2,
            FilterMethod::Average => 3,
            FilterMethod::Paeth => 4
        }
    }
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum InterlaceMethod {
    #[default]
    Standard,
    Adam7
}

impl InterlaceMethod {
    pub const fn from_int(int: u8) -> Option<InterlaceMethod> {
        match int {
            0 => Some(Self::Standard),
            1 => Some(Self::Adam7),
            _ => None
        }
    }
    pub const fn to_int(self) -> u8 {
        match self {
            Self::Standard => 0,
            Self::Adam7 => 1
        }
    }
}

/// The five legal colour types, each a combination of the
/// INDEXED, COLOR and ALPHA flags
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum PngColor {
    #[default]
    Luma,
    RGB,
    Palette,
    LumaA,
    RGBA
}

impl PngColor {
    pub const fn from_int(int: u8) -> Option<PngColor> {
        match int {
            0 => Some(Self::Luma),
            2 => Some(Self::RGB),
            3 => Some(Self::Palette),
            4 => Some(Self::LumaA),
            6 => Some(Self::RGBA),
            _ => None
        }
    }
    /// The colour type code as stored in the header
    pub const fn to_int(self) -> u8 {
        match self {
            Self::Luma => 0,
            Self::RGB => COLOR_MASK_COLOR,
            Self::Palette => COLOR_MASK_COLOR | COLOR_MASK_INDEXED,
            Self::LumaA => COLOR_MASK_ALPHA,
            Self::RGBA => COLOR_MASK_COLOR | COLOR_MASK_ALPHA
        }
    }
    pub const fn is_indexed(self) -> bool {
        self.to_int() & COLOR_MASK_INDEXED != 0
    }
    pub const fn has_alpha(self) -> bool {
        self.to_int() & COLOR_MASK_ALPHA != 0
    }
    /// Number of samples stored per pixel
    pub const fn num_components(self) -> usize {
        match self {
            PngColor::Luma | PngColor::Palette => 1,
            PngColor::LumaA => 2,
            PngColor::RGB => 3,
            PngColor::RGBA => 4
        }
    }
    /// Whether `depth` is one of the depths the container allows
    /// for this colour type
    pub const fn allows_depth(self, depth: u8) -> bool {
        match self {
            PngColor::Luma | PngColor::Palette => matches!(depth, 1 | 2 | 4 | 8),
            PngColor::RGB | PngColor::LumaA | PngColor::RGBA => depth == 8
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_flags() {
        assert!(PngColor::Palette.is_indexed());
        assert!(!PngColor::Palette.has_alpha());
        assert!(PngColor::RGBA.has_alpha());
        assert!(PngColor::LumaA.has_alpha());

        for code in [0, 2, 3, 4, 6] {
            assert_eq!(PngColor::from_int(code).unwrap().to_int(), code);
        }
        for code in [1, 5, 7, 8] {
            assert!(PngColor::from_int(code).is_none());
        }
    }
}
