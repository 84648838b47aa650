/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![cfg(feature = "serde-support")]

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::decoder::PngInfo;
use crate::enums::{InterlaceMethod, PngColor};

impl Serialize for PngColor {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let name = match self {
            PngColor::Luma => "Luma",
            PngColor::RGB => "RGB",
            PngColor::Palette => "Palette",
            PngColor::LumaA => "LumaA",
            PngColor::RGBA => "RGBA"
        };
        serializer.serialize_str(name)
    }
}

impl Serialize for InterlaceMethod {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let name = match self {
            InterlaceMethod::Standard => "Standard",
            InterlaceMethod::Adam7 => "Adam7"
        };
        serializer.serialize_str(name)
    }
}

impl Serialize for PngInfo {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("PngInfo", 6)?;

        state.serialize_field("width", &self.width)?;
        state.serialize_field("height", &self.height)?;
        state.serialize_field("depth", &self.depth)?;
        state.serialize_field("color", &self.color)?;
        state.serialize_field("components", &self.component)?;
        state.serialize_field("interlace_method", &self.interlace_method)?;

        state.end()
    }
}
