/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Formatter};

use sprite_png::error::{ImageErrors, PngDecodeErrors, PngEncodeErrors};

/// Everything that can stop a run of the command line tool
pub enum SpriteErrors {
    /// Decoding a named input failed
    Decode(String, PngDecodeErrors),
    Encode(PngEncodeErrors),
    Image(ImageErrors),
    Io(std::io::Error),
    Generic(String),
    GenericStatic(&'static str)
}

impl Debug for SpriteErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Decode(file, err) => writeln!(f, "Could not decode {file}: {err:?}"),
            Self::Encode(err) => writeln!(f, "Could not encode output: {err:?}"),
            Self::Image(err) => writeln!(f, "{err:?}"),
            Self::Io(err) => writeln!(f, "I/O error: {err}"),
            Self::Generic(err) => writeln!(f, "{err}"),
            Self::GenericStatic(err) => writeln!(f, "{err}")
        }
    }
}

impl From<PngEncodeErrors> for SpriteErrors {
    fn from(value: PngEncodeErrors) -> Self {
        Self::Encode(value)
    }
}

impl From<ImageErrors> for SpriteErrors {
    fn from(value: ImageErrors) -> Self {
        Self::Image(value)
    }
}

impl From<std::io::Error> for SpriteErrors {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for SpriteErrors {
    fn from(value: serde_json::Error) -> Self {
        Self::Generic(value.to_string())
    }
}
