/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::File;
use std::io::BufReader;

use clap::ArgMatches;
use sprite_png::PngDecoder;

use crate::cmd_parsers::get_decoder_options;
use crate::errors::SpriteErrors;
use crate::serde::Metadata;

/// Probe input files, extract metadata, and print to standard output.
pub fn probe_input_files(args: &ArgMatches) -> Result<(), SpriteErrors> {
    let options = get_decoder_options(args);

    let Some(inputs) = args.get_raw("in") else {
        return Err(SpriteErrors::GenericStatic("No input files"));
    };

    for in_file in inputs {
        let file = File::open(in_file)?;
        let size = file.metadata()?.len();

        let mut decoder = PngDecoder::new_with_options(BufReader::new(file), options);

        decoder
            .decode_headers()
            .map_err(|e| SpriteErrors::Decode(in_file.to_string_lossy().to_string(), e))?;

        if let Some(info) = decoder.get_info() {
            let metadata = Metadata::new(in_file.to_os_string(), size, options, info);

            println!("{}", serde_json::to_string_pretty(&metadata)?);
        }
    }
    Ok(())
}
