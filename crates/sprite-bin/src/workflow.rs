/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};

use clap::ArgMatches;
use log::{debug, info};
use sprite_png::sprite_core::options::DecoderOptions;
use sprite_png::{ImageBuffer, PasteOptions, PngDecoder, PngEncoder};

use crate::cmd_parsers::get_decoder_options;
use crate::cmd_parsers::global_options::CmdOptions;
use crate::errors::SpriteErrors;
use crate::probe_files::probe_input_files;

fn decode_file(in_file: &OsStr, options: DecoderOptions) -> Result<ImageBuffer, SpriteErrors> {
    info!("Decoding {:?}", in_file);

    let file = File::open(in_file)?;
    let mut decoder = PngDecoder::new_with_options(BufReader::new(file), options);

    let image = decoder
        .decode()
        .map_err(|e| SpriteErrors::Decode(in_file.to_string_lossy().to_string(), e))?;

    debug!(
        "Decoded {:?}, dimensions {:?}",
        in_file,
        image.dimensions()
    );
    Ok(image)
}

pub(crate) fn create_and_exec_workflow_from_cmd(
    args: &ArgMatches, cmd_opts: &CmdOptions
) -> Result<(), SpriteErrors> {
    if cmd_opts.probe {
        return probe_input_files(args);
    }
    info!("Creating workflows from input");

    let decoder_options = get_decoder_options(args);

    let mut inputs = args
        .get_raw("in")
        .ok_or(SpriteErrors::GenericStatic("No input files"))?;

    let out_file = args
        .get_raw("out")
        .and_then(|mut x| x.next())
        .ok_or(SpriteErrors::GenericStatic("No output file"))?;

    let first = inputs
        .next()
        .ok_or(SpriteErrors::GenericStatic("No input files"))?;

    let mut image = decode_file(first, decoder_options)?;

    let mut paste_options = PasteOptions::new()
        .set_dest_offset(cmd_opts.x, cmd_opts.y)
        .set_flip_horizontal(cmd_opts.flip);

    if let Some(rotation) = cmd_opts.rotation {
        paste_options = paste_options.set_rotation(rotation);
    }

    for in_file in inputs {
        let overlay = decode_file(in_file, decoder_options)?;
        image.paste(&overlay, paste_options)?;
    }

    let mut writer = BufWriter::new(File::create(out_file)?);

    if cmd_opts.raw {
        image.write_le_dump(&mut writer)?;
        info!("Wrote raw pixels to {:?}", out_file);
    } else {
        let written = PngEncoder::new(&image).encode(&mut writer)?;
        info!("Wrote {written} bytes to {:?}", out_file);
    }
    writer.flush()?;

    Ok(())
}
