/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::builder::PossibleValue;
use clap::{value_parser, Arg, ArgAction, Command, ValueEnum};
use sprite_png::Rotation;

/// Quarter turns accepted by `--rotate`
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum RotateOptions {
    Clockwise,
    CounterClockwise
}

impl ValueEnum for RotateOptions {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Clockwise, Self::CounterClockwise]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(match self {
            Self::Clockwise => PossibleValue::new("cw"),
            Self::CounterClockwise => PossibleValue::new("ccw")
        })
    }
}

impl From<RotateOptions> for Rotation {
    fn from(value: RotateOptions) -> Self {
        match value {
            RotateOptions::Clockwise => Rotation::Clockwise,
            RotateOptions::CounterClockwise => Rotation::CounterClockwise
        }
    }
}

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("sprite")
        .about("Decode png images, paste them over each other and write the result")
        .arg(Arg::new("in")
            .short('i')
            .help("Input file to read data from, the first one is the base image")
            .long("input")
            .action(ArgAction::Append)
            .required(true))
        .arg(Arg::new("out")
            .short('o')
            .long("output")
            .help("Output to write the data to")
            .required_unless_present("probe"))
        .arg(Arg::new("x")
            .long("x")
            .help_heading("OPERATIONS")
            .help("Column of the base image where overlays are pasted")
            .value_parser(value_parser!(usize))
            .default_value("0"))
        .arg(Arg::new("y")
            .long("y")
            .help_heading("OPERATIONS")
            .help("Row of the base image where overlays are pasted")
            .value_parser(value_parser!(usize))
            .default_value("0"))
        .arg(Arg::new("flip")
            .long("flip")
            .action(ArgAction::SetTrue)
            .help_heading("OPERATIONS")
            .help("Mirror overlays left to right before pasting"))
        .arg(Arg::new("rotate")
            .long("rotate")
            .help_heading("OPERATIONS")
            .help("Rotate overlays a quarter turn before pasting")
            .value_parser(value_parser!(RotateOptions)))
        .arg(Arg::new("raw")
            .long("raw")
            .action(ArgAction::SetTrue)
            .help("Write little endian 32 bit pixels instead of a png"))
        .arg(Arg::new("probe")
            .long("probe")
            .action(ArgAction::SetTrue)
            .help("Print image metadata as json and exit"))
        .arg(Arg::new("strict")
            .long("strict")
            .action(ArgAction::SetTrue)
            .help_heading("ADVANCED")
            .help("Treat recoverable problems in input files as errors"))
        .arg(Arg::new("confirm-crc")
            .long("confirm-crc")
            .action(ArgAction::SetTrue)
            .help_heading("ADVANCED")
            .help("Verify chunk checksums while decoding"))
        .arg(Arg::new("max-width")
            .long("max-width")
            .help_heading("ADVANCED")
            .help("Maximum width of images to decode")
            .value_parser(value_parser!(usize))
            .default_value("16384"))
        .arg(Arg::new("max-height")
            .long("max-height")
            .help_heading("ADVANCED")
            .help("Maximum height of images to decode")
            .value_parser(value_parser!(usize))
            .default_value("16384"))
        .arg(Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display warnings and errors"))
        .arg(Arg::new("info")
            .long("info")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display information about the decoding options"))
}

#[test]
fn verify_cmd() {
    create_cmd_args().debug_assert();
}
