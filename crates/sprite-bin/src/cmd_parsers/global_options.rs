/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::parser::ValueSource::CommandLine;
use clap::ArgMatches;
use log::{info, Level};
use sprite_png::Rotation;

use crate::cmd_args::RotateOptions;

#[derive(Debug, Copy, Clone)]
pub struct CmdOptions {
    pub x:        usize,
    pub y:        usize,
    pub flip:     bool,
    pub rotation: Option<Rotation>,
    pub raw:      bool,
    pub probe:    bool
}

impl CmdOptions {
    pub fn new() -> CmdOptions {
        CmdOptions {
            x:        0,
            y:        0,
            flip:     false,
            rotation: None,
            raw:      false,
            probe:    false
        }
    }
}

pub fn parse_options(options: &ArgMatches) -> CmdOptions {
    let mut cmd_options = CmdOptions::new();

    cmd_options.x = options.get_one::<usize>("x").copied().unwrap_or(0);
    cmd_options.y = options.get_one::<usize>("y").copied().unwrap_or(0);

    if options.value_source("rotate") == Some(CommandLine) {
        if let Some(rotate) = options.get_one::<RotateOptions>("rotate") {
            info!("Rotating overlays {:?}", rotate);
            cmd_options.rotation = Some((*rotate).into());
        }
    }
    cmd_options.flip = options.get_flag("flip");
    cmd_options.raw = options.get_flag("raw");
    cmd_options.probe = options.get_flag("probe");

    cmd_options
}

/// Set up logging options
pub fn setup_logger(options: &ArgMatches) {
    let log_level = if options.get_flag("debug") {
        Level::Debug
    } else if options.get_flag("trace") {
        Level::Trace
    } else if options.get_flag("warn") {
        Level::Warn
    } else if options.get_flag("info") {
        Level::Info
    } else {
        Level::Warn
    };

    if let Err(err) = simple_logger::init_with_level(log_level) {
        eprintln!("Could not initialize logger: {err}");
        return;
    }

    info!("Initialized logger");
    info!("Log level :{}", log_level);
}
