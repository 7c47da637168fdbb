/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::parser::ValueSource;
use clap::ArgMatches;
use log::{info, Level};

use crate::cmd_args::OutputFormat;

#[derive(Debug, Copy, Clone)]
pub struct CmdOptions {
    pub format:         OutputFormat,
    pub override_files: bool,
    pub invert:         bool,
    pub erase:          Option<[usize; 4]>,
    pub raw_dimensions: Option<(usize, usize)>
}

impl CmdOptions {
    pub fn new() -> CmdOptions {
        CmdOptions {
            format:         OutputFormat::Auto,
            override_files: false,
            invert:         false,
            erase:          None,
            raw_dimensions: None
        }
    }
}

/// Collect the convert specific options, `probe` leaves them at their defaults
pub fn parse_options(options: &ArgMatches) -> CmdOptions {
    let mut cmd_options = CmdOptions::new();

    if let Ok(Some(format)) = options.try_get_one::<OutputFormat>("format") {
        if options.value_source("format") == Some(ValueSource::CommandLine) {
            info!("Setting output format to {:?}", format);
        }
        cmd_options.format = *format;
    }

    if let Ok(Some(true)) = options.try_get_one::<bool>("yes") {
        info!("Overwriting existing files");
        cmd_options.override_files = true;
    }

    if let Ok(Some(true)) = options.try_get_one::<bool>("invert") {
        cmd_options.invert = true;
    }

    if let Ok(Some(corners)) = options.try_get_one::<[usize; 4]>("erase") {
        cmd_options.erase = Some(*corners);
    }

    if let (Ok(Some(width)), Ok(Some(height))) = (
        options.try_get_one::<usize>("width"),
        options.try_get_one::<usize>("height")
    ) {
        info!("Raw input dimensions {}x{}", width, height);
        cmd_options.raw_dimensions = Some((*width, *height));
    }
    cmd_options
}

/// Set up logging options
pub fn setup_logger(options: &ArgMatches) {
    let log_level;

    if options.get_flag("debug") {
        log_level = Level::Debug;
    } else if options.get_flag("trace") {
        log_level = Level::Trace;
    } else if options.get_flag("warn") {
        log_level = Level::Warn
    } else if options.get_flag("info") {
        log_level = Level::Info;
    } else {
        log_level = Level::Warn;
    }

    simple_logger::init_with_level(log_level).unwrap();

    info!("Initialized logger");
    info!("Log level :{}", log_level);
}

#[cfg(test)]
mod tests {
    use crate::cmd_args::{create_cmd_args, OutputFormat};
    use crate::cmd_parsers::get_decoder_options;
    use crate::cmd_parsers::global_options::parse_options;

    #[test]
    fn convert_options_are_collected() {
        let matches = create_cmd_args()
            .try_get_matches_from([
                "bittmapp", "convert", "-i", "in.raw", "-o", "out.bmp", "--width", "16",
                "--height", "2", "--erase", "0,0,3,1", "--invert", "-y", "--strict"
            ])
            .unwrap();
        let (_, sub) = matches.subcommand().unwrap();

        let options = parse_options(sub);
        assert_eq!(options.format, OutputFormat::Auto);
        assert!(options.override_files);
        assert!(options.invert);
        assert_eq!(options.erase, Some([0, 0, 3, 1]));
        assert_eq!(options.raw_dimensions, Some((16, 2)));

        let decoder = get_decoder_options(sub);
        assert!(decoder.get_strict_mode());
        assert!(!decoder.get_allow_top_down());
        assert_eq!(decoder.get_max_width(), 16384);
    }

    #[test]
    fn probe_keeps_defaults() {
        let matches = create_cmd_args()
            .try_get_matches_from(["bittmapp", "probe", "a.bmp", "b.bmp", "--allow-top-down"])
            .unwrap();
        let (_, sub) = matches.subcommand().unwrap();

        let options = parse_options(sub);
        assert!(!options.override_files);
        assert_eq!(options.raw_dimensions, None);
        assert!(get_decoder_options(sub).get_allow_top_down());
    }
}
