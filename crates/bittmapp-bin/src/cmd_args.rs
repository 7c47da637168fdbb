/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::builder::PossibleValue;
use clap::{value_parser, Arg, ArgAction, Command, ValueEnum};

/// Format written by `convert`
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum OutputFormat {
    /// Pick from the output file extension, `.bmp` is BMP anything else is raw
    Auto,
    Bmp,
    Raw
}

impl ValueEnum for OutputFormat {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Auto, Self::Bmp, Self::Raw]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(match self {
            Self::Auto => PossibleValue::new("auto"),
            Self::Bmp => PossibleValue::new("bmp"),
            Self::Raw => PossibleValue::new("raw")
        })
    }
}

/// Parse `x0,y0,x1,y1` into four coordinates
pub(crate) fn parse_corners(value: &str) -> Result<[usize; 4], String> {
    let mut corners = [0; 4];
    let mut parts = value.split(',');

    for corner in corners.iter_mut() {
        let part = parts
            .next()
            .ok_or_else(|| format!("Expected four comma separated values, found {value:?}"))?;

        *corner = part
            .trim()
            .parse::<usize>()
            .map_err(|e| format!("Could not parse {part:?} as a coordinate, {e}"))?;
    }
    if parts.next().is_some() {
        return Err(format!(
            "Expected four comma separated values, found {value:?}"
        ));
    }
    Ok(corners)
}

#[rustfmt::skip]
fn probe_command() -> Command {
    Command::new("probe")
        .about("Print the BMP header of each input as JSON")
        .arg(Arg::new("in")
            .help("Files to probe")
            .action(ArgAction::Append)
            .required(true))
}

#[rustfmt::skip]
fn convert_command() -> Command {
    Command::new("convert")
        .about("Convert between monochrome BMP and raw packed bitmaps")
        .long_about("Convert between monochrome BMP and raw packed bitmaps.\nInputs that look like a BMP file are decoded, anything else is read as a raw dump whose dimensions must be given with --width and --height.")
        .arg(Arg::new("in")
            .short('i')
            .long("input")
            .help("Input file to read data from")
            .required(true))
        .arg(Arg::new("out")
            .short('o')
            .long("output")
            .help("Output to write the data to")
            .required(true))
        .arg(Arg::new("width")
            .long("width")
            .help_heading("RAW INPUT")
            .help("Width of a raw input, a multiple of 8")
            .value_parser(value_parser!(usize))
            .requires("height"))
        .arg(Arg::new("height")
            .long("height")
            .help_heading("RAW INPUT")
            .help("Height of a raw input")
            .value_parser(value_parser!(usize))
            .requires("width"))
        .arg(Arg::new("format")
            .long("format")
            .help_heading("OUTPUT")
            .help("Output format")
            .default_value("auto")
            .value_parser(value_parser!(OutputFormat)))
        .arg(Arg::new("erase")
            .long("erase")
            .help_heading("OPERATIONS")
            .help("Clear every pixel in the rectangle spanning two corners, given as x0,y0,x1,y1")
            .value_parser(parse_corners))
        .arg(Arg::new("invert")
            .long("invert")
            .action(ArgAction::SetTrue)
            .help_heading("OPERATIONS")
            .help("Flip every pixel before writing"))
        .arg(Arg::new("yes")
            .short('y')
            .long("yes")
            .action(ArgAction::SetTrue)
            .help("Overwrite the output file if it exists"))
}

/// Logging and decoder arguments shared by every subcommand
#[rustfmt::skip]
fn add_common_args(cmd: Command) -> Command {
    cmd.arg(Arg::new("debug")
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
        .arg(Arg::new("strict")
            .long("strict")
            .action(ArgAction::SetTrue)
            .help_heading("DECODER")
            .help("Treat inconsistent header fields as errors"))
        .arg(Arg::new("allow-top-down")
            .long("allow-top-down")
            .action(ArgAction::SetTrue)
            .help_heading("DECODER")
            .help("Decode BMP files stored top row first"))
        .arg(Arg::new("max-width")
            .long("max-width")
            .help_heading("DECODER")
            .help("Largest width the decoder accepts")
            .default_value("16384")
            .value_parser(value_parser!(usize)))
        .arg(Arg::new("max-height")
            .long("max-height")
            .help_heading("DECODER")
            .help("Largest height the decoder accepts")
            .default_value("16384")
            .value_parser(value_parser!(usize)))
}

pub fn create_cmd_args() -> Command {
    Command::new("bittmapp")
        .about("Inspect and convert monochrome bitmaps")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(add_common_args(probe_command()))
        .subcommand(add_common_args(convert_command()))
}

#[cfg(test)]
mod tests {
    use crate::cmd_args::{create_cmd_args, parse_corners, OutputFormat};

    #[test]
    fn verify_cli() {
        create_cmd_args().debug_assert();
    }

    #[test]
    fn convert_arguments_parse() {
        let matches = create_cmd_args()
            .try_get_matches_from([
                "bittmapp", "convert", "-i", "a.raw", "-o", "a.bmp", "--width", "32",
                "--height", "16", "--format", "bmp", "--debug"
            ])
            .unwrap();

        let (name, sub) = matches.subcommand().unwrap();
        assert_eq!(name, "convert");
        assert_eq!(sub.get_one::<usize>("width"), Some(&32));
        assert_eq!(
            sub.get_one::<OutputFormat>("format"),
            Some(&OutputFormat::Bmp)
        );
        assert!(sub.get_flag("debug"));
    }

    #[test]
    fn raw_dimensions_come_in_pairs() {
        let result = create_cmd_args().try_get_matches_from([
            "bittmapp", "convert", "-i", "a.raw", "-o", "a.bmp", "--width", "32"
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn corners_parse() {
        assert_eq!(parse_corners("1, 2,30,4"), Ok([1, 2, 30, 4]));
        assert!(parse_corners("1,2,3").is_err());
        assert!(parse_corners("1,2,3,4,5").is_err());
        assert!(parse_corners("1,2,-3,4").is_err());
    }
}
