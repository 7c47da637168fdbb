/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::ffi::OsStr;
use std::fmt::{Debug, Formatter};
use std::path::Path;

use bittmapp_bmp::{probe_bmp, BmpDecoder, BmpEncoder, BmpErrors};
use bittmapp_core::bitbuffer::BitBuffer;
use bittmapp_core::document::{Document, Tool};
use bittmapp_core::errors::BitmapErrors;
use bittmapp_core::options::{DecoderOptions, EncoderOptions};
use clap::ArgMatches;
use log::{debug, info};

use crate::cmd_args::OutputFormat;
use crate::cmd_parsers::get_decoder_options;
use crate::cmd_parsers::global_options::CmdOptions;
use crate::file_io::{read_file, write_file};
use crate::probe_files::probe_input_files;

pub enum WorkflowErrors {
    IoErrors(std::io::Error),
    BmpErrors(BmpErrors),
    BitmapErrors(BitmapErrors),
    GenericString(String)
}

impl Debug for WorkflowErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IoErrors(err) => writeln!(f, "I/O error: {err}"),
            Self::BmpErrors(err) => writeln!(f, "{err:?}"),
            Self::BitmapErrors(err) => writeln!(f, "{err:?}"),
            Self::GenericString(err) => writeln!(f, "{err}")
        }
    }
}

impl From<std::io::Error> for WorkflowErrors {
    fn from(value: std::io::Error) -> Self {
        Self::IoErrors(value)
    }
}

impl From<BmpErrors> for WorkflowErrors {
    fn from(value: BmpErrors) -> Self {
        Self::BmpErrors(value)
    }
}

impl From<BitmapErrors> for WorkflowErrors {
    fn from(value: BitmapErrors) -> Self {
        Self::BitmapErrors(value)
    }
}

/// Dispatch to the subcommand the user asked for
pub(crate) fn run_from_cmd(
    name: &str, args: &ArgMatches, cmd_opts: &CmdOptions
) -> Result<(), WorkflowErrors> {
    match name {
        "probe" => probe_input_files(args),
        "convert" => convert_from_cmd(args, cmd_opts),
        _ => Err(WorkflowErrors::GenericString(format!(
            "Unknown subcommand {name}"
        )))
    }
}

fn convert_from_cmd(args: &ArgMatches, cmd_opts: &CmdOptions) -> Result<(), WorkflowErrors> {
    let (Some(in_files), Some(out_files)) = (args.get_raw("in"), args.get_raw("out")) else {
        return Err(WorkflowErrors::GenericString(
            "convert needs an input and an output".to_string()
        ));
    };

    for (in_file, out_file) in in_files.zip(out_files) {
        verify_file_paths(in_file, out_file)?;

        let data = read_file(in_file)?;
        let output = convert(data, out_file, &get_decoder_options(args), cmd_opts)?;

        write_file(out_file, &output, cmd_opts.override_files)?;
    }
    Ok(())
}

fn verify_file_paths(p0: &OsStr, p1: &OsStr) -> Result<(), WorkflowErrors> {
    if p0 == p1 {
        return Err(WorkflowErrors::GenericString(format!(
            "Cannot use {p0:?} as both input and output"
        )));
    }
    Ok(())
}

/// Load `data` into a document, run the requested edits and serialize
/// the result in the output format.
pub(crate) fn convert(
    data: Vec<u8>, out_file: &OsStr, decoder_options: &DecoderOptions, cmd_opts: &CmdOptions
) -> Result<Vec<u8>, WorkflowErrors> {
    let mut document = load_document(data, decoder_options, cmd_opts)?;

    if let Some([x0, y0, x1, y1]) = cmd_opts.erase {
        document.set_tool(Tool::Select);
        document.apply(x0, y0)?;
        document.apply(x1, y1)?;

        let erased = document.erase_selection()?;
        info!("Erased {} pixels inside ({},{}) - ({},{})", erased, x0, y0, x1, y1);
        document.select_none();
    }

    let mut pixels = document.into_pixels();

    if cmd_opts.invert {
        debug!("Inverting pixels");
        pixels.invert();
    }

    let format = match cmd_opts.format {
        OutputFormat::Auto => guess_output_format(out_file),
        format => format
    };
    info!("Writing {:?} as {:?}", out_file, format);

    match format {
        OutputFormat::Raw => Ok(pixels.into_raw()),
        _ => Ok(BmpEncoder::new_with_options(&pixels, EncoderOptions::default()).encode()?)
    }
}

fn load_document(
    data: Vec<u8>, decoder_options: &DecoderOptions, cmd_opts: &CmdOptions
) -> Result<Document, WorkflowErrors> {
    if probe_bmp(&data) {
        debug!("Treating input as a BMP file");

        let pixels = BmpDecoder::new_with_options(&data, *decoder_options).decode()?;
        return Ok(Document::from_buffer(pixels));
    }

    let Some((width, height)) = cmd_opts.raw_dimensions else {
        return Err(WorkflowErrors::GenericString(
            "Input is not a BMP file, pass --width and --height to read it as raw data"
                .to_string()
        ));
    };
    debug!("Treating input as a raw {}x{} dump", width, height);

    Ok(Document::from_buffer(BitBuffer::from_raw(data, width, height)?))
}

fn guess_output_format(out_file: &OsStr) -> OutputFormat {
    match Path::new(out_file).extension() {
        Some(ext) if ext.eq_ignore_ascii_case("bmp") => OutputFormat::Bmp,
        _ => OutputFormat::Raw
    }
}

#[cfg(test)]
mod tests {
    use std::ffi::OsStr;

    use bittmapp_bmp::{decode, BmpErrors};
    use bittmapp_core::options::DecoderOptions;

    use crate::cmd_args::OutputFormat;
    use crate::cmd_parsers::global_options::CmdOptions;
    use crate::workflow::{convert, WorkflowErrors};

    fn raw_options(width: usize, height: usize) -> CmdOptions {
        let mut options = CmdOptions::new();
        options.raw_dimensions = Some((width, height));
        options
    }

    #[test]
    fn raw_to_bmp_and_back() {
        let raw = vec![0x81, 0x7E, 0x00, 0xFF];
        let options = raw_options(16, 2);

        let bmp = convert(raw.clone(), OsStr::new("out.BMP"), &DecoderOptions::default(), &options)
            .unwrap();
        let pixels = decode(&bmp).unwrap();
        assert_eq!(pixels.as_bytes(), &raw[..]);

        let back = convert(bmp, OsStr::new("out.raw"), &DecoderOptions::default(), &options)
            .unwrap();
        assert_eq!(back, raw);
    }

    #[test]
    fn raw_input_needs_dimensions() {
        let result = convert(
            vec![0; 4],
            OsStr::new("out.bmp"),
            &DecoderOptions::default(),
            &CmdOptions::new()
        );
        assert!(matches!(result, Err(WorkflowErrors::GenericString(_))));
    }

    #[test]
    fn raw_length_must_match() {
        let result = convert(
            vec![0; 3],
            OsStr::new("out.bmp"),
            &DecoderOptions::default(),
            &raw_options(16, 2)
        );
        assert!(matches!(result, Err(WorkflowErrors::BitmapErrors(_))));
    }

    #[test]
    fn erase_and_invert_are_applied() {
        let mut options = raw_options(8, 2);
        options.erase = Some([1, 0, 2, 1]);
        options.invert = true;
        options.format = OutputFormat::Raw;

        let out = convert(
            vec![0xFF, 0xFF],
            OsStr::new("out.bmp"),
            &DecoderOptions::default(),
            &options
        )
        .unwrap();
        // pixels 1 and 2 of both rows were erased, then everything flipped
        assert_eq!(out, vec![0b0000_0110, 0b0000_0110]);
    }

    #[test]
    fn decoder_limits_apply() {
        let options = raw_options(16, 2);
        let bmp = convert(vec![0; 4], OsStr::new("a.bmp"), &DecoderOptions::default(), &options)
            .unwrap();

        let limited = DecoderOptions::default().set_max_width(8);
        let result = convert(bmp, OsStr::new("a.raw"), &limited, &CmdOptions::new());

        assert!(matches!(
            result,
            Err(WorkflowErrors::BmpErrors(BmpErrors::TooLargeDimensions(..)))
        ));
    }
}
