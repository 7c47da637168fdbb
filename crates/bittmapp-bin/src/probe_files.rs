/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use bittmapp_bmp::{probe_bmp, BmpDecoder};
use clap::ArgMatches;
use log::{info, warn};

use crate::cmd_parsers::get_decoder_options;
use crate::file_io::read_file;
use crate::serde::Metadata;
use crate::workflow::WorkflowErrors;

/// Probe input files, extract headers, and print them to standard output.
///
/// Files that are not monochrome BMPs are reported and skipped.
pub fn probe_input_files(args: &ArgMatches) -> Result<(), WorkflowErrors> {
    // we only read headers so size limits don't matter
    let options = get_decoder_options(args)
        .set_max_width(usize::MAX)
        .set_max_height(usize::MAX);

    let Some(files) = args.get_raw("in") else {
        return Ok(());
    };

    for in_file in files {
        let data = read_file(in_file)?;

        if !probe_bmp(&data) {
            warn!("{:?} does not look like a BMP file, skipping", in_file);
            continue;
        }
        let mut decoder = BmpDecoder::new_with_options(&data, options);

        match decoder.decode_headers() {
            Ok(()) => {
                if let Some(header) = decoder.header() {
                    let metadata =
                        Metadata::new(in_file.to_os_string(), data.len() as u64, header);

                    let json = serde_json::to_string_pretty(&metadata)
                        .map_err(|e| WorkflowErrors::GenericString(e.to_string()))?;
                    println!("{json}");
                }
            }
            Err(e) => {
                info!("Header of {:?} was rejected", in_file);
                warn!("{:?}: {}", in_file, e);
            }
        }
    }
    Ok(())
}
