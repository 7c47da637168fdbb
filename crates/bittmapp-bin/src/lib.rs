/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::process::exit;

use log::error;

use crate::workflow::run_from_cmd;

mod cmd_args;
mod cmd_parsers;
mod file_io;
mod probe_files;
mod serde;
mod workflow;

pub fn main() {
    let cmd = cmd_args::create_cmd_args();
    let options = cmd.get_matches();

    let Some((name, sub_options)) = options.subcommand() else {
        eprintln!("No subcommand given, try --help");
        exit(-1);
    };

    cmd_parsers::global_options::setup_logger(sub_options);

    let parsed_opts = cmd_parsers::global_options::parse_options(sub_options);

    if let Err(reason) = run_from_cmd(name, sub_options, &parsed_opts) {
        println!();
        error!(" Could not complete workflow, reason {:?}", reason);
        println!();
        exit(-1);
    }
}
