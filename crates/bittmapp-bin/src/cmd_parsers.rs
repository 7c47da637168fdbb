/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use bittmapp_core::options::DecoderOptions;
use clap::ArgMatches;

pub mod global_options;

pub fn get_decoder_options(options: &ArgMatches) -> DecoderOptions {
    let max_width = *options.get_one::<usize>("max-width").unwrap();
    let max_height = *options.get_one::<usize>("max-height").unwrap();
    let strict_mode = options.get_flag("strict");
    let allow_top_down = options.get_flag("allow-top-down");

    DecoderOptions::new_cmd()
        .set_max_height(max_height)
        .set_max_width(max_width)
        .set_strict_mode(strict_mode)
        .set_allow_top_down(allow_top_down)
}
