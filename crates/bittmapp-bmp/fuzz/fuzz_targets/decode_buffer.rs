/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![no_main]

use bittmapp_core::options::DecoderOptions;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let options = DecoderOptions::default().set_allow_top_down(true);
    let mut decoder = bittmapp_bmp::BmpDecoder::new_with_options(data, options);

    if let Ok(pixels) = decoder.decode() {
        // anything we decode we must be able to write back
        let _ = bittmapp_bmp::encode(&pixels).unwrap();
    }
});
