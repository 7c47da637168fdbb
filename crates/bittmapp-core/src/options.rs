/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Decoder and encoder options
//!
//! Options are plain `Copy` values configured builder style,
//! each setter consumes and returns the options.

/// Options respected by the BMP decoder
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct DecoderOptions {
    max_width:      usize,
    max_height:     usize,
    strict_mode:    bool,
    allow_top_down: bool
}

impl Default for DecoderOptions {
    fn default() -> Self {
        Self {
            max_width:      1 << 14,
            max_height:     1 << 14,
            strict_mode:    false,
            allow_top_down: false
        }
    }
}

impl DecoderOptions {
    /// Options that turn recoverable inconsistencies into errors
    pub fn new_strict() -> DecoderOptions {
        DecoderOptions::default().set_strict_mode(true)
    }

    /// Options for command line use, no dimension limits
    pub fn new_cmd() -> DecoderOptions {
        DecoderOptions::default()
            .set_max_width(usize::MAX)
            .set_max_height(usize::MAX)
    }

    /// Get maximum width configured for which the decoder
    /// should not try to decode images greater than this width
    pub const fn get_max_width(&self) -> usize {
        self.max_width
    }

    /// Get maximum height configured for which the decoder should
    /// not try to decode images greater than this height
    pub const fn get_max_height(&self) -> usize {
        self.max_height
    }

    /// Return true whether the decoder should be in strict mode
    /// and reject inconsistent header fields instead of warning
    pub const fn get_strict_mode(&self) -> bool {
        self.strict_mode
    }

    /// Return true if images stored top row first (negative height)
    /// should be decoded instead of rejected
    pub const fn get_allow_top_down(&self) -> bool {
        self.allow_top_down
    }

    /// Set maximum width for which the decoder should not try
    /// decoding images greater than that width
    pub fn set_max_width(mut self, width: usize) -> Self {
        self.max_width = width;
        self
    }

    /// Set maximum height for which the decoder should not try
    /// decoding images greater than that height
    pub fn set_max_height(mut self, height: usize) -> Self {
        self.max_height = height;
        self
    }

    /// Set whether the decoder should be in strict mode.
    ///
    /// In strict mode a declared image size or palette color count that
    /// disagrees with what the dimensions imply is an error, otherwise it is
    /// logged as a warning and ignored.
    pub fn set_strict_mode(mut self, yes: bool) -> Self {
        self.strict_mode = yes;
        self
    }

    /// Allow decoding of top-down images.
    ///
    /// Off by default, such images are rejected as unsupported.
    pub fn set_allow_top_down(mut self, yes: bool) -> Self {
        self.allow_top_down = yes;
        self
    }
}

/// Options respected by the BMP encoder
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct EncoderOptions {
    pixels_per_meter: u32
}

impl Default for EncoderOptions {
    fn default() -> Self {
        // 72 DPI
        Self {
            pixels_per_meter: 2835
        }
    }
}

impl EncoderOptions {
    /// Resolution written into both the horizontal and vertical
    /// resolution header fields
    pub const fn get_pixels_per_meter(&self) -> u32 {
        self.pixels_per_meter
    }

    pub fn set_pixels_per_meter(mut self, ppm: u32) -> Self {
        self.pixels_per_meter = ppm;
        self
    }
}
