/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! A monochrome BMP decoder and encoder
//!
//! This crate converts between the Windows BMP format and the packed
//! [`BitBuffer`](bittmapp_core::bitbuffer::BitBuffer) used by the editor.
//!
//! # Features
//! - `no_std` by default with `alloc` feature
//! - Decoding never panics on malformed input, every failure is an error value
//!
//! # Supported formats
//! - 1 bit per pixel, single plane, uncompressed (`BI_RGB`)
//! - Bottom-up rows (positive height). Top-down rows (negative height) are
//!   opt-in through [`DecoderOptions::set_allow_top_down`](bittmapp_core::options::DecoderOptions::set_allow_top_down)
//! - Widths that are a multiple of 8
//!
//! # Unsupported formats
//! - Anything with more than one bit per pixel
//! - RLE, bitfield, embedded PNG and JPEG compression
//!
//! # Bit order
//! Within each byte the least significant bit is the leftmost pixel,
//! on both the BMP side and the packed side, and a set bit is a painted pixel.
//!
//! # Example
//! ```
//! use bittmapp_bmp::{BmpDecoder, BmpEncoder};
//! use bittmapp_core::bitbuffer::BitBuffer;
//!
//! let mut pixels = BitBuffer::new(8, 2).unwrap();
//! pixels.set_pixel(3, 0).unwrap();
//!
//! let bytes = BmpEncoder::new(&pixels).encode().unwrap();
//! let decoded = BmpDecoder::new(&bytes).decode().unwrap();
//! assert!(decoded.get_pixel(3, 0).unwrap());
//! ```

#![no_std]
#![macro_use]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub use crate::common::BmpCompression;
pub use crate::decoder::{decode, BmpDecoder};
pub use crate::encoder::{encode, BmpEncoder};
pub use crate::errors::BmpErrors;
pub use crate::header::{probe_bmp, BmpHeader};

mod common;
mod decoder;
mod encoder;
mod errors;
mod header;
