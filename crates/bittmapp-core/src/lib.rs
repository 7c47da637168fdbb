/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Core routines shared by the bittmapp crates
//!
//! This crate provides
//!
//! - [`BitBuffer`](crate::bitbuffer::BitBuffer), a packed 1-bit-per-pixel raster
//! - [`SelectionMask`](crate::selection::SelectionMask), a same-shaped raster of selected pixels
//! - [`Document`](crate::document::Document), which pairs the two and applies editing tools
//! - A bytestream reader and writer with endian aware reads and writes
//! - Decoder and encoder options
//!
//! This library is `#[no_std]` with `alloc` needed for the pixel storage.
//!
//! # Features
//!  - `std`: Implements `std::error::Error` for the error types.
//!
//!  - `log`: Forwards the internal logging macros to the [log](https://docs.rs/log) crate.
//!     Without it the macros compile to nothing.
#![cfg_attr(not(feature = "std"), no_std)]
#![macro_use]
extern crate alloc;

pub mod bitbuffer;
pub mod bytestream;
pub mod document;
pub mod errors;
pub mod log;
pub mod options;
pub mod selection;
