/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A simple implementation of a bytestream reader
//! and writer.
//!
//! Both halves are endian aware. Every multi-byte read names its
//! byte order through a [`ByteEndian`], writes either pass one or use
//! the `_le` suffixed helpers.
pub use reader::{ByteIoError, ZByteReader};
pub use writer::ZByteWriter;

mod reader;
mod writer;

/// Byte order of a multi-byte integer in a stream
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ByteEndian {
    /// Little endian, least significant byte first
    LE,
    /// Big endian, most significant byte first
    BE
}
