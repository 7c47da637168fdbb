/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Debug, Display, Formatter};

use bittmapp_core::bytestream::ByteIoError;
use bittmapp_core::errors::BitmapErrors;

/// BMP errors that can occur during decoding and encoding
#[non_exhaustive]
pub enum BmpErrors {
    /// The header failed structural validation: too short,
    /// no `BM` magic, wrong file length, or a plane count, bit depth or
    /// compression this codec does not read
    MalformedHeader(&'static str),
    /// The header is well formed but describes a variant
    /// the decoder does not implement
    UnsupportedFormat(&'static str),
    /// Too large dimensions for a given width or
    /// height, name, limit, found
    TooLargeDimensions(&'static str, usize, usize),
    /// The pixel data is shorter than the header promises, expected
    /// at least a size but got another size
    TooSmallBuffer(usize, usize),
    /// The image shape cannot be represented as a packed bitmap
    Bitmap(BitmapErrors),
    IoErrors(ByteIoError)
}

impl Debug for BmpErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MalformedHeader(reason) => {
                writeln!(f, "Malformed BMP header: {}", reason)
            }
            Self::UnsupportedFormat(reason) => {
                writeln!(f, "Unsupported BMP format: {}", reason)
            }
            Self::TooLargeDimensions(dimension, expected, found) => {
                writeln!(
                    f,
                    "Too large dimensions for {dimension} , {found} exceeds {expected}"
                )
            }
            Self::TooSmallBuffer(expected, found) => {
                writeln!(
                    f,
                    "Too small of buffer, expected {} but found {}",
                    expected, found
                )
            }
            Self::Bitmap(err) => {
                writeln!(f, "{:?}", err)
            }
            Self::IoErrors(err) => {
                writeln!(f, "{:?}", err)
            }
        }
    }
}

impl Display for BmpErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        Debug::fmt(self, f)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BmpErrors {}

impl From<ByteIoError> for BmpErrors {
    fn from(value: ByteIoError) -> Self {
        BmpErrors::IoErrors(value)
    }
}

impl From<BitmapErrors> for BmpErrors {
    fn from(value: BitmapErrors) -> Self {
        BmpErrors::Bitmap(value)
    }
}
