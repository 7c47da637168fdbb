/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

// Monochrome BMP pixel data is stored as rows of `width` bits, each row
// padded with zero bytes to a multiple of 4 bytes. With a positive height
// the first stored row is the bottom of the image (bottom-up), with a
// negative height it is the top (top-down).
//
// The packed BitBuffer stores rows top first with no padding at all, so
// decoding is a matter of walking the stored rows, dropping the padding and
// placing each row at its image position. Widths are multiples of 8 and both
// sides keep the leftmost pixel in the least significant bit, so whole bytes
// can be moved without touching individual bits.

use bittmapp_core::bitbuffer::BitBuffer;
use bittmapp_core::bytestream::ZByteReader;
use bittmapp_core::log::{trace, warn};
use bittmapp_core::options::DecoderOptions;

use crate::common::{FILE_HEADER_SIZE, PALETTE_SIZE};
use crate::{BmpErrors, BmpHeader};

/// Decode `bytes` with default options.
///
/// Shorthand for `BmpDecoder::new(bytes).decode()`
pub fn decode(bytes: &[u8]) -> Result<BitBuffer, BmpErrors> {
    BmpDecoder::new(bytes).decode()
}

/// A monochrome BMP decoder.
///
/// # Usage
/// ## Extracting image metadata
/// ```no_run
/// use bittmapp_bmp::BmpDecoder;
///
/// fn main() -> Result<(), bittmapp_bmp::BmpErrors> {
///     let source = std::fs::read("image.bmp").unwrap();
///     let mut decoder = BmpDecoder::new(&source);
///     decoder.decode_headers()?;
///     // after decoding headers, we can safely access the image metadata
///     let (w, h) = decoder.dimensions().unwrap();
///     println!("Image width: {}\t Image height: {}", w, h);
///     Ok(())
/// }
/// ```
///
/// ## Just getting the pixels
/// ```no_run
/// use bittmapp_bmp::BmpDecoder;
///
/// fn main() -> Result<(), bittmapp_bmp::BmpErrors> {
///     let source = std::fs::read("image.bmp").unwrap();
///     let pixels = BmpDecoder::new(&source).decode()?;
///     println!("Set pixels: {}", pixels.count_set());
///     Ok(())
/// }
/// ```
pub struct BmpDecoder<'a> {
    bytes:   &'a [u8],
    options: DecoderOptions,
    header:  Option<BmpHeader>
}

impl<'a> BmpDecoder<'a> {
    /// Create a new bmp decoder that reads data from
    /// `data`
    pub fn new(data: &'a [u8]) -> BmpDecoder<'a> {
        BmpDecoder::new_with_options(data, DecoderOptions::default())
    }

    /// Create a new decoder instance with specified options
    pub fn new_with_options(data: &'a [u8], options: DecoderOptions) -> BmpDecoder<'a> {
        BmpDecoder {
            bytes: data,
            options,
            header: None
        }
    }

    /// Parse and validate the headers, storing them in the decoder
    ///
    /// Calling this again after a success is a no-op.
    pub fn decode_headers(&mut self) -> Result<(), BmpErrors> {
        if self.header.is_some() {
            return Ok(());
        }
        let header = BmpHeader::parse(self.bytes)?;

        let width = header.width() as usize;
        let height = header.height() as usize;

        if width > self.options.get_max_width() {
            return Err(BmpErrors::TooLargeDimensions(
                "width",
                self.options.get_max_width(),
                width
            ));
        }
        if height > self.options.get_max_height() {
            return Err(BmpErrors::TooLargeDimensions(
                "height",
                self.options.get_max_height(),
                height
            ));
        }
        self.header = Some(header);
        Ok(())
    }

    /// The parsed header, `None` until headers have been decoded
    pub const fn header(&self) -> Option<&BmpHeader> {
        self.header.as_ref()
    }

    /// Image `(width, height)`, `None` until headers have been decoded
    pub fn dimensions(&self) -> Option<(usize, usize)> {
        self.header
            .as_ref()
            .map(|h| (h.width() as usize, h.height() as usize))
    }

    /// Decode the image into a freshly allocated [`BitBuffer`]
    ///
    /// # Errors
    /// - Any header error from [`BmpHeader::parse`]
    /// - [`BmpErrors::MalformedHeader`] if the width or height is zero
    /// - [`BmpErrors::UnsupportedFormat`] for widths that are not a multiple of 8
    ///   and for top-down images unless allowed in the options
    /// - [`BmpErrors::TooSmallBuffer`] if the pixel data is cut short
    ///
    /// The input is checked to hold every pixel row before the output is allocated.
    pub fn decode(&mut self) -> Result<BitBuffer, BmpErrors> {
        self.decode_headers()?;

        let header = match self.header {
            Some(header) => header,
            None => return Err(BmpErrors::MalformedHeader("Headers not decoded"))
        };

        if header.is_top_down() && !self.options.get_allow_top_down() {
            return Err(BmpErrors::UnsupportedFormat(
                "Top-down row order (negative height) is not supported"
            ));
        }

        let width = header.width() as usize;
        let height = header.height() as usize;

        if width == 0 || height == 0 {
            return Err(BmpErrors::MalformedHeader("Zero width or height"));
        }
        if width % 8 != 0 {
            return Err(BmpErrors::UnsupportedFormat(
                "Width is not a multiple of 8"
            ));
        }

        let row_bytes = header
            .row_bytes()
            .ok_or(BmpErrors::TooLargeDimensions("width", usize::MAX, width))?;

        self.check_declared_sizes(&header, row_bytes, height)?;

        let start = header.pixel_data_offset() as usize;
        let end = row_bytes
            .checked_mul(height)
            .and_then(|x| x.checked_add(start))
            .ok_or(BmpErrors::TooLargeDimensions("height", usize::MAX, height))?;

        // the rows must be present before their storage is allocated
        if end > self.bytes.len() {
            return Err(BmpErrors::TooSmallBuffer(end, self.bytes.len()));
        }

        let mut output = BitBuffer::new(width, height)?;

        let reader = ZByteReader::new(self.bytes);
        let packed_row = width / 8;
        let bottom_up = !header.is_top_down();

        trace!("Row bytes: {}", row_bytes);
        trace!("Bottom up: {}", bottom_up);

        for y_src in 0..height {
            let row = reader.peek_at(start + y_src * row_bytes, packed_row)?;

            let y_dst = if bottom_up { height - 1 - y_src } else { y_src };

            match output.row_mut(y_dst) {
                Some(out) => out.copy_from_slice(row),
                None => return Err(BmpErrors::TooSmallBuffer(y_dst + 1, height))
            }
        }

        Ok(output)
    }

    /// Cross check the optional size fields against the dimensions,
    /// mismatches are warnings unless the decoder is strict
    fn check_declared_sizes(
        &self, header: &BmpHeader, row_bytes: usize, height: usize
    ) -> Result<(), BmpErrors> {
        let strict = self.options.get_strict_mode();

        let computed = row_bytes.saturating_mul(height);
        let declared = header.image_size() as usize;

        if declared != 0 && declared != computed {
            if strict {
                return Err(BmpErrors::MalformedHeader(
                    "Declared image size does not match dimensions"
                ));
            }
            warn!(
                "Declared image size {} does not match computed size {}",
                declared, computed
            );
        }
        if header.palette_colors() > 2 {
            if strict {
                return Err(BmpErrors::MalformedHeader(
                    "More than two palette colors for a monochrome image"
                ));
            }
            warn!(
                "Incorrect number of colors {} for depth 1",
                header.palette_colors()
            );
        }
        let palette_end = FILE_HEADER_SIZE
            .saturating_add(header.dib_header_length() as usize)
            .saturating_add(PALETTE_SIZE);

        if (header.pixel_data_offset() as usize) < palette_end {
            if strict {
                return Err(BmpErrors::MalformedHeader(
                    "Pixel data overlaps the headers"
                ));
            }
            warn!(
                "Pixel data offset {} lies inside the headers",
                header.pixel_data_offset()
            );
        }
        Ok(())
    }
}
