/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Encoding support for monochrome BMP
use alloc::vec;
use alloc::vec::Vec;

use bittmapp_core::bitbuffer::BitBuffer;
use bittmapp_core::bytestream::ZByteWriter;
use bittmapp_core::log::trace;
use bittmapp_core::options::EncoderOptions;

use crate::common::{padded_row_bytes, INFO_HEADER_SIZE, PIXEL_DATA_OFFSET};
use crate::BmpErrors;

/// Palette written to every file, BGR0.
///
/// Index 0 (clear bit) is white and index 1 (set bit) is black, so painted
/// pixels show up black in other viewers.
const PALETTE: [u8; 8] = [0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00, 0x00];

/// Encode `pixels` with default options.
///
/// Shorthand for `BmpEncoder::new(pixels).encode()`
pub fn encode(pixels: &BitBuffer) -> Result<Vec<u8>, BmpErrors> {
    BmpEncoder::new(pixels).encode()
}

/// A monochrome BMP encoder
///
/// The output is the smallest valid layout: a 14 byte file header, a 40 byte
/// info header, a two color palette and bottom-up pixel rows padded to
/// 4 bytes.
///
/// # Example
/// ```
/// use bittmapp_bmp::BmpEncoder;
/// use bittmapp_core::bitbuffer::BitBuffer;
///
/// let pixels = BitBuffer::new(16, 4).unwrap();
/// let bytes = BmpEncoder::new(&pixels).encode().unwrap();
/// assert_eq!(bytes.len(), 62 + 4 * 4);
/// ```
pub struct BmpEncoder<'a> {
    pixels:  &'a BitBuffer,
    options: EncoderOptions
}

impl<'a> BmpEncoder<'a> {
    /// Create a new encoder which will encode `pixels`
    pub fn new(pixels: &'a BitBuffer) -> BmpEncoder<'a> {
        BmpEncoder::new_with_options(pixels, EncoderOptions::default())
    }

    pub fn new_with_options(pixels: &'a BitBuffer, options: EncoderOptions) -> BmpEncoder<'a> {
        BmpEncoder { pixels, options }
    }

    /// Size of the pixel rows and of the whole file
    fn sizes(&self) -> Result<(usize, usize, usize), BmpErrors> {
        let (width, height) = self.pixels.dimensions();

        if width > i32::MAX as usize {
            return Err(BmpErrors::TooLargeDimensions("width", i32::MAX as usize, width));
        }
        if height > i32::MAX as usize {
            return Err(BmpErrors::TooLargeDimensions(
                "height",
                i32::MAX as usize,
                height
            ));
        }
        let too_large = || BmpErrors::TooLargeDimensions("file size", u32::MAX as usize, usize::MAX);

        let row_bytes = padded_row_bytes(width).ok_or_else(too_large)?;
        let image_size = row_bytes.checked_mul(height).ok_or_else(too_large)?;
        let file_size = image_size
            .checked_add(PIXEL_DATA_OFFSET)
            .ok_or_else(too_large)?;

        if file_size > u32::MAX as usize {
            return Err(BmpErrors::TooLargeDimensions(
                "file size",
                u32::MAX as usize,
                file_size
            ));
        }
        Ok((row_bytes, image_size, file_size))
    }

    /// Number of bytes [`encode`](Self::encode) will produce
    pub fn output_size(&self) -> Result<usize, BmpErrors> {
        Ok(self.sizes()?.2)
    }

    fn encode_headers(
        &self, stream: &mut ZByteWriter, image_size: usize, file_size: usize
    ) -> Result<(), BmpErrors> {
        let (width, height) = self.pixels.dimensions();
        let ppm = self.options.get_pixels_per_meter() as i32;

        // file header
        stream.write_all(b"BM")?;
        stream.write_u32_le_err(file_size as u32)?;
        // reserved
        stream.write_u32_le_err(0)?;
        stream.write_u32_le_err(PIXEL_DATA_OFFSET as u32)?;
        // info header
        stream.write_u32_le_err(INFO_HEADER_SIZE as u32)?;
        stream.write_u32_le_err(width as u32)?;
        // positive, rows are written bottom-up
        stream.write_i32_le_err(height as i32)?;
        // planes
        stream.write_u16_le_err(1)?;
        // bits per pixel
        stream.write_u16_le_err(1)?;
        // BI_RGB
        stream.write_u32_le_err(0)?;
        stream.write_u32_le_err(image_size as u32)?;
        stream.write_i32_le_err(ppm)?;
        stream.write_i32_le_err(ppm)?;
        // palette colors and important colors, zero means all
        stream.write_u32_le_err(0)?;
        stream.write_u32_le_err(0)?;

        stream.write_all(&PALETTE)?;

        Ok(())
    }

    /// Encode the image returning the file contents
    pub fn encode(&self) -> Result<Vec<u8>, BmpErrors> {
        let (_, _, file_size) = self.sizes()?;
        let mut out = vec![0; file_size];

        let written = self.encode_into(&mut out)?;
        out.truncate(written);

        Ok(out)
    }

    /// Encode into `sink`, returning the number of bytes written.
    ///
    /// `sink` must hold at least [`output_size`](Self::output_size) bytes.
    pub fn encode_into(&self, sink: &mut [u8]) -> Result<usize, BmpErrors> {
        let (row_bytes, image_size, file_size) = self.sizes()?;

        if sink.len() < file_size {
            return Err(BmpErrors::TooSmallBuffer(file_size, sink.len()));
        }
        let mut stream = ZByteWriter::new(sink);

        self.encode_headers(&mut stream, image_size, file_size)?;

        let height = self.pixels.height();
        let packed_row = self.pixels.width() / 8;
        let padding = row_bytes - packed_row;

        trace!("Encoding {} rows of {} bytes", height, row_bytes);

        // bottom row first
        for y in (0..height).rev() {
            let row = self
                .pixels
                .row(y)
                .ok_or(BmpErrors::TooSmallBuffer(y + 1, height))?;

            stream.write_all(row)?;
            stream.write_zeroes(padding)?;
        }

        Ok(stream.position())
    }
}
