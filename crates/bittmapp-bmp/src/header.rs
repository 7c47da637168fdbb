/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! The BMP file and info headers
//!
//! Only the classic layout is read: a 14 byte file header followed by
//! (at least) the 40 byte `BITMAPINFOHEADER`, every field a fixed-width
//! little endian integer at a fixed offset.
//!
//! ```text
//! offset  size  field
//!  0      2     "BM"
//!  2      4     file length
//! 10      4     pixel data offset
//! 14      4     info header length
//! 18      4     width
//! 22      4     height (signed, negative = top-down rows)
//! 26      2     planes
//! 28      2     bits per pixel
//! 30      4     compression
//! 34      4     image size
//! 46      4     palette colors
//! 50      4     important colors
//! ```
use bittmapp_core::bytestream::{ByteEndian, ZByteReader};
use bittmapp_core::log::trace;

use crate::common::*;
use crate::BmpErrors;

/// Cheap check on whether `bytes` could be a BMP file
///
/// This checks the length is enough for the headers, the `BM` magic bytes and
/// that the declared file length matches the length of `bytes`. It never
/// fails, a `false` means "don't bother decoding".
pub fn probe_bmp(bytes: &[u8]) -> bool {
    if bytes.len() < MIN_HEADER_SIZE {
        return false;
    }
    if &bytes[0..2] != b"BM" {
        return false;
    }
    let reader = ZByteReader::new(bytes);

    match reader.read_u32_at(OFFSET_FILE_LENGTH, ByteEndian::LE) {
        Ok(len) => len as usize == bytes.len(),
        Err(_) => false
    }
}

/// Fields of a validated monochrome BMP header
///
/// Obtained through [`BmpHeader::parse`], which only returns headers this
/// crate can go on to decode (barring row order, see [`is_top_down`](Self::is_top_down)).
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct BmpHeader {
    file_length:       u32,
    pixel_data_offset: u32,
    dib_header_length: u32,
    width:             u32,
    height:            i32,
    planes:            u16,
    bits_per_pixel:    u16,
    compression:       u32,
    image_size:        u32,
    palette_colors:    u32,
    important_colors:  u32
}

impl BmpHeader {
    /// Read and validate the header at the start of `bytes`.
    ///
    /// # Errors
    /// [`BmpErrors::MalformedHeader`] if `bytes` is shorter than 54 bytes,
    /// does not start with `BM`, declares a different file length, or
    /// declares a plane count other than 1, a bit depth other than 1 or any
    /// compression.
    pub fn parse(bytes: &[u8]) -> Result<BmpHeader, BmpErrors> {
        if bytes.len() < MIN_HEADER_SIZE {
            return Err(BmpErrors::MalformedHeader(
                "Not long enough, must be at least 54 bytes"
            ));
        }
        if &bytes[0..2] != b"BM" {
            return Err(BmpErrors::MalformedHeader("No BM magic bytes"));
        }

        let reader = ZByteReader::new(bytes);
        let le = ByteEndian::LE;

        let file_length = reader.read_u32_at(OFFSET_FILE_LENGTH, le)?;

        if file_length as usize != bytes.len() {
            return Err(BmpErrors::MalformedHeader(
                "Declared file length does not match data length"
            ));
        }

        let planes = reader.read_u16_at(OFFSET_PLANES, le)?;

        if planes != 1 {
            return Err(BmpErrors::MalformedHeader("Only one plane supported"));
        }

        let bits_per_pixel = reader.read_u16_at(OFFSET_BPP, le)?;

        if bits_per_pixel != 1 {
            return Err(BmpErrors::MalformedHeader(
                "Only monochrome (1 bit per pixel) data supported"
            ));
        }

        let compression = reader.read_u32_at(OFFSET_COMPRESSION, le)?;

        if compression != 0 {
            trace!("Compression: {:?}", BmpCompression::from_u32(compression));
            return Err(BmpErrors::MalformedHeader("Only uncompressed data supported"));
        }

        let header = BmpHeader {
            file_length,
            pixel_data_offset: reader.read_u32_at(OFFSET_PIXEL_DATA, le)?,
            dib_header_length: reader.read_u32_at(OFFSET_DIB_LENGTH, le)?,
            width: reader.read_u32_at(OFFSET_WIDTH, le)?,
            height: reader.read_i32_at(OFFSET_HEIGHT, le)?,
            planes,
            bits_per_pixel,
            compression,
            image_size: reader.read_u32_at(OFFSET_IMAGE_SIZE, le)?,
            palette_colors: reader.read_u32_at(OFFSET_COLORS, le)?,
            important_colors: reader.read_u32_at(OFFSET_IMPORTANT_COLORS, le)?
        };

        trace!("Width: {}", header.width);
        trace!("Height: {}", header.height);
        trace!("Pixel data offset: {}", header.pixel_data_offset);

        Ok(header)
    }

    /// Total file length as declared in the file header
    pub const fn file_length(&self) -> u32 {
        self.file_length
    }

    /// Offset from the start of the file to the first pixel row
    pub const fn pixel_data_offset(&self) -> u32 {
        self.pixel_data_offset
    }

    /// Length of the info (DIB) header
    pub const fn dib_header_length(&self) -> u32 {
        self.dib_header_length
    }

    /// Bytes taken by the file header and the info header together
    pub const fn headers_length(&self) -> usize {
        FILE_HEADER_SIZE + self.dib_header_length as usize
    }

    pub const fn width(&self) -> u32 {
        self.width
    }

    /// The height exactly as stored, the sign encodes row order
    pub const fn raw_height(&self) -> i32 {
        self.height
    }

    /// Number of rows regardless of row order
    pub const fn height(&self) -> u32 {
        self.height.unsigned_abs()
    }

    /// True when the first stored row is the top of the image
    pub const fn is_top_down(&self) -> bool {
        self.height < 0
    }

    pub const fn planes(&self) -> u16 {
        self.planes
    }

    pub const fn bits_per_pixel(&self) -> u16 {
        self.bits_per_pixel
    }

    pub const fn compression(&self) -> u32 {
        self.compression
    }

    /// Declared size of the pixel data, may be zero for uncompressed images
    pub const fn image_size(&self) -> u32 {
        self.image_size
    }

    /// Declared palette length, zero means the default of two
    pub const fn palette_colors(&self) -> u32 {
        self.palette_colors
    }

    pub const fn important_colors(&self) -> u32 {
        self.important_colors
    }

    /// Bytes per stored row, including the padding to 4 bytes
    pub fn row_bytes(&self) -> Option<usize> {
        padded_row_bytes(self.width as usize)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use crate::header::{probe_bmp, BmpHeader};
    use crate::BmpErrors;

    fn minimal_header(len: u32) -> Vec<u8> {
        let mut bytes = alloc::vec![0_u8; len as usize];
        bytes[0] = b'B';
        bytes[1] = b'M';
        bytes[2..6].copy_from_slice(&len.to_le_bytes());
        bytes[10..14].copy_from_slice(&62_u32.to_le_bytes());
        bytes[14..18].copy_from_slice(&40_u32.to_le_bytes());
        bytes[18..22].copy_from_slice(&8_u32.to_le_bytes());
        bytes[22..26].copy_from_slice(&(-2_i32).to_le_bytes());
        bytes[26..28].copy_from_slice(&1_u16.to_le_bytes());
        bytes[28..30].copy_from_slice(&1_u16.to_le_bytes());
        bytes
    }

    #[test]
    fn parse_reads_signed_height() {
        let bytes = minimal_header(70);
        let header = BmpHeader::parse(&bytes).unwrap();

        assert_eq!(header.width(), 8);
        assert_eq!(header.raw_height(), -2);
        assert_eq!(header.height(), 2);
        assert!(header.is_top_down());
        assert_eq!(header.headers_length(), 54);
        assert_eq!(header.row_bytes(), Some(4));
    }

    #[test]
    fn probe_agrees_with_length() {
        let bytes = minimal_header(70);
        assert!(probe_bmp(&bytes));
        assert!(!probe_bmp(&bytes[..69]));
        assert!(matches!(
            BmpHeader::parse(&bytes[..69]),
            Err(BmpErrors::MalformedHeader(_))
        ));
    }
}
