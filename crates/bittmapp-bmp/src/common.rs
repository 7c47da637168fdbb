/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

/// Size of the `BITMAPFILEHEADER`
pub(crate) const FILE_HEADER_SIZE: usize = 14;
/// Size of the `BITMAPINFOHEADER`
pub(crate) const INFO_HEADER_SIZE: usize = 40;
/// File header + info header, anything shorter cannot be a BMP we read
pub(crate) const MIN_HEADER_SIZE: usize = FILE_HEADER_SIZE + INFO_HEADER_SIZE;
/// Two BGR0 palette entries
pub(crate) const PALETTE_SIZE: usize = 2 * 4;
/// Where the encoder places pixel data
pub(crate) const PIXEL_DATA_OFFSET: usize = MIN_HEADER_SIZE + PALETTE_SIZE;

// field offsets, all little endian
pub(crate) const OFFSET_FILE_LENGTH: usize = 2;
pub(crate) const OFFSET_PIXEL_DATA: usize = 10;
pub(crate) const OFFSET_DIB_LENGTH: usize = 14;
pub(crate) const OFFSET_WIDTH: usize = 18;
pub(crate) const OFFSET_HEIGHT: usize = 22;
pub(crate) const OFFSET_PLANES: usize = 26;
pub(crate) const OFFSET_BPP: usize = 28;
pub(crate) const OFFSET_COMPRESSION: usize = 30;
pub(crate) const OFFSET_IMAGE_SIZE: usize = 34;
pub(crate) const OFFSET_COLORS: usize = 46;
pub(crate) const OFFSET_IMPORTANT_COLORS: usize = 50;

/// Bytes one stored row of a 1 bpp image of `width` pixels takes,
/// rows are padded to a multiple of 4 bytes.
///
/// Returns `None` on overflow
pub(crate) fn padded_row_bytes(width: usize) -> Option<usize> {
    Some(width.checked_add(31)? / 32 * 4)
}

/// The `biCompression` values
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum BmpCompression {
    RGB,
    RLE8,
    RLE4,
    BITFIELDS,
    JPEG,
    PNG
}

impl BmpCompression {
    pub fn from_u32(num: u32) -> Option<BmpCompression> {
        match num {
            0 => Some(BmpCompression::RGB),
            1 => Some(BmpCompression::RLE8),
            2 => Some(BmpCompression::RLE4),
            3 => Some(BmpCompression::BITFIELDS),
            4 => Some(BmpCompression::JPEG),
            5 => Some(BmpCompression::PNG),
            _ => None
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::common::padded_row_bytes;

    #[test]
    fn rows_are_padded_to_four_bytes() {
        assert_eq!(padded_row_bytes(1), Some(4));
        assert_eq!(padded_row_bytes(8), Some(4));
        assert_eq!(padded_row_bytes(32), Some(4));
        assert_eq!(padded_row_bytes(33), Some(8));
        assert_eq!(padded_row_bytes(64), Some(8));
        assert_eq!(padded_row_bytes(usize::MAX), None);
    }
}
