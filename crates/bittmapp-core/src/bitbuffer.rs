/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A packed one bit per pixel raster
//!
//! Pixels are stored row after row with no padding between rows,
//! pixel `(x, y)` lives at bit index `y * width + x`. The containing byte is
//! `index / 8` and within it the least significant bit is the leftmost pixel.
//!
//! Widths must be a multiple of 8 so every row starts on a byte boundary.
use alloc::vec;
use alloc::vec::Vec;

use crate::errors::BitmapErrors;

/// A fixed-shape monochrome raster, one bit per pixel.
///
/// A set bit is a painted (black) pixel, a clear bit is background (white).
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct BitBuffer {
    width:  usize,
    height: usize,
    bits:   Vec<u8>
}

impl core::fmt::Debug for BitBuffer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BitBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.bits.len())
            .finish()
    }
}

/// Number of bytes a `width` x `height` packed raster needs,
/// or an error if the shape is not representable.
pub fn packed_len(width: usize, height: usize) -> Result<usize, BitmapErrors> {
    if width == 0 || height == 0 {
        return Err(BitmapErrors::InvalidDimension {
            width,
            height,
            reason: "width and height must be positive"
        });
    }
    if width % 8 != 0 {
        return Err(BitmapErrors::InvalidDimension {
            width,
            height,
            reason: "width must be a multiple of 8"
        });
    }
    (width / 8)
        .checked_mul(height)
        .ok_or(BitmapErrors::InvalidDimension {
            width,
            height,
            reason: "dimensions overflow"
        })
}

impl BitBuffer {
    /// Create a new buffer with every pixel clear
    ///
    /// # Errors
    /// `InvalidDimension` if width is not a positive multiple of 8
    /// or height is zero
    pub fn new(width: usize, height: usize) -> Result<BitBuffer, BitmapErrors> {
        let size = packed_len(width, height)?;

        Ok(BitBuffer {
            width,
            height,
            bits: vec![0; size]
        })
    }

    /// Wrap existing packed bytes, e.g. a raw dump read from disk.
    ///
    /// `bytes` must be exactly `width * height / 8` long.
    pub fn from_raw(bytes: Vec<u8>, width: usize, height: usize) -> Result<BitBuffer, BitmapErrors> {
        let expected = packed_len(width, height)?;

        if bytes.len() != expected {
            return Err(BitmapErrors::LengthMismatch {
                expected,
                found: bytes.len()
            });
        }
        Ok(BitBuffer {
            width,
            height,
            bits: bytes
        })
    }

    /// Replace the storage and shape wholesale.
    ///
    /// On error the buffer is left untouched.
    pub fn replace(&mut self, bytes: Vec<u8>, width: usize, height: usize) -> Result<(), BitmapErrors> {
        *self = BitBuffer::from_raw(bytes, width, height)?;
        Ok(())
    }

    /// Give the buffer a new shape, discarding every pixel
    pub fn resize(&mut self, width: usize, height: usize) -> Result<(), BitmapErrors> {
        *self = BitBuffer::new(width, height)?;
        Ok(())
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    /// Return `(width, height)`
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Whether `other` has the same width and height
    pub const fn same_shape(&self, other: &BitBuffer) -> bool {
        self.width == other.width && self.height == other.height
    }

    pub const fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// The packed bytes in their native (headerless) layout
    pub fn as_bytes(&self) -> &[u8] {
        &self.bits
    }

    /// Consume the buffer returning the packed bytes
    pub fn into_raw(self) -> Vec<u8> {
        self.bits
    }

    #[inline(always)]
    const fn locate(&self, x: usize, y: usize) -> (usize, u8) {
        let index = y * self.width + x;
        (index / 8, 1 << (index % 8))
    }

    fn check_bounds(&self, x: usize, y: usize) -> Result<(usize, u8), BitmapErrors> {
        if !self.in_bounds(x, y) {
            return Err(BitmapErrors::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height
            });
        }
        Ok(self.locate(x, y))
    }

    /// Paint pixel `(x, y)`. Setting an already set pixel is a no-op.
    pub fn set_pixel(&mut self, x: usize, y: usize) -> Result<(), BitmapErrors> {
        let (byte, mask) = self.check_bounds(x, y)?;
        self.bits[byte] |= mask;
        Ok(())
    }

    /// Clear pixel `(x, y)`. Clearing an already clear pixel is a no-op.
    pub fn clear_pixel(&mut self, x: usize, y: usize) -> Result<(), BitmapErrors> {
        let (byte, mask) = self.check_bounds(x, y)?;
        self.bits[byte] &= !mask;
        Ok(())
    }

    /// Paint a pixel the caller already knows is inside the buffer
    #[inline]
    pub(crate) fn set_in_bounds(&mut self, x: usize, y: usize) {
        debug_assert!(self.in_bounds(x, y));
        let (byte, mask) = self.locate(x, y);
        self.bits[byte] |= mask;
    }

    /// Set or clear pixel `(x, y)` depending on `value`
    pub fn set_pixel_to(&mut self, x: usize, y: usize, value: bool) -> Result<(), BitmapErrors> {
        if value {
            self.set_pixel(x, y)
        } else {
            self.clear_pixel(x, y)
        }
    }

    /// Read pixel `(x, y)`, erroring out for coordinates outside the buffer
    pub fn get_pixel(&self, x: usize, y: usize) -> Result<bool, BitmapErrors> {
        let (byte, mask) = self.check_bounds(x, y)?;
        Ok(self.bits[byte] & mask != 0)
    }

    /// Read pixel `(x, y)`, treating anything outside the buffer as clear.
    ///
    /// Neighbour lookups around the edges of the raster rely on this.
    #[inline]
    pub fn is_set(&self, x: usize, y: usize) -> bool {
        if !self.in_bounds(x, y) {
            return false;
        }
        let (byte, mask) = self.locate(x, y);
        self.bits[byte] & mask != 0
    }

    /// Set every pixel to `value`
    pub fn fill(&mut self, value: bool) {
        self.bits.fill(if value { 0xFF } else { 0x00 });
    }

    /// Flip every pixel
    pub fn invert(&mut self) {
        self.bits.iter_mut().for_each(|x| *x = !*x);
    }

    /// Number of set pixels
    pub fn count_set(&self) -> usize {
        self.bits.iter().map(|x| x.count_ones() as usize).sum()
    }

    /// The packed bytes of row `y`, `width / 8` bytes long
    pub fn row(&self, y: usize) -> Option<&[u8]> {
        let stride = self.width / 8;
        self.bits.get(y.checked_mul(stride)?..(y + 1).checked_mul(stride)?)
    }

    /// Mutable packed bytes of row `y`
    pub fn row_mut(&mut self, y: usize) -> Option<&mut [u8]> {
        let stride = self.width / 8;
        self.bits
            .get_mut(y.checked_mul(stride)?..(y + 1).checked_mul(stride)?)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use crate::bitbuffer::BitBuffer;
    use crate::errors::BitmapErrors;

    #[test]
    fn new_buffer_is_clear() {
        for (w, h) in [(8, 1), (16, 3), (32, 32), (64, 5)] {
            let buffer = BitBuffer::new(w, h).unwrap();
            assert_eq!(buffer.as_bytes().len(), (w * h + 7) / 8);

            for y in 0..h {
                for x in 0..w {
                    assert_eq!(buffer.get_pixel(x, y), Ok(false));
                }
            }
        }
    }

    #[test]
    fn bad_dimensions_are_rejected() {
        for (w, h) in [(0, 8), (8, 0), (7, 8), (12, 1)] {
            let err = BitBuffer::new(w, h).unwrap_err();
            assert!(err.is_invalid_dimension(), "{w}x{h} accepted");
        }
    }

    #[test]
    fn set_then_clear() {
        let mut buffer = BitBuffer::new(16, 4).unwrap();

        buffer.set_pixel(9, 2).unwrap();
        assert_eq!(buffer.get_pixel(9, 2), Ok(true));
        assert_eq!(buffer.count_set(), 1);

        buffer.clear_pixel(9, 2).unwrap();
        assert_eq!(buffer.get_pixel(9, 2), Ok(false));
        assert_eq!(buffer.count_set(), 0);
    }

    #[test]
    fn set_is_idempotent() {
        let mut once = BitBuffer::new(8, 2).unwrap();
        let mut twice = BitBuffer::new(8, 2).unwrap();

        once.set_pixel(3, 1).unwrap();
        twice.set_pixel(3, 1).unwrap();
        twice.set_pixel(3, 1).unwrap();
        assert_eq!(once, twice);

        // clearing a clear pixel is fine too
        once.clear_pixel(0, 0).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn bit_layout_is_lsb_first_row_major() {
        let mut buffer = BitBuffer::new(16, 2).unwrap();

        buffer.set_pixel(0, 0).unwrap();
        buffer.set_pixel(15, 0).unwrap();
        buffer.set_pixel(1, 1).unwrap();

        // row 0: byte 0 bit 0, byte 1 bit 7
        // row 1: byte 2 bit 1
        assert_eq!(buffer.as_bytes(), &[0x01, 0x80, 0x02, 0x00]);
        assert_eq!(buffer.row(1), Some(&[0x02, 0x00][..]));
    }

    #[test]
    fn out_of_range_coordinates() {
        let mut buffer = BitBuffer::new(8, 2).unwrap();

        for (x, y) in [(8, 0), (0, 2), (100, 100)] {
            assert!(matches!(
                buffer.set_pixel(x, y),
                Err(BitmapErrors::OutOfBounds { .. })
            ));
            assert!(buffer.clear_pixel(x, y).unwrap_err().is_out_of_bounds());
            assert!(buffer.get_pixel(x, y).unwrap_err().is_out_of_bounds());
            assert!(!buffer.is_set(x, y));
        }
        assert_eq!(buffer.count_set(), 0);
    }

    #[test]
    fn replace_checks_length() {
        let mut buffer = BitBuffer::new(8, 1).unwrap();

        let err = buffer.replace(vec![0xFF; 3], 16, 2).unwrap_err();
        assert_eq!(
            err,
            BitmapErrors::LengthMismatch {
                expected: 4,
                found:    3
            }
        );
        assert!(err.is_invalid_dimension());
        // untouched after the failed call
        assert_eq!(buffer.dimensions(), (8, 1));

        buffer.replace(vec![0xFF; 4], 16, 2).unwrap();
        assert_eq!(buffer.dimensions(), (16, 2));
        assert_eq!(buffer.count_set(), 32);
    }

    #[test]
    fn set_pixel_to_follows_value() {
        let mut buffer = BitBuffer::new(8, 1).unwrap();

        buffer.set_pixel_to(6, 0, true).unwrap();
        assert_eq!(buffer.as_bytes(), &[0x40]);
        buffer.set_pixel_to(6, 0, false).unwrap();
        assert_eq!(buffer.as_bytes(), &[0x00]);
        assert!(buffer.set_pixel_to(8, 0, true).unwrap_err().is_out_of_bounds());
    }

    #[test]
    fn fill_and_invert() {
        let mut buffer = BitBuffer::new(8, 3).unwrap();

        buffer.fill(true);
        assert_eq!(buffer.count_set(), 24);
        buffer.clear_pixel(4, 1).unwrap();
        buffer.invert();
        assert_eq!(buffer.count_set(), 1);
        assert!(buffer.is_set(4, 1));
    }
}
