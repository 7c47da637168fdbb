/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors returned by bitmap and selection operations
use core::fmt::{Debug, Display, Formatter};

/// Errors that can occur when creating or mutating a
/// [`BitBuffer`](crate::bitbuffer::BitBuffer) or
/// [`SelectionMask`](crate::selection::SelectionMask)
#[derive(Clone, Copy, Eq, PartialEq)]
#[non_exhaustive]
pub enum BitmapErrors {
    /// Width is zero or not a multiple of 8, or height is zero
    InvalidDimension {
        width:  usize,
        height: usize,
        reason: &'static str
    },
    /// A pixel coordinate lies outside the buffer
    OutOfBounds {
        x:      usize,
        y:      usize,
        width:  usize,
        height: usize
    },
    /// Backing bytes handed to a buffer do not match the
    /// length its shape requires, expected, found
    LengthMismatch { expected: usize, found: usize },
    /// A pixel buffer and a selection mask were used together
    /// but do not share the same shape
    ShapeMismatch {
        pixels:    (usize, usize),
        selection: (usize, usize)
    }
}

impl BitmapErrors {
    /// Whether this error belongs to the "invalid dimension" family,
    /// that is, the shape of the buffer itself is wrong rather than
    /// a coordinate used with it.
    pub const fn is_invalid_dimension(&self) -> bool {
        matches!(
            self,
            Self::InvalidDimension { .. } | Self::LengthMismatch { .. } | Self::ShapeMismatch { .. }
        )
    }

    /// Whether this error was caused by a coordinate outside the buffer
    pub const fn is_out_of_bounds(&self) -> bool {
        matches!(self, Self::OutOfBounds { .. })
    }
}

impl Debug for BitmapErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidDimension {
                width,
                height,
                reason
            } => {
                writeln!(f, "Invalid dimensions {width}x{height}: {reason}")
            }
            Self::OutOfBounds {
                x,
                y,
                width,
                height
            } => {
                writeln!(
                    f,
                    "Pixel ({x},{y}) is out of bounds for a {width}x{height} buffer"
                )
            }
            Self::LengthMismatch { expected, found } => {
                writeln!(
                    f,
                    "Buffer length mismatch, expected {expected} bytes but found {found}"
                )
            }
            Self::ShapeMismatch { pixels, selection } => {
                writeln!(
                    f,
                    "Selection shape {:?} does not match pixel shape {:?}",
                    selection, pixels
                )
            }
        }
    }
}

impl Display for BitmapErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        Debug::fmt(self, f)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BitmapErrors {}
