/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Debug, Display, Formatter};

use crate::bytestream::ByteEndian;

/// Errors raised when the bytestream cannot satisfy a read or write
#[derive(Clone, Copy, Eq, PartialEq)]
pub enum ByteIoError {
    /// requested, available
    NotEnoughBytes(usize, usize),
    /// requested, available
    NotEnoughBuffer(usize, usize),
    Generic(&'static str)
}

impl Debug for ByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            ByteIoError::NotEnoughBytes(expected, found) => {
                writeln!(f, "Not enough bytes, expected {expected} but found {found}")
            }
            ByteIoError::NotEnoughBuffer(expected, found) => {
                writeln!(
                    f,
                    "Not enough buffer to write {expected} bytes, buffer size is {found}"
                )
            }
            ByteIoError::Generic(err) => {
                writeln!(f, "Generic I/O error: {err}")
            }
        }
    }
}

impl Display for ByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        Debug::fmt(self, f)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ByteIoError {}

impl From<&'static str> for ByteIoError {
    fn from(value: &'static str) -> Self {
        ByteIoError::Generic(value)
    }
}

/// An in-memory byte reader
///
/// Every read names an absolute offset and a byte order, fixed-layout
/// headers are read field by field without any cursor bookkeeping.
pub struct ZByteReader<'a> {
    stream: &'a [u8]
}

impl<'a> ZByteReader<'a> {
    /// Create a new reader over `buf`
    pub const fn new(buf: &'a [u8]) -> ZByteReader<'a> {
        ZByteReader { stream: buf }
    }

    /// Total length of the underlying stream
    pub const fn len(&self) -> usize {
        self.stream.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.stream.is_empty()
    }

    /// Return a reference to `num_bytes` starting at absolute `position`
    pub fn peek_at(&self, position: usize, num_bytes: usize) -> Result<&'a [u8], ByteIoError> {
        let end = position
            .checked_add(num_bytes)
            .ok_or(ByteIoError::Generic("Position overflow"))?;

        self.stream
            .get(position..end)
            .ok_or(ByteIoError::NotEnoughBytes(end, self.stream.len()))
    }
}

macro_rules! get_single_type {
    ($name_at:tt,$int_type:tt) => {
        impl<'a> ZByteReader<'a> {
            #[doc=concat!("Read ",stringify!($int_type)," at absolute `offset` with the given byte order.")]
            #[doc=concat!("Returning an error if the underlying buffer cannot support a ",stringify!($int_type)," read.")]
            #[inline]
            pub fn $name_at(&self, offset: usize, endian: ByteEndian) -> Result<$int_type, ByteIoError> {
                const SIZE_OF_VAL: usize = core::mem::size_of::<$int_type>();

                let bytes = self.peek_at(offset, SIZE_OF_VAL)?;

                let mut space = [0; SIZE_OF_VAL];
                space.copy_from_slice(bytes);

                match endian {
                    ByteEndian::BE => Ok($int_type::from_be_bytes(space)),
                    ByteEndian::LE => Ok($int_type::from_le_bytes(space))
                }
            }
        }
    };
}

get_single_type!(read_u16_at, u16);
get_single_type!(read_u32_at, u32);
get_single_type!(read_i32_at, i32);
