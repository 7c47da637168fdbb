/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::mem::size_of;

use crate::bytestream::{ByteEndian, ByteIoError};

/// Encapsulates a simple Byte writer with
/// support for Endian aware writes
pub struct ZByteWriter<'a> {
    buffer:   &'a mut [u8],
    position: usize
}

impl<'a> ZByteWriter<'a> {
    /// Create a new writer for the stream
    pub fn new(data: &'a mut [u8]) -> ZByteWriter<'a> {
        ZByteWriter {
            buffer:   data,
            position: 0
        }
    }
    /// Return number of unwritten bytes in this stream
    ///
    /// # Example
    /// ```
    /// use bittmapp_core::bytestream::ZByteWriter;
    /// let mut storage = [0;10];
    ///
    /// let writer = ZByteWriter::new(&mut storage);
    /// assert_eq!(writer.bytes_left(),10); // no bytes were written
    /// ```
    pub const fn bytes_left(&self) -> usize {
        self.buffer.len().saturating_sub(self.position)
    }

    /// Return the number of bytes the writer has written
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Check if the byte writer can support
    /// the following write
    pub const fn has(&self, bytes: usize) -> bool {
        self.position.saturating_add(bytes) <= self.buffer.len()
    }

    /// Copy all of `buf` into the stream or write nothing and error out
    pub fn write_all(&mut self, buf: &[u8]) -> Result<(), ByteIoError> {
        if !self.has(buf.len()) {
            return Err(ByteIoError::NotEnoughBuffer(buf.len(), self.bytes_left()));
        }
        self.buffer[self.position..self.position + buf.len()].copy_from_slice(buf);
        self.position += buf.len();
        Ok(())
    }

    /// Write `count` zero bytes
    pub fn write_zeroes(&mut self, count: usize) -> Result<(), ByteIoError> {
        if !self.has(count) {
            return Err(ByteIoError::NotEnoughBuffer(count, self.bytes_left()));
        }
        self.buffer[self.position..self.position + count].fill(0);
        self.position += count;
        Ok(())
    }
}

macro_rules! write_single_type {
    ($name:tt,$name_le:tt,$int_type:tt) => {
        impl<'a> ZByteWriter<'a> {
            #[doc=concat!("Write ",stringify!($int_type)," with the given byte order")]
            #[doc=concat!("Or error out if the writer cannot support a ",stringify!($int_type)," write.")]
            #[inline]
            pub fn $name(&mut self, value: $int_type, endian: ByteEndian) -> Result<(), ByteIoError> {
                const SIZE: usize = size_of::<$int_type>();

                let bytes = match endian {
                    ByteEndian::BE => value.to_be_bytes(),
                    ByteEndian::LE => value.to_le_bytes()
                };
                if !self.has(SIZE) {
                    return Err(ByteIoError::NotEnoughBuffer(SIZE, self.bytes_left()));
                }
                self.buffer[self.position..self.position + SIZE].copy_from_slice(&bytes);
                self.position += SIZE;

                Ok(())
            }

            #[doc=concat!("Write ",stringify!($int_type)," as a little endian integer")]
            #[doc=concat!("Or error out if the writer cannot support a ",stringify!($int_type)," write.")]
            #[inline]
            pub fn $name_le(&mut self, value: $int_type) -> Result<(), ByteIoError> {
                self.$name(value, ByteEndian::LE)
            }
        }
    };
}

write_single_type!(write_u16_err, write_u16_le_err, u16);
write_single_type!(write_u32_err, write_u32_le_err, u32);
write_single_type!(write_i32_err, write_i32_le_err, i32);

#[cfg(test)]
mod tests {
    use crate::bytestream::{ByteEndian, ByteIoError, ZByteReader, ZByteWriter};

    #[test]
    fn written_values_read_back() {
        let mut storage = [0; 10];
        let mut writer = ZByteWriter::new(&mut storage);

        writer.write_u16_le_err(0xBEEF).unwrap();
        writer.write_i32_err(-2, ByteEndian::LE).unwrap();
        writer.write_u32_err(0x0102_0304, ByteEndian::BE).unwrap();
        assert_eq!(writer.bytes_left(), 0);

        let reader = ZByteReader::new(&storage);
        assert_eq!(reader.read_u16_at(0, ByteEndian::LE), Ok(0xBEEF));
        assert_eq!(reader.read_i32_at(2, ByteEndian::LE), Ok(-2));
        assert_eq!(&storage[6..], &[1, 2, 3, 4]);
    }

    #[test]
    fn full_writer_rejects_writes() {
        let mut storage = [0; 3];
        let mut writer = ZByteWriter::new(&mut storage);

        assert_eq!(
            writer.write_u32_le_err(1),
            Err(ByteIoError::NotEnoughBuffer(4, 3))
        );
        assert_eq!(writer.position(), 0);
        writer.write_all(&[7, 7]).unwrap();
        writer.write_zeroes(1).unwrap();
        assert_eq!(writer.write_zeroes(1), Err(ByteIoError::NotEnoughBuffer(1, 0)));
        assert_eq!(storage, [7, 7, 0]);
    }
}
