/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::ffi::OsString;

use bittmapp_bmp::{BmpCompression, BmpHeader};
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

pub struct Metadata<'a> {
    file:   OsString,
    size:   u64,
    header: &'a BmpHeader
}

impl<'a> Metadata<'a> {
    pub fn new(file: OsString, size: u64, header: &'a BmpHeader) -> Metadata<'a> {
        Metadata { file, size, header }
    }
}

impl<'a> Serialize for Metadata<'a> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("Metadata", 3)?;

        state.serialize_field("file", &self.file.to_string_lossy())?;
        state.serialize_field("size", &self.size)?;
        state.serialize_field("header", &Header(self.header))?;

        state.end()
    }
}

struct Header<'a>(&'a BmpHeader);

impl<'a> Serialize for Header<'a> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let header = self.0;
        let compression = BmpCompression::from_u32(header.compression())
            .map(|c| format!("{c:?}"))
            .unwrap_or_else(|| String::from("Unknown"));

        let mut state = serializer.serialize_struct("BmpHeader", 12)?;

        state.serialize_field("file_length", &header.file_length())?;
        state.serialize_field("pixel_data_offset", &header.pixel_data_offset())?;
        state.serialize_field("dib_header_length", &header.dib_header_length())?;
        state.serialize_field("width", &header.width())?;
        state.serialize_field("height", &header.height())?;
        state.serialize_field("top_down", &header.is_top_down())?;
        state.serialize_field("planes", &header.planes())?;
        state.serialize_field("bits_per_pixel", &header.bits_per_pixel())?;
        state.serialize_field("compression", &compression)?;
        state.serialize_field("image_size", &header.image_size())?;
        state.serialize_field("palette_colors", &header.palette_colors())?;
        state.serialize_field("important_colors", &header.important_colors())?;

        state.end()
    }
}

#[cfg(test)]
mod tests {
    use std::ffi::OsString;

    use bittmapp_bmp::{encode, BmpHeader};
    use bittmapp_core::bitbuffer::BitBuffer;

    use crate::serde::Metadata;

    #[test]
    fn metadata_json_has_header_fields() {
        let pixels = BitBuffer::new(16, 3).unwrap();
        let bytes = encode(&pixels).unwrap();
        let header = BmpHeader::parse(&bytes).unwrap();

        let metadata = Metadata::new(OsString::from("tiny.bmp"), bytes.len() as u64, &header);
        let value = serde_json::to_value(&metadata).unwrap();

        assert_eq!(value["file"], "tiny.bmp");
        assert_eq!(value["size"], 74);
        assert_eq!(value["header"]["width"], 16);
        assert_eq!(value["header"]["height"], 3);
        assert_eq!(value["header"]["top_down"], false);
        assert_eq!(value["header"]["compression"], "RGB");
        assert_eq!(value["header"]["pixel_data_offset"], 62);
    }
}
