/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use bittmapp_bmp::{decode, encode, probe_bmp, BmpEncoder, BmpErrors, BmpHeader};
use bittmapp_core::bitbuffer::BitBuffer;
use bittmapp_core::options::EncoderOptions;
use nanorand::Rng;

fn random_buffer(width: usize, height: usize) -> BitBuffer {
    let mut rand = nanorand::WyRand::new_seed(0x5EED);

    let bytes = (0..width / 8 * height)
        .map(|_| rand.generate::<u8>())
        .collect();

    BitBuffer::from_raw(bytes, width, height).unwrap()
}

fn assert_same_pixels(a: &BitBuffer, b: &BitBuffer) {
    assert_eq!(a.dimensions(), b.dimensions());

    for y in 0..a.height() {
        for x in 0..a.width() {
            assert_eq!(a.get_pixel(x, y), b.get_pixel(x, y), "pixel ({x},{y})");
        }
    }
}

#[test]
fn header_layout() {
    let pixels = BitBuffer::new(40, 3).unwrap();
    let bytes = encode(&pixels).unwrap();

    // 40 pixels -> 5 bytes -> padded to 8
    assert_eq!(bytes.len(), 62 + 8 * 3);
    assert!(probe_bmp(&bytes));

    let header = BmpHeader::parse(&bytes).unwrap();
    assert_eq!(header.width(), 40);
    assert_eq!(header.raw_height(), 3);
    assert_eq!(header.planes(), 1);
    assert_eq!(header.bits_per_pixel(), 1);
    assert_eq!(header.compression(), 0);
    assert_eq!(header.pixel_data_offset(), 62);
    assert_eq!(header.dib_header_length(), 40);
    assert_eq!(header.image_size(), 24);
    assert_eq!(header.palette_colors(), 0);
    assert_eq!(header.important_colors(), 0);

    // white then black
    assert_eq!(&bytes[54..62], &[255, 255, 255, 0, 0, 0, 0, 0]);
}

#[test]
fn rows_are_written_bottom_up_and_padded() {
    let mut pixels = BitBuffer::new(8, 2).unwrap();
    for x in 0..8 {
        pixels.set_pixel(x, 1).unwrap();
    }
    pixels.set_pixel(2, 0).unwrap();

    let bytes = encode(&pixels).unwrap();

    assert_eq!(&bytes[62..], &[0xFF, 0, 0, 0, 0x04, 0, 0, 0]);
}

#[test]
fn semantic_round_trip() {
    for (w, h) in [(8, 1), (24, 7), (32, 32), (72, 13)] {
        let pixels = random_buffer(w, h);

        let decoded = decode(&encode(&pixels).unwrap()).unwrap();
        assert_same_pixels(&pixels, &decoded);
    }
}

#[test]
fn reencoding_a_decoded_file_keeps_pixels() {
    let mut source = BitBuffer::new(16, 5).unwrap();
    source.set_pixel(0, 0).unwrap();
    source.set_pixel(15, 4).unwrap();
    source.set_pixel(7, 2).unwrap();

    let original = encode(&source).unwrap();
    let first = decode(&original).unwrap();
    let second = decode(&encode(&first).unwrap()).unwrap();

    assert_same_pixels(&first, &second);
    assert_same_pixels(&source, &second);
}

#[test]
fn resolution_is_configurable() {
    let pixels = BitBuffer::new(8, 8).unwrap();
    let options = EncoderOptions::default().set_pixels_per_meter(4724);

    let bytes = BmpEncoder::new_with_options(&pixels, options)
        .encode()
        .unwrap();

    assert_eq!(&bytes[38..42], &4724_u32.to_le_bytes());
    assert_eq!(&bytes[42..46], &4724_u32.to_le_bytes());
}

#[test]
fn encode_into_needs_room() {
    let pixels = BitBuffer::new(8, 8).unwrap();
    let encoder = BmpEncoder::new(&pixels);

    let size = encoder.output_size().unwrap();
    assert_eq!(size, 62 + 32);

    let mut small = vec![0; size - 1];
    assert!(matches!(
        encoder.encode_into(&mut small),
        Err(BmpErrors::TooSmallBuffer(94, 93))
    ));

    let mut exact = vec![0; size];
    assert_eq!(encoder.encode_into(&mut exact).unwrap(), size);
    assert_eq!(exact, encoder.encode().unwrap());
}
