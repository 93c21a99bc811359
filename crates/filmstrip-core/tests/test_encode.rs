/*
 * Copyright (c) 2024.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use filmstrip_core::framing::{encode_size_prefix, SIZE_PREFIX_LENGTH};
use filmstrip_core::{EncoderOptions, SequenceEncoder};
use nanorand::{Rng, WyRand};

fn random_bytes(len: usize, seed: u64) -> Vec<u8> {
    let mut rng = WyRand::new_seed(seed);

    (0..len).map(|_| rng.generate::<u8>()).collect()
}

/// Expand bytes into bits, most significant bit of each byte first.
fn to_bits(bytes: &[u8]) -> Vec<u8> {
    let mut bits = Vec::with_capacity(bytes.len() * 8);

    for byte in bytes {
        for shift in (0..8).rev() {
            bits.push((byte >> shift) & 1);
        }
    }
    bits
}

#[test]
fn empty_file_still_produces_one_frame() {
    let encoded = SequenceEncoder::new(&[], "empty.bin").encode().unwrap();

    assert_eq!(encoded.frames().len(), 1);
    assert_eq!(encoded.manifest().file_size, 0);
    assert_eq!(encoded.manifest().total_images, 1);

    // zero size prefix, zero fill, every pixel is zero
    assert!(encoded.frames()[0].luma().iter().all(|p| *p == 0));
}

#[test]
fn size_prefix_heads_the_first_frame() {
    let data = random_bytes(100, 1);
    let encoded = SequenceEncoder::new(&data, "a.bin").encode().unwrap();

    let plane = encoded.frames()[0].luma();

    assert_eq!(&plane[..SIZE_PREFIX_LENGTH], encode_size_prefix(100));
    assert_eq!(&plane[SIZE_PREFIX_LENGTH..SIZE_PREFIX_LENGTH + 100], data);
}

#[test]
fn frame_count_matches_ceil_of_framed_length() {
    // side 32 -> 1024 bytes per frame
    let options = EncoderOptions::default().set_frame_side(32);

    // 1016 + 8 prefix bytes exactly fill one frame
    let exact = random_bytes(1016, 2);
    let encoder = SequenceEncoder::new_with_options(&exact, "a.bin", options);
    assert_eq!(encoder.frames_needed(), 1);
    assert_eq!(encoder.encode().unwrap().frames().len(), 1);

    // one more byte spills into a second frame
    let spill = random_bytes(1017, 3);
    let encoder = SequenceEncoder::new_with_options(&spill, "a.bin", options);
    assert_eq!(encoder.frames_needed(), 2);
    assert_eq!(encoder.encode().unwrap().frames().len(), 2);
}

#[test]
fn tail_of_final_frame_is_zero_filled() {
    let options = EncoderOptions::default().set_frame_side(16);

    // 256 bytes per frame, payload occupies 8 + 300 bytes over two frames
    let data = vec![0xAB_u8; 300];
    let encoded = SequenceEncoder::new_with_options(&data, "a.bin", options)
        .encode()
        .unwrap();

    assert_eq!(encoded.frames().len(), 2);

    let last = encoded.frames()[1].luma();
    let used = 308 - 256;

    assert!(last[..used].iter().all(|p| *p == 0xAB));
    assert!(last[used..].iter().all(|p| *p == 0));
}

#[test]
fn frames_are_indexed_and_named_in_order() {
    let options = EncoderOptions::default().set_frame_side(8);

    let data = random_bytes(200, 4);
    let encoded = SequenceEncoder::new_with_options(&data, "a.bin", options)
        .encode()
        .unwrap();

    for (position, frame) in encoded.frames().iter().enumerate() {
        assert_eq!(frame.index(), position);
        assert_eq!(frame.file_name(), format!("f{}.png", position + 1));
    }
}

#[test]
fn pixels_spell_the_framed_payload_bit_stream() {
    let options = EncoderOptions::default().set_frame_side(8);

    let data = random_bytes(75, 5);
    let encoded = SequenceEncoder::new_with_options(&data, "a.bin", options)
        .encode()
        .unwrap();

    let mut framed = encode_size_prefix(75).to_vec();
    framed.extend_from_slice(&data);

    let bits = to_bits(&framed);

    let mut pixels = Vec::new();
    for frame in encoded.frames() {
        pixels.extend_from_slice(frame.luma());
    }

    // every chunk of 8 bits, MSB first, is one pixel intensity
    for (pixel, bit_chunk) in pixels.iter().zip(bits.chunks(8)) {
        let folded = bit_chunk.iter().fold(0_u8, |acc, bit| (acc << 1) | bit);
        assert_eq!(*pixel, folded);
    }

    // invariant: the bit stream is exactly eight times the framed payload
    assert_eq!(bits.len(), framed.len() * 8);
}

#[test]
fn zero_frame_side_is_rejected() {
    let options = EncoderOptions::default().set_frame_side(0);

    assert!(SequenceEncoder::new_with_options(&[1], "a.bin", options)
        .encode()
        .is_err());
}
