/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::io::Cursor;

use filmstrip_bundle::{read_bundle, write_bundle, BundleReadOptions};
use filmstrip_core::{DecoderOptions, EncoderOptions, SequenceDecoder, SequenceEncoder};
use nanorand::{Rng, WyRand};

use crate::hash;

const SIDE: usize = 64;

fn random_bytes(len: usize, seed: u64) -> Vec<u8> {
    let mut rng = WyRand::new_seed(seed);

    (0..len).map(|_| rng.generate::<u8>()).collect()
}

/// Push `data` through the entire stack and return the reconstruction.
fn pipeline(data: &[u8], name: &str) -> (Vec<u8>, Option<String>) {
    let enc = EncoderOptions::default().set_frame_side(SIDE);
    let encoded = SequenceEncoder::new_with_options(data, name, enc)
        .encode()
        .unwrap();

    let mut sink = Cursor::new(Vec::new());
    write_bundle(&encoded, &mut sink).unwrap();

    sink.set_position(0);
    let bundle = read_bundle(sink, BundleReadOptions::default()).unwrap();

    let dec = DecoderOptions::default().set_frame_side(SIDE);
    let mut decoder = SequenceDecoder::new_with_options(bundle.frames(), dec);

    if let Some(manifest) = bundle.manifest() {
        decoder.set_manifest(manifest);
    }

    let decoded = decoder.decode().unwrap();
    let suggested = decoded.suggested_name();

    (decoded.into_data(), Some(suggested))
}

#[test]
fn empty_file_survives_the_pipeline() {
    let (bytes, _) = pipeline(&[], "empty.dat");

    assert!(bytes.is_empty());
}

#[test]
fn single_frame_file_survives_the_pipeline() {
    let data = random_bytes(1000, 21);

    let (bytes, name) = pipeline(&data, "notes.txt");

    assert_eq!(hash(&bytes), hash(&data));
    assert_eq!(name.as_deref(), Some("notes.txt"));
}

#[test]
fn multi_frame_file_survives_the_pipeline() {
    // five frames worth of payload at side 64
    let data = random_bytes(5 * SIDE * SIDE - 100, 22);

    let (bytes, _) = pipeline(&data, "archive.tar.gz");

    assert_eq!(hash(&bytes), hash(&data));
}

#[test]
fn frame_boundary_sizes_survive_the_pipeline() {
    let per_frame = SIDE * SIDE;

    for (seed, len) in [per_frame - 8, per_frame - 7, per_frame, 2 * per_frame]
        .into_iter()
        .enumerate()
    {
        let data = random_bytes(len, 30 + seed as u64);
        let (bytes, _) = pipeline(&data, "boundary.bin");

        assert_eq!(hash(&bytes), hash(&data), "pipeline failed for {len} bytes");
    }
}
