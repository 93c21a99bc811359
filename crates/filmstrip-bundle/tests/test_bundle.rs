/*
 * Copyright (c) 2024.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::io::{Cursor, Write};

use filmstrip_bundle::{
    encode_frame, frames_from_named_images, read_bundle, write_bundle, BundleErrors,
    BundleReadOptions, NamedImage, METADATA_NAME
};
use filmstrip_core::{DecoderOptions, EncoderOptions, Frame, SequenceDecoder, SequenceEncoder};
use nanorand::{Rng, WyRand};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

const SIDE: usize = 32;

fn random_bytes(len: usize, seed: u64) -> Vec<u8> {
    let mut rng = WyRand::new_seed(seed);

    (0..len).map(|_| rng.generate::<u8>()).collect()
}

fn encode(data: &[u8], name: &str) -> filmstrip_core::EncodedSequence {
    let options = EncoderOptions::default().set_frame_side(SIDE);

    SequenceEncoder::new_with_options(data, name, options)
        .encode()
        .unwrap()
}

fn decode(frames: &[Frame]) -> Vec<u8> {
    let options = DecoderOptions::default().set_frame_side(SIDE);

    SequenceDecoder::new_with_options(frames, options)
        .decode()
        .unwrap()
        .into_data()
}

#[test]
fn bundle_round_trips_through_zip() {
    let data = random_bytes(3 * SIDE * SIDE, 11);
    let encoded = encode(&data, "blob.tar.gz");

    let mut sink = Cursor::new(Vec::new());
    write_bundle(&encoded, &mut sink).unwrap();

    sink.set_position(0);
    let bundle = read_bundle(sink, BundleReadOptions::default()).unwrap();

    assert_eq!(bundle.frames(), encoded.frames());
    assert_eq!(bundle.manifest(), Some(encoded.manifest()));
    assert_eq!(decode(bundle.frames()), data);
}

#[test]
fn bundle_without_manifest_still_decodes() {
    let data = random_bytes(100, 12);
    let encoded = encode(&data, "a.bin");

    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    for frame in encoded.frames() {
        zip.start_file(frame.file_name(), SimpleFileOptions::default())
            .unwrap();
        zip.write_all(&encode_frame(frame).unwrap()).unwrap();
    }
    let mut sink = zip.finish().unwrap();

    sink.set_position(0);
    let bundle = read_bundle(sink, BundleReadOptions::default()).unwrap();

    assert!(bundle.manifest().is_none());
    assert_eq!(decode(bundle.frames()), data);
}

#[test]
fn image_entries_are_sorted_numerically() {
    let data = random_bytes(11 * (SIDE * SIDE) - 8, 13);
    let encoded = encode(&data, "a.bin");
    assert_eq!(encoded.frames().len(), 11);

    // shuffle the entries so f10/f11 would lexically sort before f2
    let mut images: Vec<NamedImage> = encoded
        .frames()
        .iter()
        .rev()
        .map(|frame| NamedImage {
            name: frame.file_name(),
            data: encode_frame(frame).unwrap()
        })
        .collect();
    images.swap(0, 5);

    let bundle = frames_from_named_images(images, BundleReadOptions::default()).unwrap();

    assert_eq!(decode(bundle.frames()), data);
}

#[test]
fn malformed_metadata_is_a_distinct_error() {
    let encoded = encode(b"payload", "a.bin");

    let mut images = vec![NamedImage {
        name: METADATA_NAME.to_owned(),
        data: b"{not json".to_vec()
    }];
    for frame in encoded.frames() {
        images.push(NamedImage {
            name: frame.file_name(),
            data: encode_frame(frame).unwrap()
        });
    }

    let result = frames_from_named_images(images, BundleReadOptions::default());
    assert!(matches!(result, Err(BundleErrors::MetadataParse(_))));
}

#[test]
fn malformed_metadata_can_be_skipped() {
    let encoded = encode(b"payload", "a.bin");

    let mut images = vec![NamedImage {
        name: METADATA_NAME.to_owned(),
        data: b"{not json".to_vec()
    }];
    for frame in encoded.frames() {
        images.push(NamedImage {
            name: frame.file_name(),
            data: encode_frame(frame).unwrap()
        });
    }

    let permissive = BundleReadOptions::default().set_skip_malformed_metadata(true);
    let bundle = frames_from_named_images(images, permissive).unwrap();

    assert!(bundle.manifest().is_none());
    assert_eq!(decode(bundle.frames()), b"payload");
}

#[test]
fn non_png_image_entries_fail() {
    let images = vec![NamedImage {
        name: String::from("f1.png"),
        data: b"not a png at all".to_vec()
    }];

    let result = frames_from_named_images(images, BundleReadOptions::default());
    assert!(matches!(result, Err(BundleErrors::PngDecodeErrors(_))));
}
