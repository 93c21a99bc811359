/*
 * Copyright (c) 2024.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! PNG export and ZIP bundling for filmstrip frame sequences
//!
//! [`filmstrip-core`](filmstrip_core) deals in raw frames; this crate is the
//! boundary to the outside world. Frames are exported as 8-bit RGBA PNGs, a
//! lossless raster encoding, any lossy recompression of the exported images
//! destroys the payload and is out of contract.
//!
//! A full sequence travels as a ZIP bundle holding `f1.png … fN.png` plus a
//! `_metadata.json` manifest. Reading accepts bundles without a manifest and
//! loose image lists, ordering them by the number embedded in each name when
//! nothing better is available.
//!
//! # Example
//! ```
//! use std::io::Cursor;
//!
//! use filmstrip_bundle::{read_bundle, write_bundle, BundleReadOptions};
//! use filmstrip_core::{SequenceDecoder, SequenceEncoder};
//!
//! let encoded = SequenceEncoder::new(b"hello", "hello.txt").encode().unwrap();
//!
//! let mut sink = Cursor::new(Vec::new());
//! write_bundle(&encoded, &mut sink).unwrap();
//!
//! sink.set_position(0);
//! let bundle = read_bundle(sink, BundleReadOptions::default()).unwrap();
//!
//! let decoded = SequenceDecoder::new(bundle.frames()).decode().unwrap();
//! assert_eq!(decoded.data(), b"hello");
//! ```

pub use bundle::{
    frames_from_named_images, read_bundle, write_bundle, Bundle, BundleReadOptions, NamedImage,
    METADATA_NAME
};
pub use errors::BundleErrors;
pub use raster::{decode_frame, encode_frame};

mod bundle;
mod errors;
mod raster;
