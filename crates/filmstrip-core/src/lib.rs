/*
 * Copyright (c) 2024.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Encoding and decoding of byte streams as fixed-size grayscale frame sequences
//!
//! This crate maps an arbitrary byte buffer onto an ordered sequence of square
//! grayscale rasters ("frames") and reverses the mapping, so that any file can
//! be stored or moved around purely as a set of images.
//!
//! The payload is framed with a 64-bit big-endian size prefix before it is
//! rasterized, which is what allows byte-exact reconstruction without any side
//! channel. A small manifest record (original file name, extension, frame
//! count, byte count) can ride along to recover naming, but decoding does not
//! depend on it.
//!
//! # Features
//! - Deterministic byte -> frame -> byte round trips
//! - Explicit, typed sequence indices on every frame
//! - Configurable tail tolerance for truncated inputs
//! - `serde` (optional): serialization for [`SequenceManifest`]
//!
//! # Example
//! ```
//! use filmstrip_core::{SequenceDecoder, SequenceEncoder};
//!
//! let encoded = SequenceEncoder::new(b"some file contents", "notes.txt")
//!     .encode()
//!     .unwrap();
//!
//! let mut decoder = SequenceDecoder::new(encoded.frames());
//! decoder.set_manifest(encoded.manifest());
//!
//! let decoded = decoder.decode().unwrap();
//! assert_eq!(decoded.data(), b"some file contents");
//! assert_eq!(decoded.extension(), Some("txt"));
//! ```

pub use decoder::{DecodedFile, SequenceDecoder};
pub use encoder::{EncodedSequence, SequenceEncoder};
pub use errors::{SequenceDecodeErrors, SequenceEncodeErrors};
pub use frame::Frame;
pub use manifest::SequenceManifest;
pub use options::{DecoderOptions, EncoderOptions, DEFAULT_FRAME_SIDE, DEFAULT_MAX_FILE_SIZE};

mod decoder;
mod encoder;
mod errors;
mod frame;
pub mod framing;
mod manifest;
mod options;
pub mod sequence;
