/*
 * Copyright (c) 2024.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible while packing or unpacking bundles

use std::fmt::{Debug, Display, Formatter};

use filmstrip_core::SequenceDecodeErrors;

/// Possible errors that may occur while packing or unpacking a bundle
pub enum BundleErrors {
    /// Underlying I/O failed
    IoErrors(std::io::Error),
    /// An image entry could not be decoded as PNG
    PngDecodeErrors(png::DecodingError),
    /// A frame could not be encoded as PNG
    PngEncodeErrors(png::EncodingError),
    /// The ZIP container could not be read or written
    ZipErrors(zip::result::ZipError),
    /// The `_metadata.json` entry exists but is not a valid manifest
    ///
    /// Decoding can still proceed without the manifest, re-read the bundle
    /// with [`skip_malformed_metadata`](crate::BundleReadOptions::set_skip_malformed_metadata)
    /// if losing the recovered file name is acceptable
    MetadataParse(serde_json::Error),
    /// A decoded raster does not map onto a sequence frame
    SequenceDecode(SequenceDecodeErrors),
    /// An image entry is not square
    ///
    /// # Arguments
    /// - 1st argument is the width found
    /// - 2nd argument is the height found
    NonSquareImage(usize, usize),
    /// An image entry does not use 8 bits per sample
    UnsupportedBitDepth(png::BitDepth),
    /// Generic message
    GenericStatic(&'static str)
}

impl Debug for BundleErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            BundleErrors::IoErrors(err) => {
                writeln!(f, "I/O error: {err}")
            }
            BundleErrors::PngDecodeErrors(err) => {
                writeln!(f, "Could not decode image entry as PNG: {err}")
            }
            BundleErrors::PngEncodeErrors(err) => {
                writeln!(f, "Could not encode frame as PNG: {err}")
            }
            BundleErrors::ZipErrors(err) => {
                writeln!(f, "ZIP error: {err}")
            }
            BundleErrors::MetadataParse(err) => {
                writeln!(f, "Malformed _metadata.json entry: {err}")
            }
            BundleErrors::SequenceDecode(err) => {
                writeln!(f, "Raster does not map onto a frame: {err:?}")
            }
            BundleErrors::NonSquareImage(width, height) => {
                writeln!(
                    f,
                    "Image entry is {width}x{height}, frames must be square"
                )
            }
            BundleErrors::UnsupportedBitDepth(depth) => {
                writeln!(
                    f,
                    "Image entry uses {depth:?} bits per sample, frames are 8 bit"
                )
            }
            BundleErrors::GenericStatic(val) => {
                writeln!(f, "{val}")
            }
        }
    }
}

impl Display for BundleErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{self:?}")
    }
}

impl std::error::Error for BundleErrors {}

impl From<std::io::Error> for BundleErrors {
    fn from(err: std::io::Error) -> Self {
        BundleErrors::IoErrors(err)
    }
}

impl From<png::DecodingError> for BundleErrors {
    fn from(err: png::DecodingError) -> Self {
        BundleErrors::PngDecodeErrors(err)
    }
}

impl From<png::EncodingError> for BundleErrors {
    fn from(err: png::EncodingError) -> Self {
        BundleErrors::PngEncodeErrors(err)
    }
}

impl From<zip::result::ZipError> for BundleErrors {
    fn from(err: zip::result::ZipError) -> Self {
        BundleErrors::ZipErrors(err)
    }
}

impl From<serde_json::Error> for BundleErrors {
    fn from(err: serde_json::Error) -> Self {
        BundleErrors::MetadataParse(err)
    }
}

impl From<SequenceDecodeErrors> for BundleErrors {
    fn from(err: SequenceDecodeErrors) -> Self {
        BundleErrors::SequenceDecode(err)
    }
}
