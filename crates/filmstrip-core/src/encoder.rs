/*
 * Copyright (c) 2024.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Encoding a byte stream into a grayscale frame sequence

use log::trace;

use crate::errors::SequenceEncodeErrors;
use crate::frame::Frame;
use crate::framing::{encode_size_prefix, SIZE_PREFIX_LENGTH};
use crate::manifest::SequenceManifest;
use crate::options::EncoderOptions;

/// Encodes one file into an ordered sequence of grayscale frames.
///
/// The payload is prefixed with its length as a 64-bit big-endian integer,
/// then cut into frame-sized chunks. Every payload byte becomes the intensity
/// of one pixel in row-major order; read bit by bit, most significant first,
/// the pixels spell out exactly the framed payload. Pixels past the end of
/// the payload in the final frame are zero.
///
/// An empty file still encodes to exactly one frame holding only the zero
/// size prefix.
///
/// # Example
/// ```
/// use filmstrip_core::SequenceEncoder;
///
/// let encoded = SequenceEncoder::new(&[0x41, 0x42, 0x43], "t.txt")
///     .encode()
///     .unwrap();
///
/// assert_eq!(encoded.frames().len(), 1);
/// assert_eq!(encoded.manifest().file_size, 3);
/// assert_eq!(encoded.manifest().original_extension, "txt");
/// ```
pub struct SequenceEncoder<'a> {
    data:     &'a [u8],
    filename: &'a str,
    options:  EncoderOptions
}

impl<'a> SequenceEncoder<'a> {
    /// Create a new encoder with the default options
    ///
    /// # Arguments
    /// - `data`: The file contents to encode
    /// - `filename`: The name the file goes by, recorded in the manifest so
    ///   decoding can restore it
    pub fn new(data: &'a [u8], filename: &'a str) -> SequenceEncoder<'a> {
        SequenceEncoder::new_with_options(data, filename, EncoderOptions::default())
    }

    /// Create a new encoder with non default options as opposed to `new`
    pub const fn new_with_options(
        data: &'a [u8], filename: &'a str, options: EncoderOptions
    ) -> SequenceEncoder<'a> {
        SequenceEncoder {
            data,
            filename,
            options
        }
    }

    /// Return the number of frames `encode` will produce
    ///
    /// This is `ceil((len + 8) / (side * side))` and never zero.
    pub fn frames_needed(&self) -> usize {
        let framed_len = self.data.len() + SIZE_PREFIX_LENGTH;
        let per_frame = self.options.bytes_per_frame();

        (framed_len + per_frame - 1) / per_frame
    }

    /// Encode the payload, returning the ordered frames and their manifest
    pub fn encode(&self) -> Result<EncodedSequence, SequenceEncodeErrors> {
        let side = self.options.frame_side();

        if side == 0 {
            return Err(SequenceEncodeErrors::ZeroFrameSide);
        }
        let per_frame = self.options.bytes_per_frame();

        // SizePrefix || payload, the only stream that is ever rasterized
        let mut framed = Vec::with_capacity(SIZE_PREFIX_LENGTH + self.data.len());
        framed.extend_from_slice(&encode_size_prefix(self.data.len() as u64));
        framed.extend_from_slice(self.data);

        trace!("Framed payload length: {}", framed.len());

        let mut frames = Vec::with_capacity(self.frames_needed());

        for (index, chunk) in framed.chunks(per_frame).enumerate() {
            // last chunk may be short, remaining pixels stay zero
            let mut plane = vec![0_u8; per_frame];
            plane[..chunk.len()].copy_from_slice(chunk);

            frames.push(Frame::from_plane(index, side, plane));
        }

        trace!("Encoded {} bytes into {} frame(s)", self.data.len(), frames.len());

        let manifest =
            SequenceManifest::for_file(self.filename, frames.len(), self.data.len() as u64);

        Ok(EncodedSequence { frames, manifest })
    }
}

/// The result of encoding one file, ordered frames plus their manifest.
pub struct EncodedSequence {
    frames:   Vec<Frame>,
    manifest: SequenceManifest
}

impl EncodedSequence {
    /// Return the frames in sequence order
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Return the manifest describing the sequence
    pub const fn manifest(&self) -> &SequenceManifest {
        &self.manifest
    }

    /// Consume the sequence, returning the frames and manifest
    pub fn into_parts(self) -> (Vec<Frame>, SequenceManifest) {
        (self.frames, self.manifest)
    }
}
