/*
 * Copyright (c) 2024.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Decoding a grayscale frame sequence back into the original bytes

use log::{trace, warn};

use crate::errors::SequenceDecodeErrors;
use crate::frame::Frame;
use crate::framing::{read_size_prefix, SIZE_PREFIX_LENGTH};
use crate::manifest::SequenceManifest;
use crate::options::DecoderOptions;

/// Decodes an ordered sequence of grayscale frames into the original bytes.
///
/// Frames are consumed in the exact order of the supplied slice. The decoder
/// performs no reordering and cannot detect frames given out of order, that
/// silently produces garbage; callers are responsible for sequencing, via the
/// typed [`Frame::index`](crate::Frame::index) or the name-based fallback in
/// [`sequence`](crate::sequence).
///
/// Decoding needs no manifest, the size prefix embedded in the stream is
/// authoritative. An attached manifest only contributes the recovered file
/// name and extension.
///
/// # Example
/// ```
/// use filmstrip_core::{SequenceDecoder, SequenceEncoder};
///
/// let encoded = SequenceEncoder::new(b"payload", "p.bin").encode().unwrap();
///
/// let decoded = SequenceDecoder::new(encoded.frames()).decode().unwrap();
/// // identical bytes, no manifest means no recovered name
/// assert_eq!(decoded.data(), b"payload");
/// assert_eq!(decoded.filename(), None);
/// ```
pub struct SequenceDecoder<'a> {
    frames:   &'a [Frame],
    manifest: Option<&'a SequenceManifest>,
    options:  DecoderOptions
}

impl<'a> SequenceDecoder<'a> {
    /// Create a new decoder with the default options
    ///
    /// # Arguments
    /// - `frames`: The frames to decode, already in sequence order
    pub fn new(frames: &'a [Frame]) -> SequenceDecoder<'a> {
        SequenceDecoder::new_with_options(frames, DecoderOptions::default())
    }

    /// Create a new decoder with non default options as opposed to `new`
    ///
    /// E.g can be used to disable tail tolerance so truncated sequences are
    /// rejected instead of zero filled
    pub const fn new_with_options(
        frames: &'a [Frame], options: DecoderOptions
    ) -> SequenceDecoder<'a> {
        SequenceDecoder {
            frames,
            manifest: None,
            options
        }
    }

    /// Attach the manifest that was produced alongside the frames
    ///
    /// Decoded bytes are unaffected, this only makes
    /// [`DecodedFile::filename`] and [`DecodedFile::extension`] available.
    pub fn set_manifest(&mut self, manifest: &'a SequenceManifest) {
        self.manifest = Some(manifest);
    }

    /// Decode the sequence, returning the reconstructed file
    pub fn decode(&self) -> Result<DecodedFile, SequenceDecodeErrors> {
        let side = self.options.frame_side();

        // fail fast on non conforming rasters instead of extracting garbage
        for frame in self.frames {
            if frame.side() != side {
                return Err(SequenceDecodeErrors::WrongFrameSide(side, frame.side()));
            }
        }

        let mut stream = Vec::with_capacity(self.frames.len() * self.options.bytes_per_frame());

        for frame in self.frames {
            stream.extend_from_slice(frame.luma());
        }

        let file_size = read_size_prefix(&stream);

        trace!(
            "Aggregated {} frame(s) into {} bytes, size prefix {}",
            self.frames.len(),
            stream.len(),
            file_size
        );

        if file_size > self.options.max_file_size() {
            return Err(SequenceDecodeErrors::SizePrefixTooLarge(
                file_size,
                self.options.max_file_size()
            ));
        }

        let available = stream.len().saturating_sub(SIZE_PREFIX_LENGTH) as u64;

        if file_size > available && !self.options.tolerate_truncated_tail() {
            return Err(SequenceDecodeErrors::TruncatedStream(file_size, available));
        }

        let wanted = file_size as usize;
        let present = wanted.min(available as usize);

        if present < wanted {
            warn!(
                "Stream is short by {} byte(s), zero filling the tail",
                wanted - present
            );
        }

        // a stream shorter than the prefix itself holds no payload at all
        let start = SIZE_PREFIX_LENGTH.min(stream.len());

        let mut data = stream[start..start + present].to_vec();
        // missing trailing bytes read as zero
        data.resize(wanted, 0);

        Ok(DecodedFile {
            data,
            filename:  self.manifest.map(|m| m.file_stem().to_owned()),
            extension: self.manifest.map(|m| m.original_extension.clone())
        })
    }
}

/// A file reconstructed from a frame sequence.
pub struct DecodedFile {
    data:      Vec<u8>,
    filename:  Option<String>,
    extension: Option<String>
}

impl DecodedFile {
    /// Return the reconstructed bytes
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consume the file, returning the reconstructed bytes
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Return the recovered file stem, present only when a manifest was
    /// attached before decoding
    pub fn filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }

    /// Return the recovered file extension, present only when a manifest was
    /// attached before decoding
    pub fn extension(&self) -> Option<&str> {
        self.extension.as_deref()
    }

    /// Return the name the reconstructed file should be written under
    ///
    /// Falls back to `reconstructed_file.bin` when no manifest was available.
    pub fn suggested_name(&self) -> String {
        match (self.filename(), self.extension()) {
            (Some(stem), Some(ext)) if !ext.is_empty() => format!("{stem}.{ext}"),
            (Some(stem), _) if !stem.is_empty() => stem.to_owned(),
            _ => String::from("reconstructed_file.bin")
        }
    }
}
