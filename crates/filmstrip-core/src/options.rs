/*
 * Copyright (c) 2024.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Encoder and decoder configuration

/// Side length of a frame when none is configured.
///
/// A frame of this side carries `1024 * 1024` payload bytes.
pub const DEFAULT_FRAME_SIDE: usize = 1024;

/// Largest size prefix the decoder will accept by default, 4 GiB.
///
/// A corrupted or garbage first frame can claim an absurd payload length,
/// since the size prefix is read before anything else is known about the
/// stream. Capping it keeps a bad prefix from turning into a giant
/// allocation.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1 << 32;

/// Options used by [`SequenceEncoder`](crate::SequenceEncoder)
#[derive(Debug, Copy, Clone)]
pub struct EncoderOptions {
    frame_side: usize
}

impl Default for EncoderOptions {
    fn default() -> Self {
        EncoderOptions {
            frame_side: DEFAULT_FRAME_SIDE
        }
    }
}

impl EncoderOptions {
    /// Return the side length of the square frames the encoder will produce
    pub const fn frame_side(&self) -> usize {
        self.frame_side
    }

    /// Return the number of payload bytes a single frame can carry
    pub const fn bytes_per_frame(&self) -> usize {
        self.frame_side * self.frame_side
    }

    /// Set the side length of the square frames the encoder will produce
    ///
    /// Both ends must agree on the side length, a decoder configured with a
    /// different side will reject the frames.
    pub fn set_frame_side(mut self, frame_side: usize) -> Self {
        self.frame_side = frame_side;
        self
    }
}

/// Options used by [`SequenceDecoder`](crate::SequenceDecoder)
#[derive(Debug, Copy, Clone)]
pub struct DecoderOptions {
    frame_side:              usize,
    tolerate_truncated_tail: bool,
    max_file_size:           u64
}

impl Default for DecoderOptions {
    fn default() -> Self {
        DecoderOptions {
            frame_side:              DEFAULT_FRAME_SIDE,
            tolerate_truncated_tail: true,
            max_file_size:           DEFAULT_MAX_FILE_SIZE
        }
    }
}

impl DecoderOptions {
    /// Return the frame side length the decoder expects
    pub const fn frame_side(&self) -> usize {
        self.frame_side
    }

    /// Return the number of payload bytes one frame carries
    pub const fn bytes_per_frame(&self) -> usize {
        self.frame_side * self.frame_side
    }

    /// Whether missing trailing bytes are zero filled instead of rejected
    pub const fn tolerate_truncated_tail(&self) -> bool {
        self.tolerate_truncated_tail
    }

    /// Return the largest payload length the decoder will accept
    pub const fn max_file_size(&self) -> u64 {
        self.max_file_size
    }

    /// Set the frame side length the decoder expects
    pub fn set_frame_side(mut self, frame_side: usize) -> Self {
        self.frame_side = frame_side;
        self
    }

    /// Choose whether a stream shorter than its size prefix claims is an
    /// error or is zero filled
    ///
    /// Enabled by default. When enabled, a sequence whose last frame was
    /// trimmed still decodes, with the missing tail read as zero bytes. When
    /// disabled the decoder returns
    /// [`TruncatedStream`](crate::SequenceDecodeErrors::TruncatedStream)
    /// instead, which is the safer choice when silently wrong output is worse
    /// than no output.
    pub fn set_tolerate_truncated_tail(mut self, yes: bool) -> Self {
        self.tolerate_truncated_tail = yes;
        self
    }

    /// Set the largest payload length the decoder will accept
    ///
    /// Decoding fails with
    /// [`SizePrefixTooLarge`](crate::SequenceDecodeErrors::SizePrefixTooLarge)
    /// when the embedded size prefix exceeds this, whatever the tail
    /// tolerance setting.
    pub fn set_max_file_size(mut self, size: u64) -> Self {
        self.max_file_size = size;
        self
    }
}
