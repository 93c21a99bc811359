/*
 * Copyright (c) 2024.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A single grayscale frame of an encoded sequence

use crate::errors::SequenceDecodeErrors;

/// Number of channels in the RGBA expansion of a frame.
pub const RGBA_CHANNELS: usize = 4;

/// Alpha value written for every expanded pixel, frames are always opaque.
pub const OPAQUE_ALPHA: u8 = 255;

/// A square grayscale raster carrying part of an encoded stream.
///
/// Each pixel holds one payload byte as its intensity, filled in row-major
/// order. The frame also carries its zero-based position in the sequence; the
/// position is provenance used for naming and external sorting, the decoder
/// consumes frames in the order the caller supplies them.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Frame {
    index: usize,
    side:  usize,
    data:  Vec<u8>
}

impl Frame {
    /// Create a frame from a raw luma plane
    ///
    /// # Arguments
    /// - `index`: Zero-based position of this frame in its sequence
    /// - `side`: Side length of the square raster
    /// - `data`: Luma plane, must contain exactly `side * side` bytes
    pub fn new(index: usize, side: usize, data: Vec<u8>) -> Result<Frame, SequenceDecodeErrors> {
        if data.len() != side * side {
            return Err(SequenceDecodeErrors::WrongPlaneSize(side * side, data.len()));
        }
        Ok(Frame { index, side, data })
    }

    /// Create a frame from an already validated plane.
    ///
    /// Callers must guarantee `data.len() == side * side`.
    pub(crate) fn from_plane(index: usize, side: usize, data: Vec<u8>) -> Frame {
        debug_assert_eq!(data.len(), side * side);

        Frame { index, side, data }
    }

    /// Create a frame from interleaved samples with `channels` samples per
    /// pixel, keeping the first channel of each pixel
    ///
    /// This is the inverse of [`to_rgba`](Self::to_rgba) but accepts any
    /// channel count, so rasters decoded as grayscale, grayscale+alpha, RGB
    /// or RGBA all reduce to the same plane.
    pub fn from_samples(
        index: usize, side: usize, samples: &[u8], channels: usize
    ) -> Result<Frame, SequenceDecodeErrors> {
        if channels == 0 {
            return Err(SequenceDecodeErrors::GenericStatic(
                "Cannot build a frame from zero channels per pixel"
            ));
        }
        if samples.len() != side * side * channels {
            return Err(SequenceDecodeErrors::WrongPlaneSize(
                side * side * channels,
                samples.len()
            ));
        }

        let data = samples.iter().step_by(channels).copied().collect();

        Ok(Frame { index, side, data })
    }

    /// Return the zero-based position of this frame in its sequence
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Return the side length of the square raster
    pub const fn side(&self) -> usize {
        self.side
    }

    /// Return the luma plane, one byte per pixel in row-major order
    pub fn luma(&self) -> &[u8] {
        &self.data
    }

    /// Consume the frame and return its luma plane
    pub fn into_luma(self) -> Vec<u8> {
        self.data
    }

    /// Deterministic one-based file name for this frame, `f1.png`, `f2.png`…
    ///
    /// The embedded number is what lets a name-sorted directory of exported
    /// frames reproduce the sequence order.
    pub fn file_name(&self) -> String {
        format!("f{}.png", self.index + 1)
    }

    /// Expand the plane to interleaved RGBA8 samples
    ///
    /// The intensity is replicated into the three color channels and alpha is
    /// fixed fully opaque, which is the raster layout exported frames use.
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut rgba = Vec::with_capacity(self.data.len() * RGBA_CHANNELS);

        for value in &self.data {
            rgba.extend_from_slice(&[*value, *value, *value, OPAQUE_ALPHA]);
        }

        rgba
    }
}

#[cfg(test)]
mod tests {
    use crate::frame::Frame;

    #[test]
    fn plane_length_is_validated() {
        assert!(Frame::new(0, 2, vec![0; 4]).is_ok());
        assert!(Frame::new(0, 2, vec![0; 5]).is_err());
    }

    #[test]
    fn rgba_expansion_replicates_and_is_opaque() {
        let frame = Frame::new(0, 2, vec![1, 2, 3, 4]).unwrap();

        assert_eq!(
            frame.to_rgba(),
            [1, 1, 1, 255, 2, 2, 2, 255, 3, 3, 3, 255, 4, 4, 4, 255]
        );
    }

    #[test]
    fn samples_reduce_to_first_channel() {
        let rgba = [9, 0, 0, 255, 8, 1, 1, 255, 7, 2, 2, 255, 6, 3, 3, 255];
        let frame = Frame::from_samples(0, 2, &rgba, 4).unwrap();

        assert_eq!(frame.luma(), [9, 8, 7, 6]);
    }

    #[test]
    fn file_names_are_one_based() {
        let frame = Frame::new(4, 1, vec![0]).unwrap();

        assert_eq!(frame.file_name(), "f5.png");
    }
}
