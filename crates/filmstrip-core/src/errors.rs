/*
 * Copyright (c) 2024.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible during encoding and decoding

use std::fmt::{Debug, Display, Formatter};

/// Possible errors that may occur during encoding
pub enum SequenceEncodeErrors {
    /// The configured frame side was zero, such a frame
    /// cannot carry any payload
    ZeroFrameSide,
    /// Generic message
    GenericStatic(&'static str)
}

impl Debug for SequenceEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SequenceEncodeErrors::ZeroFrameSide => {
                writeln!(f, "Frame side of zero, frames cannot hold any bytes")
            }
            SequenceEncodeErrors::GenericStatic(val) => {
                writeln!(f, "{val}")
            }
        }
    }
}

/// Possible errors that may occur during decoding
pub enum SequenceDecodeErrors {
    /// A supplied frame does not have the expected side length
    ///
    /// # Arguments
    /// - 1st argument is the side length the decoder expects
    /// - 2nd argument is the side length actually found
    WrongFrameSide(usize, usize),
    /// A raw plane does not contain the number of bytes its
    /// dimensions demand
    ///
    /// # Arguments
    /// - 1st argument is the number of bytes expected
    /// - 2nd argument is the number of bytes found
    WrongPlaneSize(usize, usize),
    /// The aggregated stream carries fewer payload bytes than its size
    /// prefix claims and tail tolerance is disabled
    ///
    /// # Arguments
    /// - 1st argument is the number of payload bytes the prefix claims
    /// - 2nd argument is the number of payload bytes present
    TruncatedStream(u64, u64),
    /// The size prefix claims a payload larger than the configured limit,
    /// which usually means the first frame is corrupt or out of order
    ///
    /// # Arguments
    /// - 1st argument is the length the prefix claims
    /// - 2nd argument is the configured limit
    SizePrefixTooLarge(u64, u64),
    /// Generic message
    Generic(String),
    /// Generic message that does not need heap allocation
    GenericStatic(&'static str)
}

impl Debug for SequenceDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SequenceDecodeErrors::WrongFrameSide(expected, found) => {
                writeln!(
                    f,
                    "Wrong frame side, decoder expects {expected} but frame has {found}"
                )
            }
            SequenceDecodeErrors::WrongPlaneSize(expected, found) => {
                writeln!(
                    f,
                    "Wrong plane size, expected {expected} bytes but found {found}"
                )
            }
            SequenceDecodeErrors::TruncatedStream(expected, found) => {
                writeln!(
                    f,
                    "Truncated stream, size prefix claims {expected} payload bytes but only {found} are present"
                )
            }
            SequenceDecodeErrors::SizePrefixTooLarge(found, limit) => {
                writeln!(
                    f,
                    "Size prefix of {found} bytes exceeds the configured limit of {limit}, stream is likely corrupt or out of order"
                )
            }
            SequenceDecodeErrors::Generic(val) => {
                writeln!(f, "{val}")
            }
            SequenceDecodeErrors::GenericStatic(val) => {
                writeln!(f, "{val}")
            }
        }
    }
}

impl Display for SequenceEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{self:?}")
    }
}

impl Display for SequenceDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{self:?}")
    }
}

impl std::error::Error for SequenceEncodeErrors {}

impl std::error::Error for SequenceDecodeErrors {}

impl From<&'static str> for SequenceDecodeErrors {
    fn from(r: &'static str) -> Self {
        Self::GenericStatic(r)
    }
}
