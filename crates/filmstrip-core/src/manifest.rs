/*
 * Copyright (c) 2024.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Sequence manifest
//!
//! A small record that rides along with an encoded sequence and carries the
//! details decoding alone cannot recover, the original file name and
//! extension. It also repeats the frame count and byte count for inspection.
//!
//! The manifest is optional everywhere: the size prefix embedded in the
//! stream is what drives byte-exact reconstruction, a sequence decoded
//! without its manifest yields identical bytes and merely loses the name.

/// Manifest record for one encoded sequence.
///
/// With the `serde` feature this serializes to the wire shape
/// `{"originalFilename", "originalExtension", "totalImages", "fileSize"}`.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SequenceManifest {
    /// Name of the file the sequence was encoded from, as given
    pub original_filename:  String,
    /// Substring of the file name after its final `.`, empty when the name
    /// has no extension
    pub original_extension: String,
    /// Number of frames in the sequence
    pub total_images:       usize,
    /// Exact byte length of the encoded file
    pub file_size:          u64
}

impl SequenceManifest {
    /// Build the manifest for a file about to be encoded
    pub fn for_file(filename: &str, total_images: usize, file_size: u64) -> SequenceManifest {
        SequenceManifest {
            original_filename:  filename.to_owned(),
            original_extension: extension_of(filename).to_owned(),
            total_images,
            file_size
        }
    }

    /// Return the part of the original file name before its first `.`
    ///
    /// This is the stem reconstructed files are named with.
    pub fn file_stem(&self) -> &str {
        self.original_filename
            .split('.')
            .next()
            .unwrap_or(&self.original_filename)
    }
}

/// Extension of a file name, the substring after the final `.`.
///
/// Returns an empty string when the name carries no dot at all.
pub(crate) fn extension_of(name: &str) -> &str {
    name.rsplit_once('.').map_or("", |(_, ext)| ext)
}

#[cfg(test)]
mod tests {
    use crate::manifest::{extension_of, SequenceManifest};

    #[test]
    fn extension_is_after_final_dot() {
        assert_eq!(extension_of("t.txt"), "txt");
        assert_eq!(extension_of("archive.tar.gz"), "gz");
        assert_eq!(extension_of("no_extension"), "");
    }

    #[test]
    fn stem_is_before_first_dot() {
        let manifest = SequenceManifest::for_file("archive.tar.gz", 1, 10);

        assert_eq!(manifest.file_stem(), "archive");
        assert_eq!(manifest.original_extension, "gz");
    }
}
