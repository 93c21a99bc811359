/*
 * Copyright (c) 2024.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! ZIP bundle packing and unpacking

use std::io::{Read, Seek, Write};

use filmstrip_core::{sequence, EncodedSequence, Frame, SequenceManifest};
use log::{info, warn};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

use crate::errors::BundleErrors;
use crate::raster::{decode_frame, encode_frame};

/// Name of the manifest entry inside a bundle.
pub const METADATA_NAME: &str = "_metadata.json";

/// Options respected when reading a bundle
#[derive(Debug, Copy, Clone, Default)]
pub struct BundleReadOptions {
    skip_malformed_metadata: bool
}

impl BundleReadOptions {
    /// Whether a malformed `_metadata.json` is ignored instead of reported
    pub const fn skip_malformed_metadata(&self) -> bool {
        self.skip_malformed_metadata
    }

    /// Choose whether a malformed `_metadata.json` is ignored
    ///
    /// Off by default, a broken manifest is surfaced as
    /// [`MetadataParse`](crate::BundleErrors::MetadataParse). When on, the
    /// entry is dropped with a warning and decoding proceeds without a
    /// recovered file name.
    pub fn set_skip_malformed_metadata(mut self, yes: bool) -> Self {
        self.skip_malformed_metadata = yes;
        self
    }
}

/// An image entry that has a name but is not yet decoded.
pub struct NamedImage {
    /// Entry or file name, used for fallback ordering
    pub name: String,
    /// Raw PNG bytes
    pub data: Vec<u8>
}

/// The contents of an unpacked bundle, ordered frames plus the manifest when
/// one was present.
pub struct Bundle {
    frames:   Vec<Frame>,
    manifest: Option<SequenceManifest>
}

impl Bundle {
    /// Return the frames in sequence order
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Return the manifest, when the bundle carried one
    pub const fn manifest(&self) -> Option<&SequenceManifest> {
        self.manifest.as_ref()
    }

    /// Consume the bundle, returning frames and manifest
    pub fn into_parts(self) -> (Vec<Frame>, Option<SequenceManifest>) {
        (self.frames, self.manifest)
    }
}

/// Write an encoded sequence as a ZIP bundle.
///
/// The bundle holds one PNG per frame, named `f1.png … fN.png`, and the
/// serialized manifest as `_metadata.json`.
pub fn write_bundle<W: Write + Seek>(
    sequence: &EncodedSequence, sink: W
) -> Result<(), BundleErrors> {
    let mut zip = ZipWriter::new(sink);
    let entry_options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for frame in sequence.frames() {
        zip.start_file(frame.file_name(), entry_options)?;
        zip.write_all(&encode_frame(frame)?)?;
    }

    zip.start_file(METADATA_NAME, entry_options)?;
    zip.write_all(&serde_json::to_vec(sequence.manifest())?)?;

    zip.finish()?;

    info!(
        "Bundled {} frame(s) plus {METADATA_NAME}",
        sequence.frames().len()
    );

    Ok(())
}

/// Read a ZIP bundle back into frames and an optional manifest.
///
/// Image entries are ordered by the number embedded in their names, which
/// reproduces the encoder's `f1.png … fN.png` sequence and is a documented
/// best-effort fallback for anything renamed by hand.
pub fn read_bundle<R: Read + Seek>(
    source: R, options: BundleReadOptions
) -> Result<Bundle, BundleErrors> {
    let mut archive = ZipArchive::new(source)?;

    let mut images = Vec::with_capacity(archive.len());

    for index in 0..archive.len() {
        let mut entry = archive.by_index(index)?;

        if entry.is_dir() {
            continue;
        }

        let mut data = Vec::with_capacity(entry.size() as usize);
        entry.read_to_end(&mut data)?;

        images.push(NamedImage {
            name: entry.name().to_owned(),
            data
        });
    }

    frames_from_named_images(images, options)
}

/// Turn a list of named images, e.g. ZIP entries or files from a directory,
/// into ordered frames and an optional manifest.
///
/// A `_metadata.json` entry is parsed as the manifest and excluded from the
/// pixel pass; everything else must decode as PNG.
pub fn frames_from_named_images(
    mut images: Vec<NamedImage>, options: BundleReadOptions
) -> Result<Bundle, BundleErrors> {
    let mut manifest = None;

    if let Some(position) = images.iter().position(|image| base_name(&image.name) == METADATA_NAME)
    {
        let entry = images.remove(position);

        match serde_json::from_slice::<SequenceManifest>(&entry.data) {
            Ok(parsed) => manifest = Some(parsed),
            Err(err) if options.skip_malformed_metadata() => {
                warn!("Ignoring malformed {METADATA_NAME}: {err}");
            }
            Err(err) => return Err(BundleErrors::MetadataParse(err))
        }
    }

    sequence::sort_by_embedded_number(&mut images, |image| image.name.as_str());

    let mut frames = Vec::with_capacity(images.len());

    for (index, image) in images.iter().enumerate() {
        frames.push(decode_frame(index, &image.data)?);
    }

    if let Some(manifest) = &manifest {
        if manifest.total_images != frames.len() {
            warn!(
                "Manifest expects {} image(s) but the bundle holds {}",
                manifest.total_images,
                frames.len()
            );
        }
    }

    info!(
        "Unpacked {} frame(s), manifest {}",
        frames.len(),
        if manifest.is_some() { "present" } else { "absent" }
    );

    Ok(Bundle { frames, manifest })
}

/// Final path segment of a bundle entry name.
fn base_name(name: &str) -> &str {
    name.rsplit(['/', '\\']).next().unwrap_or(name)
}
