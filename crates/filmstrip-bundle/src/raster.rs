/*
 * Copyright (c) 2024.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Frame <-> PNG conversion
//!
//! Frames are exported as 8-bit RGBA, the grayscale intensity replicated into
//! the color channels with alpha fully opaque. Import is more liberal: any
//! square 8-bit PNG decodes, whatever its channel layout, by reading the
//! first channel of each pixel, the other channels of a conforming frame are
//! copies of it anyway.

use filmstrip_core::Frame;

use crate::errors::BundleErrors;

/// Encode one frame as a PNG image.
pub fn encode_frame(frame: &Frame) -> Result<Vec<u8>, BundleErrors> {
    let side = frame.side() as u32;
    let rgba = frame.to_rgba();

    let mut out = Vec::new();

    let mut encoder = png::Encoder::new(&mut out, side, side);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);

    let mut writer = encoder.write_header()?;
    writer.write_image_data(&rgba)?;
    writer.finish()?;

    Ok(out)
}

/// Decode a PNG image into the frame at `index`.
///
/// The raster must be square and 8 bits per sample; palette and sub-byte
/// grayscale images are expanded before the check. Dimension validation
/// against the sequence's expected side happens later, in the sequence
/// decoder, which knows the configured side.
pub fn decode_frame(index: usize, data: &[u8]) -> Result<Frame, BundleErrors> {
    let mut decoder = png::Decoder::new(data);
    decoder.set_transformations(png::Transformations::EXPAND);

    let mut reader = decoder.read_info()?;

    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf)?;

    if info.bit_depth != png::BitDepth::Eight {
        return Err(BundleErrors::UnsupportedBitDepth(info.bit_depth));
    }

    let width = info.width as usize;
    let height = info.height as usize;

    if width != height {
        return Err(BundleErrors::NonSquareImage(width, height));
    }

    let channels = info.color_type.samples();

    let frame = Frame::from_samples(index, width, &buf[..info.buffer_size()], channels)?;

    Ok(frame)
}
