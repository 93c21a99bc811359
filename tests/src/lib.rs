/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! End-to-end tests covering the whole filmstrip pipeline,
//! bytes -> frames -> PNG -> ZIP -> frames -> bytes.

use xxhash_rust::xxh3::xxh3_128;

#[cfg(test)]
mod pipeline;
#[cfg(test)]
mod wire;

pub fn hash(contents: &[u8]) -> u128 {
    xxh3_128(contents)
}
