/*
 * Copyright (c) 2024.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Name-based sequence ordering fallback
//!
//! Exported frames are named `f1.png`, `f2.png`… so a bundle unpacked and
//! repacked by hand can still be sequenced. Sorting by the first run of
//! digits in each name is a best-effort legacy mechanism: names without
//! digits all sort as zero and ties keep their input order, so it is lossy
//! and ambiguous on anything but the canonical names. New code should carry
//! the typed [`Frame::index`](crate::Frame::index) instead.

/// Return the first run of ASCII digits in `name` as a number.
///
/// `None` when the name contains no digit or the run overflows a `u64`.
///
/// # Example
/// ```
/// use filmstrip_core::sequence::embedded_sequence_number;
///
/// assert_eq!(embedded_sequence_number("f12.png"), Some(12));
/// assert_eq!(embedded_sequence_number("frame-007-final.png"), Some(7));
/// assert_eq!(embedded_sequence_number("cover.png"), None);
/// ```
pub fn embedded_sequence_number(name: &str) -> Option<u64> {
    let start = name.find(|c: char| c.is_ascii_digit())?;

    let digits: &str = &name[start..];
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());

    digits[..end].parse().ok()
}

/// Stable sort of `items` by the digit run embedded in each item's name.
///
/// Items without an embedded number sort as zero, matching the legacy
/// behavior of numeric bundle readers.
pub fn sort_by_embedded_number<T, F>(items: &mut [T], name_of: F)
where
    F: Fn(&T) -> &str
{
    items.sort_by_key(|item| embedded_sequence_number(name_of(item)).unwrap_or(0));
}
