/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use filmstrip_core::SequenceManifest;
use serde_json::json;

#[test]
fn manifest_serializes_to_the_bundle_wire_shape() {
    let manifest = SequenceManifest::for_file("t.txt", 1, 3);

    let value = serde_json::to_value(&manifest).unwrap();

    assert_eq!(
        value,
        json!({
            "originalFilename": "t.txt",
            "originalExtension": "txt",
            "totalImages": 1,
            "fileSize": 3
        })
    );
}

#[test]
fn manifest_parses_from_foreign_bundles() {
    let raw = r#"{
        "originalFilename": "photo_backup.tar",
        "originalExtension": "tar",
        "totalImages": 7,
        "fileSize": 6815744
    }"#;

    let manifest: SequenceManifest = serde_json::from_str(raw).unwrap();

    assert_eq!(manifest.original_filename, "photo_backup.tar");
    assert_eq!(manifest.original_extension, "tar");
    assert_eq!(manifest.total_images, 7);
    assert_eq!(manifest.file_size, 6_815_744);
    assert_eq!(manifest.file_stem(), "photo_backup");
}
