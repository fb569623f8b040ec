//! File-level encode/decode behavior.

use colorshift_core::{Raster, Rgba8};
use colorshift_io::{decode, encode, output_path, IoError, OutputFormat};
use tempfile::tempdir;

fn gradient(w: u32, h: u32) -> Raster {
    let pixels = (0..h)
        .flat_map(|y| (0..w).map(move |x| Rgba8::new((x * 7) as u8, (y * 11) as u8, 128, (x + y) as u8)))
        .collect();
    Raster::from_pixels(w, h, pixels).unwrap()
}

#[test]
fn png_roundtrip_is_lossless() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("grad.png");
    let raster = gradient(31, 17);

    encode(&raster, &path, OutputFormat::Png).unwrap();
    assert_eq!(decode(&path).unwrap(), raster);
}

#[test]
fn jpeg_roundtrip_keeps_dimensions() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("grad.jpg");
    let raster = gradient(40, 24);

    encode(&raster, &path, OutputFormat::Jpeg).unwrap();
    let loaded = decode(&path).unwrap();
    assert_eq!(loaded.dimensions(), (40, 24));
    assert!(loaded.pixels().iter().all(|p| p.alpha() == 255));
}

#[test]
fn unknown_extension_writes_nothing() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("grad.tga");

    let err = OutputFormat::from_path(&path).unwrap_err();
    assert!(matches!(err, IoError::UnsupportedFormat(_)));
    assert!(!path.exists());
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn failed_encode_leaves_no_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("huge.jpg");
    // wider than the JPEG limit
    let raster = Raster::new(70_000, 1);

    assert!(matches!(
        encode(&raster, &path, OutputFormat::Jpeg),
        Err(IoError::EncodeError(_))
    ));
    assert!(!path.exists());
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn failed_encode_keeps_existing_output() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("prev.jpg");
    std::fs::write(&path, b"previous").unwrap();

    assert!(encode(&Raster::new(70_000, 1), &path, OutputFormat::Jpeg).is_err());
    assert_eq!(std::fs::read(&path).unwrap(), b"previous");
}

#[test]
fn output_lands_beside_input() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("scene.png");
    encode(&gradient(4, 4), &input, OutputFormat::Png).unwrap();

    let out = output_path(&input, "HLS");
    assert_eq!(out, dir.path().join("scene_HLS.png"));
    let raster = decode(&input).unwrap();
    encode(&raster, &out, OutputFormat::from_path(&out).unwrap()).unwrap();
    assert_eq!(decode(&out).unwrap(), raster);
}

#[test]
fn png_content_under_jpg_name_is_detected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("mislabeled.jpg");
    let raster = gradient(5, 3);

    encode(&raster, &path, OutputFormat::Png).unwrap();
    assert_eq!(decode(&path).unwrap(), raster);
}
