//! End-to-end split and align flows over real files.

use std::fs;

use image::{DynamicImage, Rgba, RgbaImage};
use tempfile::TempDir;

use framecut::{
    AlignParams, Error, OverflowMode, SplitParams, align_frames_to_dir, frame_filename,
    split_sheet_to_dir,
};

/// A 36-frame sheet whose every column carries its frame index in the red
/// channel, so crops can be traced back to their origin.
fn write_test_sheet(dir: &TempDir) -> std::path::PathBuf {
    let params = SplitParams::default();
    let width = params.required_sheet_width();
    let sheet = RgbaImage::from_fn(width, params.frame_height, |x, _| {
        Rgba([(x / params.stride) as u8, 0, 0, 255])
    });
    let path = dir.path().join("sheet.png");
    DynamicImage::ImageRgba8(sheet).save(&path).unwrap();
    path
}

#[test]
fn split_writes_all_numbered_frames() {
    let dir = TempDir::new().unwrap();
    let sheet_path = write_test_sheet(&dir);
    let out_dir = dir.path().join("frames");

    let params = SplitParams::default();
    let written = split_sheet_to_dir(&sheet_path, &out_dir, &params).unwrap();
    assert_eq!(written, 36);

    for i in 0..36 {
        let path = out_dir.join(frame_filename(i));
        let frame = image::open(&path).unwrap();
        assert_eq!(frame.width(), 48, "{}", frame_filename(i));
        assert_eq!(frame.height(), 128);
        // Every pixel of frame i came from the sheet's i-th stride band.
        assert_eq!(frame.to_rgba8().get_pixel(0, 0)[0], i as u8);
    }
}

#[test]
fn split_is_deterministic_across_runs() {
    let dir = TempDir::new().unwrap();
    let sheet_path = write_test_sheet(&dir);
    let params = SplitParams::default();

    let out_a = dir.path().join("a");
    let out_b = dir.path().join("b");
    split_sheet_to_dir(&sheet_path, &out_a, &params).unwrap();
    split_sheet_to_dir(&sheet_path, &out_b, &params).unwrap();

    for i in 0..36 {
        let a = fs::read(out_a.join(frame_filename(i))).unwrap();
        let b = fs::read(out_b.join(frame_filename(i))).unwrap();
        assert_eq!(a, b, "{}", frame_filename(i));
    }
}

#[test]
fn missing_sheet_fails_with_sheet_error() {
    let dir = TempDir::new().unwrap();
    let err = split_sheet_to_dir(
        &dir.path().join("no_such_sheet.png"),
        &dir.path().join("frames"),
        &SplitParams::default(),
    )
    .unwrap_err();
    assert!(matches!(err, Error::Sheet(_)));
}

#[test]
fn align_centers_and_bottom_aligns_each_frame() {
    let dir = TempDir::new().unwrap();
    let in_dir = dir.path().join("frames-edit");
    let out_dir = dir.path().join("frames");
    fs::create_dir_all(&in_dir).unwrap();

    let frame = RgbaImage::from_pixel(40, 100, Rgba([7, 7, 7, 255]));
    frame.save(in_dir.join(frame_filename(0))).unwrap();

    let params = AlignParams {
        count: 1,
        ..Default::default()
    };
    let report = align_frames_to_dir(&in_dir, &out_dir, &params).unwrap();
    assert_eq!(report.processed, 1);

    let canvas = image::open(out_dir.join(frame_filename(0)))
        .unwrap()
        .to_rgba8();
    assert_eq!(canvas.dimensions(), (80, 128));
    // Pasted at (20, 28): margins transparent, frame content opaque.
    assert_eq!(canvas.get_pixel(19, 127)[3], 0);
    assert_eq!(canvas.get_pixel(20, 28)[3], 255);
    assert_eq!(canvas.get_pixel(59, 127)[3], 255);
    assert_eq!(canvas.get_pixel(60, 127)[3], 0);
    assert_eq!(canvas.get_pixel(20, 27)[3], 0);
}

#[test]
fn align_skips_missing_frames_and_continues() {
    let dir = TempDir::new().unwrap();
    let in_dir = dir.path().join("in");
    let out_dir = dir.path().join("out");
    fs::create_dir_all(&in_dir).unwrap();

    let frame = RgbaImage::from_pixel(48, 128, Rgba([1, 1, 1, 255]));
    for i in 0..36 {
        if i == 5 {
            continue;
        }
        frame.save(in_dir.join(frame_filename(i))).unwrap();
    }

    let report = align_frames_to_dir(&in_dir, &out_dir, &AlignParams::default()).unwrap();
    assert_eq!(report.processed, 35);
    assert_eq!(report.skipped, 1);
    assert_eq!(report.errors, 0);

    assert!(!out_dir.join(frame_filename(5)).exists());
    assert!(out_dir.join(frame_filename(4)).exists());
    assert!(out_dir.join(frame_filename(6)).exists());
}

#[test]
fn oversized_frame_is_an_error_in_fail_mode_without_aborting() {
    let dir = TempDir::new().unwrap();
    let in_dir = dir.path().join("in");
    let out_dir = dir.path().join("out");
    fs::create_dir_all(&in_dir).unwrap();

    let wide = RgbaImage::from_pixel(100, 128, Rgba([1, 1, 1, 255]));
    let fits = RgbaImage::from_pixel(48, 128, Rgba([1, 1, 1, 255]));
    wide.save(in_dir.join(frame_filename(0))).unwrap();
    fits.save(in_dir.join(frame_filename(1))).unwrap();

    let params = AlignParams {
        count: 2,
        overflow: OverflowMode::Fail,
        ..Default::default()
    };
    let report = align_frames_to_dir(&in_dir, &out_dir, &params).unwrap();
    assert_eq!(report.processed, 1);
    assert_eq!(report.errors, 1);
    assert!(!out_dir.join(frame_filename(0)).exists());
    assert!(out_dir.join(frame_filename(1)).exists());
}

#[test]
fn split_then_align_keeps_content_on_the_bottom_row() {
    let dir = TempDir::new().unwrap();
    let sheet_path = write_test_sheet(&dir);
    let frames_dir = dir.path().join("frames");
    let aligned_dir = dir.path().join("aligned");

    split_sheet_to_dir(&sheet_path, &frames_dir, &SplitParams::default()).unwrap();
    let report =
        align_frames_to_dir(&frames_dir, &aligned_dir, &AlignParams::default()).unwrap();
    assert_eq!(report.processed, 36);
    assert_eq!(report.skipped, 0);

    for i in 0..36 {
        let canvas = image::open(aligned_dir.join(frame_filename(i)))
            .unwrap()
            .to_rgba8();
        // Sheet content is fully opaque, so the canvas bottom row must be
        // opaque wherever the 48px frame landed (centered at x=16..64).
        assert_eq!(canvas.get_pixel(16, 127)[3], 255);
        assert_eq!(canvas.get_pixel(63, 127)[3], 255);
        assert_eq!(canvas.get_pixel(15, 127)[3], 0);
        assert_eq!(canvas.get_pixel(64, 127)[3], 0);
    }
}
