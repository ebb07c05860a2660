//! High-level, ergonomic library API: split a sheet to files or in-memory
//! frames, align frame directories onto fixed canvases, with batch reporting.
//! Prefer these entrypoints over the low-level processing modules when
//! integrating FRAMECUT.
use std::fs;
use std::path::Path;

use image::{DynamicImage, RgbaImage};
use tracing::{info, warn};

use crate::core::params::{AlignParams, SplitParams};
use crate::core::processing::compose::compose_frame;
use crate::core::processing::grid::crop_frame;
use crate::error::{Error, Result};
use crate::io::frames::{FrameLoad, frame_filename, load_frame, save_frame};
use crate::io::sheet::SheetReader;
use crate::types::OverflowMode;

/// Result of a batch alignment run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub processed: usize,
    pub skipped: usize,
    pub errors: usize,
}

/// Split a decoded sheet into frames in memory (no disk I/O).
pub fn split_sheet(sheet: &DynamicImage, params: &SplitParams) -> Result<Vec<RgbaImage>> {
    params.validate()?;
    (0..params.count)
        .map(|i| crop_frame(sheet, params, i))
        .collect()
}

/// Split a sheet file into `params.count` numbered PNG files.
///
/// Creates `output_dir` if absent. Returns the number of frames written.
/// Any decode or write failure aborts the run.
pub fn split_sheet_to_dir(input: &Path, output_dir: &Path, params: &SplitParams) -> Result<usize> {
    params.validate()?;
    let reader = SheetReader::open(input, params)?;
    fs::create_dir_all(output_dir)?;

    for i in 0..params.count {
        let frame = crop_frame(reader.image(), params, i)?;
        save_frame(output_dir, i, &frame)?;
        info!(
            "Extracted {}: {}x{}",
            frame_filename(i),
            frame.width(),
            frame.height()
        );
    }

    info!("Extracted {} frames from {:?}", params.count, input);
    Ok(params.count as usize)
}

/// Align one frame onto a fresh transparent canvas in memory.
pub fn align_frame(frame: &RgbaImage, params: &AlignParams) -> Result<RgbaImage> {
    params.validate()?;
    compose_frame(frame, params, 0)
}

/// Align every available frame in `input_dir` onto fixed canvases in
/// `output_dir`.
///
/// A missing input file is logged and skipped; an oversized frame under
/// `OverflowMode::Fail` is counted as a per-frame error without aborting
/// the batch. Any other failure (unreadable image, I/O error) propagates
/// immediately.
pub fn align_frames_to_dir(
    input_dir: &Path,
    output_dir: &Path,
    params: &AlignParams,
) -> Result<BatchReport> {
    params.validate()?;
    fs::create_dir_all(output_dir)?;

    let mut report = BatchReport::default();

    for i in 0..params.count {
        let frame = match load_frame(input_dir, i)? {
            FrameLoad::Loaded(frame) => frame,
            FrameLoad::Missing => {
                warn!("Skipping {}: not found", frame_filename(i));
                report.skipped += 1;
                continue;
            }
        };

        match compose_frame(&frame, params, i) {
            Ok(canvas) => {
                save_frame(output_dir, i, &canvas)?;
                info!(
                    "Processed {}: {}x{} -> {}x{}",
                    frame_filename(i),
                    frame.width(),
                    frame.height(),
                    params.canvas_width,
                    params.canvas_height
                );
                report.processed += 1;
            }
            Err(e @ Error::FrameTooLarge { .. }) => {
                debug_assert_eq!(params.overflow, OverflowMode::Fail);
                warn!("Error processing {}: {}", frame_filename(i), e);
                report.errors += 1;
            }
            Err(e) => return Err(e),
        }
    }

    info!(
        "Alignment complete: processed={} skipped={} errors={}",
        report.processed, report.skipped, report.errors
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn split_sheet_yields_count_frames() {
        let params = SplitParams {
            frame_width: 4,
            frame_height: 6,
            stride: 5,
            count: 3,
        };
        let sheet = DynamicImage::ImageRgba8(RgbaImage::from_pixel(
            15,
            6,
            Rgba([1, 2, 3, 255]),
        ));

        let frames = split_sheet(&sheet, &params).unwrap();
        assert_eq!(frames.len(), 3);
        assert!(frames.iter().all(|f| f.dimensions() == (4, 6)));
    }

    #[test]
    fn align_frame_produces_canvas_sized_output() {
        let params = AlignParams::default();
        let frame = RgbaImage::from_pixel(40, 100, Rgba([9, 9, 9, 255]));

        let canvas = align_frame(&frame, &params).unwrap();
        assert_eq!(canvas.dimensions(), (80, 128));
    }
}
