use image::{RgbaImage, imageops};
use tracing::warn;

use crate::core::params::AlignParams;
use crate::error::{Error, Result};
use crate::types::OverflowMode;

/// Paste offset for a frame on the canvas: centered horizontally with
/// flooring division, bottom edge on the canvas bottom edge. Either
/// coordinate goes negative when the frame exceeds the canvas.
pub fn placement(
    canvas_width: u32,
    canvas_height: u32,
    frame_width: u32,
    frame_height: u32,
) -> (i64, i64) {
    let x = (canvas_width as i64 - frame_width as i64).div_euclid(2);
    let y = canvas_height as i64 - frame_height as i64;
    (x, y)
}

/// Composite one frame onto a fresh transparent canvas.
///
/// The frame's alpha channel is the blend mask; frames decoded from opaque
/// sources carry alpha 255 and overwrite the canvas. Pixel content is never
/// scaled. `index` is only used for diagnostics and errors.
pub fn compose_frame(frame: &RgbaImage, params: &AlignParams, index: u32) -> Result<RgbaImage> {
    let (frame_width, frame_height) = frame.dimensions();

    if frame_width > params.canvas_width || frame_height > params.canvas_height {
        match params.overflow {
            OverflowMode::Fail => {
                return Err(Error::FrameTooLarge {
                    index,
                    width: frame_width,
                    height: frame_height,
                    canvas_width: params.canvas_width,
                    canvas_height: params.canvas_height,
                });
            }
            OverflowMode::Clip => {
                warn!(
                    "Frame {} is {}x{}, clipping to the {}x{} canvas",
                    index, frame_width, frame_height, params.canvas_width, params.canvas_height
                );
            }
        }
    }

    let mut canvas = RgbaImage::new(params.canvas_width, params.canvas_height);
    let (x, y) = placement(
        params.canvas_width,
        params.canvas_height,
        frame_width,
        frame_height,
    );
    imageops::overlay(&mut canvas, frame, x, y);
    Ok(canvas)
}
