use image::{DynamicImage, RgbaImage, imageops};
use tracing::warn;

use crate::core::params::SplitParams;
use crate::error::{Error, Result};

/// Crop window for one frame, in sheet pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRect {
    pub left: u32,
    pub top: u32,
    pub width: u32,
    pub height: u32,
}

/// Crop window for frame `index`. Pure function of the index and params:
/// frames sit on a fixed horizontal stride starting at the sheet's left edge.
pub fn crop_rect(params: &SplitParams, index: u32) -> Result<CropRect> {
    if index >= params.count {
        return Err(Error::IndexOutOfRange {
            index,
            count: params.count,
        });
    }
    Ok(CropRect {
        left: index * params.stride,
        top: 0,
        width: params.frame_width,
        height: params.frame_height,
    })
}

/// Crop frame `index` out of the sheet.
///
/// No bounds check against the sheet's actual width is made here; a crop
/// window past the right edge clamps to the sheet bounds and yields a
/// narrower (possibly empty) frame.
pub fn crop_frame(sheet: &DynamicImage, params: &SplitParams, index: u32) -> Result<RgbaImage> {
    let rect = crop_rect(params, index)?;
    if rect.left + rect.width > sheet.width() {
        warn!(
            "Frame {} crop window [{}, {}) extends past sheet width {}",
            index,
            rect.left,
            rect.left + rect.width,
            sheet.width()
        );
    }
    let frame = imageops::crop_imm(sheet, rect.left, rect.top, rect.width, rect.height);
    Ok(frame.to_image())
}
