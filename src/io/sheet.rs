use std::path::{Path, PathBuf};

use image::DynamicImage;
use thiserror::Error;
use tracing::{info, warn};

use crate::core::params::SplitParams;

/// Errors encountered when opening a sprite sheet
#[derive(Debug, Error)]
pub enum SheetError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image decode error: {0}")]
    Decode(#[from] image::ImageError),
    #[error("Sheet not found: {0}")]
    NotFound(PathBuf),
}

/// A decoded sprite sheet plus the path it came from.
///
/// Opening validates nothing fatally: a sheet whose height or width does not
/// match the split parameters is only warned about, since the crop itself
/// clamps at the sheet bounds.
pub struct SheetReader {
    path: PathBuf,
    image: DynamicImage,
}

impl SheetReader {
    pub fn open(path: &Path, params: &SplitParams) -> Result<Self, SheetError> {
        if !path.exists() {
            return Err(SheetError::NotFound(path.to_path_buf()));
        }
        let image = image::open(path)?;
        info!(
            "Opened sheet {:?}: {}x{}",
            path,
            image.width(),
            image.height()
        );

        if image.height() != params.frame_height {
            warn!(
                "Sheet height {} differs from frame height {}",
                image.height(),
                params.frame_height
            );
        }
        if image.width() < params.required_sheet_width() {
            warn!(
                "Sheet width {} is less than the {} required for {} frames; trailing crops will clamp",
                image.width(),
                params.required_sheet_width(),
                params.count
            );
        }

        Ok(Self {
            path: path.to_path_buf(),
            image,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn image(&self) -> &DynamicImage {
        &self.image
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.image.width(), self.image.height())
    }
}
