use std::path::Path;

use image::RgbaImage;

use crate::error::Result;

/// Canonical filename for frame `index`: `frame_000.png` .. `frame_NNN.png`.
pub fn frame_filename(index: u32) -> String {
    format!("frame_{:03}.png", index)
}

/// Outcome of a frame load attempt. A missing file is an expected condition
/// during batch alignment, not an error.
pub enum FrameLoad {
    Loaded(RgbaImage),
    Missing,
}

pub fn load_frame(dir: &Path, index: u32) -> Result<FrameLoad> {
    let path = dir.join(frame_filename(index));
    if !path.exists() {
        return Ok(FrameLoad::Missing);
    }
    // Opaque sources (RGB, grayscale) gain alpha 255 here, so downstream
    // compositing degenerates to an opaque overwrite for them.
    let image = image::open(&path)?.to_rgba8();
    Ok(FrameLoad::Loaded(image))
}

pub fn save_frame(dir: &Path, index: u32, frame: &RgbaImage) -> Result<()> {
    let path = dir.join(frame_filename(index));
    frame.save(&path)?;
    Ok(())
}
