use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::OverflowMode;

/// Splitter parameters suitable for config files and presets.
///
/// Defaults match the classic 36-frame fighter sheet layout: 48px-wide
/// frames on a 50px stride, 128px tall.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SplitParams {
    /// Width of each cropped frame in pixels
    pub frame_width: u32,
    /// Height of each cropped frame in pixels
    pub frame_height: u32,
    /// Horizontal distance between frame origins in pixels
    pub stride: u32,
    /// Number of frames tiled across the sheet
    pub count: u32,
}

impl Default for SplitParams {
    fn default() -> Self {
        Self {
            frame_width: 48,
            frame_height: 128,
            stride: 50,
            count: 36,
        }
    }
}

impl SplitParams {
    pub fn validate(&self) -> Result<()> {
        if self.frame_width == 0 {
            return Err(Error::ZeroParam {
                param: "frame_width",
            });
        }
        if self.frame_height == 0 {
            return Err(Error::ZeroParam {
                param: "frame_height",
            });
        }
        if self.stride == 0 {
            return Err(Error::ZeroParam { param: "stride" });
        }
        if self.count == 0 {
            return Err(Error::ZeroParam { param: "count" });
        }
        Ok(())
    }

    /// Minimum sheet width required to crop every frame in full.
    pub fn required_sheet_width(&self) -> u32 {
        (self.count - 1) * self.stride + self.frame_width
    }
}

/// Aligner parameters suitable for config files and presets.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AlignParams {
    /// Target canvas width in pixels
    pub canvas_width: u32,
    /// Target canvas height in pixels
    pub canvas_height: u32,
    /// Number of frame indices to process
    pub count: u32,
    /// Policy for frames larger than the canvas
    pub overflow: OverflowMode,
}

impl Default for AlignParams {
    fn default() -> Self {
        Self {
            canvas_width: 80,
            canvas_height: 128,
            count: 36,
            overflow: OverflowMode::Clip,
        }
    }
}

impl AlignParams {
    pub fn validate(&self) -> Result<()> {
        if self.canvas_width == 0 {
            return Err(Error::ZeroParam {
                param: "canvas_width",
            });
        }
        if self.canvas_height == 0 {
            return Err(Error::ZeroParam {
                param: "canvas_height",
            });
        }
        if self.count == 0 {
            return Err(Error::ZeroParam { param: "count" });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_classic_sheet_layout() {
        let split = SplitParams::default();
        assert_eq!(split.frame_width, 48);
        assert_eq!(split.stride, 50);
        assert_eq!(split.count, 36);
        assert_eq!(split.required_sheet_width(), 35 * 50 + 48);

        let align = AlignParams::default();
        assert_eq!((align.canvas_width, align.canvas_height), (80, 128));
        assert_eq!(align.overflow, OverflowMode::Clip);
    }

    #[test]
    fn zero_fields_are_rejected() {
        let mut split = SplitParams::default();
        split.stride = 0;
        assert!(matches!(
            split.validate(),
            Err(Error::ZeroParam { param: "stride" })
        ));

        let mut align = AlignParams::default();
        align.count = 0;
        assert!(matches!(
            align.validate(),
            Err(Error::ZeroParam { param: "count" })
        ));
    }

    #[test]
    fn params_round_trip_through_json() {
        let split = SplitParams::default();
        let json = serde_json::to_string(&split).unwrap();
        let back: SplitParams = serde_json::from_str(&json).unwrap();
        assert_eq!(back.frame_width, split.frame_width);
        assert_eq!(back.count, split.count);
    }
}
