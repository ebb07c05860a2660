//! Shared types and enums used across FRAMECUT.
//! Includes `OverflowMode` for oversized-frame policy during compose.
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Policy for frames larger than the target canvas.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
pub enum OverflowMode {
    /// Place the frame with a negative offset; off-canvas pixels are dropped.
    Clip,
    /// Treat an oversized frame as a per-frame error.
    Fail,
}

impl std::fmt::Display for OverflowMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            OverflowMode::Clip => "Clip",
            OverflowMode::Fail => "Fail",
        };
        write!(f, "{}", s)
    }
}
