#![doc = r#"
FRAMECUT — a sprite sheet frame splitter and fixed-canvas alignment toolkit.

This crate slices horizontally tiled sprite sheets into individually numbered
PNG frames, and repositions frames onto fixed-size transparent canvases
(centered horizontally, aligned to the bottom edge) without any resampling.
It powers the FRAMECUT CLI and can be embedded in your own Rust applications.

Quick start: split a sheet into frame files
-------------------------------------------
```rust,no_run
use std::path::Path;
use framecut::{split_sheet_to_dir, SplitParams};

fn main() -> framecut::Result<()> {
    // Defaults: 48x128 frames on a 50px stride, 36 frames.
    let params = SplitParams::default();
    let written = split_sheet_to_dir(
        Path::new("ryu_sheet.png"),
        Path::new("frames"),
        &params,
    )?;
    println!("wrote {written} frames");
    Ok(())
}
```

Align a directory of frames onto fixed canvases
-----------------------------------------------
```rust,no_run
use std::path::Path;
use framecut::{align_frames_to_dir, AlignParams, OverflowMode};

fn main() -> framecut::Result<()> {
    let params = AlignParams {
        canvas_width: 80,
        canvas_height: 128,
        count: 36,
        overflow: OverflowMode::Clip,
    };

    let report = align_frames_to_dir(
        Path::new("frames-edit"),
        Path::new("frames"),
        &params,
    )?;

    println!(
        "processed={} skipped={} errors={}",
        report.processed, report.skipped, report.errors
    );
    Ok(())
}
```

Missing input frames are skipped with a notice and counted in the report;
any other failure aborts the run with a typed [`Error`].

In-memory processing
--------------------
```rust
use image::{DynamicImage, RgbaImage};
use framecut::{align_frame, split_sheet, AlignParams, SplitParams};

fn main() -> framecut::Result<()> {
    let sheet = DynamicImage::ImageRgba8(RgbaImage::new(1800, 128));
    let frames = split_sheet(&sheet, &SplitParams::default())?;

    let canvas = align_frame(&frames[0], &AlignParams::default())?;
    assert_eq!(canvas.dimensions(), (80, 128));
    Ok(())
}
```

Error handling
--------------
All public functions return `framecut::Result<T>`; match on `framecut::Error`
to handle specific cases, e.g. a missing sheet or an oversized frame under
`OverflowMode::Fail`.

Useful modules
--------------
- [`api`] — high-level entry points.
- [`types`] — shared enums (e.g. `OverflowMode`).
- [`io`] — sheet reader and numbered frame file helpers.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
// Types
pub use crate::core::params::{AlignParams, SplitParams};
pub use error::{Error, Result};
pub use types::OverflowMode;

// Readers
pub use io::sheet::{SheetError, SheetReader};

// High-level API re-exports
pub use api::{
    BatchReport, align_frame, align_frames_to_dir, split_sheet, split_sheet_to_dir,
};
pub use io::frames::frame_filename;
