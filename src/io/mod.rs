//! I/O layer for reading sprite sheets and numbered frame files.
//! Provides the `sheet` reader and `frames` helpers for loading and
//! persisting `frame_NNN.png` outputs.
pub mod sheet;
pub use sheet::{SheetError, SheetReader};

pub mod frames;
pub use frames::{FrameLoad, frame_filename, load_frame, save_frame};
