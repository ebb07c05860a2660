//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O, image-codec, and sheet reader errors, and provides
//! semantic variants for parameter validation and compose failures.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Sheet reader error: {0}")]
    Sheet(#[from] crate::io::SheetError),

    #[error("Invalid parameter: {param} must be greater than 0")]
    ZeroParam { param: &'static str },

    #[error("Frame index {index} out of range [0, {count})")]
    IndexOutOfRange { index: u32, count: u32 },

    #[error(
        "Frame {index} is {width}x{height}, larger than the {canvas_width}x{canvas_height} canvas"
    )]
    FrameTooLarge {
        index: u32,
        width: u32,
        height: u32,
        canvas_width: u32,
        canvas_height: u32,
    },
}
