use clap::{Parser, Subcommand};
use std::path::PathBuf;

use framecut::OverflowMode;

#[derive(Parser)]
#[command(name = "framecut", version, about = "FRAMECUT CLI")]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging
    #[arg(long, global = true, default_value_t = false)]
    pub log: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Slice a sprite sheet into numbered frame files
    Split {
        /// Input sheet image
        #[arg(short, long)]
        input: PathBuf,

        /// Output directory for frame files
        #[arg(short, long)]
        output_dir: PathBuf,

        /// JSON params preset; explicit flags below take precedence
        #[arg(long)]
        params: Option<PathBuf>,

        /// Width of each cropped frame in pixels
        #[arg(long)]
        frame_width: Option<u32>,

        /// Height of each cropped frame in pixels
        #[arg(long)]
        frame_height: Option<u32>,

        /// Horizontal distance between frame origins in pixels
        #[arg(long)]
        stride: Option<u32>,

        /// Number of frames to extract
        #[arg(long)]
        count: Option<u32>,
    },

    /// Reposition numbered frame files onto fixed transparent canvases
    Align {
        /// Input directory of frame files
        #[arg(short, long)]
        input_dir: PathBuf,

        /// Output directory for aligned frames
        #[arg(short, long)]
        output_dir: PathBuf,

        /// JSON params preset; explicit flags below take precedence
        #[arg(long)]
        params: Option<PathBuf>,

        /// Target canvas width in pixels
        #[arg(long)]
        canvas_width: Option<u32>,

        /// Target canvas height in pixels
        #[arg(long)]
        canvas_height: Option<u32>,

        /// Number of frame indices to process
        #[arg(long)]
        count: Option<u32>,

        /// Policy for frames larger than the canvas (clip or fail)
        #[arg(long, value_enum)]
        overflow: Option<OverflowMode>,
    },
}
