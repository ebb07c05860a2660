use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::info;

use framecut::api::{align_frames_to_dir, split_sheet_to_dir};
use framecut::{AlignParams, SplitParams};

use super::args::{CliArgs, Command};
use super::errors::AppError;

fn load_params<P: DeserializeOwned + Default>(path: Option<&Path>) -> Result<P, AppError> {
    let Some(path) = path else {
        return Ok(P::default());
    };
    let text = fs::read_to_string(path).map_err(|source| AppError::ParamsRead {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| AppError::ParamsParse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    let level = if args.log {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    match args.command {
        Command::Split {
            input,
            output_dir,
            params,
            frame_width,
            frame_height,
            stride,
            count,
        } => {
            let mut split: SplitParams = load_params(params.as_deref())?;
            if let Some(v) = frame_width {
                split.frame_width = v;
            }
            if let Some(v) = frame_height {
                split.frame_height = v;
            }
            if let Some(v) = stride {
                split.stride = v;
            }
            if let Some(v) = count {
                split.count = v;
            }

            info!("Splitting sheet {:?} into {:?}", input, output_dir);
            let written = split_sheet_to_dir(&input, &output_dir, &split)?;
            info!("Successfully split: {:?} -> {} frames\n", input, written);
        }
        Command::Align {
            input_dir,
            output_dir,
            params,
            canvas_width,
            canvas_height,
            count,
            overflow,
        } => {
            let mut align: AlignParams = load_params(params.as_deref())?;
            if let Some(v) = canvas_width {
                align.canvas_width = v;
            }
            if let Some(v) = canvas_height {
                align.canvas_height = v;
            }
            if let Some(v) = count {
                align.count = v;
            }
            if let Some(v) = overflow {
                align.overflow = v;
            }

            info!("Aligning frames from {:?} into {:?}", input_dir, output_dir);
            let report = align_frames_to_dir(&input_dir, &output_dir, &align)?;

            info!("Alignment complete!");
            info!("Processed: {}", report.processed);
            info!("Skipped: {}", report.skipped);
            info!("Errors: {}", report.errors);
        }
    }

    Ok(())
}
