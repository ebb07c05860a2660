//! Command Line Interface (CLI) layer for FRAMECUT.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) for the split and align flows.
//! It wires user-provided options to the underlying library functionality
//! exposed via `framecut::api`.
//!
//! If you are embedding FRAMECUT into another application, prefer using
//! the high-level `framecut::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
