//! Core processing building blocks: crop-grid arithmetic, canvas compose,
//! and typed parameter sets. These are internal primitives consumed by the
//! high-level `api` module.
pub mod params;
pub mod processing;
