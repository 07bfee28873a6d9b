//! # CLI Layer
//!
//! One possible client of the library. This is the only place that:
//! - Parses arguments (clap, `setup.rs`)
//! - Locates and reads configuration and item files
//! - Writes to stdout/stderr and installs the log subscriber
//!
//! Rendering stays in the library; the CLI prints completed templates as-is.

mod commands;
mod setup;

pub use commands::run;
