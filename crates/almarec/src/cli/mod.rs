//! # CLI Behavior
//!
//! The only place that knows about terminal I/O, exit codes, and output
//! formatting. Diagnostics go to stderr through `flexi_logger`; results go
//! to stdout.
//!
//! ## Module Structure
//!
//! - `setup`: Argument parsing via clap
//! - `commands`: Config loading, logger setup, and per-command handlers
//! - `render`: Output formatting

mod commands;
mod render;
pub mod setup;

pub use commands::run;
