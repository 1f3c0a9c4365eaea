//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the reelcraft binary.

mod commands;
mod generate;
mod platforms;
mod serve;

pub use commands::{Cli, Commands};
pub use generate::{GenerateOptions, handle_generate};
pub use platforms::handle_platforms;
pub use serve::handle_serve;
