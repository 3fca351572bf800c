//! # CLI Command Implementations
//!
//! This module contains the implementation for each subcommand of the
//! `pack-models` command-line tool. Each subcommand is defined in its own
//! file.
//!
//! ## Structure
//!
//! Each command module typically contains:
//! - An `Args` struct that defines the command-specific arguments and options,
//!   derived using `clap`.
//! - An `execute` function that takes the parsed `Args` and the shared
//!   [`Context`] and calls into the `pack_models` library.

use pack_models::output::OutputConfig;
use pack_models::settings::Settings;

pub mod completions;
pub mod fix_parents;
pub mod itemsadder;
pub mod run;
pub mod tree;

/// State shared by every command: the settings file and output preferences.
#[derive(Debug, Clone)]
pub struct Context {
    pub settings: Settings,
    pub output: OutputConfig,
}
