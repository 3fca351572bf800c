//! # Tree Command Implementation
//!
//! This module implements the `tree` subcommand, which resolves the parent
//! references of every model in a pack and writes the resulting inheritance
//! tree as text.
//!
//! ## Functionality
//!
//! - **Order-independent resolution**: children may be discovered before their
//!   parents.
//! - **Markers**: models with a `display` section or with `elements` are
//!   prefixed with configurable markers.
//! - **Diagnostics**: when some models cannot be attached, every one of them
//!   is reported as missing its parent, on a cycle, or blocked by an ancestor,
//!   and no tree file is written.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;
use log::error;

use pack_models::error::Error;
use pack_models::output::emoji;
use pack_models::render::{render_tree, write_tree_file, TreeStyle};
use pack_models::resolver::{diagnose, resolve, Markers, Node};
use pack_models::settings::Settings;
use pack_models::source::{PackSource, RecordSource};

use super::Context;

/// Marker flags shared by `tree` and `run`.
#[derive(Args, Debug, Clone, Default)]
pub struct MarkArgs {
    /// Marker placed before models that define a `display` section.
    ///
    /// Pass an empty string to disable it.
    #[arg(long, value_name = "MARK", env = "PACK_MODELS_DISPLAY_MARK")]
    pub display_mark: Option<String>,

    /// Marker placed before models that define `elements`.
    ///
    /// Pass an empty string to disable it.
    #[arg(long, value_name = "MARK", env = "PACK_MODELS_ELEMENTS_MARK")]
    pub elements_mark: Option<String>,
}

impl MarkArgs {
    pub fn as_settings(&self) -> Settings {
        Settings {
            display_mark: self.display_mark.clone(),
            elements_mark: self.elements_mark.clone(),
            ..Settings::default()
        }
    }
}

/// Write the model inheritance tree
#[derive(Args, Debug)]
pub struct TreeArgs {
    /// Path to the pack's `models` directory.
    #[arg(value_name = "MODELS")]
    pub models: PathBuf,

    /// File or directory to write the tree to.
    ///
    /// A directory receives `model_tree.txt`. Defaults to the models
    /// directory.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Print the tree to stdout instead of writing a file.
    #[arg(long, conflicts_with = "output")]
    pub stdout: bool,

    #[command(flatten)]
    pub marks: MarkArgs,
}

/// Execute the `tree` command.
pub fn execute(args: TreeArgs, ctx: &Context) -> Result<()> {
    let settings = ctx.settings.clone().merge(Settings {
        tree_output: args.output.clone(),
        ..args.marks.as_settings()
    });
    let tree = resolve_pack(&args.models, &settings.markers())?;

    if args.stdout {
        print!("{}", render_tree(&tree, ctx.output.tree_style())?);
        return Ok(());
    }

    let output = settings.tree_output.unwrap_or(args.models);
    let written = write_tree_file(&tree, &output, TreeStyle::Unicode)?;
    println!(
        "{} Dependency tree written to {}",
        emoji(&ctx.output, "🌳", "[TREE]"),
        written.display()
    );
    Ok(())
}

/// Resolve every model under `models`, logging a diagnosis for each model
/// that cannot be attached.
pub fn resolve_pack(models: &Path, markers: &Markers) -> Result<Node> {
    let source = PackSource::new(models);
    let namespace = source.namespace()?;
    let records = source.records()?;

    resolve(&namespace, &records, markers).map_err(|err| {
        for diagnosis in diagnose(&records, &err.pending) {
            error!("{}", diagnosis);
        }
        anyhow::Error::from(Error::from(err))
    })
}
