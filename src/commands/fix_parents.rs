//! `fix-parents` subcommand: rewrite `./name` parent references in place.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use pack_models::output::emoji;
use pack_models::parents::fix_parents;

use super::Context;

/// Rewrite `./name` parent references into qualified names
#[derive(Args, Debug)]
pub struct FixParentsArgs {
    /// Path to the pack's `models` directory.
    #[arg(value_name = "MODELS")]
    pub models: PathBuf,

    /// Report what would be rewritten without touching any file
    #[arg(short = 'n', long)]
    pub dry_run: bool,
}

pub fn execute(args: FixParentsArgs, ctx: &Context) -> Result<()> {
    let report = fix_parents(&args.models, args.dry_run)?;
    let verb = if args.dry_run { "would be fixed" } else { "fixed" };
    println!(
        "{} {} models processed, {} parent paths {}",
        emoji(&ctx.output, "🔧", "[FIX]"),
        report.processed,
        report.fixed,
        verb
    );
    Ok(())
}
