//! `itemsadder` subcommand: generate an ItemsAdder `items.yml` registering
//! every model that has its own textures or geometry.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use pack_models::itemsadder::create_config;
use pack_models::output::emoji;
use pack_models::settings::Settings;

use super::Context;

/// Item flags shared by `itemsadder` and `run`.
#[derive(Args, Debug, Clone, Default)]
pub struct ItemArgs {
    /// Base material of the generated items.
    #[arg(long, value_name = "MATERIAL", env = "PACK_MODELS_MATERIAL")]
    pub material: Option<String>,

    /// Lore added to every item. Separate lines with a literal `\n`.
    #[arg(long, value_name = "TEXT")]
    pub lore: Option<String>,

    /// Display name of the category. Defaults to the namespace.
    #[arg(long, value_name = "NAME")]
    pub category_name: Option<String>,
}

impl ItemArgs {
    pub fn as_settings(&self) -> Settings {
        Settings {
            material: self.material.clone(),
            lore: self.lore.as_deref().map(split_lore),
            category_name: self.category_name.clone(),
            ..Settings::default()
        }
    }
}

/// Split `--lore` text on literal `\n` sequences.
fn split_lore(lore: &str) -> Vec<String> {
    lore.split("\\n").map(str::to_string).collect()
}

/// Generate an ItemsAdder items.yml from the pack's models
#[derive(Args, Debug)]
pub struct ItemsAdderArgs {
    /// Path to the pack's `models` directory.
    #[arg(value_name = "MODELS")]
    pub models: PathBuf,

    /// File or directory to write the config to.
    ///
    /// A directory receives `items.yml`. Defaults to the models directory.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub items: ItemArgs,
}

/// Execute the `itemsadder` command.
pub fn execute(args: ItemsAdderArgs, ctx: &Context) -> Result<()> {
    let settings = ctx.settings.clone().merge(Settings {
        itemsadder_output: args.output.clone(),
        ..args.items.as_settings()
    });
    let output = settings
        .itemsadder_output
        .clone()
        .unwrap_or_else(|| args.models.clone());

    let written = create_config(&args.models, &output, &settings.itemsadder_options())?;
    println!(
        "{} ItemsAdder config written to {}",
        emoji(&ctx.output, "📦", "[OK]"),
        written.display()
    );
    Ok(())
}
