//! Run command implementation
//!
//! The run command executes the whole pipeline on a pack, in order:
//! 1. Rewrite relative parent references
//! 2. Generate the ItemsAdder config
//! 3. Resolve and write the model tree
//!
//! Every output defaults to the models directory.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::Args;

use pack_models::itemsadder::create_config;
use pack_models::output::emoji;
use pack_models::parents::fix_parents;
use pack_models::render::{write_tree_file, TreeStyle};
use pack_models::settings::Settings;

use super::itemsadder::ItemArgs;
use super::tree::{resolve_pack, MarkArgs};
use super::Context;

/// Arguments for the run command
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Path to the pack's `models` directory.
    #[arg(value_name = "MODELS")]
    pub models: PathBuf,

    /// File or directory for the ItemsAdder config
    #[arg(long, value_name = "PATH")]
    pub itemsadder_output: Option<PathBuf>,

    /// File or directory for the model tree
    #[arg(long, value_name = "PATH")]
    pub tree_output: Option<PathBuf>,

    #[command(flatten)]
    pub items: ItemArgs,

    #[command(flatten)]
    pub marks: MarkArgs,
}

/// Execute the run command
pub fn execute(args: RunArgs, ctx: &Context) -> Result<()> {
    let start_time = Instant::now();
    let overrides = Settings {
        itemsadder_output: args.itemsadder_output.clone(),
        tree_output: args.tree_output.clone(),
        ..args.items.as_settings().merge(args.marks.as_settings())
    };
    let settings = ctx.settings.clone().merge(overrides);

    let report = fix_parents(&args.models, false)?;
    println!(
        "{} {} models processed, {} parent paths fixed",
        emoji(&ctx.output, "🔧", "[FIX]"),
        report.processed,
        report.fixed
    );

    let items_output = settings
        .itemsadder_output
        .clone()
        .unwrap_or_else(|| args.models.clone());
    let items_file = create_config(&args.models, &items_output, &settings.itemsadder_options())?;
    println!(
        "{} ItemsAdder config written to {}",
        emoji(&ctx.output, "📦", "[OK]"),
        items_file.display()
    );

    let tree = resolve_pack(&args.models, &settings.markers())?;
    let tree_output = settings
        .tree_output
        .clone()
        .unwrap_or_else(|| args.models.clone());
    let tree_file = write_tree_file(&tree, &tree_output, TreeStyle::Unicode)?;
    println!(
        "{} Dependency tree written to {}",
        emoji(&ctx.output, "🌳", "[TREE]"),
        tree_file.display()
    );

    println!(
        "{} Done in {:.2?}",
        emoji(&ctx.output, "✅", "[DONE]"),
        start_time.elapsed()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pack_models::output::OutputConfig;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_execute_full_pipeline() {
        let temp = TempDir::new().unwrap();
        let models = temp.path().join("assets").join("ruby").join("models");
        fs::create_dir_all(models.join("item/tools")).unwrap();
        fs::write(models.join("item/handle.json"), r#"{"textures": {}}"#).unwrap();
        fs::write(
            models.join("item/tools/sword.json"),
            r#"{"parent": "./handle", "elements": []}"#,
        )
        .unwrap();

        let ctx = Context {
            settings: Settings::default(),
            output: OutputConfig::from_env_and_flag("never"),
        };
        let args = RunArgs {
            models: models.clone(),
            itemsadder_output: None,
            tree_output: None,
            items: ItemArgs::default(),
            marks: MarkArgs::default(),
        };

        execute(args, &ctx).unwrap();

        let yaml = fs::read_to_string(models.join("items.yml")).unwrap();
        assert!(yaml.contains("model_path: item/tools/sword"));
        let tree = fs::read_to_string(models.join("model_tree.txt")).unwrap();
        assert!(tree.contains("ruby:item/handle"));
        assert!(tree.contains("🌐 ruby:item/tools/sword"));
    }
}
