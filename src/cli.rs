//! CLI argument parsing and command dispatch

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};

use pack_models::output::OutputConfig;
use pack_models::settings;

use crate::commands::{self, Context};

/// Pack Models - Resolve resource pack model inheritance
#[derive(Parser, Debug)]
#[command(name = "pack-models")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Colorize output (always, never, auto)
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", default_value = "info")]
    log_level: String,

    /// Path to a settings file.
    ///
    /// Defaults to `.pack-models.yaml` in the current directory when present.
    #[arg(long, global = true, value_name = "FILE", env = "PACK_MODELS_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Rewrite `./name` parent references into qualified names
    FixParents(commands::fix_parents::FixParentsArgs),

    /// Generate an ItemsAdder items.yml from the pack's models
    Itemsadder(commands::itemsadder::ItemsAdderArgs),

    /// Write the model inheritance tree
    Tree(commands::tree::TreeArgs),

    /// Fix parents, generate the ItemsAdder config and write the tree
    Run(commands::run::RunArgs),

    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        init_logging(&self.log_level);

        let Cli {
            command,
            color,
            config,
            ..
        } = self;
        let context = || -> Result<Context> {
            let cwd = std::env::current_dir().context("Failed to get current directory")?;
            Ok(Context {
                settings: settings::load(config.as_deref(), &cwd)?,
                output: OutputConfig::from_env_and_flag(&color),
            })
        };

        match command {
            Commands::FixParents(args) => commands::fix_parents::execute(args, &context()?),
            Commands::Itemsadder(args) => commands::itemsadder::execute(args, &context()?),
            Commands::Tree(args) => commands::tree::execute(args, &context()?),
            Commands::Run(args) => commands::run::execute(args, &context()?),
            Commands::Completions(args) => commands::completions::execute(args),
        }
    }
}

/// Install `env_logger` at `level`. `RUST_LOG`, when set, adds to it.
fn init_logging(level: &str) {
    let mut builder = env_logger::Builder::new();
    builder
        .parse_filters(level)
        .format(|buf, record| writeln!(buf, "{:<8} {}", record.level(), record.args()));
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    // Ignore a second initialisation; only one logger can be installed
    let _ = builder.try_init();
}
