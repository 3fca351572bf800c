//! Shared test utilities for CLI end-to-end tests.
//!
//! ## Usage
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let pack = PackFixture::new().with_model("item/gem.json", models::TEXTURED);
//!     pack.command().arg("tree").arg(pack.models()).assert().success();
//! }
//! ```

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use assert_fs::prelude::*;
use std::path::{Path, PathBuf};

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use assert_fs::prelude::*;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::models;
    pub use super::PackFixture;
}

/// Common model file contents.
#[allow(dead_code)]
pub mod models {
    /// A model with textures and no parent.
    pub const TEXTURED: &str = r#"{"textures": {"layer0": "ruby:item/gem"}}"#;

    /// A model with geometry and no parent.
    pub const GEOMETRY: &str = r#"{"elements": [{"from": [0, 0, 0], "to": [16, 16, 16]}]}"#;

    /// A model with a display section and no parent.
    pub const DISPLAY: &str = r#"{"display": {"gui": {"rotation": [30, 225, 0]}}}"#;

    /// A model inheriting from `parent`.
    pub fn child_of(parent: &str) -> String {
        format!(r#"{{"parent": "{}"}}"#, parent)
    }
}

/// A temporary resource pack laid out as `assets/ruby/models/`.
pub struct PackFixture {
    temp_dir: assert_fs::TempDir,
}

#[allow(dead_code)]
impl PackFixture {
    /// Namespace every fixture pack uses.
    pub const NAMESPACE: &'static str = "ruby";

    pub fn new() -> Self {
        let temp_dir = assert_fs::TempDir::new().expect("Failed to create temp directory");
        temp_dir
            .child("assets/ruby/models")
            .create_dir_all()
            .expect("Failed to create models directory");
        Self { temp_dir }
    }

    /// Add a model file at `rel`, relative to `models/`.
    pub fn with_model(self, rel: &str, content: &str) -> Self {
        self.temp_dir
            .child(format!("assets/ruby/models/{}", rel))
            .write_str(content)
            .expect("Failed to write model file");
        self
    }

    /// Add a settings file at the root of the temp directory.
    pub fn with_settings(self, content: &str) -> Self {
        self.temp_dir
            .child(".pack-models.yaml")
            .write_str(content)
            .expect("Failed to write settings file");
        self
    }

    /// Root of the temp directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// The pack's `models` directory.
    pub fn models(&self) -> PathBuf {
        self.temp_dir.path().join("assets/ruby/models")
    }

    pub fn child(&self, path: &str) -> assert_fs::fixture::ChildPath {
        self.temp_dir.child(path)
    }

    /// A `pack-models` command run from the temp directory with colors off.
    pub fn command(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("pack-models");
        cmd.current_dir(self.path())
            .env_remove("RUST_LOG")
            .env_remove("PACK_MODELS_CONFIG")
            .arg("--color=never");
        cmd
    }
}

impl Default for PackFixture {
    fn default() -> Self {
        Self::new()
    }
}
