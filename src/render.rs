//! Text rendering of a resolved model forest.
//!
//! [`Node`] implements `ptree::TreeItem`, so the forest is printed by
//! `ptree` with an explicit configuration rather than whatever the user's
//! ptree config file says:
//!
//! ```text
//! ruby
//! └── ⭐ ruby:block/parent_model
//!     └── 🌐 ruby:block/child_model_1
//!         └── ruby:block/child_model_2
//! ```

use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::info;
use ptree::print_config::{PrintConfig, StyleWhen, ASCII_CHARS_PLUS, UTF_CHARS};
use ptree::{Style, TreeItem};

use crate::defaults;
use crate::error::Result;
use crate::resolver::Node;

impl TreeItem for Node {
    type Child = Node;

    fn write_self<W: io::Write>(&self, f: &mut W, _style: &Style) -> io::Result<()> {
        write!(f, "{}", self.label)
    }

    fn children(&self) -> Cow<'_, [Self::Child]> {
        Cow::Borrowed(&self.children)
    }
}

/// Connector characters used for the tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TreeStyle {
    /// Box-drawing connectors.
    #[default]
    Unicode,
    /// Plain ASCII connectors, for terminals without Unicode.
    Ascii,
}

impl TreeStyle {
    fn print_config(self) -> PrintConfig {
        PrintConfig {
            depth: u32::MAX,
            indent: 4,
            padding: 1,
            styled: StyleWhen::Never,
            characters: match self {
                TreeStyle::Unicode => UTF_CHARS.into(),
                TreeStyle::Ascii => ASCII_CHARS_PLUS.into(),
            },
            ..PrintConfig::default()
        }
    }
}

/// Render `root` and its descendants, one node per line.
pub fn render_tree(root: &Node, style: TreeStyle) -> Result<String> {
    let mut buffer = Vec::new();
    ptree::write_tree_with(root, &mut buffer, &style.print_config())?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Where the tree file goes: `output` itself, or `model_tree.txt` inside it
/// when `output` is a directory.
pub fn tree_file_path(output: &Path) -> PathBuf {
    if output.is_dir() {
        output.join(defaults::TREE_FILE_NAME)
    } else {
        output.to_path_buf()
    }
}

/// Render `root` into a file and return the file written.
pub fn write_tree_file(root: &Node, output: &Path, style: TreeStyle) -> Result<PathBuf> {
    let path = tree_file_path(output);
    fs::write(&path, render_tree(root, style)?)?;
    info!("Dependency tree file saved as \"{}\"", path.display());
    Ok(path)
}
