//! Model inheritance resolution.
//!
//! ## Overview
//!
//! Model files name their parent by qualified name, but the order in which
//! they are discovered on disk says nothing about dependency order: a child
//! is routinely found before its parent. [`resolve`] builds the inheritance
//! forest anyway by working through a queue of pending records:
//!
//! 1. Records are popped from the back of the queue.
//! 2. A record with no parent attaches under the synthetic namespace root.
//! 3. A record whose parent is already attached goes under that parent.
//! 4. Anything else is pushed to the front of the queue and retried once
//!    every other pending record has had its turn.
//!
//! A counter tracks consecutive deferrals. Once it exceeds the number of
//! records still queued, a whole pass over the queue has attached nothing
//! and no later pass can either, so resolution fails with [`Unresolvable`].
//! The remaining records either name a parent that does not exist or form a
//! cycle; [`diagnose`] tells the two apart when the caller needs to.

use std::collections::{HashMap, VecDeque};

use log::{debug, trace};
use thiserror::Error;

pub mod diagnose;

pub use diagnose::{diagnose, Cause, Diagnosis};

/// A model as seen by the resolver: its identity, its parent reference and
/// the two flags used to decorate its label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Unique `namespace:path/name` identifier.
    pub qualified_name: String,
    /// Qualified name of the parent model, `None` for roots.
    pub parent: Option<String>,
    /// The model declares a `display` section.
    pub has_display_info: bool,
    /// The model declares `elements`.
    pub has_geometry_info: bool,
}

impl Record {
    pub fn new(qualified_name: impl Into<String>, parent: Option<String>) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            parent,
            has_display_info: false,
            has_geometry_info: false,
        }
    }

    /// A record without a parent.
    pub fn root(qualified_name: impl Into<String>) -> Self {
        Self::new(qualified_name, None)
    }

    /// A record inheriting from `parent`.
    pub fn child(qualified_name: impl Into<String>, parent: impl Into<String>) -> Self {
        Self::new(qualified_name, Some(parent.into()))
    }

    pub fn with_display(mut self) -> Self {
        self.has_display_info = true;
        self
    }

    pub fn with_geometry(mut self) -> Self {
        self.has_geometry_info = true;
        self
    }
}

/// A node of the resolved inheritance forest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Qualified name, prefixed by any markers that apply.
    pub label: String,
    /// Models inheriting from this one, in resolution order.
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            children: Vec::new(),
        }
    }

    pub fn add_child(&mut self, child: Node) {
        self.children.push(child);
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn size(&self) -> usize {
        1 + self.children.iter().map(Node::size).sum::<usize>()
    }

    /// Depth-first search for the node carrying `label`.
    pub fn find(&self, label: &str) -> Option<&Node> {
        if self.label == label {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(label))
    }

    /// Copy of this subtree with every child list sorted by label.
    ///
    /// Child order reflects resolution order, which depends on input order.
    /// Two forests describe the same inheritance when their canonical forms
    /// are equal.
    pub fn canonical(&self) -> Node {
        let mut children: Vec<Node> = self.children.iter().map(Node::canonical).collect();
        children.sort_by(|a, b| a.label.cmp(&b.label));
        Node {
            label: self.label.clone(),
            children,
        }
    }
}

/// Optional label prefixes for models carrying display or geometry data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Markers {
    /// Prefix for models with a `display` section.
    pub display: Option<String>,
    /// Prefix for models with `elements`.
    pub geometry: Option<String>,
}

impl Markers {
    pub fn new(display: Option<String>, geometry: Option<String>) -> Self {
        Self { display, geometry }
    }

    /// Build the node label for `record`. The geometry marker ends up
    /// outermost when both apply.
    pub fn decorate(&self, record: &Record) -> String {
        let mut label = record.qualified_name.clone();
        if let Some(mark) = self.display.as_deref().filter(|m| !m.is_empty()) {
            if record.has_display_info {
                label = format!("{} {}", mark, label);
            }
        }
        if let Some(mark) = self.geometry.as_deref().filter(|m| !m.is_empty()) {
            if record.has_geometry_info {
                label = format!("{} {}", mark, label);
            }
        }
        label
    }
}

/// Resolution stalled: a full pass over the queue attached nothing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{unresolved} records could not be attached ({queued} still queued); check for missing or cyclic parent references")]
pub struct Unresolvable {
    /// Records without a node when the stall was detected.
    pub unresolved: usize,
    /// Queue length when the stall was detected.
    pub queued: usize,
    /// Qualified names of the queued records, sorted.
    pub pending: Vec<String>,
}

const ROOT: usize = 0;

/// Arena entry used while the forest is under construction.
struct Slot {
    label: String,
    children: Vec<usize>,
}

/// Resolve `records` into a forest under a root labelled `namespace`.
///
/// Input order does not matter for the shape of the result, only for the
/// order of siblings. Fails with [`Unresolvable`] when some records can never
/// be attached; no partial forest is returned in that case.
pub fn resolve(
    namespace: &str,
    records: &[Record],
    markers: &Markers,
) -> Result<Node, Unresolvable> {
    let mut arena = vec![Slot {
        label: namespace.to_string(),
        children: Vec::new(),
    }];
    let mut attached: HashMap<&str, usize> = HashMap::with_capacity(records.len());
    let mut queue: VecDeque<&Record> = records.iter().collect();
    let mut stalled = 0usize;

    while let Some(record) = queue.pop_back() {
        let parent_slot = match record.parent.as_deref() {
            None => Some(ROOT),
            Some(parent) => attached.get(parent).copied(),
        };

        match parent_slot {
            Some(parent_slot) => {
                let slot = arena.len();
                arena.push(Slot {
                    label: markers.decorate(record),
                    children: Vec::new(),
                });
                arena[parent_slot].children.push(slot);
                attached.insert(record.qualified_name.as_str(), slot);
                stalled = 0;
            }
            None => {
                trace!(
                    "Deferring {} until {} is attached",
                    record.qualified_name,
                    record.parent.as_deref().unwrap_or_default()
                );
                queue.push_front(record);
                stalled += 1;
            }
        }

        if stalled > queue.len() {
            let mut pending: Vec<String> = queue
                .iter()
                .map(|record| record.qualified_name.clone())
                .collect();
            pending.sort();
            debug!(
                "Resolution stalled after {} deferrals with {} records queued",
                stalled,
                queue.len()
            );
            return Err(Unresolvable {
                unresolved: records.len() - (arena.len() - 1),
                queued: queue.len(),
                pending,
            });
        }
    }

    debug!("Resolved {} records under {}", records.len(), namespace);
    Ok(build_node(&mut arena, ROOT))
}

fn build_node(arena: &mut [Slot], slot: usize) -> Node {
    let label = std::mem::take(&mut arena[slot].label);
    let child_slots = std::mem::take(&mut arena[slot].children);
    let children = child_slots
        .into_iter()
        .map(|child| build_node(arena, child))
        .collect();
    Node { label, children }
}
