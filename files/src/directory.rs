//! Directories
//!
//! A directory maps the components of each child's full name to the child
//! node. Lookups accept any [`Name`], so a name written with a different
//! delimiter still finds the same child, while `["a.b"]` and `["a", "b"]`
//! stay distinct.

use crate::node::{FileError, Node};
use names::Name;
use std::collections::HashMap;

/// A directory node and its children
#[derive(Debug, Clone)]
pub struct Directory {
    node: Node,
    /// Children keyed by the components of their full name
    entries: HashMap<Vec<String>, Node>,
}

impl Directory {
    /// Creates an empty root directory
    pub fn root() -> Self {
        Self::new(Node::root())
    }

    /// Creates an empty directory for `node`
    pub fn new(node: Node) -> Self {
        Self {
            node,
            entries: HashMap::new(),
        }
    }

    /// Returns the directory's own node
    pub fn node(&self) -> &Node {
        &self.node
    }

    /// Builds a node called `base_name` whose parent is this directory
    pub fn child_node(&self, base_name: impl Into<String>) -> Result<Node, FileError> {
        Node::new(base_name, self.node.full_name()?)
    }

    /// Adds a child node
    ///
    /// Returns true if the child was added, false if a child with the same
    /// name already exists. The child's parent must be this directory.
    pub fn add(&mut self, child: Node) -> Result<bool, FileError> {
        let own_name = self.node.full_name()?;
        if !child.parent_name().is_equal(&own_name)? {
            return Err(FileError::IllegalArgument(format!(
                "{} is not a child of {}",
                child.base_name(),
                own_name.as_data_string()?
            )));
        }

        let key = child.full_name()?.components()?;
        if self.entries.contains_key(&key) {
            return Ok(false);
        }
        tracing::debug!(child = ?key, "add child");
        self.entries.insert(key, child);
        Ok(true)
    }

    /// Removes the child with the full name `name`
    ///
    /// Returns the removed node if it existed.
    pub fn remove(&mut self, name: &dyn Name) -> Result<Option<Node>, FileError> {
        let key = name.components()?;
        Ok(self.entries.remove(&key))
    }

    /// Gets the child with the full name `name`
    pub fn get(&self, name: &dyn Name) -> Result<Option<&Node>, FileError> {
        let key = name.components()?;
        Ok(self.entries.get(&key))
    }

    /// Lists all children
    pub fn list(&self) -> Vec<&Node> {
        self.entries.values().collect()
    }

    /// Counts the children
    pub fn count(&self) -> usize {
        self.entries.len()
    }
}
