//! Files and their states

use crate::node::{FileError, Node};

/// Lifecycle state of a file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileState {
    Open,
    Closed,
    Deleted,
}

/// A file: a node with an open/closed state and no contents
#[derive(Debug, Clone)]
pub struct File {
    node: Node,
    state: FileState,
}

impl File {
    /// Creates a closed file
    pub fn new(node: Node) -> Self {
        Self {
            node,
            state: FileState::Closed,
        }
    }

    /// Returns the file's node
    pub fn node(&self) -> &Node {
        &self.node
    }

    /// Returns the file's node for renaming
    pub fn node_mut(&mut self) -> &mut Node {
        &mut self.node
    }

    /// Returns the current lifecycle state
    pub fn state(&self) -> FileState {
        self.state
    }

    /// Opens the file
    pub fn open(&mut self) -> Result<(), FileError> {
        self.require(self.state != FileState::Open, "file must not be already open")?;
        self.require(self.state != FileState::Deleted, "file must not be deleted")?;
        self.transition(FileState::Open);
        Ok(())
    }

    /// Reads up to `no_bytes`; files hold no data, so this is always empty
    pub fn read(&self, no_bytes: usize) -> Result<Vec<u8>, FileError> {
        self.require(self.state == FileState::Open, "file must be open")?;
        tracing::trace!(file = %self.node.base_name(), no_bytes, "read");
        Ok(Vec::new())
    }

    /// Closes the file
    pub fn close(&mut self) -> Result<(), FileError> {
        self.require(self.state == FileState::Open, "file must be open")?;
        self.transition(FileState::Closed);
        Ok(())
    }

    /// Marks the file deleted; a deleted file can never be opened again
    pub fn delete(&mut self) -> Result<(), FileError> {
        self.require(self.state != FileState::Deleted, "file must not be deleted")?;
        self.transition(FileState::Deleted);
        Ok(())
    }

    fn require(&self, condition: bool, message: &str) -> Result<(), FileError> {
        if condition {
            Ok(())
        } else {
            tracing::warn!(file = %self.node.base_name(), state = ?self.state, "{}", message);
            Err(FileError::IllegalArgument(message.to_string()))
        }
    }

    fn transition(&mut self, to: FileState) {
        tracing::debug!(file = %self.node.base_name(), from = ?self.state, to = ?to, "file state");
        self.state = to;
    }
}
