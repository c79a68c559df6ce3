//! Named nodes
//!
//! A node is the common part of files and directories: a base name and the
//! name of the directory it lives in.

use names::{ArrayName, Name, NameError};
use thiserror::Error;

/// Errors raised by nodes, files and directories
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FileError {
    /// The caller passed invalid input or called in the wrong state
    #[error("Illegal argument: {0}")]
    IllegalArgument(String),

    /// A name operation failed
    #[error(transparent)]
    Name(#[from] NameError),
}

/// A node in the name hierarchy
#[derive(Debug, Clone)]
pub struct Node {
    base_name: String,
    parent_name: ArrayName,
}

impl Node {
    /// Creates the root node, which has no base name and no parent
    pub fn root() -> Self {
        Self {
            base_name: String::new(),
            parent_name: ArrayName::new(Vec::<String>::new()),
        }
    }

    /// Creates a node called `base_name` inside the directory `parent_name`
    pub fn new(base_name: impl Into<String>, parent_name: ArrayName) -> Result<Self, FileError> {
        let base_name = base_name.into();
        check_base_name(&base_name)?;
        Ok(Self {
            base_name,
            parent_name,
        })
    }

    /// Returns the base name
    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    /// Returns the name of the containing directory
    pub fn parent_name(&self) -> &ArrayName {
        &self.parent_name
    }

    /// Returns true for the root node
    pub fn is_root(&self) -> bool {
        self.base_name.is_empty()
    }

    /// Returns the full name: the parent's components followed by the base name
    pub fn full_name(&self) -> Result<ArrayName, FileError> {
        let mut name = self.parent_name.clone();
        if !self.is_root() {
            name.append(&self.base_name)?;
        }
        Ok(name)
    }

    /// Changes the base name
    pub fn rename(&mut self, base_name: impl Into<String>) -> Result<(), FileError> {
        if self.is_root() {
            return Err(FileError::IllegalArgument(
                "the root node cannot be renamed".to_string(),
            ));
        }
        let base_name = base_name.into();
        check_base_name(&base_name)?;
        tracing::debug!(from = %self.base_name, to = %base_name, "rename node");
        self.base_name = base_name;
        Ok(())
    }
}

fn check_base_name(base_name: &str) -> Result<(), FileError> {
    if base_name.is_empty() {
        return Err(FileError::IllegalArgument(
            "base name must not be empty".to_string(),
        ));
    }
    Ok(())
}
