//! # Files
//!
//! This crate provides the nodes that hold hierarchical names: directories
//! and files.
//!
//! ## Philosophy
//!
//! - **Names are values, not paths**: A node owns its names and talks to
//!   them only through the [`Name`](names::Name) contract
//! - **No I/O**: Files track an open/closed state; reading returns no data
//! - **Canonical keys**: Directories key children by the canonical data
//!   string of their full name, so display delimiters never matter
//!
//! ## Design
//!
//! - A [`Node`] is a base name plus the name of its parent directory
//! - A [`Directory`] maps canonical names to child nodes
//! - A [`File`] is a node with a [`FileState`]

pub mod directory;
pub mod file;
pub mod node;

pub use directory::Directory;
pub use file::{File, FileState};
pub use node::{FileError, Node};
