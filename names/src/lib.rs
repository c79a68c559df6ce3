//! # Names
//!
//! This crate provides hierarchical names: ordered sequences of string
//! components joined by a single delimiter character.
//!
//! ## Philosophy
//!
//! - **Contracts are checked, not assumed**: Every public operation checks
//!   its preconditions, its postconditions and the class invariant
//! - **Representation is a detail**: Callers program against [`Name`], never
//!   against the fields of a concrete type
//! - **Canonical form for exchange**: [`Name::as_data_string`] is identical
//!   for equal names regardless of their display delimiter
//!
//! ## Key Types
//!
//! - [`Name`]: The public, contract-checked capability set
//! - [`StringName`]: Stores the whole name as one escaped string
//! - [`ArrayName`]: Stores the components directly
//! - [`NameError`]: Caller errors, implementation defects and state corruption
//!
//! ## Escaping
//!
//! Inside a delimited string, [`ESCAPE_CHARACTER`] marks the following
//! character as literal. Escape pairs are kept verbatim inside components;
//! see [`codec`] for the exact tokenizing rules.

pub mod array_name;
pub mod codec;
pub mod contract;
pub mod name;
pub mod string_name;

pub use array_name::ArrayName;
pub use contract::{parse_delimiter, NameError, NameResult};
pub use name::Name;
pub use string_name::StringName;

/// Delimiter used when none is given, and by the canonical data string
pub const DEFAULT_DELIMITER: char = '.';

/// Marks the next character of a delimited string as literal
pub const ESCAPE_CHARACTER: char = '\\';
