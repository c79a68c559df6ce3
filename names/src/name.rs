//! The public name contract
//!
//! [`Name`] is the only interface callers use. Concrete types supply a
//! small set of unchecked primitives through a sealed `Representation`
//! trait; every public operation is implemented once here, wrapped in
//! invariant checks on entry and exit, preconditions before any state is
//! touched and postconditions after the edit.

use crate::codec;
use crate::contract::{
    check_index, check_insert_index, invariant, postcondition, NameResult,
};
use crate::{DEFAULT_DELIMITER, ESCAPE_CHARACTER};
use std::fmt;

pub(crate) use private::Representation;

mod private {
    use super::Name;
    use crate::contract::NameResult;

    /// Unchecked primitives a concrete name supplies
    ///
    /// Indices passed in are already validated. Edits may still refuse
    /// input the representation cannot hold, but must do so before
    /// mutating anything.
    pub trait Representation {
        fn delimiter(&self) -> char;

        fn raw_no_components(&self) -> usize;

        fn raw_component(&self, i: usize) -> String;

        fn raw_set_component(&mut self, i: usize, c: &str) -> NameResult<()>;

        fn raw_insert(&mut self, i: usize, c: &str) -> NameResult<()>;

        fn raw_append(&mut self, c: &str) -> NameResult<()> {
            let end = self.raw_no_components();
            self.raw_insert(end, c)
        }

        fn raw_remove(&mut self, i: usize) -> NameResult<()>;

        fn raw_components(&self) -> Vec<String> {
            (0..self.raw_no_components())
                .map(|i| self.raw_component(i))
                .collect()
        }

        /// Representation-specific part of the class invariant
        fn check_representation(&self) -> NameResult<()> {
            Ok(())
        }

        fn boxed_clone(&self) -> Box<dyn Name>;
    }
}

/// A hierarchical name
///
/// An ordered sequence of components joined by a single delimiter. All
/// operations check the class invariant before and after they run and
/// report contract violations as [`NameError`](crate::NameError).
///
/// Equality is over component values only; two names with different
/// delimiters but the same components are equal. The hash code is taken
/// from the canonical data string, so equal names hash equal.
pub trait Name: Representation + fmt::Debug {
    /// Checks the class invariant
    fn check_invariants(&self) -> NameResult<()> {
        let delimiter = self.delimiter();
        invariant(delimiter != ESCAPE_CHARACTER, || {
            format!("delimiter {delimiter:?} collides with the escape character")
        })?;
        self.check_representation()
    }

    /// Returns the number of components
    fn no_components(&self) -> NameResult<usize> {
        self.check_invariants()?;
        let result = self.raw_no_components();
        self.check_invariants()?;
        Ok(result)
    }

    /// Returns the component at `i`
    fn component(&self, i: usize) -> NameResult<String> {
        self.check_invariants()?;
        check_index(i, self.raw_no_components())?;

        let result = self.raw_component(i);

        self.check_invariants()?;
        Ok(result)
    }

    /// Returns all components in order
    fn components(&self) -> NameResult<Vec<String>> {
        self.check_invariants()?;
        let result = self.raw_components();
        self.check_invariants()?;
        Ok(result)
    }

    /// Replaces the component at `i`
    fn set_component(&mut self, i: usize, c: &str) -> NameResult<()> {
        self.check_invariants()?;
        let before = self.raw_no_components();
        check_index(i, before)?;

        self.raw_set_component(i, c)?;
        tracing::trace!(index = i, component = c, "set component");

        postcondition(self.raw_no_components() == before, || {
            "set_component changed the number of components".to_string()
        })?;
        postcondition(self.raw_component(i) == c, || {
            format!("component {i} was not set to {c:?}")
        })?;
        self.check_invariants()
    }

    /// Inserts `c` before the component at `i`
    ///
    /// `i` may equal the number of components, which appends.
    fn insert(&mut self, i: usize, c: &str) -> NameResult<()> {
        self.check_invariants()?;
        let before = self.raw_no_components();
        check_insert_index(i, before)?;

        self.raw_insert(i, c)?;
        tracing::trace!(index = i, component = c, "insert component");

        postcondition(self.raw_no_components() == before + 1, || {
            "insert must add exactly one component".to_string()
        })?;
        postcondition(self.raw_component(i) == c, || {
            format!("component {i} was not inserted as {c:?}")
        })?;
        self.check_invariants()
    }

    /// Appends `c` as the last component
    fn append(&mut self, c: &str) -> NameResult<()> {
        self.check_invariants()?;
        let before = self.raw_no_components();

        self.raw_append(c)?;
        tracing::trace!(component = c, "append component");

        postcondition(self.raw_no_components() == before + 1, || {
            "append must add exactly one component".to_string()
        })?;
        postcondition(self.raw_component(before) == c, || {
            format!("last component was not appended as {c:?}")
        })?;
        self.check_invariants()
    }

    /// Removes the component at `i`
    fn remove(&mut self, i: usize) -> NameResult<()> {
        self.check_invariants()?;
        let before = self.raw_no_components();
        check_index(i, before)?;

        self.raw_remove(i)?;
        tracing::trace!(index = i, "remove component");

        postcondition(self.raw_no_components() + 1 == before, || {
            "remove must drop exactly one component".to_string()
        })?;
        self.check_invariants()
    }

    /// Appends every component of `other`, in order
    fn concat(&mut self, other: &dyn Name) -> NameResult<()> {
        self.check_invariants()?;
        let before = self.raw_no_components();
        let added = other.components()?;

        for component in &added {
            self.append(component)?;
        }

        postcondition(self.raw_no_components() == before + added.len(), || {
            "concat must add every component of the other name".to_string()
        })?;
        self.check_invariants()
    }

    /// Joins the components with `delimiter`, or this name's own delimiter
    ///
    /// Components are not re-escaped.
    fn as_string(&self, delimiter: Option<char>) -> NameResult<String> {
        self.check_invariants()?;
        let delimiter = delimiter.unwrap_or_else(|| self.delimiter());
        let result = codec::join(&self.raw_components(), delimiter);
        self.check_invariants()?;
        Ok(result)
    }

    /// Joins the components with [`DEFAULT_DELIMITER`]
    ///
    /// This is the canonical exchange form: equal names produce identical
    /// data strings whatever their configured delimiter.
    fn as_data_string(&self) -> NameResult<String> {
        self.check_invariants()?;
        let result = codec::join(&self.raw_components(), DEFAULT_DELIMITER);
        self.check_invariants()?;
        Ok(result)
    }

    /// Compares component values, ignoring the delimiter
    fn is_equal(&self, other: &dyn Name) -> NameResult<bool> {
        self.check_invariants()?;
        let result = self.raw_components() == other.components()?;
        self.check_invariants()?;
        Ok(result)
    }

    /// Hashes the canonical data string
    fn hash_code(&self) -> NameResult<i32> {
        self.check_invariants()?;
        let data = codec::join(&self.raw_components(), DEFAULT_DELIMITER);
        let result = data.encode_utf16().fold(0i32, |hash, unit| {
            hash.wrapping_shl(5)
                .wrapping_sub(hash)
                .wrapping_add(i32::from(unit))
        });
        self.check_invariants()?;
        Ok(result)
    }

    /// Returns true if there are no components
    fn is_empty(&self) -> NameResult<bool> {
        self.check_invariants()?;
        let result = self.raw_no_components() == 0;
        self.check_invariants()?;
        Ok(result)
    }

    /// Returns the delimiter fixed at construction
    fn delimiter_character(&self) -> NameResult<char> {
        self.check_invariants()?;
        let result = self.delimiter();
        self.check_invariants()?;
        Ok(result)
    }

    /// Returns an independent copy
    fn clone_name(&self) -> NameResult<Box<dyn Name>> {
        self.check_invariants()?;
        let result = self.boxed_clone();
        result.check_invariants()?;
        self.check_invariants()?;
        Ok(result)
    }
}

impl<T: Representation + fmt::Debug> Name for T {}
