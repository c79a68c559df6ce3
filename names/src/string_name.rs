//! String-backed names
//!
//! A [`StringName`] keeps the whole name as one escaped, delimited string
//! plus a cached component count. Component access re-tokenizes the
//! string; edits tokenize, change the sequence and join it again.

use crate::codec;
use crate::contract::{check_delimiter, invariant, parse_delimiter, precondition, NameResult};
use crate::name::{Name, Representation};
use crate::DEFAULT_DELIMITER;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A name stored as a single delimited string
///
/// Components keep their escape pairs verbatim, so `a\.b.c` holds the two
/// components `a\.b` and `c`.
///
/// # Examples
///
/// ```
/// use names::{Name, StringName};
///
/// let mut name = StringName::new("docs.notes");
/// name.append("todo").unwrap();
/// assert_eq!(name.no_components().unwrap(), 3);
/// assert_eq!(name.as_string(Some('/')).unwrap(), "docs/notes/todo");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "StringNameRecord", into = "StringNameRecord")]
pub struct StringName {
    delimiter: char,
    name: String,
    no_components: usize,
}

impl StringName {
    /// Creates a name from a delimited string using [`DEFAULT_DELIMITER`]
    pub fn new(source: impl Into<String>) -> Self {
        let name = source.into();
        let no_components = codec::count(&name, DEFAULT_DELIMITER);
        Self {
            delimiter: DEFAULT_DELIMITER,
            name,
            no_components,
        }
    }

    /// Creates a name from a string delimited by `delimiter`
    pub fn with_delimiter(source: impl Into<String>, delimiter: char) -> NameResult<Self> {
        check_delimiter(delimiter)?;
        let name = source.into();
        let no_components = codec::count(&name, delimiter);
        let result = Self {
            delimiter,
            name,
            no_components,
        };
        result.check_invariants()?;
        Ok(result)
    }

    /// Creates a name, taking the delimiter as a one-character string
    pub fn parse(source: impl Into<String>, delimiter: &str) -> NameResult<Self> {
        Self::with_delimiter(source, parse_delimiter(delimiter)?)
    }

    /// Replaces the stored string with the join of `components`
    ///
    /// Refuses, without touching anything, if the joined string would not
    /// tokenize back into exactly those components.
    fn rebuild(&mut self, components: Vec<String>) -> NameResult<()> {
        let name = codec::join(&components, self.delimiter);
        check_representable(&name, self.delimiter, &components)?;
        self.name = name;
        self.no_components = components.len();
        Ok(())
    }
}

/// Checks that `name` tokenizes into exactly `expected`
///
/// This fails for components that carry an unescaped delimiter, for a
/// component ending in a dangling escape that would swallow the next
/// delimiter, and for a lone empty component (which joins to the empty
/// name).
fn check_representable(name: &str, delimiter: char, expected: &[String]) -> NameResult<()> {
    precondition(codec::tokenize(name, delimiter) == expected, || {
        format!("components {expected:?} cannot be stored as a {delimiter:?}-delimited string")
    })
}

impl Representation for StringName {
    fn delimiter(&self) -> char {
        self.delimiter
    }

    fn raw_no_components(&self) -> usize {
        self.no_components
    }

    fn raw_component(&self, i: usize) -> String {
        codec::tokenize(&self.name, self.delimiter).swap_remove(i)
    }

    fn raw_set_component(&mut self, i: usize, c: &str) -> NameResult<()> {
        let mut components = codec::tokenize(&self.name, self.delimiter);
        components[i] = c.to_string();
        self.rebuild(components)
    }

    fn raw_insert(&mut self, i: usize, c: &str) -> NameResult<()> {
        let mut components = codec::tokenize(&self.name, self.delimiter);
        components.insert(i, c.to_string());
        self.rebuild(components)
    }

    fn raw_append(&mut self, c: &str) -> NameResult<()> {
        let mut name = self.name.clone();
        if !name.is_empty() {
            name.push(self.delimiter);
        }
        name.push_str(c);

        // The count alone misses a trailing escape swallowing the new delimiter
        let mut expected = codec::tokenize(&self.name, self.delimiter);
        expected.push(c.to_string());
        check_representable(&name, self.delimiter, &expected)?;

        self.name = name;
        self.no_components = expected.len();
        Ok(())
    }

    fn raw_remove(&mut self, i: usize) -> NameResult<()> {
        let mut components = codec::tokenize(&self.name, self.delimiter);
        components.remove(i);
        self.rebuild(components)
    }

    fn raw_components(&self) -> Vec<String> {
        codec::tokenize(&self.name, self.delimiter)
    }

    fn check_representation(&self) -> NameResult<()> {
        let counted = codec::count(&self.name, self.delimiter);
        invariant(self.no_components == counted, || {
            format!(
                "cached component count {} disagrees with {} counted in {:?}",
                self.no_components, counted, self.name
            )
        })
    }

    fn boxed_clone(&self) -> Box<dyn Name> {
        Box::new(self.clone())
    }
}

impl fmt::Display for StringName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Serialized form of a [`StringName`]
#[derive(Serialize, Deserialize)]
struct StringNameRecord {
    delimiter: char,
    name: String,
}

impl TryFrom<StringNameRecord> for StringName {
    type Error = crate::NameError;

    fn try_from(record: StringNameRecord) -> NameResult<Self> {
        Self::with_delimiter(record.name, record.delimiter)
    }
}

impl From<StringName> for StringNameRecord {
    fn from(name: StringName) -> Self {
        Self {
            delimiter: name.delimiter,
            name: name.name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NameError;

    #[test]
    fn test_new_counts_components() {
        let name = StringName::new("a.b.c");
        assert_eq!(name.no_components().unwrap(), 3);
        assert_eq!(name.delimiter_character().unwrap(), '.');
    }

    #[test]
    fn test_empty_name() {
        let mut name = StringName::new("");
        assert_eq!(name.no_components().unwrap(), 0);
        assert!(name.is_empty().unwrap());

        name.append("x").unwrap();
        assert_eq!(name.no_components().unwrap(), 1);
        assert_eq!(name.component(0).unwrap(), "x");
        assert_eq!(name.to_string(), "x");
    }

    #[test]
    fn test_escaped_delimiter() {
        let name = StringName::new(r"a\.b.c");
        assert_eq!(name.no_components().unwrap(), 2);
        assert_eq!(name.component(0).unwrap(), r"a\.b");
        assert_eq!(name.component(1).unwrap(), "c");
    }

    #[test]
    fn test_with_delimiter() {
        let name = StringName::with_delimiter("usr/local/bin", '/').unwrap();
        assert_eq!(name.components().unwrap(), vec!["usr", "local", "bin"]);
        assert_eq!(name.as_data_string().unwrap(), "usr.local.bin");
    }

    #[test]
    fn test_escape_delimiter_is_rejected() {
        let result = StringName::with_delimiter("a", '\\');
        assert!(matches!(result, Err(NameError::IllegalArgument(_))));
    }

    #[test]
    fn test_parse_delimiter_string() {
        let name = StringName::parse("a#b", "#").unwrap();
        assert_eq!(name.no_components().unwrap(), 2);

        assert!(matches!(
            StringName::parse("a#b", "##"),
            Err(NameError::IllegalArgument(_))
        ));
        assert!(matches!(
            StringName::parse("a#b", ""),
            Err(NameError::IllegalArgument(_))
        ));
    }

    #[test]
    fn test_set_component() {
        let mut name = StringName::new("a.b.c");
        name.set_component(1, "x").unwrap();
        assert_eq!(name.to_string(), "a.x.c");
        assert_eq!(name.no_components().unwrap(), 3);
    }

    #[test]
    fn test_set_component_keeps_escapes() {
        let mut name = StringName::new("a.b");
        name.set_component(0, r"x\.y").unwrap();
        assert_eq!(name.to_string(), r"x\.y.b");
        assert_eq!(name.no_components().unwrap(), 2);
    }

    #[test]
    fn test_insert() {
        let mut name = StringName::new("a.c");
        name.insert(1, "b").unwrap();
        assert_eq!(name.to_string(), "a.b.c");
        name.insert(0, "z").unwrap();
        assert_eq!(name.to_string(), "z.a.b.c");
        name.insert(4, "end").unwrap();
        assert_eq!(name.to_string(), "z.a.b.c.end");
    }

    #[test]
    fn test_insert_out_of_range() {
        let mut name = StringName::new("a.b");
        let result = name.insert(3, "x");
        assert!(matches!(result, Err(NameError::IllegalArgument(_))));
        assert_eq!(name.to_string(), "a.b");
    }

    #[test]
    fn test_append() {
        let mut name = StringName::new("a");
        name.append("b").unwrap();
        name.append("").unwrap();
        assert_eq!(name.to_string(), "a.b.");
        assert_eq!(name.no_components().unwrap(), 3);
        assert_eq!(name.component(2).unwrap(), "");
    }

    #[test]
    fn test_remove() {
        let mut name = StringName::new("a.b.c");
        name.remove(1).unwrap();
        assert_eq!(name.to_string(), "a.c");
        name.remove(1).unwrap();
        name.remove(0).unwrap();
        assert!(name.is_empty().unwrap());
    }

    #[test]
    fn test_out_of_range_access_does_not_mutate() {
        let mut name = StringName::new("a.b");
        assert!(matches!(name.component(2), Err(NameError::IllegalArgument(_))));
        assert!(matches!(
            name.component(usize::MAX),
            Err(NameError::IllegalArgument(_))
        ));
        assert!(matches!(name.remove(2), Err(NameError::IllegalArgument(_))));
        assert!(matches!(
            name.set_component(2, "x"),
            Err(NameError::IllegalArgument(_))
        ));
        assert_eq!(name.to_string(), "a.b");
    }

    #[test]
    fn test_unrepresentable_edits_are_rejected() {
        let mut name = StringName::new("a.b");

        // Unescaped delimiter would split the component
        assert!(matches!(
            name.set_component(0, "x.y"),
            Err(NameError::IllegalArgument(_))
        ));
        assert!(matches!(name.insert(1, "x.y"), Err(NameError::IllegalArgument(_))));
        assert!(matches!(name.append("x.y"), Err(NameError::IllegalArgument(_))));

        // Dangling escape would swallow the following delimiter
        assert!(matches!(
            name.set_component(0, "x\\"),
            Err(NameError::IllegalArgument(_))
        ));

        assert_eq!(name.to_string(), "a.b");
        assert_eq!(name.no_components().unwrap(), 2);
    }

    #[test]
    fn test_lone_empty_component_is_rejected() {
        let mut empty = StringName::new("");
        assert!(matches!(empty.append(""), Err(NameError::IllegalArgument(_))));
        assert!(matches!(empty.insert(0, ""), Err(NameError::IllegalArgument(_))));
        assert!(empty.is_empty().unwrap());

        let mut single = StringName::new("a");
        assert!(matches!(
            single.set_component(0, ""),
            Err(NameError::IllegalArgument(_))
        ));
        assert_eq!(single.to_string(), "a");
    }

    #[test]
    fn test_trailing_escape_on_last_component() {
        let mut name = StringName::new("a");
        name.append("b\\").unwrap();
        assert_eq!(name.components().unwrap(), vec!["a", "b\\"]);
        // Nothing may follow the dangling escape
        assert!(matches!(name.append("c"), Err(NameError::IllegalArgument(_))));
    }

    #[test]
    fn test_append_after_trailing_escape_matches_insert() {
        let mut name = StringName::new("a");
        name.append("b\\").unwrap();

        // "a.b\.x.y" still counts three components, but the wrong ones
        let mut inserted = name.clone();
        assert!(matches!(name.append("x.y"), Err(NameError::IllegalArgument(_))));
        assert!(matches!(
            inserted.insert(2, "x.y"),
            Err(NameError::IllegalArgument(_))
        ));

        for unchanged in [&name, &inserted] {
            assert_eq!(unchanged.components().unwrap(), vec!["a", "b\\"]);
            assert_eq!(unchanged.no_components().unwrap(), 2);
        }
    }

    #[test]
    fn test_clone_is_independent() {
        let original = StringName::new("a.b");
        let mut copy = original.clone();
        copy.append("c").unwrap();
        assert_eq!(original.to_string(), "a.b");
        assert_eq!(copy.to_string(), "a.b.c");
    }

    #[test]
    fn test_serde_round_trip() {
        let name = StringName::with_delimiter(r"a#b\#c", '#').unwrap();
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, r##"{"delimiter":"#","name":"a#b\\#c"}"##);

        let parsed: StringName = serde_json::from_str(&json).unwrap();
        assert!(parsed.is_equal(&name).unwrap());
        assert_eq!(parsed.no_components().unwrap(), 2);
    }

    #[test]
    fn test_deserialize_rejects_escape_delimiter() {
        let result: Result<StringName, _> =
            serde_json::from_str(r#"{"delimiter":"\\","name":"a"}"#);
        assert!(result.is_err());
    }
}
