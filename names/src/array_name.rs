//! Array-backed names

use crate::contract::{check_delimiter, parse_delimiter, NameResult};
use crate::name::{Name, Representation};
use crate::DEFAULT_DELIMITER;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A name stored as a sequence of components
///
/// Every edit is a direct indexed operation on the sequence. Components
/// are stored exactly as given; nothing is escaped or unescaped.
///
/// # Examples
///
/// ```
/// use names::{ArrayName, Name};
///
/// let mut name = ArrayName::new(["docs", "todo.txt"]);
/// name.insert(1, "notes").unwrap();
/// assert_eq!(name.as_string(Some('/')).unwrap(), "docs/notes/todo.txt");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "ArrayNameRecord", into = "ArrayNameRecord")]
pub struct ArrayName {
    delimiter: char,
    components: Vec<String>,
}

impl ArrayName {
    /// Creates a name from components using [`DEFAULT_DELIMITER`]
    pub fn new<I, S>(components: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            delimiter: DEFAULT_DELIMITER,
            components: components.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates a name from components with a custom delimiter
    pub fn with_delimiter<I, S>(components: I, delimiter: char) -> NameResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        check_delimiter(delimiter)?;
        let result = Self {
            delimiter,
            components: components.into_iter().map(Into::into).collect(),
        };
        result.check_invariants()?;
        Ok(result)
    }

    /// Creates a name, taking the delimiter as a one-character string
    pub fn parse<I, S>(components: I, delimiter: &str) -> NameResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_delimiter(components, parse_delimiter(delimiter)?)
    }
}

impl Representation for ArrayName {
    fn delimiter(&self) -> char {
        self.delimiter
    }

    fn raw_no_components(&self) -> usize {
        self.components.len()
    }

    fn raw_component(&self, i: usize) -> String {
        self.components[i].clone()
    }

    fn raw_set_component(&mut self, i: usize, c: &str) -> NameResult<()> {
        self.components[i] = c.to_string();
        Ok(())
    }

    fn raw_insert(&mut self, i: usize, c: &str) -> NameResult<()> {
        self.components.insert(i, c.to_string());
        Ok(())
    }

    fn raw_append(&mut self, c: &str) -> NameResult<()> {
        self.components.push(c.to_string());
        Ok(())
    }

    fn raw_remove(&mut self, i: usize) -> NameResult<()> {
        self.components.remove(i);
        Ok(())
    }

    fn raw_components(&self) -> Vec<String> {
        self.components.clone()
    }

    fn boxed_clone(&self) -> Box<dyn Name> {
        Box::new(self.clone())
    }
}

impl fmt::Display for ArrayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, component) in self.components.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", self.delimiter)?;
            }
            f.write_str(component)?;
        }
        Ok(())
    }
}

#[derive(Serialize, Deserialize)]
struct ArrayNameRecord {
    delimiter: char,
    components: Vec<String>,
}

impl TryFrom<ArrayNameRecord> for ArrayName {
    type Error = crate::NameError;

    fn try_from(record: ArrayNameRecord) -> NameResult<Self> {
        Self::with_delimiter(record.components, record.delimiter)
    }
}

impl From<ArrayName> for ArrayNameRecord {
    fn from(name: ArrayName) -> Self {
        Self {
            delimiter: name.delimiter,
            components: name.components,
        }
    }
}
