//! # Name Contract Tests
//!
//! This crate provides "golden" tests for the name contract to ensure both
//! representations keep behaving as one value type.
//!
//! ## Philosophy
//!
//! - **One contract, many representations**: The same checks run against
//!   every [`Name`] implementation
//! - **Stable exchange formats**: Data strings, hash codes and serialized
//!   forms fail loudly when they drift
//!
//! ## Structure
//!
//! - `string_name` / `array_name`: the shared suite per representation
//! - `equivalence`: the two representations against each other
//! - `serialization`: golden serialized forms

pub mod array_name;
pub mod equivalence;
pub mod serialization;
pub mod string_name;

use names::Name;

/// Builds a name of one representation from plain components
pub type NameFactory = fn(&[&str]) -> Box<dyn Name>;

/// Common test helpers for contract validation
pub mod test_helpers {
    use super::NameFactory;
    use names::{Name, NameError};

    /// Verifies a name holds exactly `expected`, in order
    pub fn verify_components(name: &dyn Name, expected: &[&str]) {
        assert_eq!(
            name.no_components().unwrap(),
            expected.len(),
            "Component count drifted for {:?}",
            name
        );
        for (i, component) in expected.iter().enumerate() {
            assert_eq!(
                name.component(i).unwrap(),
                *component,
                "Component {} drifted for {:?}",
                i,
                name
            );
        }
    }

    /// Verifies that an out-of-range read is a caller error and changes nothing
    pub fn verify_out_of_range(factory: NameFactory) {
        let mut name = factory(&["a", "b"]);
        let before = name.as_data_string().unwrap();

        for i in [2, 3, usize::MAX] {
            assert!(matches!(name.component(i), Err(NameError::IllegalArgument(_))));
            assert!(matches!(
                name.set_component(i, "x"),
                Err(NameError::IllegalArgument(_))
            ));
            assert!(matches!(name.remove(i), Err(NameError::IllegalArgument(_))));
        }
        assert!(matches!(name.insert(3, "x"), Err(NameError::IllegalArgument(_))));

        assert_eq!(name.as_data_string().unwrap(), before);
    }

    /// Runs every edit once and checks the documented effect
    pub fn verify_edits(factory: NameFactory) {
        let mut name = factory(&["a", "b", "c"]);

        name.set_component(1, "x").unwrap();
        verify_components(name.as_ref(), &["a", "x", "c"]);

        name.insert(0, "start").unwrap();
        verify_components(name.as_ref(), &["start", "a", "x", "c"]);

        name.insert(4, "end").unwrap();
        verify_components(name.as_ref(), &["start", "a", "x", "c", "end"]);

        name.remove(2).unwrap();
        verify_components(name.as_ref(), &["start", "a", "c", "end"]);

        name.append("tail").unwrap();
        verify_components(name.as_ref(), &["start", "a", "c", "end", "tail"]);
    }

    /// Verifies the empty name and its first append
    pub fn verify_empty_name(factory: NameFactory) {
        let mut name = factory(&[]);
        assert!(name.is_empty().unwrap());
        assert_eq!(name.no_components().unwrap(), 0);
        assert_eq!(name.as_data_string().unwrap(), "");

        name.append("x").unwrap();
        assert!(!name.is_empty().unwrap());
        verify_components(name.as_ref(), &["x"]);
    }

    /// Verifies concat against a name of the given other representation
    pub fn verify_concat(factory: NameFactory, other: NameFactory) {
        let mut name = factory(&["a", "b"]);
        let tail = other(&["c", "d", "e"]);

        name.concat(tail.as_ref()).unwrap();

        assert_eq!(name.no_components().unwrap(), 5);
        for k in 0..3 {
            assert_eq!(name.component(2 + k).unwrap(), tail.component(k).unwrap());
        }
        verify_components(tail.as_ref(), &["c", "d", "e"]);
    }

    /// Verifies that clones never share state with their original
    pub fn verify_clone_independence(factory: NameFactory) {
        let original = factory(&["a", "b"]);
        let mut copy = original.clone_name().unwrap();

        copy.set_component(0, "z").unwrap();
        copy.remove(1).unwrap();

        verify_components(original.as_ref(), &["a", "b"]);
        verify_components(copy.as_ref(), &["z"]);
    }

    /// Runs the whole shared suite
    pub fn verify_name_contract(factory: NameFactory, other: NameFactory) {
        verify_out_of_range(factory);
        verify_edits(factory);
        verify_empty_name(factory);
        verify_concat(factory, other);
        verify_concat(factory, factory);
        verify_clone_independence(factory);
    }
}
