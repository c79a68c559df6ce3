//! Array-backed name contract tests

use names::{ArrayName, Name};

/// Builds a '.'-delimited array name from components
pub fn array_name(components: &[&str]) -> Box<dyn Name> {
    Box::new(ArrayName::new(components.iter().copied()))
}

// ===== Contract Tests =====
