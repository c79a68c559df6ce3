//! String-backed name contract tests

use names::codec;
use names::{Name, StringName};

/// Builds a '.'-delimited string name from components
pub fn string_name(components: &[&str]) -> Box<dyn Name> {
    Box::new(StringName::new(codec::join(components, '.')))
}

// ===== Contract Tests =====
