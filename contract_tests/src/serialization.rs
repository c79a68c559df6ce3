//! Serialized form contract tests
//!
//! These tests define the stable exchange formats of names.

// ===== Canonical Constants =====
#[allow(dead_code)]
const CANONICAL_DELIMITER: char = '.';
#[allow(dead_code)]
const CANONICAL_ESCAPE: char = '\\';

// ===== Contract Tests =====
