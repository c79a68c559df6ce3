//! Cross-representation contract tests
//!
//! A string-backed and an array-backed name with the same components must
//! be indistinguishable through the contract.

use names::Name;

/// Verifies that two names are equal both ways and exchange identically
pub fn verify_equivalent(left: &dyn Name, right: &dyn Name) {
    assert!(left.is_equal(right).unwrap(), "{:?} != {:?}", left, right);
    assert!(right.is_equal(left).unwrap(), "{:?} != {:?}", right, left);
    assert_eq!(left.as_data_string().unwrap(), right.as_data_string().unwrap());
    assert_eq!(left.hash_code().unwrap(), right.hash_code().unwrap());
}

// ===== Contract Tests =====
