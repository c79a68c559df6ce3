//! Integration tests for files and directories
//!
//! These tests check that nodes hold names only through the name contract:
//! - Full names are built from parent names
//! - Directories find children by their components, whatever the delimiter
//! - File state survives renames

use files::{Directory, File, FileState};
use names::{ArrayName, Name, StringName};

#[test]
fn test_nested_directory_workflow() {
    let mut root = Directory::root();
    let docs_node = root.child_node("docs").unwrap();
    root.add(docs_node.clone()).unwrap();

    let mut docs = Directory::new(docs_node);
    let readme = docs.child_node("readme.md").unwrap();
    docs.add(readme).unwrap();

    // With '/' as delimiter the dot stays inside the component
    let lookup = StringName::with_delimiter("docs/readme.md", '/').unwrap();
    let found = docs.get(&lookup).unwrap().unwrap();
    assert_eq!(found.base_name(), "readme.md");
    assert_eq!(
        found.full_name().unwrap().as_string(Some('/')).unwrap(),
        "docs/readme.md"
    );

    assert!(root.get(&ArrayName::new(["docs"])).unwrap().is_some());
}

#[test]
fn test_file_keeps_state_across_rename() {
    let root = Directory::root();
    let mut file = File::new(root.child_node("draft.txt").unwrap());

    file.open().unwrap();
    file.node_mut().rename("final.txt").unwrap();
    assert_eq!(file.state(), FileState::Open);
    assert_eq!(file.node().full_name().unwrap().components().unwrap(), vec!["final.txt"]);

    file.close().unwrap();
    assert_eq!(file.state(), FileState::Closed);
}

#[test]
fn test_full_name_hash_matches_lookup_name() {
    let root = Directory::root();
    let node = root.child_node("a").unwrap();
    let full = node.full_name().unwrap();
    let other = StringName::new("a");
    assert!(full.is_equal(&other).unwrap());
    assert_eq!(full.hash_code().unwrap(), other.hash_code().unwrap());
}
