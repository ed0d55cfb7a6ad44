//! Property-based tests for containment.

use super::containment::{is_contained_and_relative, relative_to_canonical_root};
use proptest::prelude::*;
use std::fs;
use std::path::PathBuf;

fn path_component_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_-]{1,12}"
}

fn relative_path_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(path_component_strategy(), 1..6)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    // Anything created under the root is contained, and rejoining the root
    // with the relative path names the same file.
    #[test]
    fn created_paths_are_contained(parts in relative_path_strategy()) {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("root");
        let mut path = root.clone();
        for part in &parts {
            path.push(part);
        }
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "rom").unwrap();

        let result = is_contained_and_relative(&path, &root).unwrap();
        prop_assert!(result.is_contained());
        let rejoined = fs::canonicalize(&root).unwrap().join(result.path());
        prop_assert_eq!(rejoined, fs::canonicalize(&path).unwrap());
    }

    // Sibling trees are never contained in each other.
    #[test]
    fn sibling_paths_are_outside(parts in relative_path_strategy()) {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("root");
        let sibling = dir.path().join("root-sibling");
        fs::create_dir_all(&root).unwrap();
        let mut path = sibling.clone();
        for part in &parts {
            path.push(part);
        }
        fs::create_dir_all(&path).unwrap();

        let result = is_contained_and_relative(&path, &root).unwrap();
        prop_assert!(!result.is_contained());
    }

    // Lexically: a root is never contained in any of its strict descendants.
    #[test]
    fn descendants_do_not_contain_ancestors(parts in relative_path_strategy()) {
        let mut root = PathBuf::from("/");
        for part in &parts {
            root.push(part);
        }
        let child = root.join("child");
        prop_assert!(!relative_to_canonical_root(root.clone(), &child).is_contained());
        prop_assert!(relative_to_canonical_root(child, &root).is_contained());
    }
}
