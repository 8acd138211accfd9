//! Property-based tests for the ignore synchronizer.
//!
//! These tests generate random ignore files and pre-existing properties for a
//! small fixed directory tree and check that the merge rules hold for every
//! combination.

#[cfg(test)]
mod proptest_tests {
    use crate::config::SyncOptions;
    use crate::pattern::{classify, IgnoreSet, PatternLine};
    use crate::report::MemoryReporter;
    use crate::store::MemoryStore;
    use crate::synchronizer::IgnoreSynchronizer;
    use proptest::prelude::*;
    use std::collections::BTreeSet;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    /// Directories of the generated tree, relative to the root, parents first.
    const TREE: [&str; 4] = ["", "a", "a/c", "b"];

    /// One line of a generated ignore file.
    fn ignore_line() -> impl Strategy<Value = String> {
        prop_oneof![
            4 => "[a-z*.]{1,6}",
            1 => "#[a-z ]{0,6}",
            1 => Just(String::new()),
            // Exceptions that never match a file on disk
            1 => "![a-z]{1,4}\\.absent",
        ]
    }

    /// Per-directory ignore file (or none) and pre-existing property.
    fn directory_state() -> impl Strategy<Value = (Option<Vec<String>>, Vec<String>)> {
        (
            proptest::option::of(prop::collection::vec(ignore_line(), 0..6)),
            prop::collection::vec("[A-Z_]{1,8}", 0..3),
        )
    }

    fn build(states: &[(Option<Vec<String>>, Vec<String>)]) -> (TempDir, MemoryStore) {
        let temp_dir = TempDir::new().unwrap();
        let mut store = MemoryStore::new();

        for (relative, (file, existing)) in TREE.iter().zip(states) {
            let directory = path_of(temp_dir.path(), relative);
            fs::create_dir_all(&directory).unwrap();

            if let Some(lines) = file {
                fs::write(directory.join(".svnignore"), lines.join("\n")).unwrap();
            }

            let existing: Vec<&str> = existing.iter().map(String::as_str).collect();
            store = store.with_property(&directory, &existing);
        }

        (temp_dir, store)
    }

    fn path_of(root: &Path, relative: &str) -> PathBuf {
        if relative.is_empty() {
            root.to_path_buf()
        } else {
            root.join(relative)
        }
    }

    fn rules_of(lines: &[String]) -> BTreeSet<String> {
        lines
            .iter()
            .filter_map(|line| match classify(line) {
                Some(PatternLine::Rule(rule)) => Some(rule),
                _ => None,
            })
            .collect()
    }

    fn run(store: &MemoryStore, root: &Path, options: SyncOptions) {
        let reporter = MemoryReporter::new();
        IgnoreSynchronizer::new(store, store, &reporter, options)
            .apply(root)
            .unwrap();
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(48))]

        /// Property: with overwrite and no recursion, each directory ends up
        /// with exactly the rules of its own ignore file
        #[test]
        fn overwrite_yields_file_rules_only(
            states in prop::collection::vec(directory_state(), TREE.len())
        ) {
            let (temp_dir, store) = build(&states);
            run(&store, temp_dir.path(), SyncOptions::new().overwrite(true).recursive(false));

            for (relative, (file, _)) in TREE.iter().zip(&states) {
                let expected = file.as_deref().map(rules_of).unwrap_or_default();
                let directory = path_of(temp_dir.path(), relative);
                prop_assert_eq!(store.property_set(&directory), expected);
            }
        }

        /// Property: a second merging run changes nothing
        #[test]
        fn merge_is_idempotent(
            states in prop::collection::vec(directory_state(), TREE.len())
        ) {
            let (temp_dir, store) = build(&states);
            let options = SyncOptions::default();

            run(&store, temp_dir.path(), options.clone());
            let first: Vec<_> = TREE
                .iter()
                .map(|relative| store.property_set(path_of(temp_dir.path(), relative)))
                .collect();

            run(&store, temp_dir.path(), options);
            for (relative, value) in TREE.iter().zip(first) {
                prop_assert_eq!(store.property_set(path_of(temp_dir.path(), relative)), value);
            }
        }

        /// Property: in recursive mode every child contains its parent's ignores
        #[test]
        fn children_inherit_parent_ignores(
            states in prop::collection::vec(directory_state(), TREE.len())
        ) {
            let (temp_dir, store) = build(&states);
            run(&store, temp_dir.path(), SyncOptions::default());

            let root = store.property_set(temp_dir.path());
            let a = store.property_set(temp_dir.path().join("a"));
            let c = store.property_set(temp_dir.path().join("a/c"));
            let b = store.property_set(temp_dir.path().join("b"));

            prop_assert!(root.is_subset(&a));
            prop_assert!(a.is_subset(&c));
            prop_assert!(root.is_subset(&b));
        }

        /// Property: merging is a union regardless of the order of the inputs
        #[test]
        fn set_union_is_order_independent(
            left in prop::collection::vec(ignore_line(), 0..8),
            right in prop::collection::vec(ignore_line(), 0..8),
        ) {
            let mut forward = IgnoreSet::from_lines(&left);
            forward.merge(IgnoreSet::from_lines(&right));

            let mut backward = IgnoreSet::from_lines(&right);
            backward.merge(IgnoreSet::from_lines(&left));

            prop_assert_eq!(forward.to_property_lines(), backward.to_property_lines());
        }
    }
}
