//! Property-based tests for the path model.
//!
//! These tests use proptest to generate random roots and relative paths and
//! verify that the concatenation and depth invariants hold for all of them.

#[cfg(test)]
mod proptest_tests {
    use crate::path::{BaseDirectory, RelativePath};
    use proptest::prelude::*;
    use std::path::{Path, PathBuf};

    fn component() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9_.-]{1,12}".prop_filter("not a special component", |s| s != "." && s != "..")
    }

    fn relative_components() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec(component(), 1..6)
    }

    proptest! {
        /// Property: canonical roots never end with a separator (except `/` itself)
        #[test]
        fn base_directory_has_no_trailing_separator(
            root in "/[a-z]{1,8}(/[a-z]{1,8}){0,3}",
            trailing in "[/\\\\]{0,3}",
        ) {
            let base = BaseDirectory::new(format!("{}{}", root, trailing));
            prop_assert_eq!(base.root(), root.as_str());
        }

        /// Property: canonicalization is idempotent
        #[test]
        fn base_directory_canonicalization_is_idempotent(location in "[a-z/\\\\]{1,20}") {
            let once = BaseDirectory::new(location);
            let twice = BaseDirectory::new(once.root().to_string());
            prop_assert_eq!(once, twice);
        }

        /// Property: depth equals the number of components
        #[test]
        fn relative_path_depth_counts_components(parts in relative_components()) {
            let joined: PathBuf = parts.iter().collect();
            let relative = RelativePath::from_components(&joined).unwrap();
            prop_assert_eq!(relative.depth(), parts.len());
            prop_assert!(relative.as_str().starts_with('/'));
        }

        /// Property: a relative path taken under one root composes the
        /// matching path under any other root
        #[test]
        fn relative_path_is_reusable_across_roots(
            parts in relative_components(),
            left in "/[a-z]{1,8}",
            right in "/[a-z]{1,8}",
        ) {
            let left = BaseDirectory::new(left);
            let right = BaseDirectory::new(right);
            let suffix: PathBuf = parts.iter().collect();

            let found = left.root_path().join(&suffix);
            let relative = left.relative_path_of(&found).unwrap();

            prop_assert_eq!(left.join(&relative), found);
            prop_assert_eq!(right.join(&relative), Path::new(right.root()).join(&suffix));
        }
    }
}
