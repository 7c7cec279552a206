//! Property tests for skill fingerprints.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use proptest::prelude::*;
use tempfile::tempdir;

use hearth::{fingerprint, AssetKind};

/// Relative file paths (no path is a directory prefix of another) with contents
fn file_tree() -> impl Strategy<Value = BTreeMap<String, Vec<u8>>> {
    let segment = proptest::string::string_regex("[a-z0-9]{1,6}").unwrap();
    let path = proptest::collection::vec(segment, 1..=3).prop_map(|s| s.join("/"));
    let content = proptest::collection::vec(any::<u8>(), 0..64);

    proptest::collection::btree_map(path, content, 1..8).prop_filter(
        "no file may also be a directory",
        |tree| {
            tree.keys().all(|a| {
                tree.keys()
                    .all(|b| a == b || !b.starts_with(&format!("{}/", a)))
            })
        },
    )
}

fn materialize<'a>(dir: &Path, files: impl Iterator<Item = (&'a String, &'a Vec<u8>)>) {
    fs::create_dir_all(dir).unwrap();
    for (relative, content) in files {
        let path = dir.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 48,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Identical (relative path, content) sets produce identical
    /// digests regardless of the order the files were created in.
    #[test]
    fn property_digest_independent_of_creation_order(tree in file_tree()) {
        let tmp = tempdir().unwrap();
        let forward = tmp.path().join("forward");
        let backward = tmp.path().join("backward");
        materialize(&forward, tree.iter());
        materialize(&backward, tree.iter().rev());

        let a = fingerprint(AssetKind::Skill, &forward).unwrap();
        let b = fingerprint(AssetKind::Skill, &backward).unwrap();
        prop_assert_eq!(a.digest, b.digest);
    }

    /// PROPERTY: Changing any one file's content changes the digest.
    #[test]
    fn property_content_change_changes_digest(
        tree in file_tree(),
        pick in any::<prop::sample::Index>(),
        extra in any::<u8>(),
    ) {
        let tmp = tempdir().unwrap();
        let original = tmp.path().join("original");
        materialize(&original, tree.iter());

        let mut changed_tree = tree.clone();
        let key = changed_tree.keys().nth(pick.index(tree.len())).unwrap().clone();
        changed_tree.get_mut(&key).unwrap().push(extra);
        let changed = tmp.path().join("changed");
        materialize(&changed, changed_tree.iter());

        let a = fingerprint(AssetKind::Skill, &original).unwrap();
        let b = fingerprint(AssetKind::Skill, &changed).unwrap();
        prop_assert_ne!(a.digest, b.digest);
    }

    /// PROPERTY: Renaming any one file changes the digest.
    #[test]
    fn property_rename_changes_digest(
        tree in file_tree(),
        pick in any::<prop::sample::Index>(),
    ) {
        let key = tree.keys().nth(pick.index(tree.len())).unwrap().clone();
        let renamed_key = format!("{}x", key);
        prop_assume!(!tree.keys().any(|k| k == &renamed_key || k.starts_with(&format!("{}/", renamed_key))));

        let tmp = tempdir().unwrap();
        let original = tmp.path().join("original");
        materialize(&original, tree.iter());

        let mut renamed_tree = tree.clone();
        let content = renamed_tree.remove(&key).unwrap();
        renamed_tree.insert(renamed_key, content);
        let renamed = tmp.path().join("renamed");
        materialize(&renamed, renamed_tree.iter());

        let a = fingerprint(AssetKind::Skill, &original).unwrap();
        let b = fingerprint(AssetKind::Skill, &renamed).unwrap();
        prop_assert_ne!(a.digest, b.digest);
    }

    /// PROPERTY: A prompt digest depends only on its bytes.
    #[test]
    fn property_prompt_digest_is_content_only(content in proptest::collection::vec(any::<u8>(), 0..256)) {
        let tmp = tempdir().unwrap();
        let a = tmp.path().join("a.md");
        let b = tmp.path().join("nested/other-name.md");
        fs::write(&a, &content).unwrap();
        fs::create_dir_all(b.parent().unwrap()).unwrap();
        fs::write(&b, &content).unwrap();

        let fa = fingerprint(AssetKind::Prompt, &a).unwrap();
        let fb = fingerprint(AssetKind::Prompt, &b).unwrap();
        prop_assert_eq!(fa.digest, fb.digest);
    }
}
