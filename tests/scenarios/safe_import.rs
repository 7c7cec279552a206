//! Scenario: Import Never Overwrites Silently
//!
//! Journey: A developer imports an asset whose home copy already exists.
//!
//! Success Criteria:
//! - Without --overwrite the import fails with "already exists"
//! - The existing target is byte-for-byte unchanged
//! - With --overwrite the whole asset is replaced

use std::fs;

use hearth::{import_asset, AssetId, AssetIdentity, HearthError};

use crate::common::*;

fn snapshot_tree(root: &std::path::Path) -> Vec<(String, Vec<u8>)> {
    let mut files = Vec::new();
    let mut stack = vec![root.to_path_buf()];
    while let Some(dir) = stack.pop() {
        for entry in fs::read_dir(&dir).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                stack.push(path);
            } else {
                let rel = path.strip_prefix(root).unwrap().to_string_lossy().into_owned();
                files.push((rel, fs::read(&path).unwrap()));
            }
        }
    }
    files.sort();
    files
}

#[test]
fn scenario_existing_skill_is_left_untouched_without_overwrite() {
    let env = TestEnv::new();
    env.write("store/skills/review/SKILL.md", REVIEW_MANIFEST);
    env.write("store/skills/review/notes.md", "home notes\n");
    env.write("work/review/SKILL.md", "---\ndescription: other\n---\n");

    let target = env.store().join("skills/review");
    let before = snapshot_tree(&target);
    let review = AssetIdentity::skill(AssetId::parse("review").unwrap());

    let err = import_asset(&env.store(), &review, &env.source("work/review"), false).unwrap_err();

    assert!(matches!(err, HearthError::AlreadyExists { .. }));
    assert!(err.to_string().contains("already exists"));
    assert_eq!(snapshot_tree(&target), before);
}

#[test]
fn scenario_overwrite_replaces_whole_asset() {
    let env = TestEnv::new();
    env.write("store/skills/review/SKILL.md", REVIEW_MANIFEST);
    env.write("store/skills/review/notes.md", "home notes\n");
    env.write("work/review/SKILL.md", "replacement\n");

    let review = AssetIdentity::skill(AssetId::parse("review").unwrap());
    import_asset(&env.store(), &review, &env.source("work/review"), true).unwrap();

    let target = env.store().join("skills/review");
    assert_eq!(
        snapshot_tree(&target),
        vec![("SKILL.md".to_string(), b"replacement\n".to_vec())]
    );
}
