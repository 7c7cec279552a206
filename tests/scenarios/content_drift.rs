//! Scenario: Edited Copy of a Tracked Prompt
//!
//! Journey: A developer tweaked `release.md` inside a project. The home store
//! holds the committed original.
//!
//! Steps:
//! 1. Home has `prompts/release.md` (tracked) with `description: home`
//! 2. One source has `prompts/release.md` with `description: source`
//! 3. Scan
//! 4. Re-import with --overwrite
//!
//! Success Criteria:
//! - Exactly one conflict, `content-drift`, with a diff naming both descriptions
//! - After overwrite the home copy matches the source and the conflict is gone

use std::fs;

use hearth::domain::entities::ConflictState;
use hearth::infrastructure::StaticTrackedFiles;
use hearth::{AssetId, AssetIdentity, ImportOptions, ImportUseCase, ScanOptions, ScanUseCase};

use crate::common::*;

#[test]
fn scenario_tracked_prompt_drift_then_resync() {
    let env = TestEnv::new();
    env.write("store/prompts/release.md", RELEASE_HOME);
    env.write("work/prompts/release.md", RELEASE_SOURCE);

    let config = env.config(&["work"]);
    let scan = ScanUseCase::new(StaticTrackedFiles::new(["prompts/release.md"]));

    // Step 3: scan
    let outcome = scan.execute(&config, &ScanOptions::default());
    assert_eq!(outcome.conflicts.len(), 1, "{:#?}", outcome.conflicts);

    let conflict = &outcome.conflicts[0];
    let release = AssetIdentity::prompt(AssetId::parse("release").unwrap());
    assert_eq!(conflict.identity, release);
    assert_eq!(conflict.state, ConflictState::ContentDrift);

    let summary = conflict.diff.as_ref().expect("drift carries a diff").summary();
    assert!(summary.contains("description: home"), "{}", summary);
    assert!(summary.contains("description: source"), "{}", summary);
    assert!(!outcome.report.is_unsynced(&release));

    // Step 4: resync from the source
    let result = ImportUseCase::new(&config.home).execute(
        &outcome,
        &ImportOptions::identity(release.clone()).with_overwrite(true),
    );
    assert!(result.is_success(), "{:#?}", result);
    assert_eq!(
        fs::read_to_string(env.store().join("prompts/release.md")).unwrap(),
        RELEASE_SOURCE
    );

    let rescan = scan.execute(&config, &ScanOptions::default());
    assert!(rescan.conflicts.is_empty(), "{:#?}", rescan.conflicts);
    assert_eq!(rescan.status.synced_tracked.len(), 1);
}

#[test]
fn scenario_untracked_home_edit_needs_human_review() {
    let env = TestEnv::new();
    env.write("store/prompts/release.md", RELEASE_HOME);
    env.write("work/prompts/release.md", RELEASE_SOURCE);

    let outcome = ScanUseCase::new(StaticTrackedFiles::none())
        .execute(&env.config(&["work"]), &ScanOptions::default());

    assert_eq!(outcome.conflicts.len(), 1);
    assert_eq!(
        outcome.conflicts[0].state,
        ConflictState::HomeModifiedUntracked
    );
    assert!(outcome.conflicts[0].recommendation.contains("by hand"));
}
