//! Scenario: Two Sources Disagree
//!
//! Journey: The same prompt was written independently in two places and the
//! copies differ. Nothing is in the home store yet.
//!
//! Success Criteria:
//! - One `ambiguous-multi-source` conflict whose recommendation names
//!   explicit per-source selection
//! - `import --all` refuses to pick a side
//! - Importing with an explicit source succeeds

use std::fs;

use hearth::domain::entities::ConflictState;
use hearth::infrastructure::StaticTrackedFiles;
use hearth::{
    AssetId, AssetIdentity, ImportOptions, ImportUseCase, ScanOptions, ScanUseCase,
};
use hearth::application::ImportStatus;

use crate::common::*;

#[test]
fn scenario_ambiguous_sources_require_explicit_choice() {
    let env = TestEnv::new();
    env.write("alpha/prompts/release.md", "ship on friday\n");
    env.write("beta/prompts/release.md", "never ship on friday\n");

    let config = env.config(&["alpha", "beta"]);
    let outcome =
        ScanUseCase::new(StaticTrackedFiles::none()).execute(&config, &ScanOptions::default());

    assert_eq!(outcome.conflicts.len(), 1);
    let conflict = &outcome.conflicts[0];
    assert_eq!(conflict.state, ConflictState::AmbiguousMultiSource);
    assert_eq!(conflict.sources, vec!["alpha", "beta"]);
    assert!(conflict.recommendation.contains("--from"));
    assert!(outcome.report.unsynced_prompts[0].paths.len() == 2);

    let importer = ImportUseCase::new(&config.home);

    let all = importer.execute(&outcome, &ImportOptions::all_unsynced());
    assert_eq!(all.skipped(), 1);
    assert!(!env.store().join("prompts/release.md").exists());

    let release = AssetIdentity::prompt(AssetId::parse("release").unwrap());
    let chosen = importer.execute(
        &outcome,
        &ImportOptions::identity(release).with_from("beta"),
    );
    assert!(matches!(chosen.items[0].status, ImportStatus::Imported { .. }));
    assert_eq!(
        fs::read_to_string(env.store().join("prompts/release.md")).unwrap(),
        "never ship on friday\n"
    );
}

#[test]
fn scenario_ambiguity_dominates_a_matching_home_copy() {
    let env = TestEnv::new();
    env.write("store/skills/review/SKILL.md", REVIEW_MANIFEST);
    env.write("alpha/skills/review/SKILL.md", REVIEW_MANIFEST);
    env.write("beta/skills/review/SKILL.md", REVIEW_MANIFEST);
    env.write("beta/skills/review/checklist.md", "- tests\n");

    let outcome = ScanUseCase::new(StaticTrackedFiles::new(["skills/review/SKILL.md"]))
        .execute(&env.config(&["alpha", "beta"]), &ScanOptions::default());

    let review = AssetIdentity::skill(AssetId::parse("review").unwrap());
    let conflict = outcome.conflict(&review).expect("review is ambiguous");
    assert_eq!(conflict.state, ConflictState::AmbiguousMultiSource);
    assert_eq!(
        conflict.diff.as_ref().unwrap().lines,
        vec!["+checklist.md".to_string()]
    );
}
