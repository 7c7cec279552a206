//! Scenario: Repeated Scans Agree
//!
//! Journey: A script runs `hearth scan --json` twice and diffs the output.
//!
//! Success Criteria:
//! - Serialized outcomes are byte-identical on unchanged input

use hearth::infrastructure::StaticTrackedFiles;
use hearth::{ScanOptions, ScanUseCase};

use crate::common::*;

#[test]
fn scenario_repeated_scans_are_byte_identical() {
    let env = TestEnv::new();
    env.write("store/prompts/release.md", RELEASE_HOME);
    env.write("store/skills/review/SKILL.md", REVIEW_MANIFEST);
    env.write("alpha/prompts/release.md", RELEASE_SOURCE);
    env.write("alpha/.claude/commands/git/commit.md", "commit\n");
    env.write("beta/prompts/Git/Commit.md", "commit differently\n");
    env.write("beta/.codex/skills/review/SKILL.md", REVIEW_MANIFEST);
    env.write("gamma/skills/lint/SKILL.md", "lint\n");
    env.write("gamma/skills/lint/rules/a.md", "a\n");

    let config = env.config(&["gamma", "alpha", "beta"]);
    let scan = ScanUseCase::new(StaticTrackedFiles::new(["prompts/release.md"]));

    let first = serde_json::to_string_pretty(&scan.execute(&config, &ScanOptions::default()))
        .unwrap();
    let second = serde_json::to_string_pretty(&scan.execute(&config, &ScanOptions::default()))
        .unwrap();

    assert_eq!(first, second);
    assert!(first.contains("ambiguous-multi-source"));
    assert!(first.contains("content-drift"));
}
