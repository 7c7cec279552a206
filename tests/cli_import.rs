//! CLI tests for `hearth import`

mod common;

use std::fs;

use common::*;

#[test]
fn import_single_prompt_into_store() {
    let env = TestEnv::new();
    env.write("project/prompts/git/commit.md", "commit\n");

    let result = env.run(&["import", "prompt", "Git/Commit"]);

    assert!(result.is_success(), "{}\n{}", result.stdout, result.stderr);
    assert_eq!(
        fs::read_to_string(env.store().join("prompts/git/commit.md")).unwrap(),
        "commit\n"
    );
    assert!(result.stdout.contains("Imported 1, skipped 0, failed 0"));
}

#[test]
fn import_existing_without_overwrite_fails_and_keeps_target() {
    let env = TestEnv::new();
    env.write("store/prompts/release.md", RELEASE_HOME);
    env.write("project/prompts/release.md", RELEASE_SOURCE);

    let result = env.run(&["import", "prompt", "release"]);

    assert!(!result.is_success());
    assert_eq!(result.exit_code, 1);
    assert!(result.stdout.contains("already exists"), "{}", result.stdout);
    assert_eq!(
        fs::read_to_string(env.store().join("prompts/release.md")).unwrap(),
        RELEASE_HOME
    );

    let forced = env.run(&["import", "prompt", "release", "--overwrite"]);
    assert!(forced.is_success(), "{}", forced.stdout);
    assert_eq!(
        fs::read_to_string(env.store().join("prompts/release.md")).unwrap(),
        RELEASE_SOURCE
    );
}

#[test]
fn import_ambiguous_needs_from() {
    let env = TestEnv::new();
    env.write("user/.claude/commands/release.md", "user version\n");
    env.write("project/prompts/release.md", "project version\n");

    let refused = env.run(&["import", "prompt", "release"]);
    assert!(!refused.is_success());
    assert!(refused.stdout.contains("--from"), "{}", refused.stdout);

    let chosen = env.run(&["import", "prompt", "release", "--from", "user"]);
    assert!(chosen.is_success(), "{}", chosen.stdout);
    assert_eq!(
        fs::read_to_string(env.store().join("prompts/release.md")).unwrap(),
        "user version\n"
    );
}

#[test]
fn import_differing_copies_in_one_source_needs_a_path() {
    let env = TestEnv::new();
    env.write("user/.claude/commands/release.md", "claude copy\n");
    env.write("user/prompts/release.md", "prompts copy\n");

    let refused = env.run(&["import", "prompt", "release", "--from", "user"]);
    assert!(!refused.is_success());
    assert!(refused.stdout.contains(".claude/commands/release.md"), "{}", refused.stdout);
    assert!(!env.store().join("prompts/release.md").exists());

    let chosen = env.run(&["import", "prompt", "release", "--from", "prompts/release.md"]);
    assert!(chosen.is_success(), "{}", chosen.stdout);
    assert_eq!(
        fs::read_to_string(env.store().join("prompts/release.md")).unwrap(),
        "prompts copy\n"
    );
}

#[test]
fn import_all_json_reports_each_item() {
    let env = TestEnv::new();
    env.write("project/prompts/a.md", "a\n");
    env.write("project/skills/s/SKILL.md", "s\n");
    env.write("project/skills/s/run.sh", "echo\n");
    env.write("user/.claude/commands/clash.md", "one\n");
    env.write("project/.claude/commands/clash.md", "two\n");

    let result = env.run(&["--json", "import", "--all"]);

    assert!(result.is_success(), "{}", result.stderr);
    let json = result.json();
    let items = json["items"].as_array().unwrap();
    assert_eq!(items.len(), 3);
    let statuses: Vec<(&str, &str)> = items
        .iter()
        .map(|i| (i["id"].as_str().unwrap(), i["status"].as_str().unwrap()))
        .collect();
    assert_eq!(
        statuses,
        vec![("a", "imported"), ("clash", "skipped"), ("s", "imported")]
    );
    assert!(env.store().join("skills/s/run.sh").is_file());
}

#[test]
fn import_requires_selection() {
    let env = TestEnv::new();
    let result = env.run(&["import"]);
    assert!(!result.is_success());
}
