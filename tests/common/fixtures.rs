//! Reusable test content.

use std::fs;
use std::path::Path;

/// Prompt whose frontmatter says it is the home copy
pub const RELEASE_HOME: &str = r#"---
description: home
---
# Release

1. Bump the version
2. Tag and push
"#;

/// Same prompt as edited in a source
pub const RELEASE_SOURCE: &str = r#"---
description: source
---
# Release

1. Bump the version
2. Tag and push
"#;

pub const REVIEW_MANIFEST: &str = r#"---
description: Review a pull request
---
# Review

Read the diff, then comment.
"#;

pub fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}
