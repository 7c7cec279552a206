//! Whole-asset copy and removal
//!
//! A prompt is one file, a skill is a directory tree. Both are always copied
//! or removed as a whole.

use std::fs;
use std::io;
use std::path::Path;

use super::walk::MAX_DEPTH;

/// Copy a file, or a directory recursively, to `target`.
///
/// Parent directories of `target` are created. Symlinks inside a copied tree
/// are followed and their targets' contents copied; a tree nested deeper than
/// `MAX_DEPTH` (a symlink cycle, typically) fails the copy.
pub fn copy_asset(source: &Path, target: &Path) -> io::Result<()> {
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)?;
    }

    if fs::metadata(source)?.is_dir() {
        copy_dir_recursive(source, target, 0)
    } else {
        fs::copy(source, target).map(|_| ())
    }
}

fn copy_dir_recursive(source: &Path, target: &Path, depth: usize) -> io::Result<()> {
    if depth >= MAX_DEPTH {
        return Err(io::Error::other(format!(
            "{}: directory nesting exceeds {} levels",
            source.display(),
            MAX_DEPTH
        )));
    }
    fs::create_dir_all(target)?;
    for entry in fs::read_dir(source)? {
        let entry = entry?;
        let from = entry.path();
        let to = target.join(entry.file_name());
        if fs::metadata(&from)?.is_dir() {
            copy_dir_recursive(&from, &to, depth + 1)?;
        } else {
            fs::copy(&from, &to)?;
        }
    }
    Ok(())
}

/// Remove a file, symlink or directory tree. Missing paths are not an error.
pub fn remove_asset(path: &Path) -> io::Result<()> {
    match fs::symlink_metadata(path) {
        Ok(meta) if meta.is_dir() => fs::remove_dir_all(path),
        Ok(_) => fs::remove_file(path),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e),
    }
}
