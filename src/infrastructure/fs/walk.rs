//! Breadth-first directory walk
//!
//! `Walk` describes a traversal; iterating it yields `(path, kind)` entries
//! level by level. The same `Walk` can be iterated any number of times, each
//! iteration reading the file system afresh.
//!
//! Children of each directory are visited in file-name order so results are
//! independent of the order the OS returns entries in. Symlinks are followed;
//! `MAX_DEPTH` bounds traversal through symlink cycles. A directory past the
//! bound is reported as an error rather than silently left out.

use std::collections::{HashSet, VecDeque};
use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Directory names never descended into during discovery
pub const DENY_LIST: &[&str] = &[
    ".git",
    ".hg",
    ".svn",
    "node_modules",
    "target",
    "dist",
    "build",
    ".venv",
    "venv",
    "__pycache__",
    ".cache",
    ".next",
    ".tox",
];

pub const MAX_DEPTH: usize = 32;

/// Deny-list predicate: version-control internals, dependency caches, build
/// output, and hidden directories.
pub fn is_denied_dir(name: &OsStr) -> bool {
    let Some(name) = name.to_str() else {
        return false;
    };
    name.starts_with('.') || DENY_LIST.contains(&name)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Dir,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkEntry {
    pub path: PathBuf,
    pub kind: EntryKind,
    /// 1 for direct children of the root
    pub depth: usize,
}

impl WalkEntry {
    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Dir
    }
}

/// A breadth-first traversal rooted at one directory
#[derive(Debug, Clone)]
pub struct Walk {
    root: PathBuf,
    filtered: bool,
    skip: HashSet<PathBuf>,
}

impl Walk {
    /// Walk that applies the deny-list
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            filtered: true,
            skip: HashSet::new(),
        }
    }

    /// Walk every directory, deny-listed or not
    pub fn unfiltered(root: impl Into<PathBuf>) -> Self {
        Self {
            filtered: false,
            ..Self::new(root)
        }
    }

    /// Builder: never descend into these directories
    pub fn skipping(mut self, dirs: impl IntoIterator<Item = PathBuf>) -> Self {
        self.skip.extend(dirs);
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Start a fresh traversal
    pub fn iter(&self) -> WalkIter<'_> {
        WalkIter {
            walk: self,
            queue: VecDeque::from([(self.root.clone(), 0)]),
            pending: VecDeque::new(),
        }
    }

    fn descends_into(&self, path: &Path) -> bool {
        if self.skip.contains(path) {
            return false;
        }
        !(self.filtered && path.file_name().is_some_and(is_denied_dir))
    }
}

impl<'a> IntoIterator for &'a Walk {
    type Item = io::Result<WalkEntry>;
    type IntoIter = WalkIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over one traversal.
///
/// Yields an `Err` for each directory that could not be read (including a
/// missing root) or that lies deeper than `MAX_DEPTH`, and keeps going with
/// the rest of the queue.
#[derive(Debug)]
pub struct WalkIter<'a> {
    walk: &'a Walk,
    queue: VecDeque<(PathBuf, usize)>,
    pending: VecDeque<io::Result<WalkEntry>>,
}

impl Iterator for WalkIter<'_> {
    type Item = io::Result<WalkEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.pending.pop_front() {
                return Some(entry);
            }

            let (dir, depth) = self.queue.pop_front()?;
            match read_sorted(&dir) {
                Ok(children) => {
                    for (path, kind) in children {
                        if kind == EntryKind::Dir {
                            if !self.walk.descends_into(&path) {
                                continue;
                            }
                            if depth + 1 < MAX_DEPTH {
                                self.queue.push_back((path.clone(), depth + 1));
                            } else {
                                self.pending.push_back(Err(too_deep(&path)));
                            }
                        }
                        self.pending.push_back(Ok(WalkEntry {
                            path,
                            kind,
                            depth: depth + 1,
                        }));
                    }
                }
                Err(e) => {
                    return Some(Err(io::Error::new(
                        e.kind(),
                        format!("{}: {}", dir.display(), e),
                    )))
                }
            }
        }
    }
}

fn too_deep(dir: &Path) -> io::Error {
    io::Error::other(format!(
        "{}: directory nesting exceeds {} levels",
        dir.display(),
        MAX_DEPTH
    ))
}

/// Children of `dir` sorted by file name; anything that is neither a file nor
/// a directory (after following symlinks) is dropped.
fn read_sorted(dir: &Path) -> io::Result<Vec<(PathBuf, EntryKind)>> {
    let mut children = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        let mut file_type = entry.file_type()?;
        if file_type.is_symlink() {
            match fs::metadata(&path) {
                Ok(meta) => file_type = meta.file_type(),
                // Dangling symlink
                Err(_) => continue,
            }
        }
        if file_type.is_dir() {
            children.push((path, EntryKind::Dir));
        } else if file_type.is_file() {
            children.push((path, EntryKind::File));
        }
    }
    children.sort_by(|a, b| a.0.file_name().cmp(&b.0.file_name()));
    Ok(children)
}
