//! Configuration loading and resolution

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::entities::SourceRoot;
use crate::error::{HearthError, HearthResult};
use crate::infrastructure::fs::{expand_home, hearth_home_dir};

use super::types::{ConfigFile, ConfigWarning, HearthConfig};

/// Overrides the config file location
pub const CONFIG_ENV_VAR: &str = "HEARTH_CONFIG";
/// Overrides the home store location
pub const HOME_ENV_VAR: &str = "HEARTH_HOME";

/// Home store directory name under the user's home
const DEFAULT_HOME_DIR: &str = ".hearth";

/// Load a config file and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> HearthResult<(ConfigFile, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let file: ConfigFile = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| HearthError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((file, warnings))
}

/// `<config dir>/hearth/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("hearth").join("config.toml"))
}

/// Values supplied on the command line
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub home: Option<PathBuf>,
    pub config: Option<PathBuf>,
    /// Extra explicit sources
    pub sources: Vec<PathBuf>,
    /// Directory relative paths resolve against (defaults to the process cwd)
    pub cwd: Option<PathBuf>,
}

/// Configuration plus the warnings produced while resolving it
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub config: HearthConfig,
    pub warnings: Vec<ConfigWarning>,
    /// Config file that was read, if any
    pub file: Option<PathBuf>,
}

/// Resolve configuration from flags, the process environment, the config
/// file, and defaults.
pub fn resolve(overrides: &ConfigOverrides) -> HearthResult<ResolvedConfig> {
    resolve_with_env(overrides, |var| std::env::var(var).ok())
}

/// [`resolve`] with an injectable environment lookup
pub fn resolve_with_env<F>(overrides: &ConfigOverrides, env: F) -> HearthResult<ResolvedConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let cwd = match &overrides.cwd {
        Some(cwd) => cwd.clone(),
        None => std::env::current_dir()?,
    };
    let absolute = |p: &Path| -> PathBuf {
        let expanded = expand_home(p);
        if expanded.is_absolute() {
            expanded
        } else {
            cwd.join(expanded)
        }
    };

    // Config file: an explicitly named file must exist, the default may not.
    let explicit_config = overrides
        .config
        .clone()
        .or_else(|| env(CONFIG_ENV_VAR).map(PathBuf::from))
        .map(|p| absolute(&p));
    let (file, warnings, file_path) = match explicit_config {
        Some(path) => {
            if !path.is_file() {
                return Err(HearthError::Config {
                    file: path,
                    message: "config file not found".to_string(),
                });
            }
            let (file, warnings) = load_with_warnings(&path)?;
            (file, warnings, Some(path))
        }
        None => match default_config_path().filter(|p| p.is_file()) {
            Some(path) => {
                let (file, warnings) = load_with_warnings(&path)?;
                (file, warnings, Some(path))
            }
            None => (ConfigFile::default(), Vec::new(), None),
        },
    };

    let home = overrides
        .home
        .clone()
        .or_else(|| env(HOME_ENV_VAR).map(PathBuf::from))
        .or_else(|| file.home.clone())
        .map(|p| absolute(&p))
        .or_else(|| hearth_home_dir().map(|h| h.join(DEFAULT_HOME_DIR)))
        .ok_or_else(|| HearthError::Config {
            file: file_path.clone().unwrap_or_default(),
            message: "cannot determine home store location; set --home or HEARTH_HOME"
                .to_string(),
        })?;

    let mut labels: HashSet<String> = HashSet::new();
    let mut sources: Vec<SourceRoot> = Vec::new();

    for entry in &file.sources {
        let label = unique_label(&entry.label, &mut labels);
        sources.push(SourceRoot {
            label,
            path: absolute(&entry.path),
            explicit: entry.explicit,
        });
    }

    for path in &overrides.sources {
        let path = absolute(path);
        let base = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "source".to_string());
        let label = unique_label(&base, &mut labels);
        sources.push(SourceRoot::explicit(label, path));
    }

    if sources.is_empty() {
        sources = default_sources(&cwd);
    }

    Ok(ResolvedConfig {
        config: HearthConfig { home, sources },
        warnings,
        file: file_path,
    })
}

/// Convention-only sources: the user's home directory and the current project.
fn default_sources(cwd: &Path) -> Vec<SourceRoot> {
    let mut sources = Vec::new();
    let user_home = hearth_home_dir();
    if let Some(home) = &user_home {
        sources.push(SourceRoot::new("user", home));
    }
    if user_home.as_deref() != Some(cwd) {
        sources.push(SourceRoot::new("project", cwd));
    }
    sources
}

fn unique_label(base: &str, taken: &mut HashSet<String>) -> String {
    let base = if base.trim().is_empty() { "source" } else { base.trim() };
    let mut label = base.to_string();
    let mut n = 2;
    while taken.contains(&label) {
        label = format!("{}-{}", base, n);
        n += 1;
    }
    taken.insert(label.clone());
    label
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &["home", "sources", "label", "path", "explicit"];

    CANDIDATES
        .iter()
        .map(|candidate| (*candidate, levenshtein(unknown, candidate)))
        .min_by_key(|(_, dist)| *dist)
        .filter(|(_, dist)| *dist <= 2)
        .map(|(candidate, _)| candidate.to_string())
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}

#[cfg(test)]
pub(super) fn suggest_key_for_test(unknown: &str) -> Option<String> {
    suggest_key(unknown)
}
