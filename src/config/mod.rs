//! Configuration module for Hearth
//!
//! Resolution order (highest priority first):
//! 1. CLI flags (`--home`, `--config`, `--source`)
//! 2. Environment variables (`HEARTH_HOME`, `HEARTH_CONFIG`)
//! 3. User config (`<config dir>/hearth/config.toml`)
//! 4. Built-in defaults (`~/.hearth`, sources `user` + `project`)
//!
//! The result is an immutable [`HearthConfig`] resolved once per command.

mod loader;
mod types;

pub use loader::{
    default_config_path, load_with_warnings, resolve, resolve_with_env, ConfigOverrides,
    ResolvedConfig, CONFIG_ENV_VAR, HOME_ENV_VAR,
};
pub use types::{ConfigFile, ConfigWarning, HearthConfig, SourceEntry};
