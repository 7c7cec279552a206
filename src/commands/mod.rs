//! Command handlers
//!
//! Each handler resolves configuration once, runs its use case, and prints
//! the rendered result to stdout.

mod import;
mod scan;
mod status;

pub use import::{cmd_import, ImportRequest};
pub use scan::cmd_scan;
pub use status::cmd_status;

use std::path::PathBuf;

use anyhow::Result;

use hearth::config::{resolve, ConfigOverrides};
use hearth::presentation::{create_renderer, supports_unicode, OutcomeRenderer, OutputFormat};
use hearth::HearthConfig;

/// Flags shared by every command
#[derive(Debug, Clone)]
pub struct GlobalArgs {
    pub json: bool,
    pub ascii: bool,
    pub verbose: u8,
    pub home: Option<PathBuf>,
    pub config: Option<PathBuf>,
}

impl GlobalArgs {
    /// Resolve configuration; config warnings go to stderr.
    pub fn resolve(&self, sources: Vec<PathBuf>) -> Result<HearthConfig> {
        let resolved = resolve(&ConfigOverrides {
            home: self.home.clone(),
            config: self.config.clone(),
            sources,
            cwd: None,
        })?;
        for warning in &resolved.warnings {
            eprintln!("Warning: {}", warning);
        }
        Ok(resolved.config)
    }

    pub fn renderer(&self) -> Box<dyn OutcomeRenderer> {
        let format = if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        };
        let unicode = !self.ascii && supports_unicode();
        create_renderer(format, unicode, self.verbose)
    }
}
