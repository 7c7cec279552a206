//! Scan command handler

use std::path::PathBuf;

use anyhow::Result;

use hearth::presentation::create_scan_use_case;
use hearth::ScanOptions;

use super::GlobalArgs;

/// Execute the scan command
pub fn cmd_scan(global: &GlobalArgs, sources: Vec<PathBuf>, conflicts: bool) -> Result<()> {
    let config = global.resolve(sources)?;
    let outcome = create_scan_use_case().execute(&config, &ScanOptions::default());
    print!("{}", global.renderer().scan(&outcome, conflicts));
    Ok(())
}
