//! Status command handler

use std::path::PathBuf;

use anyhow::Result;

use hearth::presentation::create_scan_use_case;
use hearth::ScanOptions;

use super::GlobalArgs;

/// Execute the status command
pub fn cmd_status(global: &GlobalArgs, sources: Vec<PathBuf>) -> Result<()> {
    let config = global.resolve(sources)?;
    let outcome =
        create_scan_use_case().execute(&config, &ScanOptions::default().with_diffs(false));
    print!("{}", global.renderer().status(&outcome));
    Ok(())
}
