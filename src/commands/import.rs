//! Import command handler

use std::path::PathBuf;

use anyhow::{Context, Result};

use hearth::presentation::{create_import_use_case, create_scan_use_case};
use hearth::{AssetId, AssetIdentity, AssetKind, ImportOptions, ImportSummary, ScanOptions};

use super::GlobalArgs;

/// What the user asked to import
#[derive(Debug, Clone)]
pub struct ImportRequest {
    pub all: bool,
    pub kind: Option<AssetKind>,
    pub id: Option<String>,
    pub from: Option<String>,
    pub overwrite: bool,
}

/// Execute the import command.
///
/// Returns the summary so the caller can choose the exit status.
pub fn cmd_import(
    global: &GlobalArgs,
    sources: Vec<PathBuf>,
    request: ImportRequest,
) -> Result<ImportSummary> {
    let options = import_options(request)?;
    let config = global.resolve(sources)?;

    let outcome =
        create_scan_use_case().execute(&config, &ScanOptions::default().with_diffs(false));
    let summary = create_import_use_case(&config).execute(&outcome, &options);

    print!("{}", global.renderer().import(&summary));
    Ok(summary)
}

fn import_options(request: ImportRequest) -> Result<ImportOptions> {
    if request.all {
        return Ok(ImportOptions::all_unsynced().with_overwrite(request.overwrite));
    }

    let (Some(kind), Some(raw)) = (request.kind, request.id) else {
        anyhow::bail!("import needs --all or <KIND> <ID>");
    };
    let id = AssetId::parse(&raw).with_context(|| format!("cannot import '{}'", raw))?;

    let mut options =
        ImportOptions::identity(AssetIdentity::new(kind, id)).with_overwrite(request.overwrite);
    if let Some(from) = request.from {
        options = options.with_from(from);
    }
    Ok(options)
}
