//! Import Module
//!
//! Copies selected assets from a source into the home store.
//!
//! ## Structure
//!
//! - `importer` - Single-asset import under an overwrite policy (`import_asset`)
//! - `options` - Selection types (`ImportOptions`, `ImportSelection`)
//! - `result` - Per-item results (`ImportItem`, `ImportStatus`, `ImportSummary`)
//! - `use_case` - Batch selection over a scan (`ImportUseCase`)

mod importer;
mod options;
mod result;
mod use_case;

pub use importer::import_asset;
pub use options::{ImportOptions, ImportSelection};
pub use result::{ImportItem, ImportStatus, ImportSummary};
pub use use_case::ImportUseCase;
