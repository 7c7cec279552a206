//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `ScanUseCase` - Discover, fingerprint and classify every asset identity
//! - `ImportUseCase` - Apply a selection from a scan to the home store
//!
//! ## Services
//!
//! - `report` - Report Builder: unsynced assets, status buckets, conflict ordering

pub mod import;
pub mod report;
pub mod scan;

pub use import::{
    import_asset, ImportItem, ImportOptions, ImportSelection, ImportStatus, ImportSummary,
    ImportUseCase,
};
pub use report::{build_report, build_status, sort_conflicts};
pub use scan::{ScanOptions, ScanOutcome, ScanUseCase};
