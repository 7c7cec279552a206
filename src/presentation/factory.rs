//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use crate::application::{ImportUseCase, ScanUseCase};
use crate::config::HearthConfig;
use crate::infrastructure::GitTrackedFiles;

/// Type alias for the concrete ScanUseCase with all dependencies
pub type ConcreteScanUseCase = ScanUseCase<GitTrackedFiles>;

/// Create a scan use case backed by git
pub fn create_scan_use_case() -> ConcreteScanUseCase {
    ScanUseCase::new(GitTrackedFiles::new())
}

/// Create an import use case targeting the configured home store
pub fn create_import_use_case(config: &HearthConfig) -> ImportUseCase {
    ImportUseCase::new(&config.home)
}
