//! Scan Options

/// Options for the scan use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    /// Attach a short diff to drifted and ambiguous identities
    pub with_diffs: bool,
}

impl ScanOptions {
    pub fn new() -> Self {
        Self { with_diffs: true }
    }

    pub fn with_diffs(mut self, enabled: bool) -> Self {
        self.with_diffs = enabled;
        self
    }
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self::new()
    }
}
