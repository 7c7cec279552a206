//! Import Result

use std::path::PathBuf;

use serde::Serialize;

use crate::domain::entities::AssetIdentity;

/// Outcome of one selected asset
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ImportStatus {
    Imported { target: PathBuf },
    Skipped { reason: String },
    Failed { error: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportItem {
    #[serde(flatten)]
    pub identity: AssetIdentity,
    /// Source the copy was taken from, when one was chosen
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(flatten)]
    pub status: ImportStatus,
}

/// Result of an import batch; one item per selected identity
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    pub items: Vec<ImportItem>,
}

impl ImportSummary {
    pub fn imported(&self) -> usize {
        self.count(|s| matches!(s, ImportStatus::Imported { .. }))
    }

    pub fn skipped(&self) -> usize {
        self.count(|s| matches!(s, ImportStatus::Skipped { .. }))
    }

    pub fn failed(&self) -> usize {
        self.count(|s| matches!(s, ImportStatus::Failed { .. }))
    }

    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    fn count(&self, pred: impl Fn(&ImportStatus) -> bool) -> usize {
        self.items.iter().filter(|item| pred(&item.status)).count()
    }
}
