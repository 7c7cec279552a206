//! Import Options

use crate::domain::entities::AssetIdentity;

/// Which assets to import
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportSelection {
    /// One identity, optionally from a named source
    Identity {
        identity: AssetIdentity,
        from: Option<String>,
    },
    /// Every unsynced identity that is not ambiguous
    AllUnsynced,
}

/// Options for the import use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportOptions {
    pub selection: ImportSelection,
    /// Replace an existing home copy as a whole
    pub overwrite: bool,
}

impl ImportOptions {
    pub fn identity(identity: AssetIdentity) -> Self {
        Self {
            selection: ImportSelection::Identity {
                identity,
                from: None,
            },
            overwrite: false,
        }
    }

    pub fn all_unsynced() -> Self {
        Self {
            selection: ImportSelection::AllUnsynced,
            overwrite: false,
        }
    }

    /// Builder: choose the source (no effect on `AllUnsynced`)
    pub fn with_from(mut self, label: impl Into<String>) -> Self {
        if let ImportSelection::Identity { from, .. } = &mut self.selection {
            *from = Some(label.into());
        }
        self
    }

    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }
}
