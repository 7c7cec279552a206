//! Asset discovery
//!
//! - `walker` - Source Walker: finds candidate assets under a source root
//! - `catalog` - Asset Catalog Reader: lists assets already in the home store
//! - `conventions` - Tool-specific sub-paths where assets conventionally live

mod catalog;
mod conventions;
mod walker;

pub use catalog::{read_catalog, HomeCatalog};
pub use conventions::{candidate_roots, PROMPT_SUBPATHS, SKILL_SUBPATHS};
pub use walker::{discover, find_manifest, find_prompts, find_skills};
