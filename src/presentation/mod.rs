//! Presentation Layer
//!
//! This layer handles:
//! - Creating use cases with infrastructure dependencies
//! - Output formatting (text/JSON)
//!
//! ## Structure
//!
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//! - `output` - Output rendering abstractions
//! - `terminal` - Terminal capability detection

pub mod factory;
pub mod output;
pub mod terminal;

pub use factory::{create_import_use_case, create_scan_use_case};
pub use output::{create_renderer, OutcomeRenderer, OutputFormat};
pub use terminal::supports_unicode;
