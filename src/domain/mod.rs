//! Domain Layer
//!
//! Pure reconciliation logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Assets, conflicts and the scan report
//! - `value_objects/` - Immutable value types (AssetId, ContentHash, Fingerprint)
//! - `services/` - Classification and diff construction
//! - `ports/` - Interface definitions for infrastructure
//!
//! Nothing in here touches the file system or spawns processes. Infrastructure
//! feeds fingerprints and tracked-file sets in; the domain decides.

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
